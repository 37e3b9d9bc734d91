//! Fuzz target for the full exploration pipeline.
//!
//! Classification, statistics, correlation and histograms must never panic
//! on any table the parser accepts.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tablescope::Explorer;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    let explorer = Explorer::new();
    if let Ok((table, source)) = explorer.load_bytes(data, "fuzz.csv") {
        if let Ok(report) = explorer.explore_table(&table, source) {
            for name in table.column_names() {
                let _ = explorer.describe_column(&table, name);
            }
            let _ = serde_json::to_string(&report);
        }
    }
});
