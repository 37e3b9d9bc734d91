//! Fuzz target for the CSV reader.
//!
//! The parser must never panic on malformed input, whatever the delimiter
//! or quoting, and must only return tables whose columns share a length.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tablescope::{Parser, ParserConfig};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    // Auto-detected delimiter
    if let Ok((table, meta)) = Parser::new().parse_bytes(data, "fuzz.csv") {
        assert_eq!(meta.row_count, table.row_count());
        for column in table.columns() {
            assert_eq!(column.len(), table.row_count());
        }
    }

    // Fixed delimiter taken from the first byte
    if let Some(&delimiter) = data.first() {
        let parser = Parser::with_config(ParserConfig::default().with_delimiter(delimiter));
        let _ = parser.parse_bytes(&data[1..], "fuzz.csv");
    }
});
