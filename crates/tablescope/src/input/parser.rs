//! CSV/TSV parser with delimiter detection and column kind inference.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::SourceMetadata;
use crate::error::{Result, TablescopeError};
use crate::table::{Column, Table};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Cell contents treated as missing by default.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
    /// Trimmed cell contents that mark a missing value.
    pub na_values: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ParserConfig {
    /// Use a fixed delimiter instead of auto-detection.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Stop reading after `rows` data rows.
    pub fn with_max_rows(mut self, rows: usize) -> Self {
        self.max_rows = Some(rows);
        self
    }

    /// Treat an additional marker as missing.
    pub fn with_na_value(mut self, marker: impl Into<String>) -> Self {
        self.na_values.push(marker.into());
        self
    }
}

/// Parses delimited text into a typed [`Table`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the table and its metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();
        let io_err = |source| TablescopeError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(io_err)?;

        self.parse_bytes(&contents, path)
    }

    /// Parse in-memory contents, e.g. an uploaded file. `name` labels the source.
    pub fn parse_bytes(
        &self,
        bytes: &[u8],
        name: impl AsRef<Path>,
    ) -> Result<(Table, SourceMetadata)> {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes)?,
        };
        log::debug!("using delimiter {:?}", delimiter as char);

        let (headers, rows) = self.read_records(bytes, delimiter)?;
        let table = self.build_table(headers, rows)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let metadata = SourceMetadata::new(
            name.as_ref().to_path_buf(),
            hash,
            bytes.len() as u64,
            format,
            table.row_count(),
            table.column_count(),
        );
        log::debug!(
            "parsed {}: {} rows x {} columns",
            metadata.file,
            metadata.row_count,
            metadata.column_count
        );

        Ok((table, metadata))
    }

    /// Read headers and rectangular string rows.
    fn read_records(&self, bytes: &[u8], delimiter: u8) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if self.config.max_rows.is_some_and(|max| row_idx >= max) {
                break;
            }
            let record = result?;
            rows.push(record.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        }

        let headers: Vec<String> = if self.config.has_header {
            dedupe_headers(reader.headers()?.iter().map(|s| s.trim().to_string()))
        } else {
            let width = rows.iter().map(Vec::len).max().unwrap_or(0);
            (0..width).map(|i| format!("column_{}", i + 1)).collect()
        };

        if headers.is_empty() {
            return Err(TablescopeError::EmptyTable("No columns found".to_string()));
        }
        if rows.is_empty() {
            return Err(TablescopeError::EmptyTable("No data rows found".to_string()));
        }

        // Pad short rows, truncate long ones
        let expected_cols = headers.len();
        for row in &mut rows {
            row.resize(expected_cols, String::new());
        }

        Ok((headers, rows))
    }

    /// Convert string rows into typed columns.
    fn build_table(&self, headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Table> {
        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let cells: Vec<&str> = rows.iter().map(|row| row[index].as_str()).collect();
                self.infer_column(name, &cells)
            })
            .collect();
        Table::new(columns)
    }

    /// Numeric if every non-missing cell parses as a float, text otherwise.
    fn infer_column(&self, name: String, cells: &[&str]) -> Column {
        let numbers: Option<Vec<Option<f64>>> = cells
            .iter()
            .map(|cell| {
                if self.is_missing(cell) {
                    Some(None)
                } else {
                    cell.trim().parse::<f64>().ok().map(Some)
                }
            })
            .collect();

        match numbers {
            Some(values) => Column::numeric(name, values),
            None => {
                log::debug!("column '{}' holds text values", name);
                let values = cells
                    .iter()
                    .map(|cell| (!self.is_missing(cell)).then(|| cell.to_string()))
                    .collect();
                Column::text(name, values)
            }
        }
    }

    /// Check if a cell represents a missing value.
    fn is_missing(&self, cell: &str) -> bool {
        let trimmed = cell.trim();
        self.config.na_values.iter().any(|na| na == trimmed)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Suffix repeated header names with `.1`, `.2`, … so every column is addressable.
///
/// A suffixed name that is itself taken (as in `a,a,a.1`) keeps counting
/// until it is unused.
fn dedupe_headers(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut next_suffix: HashMap<String, usize> = HashMap::new();
    names
        .map(|name| {
            let mut unique = name.clone();
            if used.contains(&unique) {
                let suffix = next_suffix.entry(name.clone()).or_insert(0);
                loop {
                    *suffix += 1;
                    unique = format!("{}.{}", name, suffix);
                    if !used.contains(&unique) {
                        break;
                    }
                }
            }
            used.insert(unique.clone());
            unique
        })
        .collect()
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    // Lossy so that invalid UTF-8 is reported by the CSV reader, not here
    let text = String::from_utf8_lossy(bytes);
    let lines: Vec<&str> = text
        .lines()
        .take(10)
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(TablescopeError::EmptyTable("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; tabs get a small bonus
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ValueKind;

    fn parse(data: &[u8]) -> Table {
        Parser::new().parse_bytes(data, "test.csv").unwrap().0
    }

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_parse_typed_columns() {
        let table = parse(b"name,age,city\nAlice,30,NYC\nBob,NA,LA\nCarol,41.5,");

        assert_eq!(table.column_names(), vec!["name", "age", "city"]);
        assert_eq!(table.row_count(), 3);

        let age = table.column("age").unwrap();
        assert_eq!(age.kind(), ValueKind::Numeric);
        assert_eq!(age.as_numeric().unwrap(), &[Some(30.0), None, Some(41.5)]);

        let city = table.column("city").unwrap();
        assert_eq!(city.kind(), ValueKind::Text);
        assert_eq!(city.missing_count(), 1);
    }

    #[test]
    fn test_mixed_column_is_text() {
        let table = parse(b"code\n1\n2\nx3\n");
        assert_eq!(table.column("code").unwrap().kind(), ValueKind::Text);
    }

    #[test]
    fn test_headers_trimmed_and_deduplicated() {
        let table = parse(b" a ,b,a\n1,2,3\n");
        assert_eq!(table.column_names(), vec!["a", "b", "a.1"]);
    }

    #[test]
    fn test_dedupe_skips_names_already_taken() {
        let table = parse(b"a,a,a.1\n1,2,3\n");
        assert_eq!(table.column_names(), vec!["a", "a.1", "a.1.1"]);

        let third = table.column("a.1.1").unwrap();
        assert_eq!(third.as_numeric().unwrap(), &[Some(3.0)]);
        assert_eq!(table.column("a.1").unwrap().as_numeric().unwrap(), &[Some(2.0)]);
    }

    #[test]
    fn test_invalid_utf8_is_a_csv_error() {
        let err = Parser::new()
            .parse_bytes(b"caf\xe9,b\n1,2\n", "latin1.csv")
            .unwrap_err();
        assert!(matches!(err, TablescopeError::Csv(_)), "got {:?}", err);
    }

    #[test]
    fn test_short_rows_are_padded_as_missing() {
        let table = parse(b"a,b,c\n1,2,3\n4,5\n");
        let c = table.column("c").unwrap();
        assert!(c.is_missing(1));
    }

    #[test]
    fn test_header_only_is_empty() {
        let err = Parser::new().parse_bytes(b"a,b,c\n", "x.csv").unwrap_err();
        assert!(matches!(err, TablescopeError::EmptyTable(_)));
    }

    #[test]
    fn test_custom_na_marker() {
        let config = ParserConfig::default().with_na_value("-999");
        let (table, _) = Parser::with_config(config)
            .parse_bytes(b"x\n1\n-999\n3\n", "x.csv")
            .unwrap();
        assert_eq!(table.column("x").unwrap().missing_count(), 1);
    }

    #[test]
    fn test_max_rows() {
        let config = ParserConfig::default().with_max_rows(2);
        let (table, meta) = Parser::with_config(config)
            .parse_bytes(b"x\n1\n2\n3\n", "x.csv")
            .unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(meta.row_count, 2);
    }

    #[test]
    fn test_metadata_hash_and_format() {
        let (_, meta) = Parser::new()
            .parse_bytes(b"a\tb\n1\t2\n", "data/sample.tsv")
            .unwrap();
        assert_eq!(meta.file, "sample.tsv");
        assert_eq!(meta.format, "tsv");
        assert!(meta.hash.starts_with("sha256:"));
    }
}
