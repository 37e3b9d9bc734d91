//! Integration tests for tablescope.

use std::io::Write;
use tempfile::NamedTempFile;

use tablescope::analysis::{
    classify, correlation_matrix, describe_continuous, frequency_table, missing_counts, scatter,
};
use tablescope::{ColumnClass, Explorer, ExplorerConfig, ParserConfig, TablescopeError, ValueKind};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

/// A small passenger manifest in the shape of the Titanic training set.
fn passengers_csv() -> String {
    let mut data = String::from("PassengerId,Survived,Pclass,Sex,Age,Fare,Embarked\n");
    let sexes = ["male", "female"];
    let ports = ["S", "C", "Q", ""];
    for i in 0..60 {
        let age = if i % 7 == 3 {
            String::new()
        } else {
            format!("{}", 1 + (i * 37) % 70)
        };
        let fare = format!("{:.2}", 5.0 + (i as f64) * 1.75);
        data.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            i + 1,
            (i % 3 == 0) as u8,
            1 + i % 3,
            sexes[i % 2],
            age,
            fare,
            ports[i % 4],
        ));
    }
    data
}

// =============================================================================
// Ingestion
// =============================================================================

#[test]
fn test_parse_kinds_from_file() {
    let file = create_test_file(&passengers_csv());
    let (table, source) = Explorer::new().load(file.path()).expect("Parse failed");

    assert_eq!(source.format, "csv");
    assert_eq!(source.row_count, 60);
    assert_eq!(table.column_count(), 7);
    assert_eq!(table.column("Age").unwrap().kind(), ValueKind::Numeric);
    assert_eq!(table.column("Sex").unwrap().kind(), ValueKind::Text);
    assert_eq!(table.column("Embarked").unwrap().missing_count(), 15);
}

#[test]
fn test_tsv_auto_detect() {
    let content = "x\ty\n1\t2\n3\t4\n";
    let file = create_test_file(content);
    let (table, source) = Explorer::new().load(file.path()).expect("Parse failed");

    assert_eq!(source.format, "tsv");
    assert_eq!(table.column_names(), vec!["x", "y"]);
}

#[test]
fn test_missing_file() {
    let err = Explorer::new().explore("/nonexistent/data.csv").unwrap_err();
    assert!(matches!(err, TablescopeError::Io { .. }));
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn test_passenger_classification() {
    let file = create_test_file(&passengers_csv());
    let (table, _) = Explorer::new().load(file.path()).unwrap();
    let classes = classify(&table);

    assert_eq!(classes.continuous(), vec!["PassengerId", "Age", "Fare"]);
    assert_eq!(classes.categorical(), vec!["Survived", "Pclass", "Sex", "Embarked"]);
}

#[test]
fn test_age_and_city_scenario() {
    let file = create_test_file("age,city\n22,NY\n25,LA\n29,NY\n31,SF\nNA,LA\n");
    let (table, _) = Explorer::new().load(file.path()).unwrap();
    let classes = classify(&table);

    // Four distinct ages plus a missing value stay under the threshold
    assert_eq!(classes.class_of("age"), Some(ColumnClass::Categorical));
    assert_eq!(classes.class_of("city"), Some(ColumnClass::Categorical));
}

#[test]
fn test_thirty_distinct_ages_are_continuous() {
    let mut content = String::from("age,city\n");
    for i in 0..30 {
        content.push_str(&format!("{},{}\n", 20 + i, ["NY", "LA"][i % 2]));
    }
    let file = create_test_file(&content);
    let (table, _) = Explorer::new().load(file.path()).unwrap();
    let classes = classify(&table);

    assert_eq!(classes.continuous(), vec!["age"]);
    assert_eq!(classes.categorical(), vec!["city"]);
}

// =============================================================================
// Statistics
// =============================================================================

#[test]
fn test_describe_scenario() {
    let file = create_test_file("age\n10\n20\n30\n40\nNA\n");
    let (table, _) = Explorer::new().load(file.path()).unwrap();
    let stats = describe_continuous(&table, "age").unwrap();

    assert_eq!(stats.missing_count, 1);
    assert_eq!(stats.count, 4);
    assert_eq!(stats.mean, 25.0);
    assert_eq!(stats.min, 10.0);
    assert_eq!(stats.max, 40.0);
}

#[test]
fn test_infinite_values_keep_quartiles_ordered() {
    let (table, _) = Explorer::new()
        .load_bytes(b"x\ninf\n-inf\n1\n2\n", "extremes.csv")
        .unwrap();
    let stats = describe_continuous(&table, "x").unwrap();

    assert_eq!(stats.count, 4);
    assert_eq!(stats.p25, f64::NEG_INFINITY);
    assert_eq!(stats.p50, 1.5);
    assert_eq!(stats.p75, f64::INFINITY);
    assert!(stats.min <= stats.p25 && stats.p25 <= stats.p50);
    assert!(stats.p50 <= stats.p75 && stats.p75 <= stats.max);
}

#[test]
fn test_frequency_includes_missing_bucket() {
    let file = create_test_file(&passengers_csv());
    let (table, _) = Explorer::new().load(file.path()).unwrap();
    let freq = frequency_table(&table, "Embarked").unwrap();

    assert_eq!(freq.get("S"), 15);
    assert_eq!(freq.missing, 15);
    assert_eq!(freq.total(), 60);

    let pclass = frequency_table(&table, "Pclass").unwrap();
    assert_eq!(pclass.counts.keys().collect::<Vec<_>>(), vec!["1", "2", "3"]);
}

#[test]
fn test_identical_columns_correlate_exactly() {
    let mut content = String::from("a,b\n");
    for i in 0..40 {
        let v = (i as f64 * 0.37).sin() * 100.0;
        content.push_str(&format!("{},{}\n", v, v));
    }
    let file = create_test_file(&content);
    let (table, _) = Explorer::new().load(file.path()).unwrap();
    let matrix = correlation_matrix(&table, &["a", "b"]).unwrap();

    assert_eq!(matrix.get("a", "b"), Some(1.0));
}

#[test]
fn test_constant_column_does_not_fail() {
    let file = create_test_file("x,k\n1,5\n2,5\n3,5\n");
    let (table, _) = Explorer::new().load(file.path()).unwrap();

    let stats = describe_continuous(&table, "k").unwrap();
    assert_eq!(stats.std_dev, 0.0);

    let matrix = correlation_matrix(&table, &["x", "k"]).unwrap();
    assert!(matrix.get("x", "k").unwrap().is_nan());
}

#[test]
fn test_missing_counts_per_column() {
    let file = create_test_file(&passengers_csv());
    let (table, _) = Explorer::new().load(file.path()).unwrap();
    let counts = missing_counts(&table);

    assert_eq!(counts["Age"], 9);
    assert_eq!(counts["Embarked"], 15);
    assert_eq!(counts["Fare"], 0);
}

#[test]
fn test_scatter_points() {
    let file = create_test_file(&passengers_csv());
    let (table, _) = Explorer::new().load(file.path()).unwrap();
    let series = scatter(&table, "Age", "Fare", Some("Sex")).unwrap();

    assert_eq!(series.title, "Age VS Fare");
    assert_eq!(series.points.len(), 51);
    assert!(series.points.iter().all(|p| p.category.is_some()));
}

// =============================================================================
// Full report
// =============================================================================

#[test]
fn test_full_report() {
    let file = create_test_file(&passengers_csv());
    let report = Explorer::new().explore(file.path()).expect("Exploration failed");

    assert_eq!(report.overview.rows, 60);
    assert_eq!(report.overview.duplicate_rows, 0);
    assert_eq!(report.overview.continuous_columns, 3);
    assert_eq!(report.overview.categorical_columns, 4);
    assert_eq!(report.continuous.len(), 3);
    assert_eq!(report.categorical.len(), 4);
    assert_eq!(report.correlation.columns, vec!["PassengerId", "Age", "Fare"]);

    let json = serde_json::to_value(&report).expect("Serialization failed");
    assert_eq!(json["overview"]["features"], 7);
    assert_eq!(json["classification"]["columns"][0]["class"], "continuous");
}

#[test]
fn test_report_with_custom_config() {
    let file = create_test_file("a;b\n1;x\n2;y\n-1;x\n");
    let config = ExplorerConfig::default()
        .with_parser(ParserConfig::default().with_delimiter(b';').with_na_value("-1"))
        .with_histogram_bins(4);
    let report = Explorer::with_config(config).explore(file.path()).unwrap();

    assert_eq!(report.source.format, "csv-semicolon");
    assert_eq!(report.missing[0].missing, 1);
}
