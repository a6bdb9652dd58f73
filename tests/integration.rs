use std::io::Write;
use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use tempfile::{Builder, NamedTempFile};

use tabsift::data::loader::load_file;
use tabsift::query::{self, AggregationRequest, QueryError, QueryOutcome};
use tabsift::render::{self, OutputFormat};

const PRODUCTS: &str = "\
name,brand,price,rating
iphone 15 pro,apple,999,4.9
galaxy s23 ultra,samsung,1199,4.8
redmi note 12,xiaomi,199,4.6
poco x5 pro,xiaomi,299,4.4
iphone se,apple,429,4.1
";

fn csv_file(contents: &str) -> NamedTempFile {
    let mut tmp = Builder::new().suffix(".csv").tempfile().unwrap();
    write!(tmp, "{}", contents).unwrap();
    tmp
}

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn names(outcome: &QueryOutcome) -> Vec<String> {
    match outcome {
        QueryOutcome::Table(t) => t
            .rows
            .iter()
            .map(|r| r.get("name").unwrap().to_string())
            .collect(),
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn test_filter_and_order_csv() {
    let tmp = csv_file(PRODUCTS);
    let ds = load_file(tmp.path()).unwrap();

    let outcome = query::run(
        &ds.rows,
        &strings(&["rating>=4.5", "price<1000"]),
        Some("price=DESC"),
        None,
    )
    .unwrap();
    assert_eq!(names(&outcome), vec!["iphone 15 pro", "redmi note 12"]);

    let text = render::render(&outcome, &ds.columns, OutputFormat::Pretty).unwrap();
    assert!(text.contains("iphone 15 pro"));
    assert!(!text.contains("galaxy"));
    assert!(text.find("iphone 15 pro").unwrap() < text.find("redmi note 12").unwrap());
}

#[test]
fn test_aggregate_csv() {
    let tmp = csv_file(PRODUCTS);
    let ds = load_file(tmp.path()).unwrap();

    let request = AggregationRequest::from_parts(Some("price".into()), Some("avg".into()))
        .unwrap()
        .unwrap();
    let outcome = query::run(&ds.rows, &strings(&["brand=1"]), None, None);
    // brand is text, so a numeric condition on it fails
    assert!(matches!(outcome, Err(QueryError::NumericCoercion { .. })));

    let outcome = query::run(&ds.rows, &strings(&["rating>4.5"]), None, Some(&request)).unwrap();
    let text = render::render(&outcome, &ds.columns, OutputFormat::Pretty).unwrap();
    // (999 + 1199 + 199) / 3
    assert!(text.contains("799.00"), "{text}");
    assert!(text.contains("AVG"));
}

#[test]
fn test_empty_filter_result() {
    let tmp = csv_file(PRODUCTS);
    let ds = load_file(tmp.path()).unwrap();

    let outcome = query::run(&ds.rows, &strings(&["price>5000"]), None, None).unwrap();
    assert!(names(&outcome).is_empty());
    let text = render::render(&outcome, &ds.columns, OutputFormat::Pretty).unwrap();
    assert!(text.contains("rating"));

    let request = AggregationRequest::from_parts(Some("price".into()), Some("min".into()))
        .unwrap()
        .unwrap();
    assert_eq!(
        query::run(&ds.rows, &strings(&["price>5000"]), None, Some(&request)),
        Err(QueryError::EmptyInput)
    );
}

#[test]
fn test_json_output() {
    let tmp = csv_file(PRODUCTS);
    let ds = load_file(tmp.path()).unwrap();

    let outcome = query::run(&ds.rows, &strings(&["price<300"]), Some("price=asc"), None).unwrap();
    let text = render::render(&outcome, &ds.columns, OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed[0]["name"], "redmi note 12");
    assert_eq!(parsed[1]["price"], "299");
}

#[test]
fn test_parquet_input() {
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("price", DataType::Float64, true),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(vec![1, 2, 3])),
            Arc::new(StringArray::from(vec!["a", "b", "c"])),
            Arc::new(Float64Array::from(vec![Some(2.5), Some(10.0), None])),
        ],
    )
    .unwrap();

    let tmp = Builder::new().suffix(".parquet").tempfile().unwrap();
    let mut writer = ArrowWriter::try_new(tmp.as_file().try_clone().unwrap(), schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();

    let ds = load_file(tmp.path()).unwrap();
    assert_eq!(&*ds.columns, ["id", "name", "price"]);
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.rows[0].get("price"), Some("2.5"));
    assert_eq!(ds.rows[2].get("price"), Some(""));

    let outcome = query::run(&ds.rows, &strings(&["id<3", "price>=2.5"]), None, None).unwrap();
    assert_eq!(names(&outcome), vec!["a", "b"]);
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_file(std::path::Path::new("/definitely/not/here.csv")).unwrap_err();
    assert!(format!("{err:#}").contains("here.csv"));
}
