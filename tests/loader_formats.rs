use std::path::PathBuf;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float32Array, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use launch_dashboard::data::loader::load_file;
use launch_dashboard::data::model::{Outcome, PayloadRange};
use parquet::arrow::ArrowWriter;

const CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version
1,CCAFS LC-40,0,0,F9 v1.0  B0003
2,KSC LC-39A,1,2490,F9 FT B1031.1
3,VAFB SLC-4E,1,9600,F9 FT B1026
4,KSC LC-39A,0,5600,F9 FT B1030
";

const JSON: &str = r#"[
  {"Flight Number": 1, "Launch Site": "CCAFS LC-40", "class": 0, "Payload Mass (kg)": 0, "Booster Version": "F9 v1.0  B0003"},
  {"Flight Number": 2, "Launch Site": "KSC LC-39A", "class": 1, "Payload Mass (kg)": 2490.0, "Booster Version": "F9 FT B1031.1"},
  {"Flight Number": 3, "Launch Site": "VAFB SLC-4E", "class": 1, "Payload Mass (kg)": 9600, "Booster Version": "F9 FT B1026"},
  {"Flight Number": 4, "Launch Site": "KSC LC-39A", "class": 0, "Payload Mass (kg)": 5600, "Booster Version": "F9 FT B1030"}
]"#;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("launch-dashboard-{}-{name}", std::process::id()))
}

/// Int32 class and Float32 mass, as Polars may write them.
fn write_parquet(path: &PathBuf) {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int32, false),
        Field::new("Payload Mass (kg)", DataType::Float32, false),
        Field::new("Booster Version", DataType::Utf8, false),
    ]));
    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(vec![
            "CCAFS LC-40",
            "KSC LC-39A",
            "VAFB SLC-4E",
            "KSC LC-39A",
        ])),
        Arc::new(Int32Array::from(vec![0, 1, 1, 0])),
        Arc::new(Float32Array::from(vec![0.0, 2490.0, 9600.0, 5600.0])),
        Arc::new(StringArray::from(vec![
            "F9 v1.0  B0003",
            "F9 FT B1031.1",
            "F9 FT B1026",
            "F9 FT B1030",
        ])),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();
    let file = std::fs::File::create(path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
}

#[test]
fn csv_json_and_parquet_load_the_same_table() {
    let csv_path = temp_path("launches.csv");
    let json_path = temp_path("launches.json");
    let parquet_path = temp_path("launches.parquet");
    std::fs::write(&csv_path, CSV).unwrap();
    std::fs::write(&json_path, JSON).unwrap();
    write_parquet(&parquet_path);

    let from_csv = load_file(&csv_path).unwrap();
    let from_json = load_file(&json_path).unwrap();
    let from_parquet = load_file(&parquet_path).unwrap();

    assert_eq!(from_csv.records(), from_json.records());
    assert_eq!(from_csv.records(), from_parquet.records());
    assert_eq!(from_csv.sites(), ["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
    assert_eq!(from_parquet.payload_extent(), PayloadRange::new(0.0, 9600.0));
    assert_eq!(from_json.records()[1].outcome, Outcome::Success);

    for p in [csv_path, json_path, parquet_path] {
        let _ = std::fs::remove_file(p);
    }
}

#[test]
fn header_only_file_is_fatal() {
    let path = temp_path("empty.csv");
    std::fs::write(&path, "Launch Site,Payload Mass (kg),class,Booster Version\n").unwrap();
    let err = load_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("no launch records"));
    let _ = std::fs::remove_file(path);
}

#[test]
fn parquet_missing_column_is_fatal() {
    let path = temp_path("no-class.parquet");
    let schema = Arc::new(Schema::new(vec![Field::new("Launch Site", DataType::Utf8, false)]));
    let columns: Vec<ArrayRef> = vec![Arc::new(StringArray::from(vec!["KSC LC-39A"]))];
    let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();
    let file = std::fs::File::create(&path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();

    let err = load_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("missing"));
    let _ = std::fs::remove_file(path);
}
