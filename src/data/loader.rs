use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::{Deserialize, Serialize};

use super::model::{DatasetError, LaunchRecord, LaunchTable, Outcome};

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

// ---------------------------------------------------------------------------
// Source row layout
// ---------------------------------------------------------------------------

/// One row as it appears in the source file. Columns are matched by name;
/// any other columns present in the file are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRow {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "class")]
    pub class: i64,
    #[serde(rename = "Booster Version")]
    pub booster_version: String,
}

impl TryFrom<LaunchRow> for LaunchRecord {
    type Error = DatasetError;

    fn try_from(row: LaunchRow) -> Result<Self, Self::Error> {
        Ok(LaunchRecord {
            outcome: Outcome::from_class(row.class)?,
            launch_site: row.launch_site,
            payload_mass_kg: row.payload_mass_kg,
            booster_version: row.booster_version,
        })
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with at least the four launch columns
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – same column names; numeric columns may be int or float
pub fn load_file(path: &Path) -> Result<LaunchTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    let table = LaunchTable::from_records(records)
        .with_context(|| format!("validating {}", path.display()))?;
    log::info!(
        "Loaded {} launch records from {} ({} sites, {} booster versions)",
        table.len(),
        path.display(),
        table.sites().len(),
        table.booster_versions().len()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<LaunchRecord>> {
    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<LaunchRow>().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let record = LaunchRecord::try_from(row).with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, i.e. what `df.to_json(orient='records')` writes.
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<LaunchRow> = serde_json::from_str(&text).context("parsing JSON")?;

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| LaunchRecord::try_from(row).with_context(|| format!("Row {i}")))
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load launch records from a Parquet file written by Pandas or Polars.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        read_batch(&batch, &mut records)?;
    }
    Ok(records)
}

fn read_batch(batch: &RecordBatch, out: &mut Vec<LaunchRecord>) -> Result<()> {
    let site_col = column(batch, COL_LAUNCH_SITE)?;
    let mass_col = column(batch, COL_PAYLOAD_MASS)?;
    let class_col = column(batch, COL_CLASS)?;
    let booster_col = column(batch, COL_BOOSTER_VERSION)?;

    let offset = out.len();
    for row in 0..batch.num_rows() {
        let ctx = || format!("Row {}", offset + row);
        let launch_row = LaunchRow {
            launch_site: extract_string(site_col, row).with_context(ctx)?,
            payload_mass_kg: extract_f64(mass_col, row).with_context(ctx)?,
            class: extract_i64(class_col, row).with_context(ctx)?,
            booster_version: extract_string(booster_col, row).with_context(ctx)?,
        };
        out.push(LaunchRecord::try_from(launch_row).with_context(ctx)?);
    }
    Ok(())
}

// -- Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Arc<dyn Array>> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<Float64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = any.downcast_ref::<Float32Array>() {
        Ok(f64::from(arr.value(row)))
    } else if let Some(arr) = any.downcast_ref::<Int64Array>() {
        Ok(arr.value(row) as f64)
    } else if let Some(arr) = any.downcast_ref::<Int32Array>() {
        Ok(f64::from(arr.value(row)))
    } else {
        bail!("Expected numeric column, got {:?}", col.data_type())
    }
}

/// `class` is written as an integer by Pandas, but a float column holding
/// whole numbers is accepted as well.
fn extract_i64(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in integer column");
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<Int64Array>() {
        return Ok(arr.value(row));
    }
    if let Some(arr) = any.downcast_ref::<Int32Array>() {
        return Ok(i64::from(arr.value(row)));
    }
    let v = extract_f64(col, row)?;
    if v.fract() != 0.0 {
        bail!("Expected whole number, got {v}");
    }
    Ok(v as i64)
}
