use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use launch_dashboard::data::loader::{
    COL_BOOSTER_VERSION, COL_CLASS, COL_LAUNCH_SITE, COL_PAYLOAD_MASS, LaunchRow,
};
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster families in flight order, with the payload ceiling and success
/// rate each era had.
const ERAS: &[(&str, f64, f64)] = &[
    ("F9 v1.0", 700.0, 0.2),
    ("F9 v1.1", 4_500.0, 0.35),
    ("F9 FT", 9_600.0, 0.75),
    ("F9 B4", 9_600.0, 0.8),
    ("F9 B5", 15_600.0, 0.95),
];

const SITES: &[&str] = &["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

fn generate(rng: &mut SimpleRng, per_era: usize) -> Vec<LaunchRow> {
    let mut rows = Vec::new();
    let mut serial = 1000u32;
    for &(family, ceiling, success_rate) in ERAS {
        for _ in 0..per_era {
            serial += 1;
            rows.push(LaunchRow {
                launch_site: rng.pick(SITES).to_string(),
                payload_mass_kg: (rng.next_f64() * ceiling).round(),
                class: i64::from(rng.next_f64() < success_rate),
                booster_version: format!("{family}  B{serial}"),
            });
        }
    }
    rows
}

fn write_csv(path: &str, rows: &[LaunchRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &str, rows: &[LaunchRow]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new(COL_LAUNCH_SITE, DataType::Utf8, false),
        Field::new(COL_PAYLOAD_MASS, DataType::Float64, false),
        Field::new(COL_CLASS, DataType::Int64, false),
        Field::new(COL_BOOSTER_VERSION, DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.launch_site.as_str()))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.payload_mass_kg))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.class))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.booster_version.as_str()))),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate(&mut rng, 12);

    write_csv("sample_launches.csv", &rows)?;
    write_parquet("sample_launches.parquet", &rows)?;

    println!(
        "Wrote {} launches to sample_launches.csv and sample_launches.parquet",
        rows.len()
    );
    Ok(())
}
