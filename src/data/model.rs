use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::constants::ALL_SITES;

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Binary launch outcome. Serialised as the source `class` value (0 / 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret a raw `class` value. Anything but 0 or 1 is rejected.
    pub fn from_class(class: i64) -> Result<Self, DatasetError> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(DatasetError::InvalidClass(other)),
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.class())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version: String,
}

// ---------------------------------------------------------------------------
// Control values
// ---------------------------------------------------------------------------

/// Dropdown value: the "All Sites" sentinel or a specific launch site.
///
/// Any string other than the sentinel is taken as a site name, whether or not
/// the table contains it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => site == launch_site,
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload range selected on the range control, in kilograms.
///
/// As a filter both bounds are exclusive; `low >= high` selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Strict containment: rows sitting exactly on a bound are excluded.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low < payload_mass_kg && payload_mass_kg < self.high
    }

    pub fn is_empty(&self) -> bool {
        !(self.low < self.high)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("dataset contains no launch records")]
    Empty,
    #[error("class must be 0 or 1, got {0}")]
    InvalidClass(i64),
    #[error("row {row}: payload mass must be a finite non-negative number, got {value}")]
    InvalidPayloadMass { row: usize, value: f64 },
    #[error("row {row}: launch site is empty")]
    EmptySite { row: usize },
}

// ---------------------------------------------------------------------------
// LaunchTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded launch records plus the facts derived from them at load time.
///
/// Immutable once built: filters read it and produce new views, and clones
/// share the same row storage.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Arc<[LaunchRecord]>,
    /// Distinct launch sites in first-seen order.
    sites: Vec<String>,
    /// Distinct booster versions, sorted.
    booster_versions: BTreeSet<String>,
    /// Observed payload mass min / max.
    payload_extent: PayloadRange,
}

impl LaunchTable {
    /// Validate the rows and build the derived indices.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut sites: Vec<String> = Vec::new();
        let mut booster_versions = BTreeSet::new();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for (row, rec) in records.iter().enumerate() {
            if rec.launch_site.is_empty() {
                return Err(DatasetError::EmptySite { row });
            }
            let mass = rec.payload_mass_kg;
            if !mass.is_finite() || mass < 0.0 {
                return Err(DatasetError::InvalidPayloadMass { row, value: mass });
            }
            if !sites.contains(&rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
            booster_versions.insert(rec.booster_version.clone());
            min = min.min(mass);
            max = max.max(mass);
        }

        Ok(LaunchTable {
            records: records.into(),
            sites,
            booster_versions,
            payload_extent: PayloadRange::new(min, max),
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Dropdown values: the sentinel first, then sites in first-seen order.
    pub fn site_options(&self) -> Vec<String> {
        std::iter::once(ALL_SITES.to_string())
            .chain(self.sites.iter().cloned())
            .collect()
    }

    pub fn booster_versions(&self) -> &BTreeSet<String> {
        &self.booster_versions
    }

    pub fn payload_extent(&self) -> PayloadRange {
        self.payload_extent
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows (never true once validated).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(site: &str, mass: f64, class: i64, booster: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: mass,
            outcome: Outcome::from_class(class).unwrap(),
            booster_version: booster.to_string(),
        }
    }

    /// Sites {A, B}; 3 successes and 2 failures.
    pub(crate) fn two_site_table() -> LaunchTable {
        LaunchTable::from_records(vec![
            record("A", 500.0, 1, "F9 v1.1"),
            record("B", 2500.0, 0, "F9 FT"),
            record("A", 4000.0, 1, "F9 FT"),
            record("B", 9600.0, 1, "F9 B5"),
            record("A", 0.0, 0, "F9 v1.0"),
        ])
        .unwrap()
    }

    #[test]
    fn sites_keep_first_seen_order() {
        let table = LaunchTable::from_records(vec![
            record("CCAFS LC-40", 1.0, 1, "x"),
            record("VAFB SLC-4E", 2.0, 1, "x"),
            record("CCAFS LC-40", 3.0, 0, "x"),
            record("KSC LC-39A", 4.0, 1, "x"),
        ])
        .unwrap();
        assert_eq!(table.sites(), ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
        assert_eq!(
            table.site_options(),
            [ALL_SITES, "CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
        );
    }

    #[test]
    fn payload_extent_is_observed_min_max() {
        let table = two_site_table();
        assert_eq!(table.payload_extent(), PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn booster_versions_are_sorted_and_distinct() {
        let table = two_site_table();
        let versions: Vec<&str> = table.booster_versions().iter().map(String::as_str).collect();
        assert_eq!(versions, ["F9 B5", "F9 FT", "F9 v1.0", "F9 v1.1"]);
    }

    #[test]
    fn rejects_empty_and_invalid_rows() {
        assert_eq!(LaunchTable::from_records(vec![]).unwrap_err(), DatasetError::Empty);

        let err = LaunchTable::from_records(vec![record("A", -1.0, 1, "x")]).unwrap_err();
        assert_eq!(err, DatasetError::InvalidPayloadMass { row: 0, value: -1.0 });

        let err = LaunchTable::from_records(vec![
            record("A", 1.0, 1, "x"),
            record("A", f64::NAN, 1, "x"),
        ])
        .unwrap_err();
        assert!(matches!(err, DatasetError::InvalidPayloadMass { row: 1, .. }));

        let err = LaunchTable::from_records(vec![record("", 1.0, 1, "x")]).unwrap_err();
        assert_eq!(err, DatasetError::EmptySite { row: 0 });
    }

    #[test]
    fn outcome_from_class() {
        assert_eq!(Outcome::from_class(1), Ok(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Ok(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), Err(DatasetError::InvalidClass(2)));
        assert_eq!(serde_json::to_string(&Outcome::Success).unwrap(), "1");
    }

    #[test]
    fn site_selection_parses_sentinel() {
        assert_eq!(SiteSelection::from(ALL_SITES), SiteSelection::All);
        assert_eq!(
            SiteSelection::from("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".into())
        );
        let json = serde_json::to_string(&SiteSelection::All).unwrap();
        assert_eq!(json, "\"All Sites\"");
        let back: SiteSelection = serde_json::from_str("\"VAFB SLC-4E\"").unwrap();
        assert!(back.matches("VAFB SLC-4E"));
        assert!(!back.matches("KSC LC-39A"));
    }

    #[test]
    fn payload_range_bounds_are_exclusive() {
        let range = PayloadRange::new(500.0, 1000.0);
        assert!(!range.contains(500.0));
        assert!(range.contains(500.5));
        assert!(!range.contains(1000.0));
        assert!(PayloadRange::new(500.0, 500.0).is_empty());
        assert!(PayloadRange::new(600.0, 500.0).is_empty());
    }
}
