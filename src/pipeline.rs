//! Filter-render pipeline: pure functions of (table, control values) → chart.
//!
//! ```text
//!   SiteSelection ──────────────┐
//!                               ▼
//!   LaunchTable ──► filter ──► indices ──► chart spec
//!                               ▲
//!   PayloadRange ───────────────┘
//! ```
//!
//! Nothing is cached; every call re-filters the whole table.

use crate::chart::{ChartError, ColorStop, PieChart, ScatterChart, ScatterPoint};
use crate::color::ColorMap;
use crate::constants::{MAX_MARKER_SIZE, OUTCOME_AXIS_TITLE, PAYLOAD_AXIS_TITLE, PIE_HOLE};
use crate::data::filter::{count_by_site, payload_outcome_indices, site_success_indices};
use crate::data::model::{LaunchTable, PayloadRange, SiteSelection};

pub fn site_success_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Total Success Launches By all sites".to_string(),
        SiteSelection::Site(name) => format!("Total Success Launches for site {name}"),
    }
}

pub fn payload_outcome_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Payload Mass vs. Success for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload Mass vs. Success for {name}"),
    }
}

/// Pie chart of launch counts per site for the dropdown value.
pub fn site_success_chart(table: &LaunchTable, site: &SiteSelection) -> Result<PieChart, ChartError> {
    let indices = site_success_indices(table, site);
    let counts = count_by_site(table, &indices);
    log::debug!("site-success: site={site} rows={}", indices.len());

    let colors = ColorMap::new(table.sites());
    PieChart::from_counts(site_success_title(site), PIE_HOLE, counts, &colors)
}

/// Scatter chart of payload mass against outcome for the dropdown value and
/// payload range.
pub fn payload_outcome_chart(
    table: &LaunchTable,
    site: &SiteSelection,
    range: PayloadRange,
) -> Result<ScatterChart, ChartError> {
    let indices = payload_outcome_indices(table, site, range);
    log::debug!(
        "payload-outcome: site={site} range=({}, {}) rows={}",
        range.low,
        range.high,
        indices.len()
    );

    let colors = ColorMap::new(table.booster_versions());
    let max_mass = table.payload_extent().high;
    let records = table.records();

    let points = indices
        .iter()
        .map(|&i| {
            let rec = &records[i];
            ScatterPoint {
                payload_mass_kg: rec.payload_mass_kg,
                outcome: rec.outcome,
                size: marker_size(rec.payload_mass_kg, max_mass),
                booster_version: rec.booster_version.clone(),
                color: colors.color_for(&rec.booster_version),
                hover_text: format!("{}", rec.payload_mass_kg),
            }
        })
        .collect();

    let color_scale = colors
        .legend_entries()
        .into_iter()
        .map(|(label, color)| ColorStop { label, color })
        .collect();

    ScatterChart::new(
        payload_outcome_title(site),
        PAYLOAD_AXIS_TITLE,
        OUTCOME_AXIS_TITLE,
        points,
        color_scale,
    )
}

/// Marker size proportional to mass; the table's heaviest payload gets
/// `MAX_MARKER_SIZE`.
fn marker_size(mass: f64, max_mass: f64) -> f64 {
    if max_mass > 0.0 {
        MAX_MARKER_SIZE * mass / max_mass
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::two_site_table;
    use crate::data::model::Outcome;

    #[test]
    fn all_sites_pie_sums_to_successes() {
        let table = two_site_table();
        let pie = site_success_chart(&table, &SiteSelection::All).unwrap();
        assert_eq!(pie.title, "Total Success Launches By all sites");
        assert_eq!(pie.total(), 3);
        let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["A", "B"]);
        assert_eq!(pie.hole, PIE_HOLE);
    }

    #[test]
    fn site_pie_counts_every_outcome() {
        let table = two_site_table();
        let pie = site_success_chart(&table, &SiteSelection::from("B")).unwrap();
        assert_eq!(pie.title, "Total Success Launches for site B");
        assert_eq!(pie.slices.len(), 1);
        assert_eq!(pie.slices[0].label, "B");
        assert_eq!(pie.slices[0].count, 2);
        assert_eq!(pie.slices[0].fraction, 1.0);
    }

    #[test]
    fn unknown_site_gives_empty_charts() {
        let table = two_site_table();
        let site = SiteSelection::from("A-prime");
        let pie = site_success_chart(&table, &site).unwrap();
        assert!(pie.is_empty());
        assert_eq!(pie.title, "Total Success Launches for site A-prime");

        let scatter = payload_outcome_chart(&table, &site, PayloadRange::new(0.0, 10_000.0)).unwrap();
        assert!(scatter.is_empty());
        assert_eq!(scatter.title, "Payload Mass vs. Success for A-prime");
    }

    #[test]
    fn scatter_points_and_encoding() {
        let table = two_site_table();
        let chart = payload_outcome_chart(&table, &SiteSelection::All, PayloadRange::new(0.0, 10_000.0)).unwrap();
        assert_eq!(chart.title, "Payload Mass vs. Success for All Sites");
        assert_eq!(chart.x_title, "Payload Mass (kg)");
        assert_eq!(chart.y_title, "Success");
        assert_eq!(chart.points.len(), 4);

        let heaviest = chart
            .points
            .iter()
            .find(|p| p.payload_mass_kg == 9600.0)
            .unwrap();
        assert_eq!(heaviest.size, MAX_MARKER_SIZE);
        assert_eq!(heaviest.outcome, Outcome::Success);
        assert_eq!(heaviest.hover_text, "9600");

        let light = chart.points.iter().find(|p| p.payload_mass_kg == 2500.0).unwrap();
        assert_eq!(light.size, MAX_MARKER_SIZE * 2500.0 / 9600.0);

        // The scale covers every booster version, not just the visible ones.
        assert_eq!(chart.color_scale.len(), table.booster_versions().len());
        for p in &chart.points {
            let stop = chart.color_scale.iter().find(|s| s.label == p.booster_version).unwrap();
            assert_eq!(stop.color, p.color);
        }
    }

    #[test]
    fn degenerate_range_scatter_is_empty() {
        let table = two_site_table();
        let chart = payload_outcome_chart(&table, &SiteSelection::All, PayloadRange::new(500.0, 500.0)).unwrap();
        assert!(chart.is_empty());
        assert!(!chart.color_scale.is_empty());
    }

    #[test]
    fn charts_are_idempotent() {
        let table = two_site_table();
        let site = SiteSelection::from("A");
        let range = PayloadRange::new(100.0, 5000.0);
        assert_eq!(
            site_success_chart(&table, &site).unwrap(),
            site_success_chart(&table, &site).unwrap()
        );
        assert_eq!(
            payload_outcome_chart(&table, &site, range).unwrap(),
            payload_outcome_chart(&table, &site, range).unwrap()
        );
    }

    #[test]
    fn marker_size_handles_zero_max() {
        assert_eq!(marker_size(0.0, 0.0), 0.0);
        assert_eq!(marker_size(50.0, 100.0), MAX_MARKER_SIZE / 2.0);
    }
}
