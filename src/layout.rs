use serde::Serialize;

use crate::constants::{
    ALL_SITES, DASHBOARD_TITLE, PAYLOAD_SLIDER_ID, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN,
    PAYLOAD_SLIDER_STEP, PIE_CHART_ID, SCATTER_CHART_ID, SITE_DROPDOWN_ID, SITE_PLACEHOLDER,
};
use crate::data::model::{LaunchTable, PayloadRange};

// ---------------------------------------------------------------------------
// Dashboard layout: the fixed widget tree, filled in from the loaded table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub placeholder: String,
    pub searchable: bool,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeMark {
    pub value: f64,
    pub label: String,
}

/// Two-handle range control. `min`/`max` are the displayed bounds, `value`
/// the initial selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeControl {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<RangeMark>,
    pub value: PayloadRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_dropdown: Dropdown,
    pub pie_chart_id: String,
    pub payload_label: String,
    pub payload_slider: RangeControl,
    pub scatter_chart_id: String,
}

impl DashboardLayout {
    pub fn new(table: &LaunchTable) -> Self {
        let options = table
            .site_options()
            .into_iter()
            .map(|site| DropdownOption {
                label: site.clone(),
                value: site,
            })
            .collect();

        let extent = table.payload_extent();
        if extent.low < PAYLOAD_SLIDER_MIN || extent.high > PAYLOAD_SLIDER_MAX {
            log::warn!(
                "Observed payload range {}..{} kg exceeds the displayed slider range {}..{} kg",
                extent.low,
                extent.high,
                PAYLOAD_SLIDER_MIN,
                PAYLOAD_SLIDER_MAX
            );
        }

        DashboardLayout {
            title: DASHBOARD_TITLE.to_string(),
            site_dropdown: Dropdown {
                id: SITE_DROPDOWN_ID.to_string(),
                options,
                placeholder: SITE_PLACEHOLDER.to_string(),
                searchable: true,
                value: ALL_SITES.to_string(),
            },
            pie_chart_id: PIE_CHART_ID.to_string(),
            payload_label: "Payload range (Kg):".to_string(),
            payload_slider: RangeControl {
                id: PAYLOAD_SLIDER_ID.to_string(),
                min: PAYLOAD_SLIDER_MIN,
                max: PAYLOAD_SLIDER_MAX,
                step: PAYLOAD_SLIDER_STEP,
                marks: slider_marks(),
                value: extent,
            },
            scatter_chart_id: SCATTER_CHART_ID.to_string(),
        }
    }
}

/// A mark every step across the displayed range, labelled `"{n} kg"`.
fn slider_marks() -> Vec<RangeMark> {
    let n = ((PAYLOAD_SLIDER_MAX - PAYLOAD_SLIDER_MIN) / PAYLOAD_SLIDER_STEP).round() as usize;
    (0..=n)
        .map(|i| {
            let value = PAYLOAD_SLIDER_MIN + i as f64 * PAYLOAD_SLIDER_STEP;
            RangeMark {
                value,
                label: format!("{value} kg"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::two_site_table;

    #[test]
    fn layout_from_table() {
        let layout = DashboardLayout::new(&two_site_table());
        assert_eq!(layout.title, "SpaceX Launch Records Dashboard");

        let values: Vec<&str> = layout
            .site_dropdown
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, ["All Sites", "A", "B"]);
        assert_eq!(layout.site_dropdown.value, "All Sites");

        // Displayed bounds are fixed; the default selection follows the data.
        assert_eq!(layout.payload_slider.min, 0.0);
        assert_eq!(layout.payload_slider.max, 10_000.0);
        assert_eq!(layout.payload_slider.value, PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn marks_every_thousand_kg() {
        let marks = slider_marks();
        assert_eq!(marks.len(), 11);
        assert_eq!(marks[0].label, "0 kg");
        assert_eq!(marks[10].value, 10_000.0);
        assert_eq!(marks[10].label, "10000 kg");
    }
}
