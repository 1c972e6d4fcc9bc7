use crate::chart::{PieChart, ScatterChart};
use crate::data::model::{LaunchTable, PayloadRange, SiteSelection};
use crate::layout::DashboardLayout;
use crate::pipeline::{payload_outcome_chart, site_success_chart};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state of the desktop dashboard, independent of rendering.
pub struct AppState {
    /// Loaded table, shared read-only.
    pub table: LaunchTable,

    /// Widget tree parameters derived from the table.
    pub layout: DashboardLayout,

    /// Current dropdown value.
    pub site: SiteSelection,

    /// Current payload range selection.
    pub payload_range: PayloadRange,

    /// Last computed charts (None if the last computation failed).
    pub pie: Option<PieChart>,
    pub scatter: Option<ScatterChart>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Start from the layout defaults and compute both charts once.
    pub fn new(table: LaunchTable) -> Self {
        let layout = DashboardLayout::new(&table);
        let mut state = Self {
            site: SiteSelection::from(layout.site_dropdown.value.as_str()),
            payload_range: layout.payload_slider.value,
            table,
            layout,
            pie: None,
            scatter: None,
            status_message: None,
        };
        state.recompute_pie();
        state.recompute_scatter();
        state
    }

    /// Dropdown change: both charts depend on the site.
    pub fn set_site(&mut self, site: SiteSelection) {
        if site == self.site {
            return;
        }
        self.site = site;
        self.recompute_pie();
        self.recompute_scatter();
    }

    /// Range change: only the scatter chart depends on it.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if range == self.payload_range {
            return;
        }
        self.payload_range = range;
        self.recompute_scatter();
    }

    fn recompute_pie(&mut self) {
        match site_success_chart(&self.table, &self.site) {
            Ok(chart) => self.pie = Some(chart),
            Err(e) => {
                log::error!("Failed to build site-success chart: {e}");
                self.status_message = Some(format!("Error: {e}"));
                self.pie = None;
            }
        }
    }

    fn recompute_scatter(&mut self) {
        match payload_outcome_chart(&self.table, &self.site, self.payload_range) {
            Ok(chart) => self.scatter = Some(chart),
            Err(e) => {
                log::error!("Failed to build payload-outcome chart: {e}");
                self.status_message = Some(format!("Error: {e}"));
                self.scatter = None;
            }
        }
    }
}
