//! Dashboard constants and configuration

/// Launch records file, resolved against the working directory.
pub const DATA_FILE: &str = "spacex_launch_geo.csv";

/// Address the browser dashboard is served on.
pub const SERVER_ADDR: &str = "127.0.0.1:8050";

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Dropdown sentinel meaning "no site filter".
pub const ALL_SITES: &str = "All Sites";
pub const SITE_PLACEHOLDER: &str = "Select a Launch Site";

// Displayed bounds of the payload range control. These stay fixed whatever
// the observed payload extent is; only the default selection follows the data.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

/// Donut hole as a fraction of the pie radius.
pub const PIE_HOLE: f64 = 0.3;

/// Marker size given to the heaviest payload of the table.
pub const MAX_MARKER_SIZE: f64 = 40.0;

pub const PAYLOAD_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_TITLE: &str = "Success";

// Element ids shared between the layout and the browser page.
pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";
