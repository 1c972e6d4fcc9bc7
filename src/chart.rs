//! Chart specifications produced by the filter pipeline.
//!
//! These are plain values: renderers (the egui plot panel, the browser page)
//! only read them. Constructors validate, so a spec that exists is drawable.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::color::{ColorMap, Rgb};
use crate::data::model::Outcome;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("chart title is empty")]
    EmptyTitle,
    #[error("pie slice '{0}' appears more than once")]
    DuplicateLabel(String),
    #[error("pie slice '{0}' has no rows")]
    EmptySlice(String),
    #[error("scatter point {index} has an invalid payload mass {value}")]
    InvalidPoint { index: usize, value: f64 },
    #[error("scatter point {index} uses booster version '{label}' missing from the colour scale")]
    UnknownColor { index: usize, label: String },
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// Share of the chart total, in `[0, 1]`.
    pub fraction: f64,
    pub color: Rgb,
}

/// Donut chart of row counts per label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    /// Hole radius as a fraction of the outer radius.
    pub hole: f64,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Build from `(label, count)` pairs, computing each slice's fraction.
    /// An empty `counts` gives a valid chart with no slices.
    pub fn from_counts(
        title: impl Into<String>,
        hole: f64,
        counts: Vec<(String, usize)>,
        colors: &ColorMap,
    ) -> Result<Self, ChartError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ChartError::EmptyTitle);
        }

        let mut seen = BTreeSet::new();
        for (label, count) in &counts {
            if !seen.insert(label.as_str()) {
                return Err(ChartError::DuplicateLabel(label.clone()));
            }
            if *count == 0 {
                return Err(ChartError::EmptySlice(label.clone()));
            }
        }

        let total: usize = counts.iter().map(|(_, n)| n).sum();
        let slices = counts
            .into_iter()
            .map(|(label, count)| PieSlice {
                fraction: count as f64 / total as f64,
                color: colors.color_for(&label),
                label,
                count,
            })
            .collect();

        Ok(PieChart {
            title,
            hole: hole.clamp(0.0, 0.95),
            slices,
        })
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Marker size, proportional to the payload mass.
    pub size: f64,
    pub booster_version: String,
    pub color: Rgb,
    pub hover_text: String,
}

/// One entry of the visible colour scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub label: String,
    pub color: Rgb,
}

/// Payload mass (x) against outcome (y), coloured by booster version.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub points: Vec<ScatterPoint>,
    pub color_scale: Vec<ColorStop>,
}

impl ScatterChart {
    pub fn new(
        title: impl Into<String>,
        x_title: impl Into<String>,
        y_title: impl Into<String>,
        points: Vec<ScatterPoint>,
        color_scale: Vec<ColorStop>,
    ) -> Result<Self, ChartError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ChartError::EmptyTitle);
        }

        let labels: BTreeSet<&str> = color_scale.iter().map(|s| s.label.as_str()).collect();
        for (index, p) in points.iter().enumerate() {
            let mass = p.payload_mass_kg;
            if !mass.is_finite() || mass < 0.0 || !p.size.is_finite() || p.size < 0.0 {
                return Err(ChartError::InvalidPoint { index, value: mass });
            }
            if !labels.contains(p.booster_version.as_str()) {
                return Err(ChartError::UnknownColor {
                    index,
                    label: p.booster_version.clone(),
                });
            }
        }

        Ok(ScatterChart {
            title,
            x_title: x_title.into(),
            y_title: y_title.into(),
            points,
            color_scale,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
