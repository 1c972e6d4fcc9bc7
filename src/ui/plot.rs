use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::chart::{PieChart, ScatterChart};
use crate::constants::{PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN};

/// Vertices per full turn of the pie outline.
const PIE_RESOLUTION: f64 = 180.0;

/// Smallest drawn marker radius, so zero-mass payloads stay visible.
const MIN_MARKER_RADIUS: f32 = 1.5;

// ---------------------------------------------------------------------------
// Site-success pie chart
// ---------------------------------------------------------------------------

/// Render the pie chart as filled wedges in an equal-aspect plot.
pub fn pie_chart(ui: &mut Ui, chart: Option<&PieChart>) {
    let Some(chart) = chart else {
        empty_placeholder(ui, "Chart unavailable");
        return;
    };
    ui.heading(chart.title.as_str());

    if chart.is_empty() {
        empty_placeholder(ui, "No launches match this selection");
        return;
    }

    Plot::new("success_pie_chart")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            // Start at 12 o'clock and go clockwise.
            let mut start = FRAC_PI_2;
            for slice in &chart.slices {
                let sweep = slice.fraction * TAU;
                let end = start - sweep;

                let wedge: PlotPoints = wedge_outline(start, end, chart.hole).into_iter().collect();
                plot_ui.polygon(
                    Polygon::new(wedge)
                        .name(&slice.label)
                        .fill_color(Color32::from(slice.color))
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );

                let mid = (start + end) / 2.0;
                let r = (1.0 + chart.hole) / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(r * mid.cos(), r * mid.sin()),
                    RichText::new(format!("{:.1}%", slice.fraction * 100.0)).strong(),
                ));

                start = end;
            }
        });
}

/// Outer arc from `start` to `end`, then the inner arc back, radius 1.
fn wedge_outline(start: f64, end: f64, hole: f64) -> Vec<[f64; 2]> {
    let steps = (((start - end).abs() / TAU) * PIE_RESOLUTION).ceil().max(2.0) as usize;

    let mut points = arc(start, end, 1.0, steps);
    if hole > 0.0 {
        points.extend(arc(end, start, hole, steps));
    } else {
        points.push([0.0, 0.0]);
    }
    points
}

fn arc(from: f64, to: f64, radius: f64, steps: usize) -> Vec<[f64; 2]> {
    (0..=steps)
        .map(|i| {
            let a = from + (to - from) * i as f64 / steps as f64;
            [radius * a.cos(), radius * a.sin()]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Payload-outcome scatter chart
// ---------------------------------------------------------------------------

/// Render the scatter chart; one marker per launch, sized by payload mass and
/// coloured by booster version.
pub fn scatter_chart(ui: &mut Ui, chart: Option<&ScatterChart>) {
    let Some(chart) = chart else {
        empty_placeholder(ui, "Chart unavailable");
        return;
    };
    ui.heading(chart.title.as_str());

    Plot::new("success_payload_scatter_chart")
        .legend(Legend::default())
        .x_axis_label(chart.x_title.as_str())
        .y_axis_label(chart.y_title.as_str())
        .include_x(PAYLOAD_SLIDER_MIN)
        .include_x(PAYLOAD_SLIDER_MAX)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Markers sharing a booster version share one legend entry.
            for p in &chart.points {
                let radius = ((p.size / 2.0) as f32).max(MIN_MARKER_RADIUS);
                let points: PlotPoints = vec![[p.payload_mass_kg, f64::from(p.outcome.class())]]
                    .into_iter()
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&p.booster_version)
                        .color(Color32::from(p.color))
                        .radius(radius)
                        .filled(true),
                );
            }
        });
}

fn empty_placeholder(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(RichText::new(text).italics().color(Color32::GRAY));
    });
}
