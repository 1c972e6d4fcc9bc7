use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{PayloadRange, SiteSelection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – control widgets
// ---------------------------------------------------------------------------

/// Render the left control panel: site dropdown, payload range, colour scale.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            site_dropdown(ui, state);
            ui.separator();
            payload_range(ui, state);
            ui.separator();
            color_scale(ui, state);
        });
}

fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Launch Site");

    let current = state.site.as_str().to_string();
    let mut chosen: Option<SiteSelection> = None;
    egui::ComboBox::from_id_salt(state.layout.site_dropdown.id.as_str())
        .selected_text(current.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in &state.layout.site_dropdown.options {
                if ui
                    .selectable_label(current == option.value, option.label.as_str())
                    .clicked()
                {
                    chosen = Some(SiteSelection::from(option.value.as_str()));
                }
            }
        });

    if let Some(site) = chosen {
        log::debug!("Site selected: {site}");
        state.set_site(site);
    }
}

fn payload_range(ui: &mut Ui, state: &mut AppState) {
    ui.strong(state.layout.payload_label.as_str());

    let slider = &state.layout.payload_slider;
    let bounds = slider.min..=slider.max;
    let step = slider.step;
    let PayloadRange { mut low, mut high } = state.payload_range;

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, bounds.clone())
                .step_by(step)
                .suffix(" kg")
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, bounds)
                .step_by(step)
                .suffix(" kg")
                .text("max"),
        )
        .changed();

    if low_changed || high_changed {
        state.set_payload_range(PayloadRange::new(low, high));
    }

    if state.payload_range.is_empty() {
        ui.label(RichText::new("Empty range: min ≥ max").color(Color32::YELLOW));
    }
}

/// Booster version → marker colour, covering every version in the table.
fn color_scale(ui: &mut Ui, state: &AppState) {
    let Some(scatter) = &state.scatter else {
        return;
    };
    ui.strong("Booster Version");
    for stop in &scatter.color_scale {
        ui.label(RichText::new(format!("● {}", stop.label)).color(Color32::from(stop.color)));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with record counts and status.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new(state.layout.title.as_str()).strong().size(18.0));

        ui.separator();

        let shown = state.scatter.as_ref().map_or(0, |s| s.points.len());
        ui.label(format!(
            "{} launches loaded, {} in payload range",
            state.table.len(),
            shown
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
