use eframe::egui;
use egui_extras::{Size, StripBuilder};

use crate::data::model::LaunchTable;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashboardApp {
    pub state: AppState,
}

impl LaunchDashboardApp {
    pub fn new(table: LaunchTable) -> Self {
        Self {
            state: AppState::new(table),
        }
    }
}

impl eframe::App for LaunchDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::relative(0.45))
                .size(Size::remainder())
                .vertical(|mut strip| {
                    strip.cell(|ui| plot::pie_chart(ui, self.state.pie.as_ref()));
                    strip.cell(|ui| plot::scatter_chart(ui, self.state.scatter.as_ref()));
                });
        });
    }
}
