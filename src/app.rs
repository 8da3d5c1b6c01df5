use eframe::egui;

use crate::inference::predictor::Predictor;
use crate::state::AppState;
use crate::ui::{panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AerogelApp {
    pub state: AppState,
    /// Loaded artifacts; read-only for the process lifetime.
    predictor: Predictor,
}

impl AerogelApp {
    pub fn new(predictor: Predictor) -> Self {
        Self {
            state: AppState::default(),
            predictor,
        }
    }
}

impl eframe::App for AerogelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: sensor inputs ----
        egui::SidePanel::left("input_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::input_panel(ui, &mut self.state, &self.predictor);
            });

        // ---- Central panel: predicted properties ----
        egui::CentralPanel::default().show(ctx, |ui| {
            results::result_panel(ui, &self.state);
        });
    }
}
