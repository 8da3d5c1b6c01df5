use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Predicted properties (central panel)
// ---------------------------------------------------------------------------

/// Render the three predicted material properties.
pub fn result_panel(ui: &mut Ui, state: &AppState) {
    let prediction = match &state.prediction {
        Some(p) => p,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Enter sensor readings and press Predict");
            });
            return;
        }
    };

    ui.heading("Predicted properties");
    ui.separator();

    egui::Grid::new("prediction_results")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            ui.label(RichText::new("Surface Area").strong());
            ui.label(prediction.surface_area_text());
            ui.end_row();

            ui.label(RichText::new("Pore Diameter").strong());
            ui.label(prediction.pore_diameter_text());
            ui.end_row();

            ui.label(RichText::new("Pore Volume").strong());
            ui.label(prediction.pore_volume_text());
            ui.end_row();
        });
}
