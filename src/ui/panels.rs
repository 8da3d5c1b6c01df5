use eframe::egui::{self, Color32, DragValue, RichText, Ui};

use crate::inference::predictor::Predictor;
use crate::reading::InputField;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – sensor input form
// ---------------------------------------------------------------------------

/// Render the input form and the Predict button.
pub fn input_panel(ui: &mut Ui, state: &mut AppState, predictor: &Predictor) {
    ui.heading("Sensor inputs");
    ui.separator();

    // The widgets only enforce a floor of zero; the real range check runs
    // when the user presses Predict, so an explanatory message can be shown.
    egui::Grid::new("sensor_inputs")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Frequency (Hz)");
            ui.add(
                DragValue::new(&mut state.reading.frequency_hz)
                    .range(0.0..=f64::MAX)
                    .speed(10.0),
            );
            ui.end_row();

            ui.label("Impedance (Ω)");
            ui.add(
                DragValue::new(&mut state.reading.impedance_ohm)
                    .range(0.0..=f64::MAX)
                    .speed(10.0),
            );
            ui.end_row();

            ui.label("Time (minutes)");
            ui.add(
                DragValue::new(&mut state.reading.time_min)
                    .range(0.0..=f64::MAX)
                    .speed(1.0),
            );
            ui.end_row();
        });

    ui.add_space(8.0);

    if ui.button("Predict").clicked() {
        run_prediction(state, predictor);
    }

    ui.add_space(8.0);
    ui.separator();

    // Remind the user of the valid intervals next to the form.
    let limits = predictor.limits();
    ui.small(format!(
        "{}: {} – {} {}",
        InputField::Frequency,
        limits.frequency.min,
        limits.frequency.max,
        InputField::Frequency.unit()
    ));
    ui.small(format!(
        "{}: {} – {} {}",
        InputField::Impedance,
        limits.impedance.min,
        limits.impedance.max,
        InputField::Impedance.unit()
    ));
    ui.small(format!(
        "{}: {} – {} {}",
        InputField::Time,
        limits.time.min,
        limits.time.max,
        InputField::Time.unit()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Reset inputs").clicked() {
                state.reset();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label("Predicts surface area, pore diameter and pore volume from Pd sensor data");

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Predict action
// ---------------------------------------------------------------------------

/// The one pipeline in the app: validate, predict, store the outcome.
pub fn run_prediction(state: &mut AppState, predictor: &Predictor) {
    match predictor.limits().check(&state.reading) {
        Ok(()) => {
            let prediction = predictor.predict(&state.reading);
            log::info!(
                "predicted {} / {} / {} from {:?}",
                prediction.surface_area_text(),
                prediction.pore_diameter_text(),
                prediction.pore_volume_text(),
                state.reading
            );
            state.set_prediction(prediction);
        }
        Err(violation) => {
            log::warn!("rejected input: {violation}");
            state.set_violation(&violation);
        }
    }
}
