// src/gui/components/tabs.rs
//
// Top tabs: Reviews | Word frequencies. Switching only changes which
// prebuilt table the central panel draws.

use eframe::egui;

use crate::config::state::View;
use crate::gui::app::App;

const TABS: [(View, &str); 2] = [(View::Reviews, "Reviews"), (View::Frequencies, "Word frequencies")];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for (view, title) in TABS {
            let selected = app.state.gui.view == view;
            let label = match view {
                View::Reviews => format!("{title} ({})", app.records.len()),
                View::Frequencies => format!("{title} ({})", app.frequencies.len()),
            };
            if ui.selectable_label(selected, label).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", app.state.gui.view, view);
                app.state.gui.view = view;
            }
        }

        if app.state.gui.view == View::Frequencies {
            ui.separator();
            ui.label("Show top");
            let before = app.state.gui.top_words;
            ui.add(egui::DragValue::new(&mut app.state.gui.top_words).range(10..=10_000));
            if app.state.gui.top_words != before {
                app.rebuild_views();
            }
        }
    });
}
