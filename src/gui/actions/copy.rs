// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv::to_export_string, gui::app::App};

/// Active table → clipboard, in the chosen export format.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let txt = {
        let table = app.current_table();
        if table.is_empty() {
            logd!("Copy: Clicked, but there's nothing to copy");
            None
        } else {
            let export = &app.state.options.export;
            logf!(
                "Copy: view={:?}, rows={}, headers={}",
                app.state.gui.view,
                table.row_count(),
                table.header_count()
            );
            Some(to_export_string(&table.headers, &table.rows, export.include_headers, export.delim()))
        }
    };

    match txt {
        Some(txt) => {
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        None => app.status("Nothing to copy"),
    }
}
