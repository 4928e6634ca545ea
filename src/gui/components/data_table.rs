// src/gui/components/data_table.rs
//
// Draws the active table (reviews or word counts). Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{config::state::View, core::sanitize::preview, gui::app::App};

const ROW_H: f32 = 20.0;
const CELL_PREVIEW_CHARS: usize = 160;

/// Starting widths per column; unknown columns get 120.
fn preferred_widths(view: View) -> &'static [f32] {
    match view {
        // name, country, count, date, stars, title, text
        View::Reviews => &[140.0, 60.0, 90.0, 160.0, 120.0, 220.0, 480.0],
        // lemma, count
        View::Frequencies => &[220.0, 80.0],
    }
}

/// Right-aligned columns.
fn numeric_columns(view: View) -> &'static [usize] {
    match view {
        View::Reviews => &[],
        View::Frequencies => &[1],
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = app.state.gui.view;
    let table = app.current_table();

    if table.is_empty() {
        ui.add_space(12.0);
        ui.weak(if app.running { "Scraping…" } else { "No data yet. Enter a URL and press SCRAPE." });
        return;
    }

    let cols = table.header_count().max(table.rows.first().map(|r| r.len()).unwrap_or(0));
    let widths = preferred_widths(view);
    let numeric = numeric_columns(view);

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;           // reserve space instead of overlaying content
        s.bar_width = 10.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt(("table_hscroll", view))
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", view));
            for ci in 0..cols {
                let w = widths.get(ci).copied().unwrap_or(120.0);
                builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            builder
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        header.col(|ui| {
                            let text = table
                                .headers
                                .as_ref()
                                .and_then(|h| h.get(ci).cloned())
                                .unwrap_or_else(|| format!("Col {}", ci + 1));
                            ui.add(egui::Label::new(RichText::new(text).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, table.row_count(), |mut row| {
                        let Some(data) = table.rows.get(row.index()) else { return };
                        for ci in 0..cols {
                            let cell = data.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let shown = preview(cell, CELL_PREVIEW_CHARS);
                                let layout = if numeric.contains(&ci) {
                                    Layout::right_to_left(Align::Center)
                                } else {
                                    Layout::left_to_right(Align::Center)
                                };
                                ui.with_layout(layout, |ui| {
                                    let resp = ui.label(shown);
                                    if cell.chars().count() > CELL_PREVIEW_CHARS {
                                        resp.on_hover_text(cell);
                                    }
                                });
                            });
                        }
                    });
                });
        });
}
