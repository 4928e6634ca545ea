// src/gui/components/scrape_form.rs
//
// URL + page count + SCRAPE button. The crawl itself runs on a worker
// (see actions::scrape); while it runs the button is replaced by a spinner.

use eframe::egui::{self, widgets::Spinner};

use crate::{config::consts::CRAWL_DELAY_SECS, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Reviews URL:");
        ui.add_enabled(
            !app.running,
            egui::TextEdit::singleline(&mut app.url_text)
                .hint_text("https://www.trustpilot.com/review/example.com")
                .desired_width(420.0),
        );

        ui.label("Pages:");
        ui.add_enabled(
            !app.running,
            egui::TextEdit::singleline(&mut app.pages_text).desired_width(48.0),
        );

        if app.running {
            ui.add(Spinner::new());
        } else {
            let red = egui::Color32::from_rgb(220, 30, 30);
            let black = egui::Color32::BLACK;
            if ui
                .add(egui::Button::new(egui::RichText::new("SCRAPE").color(black).strong()).fill(red))
                .clicked()
            {
                let ctx = ui.ctx().clone();
                actions::scrape(app, &ctx);
            }
        }

        // crawl time is dominated by the fixed pause after each page
        if let Ok(pages) = app.pages_text.trim().parse::<u64>() {
            let secs = pages * CRAWL_DELAY_SECS;
            ui.weak(format!("≈ {}m {:02}s", secs / 60, secs % 60));
        }
    });

    ui.horizontal(|ui| {
        ui.label("Count words in:");
        let source = &mut app.state.options.text.source;
        let before = *source;
        ui.selectable_value(source, crate::config::options::TextSource::Body, "Body");
        ui.selectable_value(source, crate::config::options::TextSource::Title, "Title");
        ui.selectable_value(source, crate::config::options::TextSource::TitleAndBody, "Both");
        if *source != before {
            logf!("UI: Text source → {:?}", source);
        }

        let mut latin = app.state.options.text.script == crate::text::ScriptPolicy::LatinOnly;
        if ui.checkbox(&mut latin, "Latin script only").changed() {
            app.state.options.text.script = if latin {
                crate::text::ScriptPolicy::LatinOnly
            } else {
                crate::text::ScriptPolicy::AnyWordChar
            };
            logf!("UI: Script policy → {:?}", app.state.options.text.script);
        }
    });
    ui.add_space(4.0);
}
