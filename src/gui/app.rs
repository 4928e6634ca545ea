// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::{AppState, View},
    data::{DataSet, ReviewRecord},
    file,
    text::FrequencyTable,
};

/// What the worker thread hands back when a crawl finishes.
pub type JobResult = Result<(Vec<ReviewRecord>, FrequencyTable), String>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Review Wordcloud",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::from_env())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // scrape form text fields (parsed on click)
    pub url_text: String,
    pub pages_text: String,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last results
    pub records: Vec<ReviewRecord>,
    pub frequencies: FrequencyTable,

    // what the tables draw, rebuilt when results or view settings change
    pub reviews_table: DataSet,
    pub freq_table: DataSet,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub job: Option<Receiver<JobResult>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        let pages_text = state.options.scrape.pages.to_string();

        logf!(
            "Init: view={:?} out={} lexicon={:?}",
            state.gui.view,
            out_path_text,
            state.options.text.lexicon_dir
        );

        Self {
            url_text: state.options.scrape.url_pattern.clone(),
            pages_text,
            out_path_text,
            out_path_dirty: false,
            records: Vec::new(),
            frequencies: FrequencyTable::new(),
            reviews_table: DataSet::from_records(&[]),
            freq_table: file::frequency_dataset(&FrequencyTable::new(), None),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            job: None,
            state,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Table for the active tab.
    pub fn current_table(&self) -> &DataSet {
        match self.state.gui.view {
            View::Reviews => &self.reviews_table,
            View::Frequencies => &self.freq_table,
        }
    }

    /// Install fresh results and rebuild both tables.
    pub fn set_results(&mut self, records: Vec<ReviewRecord>, frequencies: FrequencyTable) {
        self.records = records;
        self.frequencies = frequencies;
        self.rebuild_views();
    }

    pub fn rebuild_views(&mut self) {
        self.reviews_table = DataSet::from_records(&self.records);
        self.freq_table = file::frequency_dataset(&self.frequencies, Some(self.state.gui.top_words));
        logd!(
            "View: rebuilt reviews={} words={} (of {})",
            self.reviews_table.row_count(),
            self.freq_table.row_count(),
            self.frequencies.len()
        );
    }

    /// Apply the output field to ExportOptions if the user typed in it.
    pub fn commit_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            logf!("Export: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::poll_scrape(self);

        egui::TopBottomPanel::top("scrape_form").show(ctx, |ui| {
            super::components::scrape_form::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            super::components::export_bar::draw(ui, self);

            ui.separator();

            super::components::data_table::draw(ui, self);
        });

        if self.running {
            // worker only writes the status string; keep polling it
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
