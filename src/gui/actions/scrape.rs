// src/gui/actions/scrape.rs
//
// The crawl sleeps between pages, so it runs on one worker thread; the UI
// polls the status string and picks up the result when the channel fills.

use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use eframe::egui;

use crate::{
    gui::app::{App, JobResult},
    gui::progress::GuiProgress,
    runner,
};

/// Validate the form and start the worker. No-op while a crawl is running.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }

    let url = app.url_text.trim().to_string();
    if url.is_empty() {
        app.status("Enter the URL of the first review page");
        return;
    }
    let pages = match app.pages_text.trim().parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            app.status(format!("Not a page count: {:?}", app.pages_text));
            return;
        }
    };

    app.commit_out_path();
    app.state.options.scrape.url_pattern = url;
    app.state.options.scrape.pages = pages;

    logf!(
        "Scrape: Begin url_pattern={} pages={}",
        app.state.options.scrape.url_pattern,
        pages
    );

    let options = app.state.options.clone();
    let mut progress = GuiProgress::new(app.status.clone(), Some(ctx.clone()));
    let (tx, rx) = mpsc::channel::<JobResult>();

    thread::spawn(move || {
        let result = runner::scrape_and_count(&options, &mut progress).map_err(|e| e.to_string());
        // receiver gone means the window was closed; nothing left to report to
        let _ = tx.send(result);
    });

    app.job = Some(rx);
    app.running = true;
    app.status("Starting…");
}

/// Pick up a finished crawl, if any. Called once per frame.
pub fn poll_scrape(app: &mut App) {
    let Some(rx) = &app.job else { return };

    let outcome = match rx.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => Err(s!("worker stopped unexpectedly")),
    };

    app.job = None;
    app.running = false;

    match outcome {
        Ok((records, frequencies)) => {
            logf!("Scrape: OK reviews={} words={}", records.len(), frequencies.len());
            let msg = format!("Ready: {} review(s), {} distinct word(s)", records.len(), frequencies.len());
            app.set_results(records, frequencies);
            app.status(msg);
        }
        Err(e) => {
            loge!("Scrape: Error {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
