// src/gui/actions/export.rs
use std::{error::Error, path::PathBuf};

use crate::{file, gui::app::App};

/// Write the reviews file and its frequencies sibling from the last results.
pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.commit_out_path();

    if app.records.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let export = &app.state.options.export;
    logf!(
        "Export: Begin reviews={} words={} path={}",
        app.records.len(),
        app.frequencies.len(),
        export.out_path().display()
    );

    let result: Result<Vec<PathBuf>, Box<dyn Error>> = (|| {
        let reviews = file::write_reviews(export, &app.records)?;
        let words = file::write_frequencies(export, &app.frequencies)?;
        Ok(vec![reviews, words])
    })();

    let status_msg = match result {
        Ok(paths) => {
            let shown: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
            logf!("Export: OK count={}", paths.len());
            format!("Exported {}", shown.join(" + "))
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    // mutate app only after the borrows are gone
    app.status(status_msg);
}
