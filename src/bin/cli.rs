// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use review_wordcloud::{cli, config::consts::{LOG_DIR, LOG_FILE}, log, loge};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init(std::path::Path::new(LOG_DIR).join(LOG_FILE), true);

    cli::run().map_err(|e| {
        loge!("CLI: fatal error={e}");
        eyre!("{e}")
    })
}
