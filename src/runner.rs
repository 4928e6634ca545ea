// src/runner.rs
//
// Glue shared by the CLI and the GUI worker:
//   crawl -> reviews file -> normalize -> frequency table -> frequencies file

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::{
    config::options::{AppOptions, TextOptions, TextSource},
    data::ReviewRecord,
    file,
    progress::Progress,
    scrape,
    text::{aggregate, FrequencyTable, Normalizer, PosTagger},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub records: Vec<ReviewRecord>,
    pub frequencies: FrequencyTable,
    pub files_written: Vec<PathBuf>,
}

/// Full job: crawl, count, write both files.
pub fn run(options: &AppOptions, progress: &mut dyn Progress) -> Result<RunSummary, Box<dyn Error>> {
    let (records, frequencies) = scrape_and_count(options, progress)?;

    let mut files_written = Vec::with_capacity(2);
    let reviews_path = file::write_reviews(&options.export, &records)?;
    progress.log(&format!("Saved {} review(s) to {}", records.len(), reviews_path.display()));
    files_written.push(reviews_path);

    let freq_path = file::write_frequencies(&options.export, &frequencies)?;
    progress.log(&format!("Saved {} distinct word(s) to {}", frequencies.len(), freq_path.display()));
    files_written.push(freq_path);

    Ok(RunSummary { records, frequencies, files_written })
}

/// Crawl and count without touching the disk (GUI shows results first, exports on demand).
pub fn scrape_and_count(
    options: &AppOptions,
    progress: &mut dyn Progress,
) -> Result<(Vec<ReviewRecord>, FrequencyTable), Box<dyn Error>> {
    // Lexicon problems surface before the first request, not after a long crawl.
    let normalizer = Normalizer::from_options(&options.text)?;

    let records = scrape::collect_reviews(&options.scrape, progress)?;
    progress.log(&format!("Counting words in {} review(s)…", records.len()));
    let frequencies = word_frequencies(&normalizer, &records, options.text.source);
    logf!("Runner: reviews={} lemmas={} tokens={}", records.len(), frequencies.len(), frequencies.total());

    Ok((records, frequencies))
}

/// One document per review, in record order.
pub fn word_frequencies<T: PosTagger>(
    normalizer: &Normalizer<T>,
    records: &[ReviewRecord],
    source: TextSource,
) -> FrequencyTable {
    aggregate(records.iter().map(|r| normalizer.lemmas(&r.text_for(source))))
}

/// Recount an existing reviews file, no network involved.
pub fn count_file(
    path: &Path,
    text: &TextOptions,
) -> Result<(Vec<ReviewRecord>, FrequencyTable), Box<dyn Error>> {
    let normalizer = Normalizer::from_options(text)?;
    let records = file::read_reviews(path)?;
    let frequencies = word_frequencies(&normalizer, &records, text.source);
    Ok((records, frequencies))
}
