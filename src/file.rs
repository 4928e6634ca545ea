// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::{parse_rows, split_headers, to_export_string};
use crate::data::{DataSet, ReviewRecord};
use crate::text::FrequencyTable;

pub const FREQUENCY_HEADERS: [&str; 2] = ["lemma", "count"];

/// Write the reviews table to `export.out_path()`, creating parent directories.
/// Returns the final path written to.
pub fn write_reviews(
    export: &ExportOptions,
    records: &[ReviewRecord],
) -> Result<PathBuf, Box<dyn Error>> {
    let data = DataSet::from_records(records);
    let path = export.out_path();
    write_table(&path, &data, export.include_headers, export.delim())?;
    logf!("Export: reviews path={} rows={}", path.display(), data.row_count());
    Ok(path)
}

/// Write the ranked `lemma,count` table next to the reviews file.
pub fn write_frequencies(
    export: &ExportOptions,
    table: &FrequencyTable,
) -> Result<PathBuf, Box<dyn Error>> {
    let data = frequency_dataset(table, None);
    let path = export.frequencies_path();
    write_table(&path, &data, export.include_headers, export.delim())?;
    logf!("Export: frequencies path={} lemmas={}", path.display(), data.row_count());
    Ok(path)
}

/// Ranked frequencies as a table; `limit` keeps only the top N.
pub fn frequency_dataset(table: &FrequencyTable, limit: Option<usize>) -> DataSet {
    let ranked = match limit {
        Some(n) => table.top(n),
        None => table.ranked(),
    };
    DataSet {
        headers: Some(FREQUENCY_HEADERS.iter().map(|h| s!(*h)).collect()),
        rows: ranked.into_iter().map(|(lemma, n)| vec![s!(lemma), n.to_string()]).collect(),
    }
}

pub fn write_table(
    path: &Path,
    data: &DataSet,
    include_headers: bool,
    sep: char,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let contents = to_export_string(&data.headers, &data.rows, include_headers, sep);
    fs::write(path, contents)?;
    Ok(())
}

/// Read a reviews file written by [`write_reviews`]. The delimiter follows
/// the extension; a header row is optional.
pub fn read_reviews(path: &Path) -> Result<Vec<ReviewRecord>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let sep = ExportFormat::from_path(path).delim();
    let (_, rows) = split_headers(parse_rows(&text, sep), &ReviewRecord::HEADERS);

    let mut out = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        match ReviewRecord::from_row(row) {
            Ok(r) => out.push(r),
            Err(e) => logw!("Import: row skipped path={} row={i} error={e}", path.display()),
        }
    }
    logf!("Import: reviews path={} rows={}", path.display(), out.len());
    Ok(out)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}
