// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };

use super::consts::*;
use crate::text::ScriptPolicy;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
    pub text: TextOptions,
}

impl AppOptions {
    /// Defaults, with the text options read from the environment.
    pub fn from_env() -> Self {
        Self { text: TextOptions::from_env(), ..Self::default() }
    }
}

/* ---------------- Scrape ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// URL of the first page of a company's reviews; `?page=N` is appended per page.
    pub url_pattern: String,
    /// Number of pages to walk, starting at 1.
    pub pages: u32,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { url_pattern: s!(), pages: 1 }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    /// Guess from a file extension; anything unknown is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(e) if e.eq_ignore_ascii_case("tsv") => ExportFormat::Tsv,
            _ => ExportFormat::Csv,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Reviews file. A user-typed extension wins over the format's extension.
    pub fn out_path(&self) -> PathBuf {
        let ext = self.out_path.ext.as_deref().unwrap_or(self.format.ext());
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        name.push(ext);
        self.out_path.dir.join(name)
    }

    /// Sibling file holding the ranked word counts: `<stem>.frequencies.<ext>`.
    pub fn frequencies_path(&self) -> PathBuf {
        let ext = self.out_path.ext.as_deref().unwrap_or(self.format.ext());
        let mut name = self.out_path.file_stem.clone();
        name.push(format!(".{FREQUENCIES_SUFFIX}.{ext}"));
        self.out_path.dir.join(name)
    }

    /// Parse user text (GUI field or CLI argument) into dir + stem + optional extension.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_string_lossy().into_owned());
        self.format = ExportFormat::from_path(p);
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<String>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}

/* ---------------- Text pipeline ---------------- */

/// Which review fields feed the word counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextSource {
    #[default]
    Body,
    Title,
    TitleAndBody,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextOptions {
    pub source: TextSource,
    pub script: ScriptPolicy,
    /// WordNet `dict/` directory; built-in lexicon when None.
    pub lexicon_dir: Option<PathBuf>,
    /// Added on top of the default English stopwords (e.g. the company name).
    pub extra_stopwords: Vec<String>,
}

impl TextOptions {
    /// Defaults, plus the lexicon directory from the environment if set.
    pub fn from_env() -> Self {
        let lexicon_dir = std::env::var_os(WORDNET_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { lexicon_dir, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_follow_format() {
        let mut export = ExportOptions::default();
        assert_eq!(export.out_path(), Path::new("out").join("reviews.csv"));
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), Path::new("out").join("reviews.tsv"));
        assert_eq!(export.frequencies_path(), Path::new("out").join("reviews.frequencies.tsv"));
    }

    #[test]
    fn user_extension_is_kept() {
        let mut export = ExportOptions::default();
        export.set_path("data/acme/all.txt");
        assert_eq!(export.out_path(), Path::new("data/acme").join("all.txt"));
        assert_eq!(export.frequencies_path(), Path::new("data/acme").join("all.frequencies.txt"));
        assert_eq!(export.format, ExportFormat::Csv);
    }

    #[test]
    fn tsv_extension_switches_format() {
        let mut export = ExportOptions::default();
        export.set_path("reviews.tsv");
        assert_eq!(export.format, ExportFormat::Tsv);
        assert_eq!(export.out_path(), PathBuf::from("reviews.tsv"));
    }
}
