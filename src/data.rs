// src/data.rs
//
// Canonical record types shared by the scraper, the exporter and the GUI.
//
// - ReviewRecord: one review card, every field a string except the date blob.
// - DataSet: headers + rows, the tabular shape the export and table views consume.

use serde::{Deserialize, Serialize};

use crate::config::options::TextSource;

/// Dates block embedded in each review card as a JSON `<script>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDate {
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub updated_date: Option<String>,
    #[serde(default)]
    pub reported_date: Option<String>,
    /// Any other key in the blob, written back out on export.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ReviewDate {
    pub fn from_json(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(blob.trim())
    }

    pub fn to_json(&self) -> String {
        // Strings and JSON values only: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewRecord {
    pub reviewer_name: String,
    pub reviewer_country: String,
    pub reviewer_review_count: String,
    pub review_date: ReviewDate,
    pub stars_given: String,
    pub review_title: String,
    pub review_text: String,
}

impl ReviewRecord {
    pub const HEADERS: [&'static str; 7] = [
        "reviewer_name",
        "reviewer_country",
        "reviewer_review_count",
        "review_date",
        "stars_given",
        "review_title",
        "review_text",
    ];

    pub fn headers() -> Vec<String> {
        Self::HEADERS.iter().map(|h| s!(*h)).collect()
    }

    /// Flat row in `HEADERS` order; the date is written as its JSON blob.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.reviewer_name.clone(),
            self.reviewer_country.clone(),
            self.reviewer_review_count.clone(),
            self.review_date.to_json(),
            self.stars_given.clone(),
            self.review_title.clone(),
            self.review_text.clone(),
        ]
    }

    /// Inverse of [`to_row`](Self::to_row). Short rows fill the missing tail with "".
    pub fn from_row(row: &[String]) -> Result<Self, serde_json::Error> {
        let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
        let date_cell = cell(3);
        let review_date = if date_cell.trim().is_empty() {
            ReviewDate::default()
        } else {
            ReviewDate::from_json(&date_cell)?
        };
        Ok(Self {
            reviewer_name: cell(0),
            reviewer_country: cell(1),
            reviewer_review_count: cell(2),
            review_date,
            stars_given: cell(4),
            review_title: cell(5),
            review_text: cell(6),
        })
    }

    /// The text that feeds the word counts for this review.
    pub fn text_for(&self, source: TextSource) -> String {
        match source {
            TextSource::Body => self.review_text.clone(),
            TextSource::Title => self.review_title.clone(),
            TextSource::TitleAndBody => {
                if self.review_title.is_empty() {
                    self.review_text.clone()
                } else if self.review_text.is_empty() {
                    self.review_title.clone()
                } else {
                    format!("{}. {}", self.review_title, self.review_text)
                }
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn from_records(records: &[ReviewRecord]) -> Self {
        Self {
            headers: Some(ReviewRecord::headers()),
            rows: records.iter().map(ReviewRecord::to_row).collect(),
        }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}
