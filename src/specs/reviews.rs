// src/specs/reviews.rs
//
// Review listing page: one `div.review-card` per review.
//
// Card layout (only the parts we read):
//   div.consumer-information__name           optional  → reviewer_name
//   div.consumer-information__review-count   optional  → reviewer_review_count
//   div.consumer-information__location       optional  → reviewer_country
//   div.review-content-header__dates > script  JSON     → review_date
//   div.star-rating.star-rating--medium > img[alt]      → stars_given
//   h2.review-content__title                            → review_title
//   p.review-content__text                   optional  → review_text
//
// Cards removed for violating site policy keep their frame but carry a
// `div.review-report-banner` and no content; those are skipped.

use thiserror::Error;

use crate::core::markup::{MarkupNode, Query};
use crate::data::{ReviewDate, ReviewRecord};

pub const CARD: Query = Query::new("div", "review-card");
pub const VIOLATION_BANNER: Query = Query::new("div", "review-report-banner");

const NAME: Query = Query::new("div", "consumer-information__name");
const REVIEW_COUNT: Query = Query::new("div", "consumer-information__review-count");
const LOCATION: Query = Query::new("div", "consumer-information__location");
const DATES: Query = Query::new("div", "review-content-header__dates");
const SCRIPT: Query = Query::tag("script");
const STARS: Query = Query::new("div", "star-rating star-rating--medium");
const IMG: Query = Query::tag("img");
const TITLE: Query = Query::new("h2", "review-content__title");
const BODY: Query = Query::new("p", "review-content__text");

/// A card that looked like a review but lacked a field every review has.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("review date blob is not valid JSON: {0}")]
    BadDate(#[from] serde_json::Error),
}

/// Trimmed text of the first match, or "" when the sub-node is absent.
fn optional_text<N: MarkupNode>(card: &N, query: &Query) -> String {
    card.find_first(query).map(|n| n.text()).unwrap_or_default()
}

fn extract_date<N: MarkupNode>(card: &N) -> Result<ReviewDate, ExtractError> {
    let script = card
        .find_first(&DATES)
        .ok_or(ExtractError::Missing("date block"))?
        .find_first(&SCRIPT)
        .ok_or(ExtractError::Missing("date script"))?;
    Ok(ReviewDate::from_json(&script.raw_text())?)
}

fn extract_stars<N: MarkupNode>(card: &N) -> Result<String, ExtractError> {
    card.find_first(&STARS)
        .ok_or(ExtractError::Missing("star rating"))?
        .find_first(&IMG)
        .ok_or(ExtractError::Missing("star rating image"))?
        .attr("alt")
        .ok_or(ExtractError::Missing("star rating alt text"))
}

/// Paragraphs inside the body are separated by `<br>` only, so the raw text
/// would glue the last word of one paragraph to the first of the next.
/// Join the trimmed fragments with a single space instead.
fn extract_body<N: MarkupNode>(card: &N) -> String {
    card.find_first(&BODY)
        .map(|p| p.text_fragments().join(" "))
        .unwrap_or_default()
}

/// Pull every field out of one review card.
pub fn extract<N: MarkupNode>(card: &N) -> Result<ReviewRecord, ExtractError> {
    let review_title = card
        .find_first(&TITLE)
        .ok_or(ExtractError::Missing("title"))?
        .text();

    Ok(ReviewRecord {
        reviewer_name: optional_text(card, &NAME),
        reviewer_country: optional_text(card, &LOCATION),
        reviewer_review_count: optional_text(card, &REVIEW_COUNT),
        review_date: extract_date(card)?,
        stars_given: extract_stars(card)?,
        review_title,
        review_text: extract_body(card),
    })
}

pub fn is_violation<N: MarkupNode>(card: &N) -> bool {
    card.find_first(&VIOLATION_BANNER).is_some()
}

/// All reviews on one listing page, in document order.
/// Violation placeholders are dropped silently; cards missing a mandatory
/// field are dropped with a warning so one bad card never costs the page.
pub fn process<N: MarkupNode>(page: &N) -> Vec<ReviewRecord> {
    let cards = page.find_all(&CARD);
    let mut out = Vec::with_capacity(cards.len());

    for (i, card) in cards.iter().enumerate() {
        if is_violation(card) {
            continue;
        }
        match extract(card) {
            Ok(record) => out.push(record),
            Err(e) => logw!("Reviews: card skipped index={i} error={e}"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory node: children keyed by css, plus text and attributes.
    #[derive(Clone, Default)]
    struct FakeNode {
        children: HashMap<String, Vec<FakeNode>>,
        fragments: Vec<String>,
        attrs: HashMap<String, String>,
    }

    impl FakeNode {
        fn leaf(t: &str) -> Self {
            Self { fragments: vec![s!(t)], ..Self::default() }
        }
        fn with(mut self, q: Query, child: FakeNode) -> Self {
            self.children.entry(q.css()).or_default().push(child);
            self
        }
        fn with_attr(mut self, k: &str, v: &str) -> Self {
            self.attrs.insert(s!(k), s!(v));
            self
        }
    }

    impl MarkupNode for FakeNode {
        fn find_first(&self, q: &Query) -> Option<Self> {
            self.children.get(&q.css()).and_then(|v| v.first().cloned())
        }
        fn find_all(&self, q: &Query) -> Vec<Self> {
            self.children.get(&q.css()).cloned().unwrap_or_default()
        }
        fn raw_text(&self) -> String {
            self.fragments.concat()
        }
        fn text_fragments(&self) -> Vec<String> {
            self.fragments.iter().map(|f| f.trim().to_string()).filter(|f| !f.is_empty()).collect()
        }
        fn attr(&self, name: &str) -> Option<String> {
            self.attrs.get(name).cloned()
        }
    }

    fn minimal_card() -> FakeNode {
        FakeNode::default()
            .with(DATES, FakeNode::default().with(SCRIPT, FakeNode::leaf(r#"{"publishedDate":"2021-01-02"}"#)))
            .with(STARS, FakeNode::default().with(IMG, FakeNode::default().with_attr("alt", "4 stars: Great")))
            .with(TITLE, FakeNode::leaf("  Solid  "))
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let r = extract(&minimal_card()).unwrap();
        assert_eq!(r.reviewer_name, "");
        assert_eq!(r.reviewer_country, "");
        assert_eq!(r.reviewer_review_count, "");
        assert_eq!(r.review_text, "");
        assert_eq!(r.review_title, "Solid");
        assert_eq!(r.stars_given, "4 stars: Great");
        assert_eq!(r.review_date.published_date.as_deref(), Some("2021-01-02"));
    }

    #[test]
    fn body_fragments_joined_with_space() {
        let body = FakeNode {
            fragments: vec![s!("First paragraph."), s!("\n"), s!("Second one.")],
            ..FakeNode::default()
        };
        let r = extract(&minimal_card().with(BODY, body)).unwrap();
        assert_eq!(r.review_text, "First paragraph. Second one.");
    }

    #[test]
    fn missing_mandatory_field_is_reported() {
        let card = FakeNode::default().with(TITLE, FakeNode::leaf("t"));
        match extract(&card) {
            Err(ExtractError::Missing(what)) => assert_eq!(what, "date block"),
            other => panic!("expected missing date, got {:?}", other.map(|r| r.review_title)),
        }
    }

    #[test]
    fn page_of_placeholders_is_empty() {
        let banner = FakeNode::default().with(VIOLATION_BANNER, FakeNode::leaf("removed"));
        let page = FakeNode::default().with(CARD, banner.clone()).with(CARD, banner);
        assert!(process(&page).is_empty());
    }

    #[test]
    fn broken_card_does_not_cost_the_page() {
        let broken = FakeNode::default().with(TITLE, FakeNode::leaf("no stars"));
        let page = FakeNode::default()
            .with(CARD, minimal_card())
            .with(CARD, broken)
            .with(CARD, minimal_card());
        assert_eq!(process(&page).len(), 2);
    }
}
