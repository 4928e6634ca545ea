// src/core/markup.rs
//
// The one capability the review specs need from an HTML backend:
// "find first/all descendants matching tag + class", plus text and attributes.
// `scraper` is the production backend; tests can plug in anything else.

use scraper::{ElementRef, Html, Selector};

/// Tag + class selector. `class` may hold several space-separated classes,
/// all of which must be present on the element. Empty `class` matches the tag alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Query {
    pub tag: &'static str,
    pub class: &'static str,
}

impl Query {
    pub const fn new(tag: &'static str, class: &'static str) -> Self {
        Self { tag, class }
    }

    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, class: "" }
    }

    /// CSS form: `div.star-rating.star-rating--medium`
    pub fn css(&self) -> String {
        let mut out = s!(self.tag);
        for class in self.class.split_whitespace() {
            out.push('.');
            out.push_str(class);
        }
        out
    }
}

pub trait MarkupNode: Sized {
    /// First matching descendant in document order.
    fn find_first(&self, query: &Query) -> Option<Self>;

    /// All matching descendants in document order.
    fn find_all(&self, query: &Query) -> Vec<Self>;

    /// Every descendant text node, untrimmed, concatenated.
    fn raw_text(&self) -> String;

    /// Descendant text nodes, each trimmed, empty ones dropped.
    fn text_fragments(&self) -> Vec<String>;

    fn attr(&self, name: &str) -> Option<String>;

    /// Trimmed text content.
    fn text(&self) -> String {
        self.raw_text().trim().to_string()
    }
}

/// Parsed page. Owns the tree; hand out nodes with [`Document::root`].
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self { html: Html::parse_document(markup) }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

fn selector(query: &Query) -> Option<Selector> {
    let css = query.css();
    match Selector::parse(&css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            loge!("Markup: bad selector css={css} error={e:?}");
            None
        }
    }
}

impl<'a> MarkupNode for ElementRef<'a> {
    fn find_first(&self, query: &Query) -> Option<Self> {
        let sel = selector(query)?;
        self.select(&sel).next()
    }

    fn find_all(&self, query: &Query) -> Vec<Self> {
        match selector(query) {
            Some(sel) => self.select(&sel).collect(),
            None => Vec::new(),
        }
    }

    fn raw_text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn text_fragments(&self) -> Vec<String> {
        ElementRef::text(self)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_joins_all_classes() {
        assert_eq!(Query::new("div", "star-rating star-rating--medium").css(), "div.star-rating.star-rating--medium");
        assert_eq!(Query::tag("script").css(), "script");
    }

    #[test]
    fn fragments_skip_whitespace_only_nodes() {
        let doc = Document::parse("<div><p class=\"x\"> one <br/>\n <br/>two </p></div>");
        let p = doc.root().find_first(&Query::new("p", "x")).unwrap();
        assert_eq!(p.text_fragments(), vec!["one", "two"]);
        assert_eq!(MarkupNode::text(&p), "one \n two");
    }

    #[test]
    fn multi_class_query_needs_every_class() {
        let doc = Document::parse(
            "<div class=\"star-rating\"><img alt=\"a\"></div>\
             <div class=\"star-rating star-rating--medium\"><img alt=\"b\"></div>",
        );
        let hit = doc.root().find_first(&Query::new("div", "star-rating star-rating--medium")).unwrap();
        let img = hit.find_first(&Query::tag("img")).unwrap();
        assert_eq!(img.attr("alt").as_deref(), Some("b"));
    }
}
