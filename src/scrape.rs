// src/scrape.rs
//
// Crawl controller: walks `?page=1..=N`, one request at a time, with the
// site's crawl delay after every request. A page that fails to fetch is
// logged and skipped; it never aborts the crawl and is never retried.

use std::{error::Error, thread, time::Duration};

use thiserror::Error;
use url::Url;

use crate::{
    config::consts::{CRAWL_DELAY_SECS, PAGE_PARAM, REQUEST_TIMEOUT_SECS},
    config::options::ScrapeOptions,
    core::{Document, Fetch, HttpSession},
    data::ReviewRecord,
    progress::Progress,
    specs::reviews,
};

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid URL pattern {url:?}: {source}")]
    BadUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Blocking wait between requests. Injected so tests can count waits instead of sleeping.
pub trait Pause {
    fn pause(&mut self, delay: Duration);
}

pub struct ThreadSleep;
impl Pause for ThreadSleep {
    fn pause(&mut self, delay: Duration) {
        thread::sleep(delay);
    }
}

pub fn parse_pattern(pattern: &str) -> Result<Url, CrawlError> {
    let pattern = pattern.trim();
    Url::parse(pattern).map_err(|source| CrawlError::BadUrl { url: s!(pattern), source })
}

/// `base` with `page=<page>` as its last query parameter. Any `page` already
/// in the pattern is replaced; other parameters are kept in order.
pub fn page_url(base: &Url, page: u32) -> String {
    let mut url = base.clone();
    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(k, _)| k != PAGE_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(PAGE_PARAM, &page.to_string());
    url.into()
}

pub struct Crawler<F: Fetch, P: Pause> {
    fetcher: F,
    pause: P,
    timeout: Duration,
    delay: Duration,
}

impl<F: Fetch> Crawler<F, ThreadSleep> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            pause: ThreadSleep,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            delay: Duration::from_secs(CRAWL_DELAY_SECS),
        }
    }
}

impl<F: Fetch, P: Pause> Crawler<F, P> {
    /// Swap the wait strategy. The delay itself stays the crawl-wide constant.
    pub fn with_pause<Q: Pause>(self, pause: Q) -> Crawler<F, Q> {
        Crawler { fetcher: self.fetcher, pause, timeout: self.timeout, delay: self.delay }
    }

    pub fn pause_mut(&mut self) -> &mut P {
        &mut self.pause
    }

    /// Fetch pages `1..=page_count` in order and collect their reviews.
    /// Output equals the concatenation of the successful pages, in page order.
    pub fn crawl(
        &mut self,
        url_pattern: &str,
        page_count: u32,
        progress: &mut dyn Progress,
    ) -> Result<Vec<ReviewRecord>, CrawlError> {
        let base = parse_pattern(url_pattern)?;

        progress.begin(page_count as usize);
        logf!("Crawl: Begin pattern={base} pages={page_count}");

        let mut records: Vec<ReviewRecord> = Vec::new();
        let mut failed = 0usize;

        for page in 1..=page_count {
            let url = page_url(&base, page);

            match self.fetcher.get(&url, self.timeout) {
                Ok(body) => {
                    let doc = Document::parse(&body);
                    let page_records = reviews::process(&doc.root());
                    logd!("Crawl: page={page} url={url} reviews={}", page_records.len());
                    progress.item_done(page, page_records.len());
                    records.extend(page_records);
                }
                Err(e) => {
                    failed += 1;
                    logw!("Crawl: get request failed, page skipped url={url} error={e}");
                    progress.item_failed(page, &e.to_string());
                }
            }

            // be polite, even after a failure
            self.pause.pause(self.delay);
        }

        logf!("Crawl: Done reviews={} failed_pages={failed}", records.len());
        progress.finish();
        Ok(records)
    }
}

/// Open one HTTP session, crawl with it, and close it on the way out
/// (success, error or panic alike, via drop).
pub fn collect_reviews(
    scrape: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Result<Vec<ReviewRecord>, Box<dyn Error>> {
    // Reject a bad pattern before opening any connection.
    parse_pattern(&scrape.url_pattern)?;

    let session = HttpSession::open()?;
    let mut crawler = Crawler::new(&session);
    let records = crawler.crawl(&scrape.url_pattern, scrape.pages, progress)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_param_appended() {
        let base = parse_pattern("https://www.trustpilot.com/review/example.com").unwrap();
        assert_eq!(page_url(&base, 3), "https://www.trustpilot.com/review/example.com?page=3");
    }

    #[test]
    fn existing_query_kept_and_page_replaced() {
        let base = parse_pattern("https://example.com/r?languages=en&page=9").unwrap();
        assert_eq!(page_url(&base, 2), "https://example.com/r?languages=en&page=2");
    }

    #[test]
    fn bad_pattern_is_rejected() {
        assert!(matches!(parse_pattern("not a url"), Err(CrawlError::BadUrl { .. })));
    }
}
