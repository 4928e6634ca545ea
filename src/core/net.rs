// src/core/net.rs
//
// HTTP GET behind a small trait so the crawl loop can be driven by fakes in tests.
// The real session keeps one connection pool + cookie jar for the whole crawl
// and is released when dropped.

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::consts::USER_AGENT;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },
}

/// One GET returning the body as text.
pub trait Fetch {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        (**self).get(url, timeout)
    }
}

/// Blocking HTTP session: connection reuse and cookies across all pages of a crawl.
pub struct HttpSession {
    client: Client,
}

impl HttpSession {
    pub fn open() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()?;
        logd!("Net: session opened");
        Ok(Self { client })
    }
}

impl Fetch for HttpSession {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let resp = self.client.get(url).timeout(timeout).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
        }
        Ok(resp.text()?)
    }
}

impl Drop for HttpSession {
    fn drop(&mut self) {
        logd!("Net: session closed");
    }
}
