//! # Scraping "specs" module
//!
//! Page-specific scraping rules. Each module encodes *where the data lives
//! in the markup* and *how to extract it robustly*; nothing else.
//!
//! ## What lives here
//! - **Pure extraction** over the [`MarkupNode`](crate::core::MarkupNode) trait,
//!   so specs run the same against `scraper` trees and in-memory test nodes.
//! - **Selector choice** as `Query` constants (tag + class), one per field.
//! - **Tolerance policy**: optional fields fall back to `""`, placeholder cards
//!   are skipped, cards missing a mandatory field are skipped with a warning.
//!
//! ## What does **not** live here
//! - **Fetching, pagination and politeness** – `scrape::crawl`.
//! - **Persistence / export** – `file`.
//! - **Text normalisation** – `text`.
//!
//! ## Typical call chain
//! ```text
//! runner / GUI → scrape::crawl → Fetch::get → Document::parse
//!                              ↘ specs::reviews::process → extract (per card)
//! ```
//!
//! ## Testing notes
//! Specs are tested offline, against inline HTML fixtures and fake nodes.
pub mod reviews;
