// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; review_wordcloud/0.2)";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Crawl policy: robots.txt on the review site sets Crawl-delay: 10.
// Honoured after every request, failed ones included.
pub const CRAWL_DELAY_SECS: u64 = 10;
pub const PAGE_PARAM: &str = "page";

// Logging
pub const LOG_DIR: &str = "out/.logs";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "reviews";
pub const FREQUENCIES_SUFFIX: &str = "frequencies";

// Text pipeline
pub const WORDNET_DIR_ENV: &str = "WORDNET_DIR";
pub const GUI_TOP_WORDS: usize = 500;
