// src/progress.rs
/// Lightweight progress reporting used by long-running operations (crawl/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of pages (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page was fetched and parsed; `records` is how many reviews it yielded.
    fn item_done(&mut self, _page: u32, _records: usize) {}

    /// One page could not be fetched and was skipped.
    fn item_failed(&mut self, _page: u32, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints one line per event to stdout. Used by the CLI.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Scraping {total} page(s)…");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, page: u32, records: usize) {
        self.done += 1;
        println!("Page {page}: {records} review(s) ({}/{})", self.done + self.failed, self.total);
    }
    fn item_failed(&mut self, page: u32, reason: &str) {
        self.failed += 1;
        println!("Page {page}: skipped ({reason}) ({}/{})", self.done + self.failed, self.total);
    }
    fn finish(&mut self) {
        println!("Crawl complete: {} ok, {} skipped", self.done, self.failed);
    }
}
