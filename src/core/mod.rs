// src/core/mod.rs

pub mod markup;
pub mod net;
pub mod sanitize;

pub use markup::{Document, MarkupNode, Query};
pub use net::{Fetch, FetchError, HttpSession};
