//! Core domain entities.
//!
//! - [`Link`] - A stored short link
//! - [`NewLink`] - Input for creating a link; the store assigns id and slug

pub mod link;

pub use link::{Link, NewLink};
