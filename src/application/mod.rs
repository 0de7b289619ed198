//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a small API.
//!
//! - [`services::link_service::LinkService`] - Shortening, resolving and stats

pub mod services;
