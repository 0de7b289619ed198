//! # tinylink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! Each link gets a slug equal to the Base62 encoding of its row id, so slugs
//! are short, URL-safe and unique without any collision check. Visiting a
//! slug redirects to the stored URL and increments its click counter.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity and the store contract
//! - **Application Layer** ([`application`]) - Validation and link operations
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Landing page
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://127.0.0.1:5023"   # Optional
//! cargo run
//!
//! curl -X POST localhost:5023/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteLinkRepository;
    pub use crate::state::AppState;
}
