//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;

/// Template for the landing page.
///
/// Renders `templates/index.html`: a form that posts to `/shorten` and shows
/// the resulting short URL.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub base_url: String,
    pub version: &'static str,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        base_url: state.base_url.to_string(),
        version: env!("CARGO_PKG_VERSION"),
    }
}
