//! Server error types and response handling

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::showcase::{pages, Showcase};

/// Errors a page handler can return
#[derive(Debug)]
pub enum ShowcaseError {
    /// Nothing is registered at the requested path; carries the rendered 404 page
    NotFound { path: String, page: String },
}

impl ShowcaseError {
    pub fn not_found(showcase: &Showcase, path: &str) -> Self {
        Self::NotFound {
            path: path.to_string(),
            page: pages::not_found_page(&showcase.registry, path),
        }
    }
}

impl IntoResponse for ShowcaseError {
    fn into_response(self) -> Response {
        match self {
            ShowcaseError::NotFound { path, page } => {
                tracing::debug!("Not found: {}", path);
                (StatusCode::NOT_FOUND, Html(page)).into_response()
            }
        }
    }
}
