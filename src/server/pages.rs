// Page handlers - index, component and prototype pages, 404 fallback

use axum::{
    extract::{Path, State},
    http::Uri,
    response::{Html, Redirect},
};

use crate::showcase::pages;

use super::error::ShowcaseError;
use super::state::AppState;

/// GET / - the showcase lives under /proto
pub async fn root() -> Redirect {
    Redirect::to("/proto")
}

/// GET /proto
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(pages::index_page(&state.showcase))
}

/// GET /proto/components/:slug
pub async fn component(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, ShowcaseError> {
    let showcase = &state.showcase;
    let resolved = showcase
        .resolve(&slug)
        .map_err(|e| ShowcaseError::not_found(showcase, &e.path))?;

    tracing::debug!(
        "Rendering {} ({}, demo ready: {})",
        resolved.descriptor.name,
        resolved.category,
        resolved.demo.is_ready()
    );
    Ok(Html(pages::component_page(showcase, &resolved)))
}

/// GET /proto/prototypes/:slug
pub async fn prototype(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, ShowcaseError> {
    let showcase = &state.showcase;
    let resolved = showcase
        .resolve_prototype(&slug)
        .map_err(|e| ShowcaseError::not_found(showcase, &e.path))?;

    Ok(Html(pages::component_page(showcase, &resolved)))
}

/// Anything else
pub async fn fallback(State(state): State<AppState>, uri: Uri) -> ShowcaseError {
    ShowcaseError::not_found(&state.showcase, uri.path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::Showcase;
    use axum::{
        http::{header, StatusCode},
        response::{IntoResponse, Response},
    };

    fn state() -> AppState {
        AppState::new(Showcase::builtin().unwrap())
    }

    async fn body(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_root_redirects_to_proto() {
        let response = root().await.into_response();
        assert!(response.status().is_redirection());
        assert_eq!(response.headers()[header::LOCATION], "/proto");
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = index(State(state())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body(response).await.contains("Component Library"));
    }

    #[tokio::test]
    async fn test_component_page() {
        let response = component(State(state()), Path("example-card".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body(response).await;
        assert!(html.contains("<h1>Example Card</h1>"));
        assert!(html.contains("Live Demo"));
    }

    #[tokio::test]
    async fn test_unknown_component_is_404() {
        let response = component(State(state()), Path("missing-slug".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body(response)
            .await
            .contains("No component registered at /proto/components/missing-slug"));
    }

    #[tokio::test]
    async fn test_prototype_page_uses_prototype_prefix() {
        let ok = prototype(State(state()), Path("draft-promotion".to_string()))
            .await
            .into_response();
        assert_eq!(ok.status(), StatusCode::OK);

        let wrong = component(State(state()), Path("draft-promotion".to_string()))
            .await
            .into_response();
        assert_eq!(wrong.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_fallback_is_404() {
        let response = fallback(State(state()), Uri::from_static("/nowhere"))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
