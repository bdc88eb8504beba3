// HTTP API module - registry, validation and coverage as JSON
//
// Diagnostics for tooling and dashboards. Everything is computed from the
// state built at startup; nothing here mutates it.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::registry::{Category, ComponentDescriptor};
use crate::showcase::audit::DemoValidation;
use crate::showcase::ConfigMismatch;
use crate::validator::ValidationSummary;

use super::state::AppState;

/// Response for GET /api/registry
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryResponse {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    /// Descriptor count per category key
    pub counts: BTreeMap<&'static str, usize>,
    pub components: Vec<ComponentDescriptor>,
}

/// Response for GET /api/validation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub summary: ValidationSummary,
    pub config_mismatches: Vec<ConfigMismatch>,
}

/// Response for GET /api/coverage
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageResponse {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub coverage: DemoValidation,
    pub coverage_percent: u32,
}

/// GET /api/registry
pub async fn get_registry(State(state): State<AppState>) -> Json<RegistryResponse> {
    let registry = &state.showcase.registry;

    let counts = Category::ALL
        .into_iter()
        .map(|category| (category.key(), registry.count(category)))
        .collect();

    Json(RegistryResponse {
        generated_at: Utc::now(),
        total: registry.len(),
        counts,
        components: registry.all().to_vec(),
    })
}

/// GET /api/validation
pub async fn get_validation(State(state): State<AppState>) -> Json<ValidationResponse> {
    Json(ValidationResponse {
        generated_at: Utc::now(),
        summary: state.showcase.components.summary(),
        config_mismatches: state.showcase.config_mismatches.clone(),
    })
}

/// GET /api/coverage
pub async fn get_coverage(State(state): State<AppState>) -> Json<CoverageResponse> {
    let coverage = state.showcase.coverage();
    Json(CoverageResponse {
        generated_at: Utc::now(),
        coverage_percent: coverage.coverage_percent(),
        coverage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::showcase::{demos, Showcase};

    fn state() -> AppState {
        AppState::new(Showcase::builtin().unwrap())
    }

    #[tokio::test]
    async fn test_registry_json() {
        let Json(response) = get_registry(State(state())).await;
        assert_eq!(response.total, 5);
        assert_eq!(response.counts["ui_primitives"], 2);
        assert_eq!(response.counts["pages"], 0);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["generatedAt"].is_string());
        assert_eq!(json["components"][0]["routePath"], "/proto/components/button");
        assert_eq!(json["components"][0]["category"], "ui_primitive");
    }

    #[tokio::test]
    async fn test_validation_json() {
        let Json(response) = get_validation(State(state())).await;
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["total"], 5);
        assert_eq!(json["hasErrors"], false);
        assert_eq!(json["successRate"], 100);
        assert_eq!(json["validationResults"][0]["isValid"], true);
        assert_eq!(json["configMismatches"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_coverage_json_reports_missing() {
        let registry = Registry::new(vec![
            ComponentDescriptor::new("Button", "/proto/components/button", Category::UiPrimitive),
            ComponentDescriptor::new("Tabs", "/proto/components/tabs", Category::UiPrimitive),
        ])
        .unwrap();
        let showcase = Showcase::new(registry, demos::builtin_demos(), demos::builtin_configs());

        let Json(response) = get_coverage(State(AppState::new(showcase))).await;
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["missing"], serde_json::json!(["tabs"]));
        assert_eq!(json["total"], 2);
        // every built-in demo counts, including ones this registry does not list
        assert_eq!(json["implemented"], 5);
        assert_eq!(json["coveragePercent"], 100);
    }
}
