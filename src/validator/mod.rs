// Validator module - checks every demo config can build its component
//
// A config pairs a component with the inputs its demo uses. Validation builds
// the component once with those inputs and records whether that worked. It
// never fails the caller: a broken component becomes a result with
// `is_valid = false` and the captured message.

use crate::components::{ConstructionFailure, Demoable, Inputs};
use crate::render::{el, RenderTree};
use serde::Serialize;
use std::any::Any;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Once};

/// Demo configs keyed by slug
pub type ComponentConfigs = BTreeMap<String, DemoConfig>;

/// A component plus the inputs its demo renders with
#[derive(Clone)]
pub struct DemoConfig {
    pub component_name: String,
    pub factory: Arc<dyn Demoable>,
    pub default_inputs: Inputs,
    pub fallback_message: Option<String>,
}

impl DemoConfig {
    /// Config using the component's own name and default inputs
    pub fn new(factory: Arc<dyn Demoable>) -> Self {
        Self {
            component_name: factory.name().to_string(),
            default_inputs: factory.default_inputs(),
            factory,
            fallback_message: None,
        }
    }

    pub fn with_inputs(mut self, inputs: Inputs) -> Self {
        self.default_inputs = inputs;
        self
    }

    pub fn with_fallback(mut self, message: &str) -> Self {
        self.fallback_message = Some(message.to_string());
        self
    }

    /// Build the component with the configured inputs
    ///
    /// A panic inside `build` is caught and reported as a failure, same as an
    /// `Err` return.
    pub fn construct(&self) -> Result<RenderTree, ConstructionFailure> {
        install_panic_hook();

        CONSTRUCTING.with(|flag| flag.set(true));
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.factory.build(&self.default_inputs)
        }));
        CONSTRUCTING.with(|flag| flag.set(false));

        match outcome {
            Ok(result) => result,
            Err(payload) => Err(ConstructionFailure::Panicked(panic_message(payload.as_ref()))),
        }
    }
}

impl std::fmt::Debug for DemoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoConfig")
            .field("component_name", &self.component_name)
            .field("default_inputs", &self.default_inputs)
            .field("fallback_message", &self.fallback_message)
            .finish_non_exhaustive()
    }
}

thread_local! {
    /// Set while this thread is inside `DemoConfig::construct`
    static CONSTRUCTING: Cell<bool> = const { Cell::new(false) };
}

static PANIC_HOOK: Once = Once::new();

/// Route panics raised while constructing a component to tracing instead of
/// stderr. Panics anywhere else still reach the previous hook.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CONSTRUCTING.with(Cell::get) {
                tracing::debug!("Component panicked during construction: {}", info);
            } else {
                previous(info);
            }
        }));
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "Unknown error".to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome of building one component
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub component_name: String,
    pub is_valid: bool,
    pub can_render: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Try to build `config`'s component with its default inputs
pub fn validate_component(config: &DemoConfig) -> ValidationResult {
    match config.construct() {
        Ok(_) => ValidationResult {
            component_name: config.component_name.clone(),
            is_valid: true,
            can_render: true,
            error: None,
        },
        Err(failure) => {
            let message = failure.to_string();
            ValidationResult {
                component_name: config.component_name.clone(),
                is_valid: false,
                can_render: false,
                error: Some(if message.is_empty() {
                    "Unknown error".to_string()
                } else {
                    message
                }),
            }
        }
    }
}

/// Validate every config in order; one failure does not stop the rest
pub fn validate_all<'a>(configs: impl IntoIterator<Item = &'a DemoConfig>) -> Vec<ValidationResult> {
    configs.into_iter().map(validate_component).collect()
}

/// Configs together with their validation results
///
/// Built once at startup and shared read-only for the life of the process.
#[derive(Debug)]
pub struct ComponentRegistry {
    pub components: ComponentConfigs,
    pub validation_results: Vec<ValidationResult>,
    pub failed_components: Vec<ValidationResult>,
    pub has_errors: bool,
}

/// Serializable view for the diagnostics endpoint and audit output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub success_rate: u32,
    pub has_errors: bool,
    pub validation_results: Vec<ValidationResult>,
    pub failed_components: Vec<ValidationResult>,
}

/// Validate `components` and aggregate the results
pub fn build_registry(components: ComponentConfigs) -> ComponentRegistry {
    let validation_results = validate_all(components.values());
    let failed_components: Vec<ValidationResult> = validation_results
        .iter()
        .filter(|r| !r.is_valid)
        .cloned()
        .collect();

    for result in &validation_results {
        if result.is_valid {
            tracing::debug!("Component validated: {}", result.component_name);
        }
    }

    if !failed_components.is_empty() {
        let names: Vec<_> = failed_components
            .iter()
            .map(|r| r.component_name.as_str())
            .collect();
        tracing::warn!("Failed component validations: {:?}", names);
    }

    ComponentRegistry {
        has_errors: !failed_components.is_empty(),
        components,
        validation_results,
        failed_components,
    }
}

impl ComponentRegistry {
    pub fn successful(&self) -> impl Iterator<Item = &ValidationResult> {
        self.validation_results.iter().filter(|r| r.is_valid)
    }

    /// Result for the config registered under `key`
    pub fn find_result(&self, key: &str) -> Option<&ValidationResult> {
        let config = self.components.get(key)?;
        self.validation_results
            .iter()
            .find(|r| r.component_name == config.component_name)
    }

    /// Share of valid components, rounded to a whole percent (100 when empty)
    pub fn success_rate(&self) -> u32 {
        percent(self.successful().count(), self.validation_results.len())
    }

    pub fn summary(&self) -> ValidationSummary {
        let successful = self.successful().count();
        ValidationSummary {
            total: self.validation_results.len(),
            successful,
            failed: self.failed_components.len(),
            success_rate: self.success_rate(),
            has_errors: self.has_errors,
            validation_results: self.validation_results.clone(),
            failed_components: self.failed_components.clone(),
        }
    }
}

/// `part / whole` as a rounded percentage; an empty whole counts as complete
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 100;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

// ─────────────────────────────────────────────────────────────────────────────
// Safe demo rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Renderer that shows the component, or a fallback block if it fails to build
pub fn safe_renderer(config: DemoConfig) -> impl Fn() -> RenderTree + Send + Sync {
    move || {
        let caption = el("div")
            .class("text-sm text-muted-foreground text-center mb-4")
            .text(format!("{} component", config.component_name));

        match config.construct() {
            Ok(tree) => el("div")
                .class("max-w-4xl mx-auto")
                .child(caption)
                .child(
                    el("div")
                        .class("border rounded-lg overflow-hidden")
                        .child(tree),
                )
                .into(),
            Err(failure) => {
                tracing::warn!(
                    "Rendering fallback for {}: {}",
                    config.component_name,
                    failure
                );
                fallback_block(caption, &failure.to_string(), config.fallback_message.as_deref())
            }
        }
    }
}

fn fallback_block(caption: crate::render::Element, error: &str, hint: Option<&str>) -> RenderTree {
    el("div")
        .class("max-w-4xl mx-auto demo-fallback")
        .child(caption)
        .child(
            el("div")
                .class("border rounded-lg p-4 bg-destructive/10 min-h-[300px]")
                .child(
                    el("div")
                        .class("text-sm text-destructive text-center mb-2")
                        .text("⚠️ Component failed to load"),
                )
                .child(
                    el("div")
                        .class("text-xs text-muted-foreground text-center fallback-error")
                        .text(error),
                )
                .child_if(hint.is_some(), || {
                    el("div")
                        .class("text-xs text-muted-foreground text-center mt-2")
                        .text(hint.unwrap_or_default())
                        .into()
                }),
        )
        .into()
}
