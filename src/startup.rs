// Startup module - displays banner and showcase status
//
// Shows version and config source, then one line per validated component and
// the demo coverage of the registry, before the server starts listening.

use crate::config::{Config, VERSION};
use crate::registry::Category;
use crate::showcase::Showcase;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// One validated component, for display
pub struct ComponentStatus {
    pub name: String,
    pub valid: bool,
    pub detail: String,
}

/// Validation status of every configured component
fn component_status(showcase: &Showcase) -> Vec<ComponentStatus> {
    showcase
        .components
        .validation_results
        .iter()
        .map(|result| ComponentStatus {
            name: result.component_name.clone(),
            valid: result.is_valid,
            detail: match &result.error {
                Some(error) => error.clone(),
                None => "renders".to_string(),
            },
        })
        .collect()
}

/// Per-category registry counts, e.g. "2 UI Primitives · 1 Custom Components"
fn registry_summary(showcase: &Showcase) -> String {
    Category::ALL
        .into_iter()
        .map(|category| {
            format!(
                "{} {}",
                showcase.registry.count(category),
                category.plural_label()
            )
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Print the startup banner and showcase status
pub fn print_startup(config: &Config, showcase: &Showcase) {
    use colors::*;

    // Banner
    println!();
    println!("  {BOLD}{CYAN}Design System Showcase{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Component registry, demos and coverage audit{RESET}");
    println!();

    // Config file status
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    match &config.registry_file {
        Some(path) => println!("  {DIM}Registry:{RESET} {}", path.display()),
        None => println!("  {DIM}Registry:{RESET} {DIM}(built-in catalog){RESET}"),
    }
    println!("  {DIM}{}{RESET}", registry_summary(showcase));
    println!();

    // Component validation
    println!("  {DIM}Validating components...{RESET}");
    for status in component_status(showcase) {
        print_component_status(&status);
    }
    for mismatch in &showcase.config_mismatches {
        println!("    {YELLOW}!{RESET} {DIM}{}{RESET}", mismatch);
    }
    println!();

    // Coverage
    let coverage = showcase.coverage();
    let (color, icon) = if coverage.valid {
        (GREEN, "✓")
    } else {
        (YELLOW, "!")
    };
    println!(
        "  {color}{icon}{RESET} Demo coverage {BOLD}{}%{RESET} {DIM}({}/{}){RESET}",
        coverage.coverage_percent(),
        coverage.implemented,
        coverage.total
    );
    if !coverage.missing.is_empty() {
        println!("    {DIM}missing: {}{RESET}", coverage.missing.join(", "));
    }
    println!();

    println!(
        "  {MAGENTA}▸{RESET} Showcase at {BOLD}http://{}/proto{RESET}",
        config.bind_addr
    );
    println!("  {DIM}▸ Mode: {}{RESET}", config.mode.as_str());
    println!();
}

/// Print a single component's status
fn print_component_status(status: &ComponentStatus) {
    use colors::*;

    let icon = if status.valid {
        format!("{GREEN}✓{RESET}")
    } else {
        format!("{RED}✗{RESET}")
    };

    println!(
        "    {icon} {:<18} {DIM}{}{RESET}",
        status.name, status.detail
    );
}

/// Write the same status to the log
pub fn log_startup(config: &Config, showcase: &Showcase) {
    tracing::info!("Design System Showcase v{}", VERSION);
    tracing::info!("Registry: {}", registry_summary(showcase));

    let summary = showcase.components.summary();
    tracing::info!(
        "Components: {}/{} valid ({}%)",
        summary.successful,
        summary.total,
        summary.success_rate
    );

    let coverage = showcase.coverage();
    tracing::info!(
        "Demo coverage: {}/{} ({}%)",
        coverage.implemented,
        coverage.total,
        coverage.coverage_percent()
    );

    tracing::info!("▸ Listening on {} ({})", config.bind_addr, config.mode.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_status_lists_every_config() {
        let showcase = Showcase::builtin().unwrap();
        let statuses = component_status(&showcase);
        assert_eq!(statuses.len(), 5);
        assert!(statuses.iter().all(|s| s.valid && s.detail == "renders"));
    }

    #[test]
    fn test_registry_summary() {
        let showcase = Showcase::builtin().unwrap();
        assert_eq!(
            registry_summary(&showcase),
            "2 UI Primitives · 1 Custom Components · 1 Draft Components · 1 Prototypes · 0 Pages"
        );
    }
}
