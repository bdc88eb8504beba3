// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - serve (default): run the showcase server
// - audit: check every registry entry has a demo and every component builds
// - config --show|--path|--reset: configuration management

use crate::config::{Config, VERSION};
use crate::registry::Registry;
use crate::showcase::audit::{self, DemoValidation, ScanError};
use crate::showcase::Showcase;
use crate::validator::{ComponentRegistry, ValidationResult};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Registry declaration scanned by `audit --static` when no registry file is configured
const CATALOG_SOURCE: &str = "src/registry/catalog.rs";

/// Demo table scanned by `audit --static`
const DEMOS_SOURCE: &str = "src/showcase/demos.rs";

/// Design system showcase - component registry, demos and coverage audit
#[derive(Parser)]
#[command(name = "ds-showcase")]
#[command(version = VERSION)]
#[command(about = "Design system component showcase", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the showcase server (default)
    Serve,

    /// Check demo coverage and component validation; exits 1 on any gap
    Audit {
        /// Scan source files as text instead of loading the registry
        #[arg(long = "static")]
        static_scan: bool,

        /// Project root for --static
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Validate a single component config by slug or name
        #[arg(long)]
        component: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> bool {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Audit {
            static_scan,
            root,
            component,
        }) => {
            let passed = handle_audit(static_scan, &root, component.as_deref());
            std::process::exit(if passed { 0 } else { 1 });
        }
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else {
                println!("Usage: ds-showcase config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            true
        }
        Some(Commands::Serve) | None => false,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Audit
// ─────────────────────────────────────────────────────────────────────────────

/// Printable audit outcome
#[derive(Debug)]
pub struct AuditReport {
    pub lines: Vec<String>,
    pub passed: bool,
}

fn handle_audit(static_scan: bool, root: &Path, component: Option<&str>) -> bool {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return false;
        }
    };

    let report = if static_scan {
        match static_audit(root, config.registry_file.as_deref()) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("❌ Static scan failed: {}", e);
                return false;
            }
        }
    } else {
        match Showcase::from_registry_file(config.registry_file.as_deref()) {
            Ok(showcase) => match component {
                Some(name) => component_audit(&showcase.components, name),
                None => live_audit(&showcase),
            },
            Err(e) => {
                eprintln!("❌ Registry error: {}", e);
                return false;
            }
        }
    };

    for line in &report.lines {
        println!("{}", line);
    }
    report.passed
}

fn result_line(result: &ValidationResult) -> String {
    match &result.error {
        None => format!("✅ {}", result.component_name),
        Some(error) => format!("❌ {}: {}", result.component_name, error),
    }
}

fn coverage_lines(coverage: &DemoValidation) -> Vec<String> {
    audit::report(coverage).lines().map(str::to_string).collect()
}

/// Validate every config and check demo coverage of the loaded registry
pub fn live_audit(showcase: &Showcase) -> AuditReport {
    let summary = showcase.components.summary();
    let coverage = showcase.coverage();

    let mut lines = vec!["🔍 Validating components...".to_string(), String::new()];
    lines.extend(summary.validation_results.iter().map(result_line));
    lines.push(String::new());
    lines.push(format!(
        "📊 {}/{} components valid ({}%)",
        summary.successful, summary.total, summary.success_rate
    ));
    if !showcase.config_mismatches.is_empty() {
        lines.push(String::new());
        lines.extend(
            showcase
                .config_mismatches
                .iter()
                .map(|mismatch| format!("❌ Demo {}", mismatch)),
        );
    }
    lines.push(String::new());
    lines.extend(coverage_lines(&coverage));

    AuditReport {
        passed: !summary.has_errors && showcase.config_mismatches.is_empty() && coverage.valid,
        lines,
    }
}

/// Result for one config, looked up by slug or component name
pub fn component_audit(components: &ComponentRegistry, name: &str) -> AuditReport {
    let result = components.find_result(name).or_else(|| {
        components
            .validation_results
            .iter()
            .find(|r| r.component_name == name)
    });

    let Some(result) = result else {
        let known: Vec<&str> = components.components.keys().map(String::as_str).collect();
        return AuditReport {
            lines: vec![
                format!("❌ Unknown component '{}'", name),
                format!("   Known: {}", known.join(", ")),
            ],
            passed: false,
        };
    };

    AuditReport {
        passed: result.is_valid,
        lines: vec![result_line(result)],
    }
}

/// Demo coverage from source text under `root`
///
/// Scans the configured TOML registry file when there is one, otherwise the
/// built-in catalog source under `root`. The registry file is opened as
/// given, same as the live audit and the server, so a relative path is read
/// from the working directory.
pub fn static_audit(root: &Path, registry_file: Option<&Path>) -> Result<AuditReport, ScanError> {
    let registry_path = match registry_file {
        Some(path) => path.to_path_buf(),
        None => root.join(CATALOG_SOURCE),
    };
    let demos_path = root.join(DEMOS_SOURCE);

    let coverage = audit::scan_files(&registry_path, &demos_path)?;

    let mut lines = vec![
        format!("🔍 Scanning {}", registry_path.display()),
        format!("   against {}", demos_path.display()),
        String::new(),
    ];
    lines.extend(coverage_lines(&coverage));

    Ok(AuditReport {
        passed: coverage.valid,
        lines,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────────────────────────

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("bind_addr = {:?}", config.bind_addr.to_string());
    println!("mode = {:?}", config.mode.as_str());
    match &config.registry_file {
        Some(path) => println!("registry_file = {:?}", path.display().to_string()),
        None => println!("# registry_file unset (built-in catalog)"),
    }
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);
    println!();
    println!("[audit]");
    println!("warn_on_startup = {}", config.audit.warn_on_startup);

    // Registry check, so a bad registry file shows up here too
    if let Some(path) = &config.registry_file {
        println!();
        match Registry::from_file(path) {
            Ok(registry) => println!("# Registry file OK: {} entries", registry.len()),
            Err(e) => println!("# Registry file error: {}", e),
        }
    }

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Err(e) = Config::default().save() {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}
