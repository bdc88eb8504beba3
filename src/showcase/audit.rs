// Demo coverage audit
//
// Two ways to answer "which registry entries have no demo":
// - live: walk the loaded registry and demo table
// - static: scan the registry declaration and demo table source as text,
//   without building anything
//
// Both report the same missing slugs for the same inputs.

use crate::registry::{slug_of, ComponentDescriptor};
use crate::validator::percent;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Name of the function holding the demo table in showcase/demos.rs
const DEMO_TABLE_FN: &str = "fn builtin_demos";

/// Coverage of registry entries by demos
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoValidation {
    pub valid: bool,
    /// Slugs present in the registry but absent from the demo table
    pub missing: Vec<String>,
    pub total: usize,
    pub implemented: usize,
}

impl DemoValidation {
    /// `implemented / total`, rounded and capped at 100 when the demo table
    /// holds slugs the registry does not list
    pub fn coverage_percent(&self) -> u32 {
        percent(self.implemented, self.total).min(100)
    }
}

/// Slugs every descriptor should have a demo for, in registry order
pub fn all_component_slugs(descriptors: &[ComponentDescriptor]) -> Vec<String> {
    descriptors
        .iter()
        .filter_map(|d| d.slug())
        .map(str::to_string)
        .collect()
}

/// Compare expected slugs against `implemented`
pub fn validate_demos<I, S>(descriptors: &[ComponentDescriptor], implemented: I) -> DemoValidation
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    compare(all_component_slugs(descriptors), implemented)
}

fn compare<I, S>(expected: Vec<String>, implemented: I) -> DemoValidation
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let implemented: BTreeSet<String> = implemented.into_iter().map(Into::into).collect();
    let missing: Vec<String> = expected
        .iter()
        .filter(|slug| !implemented.contains(*slug))
        .cloned()
        .collect();

    DemoValidation {
        valid: missing.is_empty(),
        missing,
        total: expected.len(),
        implemented: implemented.len(),
    }
}

/// Human-readable summary of a coverage check
pub fn report(result: &DemoValidation) -> String {
    if result.valid {
        return format!("✅ All {} components have demos implemented!", result.total);
    }

    let list: Vec<String> = result
        .missing
        .iter()
        .map(|slug| format!("  - {}", slug))
        .collect();

    format!(
        "❌ Missing demos for {} component(s):\n{}\n\nProgress: {}/{} demos implemented ({}%)\n\nTo fix: add these slugs to builtin_demos in src/showcase/demos.rs",
        result.missing.len(),
        list.join("\n"),
        result.implemented,
        result.total,
        result.coverage_percent()
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Static scan
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`fn builtin_demos` not found in demo source")]
    MissingDemoTable,

    #[error("Invalid scan pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Slugs of every `path: "..."` / `path = "..."` literal in a registry declaration
pub fn scan_registry_slugs(source: &str) -> Result<Vec<String>, ScanError> {
    let pattern = Regex::new(r#"\bpath\s*[:=]\s*["']([^"']+)["']"#)?;
    Ok(pattern
        .captures_iter(source)
        .filter_map(|caps| slug_of(&caps[1]).map(str::to_string))
        .collect())
}

/// Keys inserted into the demo table inside `builtin_demos`
pub fn scan_demo_slugs(source: &str) -> Result<Vec<String>, ScanError> {
    let start = source
        .find(DEMO_TABLE_FN)
        .ok_or(ScanError::MissingDemoTable)?;
    let end = source[start..]
        .find("\n}")
        .map(|offset| start + offset)
        .unwrap_or(source.len());

    let pattern = Regex::new(r#"\.insert\(\s*"([a-z0-9-]+)""#)?;
    Ok(pattern
        .captures_iter(&source[start..end])
        .map(|caps| caps[1].to_string())
        .collect())
}

/// Coverage computed from source text alone
pub fn scan_sources(registry_source: &str, demo_source: &str) -> Result<DemoValidation, ScanError> {
    let expected = scan_registry_slugs(registry_source)?;
    let implemented = scan_demo_slugs(demo_source)?;
    Ok(compare(expected, implemented))
}

/// Coverage computed from the registry and demo source files on disk
pub fn scan_files(registry_path: &Path, demos_path: &Path) -> Result<DemoValidation, ScanError> {
    let read = |path: &Path| {
        std::fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })
    };
    scan_sources(&read(registry_path)?, &read(demos_path)?)
}
