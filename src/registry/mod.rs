//! Component registry: the catalog of everything the showcase can display.
//!
//! Descriptors are held in a single list with an explicit category, plus an
//! index by route path. Construction is the only place descriptors enter the
//! registry, and it rejects duplicates outright, so lookups never have to
//! pick between two candidates.
//!
//! ```text
//! catalog.rs (built-in)  ─┐
//!                         ├─> Registry::new ─> ordered descriptors + path index
//! registry.toml (opt-in) ─┘
//! ```

pub mod catalog;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Route prefix for component demo pages
pub const COMPONENTS_PREFIX: &str = "/proto/components/";

/// Route prefix for prototype flow pages
pub const PROTOTYPES_PREFIX: &str = "/proto/prototypes/";

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("'{name}' has invalid path '{path}' (expected /proto/components/<slug> or /proto/prototypes/<slug>)")]
    InvalidPath { name: String, path: String },

    #[error("path '{path}' is declared by both '{first}' and '{second}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("slug '{slug}' is declared by both '{first}' and '{second}'")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    #[error("'{name}' is declared twice in {category}")]
    DuplicateName { name: String, category: Category },

    #[error("Failed to read registry file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse registry file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

// ─────────────────────────────────────────────────────────────────────────────
// Categories
// ─────────────────────────────────────────────────────────────────────────────

/// Registry category, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    UiPrimitive,
    Custom,
    Draft,
    Prototype,
    Page,
}

impl Category {
    /// Fixed order used for concatenation and display grouping
    pub const ALL: [Category; 5] = [
        Category::UiPrimitive,
        Category::Custom,
        Category::Draft,
        Category::Prototype,
        Category::Page,
    ];

    /// Section name in the registry declaration
    pub fn key(self) -> &'static str {
        match self {
            Self::UiPrimitive => "ui_primitives",
            Self::Custom => "custom_components",
            Self::Draft => "draft_components",
            Self::Prototype => "prototypes",
            Self::Page => "pages",
        }
    }

    /// Singular label shown on a component page
    pub fn label(self) -> &'static str {
        match self {
            Self::UiPrimitive => "UI Primitive",
            Self::Custom => "Custom Component",
            Self::Draft => "Draft Component",
            Self::Prototype => "Prototype",
            Self::Page => "Page",
        }
    }

    /// Plural label shown in navigation and stats
    pub fn plural_label(self) -> &'static str {
        match self {
            Self::UiPrimitive => "UI Primitives",
            Self::Custom => "Custom Components",
            Self::Draft => "Draft Components",
            Self::Prototype => "Prototypes",
            Self::Page => "Pages",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::UiPrimitive => "Base components",
            Self::Custom => "Production ready",
            Self::Draft => "Experimental",
            Self::Prototype => "Full flows",
            Self::Page => "Page mocks",
        }
    }

    /// Route prefix descriptors of this category live under
    pub fn route_prefix(self) -> &'static str {
        match self {
            Self::Prototype | Self::Page => PROTOTYPES_PREFIX,
            _ => COMPONENTS_PREFIX,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Descriptors
// ─────────────────────────────────────────────────────────────────────────────

/// One registry entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    pub name: String,
    pub route_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: Category,
}

impl ComponentDescriptor {
    pub fn new(name: &str, route_path: &str, category: Category) -> Self {
        Self {
            name: name.to_string(),
            route_path: route_path.to_string(),
            source_ref: None,
            description: None,
            category,
        }
    }

    pub fn with_source(mut self, source_ref: &str) -> Self {
        self.source_ref = Some(source_ref.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Last path segment, or `None` if the path ends in `/`
    pub fn slug(&self) -> Option<&str> {
        slug_of(&self.route_path)
    }
}

/// Last segment of a route path (`/proto/components/button` -> `button`)
pub fn slug_of(path: &str) -> Option<&str> {
    path.rsplit('/').next().filter(|s| !s.is_empty())
}

/// Check a path is `<known prefix><slug>` with a lowercase, dash-separated slug
fn is_valid_route(path: &str) -> bool {
    let rest = path
        .strip_prefix(COMPONENTS_PREFIX)
        .or_else(|| path.strip_prefix(PROTOTYPES_PREFIX));

    rest.is_some_and(|slug| {
        !slug.is_empty()
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only, validated set of descriptors
#[derive(Debug, Clone)]
pub struct Registry {
    /// Sorted by category order; declaration order within a category
    descriptors: Vec<ComponentDescriptor>,
    by_path: HashMap<String, usize>,
}

impl Registry {
    /// Validate and index `descriptors`
    ///
    /// Fails on a malformed path, a path or slug shared by two descriptors, or
    /// a name declared twice in one category.
    pub fn new(mut descriptors: Vec<ComponentDescriptor>) -> Result<Self, RegistryError> {
        descriptors.sort_by_key(|d| Category::ALL.iter().position(|c| *c == d.category));

        let mut by_path: HashMap<String, usize> = HashMap::new();
        {
            let mut by_slug: HashMap<&str, usize> = HashMap::new();
            let mut names: HashMap<(Category, &str), usize> = HashMap::new();

            for (idx, descriptor) in descriptors.iter().enumerate() {
                let slug = match descriptor.slug() {
                    Some(slug) if is_valid_route(&descriptor.route_path) => slug,
                    _ => {
                        return Err(RegistryError::InvalidPath {
                            name: descriptor.name.clone(),
                            path: descriptor.route_path.clone(),
                        })
                    }
                };

                if let Some(&first) = by_path.get(&descriptor.route_path) {
                    return Err(RegistryError::DuplicatePath {
                        path: descriptor.route_path.clone(),
                        first: descriptors[first].name.clone(),
                        second: descriptor.name.clone(),
                    });
                }
                if let Some(&first) = by_slug.get(slug) {
                    return Err(RegistryError::DuplicateSlug {
                        slug: slug.to_string(),
                        first: descriptors[first].name.clone(),
                        second: descriptor.name.clone(),
                    });
                }
                if names
                    .insert((descriptor.category, descriptor.name.as_str()), idx)
                    .is_some()
                {
                    return Err(RegistryError::DuplicateName {
                        name: descriptor.name.clone(),
                        category: descriptor.category,
                    });
                }

                by_path.insert(descriptor.route_path.clone(), idx);
                by_slug.insert(slug, idx);
            }
        }

        Ok(Self {
            descriptors,
            by_path,
        })
    }

    /// Parse a TOML registry declaration
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self, RegistryError> {
        let file: FileRegistry = toml::from_str(contents).map_err(|e| RegistryError::Parse {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::new(file.into_descriptors())
    }

    /// Load a TOML registry declaration from disk
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RegistryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Every descriptor, grouped in `Category::ALL` order
    pub fn all(&self) -> &[ComponentDescriptor] {
        &self.descriptors
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &ComponentDescriptor> {
        self.descriptors
            .iter()
            .filter(move |d| d.category == category)
    }

    pub fn count(&self, category: Category) -> usize {
        self.by_category(category).count()
    }

    pub fn find_by_path(&self, path: &str) -> Option<&ComponentDescriptor> {
        self.by_path.get(path).map(|&idx| &self.descriptors[idx])
    }

    /// Category of the first descriptor named `name`, scanning in category order
    pub fn category_of(&self, name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|&category| self.by_category(category).any(|d| d.name == name))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File declaration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// A descriptor as written in the registry file
#[derive(Debug, Deserialize)]
struct FileEntry {
    name: String,
    path: String,
    file: Option<String>,
    description: Option<String>,
}

/// Registry file structure: one array-of-tables per category
#[derive(Debug, Deserialize, Default)]
struct FileRegistry {
    #[serde(default)]
    ui_primitives: Vec<FileEntry>,
    #[serde(default)]
    custom_components: Vec<FileEntry>,
    #[serde(default)]
    draft_components: Vec<FileEntry>,
    #[serde(default)]
    prototypes: Vec<FileEntry>,
    #[serde(default)]
    pages: Vec<FileEntry>,
}

impl FileRegistry {
    fn into_descriptors(self) -> Vec<ComponentDescriptor> {
        let sections = [
            (Category::UiPrimitive, self.ui_primitives),
            (Category::Custom, self.custom_components),
            (Category::Draft, self.draft_components),
            (Category::Prototype, self.prototypes),
            (Category::Page, self.pages),
        ];

        sections
            .into_iter()
            .flat_map(|(category, entries)| {
                entries.into_iter().map(move |entry| ComponentDescriptor {
                    name: entry.name,
                    route_path: entry.path,
                    source_ref: entry.file,
                    description: entry.description,
                    category,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, path: &str, category: Category) -> ComponentDescriptor {
        ComponentDescriptor::new(name, path, category)
    }

    #[test]
    fn test_orders_by_category_preserving_declaration_order() {
        let registry = Registry::new(vec![
            descriptor("Card", "/proto/components/card", Category::Draft),
            descriptor("Button", "/proto/components/button", Category::UiPrimitive),
            descriptor("Flow", "/proto/prototypes/flow", Category::Prototype),
            descriptor("Alert", "/proto/components/alert", Category::UiPrimitive),
        ])
        .unwrap();

        let names: Vec<_> = registry.all().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Button", "Alert", "Card", "Flow"]);
        assert_eq!(registry.count(Category::UiPrimitive), 2);
        assert_eq!(registry.count(Category::Page), 0);
    }

    #[test]
    fn test_find_by_path_and_category_of() {
        let registry = Registry::new(vec![descriptor(
            "Example Card",
            "/proto/components/example-card",
            Category::Draft,
        )])
        .unwrap();

        let found = registry
            .find_by_path("/proto/components/example-card")
            .unwrap();
        assert_eq!(found.name, "Example Card");
        assert_eq!(found.slug(), Some("example-card"));
        assert!(registry.find_by_path("/proto/components/other").is_none());
        assert_eq!(registry.category_of("Example Card"), Some(Category::Draft));
        assert_eq!(registry.category_of("Nope"), None);
    }

    #[test]
    fn test_category_of_first_match_wins() {
        let registry = Registry::new(vec![
            descriptor("Card", "/proto/components/card-draft", Category::Draft),
            descriptor("Card", "/proto/components/card", Category::Custom),
        ])
        .unwrap();
        assert_eq!(registry.category_of("Card"), Some(Category::Custom));
    }

    #[test]
    fn test_rejects_duplicate_path() {
        let err = Registry::new(vec![
            descriptor("A", "/proto/components/a", Category::UiPrimitive),
            descriptor("B", "/proto/components/a", Category::Custom),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicatePath { .. }));
        assert_eq!(
            err.to_string(),
            "path '/proto/components/a' is declared by both 'A' and 'B'"
        );
    }

    #[test]
    fn test_rejects_duplicate_slug_across_prefixes() {
        let err = Registry::new(vec![
            descriptor("A", "/proto/components/shared", Category::Custom),
            descriptor("B", "/proto/prototypes/shared", Category::Prototype),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateSlug { .. }));
    }

    #[test]
    fn test_rejects_duplicate_name_in_category() {
        let err = Registry::new(vec![
            descriptor("A", "/proto/components/a", Category::Draft),
            descriptor("A", "/proto/components/a-two", Category::Draft),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { .. }));
    }

    #[test]
    fn test_rejects_malformed_paths() {
        for path in [
            "/proto/components/",
            "/proto/components/Button",
            "/proto/components/a/b",
            "/elsewhere/button",
        ] {
            let result = Registry::new(vec![descriptor("X", path, Category::Custom)]);
            assert!(
                matches!(result, Err(RegistryError::InvalidPath { .. })),
                "{} should be rejected",
                path
            );
        }
    }

    #[test]
    fn test_slug_of() {
        assert_eq!(slug_of("/a/b/x"), Some("x"));
        assert_eq!(slug_of("/a/b/"), None);
        assert_eq!(slug_of("plain"), Some("plain"));
    }

    #[test]
    fn test_from_toml_str() {
        let toml_str = r#"
[[ui_primitives]]
name = "Button"
path = "/proto/components/button"
file = "src/components/ui/button.rs"

[[prototypes]]
name = "Checkout"
path = "/proto/prototypes/checkout"
description = "Checkout flow"
"#;
        let registry = Registry::from_toml_str(toml_str, Path::new("registry.toml")).unwrap();
        assert_eq!(registry.len(), 2);

        let button = registry.find_by_path("/proto/components/button").unwrap();
        assert_eq!(button.category, Category::UiPrimitive);
        assert_eq!(
            button.source_ref.as_deref(),
            Some("src/components/ui/button.rs")
        );

        let checkout = registry.find_by_path("/proto/prototypes/checkout").unwrap();
        assert_eq!(checkout.description.as_deref(), Some("Checkout flow"));
    }

    #[test]
    fn test_from_toml_str_reports_parse_errors() {
        let err = Registry::from_toml_str("[[ui_primitives]]\nname = 3", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse registry file bad.toml"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.toml");
        std::fs::write(
            &path,
            "[[draft_components]]\nname = \"Card\"\npath = \"/proto/components/card\"\n",
        )
        .unwrap();

        let registry = Registry::from_file(&path).unwrap();
        assert_eq!(registry.category_of("Card"), Some(Category::Draft));

        let missing = Registry::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(missing, RegistryError::Read { .. }));
    }
}
