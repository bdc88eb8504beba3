// Built-in registry declaration
//
// Hand-maintained list of components, prototypes, and pages shown by the
// showcase. Add an entry here and a matching demo in showcase/demos.rs; the
// audit command reports any entry without one.
//
// Keep each `path:` on a single line as a string literal, the static audit
// scans this file as text.

use super::{Category, ComponentDescriptor, Registry, RegistryError};

/// A statically declared registry entry
pub struct Entry {
    pub name: &'static str,
    pub path: &'static str,
    pub file: Option<&'static str>,
    pub description: Option<&'static str>,
}

pub const UI_PRIMITIVES: &[Entry] = &[
    Entry {
        name: "Button",
        path: "/proto/components/button",
        file: Some("src/components/ui/button.rs"),
        description: None,
    },
    Entry {
        name: "Badge",
        path: "/proto/components/badge",
        file: Some("src/components/ui/badge.rs"),
        description: None,
    },
];

pub const CUSTOM_COMPONENTS: &[Entry] = &[Entry {
    name: "Stat Tile",
    path: "/proto/components/stat-tile",
    file: Some("src/components/stat_tile.rs"),
    description: None,
}];

pub const DRAFT_COMPONENTS: &[Entry] = &[Entry {
    name: "Example Card",
    path: "/proto/components/example-card",
    file: Some("src/components/draft/example_card.rs"),
    description: None,
}];

pub const PROTOTYPES: &[Entry] = &[Entry {
    name: "Draft Promotion",
    path: "/proto/prototypes/draft-promotion",
    file: Some("src/components/draft_promotion.rs"),
    description: Some("Walkthrough for moving a draft component into production"),
}];

pub const PAGES: &[Entry] = &[];

/// Build the registry from the static declaration
pub fn builtin() -> Result<Registry, RegistryError> {
    let sections = [
        (Category::UiPrimitive, UI_PRIMITIVES),
        (Category::Custom, CUSTOM_COMPONENTS),
        (Category::Draft, DRAFT_COMPONENTS),
        (Category::Prototype, PROTOTYPES),
        (Category::Page, PAGES),
    ];

    let descriptors = sections
        .into_iter()
        .flat_map(|(category, entries)| entries.iter().map(move |e| e.descriptor(category)))
        .collect();

    Registry::new(descriptors)
}

impl Entry {
    fn descriptor(&self, category: Category) -> ComponentDescriptor {
        let mut descriptor = ComponentDescriptor::new(self.name, self.path, category);
        if let Some(file) = self.file {
            descriptor = descriptor.with_source(file);
        }
        if let Some(description) = self.description {
            descriptor = descriptor.with_description(description);
        }
        descriptor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = builtin().expect("built-in registry must pass startup checks");
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.count(Category::UiPrimitive), 2);
        assert_eq!(registry.count(Category::Draft), 1);
        assert_eq!(registry.category_of("Example Card"), Some(Category::Draft));
    }

    #[test]
    fn test_prefixes_match_categories() {
        let registry = builtin().unwrap();
        for descriptor in registry.all() {
            assert!(
                descriptor
                    .route_path
                    .starts_with(descriptor.category.route_prefix()),
                "{} is declared under the wrong prefix",
                descriptor.name
            );
        }
    }

    #[test]
    fn test_source_refs_exist() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        for descriptor in builtin().unwrap().all() {
            let file = descriptor.source_ref.as_deref().unwrap();
            assert!(root.join(file).is_file(), "{} does not exist", file);
        }
    }
}
