// Demo resolver - maps a route slug to its descriptor and demo renderer

use super::demos::{DemoRenderer, DemoTable};
use crate::registry::{Category, ComponentDescriptor, Registry, COMPONENTS_PREFIX, PROTOTYPES_PREFIX};

/// No descriptor is registered at the requested path
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("no component registered at {path}")]
pub struct NotFound {
    pub path: String,
}

/// Whether a resolved descriptor has something to render
pub enum DemoState<'a> {
    Ready(&'a DemoRenderer),
    /// Descriptor exists but nobody has written its demo yet
    MissingDemo,
}

impl DemoState<'_> {
    pub fn is_ready(&self) -> bool {
        matches!(self, DemoState::Ready(_))
    }
}

impl std::fmt::Debug for DemoState<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemoState::Ready(_) => f.write_str("Ready"),
            DemoState::MissingDemo => f.write_str("MissingDemo"),
        }
    }
}

/// A descriptor with its classification and demo
#[derive(Debug)]
pub struct Resolved<'a> {
    pub slug: String,
    pub descriptor: &'a ComponentDescriptor,
    pub category: Category,
    pub demo: DemoState<'a>,
}

/// Resolve `/proto/components/{slug}`
pub fn resolve<'a>(
    registry: &'a Registry,
    demos: &'a DemoTable,
    slug: &str,
) -> Result<Resolved<'a>, NotFound> {
    resolve_under(registry, demos, COMPONENTS_PREFIX, slug)
}

/// Resolve `/proto/prototypes/{slug}`
pub fn resolve_prototype<'a>(
    registry: &'a Registry,
    demos: &'a DemoTable,
    slug: &str,
) -> Result<Resolved<'a>, NotFound> {
    resolve_under(registry, demos, PROTOTYPES_PREFIX, slug)
}

fn resolve_under<'a>(
    registry: &'a Registry,
    demos: &'a DemoTable,
    prefix: &str,
    slug: &str,
) -> Result<Resolved<'a>, NotFound> {
    let path = format!("{}{}", prefix, slug);

    let Some(descriptor) = registry.find_by_path(&path) else {
        tracing::debug!("No descriptor for {}", path);
        return Err(NotFound { path });
    };

    let category = registry
        .category_of(&descriptor.name)
        .unwrap_or(descriptor.category);

    let demo = match demos.get(slug) {
        Some(renderer) => DemoState::Ready(renderer),
        None => {
            tracing::debug!("Descriptor {} has no demo", descriptor.name);
            DemoState::MissingDemo
        }
    };

    Ok(Resolved {
        slug: slug.to_string(),
        descriptor,
        category,
        demo,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::text;

    fn example_registry() -> Registry {
        Registry::new(vec![ComponentDescriptor::new(
            "Example Card",
            "/proto/components/example-card",
            Category::Draft,
        )])
        .unwrap()
    }

    fn example_demos() -> DemoTable {
        let mut demos = DemoTable::new();
        demos.insert("example-card", || text("example card demo"));
        demos
    }

    #[test]
    fn test_resolves_descriptor_and_renderer() {
        let registry = example_registry();
        let demos = example_demos();

        let resolved = resolve(&registry, &demos, "example-card").unwrap();
        assert_eq!(resolved.descriptor.name, "Example Card");
        assert_eq!(resolved.category, Category::Draft);

        let DemoState::Ready(render) = resolved.demo else {
            panic!("expected a renderer");
        };
        assert_eq!(render().text_content(), "example card demo");
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let registry = example_registry();
        let demos = example_demos();

        let err = resolve(&registry, &demos, "missing-slug").unwrap_err();
        assert_eq!(
            err,
            NotFound {
                path: "/proto/components/missing-slug".to_string()
            }
        );
    }

    #[test]
    fn test_empty_demo_table_yields_missing_demo() {
        let registry = example_registry();
        let demos = DemoTable::new();

        let resolved = resolve(&registry, &demos, "example-card").unwrap();
        assert!(matches!(resolved.demo, DemoState::MissingDemo));
        assert!(!resolved.demo.is_ready());
    }

    #[test]
    fn test_prototype_route_is_separate() {
        let registry = Registry::new(vec![ComponentDescriptor::new(
            "Checkout",
            "/proto/prototypes/checkout",
            Category::Prototype,
        )])
        .unwrap();
        let demos = DemoTable::new();

        assert!(resolve(&registry, &demos, "checkout").is_err());
        let resolved = resolve_prototype(&registry, &demos, "checkout").unwrap();
        assert_eq!(resolved.category, Category::Prototype);
    }
}
