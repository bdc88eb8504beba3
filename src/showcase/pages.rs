// Presentation shell - page layout, navigation, index and component pages
//
// Pages are assembled as render trees and serialized once. Nothing here
// decides what exists or whether it works; that comes from the registry,
// resolver and validator through `Showcase`.

use crate::components::{DraftPromotion, StatTile};
use crate::registry::{Category, ComponentDescriptor, Registry};
use crate::render::{el, text, Element, RenderTree};

use super::resolver::{DemoState, Resolved};
use super::Showcase;

/// Where draft components live and where promoted ones go
const DRAFT_DIR: &str = "src/components/draft/";
const PRODUCTION_DIR: &str = "src/components/";

/// Categories with a stat tile on the index page
const STAT_CATEGORIES: [Category; 4] = [
    Category::UiPrimitive,
    Category::Custom,
    Category::Draft,
    Category::Prototype,
];

const STYLESHEET: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,sans-serif;background:#0b0b0f;color:#e5e5e5;line-height:1.5}
a{color:inherit}
code,pre{font-family:ui-monospace,monospace}
pre{background:#1c1c22;padding:1rem;border-radius:.5rem;overflow-x:auto;font-size:.8rem}
.proto-header{position:sticky;top:0;display:flex;gap:1rem;align-items:center;padding:.75rem 1.5rem;border-bottom:1px solid #2a2a33;background:#0b0b0fee}
.proto-header .viewing{flex:1;text-align:center;font-size:.875rem}
.layout{display:flex;min-height:100vh}
.ds-nav{width:16rem;padding:1.5rem;border-right:1px solid #2a2a33}
.ds-nav h3{font-size:.8rem;text-transform:uppercase;color:#8a8a99;margin:1.25rem 0 .5rem}
.ds-nav a{display:block;padding:.25rem 0;text-decoration:none}
main{flex:1;padding:2rem 3rem;max-width:64rem}
.card{padding:1.5rem;border:1px solid #2a2a33;border-radius:.75rem;background:#14141a;margin-bottom:1.5rem}
.stats{display:grid;grid-template-columns:repeat(4,1fr);gap:1rem;margin-bottom:2rem}
.pill{padding:.125rem .5rem;border-radius:999px;font-size:.75rem}
.bg-blue-500\/20{background:#3b82f633;color:#3b82f6}
.bg-orange-500\/20{background:#f9731633;color:#f97316}
.bg-purple-500\/20{background:#a855f733;color:#a855f7}
.bg-green-500\/20{background:#22c55e33;color:#22c55e}
.demo-missing{text-align:center;color:#8a8a99;padding:3rem 0}
.demo-fallback{color:#f87171}
"#;

// ─────────────────────────────────────────────────────────────────────────────
// Layout
// ─────────────────────────────────────────────────────────────────────────────

/// Pill colors for a category badge
fn badge_class(category: Category) -> &'static str {
    match category {
        Category::UiPrimitive => "bg-blue-500/20 text-blue-500",
        Category::Draft => "bg-orange-500/20 text-orange-500",
        Category::Prototype => "bg-purple-500/20 text-purple-500",
        Category::Custom | Category::Page => "bg-green-500/20 text-green-500",
    }
}

fn category_badge(category: Category) -> Element {
    el("span")
        .class("pill category-badge")
        .class(badge_class(category))
        .text(category.label())
}

/// Sticky header: back/home links and, on a component page, what is being viewed
fn header(viewing: Option<(&ComponentDescriptor, Category)>) -> Element {
    let mut header = el("header").class("proto-header");

    if viewing.is_some() {
        header = header.child(el("a").attr("href", "/proto").text("← Back"));
    }
    header = header.child(el("a").attr("href", "/proto").attr("title", "Home").text("⌂"));

    if let Some((descriptor, category)) = viewing {
        header = header.child(
            el("div")
                .class("viewing")
                .child(el("span").class("text-muted-foreground").text("Viewing: "))
                .child(el("strong").text(descriptor.name.as_str()))
                .child(text(" "))
                .child(category_badge(category)),
        );
    }

    header
}

/// Navigation grouped by category, every category listed even when empty
fn nav(registry: &Registry) -> Element {
    let sections = Category::ALL.into_iter().map(|category| {
        let items: Vec<Element> = registry
            .by_category(category)
            .map(|d| el("a").attr("href", d.route_path.as_str()).text(d.name.as_str()))
            .collect();

        let section = el("section")
            .class("nav-section")
            .attr("data-category", category.key())
            .child(el("h3").text(format!(
                "{} ({})",
                category.plural_label(),
                items.len()
            )));

        if items.is_empty() {
            section.child(el("p").class("text-xs text-muted-foreground").text("No items yet"))
        } else {
            section.children(items)
        }
    });

    el("nav")
        .class("ds-nav")
        .child(el("h2").text("Design System"))
        .children(sections)
}

/// Full HTML document: header, category navigation and `content`
pub fn document(
    title: &str,
    registry: &Registry,
    viewing: Option<(&ComponentDescriptor, Category)>,
    content: impl Into<RenderTree>,
) -> String {
    let html: RenderTree = el("html")
        .attr("lang", "en")
        .child(
            el("head")
                .child(el("meta").attr("charset", "utf-8"))
                .child(
                    el("meta")
                        .attr("name", "viewport")
                        .attr("content", "width=device-width, initial-scale=1"),
                )
                .child(el("title").text(format!("{} · Design System", title)))
                .child(el("style").child(RenderTree::Raw(STYLESHEET.to_string()))),
        )
        .child(
            el("body").child(header(viewing)).child(
                el("div")
                    .class("layout")
                    .child(nav(registry))
                    .child(el("main").child(content)),
            ),
        )
        .into();

    format!("<!DOCTYPE html>\n{}", html.to_html())
}

// ─────────────────────────────────────────────────────────────────────────────
// Index
// ─────────────────────────────────────────────────────────────────────────────

/// Landing page: per-category stats, links, and validation status
pub fn index_page(showcase: &Showcase) -> String {
    let registry = &showcase.registry;

    let stats = STAT_CATEGORIES.into_iter().map(|category| {
        StatTile::render(
            registry.count(category),
            category.plural_label(),
            category.description(),
        )
    });

    let library = Category::ALL
        .into_iter()
        .filter(|&category| category == Category::Draft || registry.count(category) > 0)
        .map(|category| library_section(registry, category));

    let content = el("div")
        .child(el("p").class("pill bg-green-500/20").text("Prototype Environment"))
        .child(el("h1").text("Design System"))
        .child(
            el("p")
                .class("text-muted-foreground")
                .text("Browse components, prototypes, and experimental features."),
        )
        .child(el("div").class("stats").children(stats))
        .child(el("h2").text("Component Library"))
        .children(library)
        .child(status_box(showcase))
        .child(
            el("div")
                .class("card")
                .child(el("h3").text("About This Space"))
                .child(el("p").class("text-sm text-muted-foreground").text(format!(
                    "This is the prototype environment where you can experiment freely. \
                     Draft components are for /proto routes only. When a component is ready, \
                     move it from {} to {}.",
                    DRAFT_DIR, PRODUCTION_DIR
                ))),
        );

    document("Overview", registry, None, content)
}

fn library_section(registry: &Registry, category: Category) -> Element {
    let links: Vec<Element> = registry
        .by_category(category)
        .map(|d| {
            let link = el("a")
                .class("library-link")
                .attr("href", d.route_path.as_str())
                .child(el("span").class("text-sm font-medium").text(d.name.as_str()));
            match &d.description {
                Some(description) => link.child(
                    el("p")
                        .class("text-sm text-muted-foreground")
                        .text(description.as_str()),
                ),
                None => link,
            }
        })
        .collect();

    let section = el("section")
        .class("card library-section")
        .attr("data-category", category.key())
        .child(
            el("h3")
                .text(category.plural_label())
                .child(text(" "))
                .child_if(category == Category::Draft, || {
                    el("span")
                        .class("pill")
                        .class(badge_class(category))
                        .text("Experimental")
                        .into()
                }),
        )
        .child(
            el("p")
                .class("text-muted-foreground")
                .text(category.description()),
        );

    if links.is_empty() {
        section.child(el("p").class("text-sm text-muted-foreground").text(format!(
            "No draft components yet. Create your first in {}",
            DRAFT_DIR
        )))
    } else {
        section.child(el("div").class("flex flex-wrap gap-3").children(links))
    }
}

/// Validation and coverage summary for the index page
fn status_box(showcase: &Showcase) -> Element {
    let summary = showcase.components.summary();
    let coverage = showcase.coverage();

    let mut status = el("section")
        .class("card status")
        .child(el("h3").text("Status"))
        .child(el("p").text(format!(
            "{}/{} components construct cleanly ({}%)",
            summary.successful,
            summary.total,
            summary.success_rate
        )))
        .child(el("p").text(format!(
            "{}/{} registry entries have demos ({}%)",
            coverage.implemented,
            coverage.total,
            coverage.coverage_percent()
        )));

    if !coverage.missing.is_empty() {
        status = status.child(
            el("p")
                .class("text-xs text-muted-foreground missing-demos")
                .text(format!("Missing demos: {}", coverage.missing.join(", "))),
        );
    }

    status
}

// ─────────────────────────────────────────────────────────────────────────────
// Component pages
// ─────────────────────────────────────────────────────────────────────────────

/// Header, live demo, usage snippet and category documentation
pub fn component_page(showcase: &Showcase, resolved: &Resolved<'_>) -> String {
    let descriptor = resolved.descriptor;
    let category = resolved.category;

    let subtitle = match category {
        Category::Prototype | Category::Page => "Prototype flow",
        _ => "Interactive component showcase and documentation",
    };

    let meta = el("div")
        .class("flex items-center gap-4 mt-4 text-sm")
        .child_if(descriptor.source_ref.is_some(), || {
            el("code")
                .class("source-ref")
                .text(descriptor.source_ref.clone().unwrap_or_default())
                .into()
        })
        .child(text(" "))
        .child(category_badge(category));

    let demo = match &resolved.demo {
        DemoState::Ready(render) => render(),
        DemoState::MissingDemo => missing_demo(),
    };

    let content = el("div")
        .child(el("h1").text(descriptor.name.as_str()))
        .child(el("p").class("text-muted-foreground").text(subtitle))
        .child(meta)
        .child(el("h2").text("Live Demo"))
        .child(el("div").class("card live-demo").child(demo))
        .child(el("h2").text("Usage"))
        .child(
            el("div")
                .class("card usage")
                .child(el("h3").text("Import & Usage"))
                .child(el("pre").text(usage_snippet(descriptor, category))),
        )
        .child(el("h2").text("Documentation"))
        .child(documentation(descriptor, category, &resolved.slug));

    document(
        &descriptor.name,
        &showcase.registry,
        Some((descriptor, category)),
        content,
    )
}

fn missing_demo() -> RenderTree {
    el("div")
        .class("demo-missing")
        .child(el("p").class("text-sm").text("Demo not yet implemented for this component."))
        .child(el("p").class("text-xs").text(
            "Add a demo by inserting its slug into builtin_demos in src/showcase/demos.rs.",
        ))
        .into()
}

/// Rust path of the item a descriptor's source file defines
///
/// `src/components/ui/button.rs` + `Button` -> `crate::components::ui::button::Button`
fn import_path(descriptor: &ComponentDescriptor) -> String {
    let item: String = descriptor.name.split_whitespace().collect();
    let Some(source) = descriptor.source_ref.as_deref() else {
        return item;
    };

    let module = source
        .strip_prefix("src/")
        .unwrap_or(source)
        .trim_end_matches(".rs")
        .trim_end_matches("/mod")
        .replace('/', "::");

    format!("crate::{}::{}", module, item)
}

/// Import snippet for a descriptor, worded by category
pub fn usage_snippet(descriptor: &ComponentDescriptor, category: Category) -> String {
    let import = import_path(descriptor);
    match category {
        Category::Draft => format!(
            "// ✅ OK in /proto routes only\nuse {};\n\n// ❌ Not for production routes: draft components are experimental only",
            import
        ),
        Category::UiPrimitive => format!("use {};\n\n// UI primitive - production ready", import),
        Category::Custom => format!("use {};\n\n// Custom component - production ready", import),
        Category::Prototype | Category::Page => format!(
            "// Full flow, browse it at {}\nuse {};",
            descriptor.route_path, import
        ),
    }
}

/// "About" block with category-specific guidance
pub fn documentation(descriptor: &ComponentDescriptor, category: Category, slug: &str) -> Element {
    let about = match category {
        Category::Draft => {
            "This is a draft component for experimentation. Move to production when ready."
        }
        Category::UiPrimitive => {
            "This is a UI primitive modelled on shadcn/ui. See the shadcn documentation for full details."
        }
        Category::Custom => "This is a custom production-ready component built for this project.",
        Category::Prototype => "This is a full prototype flow assembled from showcase components.",
        Category::Page => "This is a page mock assembled from showcase components.",
    };

    let mut docs = el("div")
        .class("card documentation")
        .child(el("h3").text(format!("About {}", descriptor.name)))
        .child(el("p").class("text-muted-foreground").text(about));

    if let Some(description) = &descriptor.description {
        docs = docs.child(el("p").class("text-sm").text(description.as_str()));
    }

    match category {
        Category::Draft => {
            let steps = DraftPromotion::steps(&descriptor.name, DRAFT_DIR, PRODUCTION_DIR)
                .into_iter()
                .map(|step| el("li").text(step));
            docs.child(
                el("div")
                    .class("promotion-steps")
                    .child(el("h4").text("Moving to Production"))
                    .child(el("ol").children(steps)),
            )
        }
        Category::UiPrimitive => docs.child(
            el("p").class("text-sm").child(el("strong").text("shadcn/ui documentation: ")).child(
                el("a")
                    .attr("href", format!("https://ui.shadcn.com/docs/components/{}", slug))
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
                    .text("View official docs →"),
            ),
        ),
        _ => docs,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Not found
// ─────────────────────────────────────────────────────────────────────────────

pub fn not_found_page(registry: &Registry, path: &str) -> String {
    let content = el("div")
        .class("not-found")
        .child(el("h1").text("404"))
        .child(el("p").text(format!("No component registered at {}", path)))
        .child(el("a").attr("href", "/proto").text("Back to the design system"));

    document("Not found", registry, None, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showcase() -> Showcase {
        Showcase::builtin().unwrap()
    }

    #[test]
    fn test_index_lists_stats_and_links() {
        let html = index_page(&showcase());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("UI Primitives"));
        assert!(html.contains("href=\"/proto/components/example-card\""));
        assert!(html.contains("href=\"/proto/prototypes/draft-promotion\""));
        assert!(html.contains("5/5 components construct cleanly (100%)"));
        assert!(!html.contains("Missing demos"));
    }

    #[test]
    fn test_draft_page_has_promotion_steps() {
        let showcase = showcase();
        let resolved = showcase.resolve("example-card").unwrap();
        let html = component_page(&showcase, &resolved);

        assert!(html.contains("<h1>Example Card</h1>"));
        assert!(html.contains("Draft Component"));
        assert!(html.contains("src/components/draft/example_card.rs"));
        assert!(html.contains("Moving to Production"));
        assert!(html.contains("Move Example Card from src/components/draft/ to src/components/"));
        assert!(html.contains("Example Card component"));
    }

    #[test]
    fn test_ui_primitive_page_links_docs() {
        let showcase = showcase();
        let resolved = showcase.resolve("button").unwrap();
        let html = component_page(&showcase, &resolved);
        assert!(html.contains("https://ui.shadcn.com/docs/components/button"));
        assert!(html.contains("use crate::components::ui::button::Button;"));
    }

    #[test]
    fn test_missing_demo_placeholder() {
        let registry = Registry::new(vec![ComponentDescriptor::new(
            "Tabs",
            "/proto/components/tabs",
            Category::UiPrimitive,
        )])
        .unwrap();
        let showcase = Showcase::new(
            registry,
            crate::showcase::demos::DemoTable::new(),
            Default::default(),
        );
        let resolved = showcase.resolve("tabs").unwrap();
        let html = component_page(&showcase, &resolved);
        assert!(html.contains("Demo not yet implemented for this component."));
    }

    #[test]
    fn test_usage_snippet_by_category() {
        let draft = ComponentDescriptor::new("Example Card", "/proto/components/example-card", Category::Draft)
            .with_source("src/components/draft/example_card.rs");
        let snippet = usage_snippet(&draft, Category::Draft);
        assert!(snippet.starts_with("// ✅ OK in /proto routes only"));
        assert!(snippet.contains("use crate::components::draft::example_card::ExampleCard;"));

        let bare = ComponentDescriptor::new("Stat Tile", "/proto/components/stat-tile", Category::Custom);
        assert_eq!(
            usage_snippet(&bare, Category::Custom),
            "use StatTile;\n\n// Custom component - production ready"
        );
    }

    #[test]
    fn test_empty_category_shows_placeholder() {
        let registry = Registry::new(Vec::new()).unwrap();
        let html = document("Empty", &registry, None, text("body"));
        assert!(html.contains("No items yet"));
    }

    #[test]
    fn test_not_found_page_escapes_path() {
        let html = not_found_page(&Registry::new(Vec::new()).unwrap(), "/proto/components/<x>");
        assert!(html.contains("No component registered at /proto/components/&lt;x&gt;"));
    }
}
