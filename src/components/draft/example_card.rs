// Example draft component
//
// Demonstrates the draft workflow: it lives under components/draft/ and is
// only wired into the showcase demo table.

use crate::components::{inputs, text_input, variant_input};
use crate::components::{ConstructionFailure, Demoable, Inputs};
use crate::render::{el, RenderTree};

const DEFAULT_TITLE: &str = "Draft Component";
const DEFAULT_DESCRIPTION: &str =
    "This is an experimental component that is not exported to production modules.";

const SPARKLES_ICON: &str = r#"<svg class="w-5 h-5 text-orange-500" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M12 3l1.9 5.8L20 10l-6.1 1.2L12 17l-1.9-5.8L4 10l6.1-1.2z"/></svg>"#;

/// Card variants: `default`, `experimental`, `wip`
#[derive(Debug, Clone, Copy, PartialEq)]
enum Variant {
    Default,
    Experimental,
    Wip,
}

impl Variant {
    const NAMES: &'static [&'static str] = &["default", "experimental", "wip"];

    fn from_str(s: &str) -> Self {
        match s {
            "default" => Self::Default,
            "wip" => Self::Wip,
            _ => Self::Experimental,
        }
    }

    fn card_classes(self) -> &'static str {
        match self {
            Self::Default => "border-border bg-background",
            Self::Experimental => "border-orange-500/20 bg-orange-500/5",
            Self::Wip => "border-blue-500/20 bg-blue-500/5",
        }
    }

    /// Badge text and color classes
    fn badge(self) -> (&'static str, &'static str) {
        match self {
            Self::Default => ("Draft", "bg-muted text-muted-foreground"),
            Self::Experimental => ("Experimental", "bg-orange-500/20 text-orange-500"),
            Self::Wip => ("Work in Progress", "bg-blue-500/20 text-blue-500"),
        }
    }
}

pub struct ExampleCard;

impl Demoable for ExampleCard {
    fn name(&self) -> &'static str {
        "Example Card"
    }

    fn default_inputs(&self) -> Inputs {
        inputs([
            ("title", DEFAULT_TITLE),
            ("description", DEFAULT_DESCRIPTION),
            ("variant", "experimental"),
        ])
    }

    fn build(&self, inputs: &Inputs) -> Result<RenderTree, ConstructionFailure> {
        let title = text_input(inputs, "title", DEFAULT_TITLE)?;
        let description = text_input(inputs, "description", DEFAULT_DESCRIPTION)?;
        let variant = Variant::from_str(&variant_input(
            inputs,
            "variant",
            "experimental",
            Variant::NAMES,
        )?);
        let (badge_text, badge_color) = variant.badge();

        let header = el("div")
            .class("flex items-start justify-between mb-4")
            .child(
                el("div")
                    .class("flex items-center gap-3")
                    .child(
                        el("div")
                            .class("p-2 rounded-lg bg-gradient-to-br from-orange-500/20 to-purple-500/20")
                            .child(RenderTree::Raw(SPARKLES_ICON.to_string())),
                    )
                    .child(
                        el("div")
                            .child(el("h3").class("text-lg font-semibold").text(title))
                            .child(
                                el("p")
                                    .class("text-sm text-muted-foreground")
                                    .text("Located in src/components/draft/"),
                            ),
                    ),
            )
            .child(
                el("span")
                    .class("px-3 py-1 rounded-full text-xs font-medium")
                    .class(badge_color)
                    .text(badge_text),
            );

        let rules = el("div")
            .class("p-4 rounded-lg bg-muted/50 border border-border/50")
            .child(
                el("p")
                    .class("text-sm font-mono text-accent")
                    .text("✅ Usable from showcase routes"),
            )
            .child(
                el("p")
                    .class("text-sm font-mono text-destructive mt-1")
                    .text("❌ Not exported to production modules"),
            );

        Ok(el("div")
            .class("p-6 rounded-xl border")
            .class(variant.card_classes())
            .child(header)
            .child(el("p").class("text-muted-foreground mb-4").text(description))
            .child(rules)
            .into())
    }
}
