use crate::components::{inputs, text_input, variant_input};
use crate::components::{ConstructionFailure, Demoable, Inputs};
use crate::render::{el, RenderTree};

const VARIANTS: &[&str] = &["default", "secondary", "outline", "destructive"];

/// Small pill label
pub struct Badge;

impl Demoable for Badge {
    fn name(&self) -> &'static str {
        "Badge"
    }

    fn default_inputs(&self) -> Inputs {
        inputs([("label", "Badge"), ("variant", "default")])
    }

    fn build(&self, inputs: &Inputs) -> Result<RenderTree, ConstructionFailure> {
        let label = text_input(inputs, "label", "Badge")?;
        let variant = variant_input(inputs, "variant", "default", VARIANTS)?;

        let color = match variant.as_str() {
            "secondary" => "bg-secondary text-secondary-foreground",
            "outline" => "border border-border text-foreground",
            "destructive" => "bg-destructive text-destructive-foreground",
            _ => "bg-primary text-primary-foreground",
        };

        Ok(el("span")
            .class("inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium")
            .class(color)
            .text(label)
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_variants() {
        let html = Badge.build(&Badge.default_inputs()).unwrap().to_html();
        assert!(html.contains("bg-primary"));

        let values = inputs([("label", "Beta"), ("variant", "outline")]);
        let tree = Badge.build(&values).unwrap();
        assert!(tree.to_html().contains("border-border"));
        assert_eq!(tree.text_content(), "Beta");
    }

    #[test]
    fn test_badge_rejects_unknown_variant() {
        let values = inputs([("variant", "neon")]);
        assert!(Badge.build(&values).is_err());
    }
}
