// Stat tile - a count with a label, used for dashboard summaries

use crate::components::{inputs, number_input, text_input, InputValue};
use crate::components::{ConstructionFailure, Demoable, Inputs};
use crate::render::{el, RenderTree};

pub struct StatTile;

impl StatTile {
    /// Build a tile directly, bypassing input parsing
    pub fn render(count: usize, label: &str, description: &str) -> RenderTree {
        el("div")
            .class("p-6 rounded-xl bg-card border border-border/30 text-center")
            .child(
                el("div")
                    .class("text-4xl font-bold text-foreground mb-2")
                    .text(count.to_string()),
            )
            .child(
                el("div")
                    .class("text-sm text-muted-foreground mb-4")
                    .text("components"),
            )
            .child(el("h3").class("font-semibold text-foreground").text(label))
            .child(
                el("p")
                    .class("text-xs text-muted-foreground")
                    .text(description),
            )
            .into()
    }
}

impl Demoable for StatTile {
    fn name(&self) -> &'static str {
        "Stat Tile"
    }

    fn default_inputs(&self) -> Inputs {
        inputs([
            ("label", InputValue::from("Draft Components")),
            ("count", InputValue::from(3.0)),
            ("description", InputValue::from("Experimental")),
        ])
    }

    fn build(&self, inputs: &Inputs) -> Result<RenderTree, ConstructionFailure> {
        let label = text_input(inputs, "label", "Components")?;
        let description = text_input(inputs, "description", "")?;
        let count = number_input(inputs, "count", 0.0)?;

        if count < 0.0 || count.fract() != 0.0 || !count.is_finite() {
            return Err(ConstructionFailure::InvalidValue {
                input: "count".to_string(),
                reason: format!("expected a non-negative whole number, got {}", count),
            });
        }

        Ok(Self::render(count as usize, &label, &description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tile() {
        let tree = StatTile.build(&StatTile.default_inputs()).unwrap();
        let text = tree.text_content();
        assert!(text.starts_with("3components"));
        assert!(text.contains("Draft Components"));
    }

    #[test]
    fn test_fractional_count_fails() {
        let values = inputs([("count", 2.5)]);
        let err = StatTile.build(&values).unwrap_err();
        assert!(err.to_string().contains("non-negative whole number"));
    }

    #[test]
    fn test_negative_count_fails() {
        let values = inputs([("count", -1.0)]);
        assert!(StatTile.build(&values).is_err());
    }
}
