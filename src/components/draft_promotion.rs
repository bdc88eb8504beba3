// Draft promotion prototype - the steps for moving a draft into production

use crate::components::{inputs, text_input};
use crate::components::{ConstructionFailure, Demoable, Inputs};
use crate::render::{el, RenderTree};

pub struct DraftPromotion;

impl DraftPromotion {
    /// The ordered promotion checklist for `component`
    pub fn steps(component: &str, from_dir: &str, to_dir: &str) -> Vec<String> {
        vec![
            format!("Move {} from {} to {}", component, from_dir, to_dir),
            "Update imports across the codebase".to_string(),
            "Move the registry entry from draft_components to custom_components".to_string(),
        ]
    }
}

impl Demoable for DraftPromotion {
    fn name(&self) -> &'static str {
        "Draft Promotion"
    }

    fn default_inputs(&self) -> Inputs {
        inputs([
            ("component", "Example Card"),
            ("from_dir", "src/components/draft/"),
            ("to_dir", "src/components/"),
        ])
    }

    fn build(&self, inputs: &Inputs) -> Result<RenderTree, ConstructionFailure> {
        let component = text_input(inputs, "component", "Example Card")?;
        let from_dir = text_input(inputs, "from_dir", "src/components/draft/")?;
        let to_dir = text_input(inputs, "to_dir", "src/components/")?;

        if from_dir == to_dir {
            return Err(ConstructionFailure::InvalidValue {
                input: "to_dir".to_string(),
                reason: "source and destination directories are the same".to_string(),
            });
        }

        let steps = Self::steps(&component, &from_dir, &to_dir)
            .into_iter()
            .map(|step| el("li").text(step));

        Ok(el("div")
            .class("p-4 rounded-lg border border-green-500/20 bg-green-500/5")
            .child(
                el("h4")
                    .class("text-sm font-semibold mb-2")
                    .text("Moving to Production"),
            )
            .child(
                el("ol")
                    .class("text-sm text-muted-foreground space-y-1 list-decimal list-inside")
                    .children(steps),
            )
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_three_steps() {
        let html = DraftPromotion
            .build(&DraftPromotion.default_inputs())
            .unwrap()
            .to_html();
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains("Move Example Card from src/components/draft/ to src/components/"));
    }

    #[test]
    fn test_same_directory_fails() {
        let values = inputs([("from_dir", "a/"), ("to_dir", "a/")]);
        assert!(DraftPromotion.build(&values).is_err());
    }
}
