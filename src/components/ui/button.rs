use crate::components::{bool_input, inputs, text_input, variant_input};
use crate::components::{ConstructionFailure, Demoable, Inputs};
use crate::render::{el, RenderTree};

const VARIANTS: &[&str] = &["default", "secondary", "outline", "destructive", "ghost"];
const SIZES: &[&str] = &["sm", "default", "lg"];

/// Clickable button with visual variants and sizes
pub struct Button;

fn variant_classes(variant: &str) -> &'static str {
    match variant {
        "secondary" => "bg-secondary text-secondary-foreground",
        "outline" => "border border-border bg-background",
        "destructive" => "bg-destructive text-destructive-foreground",
        "ghost" => "bg-transparent hover:bg-muted",
        _ => "bg-primary text-primary-foreground",
    }
}

fn size_classes(size: &str) -> &'static str {
    match size {
        "sm" => "h-8 px-3 text-xs",
        "lg" => "h-11 px-8 text-base",
        _ => "h-9 px-4 text-sm",
    }
}

impl Demoable for Button {
    fn name(&self) -> &'static str {
        "Button"
    }

    fn default_inputs(&self) -> Inputs {
        inputs([("label", "Button"), ("variant", "default"), ("size", "default")])
    }

    fn build(&self, inputs: &Inputs) -> Result<RenderTree, ConstructionFailure> {
        let label = text_input(inputs, "label", "Button")?;
        let variant = variant_input(inputs, "variant", "default", VARIANTS)?;
        let size = variant_input(inputs, "size", "default", SIZES)?;
        let disabled = bool_input(inputs, "disabled", false)?;

        if label.trim().is_empty() {
            return Err(ConstructionFailure::InvalidValue {
                input: "label".to_string(),
                reason: "a button needs visible text".to_string(),
            });
        }

        let mut button = el("button")
            .class("inline-flex items-center justify-center rounded-md font-medium")
            .class(variant_classes(&variant))
            .class(size_classes(&size))
            .attr("type", "button")
            .text(label);
        if disabled {
            button = button.class("opacity-50").attr("disabled", "disabled");
        }

        Ok(button.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::InputValue;

    #[test]
    fn test_default_button() {
        let tree = Button.build(&Button.default_inputs()).unwrap();
        let html = tree.to_html();
        assert!(html.starts_with("<button class=\"inline-flex"));
        assert!(html.contains("bg-primary"));
        assert_eq!(tree.text_content(), "Button");
    }

    #[test]
    fn test_disabled_outline_button() {
        let mut values = Button.default_inputs();
        values.insert("variant".to_string(), "outline".into());
        values.insert("disabled".to_string(), true.into());

        let html = Button.build(&values).unwrap().to_html();
        assert!(html.contains("border-border"));
        assert!(html.contains("disabled=\"disabled\""));
    }

    #[test]
    fn test_blank_label_fails() {
        let values = inputs([("label", InputValue::from("  "))]);
        assert!(matches!(
            Button.build(&values),
            Err(ConstructionFailure::InvalidValue { .. })
        ));
    }
}
