// Render module - minimal HTML node tree
//
// Components build a `RenderTree` instead of writing markup directly. The
// page shell composes trees and serializes them once per request, so escaping
// happens in exactly one place.

use std::fmt::Write;

/// Elements that never have children or a closing tag
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node in the rendered output
#[derive(Debug, Clone, PartialEq)]
pub enum RenderTree {
    Element(Element),
    Text(String),
    /// Pre-rendered markup inserted verbatim (doctype, inline svg icons)
    Raw(String),
}

/// An HTML element with classes, attributes, and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<RenderTree>,
}

/// Start building an element
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        classes: Vec::new(),
        attributes: Vec::new(),
        children: Vec::new(),
    }
}

/// A text node
pub fn text(content: impl Into<String>) -> RenderTree {
    RenderTree::Text(content.into())
}

impl Element {
    /// Add one or more space-separated classes
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push((name.to_string(), value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<RenderTree>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<RenderTree>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(text(content))
    }

    /// Append a child only when `cond` holds
    pub fn child_if(self, cond: bool, child: impl FnOnce() -> RenderTree) -> Self {
        if cond {
            self.child(child())
        } else {
            self
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl From<Element> for RenderTree {
    fn from(element: Element) -> Self {
        RenderTree::Element(element)
    }
}

impl From<&str> for RenderTree {
    fn from(content: &str) -> Self {
        RenderTree::Text(content.to_string())
    }
}

impl From<String> for RenderTree {
    fn from(content: String) -> Self {
        RenderTree::Text(content)
    }
}

impl RenderTree {
    /// Serialize to an HTML string
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            RenderTree::Text(content) => out.push_str(&escape(content)),
            RenderTree::Raw(markup) => out.push_str(markup),
            RenderTree::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                if !element.classes.is_empty() {
                    let _ = write!(out, " class=\"{}\"", escape(&element.classes.join(" ")));
                }
                for (name, value) in &element.attributes {
                    let _ = write!(out, " {}=\"{}\"", name, escape(value));
                }
                out.push('>');

                if VOID_TAGS.contains(&element.tag) {
                    return;
                }

                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }

    /// Concatenated text content of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            RenderTree::Text(content) => content.clone(),
            RenderTree::Raw(_) => String::new(),
            RenderTree::Element(element) => element
                .children
                .iter()
                .map(RenderTree::text_content)
                .collect(),
        }
    }

    /// Depth-first search for the first element carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        let RenderTree::Element(element) = self else {
            return None;
        };
        if element.has_class(class) {
            return Some(element);
        }
        element
            .children
            .iter()
            .find_map(|child| child.find_by_class(class))
    }
}

/// Escape text for use in element content and quoted attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_text_and_attributes() {
        let tree: RenderTree = el("a")
            .attr("title", "\"quoted\" & <b>")
            .text("<script>alert('x')</script>")
            .into();

        assert_eq!(
            tree.to_html(),
            "<a title=\"&quot;quoted&quot; &amp; &lt;b&gt;\">&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</a>"
        );
    }

    #[test]
    fn test_classes_are_joined_and_void_tags_close_early() {
        let tree: RenderTree = el("div")
            .class("p-6  rounded-xl")
            .class("border")
            .child(el("br"))
            .text("after")
            .into();

        assert_eq!(
            tree.to_html(),
            "<div class=\"p-6 rounded-xl border\"><br>after</div>"
        );
    }

    #[test]
    fn test_raw_is_not_escaped() {
        let tree: RenderTree = el("span")
            .child(RenderTree::Raw("<svg></svg>".to_string()))
            .into();
        assert_eq!(tree.to_html(), "<span><svg></svg></span>");
    }

    #[test]
    fn test_text_content_and_find_by_class() {
        let tree: RenderTree = el("div")
            .child(el("h3").class("title").text("Hello"))
            .child(el("p").text(" world"))
            .into();

        assert_eq!(tree.text_content(), "Hello world");
        let title = tree.find_by_class("title").expect("title element");
        assert_eq!(title.tag, "h3");
        assert!(tree.find_by_class("missing").is_none());
    }

    #[test]
    fn test_child_if() {
        let shown: RenderTree = el("div").child_if(true, || text("yes")).into();
        let hidden: RenderTree = el("div").child_if(false, || text("no")).into();
        assert_eq!(shown.to_html(), "<div>yes</div>");
        assert_eq!(hidden.to_html(), "<div></div>");
    }
}
