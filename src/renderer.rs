use crate::config::RenderConfig;
use crate::element::{escape_attribute, escape_text, AttributeValue, Element, Node};
use crate::stylesheet::StyleSheet;
use crate::validator::MAX_NESTING_DEPTH;

/// Walks a tree once, writing markup and interning every element's styles.
///
/// Elements nested deeper than the validator's limit are dropped so the walk
/// stays bounded on trees that never went through `render_checked`.
pub struct Renderer {
    sheet: StyleSheet,
    html: String,
}

impl Renderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            sheet: StyleSheet::new(config),
            html: String::new(),
        }
    }

    pub fn render_node(&mut self, node: &Node) {
        self.node_at(node, 0);
    }

    pub fn render_element(&mut self, element: &Element) {
        self.element_at(element, 0);
    }

    fn node_at(&mut self, node: &Node, depth: usize) {
        match node {
            Node::Element(element) => self.element_at(element, depth),
            Node::Text(text) => self.html.push_str(&escape_text(text)),
            Node::Raw(raw) => self.html.push_str(raw),
            Node::Fragment(nodes) => {
                for n in nodes {
                    self.node_at(n, depth);
                }
            }
        }
    }

    fn element_at(&mut self, element: &Element, depth: usize) {
        if depth > MAX_NESTING_DEPTH {
            tracing::warn!(tag = element.tag(), depth, "dropping element nested too deeply");
            return;
        }
        let generated = self.sheet.classes_for(element.styles());

        self.html.push('<');
        self.html.push_str(element.tag());

        let mut wrote_class = false;
        for attribute in element.attributes() {
            if attribute.name == "class" {
                let user = match &attribute.value {
                    AttributeValue::Text(v) => v.as_str(),
                    AttributeValue::Flag => "",
                };
                self.write_class(user, &generated);
                wrote_class = true;
                continue;
            }
            self.html.push(' ');
            self.html.push_str(&attribute.name);
            if let AttributeValue::Text(value) = &attribute.value {
                self.html.push_str("=\"");
                self.html.push_str(&escape_attribute(value));
                self.html.push('"');
            }
        }
        if !wrote_class {
            self.write_class("", &generated);
        }
        self.html.push('>');

        if element.is_void() {
            return;
        }
        for child in element.child_nodes() {
            self.node_at(child, depth + 1);
        }
        self.html.push_str("</");
        self.html.push_str(element.tag());
        self.html.push('>');
    }

    /// User classes first, then generated ones; nothing when both are empty.
    fn write_class(&mut self, user: &str, generated: &[String]) {
        let classes: Vec<&str> = user
            .split_whitespace()
            .chain(generated.iter().map(String::as_str))
            .collect();
        if classes.is_empty() {
            return;
        }
        self.html.push_str(" class=\"");
        self.html.push_str(&escape_attribute(&classes.join(" ")));
        self.html.push('"');
    }

    /// Returns the markup and the collected stylesheet.
    pub fn finish(self) -> (String, StyleSheet) {
        (self.html, self.sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styled::Styled;
    use crate::tags::{br, div, span};
    use crate::units::px;
    use pretty_assertions::assert_eq;

    fn render(node: Node) -> (String, String) {
        let mut renderer = Renderer::new(&RenderConfig::default());
        renderer.render_node(&node);
        let (html, sheet) = renderer.finish();
        (html, sheet.to_css())
    }

    #[test]
    fn plain_markup() {
        let (html, css) = render(div().id("x").child(span().text("a < b")).child(br()).into());
        assert_eq!(html, "<div id=\"x\"><span>a &lt; b</span><br></div>");
        assert_eq!(css, "");
    }

    #[test]
    fn user_classes_precede_generated() {
        let (html, _) = render(div().class("card").padding(px(16.0)).into());
        assert_eq!(html, "<div class=\"card padding-0\"></div>");
    }

    #[test]
    fn generated_class_without_user_class() {
        let (html, css) = render(span().width(px(4.0)).into());
        assert_eq!(html, "<span class=\"width-0\"></span>");
        assert_eq!(css, ".width-0{width:4px}");
    }

    #[test]
    fn flags_render_bare() {
        let (html, _) = render(div().flag("hidden").into());
        assert_eq!(html, "<div hidden></div>");
    }

    #[test]
    fn deep_trees_are_cut_at_the_nesting_limit() {
        let mut node = span();
        for _ in 0..300 {
            node = div().child(node);
        }
        let (html, _) = render(node.into());
        assert_eq!(html.matches("<div>").count(), MAX_NESTING_DEPTH + 1);
        assert!(!html.contains("<span>"));
    }

    #[test]
    fn fragments_and_raw() {
        let (html, _) = render(Node::fragment([Node::raw("<hr>"), Node::text("&")]));
        assert_eq!(html, "<hr>&amp;");
    }
}
