use crate::declaration::{Declaration, StyleContext, ROOT_CONTEXT};
use crate::error::HtmlResult;
use crate::styled::Styled;
use crate::tags::is_void;
use crate::validator::validate_tag;
use serde::{Deserialize, Serialize};

/// Any piece of content in the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Node {
    Element(Element),
    /// Escaped on render
    Text(String),
    /// Written verbatim
    Raw(String),
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn raw(html: impl Into<String>) -> Self {
        Node::Raw(html.into())
    }

    pub fn fragment(nodes: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        Node::Fragment(nodes.into_iter().map(Into::into).collect())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    /// Boolean attribute, rendered as a bare name
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
}

/// An HTML element with its attributes, children and style declarations.
///
/// Builder methods consume and return the element, so trees are written as
/// nested expressions:
///
/// ```ignore
/// div().padding(px(16.0)).child(p().text("Hello"))
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    tag: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    styles: Vec<Declaration>,
}

impl Element {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
            styles: Vec::new(),
        }
    }

    /// An element with a tag outside the built-in helpers, e.g. a custom element.
    pub fn custom(tag: &str) -> HtmlResult<Self> {
        validate_tag(tag)?;
        Ok(Self::new(&tag.to_ascii_lowercase()))
    }

    /// Sets an attribute, replacing any previous value for the same name.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, AttributeValue::Text(value.into()));
        self
    }

    /// Sets a boolean attribute such as `disabled` or `checked`.
    pub fn flag(mut self, name: &str) -> Self {
        self.set_attribute(name, AttributeValue::Flag);
        self
    }

    /// Sets a boolean attribute only when `on` is true.
    pub fn flag_if(self, name: &str, on: bool) -> Self {
        if on {
            self.flag(name)
        } else {
            self
        }
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Adds a user class. Generated classes are appended after these.
    pub fn class(mut self, class: &str) -> Self {
        let merged = match self.attribute("class") {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.set_attribute("class", AttributeValue::Text(merged));
        self
    }

    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(&format!("data-{}", key), value)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn raw(self, html: impl Into<String>) -> Self {
        self.child(Node::Raw(html.into()))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Value of a text attribute; `Some("")` for a flag.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| match &a.value {
                AttributeValue::Text(v) => v.as_str(),
                AttributeValue::Flag => "",
            })
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Declarations in application order.
    pub fn styles(&self) -> &[Declaration] {
        &self.styles
    }

    pub fn is_void(&self) -> bool {
        is_void(&self.tag)
    }

    fn set_attribute(&mut self, name: &str, value: AttributeValue) {
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute {
                name: name.to_string(),
                value,
            }),
        }
    }
}

impl Styled for Element {
    fn context(&self) -> &StyleContext {
        &ROOT_CONTEXT
    }

    fn with_declarations(mut self, declarations: Vec<Declaration>) -> Self {
        self.styles.extend(declarations);
        self
    }
}

/// Escapes text content.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes a double-quoted attribute value.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
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
    use crate::error::HtmlError;
    use crate::tags::{div, span};
    use crate::units::px;

    #[test]
    fn attributes_replace_by_name() {
        let el = div().attr("title", "a").attr("title", "b");
        assert_eq!(el.attributes().len(), 1);
        assert_eq!(el.attribute("title"), Some("b"));
    }

    #[test]
    fn classes_accumulate() {
        let el = div().class("card").class("wide");
        assert_eq!(el.attribute("class"), Some("card wide"));
    }

    #[test]
    fn flags() {
        let el = div().flag("hidden").flag_if("inert", false);
        assert_eq!(el.attribute("hidden"), Some(""));
        assert_eq!(el.attribute("inert"), None);
    }

    #[test]
    fn children_and_text() {
        let el = div().child(span().text("a")).text("b").children(["c", "d"]);
        assert_eq!(el.child_nodes().len(), 4);
        assert_eq!(el.child_nodes()[1], Node::Text("b".into()));
    }

    #[test]
    fn styles_are_recorded_in_order() {
        let el = div().width(px(10.0)).height(px(20.0));
        let props: Vec<&str> = el.styles().iter().map(|d| d.property.as_str()).collect();
        assert_eq!(props, vec!["width", "height"]);
    }

    #[test]
    fn custom_tags_are_validated() {
        assert_eq!(Element::custom("My-Widget").unwrap().tag(), "my-widget");
        assert!(matches!(Element::custom("bad tag"), Err(HtmlError::InvalidTag { .. })));
        assert!(matches!(Element::custom(""), Err(HtmlError::InvalidTag { .. })));
    }

    #[test]
    fn escaping() {
        assert_eq!(escape_text("<a & b>"), "&lt;a &amp; b&gt;");
        assert_eq!(escape_attribute(r#"say "hi" 'x'"#), "say &quot;hi&quot; &#39;x&#39;");
    }
}
