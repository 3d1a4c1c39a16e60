use crate::document::Document;
use crate::element::{Element, Node};
use crate::error::{HtmlError, HtmlResult};
use crate::head::Head;
use regex::Regex;
use std::sync::OnceLock;

pub(crate) const MAX_NESTING_DEPTH: usize = 256;

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9-]*$").unwrap())
}

fn attribute_regex() -> &'static Regex {
    static ATTRIBUTE_REGEX: OnceLock<Regex> = OnceLock::new();
    ATTRIBUTE_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z_:@][a-zA-Z0-9_:.@-]*$").unwrap())
}

fn selector_regex() -> &'static Regex {
    static SELECTOR_REGEX: OnceLock<Regex> = OnceLock::new();
    SELECTOR_REGEX.get_or_init(|| {
        Regex::new(r#"^[a-zA-Z.#*\[:_][a-zA-Z0-9.#*\[\]="':()_ >+~-]*$"#).unwrap()
    })
}

/// Validate a tag name
pub fn validate_tag(tag: &str) -> HtmlResult<()> {
    if tag_regex().is_match(tag) {
        Ok(())
    } else {
        Err(HtmlError::InvalidTag {
            tag: tag.to_string(),
        })
    }
}

/// Validate a whole document: head metadata and the body tree
pub fn validate_document(document: &Document) -> HtmlResult<()> {
    validate_head(document.head())?;
    validate_element_tree(document.body_element(), 0)
}

/// Validate a head section
pub fn validate_head(head: &Head) -> HtmlResult<()> {
    if head.title.trim().is_empty() {
        return Err(HtmlError::MissingTitle);
    }

    for font in &head.fonts {
        if font.family.trim().is_empty() {
            return Err(HtmlError::InvalidFontFamily {
                family: font.family.clone(),
            });
        }
        for &weight in &font.weights {
            if !(100..=900).contains(&weight) || weight % 100 != 0 {
                return Err(HtmlError::ValidationError(format!(
                    "font '{}' weight {} is invalid: must be 100-900 in increments of 100",
                    font.family, weight
                )));
            }
        }
    }

    for meta in &head.meta {
        if !attribute_regex().is_match(&meta.name) {
            return Err(HtmlError::ValidationError(format!(
                "meta name '{}' is not a valid identifier",
                meta.name
            )));
        }
    }

    Ok(())
}

/// Validate a node tree
pub fn validate_node(node: &Node) -> HtmlResult<()> {
    validate_node_recursive(node, 0)
}

fn validate_node_recursive(node: &Node, depth: usize) -> HtmlResult<()> {
    if depth > MAX_NESTING_DEPTH {
        return Err(HtmlError::MaxNestingDepthExceeded {
            max_depth: MAX_NESTING_DEPTH,
        });
    }

    match node {
        Node::Text(_) | Node::Raw(_) => Ok(()),
        Node::Fragment(nodes) => nodes
            .iter()
            .try_for_each(|n| validate_node_recursive(n, depth)),
        Node::Element(element) => validate_element_tree(element, depth),
    }
}

fn validate_element_tree(element: &Element, depth: usize) -> HtmlResult<()> {
    validate_element(element)?;
    element
        .child_nodes()
        .iter()
        .try_for_each(|n| validate_node_recursive(n, depth + 1))
}

fn validate_element(element: &Element) -> HtmlResult<()> {
    validate_tag(element.tag())?;

    for attribute in element.attributes() {
        if !attribute_regex().is_match(&attribute.name) {
            return Err(HtmlError::InvalidAttribute {
                tag: element.tag().to_string(),
                name: attribute.name.clone(),
                reason: "attribute names must be identifiers".to_string(),
            });
        }
    }

    for declaration in element.styles() {
        if let Some(selector) = &declaration.selector {
            if !selector_regex().is_match(selector.target()) {
                return Err(HtmlError::InvalidSelector {
                    tag: element.tag().to_string(),
                    selector: selector.target().to_string(),
                    reason: "selector targets may not contain '{', '}', ';', ',' or '<'"
                        .to_string(),
                });
            }
        }
    }

    if element.is_void() && !element.child_nodes().is_empty() {
        return Err(HtmlError::VoidElementChildren {
            tag: element.tag().to_string(),
        });
    }

    Ok(())
}
