use crate::config::RenderConfig;
use crate::element::{escape_attribute, Element, Node};
use crate::error::HtmlResult;
use crate::head::Head;
use crate::renderer::Renderer;
use crate::tags;
use crate::validator::validate_document;
use serde::{Deserialize, Serialize};

/// A complete page: head metadata plus a body tree.
///
/// The stylesheet is not stored; it is collected from the body on every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lang: Option<String>,
    head: Head,
    body: Element,
}

/// Output of [`render_fragment`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub css: String,
}

impl Document {
    pub fn new(head: Head) -> Self {
        Self {
            lang: None,
            head,
            body: tags::body(),
        }
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Replaces the body. A non-`body` element is wrapped in one.
    pub fn body(mut self, body: Element) -> Self {
        self.body = if body.tag() == "body" {
            body
        } else {
            tags::body().child(body)
        };
        self
    }

    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn body_element(&self) -> &Element {
        &self.body
    }

    pub fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    pub fn render_with(&self, config: &RenderConfig) -> String {
        let mut renderer = Renderer::new(config);
        renderer.render_element(&self.body);
        let (body_html, sheet) = renderer.finish();
        let css = sheet.to_css();

        let mut out = String::with_capacity(body_html.len() + css.len() + 256);
        if config.doctype {
            out.push_str("<!doctype html>");
        }
        out.push_str("<html");
        if let Some(lang) = &self.lang {
            out.push_str(" lang=\"");
            out.push_str(&escape_attribute(lang));
            out.push('"');
        }
        out.push_str("><head>");
        self.head.write(&mut out, &css);
        out.push_str("</head>");
        out.push_str(&body_html);
        out.push_str("</html>");
        out
    }

    /// Validates the document before rendering it.
    pub fn render_checked(&self, config: &RenderConfig) -> HtmlResult<String> {
        if let Err(err) = validate_document(self) {
            tracing::warn!(error = %err, "document failed validation");
            return Err(err);
        }
        Ok(self.render_with(config))
    }
}

/// Renders a standalone tree, returning its markup and stylesheet separately.
pub fn render_fragment(node: &Node, config: &RenderConfig) -> Rendered {
    let mut renderer = Renderer::new(config);
    renderer.render_node(node);
    let (html, sheet) = renderer.finish();
    Rendered {
        html,
        css: sheet.to_css(),
    }
}
