use crate::element::{escape_attribute, escape_text};
use serde::{Deserialize, Serialize};

const DEFAULT_VIEWPORT: &str = "width=device-width, initial-scale=1";

/// Head section of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Head {
    /// Page title, required
    pub title: String,
    #[serde(default = "default_charset")]
    pub charset: String,
    /// Viewport meta content; `None` leaves the tag out
    #[serde(default = "default_viewport")]
    pub viewport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Additional `<meta name=... content=...>` tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meta: Vec<MetaTag>,
    /// External stylesheet URLs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stylesheets: Vec<String>,
    /// Fonts to import from Google Fonts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fonts: Vec<FontImport>,
}

fn default_charset() -> String {
    "utf-8".to_string()
}

fn default_viewport() -> Option<String> {
    Some(DEFAULT_VIEWPORT.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

/// A Google Fonts import declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontImport {
    /// Font family name (e.g., "Roboto Mono")
    pub family: String,
    /// Font weights to load (e.g., [400, 700])
    pub weights: Vec<u16>,
}

impl FontImport {
    pub fn new(family: impl Into<String>, weights: Vec<u16>) -> Self {
        Self {
            family: family.into(),
            weights,
        }
    }

    /// `family=Roboto+Mono:wght@400;700` query fragment
    fn query(&self) -> String {
        let family = self.family.trim().replace(' ', "+");
        if self.weights.is_empty() {
            return format!("family={}", family);
        }
        let mut weights = self.weights.clone();
        weights.sort_unstable();
        weights.dedup();
        let weights: Vec<String> = weights.iter().map(u16::to_string).collect();
        format!("family={}:wght@{}", family, weights.join(";"))
    }
}

impl Head {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            charset: default_charset(),
            viewport: default_viewport(),
            description: None,
            author: None,
            meta: Vec::new(),
            stylesheets: Vec::new(),
            fonts: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn viewport(mut self, viewport: Option<String>) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn meta(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.meta.push(MetaTag {
            name: name.into(),
            content: content.into(),
        });
        self
    }

    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheets.push(href.into());
        self
    }

    pub fn font(mut self, font: FontImport) -> Self {
        self.fonts.push(font);
        self
    }

    /// Returns all declared font family names
    pub fn font_families(&self) -> Vec<String> {
        self.fonts.iter().map(|f| f.family.clone()).collect()
    }

    /// Google Fonts stylesheet URL covering every declared font
    pub fn fonts_url(&self) -> Option<String> {
        if self.fonts.is_empty() {
            return None;
        }
        let families: Vec<String> = self.fonts.iter().map(FontImport::query).collect();
        Some(format!(
            "https://fonts.googleapis.com/css2?{}&display=swap",
            families.join("&")
        ))
    }

    /// Writes the head contents; `css` goes into a trailing `<style>` when non-empty.
    pub(crate) fn write(&self, out: &mut String, css: &str) {
        out.push_str("<meta charset=\"");
        out.push_str(&escape_attribute(&self.charset));
        out.push_str("\">");
        if let Some(viewport) = &self.viewport {
            write_meta(out, "viewport", viewport);
        }
        out.push_str("<title>");
        out.push_str(&escape_text(&self.title));
        out.push_str("</title>");
        if let Some(description) = &self.description {
            write_meta(out, "description", description);
        }
        if let Some(author) = &self.author {
            write_meta(out, "author", author);
        }
        for meta in &self.meta {
            write_meta(out, &meta.name, &meta.content);
        }
        if let Some(url) = self.fonts_url() {
            write_stylesheet(out, &url);
        }
        for href in &self.stylesheets {
            write_stylesheet(out, href);
        }
        if !css.is_empty() {
            out.push_str("<style>");
            out.push_str(css);
            out.push_str("</style>");
        }
    }
}

fn write_meta(out: &mut String, name: &str, content: &str) {
    out.push_str("<meta name=\"");
    out.push_str(&escape_attribute(name));
    out.push_str("\" content=\"");
    out.push_str(&escape_attribute(content));
    out.push_str("\">");
}

fn write_stylesheet(out: &mut String, href: &str) {
    out.push_str("<link rel=\"stylesheet\" href=\"");
    out.push_str(&escape_attribute(href));
    out.push_str("\">");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn minimal_head() {
        let mut out = String::new();
        Head::new("Home").write(&mut out, "");
        assert_eq!(
            out,
            "<meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>Home</title>"
        );
    }

    #[test]
    fn fonts_url_merges_families() {
        let head = Head::new("Fonts")
            .font(FontImport::new("Roboto Mono", vec![700, 400]))
            .font(FontImport::new("Inter", vec![]));
        assert_eq!(
            head.fonts_url().as_deref(),
            Some("https://fonts.googleapis.com/css2?family=Roboto+Mono:wght@400;700&family=Inter&display=swap")
        );
        assert_eq!(head.font_families(), vec!["Roboto Mono", "Inter"]);
    }

    #[test]
    fn head_escapes_and_appends_style() {
        let mut out = String::new();
        Head::new("A <b>")
            .viewport(None)
            .meta("theme-color", "#000")
            .write(&mut out, ".p-0{padding:0}");
        assert!(out.contains("<title>A &lt;b&gt;</title>"));
        assert!(out.contains("<meta name=\"theme-color\" content=\"#000\">"));
        assert!(out.ends_with("<style>.p-0{padding:0}</style>"));
        assert!(!out.contains("viewport"));
    }

    #[test]
    fn deserializes_with_defaults() {
        let head: Head = serde_yaml::from_str("title: Docs\nauthor: Ana").unwrap();
        assert_eq!(head.charset, "utf-8");
        assert_eq!(head.viewport.as_deref(), Some(DEFAULT_VIEWPORT));
        assert_eq!(head.author.as_deref(), Some("Ana"));
    }
}
