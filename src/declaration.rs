use crate::variants::{MediaQuery, Pseudo};
use serde::{Deserialize, Serialize};

/// Where a rule applies relative to the element carrying the class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selector {
    /// `.cls target`
    Descendant(String),
    /// `.cls > target`
    Child(String),
    /// `.cls + target`
    Adjacent(String),
    /// `ancestor .cls`
    Within(String),
}

impl Selector {
    /// The tag, class or ancestor text the selector was built from.
    pub fn target(&self) -> &str {
        match self {
            Selector::Descendant(target)
            | Selector::Child(target)
            | Selector::Adjacent(target)
            | Selector::Within(target) => target,
        }
    }

    /// Builds the full selector around `base` (the class plus any pseudo suffix).
    pub fn wrap(&self, base: &str, pretty: bool) -> String {
        let (child, adjacent) = if pretty { (" > ", " + ") } else { (">", "+") };
        match self {
            Selector::Descendant(target) => format!("{} {}", base, target),
            Selector::Child(target) => format!("{}{}{}", base, child, target),
            Selector::Adjacent(target) => format!("{}{}{}", base, adjacent, target),
            Selector::Within(ancestor) => format!("{} {}", ancestor, base),
        }
    }
}

/// A single CSS property/value pair with its scope.
///
/// Two declarations are equal iff property, value, media, selector and
/// pseudo all match; equal declarations share one generated class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pseudo: Option<String>,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            media: None,
            selector: None,
            pseudo: None,
        }
    }

    /// Declarations with the same scope key target the same thing on an
    /// element; the later one wins.
    pub fn same_scope(&self, other: &Declaration) -> bool {
        self.property == other.property
            && self.media == other.media
            && self.selector == other.selector
            && self.pseudo == other.pseudo
    }
}

/// Scope threaded through style builders in place of ambient state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleContext {
    pub media: Option<MediaQuery>,
    pub pseudo: Vec<Pseudo>,
    pub selector: Option<Selector>,
}

pub(crate) static ROOT_CONTEXT: StyleContext = StyleContext::new();

impl StyleContext {
    pub const fn new() -> Self {
        Self {
            media: None,
            pseudo: Vec::new(),
            selector: None,
        }
    }

    pub fn media(query: MediaQuery) -> Self {
        Self {
            media: Some(query),
            ..Self::new()
        }
    }

    pub fn pseudo(pseudo: Pseudo) -> Self {
        Self {
            pseudo: vec![pseudo],
            ..Self::new()
        }
    }

    pub fn selector(selector: Selector) -> Self {
        Self {
            selector: Some(selector),
            ..Self::new()
        }
    }

    /// Nests `inner` inside this context: media queries are ANDed, pseudos
    /// appended, and the inner selector replaces the outer one.
    pub fn merge(&self, inner: &StyleContext) -> StyleContext {
        let media = match (&self.media, &inner.media) {
            (Some(outer), Some(inner)) => Some(outer.combine(inner)),
            (Some(q), None) | (None, Some(q)) => Some(q.clone()),
            (None, None) => None,
        };
        let mut pseudo = self.pseudo.clone();
        for p in &inner.pseudo {
            if !pseudo.contains(p) {
                pseudo.push(*p);
            }
        }
        StyleContext {
            media,
            pseudo,
            selector: inner.selector.clone().or_else(|| self.selector.clone()),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.media.as_ref().is_some_and(MediaQuery::is_dark)
    }

    pub fn is_light(&self) -> bool {
        self.media.as_ref().is_some_and(MediaQuery::is_light)
    }

    /// Creates a declaration scoped to this context.
    pub fn declare(&self, property: impl Into<String>, value: impl Into<String>) -> Declaration {
        Declaration {
            property: property.into(),
            value: value.into(),
            media: self
                .media
                .as_ref()
                .filter(|q| !q.is_empty())
                .map(|q| q.to_string()),
            selector: self.selector.clone(),
            pseudo: self.pseudo_suffix(),
        }
    }

    fn pseudo_suffix(&self) -> Option<String> {
        if self.pseudo.is_empty() {
            return None;
        }
        // Pseudo-elements must trail any pseudo-classes.
        let classes = self.pseudo.iter().filter(|p| !p.is_element());
        let elements = self.pseudo.iter().filter(|p| p.is_element());
        Some(classes.chain(elements).map(|p| p.as_css()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::px;

    #[test]
    fn root_context_declares_unscoped() {
        let decl = ROOT_CONTEXT.declare("padding", "16px");
        assert_eq!(decl, Declaration::new("padding", "16px"));
    }

    #[test]
    fn merge_ands_media_and_chains_pseudo() {
        let outer = StyleContext::media(MediaQuery::min_width(px(768.0)));
        let inner = StyleContext::media(MediaQuery::dark()).merge(&StyleContext::pseudo(Pseudo::Hover));
        let ctx = outer.merge(&inner);
        let decl = ctx.declare("color", "red");
        assert_eq!(
            decl.media.as_deref(),
            Some("(min-width: 768px) and (prefers-color-scheme: dark)")
        );
        assert_eq!(decl.pseudo.as_deref(), Some(":hover"));
        assert!(ctx.is_dark());
    }

    #[test]
    fn pseudo_elements_trail_classes() {
        let ctx = StyleContext::pseudo(Pseudo::Before).merge(&StyleContext::pseudo(Pseudo::Hover));
        assert_eq!(ctx.declare("content", "''").pseudo.as_deref(), Some(":hover::before"));
    }

    #[test]
    fn inner_selector_wins() {
        let ctx = StyleContext::selector(Selector::Child("li".into()))
            .merge(&StyleContext::selector(Selector::Descendant("a".into())));
        assert_eq!(ctx.selector, Some(Selector::Descendant("a".into())));
    }

    #[test]
    fn same_scope_ignores_value() {
        let a = Declaration::new("color", "red");
        let b = Declaration::new("color", "blue");
        let c = StyleContext::pseudo(Pseudo::Hover).declare("color", "blue");
        assert!(a.same_scope(&b));
        assert!(!a.same_scope(&c));
    }

    #[test]
    fn selector_wrapping() {
        assert_eq!(Selector::Child("li".into()).wrap(".list-0", false), ".list-0>li");
        assert_eq!(Selector::Child("li".into()).wrap(".list-0", true), ".list-0 > li");
        assert_eq!(Selector::Within(".card".into()).wrap(".color-0", false), ".card .color-0");
    }
}
