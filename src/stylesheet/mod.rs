//! # Style collation
//!
//! Turns the declarations attached to elements into deduplicated,
//! class-based CSS.
//!
//! - **Collector**: per element, keeps the last declaration for each scope
//!   (property, media, selector, pseudo) and orders them last-applied first.
//! - **Interner**: one class name per unique declaration, however many
//!   elements use it.
//! - **Grouper**: plain rules first, then one `@media` block per distinct
//!   query in order of first appearance.
//! - **Serializer**: compact (`.padding-0{padding:16px}`) or indented CSS.
//!
//! ## Usage
//! ```ignore
//! let mut sheet = StyleSheet::new(&RenderConfig::default());
//! let classes = sheet.classes_for(element.styles());
//! let css = sheet.to_css();
//! ```

pub mod interner;
pub mod rule;

pub use interner::ClassInterner;
pub use rule::{CssRule, RuleGroup};

use crate::config::RenderConfig;
use crate::declaration::Declaration;

/// Keeps the last declaration per scope key, last-applied first.
pub fn collect_element(declarations: &[Declaration]) -> Vec<&Declaration> {
    let mut kept: Vec<&Declaration> = Vec::with_capacity(declarations.len());
    for declaration in declarations.iter().rev() {
        if !kept.iter().any(|d| d.same_scope(declaration)) {
            kept.push(declaration);
        }
    }
    kept
}

/// The stylesheet accumulated over one render.
#[derive(Debug)]
pub struct StyleSheet {
    interner: ClassInterner,
    pretty: bool,
}

impl StyleSheet {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            interner: ClassInterner::new(config.class_naming, config.class_prefix.as_deref()),
            pretty: config.pretty,
        }
    }

    /// Class names for one element's declarations, in collector order.
    pub fn classes_for(&mut self, declarations: &[Declaration]) -> Vec<String> {
        collect_element(declarations)
            .into_iter()
            .map(|d| self.interner.intern(d).to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.interner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }

    /// One rule per interned class, in intern order.
    pub fn rules(&self) -> Vec<CssRule> {
        self.interner
            .entries()
            .iter()
            .map(|(class, decl)| CssRule::for_class(class, decl, self.pretty))
            .collect()
    }

    pub fn groups(&self) -> Vec<RuleGroup> {
        rule::group_rules(self.rules())
    }

    pub fn to_css(&self) -> String {
        let groups = self.groups();
        tracing::debug!(
            rules = self.len(),
            media_blocks = groups.iter().filter(|g| g.media_query.is_some()).count(),
            "collated stylesheet"
        );
        rule::render_groups(&groups, self.pretty)
    }
}
