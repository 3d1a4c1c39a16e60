//! # NullTrace HTML
//!
//! A typed builder for HTML documents whose styles compile to atomic,
//! deduplicated CSS classes.
//!
//! ## Features
//! - Immutable element builders with typed CSS properties
//! - Light/dark color pairs with derived dark values
//! - Media query, pseudo-class and selector scopes
//! - One generated class per unique declaration across the whole document
//! - YAML render configuration and design-token themes
//!
//! ## Example
//! ```ignore
//! use nulltrace_html::prelude::*;
//!
//! let page = Document::new(Head::new("Hello"))
//!     .lang("en")
//!     .body(tags::div()
//!         .padding(px(16.0))
//!         .border(Border::new(px(1.0), BorderStyle::Solid, Color::RED))
//!         .hover(|s| s.background_color(Color::hex(0xf5f5f5)))
//!         .text("Hello world"));
//!
//! let html = page.render();
//! ```

pub mod color;
pub mod config;
pub mod declaration;
pub mod document;
pub mod element;
pub mod error;
pub mod head;
pub mod input;
pub mod properties;
pub mod renderer;
pub mod style;
pub mod styled;
pub mod stylesheet;
pub mod tags;
pub mod theme;
pub mod units;
pub mod validator;
pub mod variants;

// --- Core types ---
pub use color::{Color, DarkModeColor, NamedColor};
pub use config::{ClassNaming, RenderConfig};
pub use declaration::{Declaration, Selector, StyleContext};
pub use document::{render_fragment, Document, Rendered};
pub use element::{Attribute, AttributeValue, Element, Node};
pub use error::{HtmlError, HtmlResult};
pub use head::{FontImport, Head, MetaTag};
pub use styled::{ScopedStyles, Styled};
pub use stylesheet::StyleSheet;
pub use theme::{Theme, ThemeColor};
pub use units::Length;
pub use variants::{Breakpoint, MediaCondition, MediaQuery, Pseudo};

// --- Validation ---
pub use validator::{validate_document, validate_head, validate_node};

/// Everything needed to build and render a page.
///
/// Tag constructors stay behind `tags::` since names like `em` and `i`
/// would shadow the unit helpers.
pub mod prelude {
    pub use crate::color::{Color, DarkModeColor};
    pub use crate::config::{ClassNaming, RenderConfig};
    pub use crate::document::{render_fragment, Document};
    pub use crate::element::{Element, Node};
    pub use crate::error::{HtmlError, HtmlResult};
    pub use crate::head::{FontImport, Head};
    pub use crate::input::{input, Date, InputType, Time};
    pub use crate::properties::{Border, BorderSide, CustomProperty, Sides};
    pub use crate::style::*;
    pub use crate::styled::Styled;
    pub use crate::tags;
    pub use crate::theme::Theme;
    pub use crate::units::{em, percent, px, rem, vh, vw, Length};
    pub use crate::variants::{Breakpoint, MediaQuery, Pseudo};
}
