//! Constructors for the built-in HTML elements.

use crate::element::Element;

/// Elements that never have content or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

macro_rules! html_tags {
    ($($name:ident),+ $(,)?) => {
        $(
            pub fn $name() -> Element {
                Element::new(stringify!($name))
            }
        )+
    };
}

html_tags! {
    abbr, article, aside, b, blockquote, body, br, button, caption, code, dd, details, dialog,
    div, dl, dt, em, fieldset, figcaption, figure, footer, form, h1, h2, h3, h4, h5, h6, header,
    hr, i, label, legend, li, mark, nav, ol, optgroup, p, pre, section, select, small, span,
    strong, sub, summary, sup, table, tbody, td, textarea, tfoot, th, thead, time, tr, u, ul,
}

/// `<a href="...">`
pub fn a(href: &str) -> Element {
    Element::new("a").attr("href", href)
}

/// `<img src="..." alt="...">`; `alt` is required so images stay accessible.
pub fn img(src: &str, alt: &str) -> Element {
    Element::new("img").attr("src", src).attr("alt", alt)
}

/// `<main>`; named to stay clear of a binary's `main`.
pub fn main_element() -> Element {
    Element::new("main")
}

pub fn option(value: &str, label: &str) -> Element {
    Element::new("option").attr("value", value).text(label)
}
