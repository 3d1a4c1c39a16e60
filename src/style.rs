//! Keyword values for CSS properties.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! css_keyword {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $css:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_css(self) -> &'static str {
                match self {
                    $($name::$variant => $css),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_css())
            }
        }
    };
}

css_keyword!(Display {
    Block => "block",
    Inline => "inline",
    InlineBlock => "inline-block",
    Flex => "flex",
    InlineFlex => "inline-flex",
    Grid => "grid",
    Contents => "contents",
    None => "none",
});

css_keyword!(Position {
    Static => "static",
    Relative => "relative",
    Absolute => "absolute",
    Fixed => "fixed",
    Sticky => "sticky",
});

css_keyword!(TextAlign {
    Left => "left",
    Center => "center",
    Right => "right",
    Justify => "justify",
    Start => "start",
    End => "end",
});

css_keyword!(TextTransform {
    None => "none",
    Uppercase => "uppercase",
    Lowercase => "lowercase",
    Capitalize => "capitalize",
});

css_keyword!(TextDecoration {
    None => "none",
    Underline => "underline",
    Overline => "overline",
    LineThrough => "line-through",
});

css_keyword!(BorderStyle {
    None => "none",
    Solid => "solid",
    Dashed => "dashed",
    Dotted => "dotted",
    Double => "double",
});

css_keyword!(Overflow {
    Visible => "visible",
    Hidden => "hidden",
    Clip => "clip",
    Scroll => "scroll",
    Auto => "auto",
});

css_keyword!(Cursor {
    Default => "default",
    Pointer => "pointer",
    NotAllowed => "not-allowed",
    Text => "text",
    Wait => "wait",
    Grab => "grab",
});

css_keyword!(FlexDirection {
    Row => "row",
    RowReverse => "row-reverse",
    Column => "column",
    ColumnReverse => "column-reverse",
});

css_keyword!(FlexWrap {
    Nowrap => "nowrap",
    Wrap => "wrap",
    WrapReverse => "wrap-reverse",
});

css_keyword!(JustifyContent {
    Start => "flex-start",
    Center => "center",
    End => "flex-end",
    SpaceBetween => "space-between",
    SpaceAround => "space-around",
    SpaceEvenly => "space-evenly",
});

css_keyword!(AlignItems {
    Start => "flex-start",
    Center => "center",
    End => "flex-end",
    Stretch => "stretch",
    Baseline => "baseline",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    Number(u16),
    Named(FontWeightNamed),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeightNamed {
    Normal,
    Bold,
    Lighter,
    Bolder,
}

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight::Named(FontWeightNamed::Normal);
    pub const BOLD: FontWeight = FontWeight::Named(FontWeightNamed::Bold);
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Number(n) => write!(f, "{}", n),
            FontWeight::Named(FontWeightNamed::Normal) => f.write_str("normal"),
            FontWeight::Named(FontWeightNamed::Bold) => f.write_str("bold"),
            FontWeight::Named(FontWeightNamed::Lighter) => f.write_str("lighter"),
            FontWeight::Named(FontWeightNamed::Bolder) => f.write_str("bolder"),
        }
    }
}

/// A font stack entry. Family names are quoted when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    SansSerif,
    Serif,
    Monospace,
    SystemUi,
    Family(String),
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFamily::SansSerif => f.write_str("sans-serif"),
            FontFamily::Serif => f.write_str("serif"),
            FontFamily::Monospace => f.write_str("monospace"),
            FontFamily::SystemUi => f.write_str("system-ui"),
            FontFamily::Family(name) => write!(f, "\"{}\"", name.replace('"', "")),
        }
    }
}
