//! Typed CSS properties.
//!
//! Every property turns into zero or more [`Declaration`]s for a given
//! [`StyleContext`]. Missing values are omitted rather than rejected.

use crate::color::DarkModeColor;
use crate::declaration::{Declaration, StyleContext};
use crate::error::{HtmlError, HtmlResult};
use crate::style::*;
use crate::units::{format_number, Length};
use crate::variants::MediaQuery;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Something that contributes declarations to an element's style.
pub trait CssProperty {
    fn declarations(&self, ctx: &StyleContext) -> Vec<Declaration>;
}

impl<P: CssProperty> CssProperty for Option<P> {
    fn declarations(&self, ctx: &StyleContext) -> Vec<Declaration> {
        self.as_ref().map(|p| p.declarations(ctx)).unwrap_or_default()
    }
}

macro_rules! single_value_property {
    ($($name:ident($ty:ty) => $css:literal),+ $(,)?) => {
        $(
            #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
            pub struct $name(pub $ty);

            impl CssProperty for $name {
                fn declarations(&self, ctx: &StyleContext) -> Vec<Declaration> {
                    vec![ctx.declare($css, self.0.to_string())]
                }
            }
        )+
    };
}

single_value_property! {
    Width(Length) => "width",
    Height(Length) => "height",
    MinWidth(Length) => "min-width",
    MaxWidth(Length) => "max-width",
    MinHeight(Length) => "min-height",
    MaxHeight(Length) => "max-height",
    Top(Length) => "top",
    Right(Length) => "right",
    Bottom(Length) => "bottom",
    Left(Length) => "left",
    Gap(Length) => "gap",
    FontSize(Length) => "font-size",
    LineHeight(Length) => "line-height",
    LetterSpacing(Length) => "letter-spacing",
    BorderRadius(Length) => "border-radius",
    ZIndex(i32) => "z-index",
    DisplayProperty(Display) => "display",
    PositionProperty(Position) => "position",
    TextAlignProperty(TextAlign) => "text-align",
    TextTransformProperty(TextTransform) => "text-transform",
    TextDecorationProperty(TextDecoration) => "text-decoration",
    OverflowProperty(Overflow) => "overflow",
    CursorProperty(Cursor) => "cursor",
    FlexDirectionProperty(FlexDirection) => "flex-direction",
    FlexWrapProperty(FlexWrap) => "flex-wrap",
    JustifyContentProperty(JustifyContent) => "justify-content",
    AlignItemsProperty(AlignItems) => "align-items",
    FontWeightProperty(FontWeight) => "font-weight",
}

/// `opacity`, clamped to `0..=1`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opacity(pub f64);

impl CssProperty for Opacity {
    fn declarations(&self, ctx: &StyleContext) -> Vec<Declaration> {
        vec![ctx.declare("opacity", format_number(self.0.clamp(0.0, 1.0)))]
    }
}

/// `font-family` stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontFamilies(pub Vec<FontFamily>);

impl CssProperty for FontFamilies {
    fn declarations(&self, ctx: &StyleContext) -> Vec<Declaration> {
        if self.0.is_empty() {
            return Vec::new();
        }
        let stack: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        vec![ctx.declare("font-family", stack.join(","))]
    }
}

// ─── Colors ─────────────────────────────────────────────────────────────────

/// Emits a color declaration plus its dark-mode counterpart.
///
/// Inside a dark context only the dark value is emitted. Otherwise the dark
/// value goes under `prefers-color-scheme: dark` unless it paints the same
/// as the light one or the context is already pinned to the light scheme.
pub fn color_declarations(property: &str, color: &DarkModeColor, ctx: &StyleContext) -> Vec<Declaration> {
    if ctx.is_dark() {
        return vec![ctx.declare(property, color.resolved_dark().to_string())];
    }
    let mut decls = vec![ctx.declare(property, color.light.to_string())];
    if !color.is_uniform() && !ctx.is_light() {
        let dark_ctx = ctx.merge(&StyleContext::media(MediaQuery::dark()));
        decls.push(dark_ctx.declare(property, color.resolved_dark().to_string()));
    }
    decls
}

macro_rules! color_property {
    ($($name:ident => $css:literal),+ $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
            pub struct $name(pub DarkModeColor);

            impl $name {
                pub fn new(color: impl Into<DarkModeColor>) -> Self {
                    Self(color.into())
                }
            }

            impl CssProperty for $name {
                fn declarations(&self, ctx: &StyleContext) -> Vec<Declaration> {
                    color_declarations($css, &self.0, ctx)
                }
            }
        )+
    };
}

color_property! {
    TextColor => "color",
    BackgroundColor => "background-color",
    BorderColor => "border-color",
}

// ─── Margin & Padding ───────────────────────────────────────────────────────

/// Per-side values; unset sides are omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sides<T> {
    pub top: Option<T>,
    pub right: Option<T>,
    pub bottom: Option<T>,
    pub left: Option<T>,
}

impl<T: Copy> Sides<T> {
    pub fn all(value: T) -> Self {
        Self {
            top: Some(value),
            right: Some(value),
            bottom: Some(value),
            left: Some(value),
        }
    }

    pub fn symmetric(vertical: T, horizontal: T) -> Self {
        Self {
            top: Some(vertical),
            right: Some(horizontal),
            bottom: Some(vertical),
            left: Some(horizontal),
        }
    }

    pub fn each(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top: Some(top),
            right: Some(right),
            bottom: Some(bottom),
            left: Some(left),
        }
    }

    pub fn vertical(value: T) -> Self {
        Self {
            top: Some(value),
            bottom: Some(value),
            ..Self::none()
        }
    }

    pub fn horizontal(value: T) -> Self {
        Self {
            right: Some(value),
            left: Some(value),
            ..Self::none()
        }
    }

    pub fn none() -> Self {
        Self {
            top: None,
            right: None,
            bottom: None,
            left: None,
        }
    }

    pub fn top(mut self, value: T) -> Self {
        self.top = Some(value);
        self
    }

    pub fn right(mut self, value: T) -> Self {
        self.right = Some(value);
        self
    }

    pub fn bottom(mut self, value: T) -> Self {
        self.bottom = Some(value);
        self
    }

    pub fn left(mut self, value: T) -> Self {
        self.left = Some(value);
        self
    }
}

impl<T> Default for Sides<T> {
    fn default() -> Self {
        Self {
            top: None,
            right: None,
            bottom: None,
            left: None,
        }
    }
}

impl From<Length> for Sides<Length> {
    fn from(value: Length) -> Self {
        Sides::all(value)
    }
}

/// Collapses four sides into the shortest shorthand, or falls back to
/// per-side longhands when some sides are unset.
fn side_declarations<T>(property: &str, sides: &Sides<T>, ctx: &StyleContext) -> Vec<Declaration>
where
    T: PartialEq + ToString,
{
    match (&sides.top, &sides.right, &sides.bottom, &sides.left) {
        (Some(t), Some(r), Some(b), Some(l)) => {
            let value = if t == r && r == b && b == l {
                t.to_string()
            } else if t == b && r == l {
                format!("{} {}", t.to_string(), r.to_string())
            } else {
                format!(
                    "{} {} {} {}",
                    t.to_string(),
                    r.to_string(),
                    b.to_string(),
                    l.to_string()
                )
            };
            vec![ctx.declare(property, value)]
        }
        (top, right, bottom, left) => [("top", top), ("right", right), ("bottom", bottom), ("left", left)]
            .into_iter()
            .filter_map(|(side, value)| {
                value
                    .as_ref()
                    .map(|v| ctx.declare(format!("{}-{}", property, side), v.to_string()))
            })
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margin(pub Sides<Length>);

impl CssProperty for Margin {
    fn declarations(&self, ctx: &StyleContext) -> Vec<Declaration> {
        side_declarations("margin", &self.0, ctx)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding(pub Sides<Length>);

impl CssProperty for Padding {
    fn declarations(&self, ctx: &StyleContext) -> Vec<Declaration> {
        side_declarations("padding", &self.0, ctx)
    }
}

// ─── Border ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderSide {
    Top,
    Right,
    Bottom,
    Left,
}

/// `border` shorthand; missing parts are left out of the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub width: Option<Length>,
    pub style: Option<BorderStyle>,
    pub color: Option<DarkModeColor>,
    pub side: Option<BorderSide>,
}

impl Border {
    pub fn new(width: Length, style: BorderStyle, color: impl Into<DarkModeColor>) -> Self {
        Self {
            width: Some(width),
            style: Some(style),
            color: Some(color.into()),
            side: None,
        }
    }

    pub fn width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    pub fn style(mut self, style: BorderStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn color(mut self, color: impl Into<DarkModeColor>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn side(mut self, side: BorderSide) -> Self {
        self.side = Some(side);
        self
    }

    fn property(&self, suffix: Option<&str>) -> String {
        let mut name = String::from("border");
        if let Some(side) = self.side {
            name.push('-');
            name.push_str(match side {
                BorderSide::Top => "top",
                BorderSide::Right => "right",
                BorderSide::Bottom => "bottom",
                BorderSide::Left => "left",
            });
        }
        if let Some(suffix) = suffix {
            name.push('-');
            name.push_str(suffix);
        }
        name
    }
}

impl CssProperty for Border {
    fn declarations(&self, ctx: &StyleContext) -> Vec<Declaration> {
        let color = self.color.map(|c| {
            if ctx.is_dark() {
                c.resolved_dark()
            } else {
                c.light
            }
        });
        let parts: Vec<String> = [
            self.width.map(|w| w.to_string()),
            self.style.map(|s| s.to_string()),
            color.map(|c| c.to_string()),
        ]
        .into_iter()
        .flatten()
        .collect();
        if parts.is_empty() {
            return Vec::new();
        }

        let mut decls = vec![ctx.declare(self.property(None), parts.join(" "))];
        if let Some(c) = self
            .color
            .filter(|c| !ctx.is_dark() && !ctx.is_light() && !c.is_uniform())
        {
            let dark_ctx = ctx.merge(&StyleContext::media(MediaQuery::dark()));
            decls.push(dark_ctx.declare(self.property(Some("color")), c.resolved_dark().to_string()));
        }
        decls
    }
}

// ─── Custom ─────────────────────────────────────────────────────────────────

fn property_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^-{0,2}[a-zA-Z][a-zA-Z0-9-]*$").unwrap())
}

/// A property outside the typed set, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomProperty {
    name: String,
    value: String,
}

impl CustomProperty {
    pub fn new(name: &str, value: &str) -> HtmlResult<Self> {
        if !property_name_pattern().is_match(name) {
            return Err(HtmlError::InvalidProperty {
                property: name.to_string(),
                reason: "property names must be identifiers, optionally prefixed with '-' or '--'"
                    .to_string(),
            });
        }
        if value.trim().is_empty() || value.contains([';', '{', '}', '<']) {
            return Err(HtmlError::InvalidProperty {
                property: name.to_string(),
                reason: format!("invalid value '{}'", value),
            });
        }
        Ok(Self {
            name: name.to_ascii_lowercase(),
            value: value.trim().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl CssProperty for CustomProperty {
    fn declarations(&self, ctx: &StyleContext) -> Vec<Declaration> {
        vec![ctx.declare(self.name.clone(), self.value.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::units::px;
    use crate::variants::Pseudo;
    use pretty_assertions::assert_eq;

    fn values(decls: &[Declaration]) -> Vec<(&str, &str)> {
        decls
            .iter()
            .map(|d| (d.property.as_str(), d.value.as_str()))
            .collect()
    }

    fn root() -> StyleContext {
        StyleContext::new()
    }

    #[test]
    fn margin_all_equal_collapses_to_one_value() {
        let decls = Margin(Sides::all(px(16.0))).declarations(&root());
        assert_eq!(values(&decls), vec![("margin", "16px")]);
    }

    #[test]
    fn margin_symmetric_uses_two_values() {
        let decls = Margin(Sides::symmetric(px(8.0), px(16.0))).declarations(&root());
        assert_eq!(values(&decls), vec![("margin", "8px 16px")]);
    }

    #[test]
    fn margin_distinct_uses_four_values() {
        let decls = Padding(Sides::each(px(1.0), px(2.0), px(3.0), px(4.0))).declarations(&root());
        assert_eq!(values(&decls), vec![("padding", "1px 2px 3px 4px")]);
    }

    #[test]
    fn partial_sides_fall_back_to_longhands() {
        let decls = Padding(Sides::none().top(px(4.0)).left(Length::Auto)).declarations(&root());
        assert_eq!(
            values(&decls),
            vec![("padding-top", "4px"), ("padding-left", "auto")]
        );
    }

    #[test]
    fn empty_sides_emit_nothing() {
        assert!(Margin(Sides::none()).declarations(&root()).is_empty());
    }

    #[test]
    fn border_shorthand() {
        let decls = Border::new(px(1.0), BorderStyle::Solid, Color::RED).declarations(&root());
        assert_eq!(values(&decls), vec![("border", "1px solid red")]);
    }

    #[test]
    fn border_omits_missing_parts() {
        let decls = Border::default().width(px(2.0)).side(BorderSide::Bottom).declarations(&root());
        assert_eq!(values(&decls), vec![("border-bottom", "2px")]);
        assert!(Border::default().declarations(&root()).is_empty());
    }

    #[test]
    fn border_dark_color_goes_to_media_block() {
        let decls = Border::new(px(1.0), BorderStyle::Solid, Color::WHITE).declarations(&root());
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[1].property, "border-color");
        assert_eq!(decls[1].value, "#000000");
        assert_eq!(decls[1].media.as_deref(), Some("(prefers-color-scheme: dark)"));
    }

    #[test]
    fn uniform_color_emits_single_declaration() {
        let decls = TextColor::new(DarkModeColor::fixed(Color::hex(0x4a90e2))).declarations(&root());
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].media, None);
    }

    #[test]
    fn light_dark_pair_emits_two_declarations() {
        let decls = BackgroundColor::new(Color::WHITE.with_dark(Color::hex(0x111111))).declarations(&root());
        assert_eq!(
            values(&decls),
            vec![("background-color", "white"), ("background-color", "#111111")]
        );
        assert_eq!(decls[1].media.as_deref(), Some("(prefers-color-scheme: dark)"));
    }

    #[test]
    fn dark_context_emits_only_dark_value() {
        let ctx = StyleContext::media(MediaQuery::dark());
        let decls = TextColor::new(Color::WHITE.with_dark(Color::hex(0xeeeeee))).declarations(&ctx);
        assert_eq!(values(&decls), vec![("color", "#eeeeee")]);
    }

    #[test]
    fn dark_variant_keeps_outer_scope() {
        let ctx = StyleContext::pseudo(Pseudo::Hover);
        let decls = TextColor::new(Color::BLACK).declarations(&ctx);
        assert_eq!(decls[1].pseudo.as_deref(), Some(":hover"));
        assert!(decls[1].media.is_some());
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(values(&Opacity(1.5).declarations(&root())), vec![("opacity", "1")]);
    }

    #[test]
    fn keyword_properties() {
        let decls = DisplayProperty(Display::Flex).declarations(&root());
        assert_eq!(values(&decls), vec![("display", "flex")]);
    }

    #[test]
    fn none_option_emits_nothing() {
        let missing: Option<Width> = None;
        assert!(missing.declarations(&root()).is_empty());
    }

    #[test]
    fn custom_property_validation() {
        assert!(CustomProperty::new("--brand-hue", "210").is_ok());
        assert!(CustomProperty::new("-webkit-line-clamp", "3").is_ok());
        assert!(matches!(
            CustomProperty::new("1bad", "x"),
            Err(HtmlError::InvalidProperty { .. })
        ));
        assert!(matches!(
            CustomProperty::new("color", "red;}body{"),
            Err(HtmlError::InvalidProperty { .. })
        ));
        assert!(matches!(
            CustomProperty::new("--x", "</style><script>alert(1)</script>"),
            Err(HtmlError::InvalidProperty { .. })
        ));
    }

    #[test]
    fn default_sides_are_empty() {
        assert_eq!(Margin::default(), Margin(Sides::none()));
        assert!(Padding::default().declarations(&root()).is_empty());
    }

    #[test]
    fn nan_opacity_renders_zero() {
        assert_eq!(values(&Opacity(f64::NAN).declarations(&root())), vec![("opacity", "0")]);
    }

    #[test]
    fn light_scope_skips_dark_variant() {
        let light = StyleContext::media(MediaQuery::light());
        let decls = TextColor::new(Color::BLACK).declarations(&light);
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].value, "black");
        assert_eq!(decls[0].media.as_deref(), Some("(prefers-color-scheme: light)"));

        let decls = Border::new(px(1.0), BorderStyle::Solid, Color::WHITE).declarations(&light);
        assert_eq!(decls.len(), 1);
    }
}
