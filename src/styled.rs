//! The style builder shared by elements and scoped blocks.

use crate::color::DarkModeColor;
use crate::declaration::{Declaration, Selector, StyleContext};
use crate::properties::*;
use crate::style::*;
use crate::units::Length;
use crate::variants::{Breakpoint, MediaQuery, Pseudo};

/// Anything that can accumulate style declarations.
///
/// Implementors provide the context declarations are created in and a way
/// to store them; every helper below is built on [`Styled::css`].
pub trait Styled: Sized {
    fn context(&self) -> &StyleContext;

    fn with_declarations(self, declarations: Vec<Declaration>) -> Self;

    fn css(self, property: impl CssProperty) -> Self {
        let declarations = property.declarations(self.context());
        self.with_declarations(declarations)
    }

    /// Applies the styles built in `build` under an additional scope.
    fn scoped(self, scope: StyleContext, build: impl FnOnce(ScopedStyles) -> ScopedStyles) -> Self {
        let context = self.context().merge(&scope);
        let declarations = build(ScopedStyles::new(context)).into_declarations();
        self.with_declarations(declarations)
    }

    fn media(self, query: MediaQuery, build: impl FnOnce(ScopedStyles) -> ScopedStyles) -> Self {
        self.scoped(StyleContext::media(query), build)
    }

    /// Styles from `bp` upwards.
    fn at(self, bp: Breakpoint, build: impl FnOnce(ScopedStyles) -> ScopedStyles) -> Self {
        self.media(MediaQuery::breakpoint(bp), build)
    }

    /// Styles below `bp`.
    fn below(self, bp: Breakpoint, build: impl FnOnce(ScopedStyles) -> ScopedStyles) -> Self {
        self.media(MediaQuery::below(bp), build)
    }

    fn dark(self, build: impl FnOnce(ScopedStyles) -> ScopedStyles) -> Self {
        self.media(MediaQuery::dark(), build)
    }

    fn print(self, build: impl FnOnce(ScopedStyles) -> ScopedStyles) -> Self {
        self.media(MediaQuery::print(), build)
    }

    fn pseudo(self, pseudo: Pseudo, build: impl FnOnce(ScopedStyles) -> ScopedStyles) -> Self {
        self.scoped(StyleContext::pseudo(pseudo), build)
    }

    fn hover(self, build: impl FnOnce(ScopedStyles) -> ScopedStyles) -> Self {
        self.pseudo(Pseudo::Hover, build)
    }

    fn focus(self, build: impl FnOnce(ScopedStyles) -> ScopedStyles) -> Self {
        self.pseudo(Pseudo::Focus, build)
    }

    /// Styles applied to descendants matching `target`.
    fn descendant(self, target: &str, build: impl FnOnce(ScopedStyles) -> ScopedStyles) -> Self {
        self.scoped(StyleContext::selector(Selector::Descendant(target.to_string())), build)
    }

    fn direct_child(self, target: &str, build: impl FnOnce(ScopedStyles) -> ScopedStyles) -> Self {
        self.scoped(StyleContext::selector(Selector::Child(target.to_string())), build)
    }

    fn adjacent(self, target: &str, build: impl FnOnce(ScopedStyles) -> ScopedStyles) -> Self {
        self.scoped(StyleContext::selector(Selector::Adjacent(target.to_string())), build)
    }

    /// Styles that only apply inside an ancestor matching `ancestor`.
    fn within(self, ancestor: &str, build: impl FnOnce(ScopedStyles) -> ScopedStyles) -> Self {
        self.scoped(StyleContext::selector(Selector::Within(ancestor.to_string())), build)
    }

    fn color(self, color: impl Into<DarkModeColor>) -> Self {
        self.css(TextColor::new(color))
    }

    fn background_color(self, color: impl Into<DarkModeColor>) -> Self {
        self.css(BackgroundColor::new(color))
    }

    fn border_color(self, color: impl Into<DarkModeColor>) -> Self {
        self.css(BorderColor::new(color))
    }

    fn border(self, border: Border) -> Self {
        self.css(border)
    }

    fn border_radius(self, radius: Length) -> Self {
        self.css(BorderRadius(radius))
    }

    fn margin(self, sides: impl Into<Sides<Length>>) -> Self {
        self.css(Margin(sides.into()))
    }

    fn padding(self, sides: impl Into<Sides<Length>>) -> Self {
        self.css(Padding(sides.into()))
    }

    fn width(self, width: Length) -> Self {
        self.css(Width(width))
    }

    fn height(self, height: Length) -> Self {
        self.css(Height(height))
    }

    fn min_width(self, width: Length) -> Self {
        self.css(MinWidth(width))
    }

    fn max_width(self, width: Length) -> Self {
        self.css(MaxWidth(width))
    }

    fn min_height(self, height: Length) -> Self {
        self.css(MinHeight(height))
    }

    fn max_height(self, height: Length) -> Self {
        self.css(MaxHeight(height))
    }

    fn display(self, display: Display) -> Self {
        self.css(DisplayProperty(display))
    }

    fn position(self, position: Position) -> Self {
        self.css(PositionProperty(position))
    }

    fn overflow(self, overflow: Overflow) -> Self {
        self.css(OverflowProperty(overflow))
    }

    fn cursor(self, cursor: Cursor) -> Self {
        self.css(CursorProperty(cursor))
    }

    fn z_index(self, z: i32) -> Self {
        self.css(ZIndex(z))
    }

    fn opacity(self, opacity: f64) -> Self {
        self.css(Opacity(opacity))
    }

    fn font_size(self, size: Length) -> Self {
        self.css(FontSize(size))
    }

    fn font_weight(self, weight: FontWeight) -> Self {
        self.css(FontWeightProperty(weight))
    }

    fn font_family(self, families: impl IntoIterator<Item = FontFamily>) -> Self {
        self.css(FontFamilies(families.into_iter().collect()))
    }

    fn line_height(self, height: Length) -> Self {
        self.css(LineHeight(height))
    }

    fn text_align(self, align: TextAlign) -> Self {
        self.css(TextAlignProperty(align))
    }

    fn text_decoration(self, decoration: TextDecoration) -> Self {
        self.css(TextDecorationProperty(decoration))
    }

    fn text_transform(self, transform: TextTransform) -> Self {
        self.css(TextTransformProperty(transform))
    }

    fn flex_direction(self, direction: FlexDirection) -> Self {
        self.css(FlexDirectionProperty(direction))
    }

    fn flex_wrap(self, wrap: FlexWrap) -> Self {
        self.css(FlexWrapProperty(wrap))
    }

    fn justify_content(self, justify: JustifyContent) -> Self {
        self.css(JustifyContentProperty(justify))
    }

    fn align_items(self, align: AlignItems) -> Self {
        self.css(AlignItemsProperty(align))
    }

    fn gap(self, gap: Length) -> Self {
        self.css(Gap(gap))
    }
}

/// Declarations built inside a scope such as `.hover(|s| ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedStyles {
    context: StyleContext,
    declarations: Vec<Declaration>,
}

impl ScopedStyles {
    pub fn new(context: StyleContext) -> Self {
        Self {
            context,
            declarations: Vec::new(),
        }
    }

    pub fn into_declarations(self) -> Vec<Declaration> {
        self.declarations
    }
}

impl Styled for ScopedStyles {
    fn context(&self) -> &StyleContext {
        &self.context
    }

    fn with_declarations(mut self, declarations: Vec<Declaration>) -> Self {
        self.declarations.extend(declarations);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::tags::div;
    use crate::units::px;
    use pretty_assertions::assert_eq;

    #[test]
    fn hover_scope_sets_pseudo() {
        let el = div().hover(|s| s.color(Color::RED));
        assert_eq!(el.styles().len(), 1);
        assert_eq!(el.styles()[0].pseudo.as_deref(), Some(":hover"));
    }

    #[test]
    fn nested_scopes_merge() {
        let el = div().at(Breakpoint::Md, |s| s.hover(|s| s.padding(px(8.0))));
        let decl = &el.styles()[0];
        assert_eq!(decl.media.as_deref(), Some("(min-width: 48rem)"));
        assert_eq!(decl.pseudo.as_deref(), Some(":hover"));
        assert_eq!(decl.value, "8px");
    }

    #[test]
    fn dark_scope_uses_dark_value() {
        let el = div().dark(|s| s.background_color(Color::WHITE.with_dark(Color::hex(0x101010))));
        assert_eq!(el.styles().len(), 1);
        assert_eq!(el.styles()[0].value, "#101010");
        assert_eq!(
            el.styles()[0].media.as_deref(),
            Some("(prefers-color-scheme: dark)")
        );
    }

    #[test]
    fn selector_scopes() {
        let el = div()
            .direct_child("li", |s| s.margin(px(0.0)))
            .within(".card", |s| s.width(px(10.0)));
        assert_eq!(el.styles()[0].selector, Some(Selector::Child("li".into())));
        assert_eq!(el.styles()[1].selector, Some(Selector::Within(".card".into())));
    }
}
