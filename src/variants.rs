//! Media queries and pseudo-class/element scopes.
//!
//! These are the scoping parts of a declaration: a rule can be wrapped in an
//! `@media` block, suffixed with a pseudo-class, or both.

use crate::units::Length;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Responsive breakpoints (min-width), in rem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    pub fn width(self) -> Length {
        match self {
            Breakpoint::Sm => Length::Rem(40.0),  // 640px
            Breakpoint::Md => Length::Rem(48.0),  // 768px
            Breakpoint::Lg => Length::Rem(64.0),  // 1024px
            Breakpoint::Xl => Length::Rem(80.0),  // 1280px
            Breakpoint::Xxl => Length::Rem(96.0), // 1536px
        }
    }

    /// Upper bound for `max-*` variants: one pixel below the breakpoint.
    pub fn max_width(self) -> Length {
        match self.width() {
            Length::Rem(v) => Length::Rem(v - 0.0625),
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// A single media feature or media type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaCondition {
    Screen,
    Print,
    MinWidth(Length),
    MaxWidth(Length),
    PrefersColorScheme(ColorScheme),
    PrefersReducedMotion,
    NoMotionPreference,
    Orientation(Orientation),
}

impl MediaCondition {
    fn is_media_type(&self) -> bool {
        matches!(self, MediaCondition::Screen | MediaCondition::Print)
    }
}

impl fmt::Display for MediaCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaCondition::Screen => f.write_str("screen"),
            MediaCondition::Print => f.write_str("print"),
            MediaCondition::MinWidth(w) => write!(f, "(min-width: {})", w),
            MediaCondition::MaxWidth(w) => write!(f, "(max-width: {})", w),
            MediaCondition::PrefersColorScheme(ColorScheme::Dark) => {
                f.write_str("(prefers-color-scheme: dark)")
            }
            MediaCondition::PrefersColorScheme(ColorScheme::Light) => {
                f.write_str("(prefers-color-scheme: light)")
            }
            MediaCondition::PrefersReducedMotion => f.write_str("(prefers-reduced-motion: reduce)"),
            MediaCondition::NoMotionPreference => {
                f.write_str("(prefers-reduced-motion: no-preference)")
            }
            MediaCondition::Orientation(Orientation::Portrait) => {
                f.write_str("(orientation: portrait)")
            }
            MediaCondition::Orientation(Orientation::Landscape) => {
                f.write_str("(orientation: landscape)")
            }
        }
    }
}

/// A conjunction of media conditions, rendered as `@media <query>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaQuery {
    conditions: Vec<MediaCondition>,
}

impl MediaQuery {
    pub fn new(condition: MediaCondition) -> Self {
        Self {
            conditions: vec![condition],
        }
    }

    pub fn min_width(width: Length) -> Self {
        Self::new(MediaCondition::MinWidth(width))
    }

    pub fn max_width(width: Length) -> Self {
        Self::new(MediaCondition::MaxWidth(width))
    }

    pub fn breakpoint(bp: Breakpoint) -> Self {
        Self::min_width(bp.width())
    }

    pub fn below(bp: Breakpoint) -> Self {
        Self::max_width(bp.max_width())
    }

    pub fn dark() -> Self {
        Self::new(MediaCondition::PrefersColorScheme(ColorScheme::Dark))
    }

    pub fn light() -> Self {
        Self::new(MediaCondition::PrefersColorScheme(ColorScheme::Light))
    }

    pub fn print() -> Self {
        Self::new(MediaCondition::Print)
    }

    pub fn screen() -> Self {
        Self::new(MediaCondition::Screen)
    }

    /// Adds a condition, skipping it when already present.
    pub fn and(mut self, condition: MediaCondition) -> Self {
        if !self.conditions.contains(&condition) {
            self.conditions.push(condition);
        }
        self
    }

    /// Conjunction of two queries.
    pub fn combine(&self, other: &MediaQuery) -> MediaQuery {
        other
            .conditions
            .iter()
            .fold(self.clone(), |query, c| query.and(*c))
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn is_dark(&self) -> bool {
        self.conditions
            .contains(&MediaCondition::PrefersColorScheme(ColorScheme::Dark))
    }

    pub fn is_light(&self) -> bool {
        self.conditions
            .contains(&MediaCondition::PrefersColorScheme(ColorScheme::Light))
    }

    pub fn conditions(&self) -> &[MediaCondition] {
        &self.conditions
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Media types have to lead the query.
        let ordered = self
            .conditions
            .iter()
            .filter(|c| c.is_media_type())
            .chain(self.conditions.iter().filter(|c| !c.is_media_type()));
        for (i, condition) in ordered.enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{}", condition)?;
        }
        Ok(())
    }
}

/// Pseudo-classes and pseudo-elements appended to a rule selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pseudo {
    Hover,
    Focus,
    FocusWithin,
    FocusVisible,
    Active,
    Visited,
    Disabled,
    Enabled,
    Checked,
    Required,
    Invalid,
    FirstChild,
    LastChild,
    OnlyChild,
    Odd,
    Even,
    Empty,
    Placeholder,
    Before,
    After,
    Selection,
    Marker,
}

impl Pseudo {
    pub fn as_css(self) -> &'static str {
        match self {
            Pseudo::Hover => ":hover",
            Pseudo::Focus => ":focus",
            Pseudo::FocusWithin => ":focus-within",
            Pseudo::FocusVisible => ":focus-visible",
            Pseudo::Active => ":active",
            Pseudo::Visited => ":visited",
            Pseudo::Disabled => ":disabled",
            Pseudo::Enabled => ":enabled",
            Pseudo::Checked => ":checked",
            Pseudo::Required => ":required",
            Pseudo::Invalid => ":invalid",
            Pseudo::FirstChild => ":first-child",
            Pseudo::LastChild => ":last-child",
            Pseudo::OnlyChild => ":only-child",
            Pseudo::Odd => ":nth-child(odd)",
            Pseudo::Even => ":nth-child(even)",
            Pseudo::Empty => ":empty",
            Pseudo::Placeholder => "::placeholder",
            Pseudo::Before => "::before",
            Pseudo::After => "::after",
            Pseudo::Selection => "::selection",
            Pseudo::Marker => "::marker",
        }
    }

    pub fn is_element(self) -> bool {
        self.as_css().starts_with("::")
    }
}

impl fmt::Display for Pseudo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::px;

    #[test]
    fn breakpoint_queries() {
        assert_eq!(MediaQuery::breakpoint(Breakpoint::Md).to_string(), "(min-width: 48rem)");
        assert_eq!(
            MediaQuery::below(Breakpoint::Sm).to_string(),
            "(max-width: 39.9375rem)"
        );
    }

    #[test]
    fn combined_queries_are_joined_with_and() {
        let query = MediaQuery::min_width(px(768.0)).combine(&MediaQuery::dark());
        assert_eq!(
            query.to_string(),
            "(min-width: 768px) and (prefers-color-scheme: dark)"
        );
        assert!(query.is_dark());
    }

    #[test]
    fn media_types_lead() {
        let query = MediaQuery::dark().and(MediaCondition::Print);
        assert_eq!(query.to_string(), "print and (prefers-color-scheme: dark)");
    }

    #[test]
    fn duplicate_conditions_collapse() {
        let query = MediaQuery::dark().combine(&MediaQuery::dark());
        assert_eq!(query.conditions().len(), 1);
    }

    #[test]
    fn pseudo_kinds() {
        assert_eq!(Pseudo::Odd.to_string(), ":nth-child(odd)");
        assert!(Pseudo::Before.is_element());
        assert!(!Pseudo::Hover.is_element());
    }
}
