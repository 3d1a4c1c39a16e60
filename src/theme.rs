use crate::color::{Color, DarkModeColor};
use crate::error::{HtmlError, HtmlResult};
use crate::units::{format_number, Length};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A theme color token: either a single value or a light/dark pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Single(String),
    Pair {
        light: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dark: Option<String>,
    },
}

impl ThemeColor {
    fn to_color(&self) -> HtmlResult<DarkModeColor> {
        match self {
            ThemeColor::Single(value) => Ok(Color::parse(value)?.into()),
            ThemeColor::Pair { light, dark } => Ok(DarkModeColor::new(
                Color::parse(light)?,
                dark.as_deref().map(Color::parse).transpose()?,
            )),
        }
    }
}

/// Theme configuration with reusable design tokens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<HashMap<String, ThemeColor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<HashMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "borderRadius")]
    pub border_radius: Option<HashMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<HashMap<String, f64>>,
}

impl Theme {
    /// Create a new empty theme
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a theme from YAML, checking every color token parses.
    ///
    /// ```yaml
    /// colors:
    ///   primary: "#4a90e2"
    ///   surface: { light: "#ffffff", dark: "#111111" }
    /// spacing:
    ///   md: 16
    /// ```
    pub fn from_yaml(yaml: &str) -> HtmlResult<Self> {
        let theme: Theme = serde_yaml::from_str(yaml)?;
        if let Some(colors) = &theme.colors {
            for token in colors.values() {
                token.to_color()?;
            }
        }
        Ok(theme)
    }

    pub fn color(&self, name: &str) -> HtmlResult<DarkModeColor> {
        self.colors
            .as_ref()
            .and_then(|c| c.get(name))
            .ok_or_else(|| not_found("colors", name))?
            .to_color()
    }

    /// Spacing token in pixels
    pub fn spacing(&self, name: &str) -> HtmlResult<Length> {
        lookup(&self.spacing, "spacing", name).map(Length::Px)
    }

    pub fn radius(&self, name: &str) -> HtmlResult<Length> {
        lookup(&self.border_radius, "borderRadius", name).map(Length::Px)
    }

    pub fn font_size(&self, name: &str) -> HtmlResult<Length> {
        lookup(&self.typography, "typography", name).map(Length::Px)
    }

    /// Resolve a theme variable reference (e.g., "$theme.colors.primary")
    pub fn resolve(&self, reference: &str) -> Option<String> {
        let (category, key) = split_reference(reference)?;

        match category {
            "colors" => self.color(key).ok().map(|c| c.light.to_string()),
            "spacing" => self.spacing.as_ref()?.get(key).map(|v| format_number(*v)),
            "borderRadius" => self
                .border_radius
                .as_ref()?
                .get(key)
                .map(|v| format_number(*v)),
            "typography" => self.typography.as_ref()?.get(key).map(|v| format_number(*v)),
            _ => None,
        }
    }

    /// Resolve a color reference to its light/dark pair
    pub fn resolve_color(&self, reference: &str) -> HtmlResult<DarkModeColor> {
        match split_reference(reference) {
            Some(("colors", key)) => self.color(key),
            _ => Err(HtmlError::InvalidThemeReference {
                reference: reference.to_string(),
            }),
        }
    }

    /// Check if a string is a theme variable reference
    pub fn is_theme_reference(value: &str) -> bool {
        value.starts_with("$theme.")
    }
}

fn split_reference(reference: &str) -> Option<(&str, &str)> {
    let path = reference.strip_prefix("$theme.")?;
    let mut parts = path.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(category), Some(key), None) if !key.is_empty() => Some((category, key)),
        _ => None,
    }
}

fn lookup(map: &Option<HashMap<String, f64>>, category: &str, name: &str) -> HtmlResult<f64> {
    map.as_ref()
        .and_then(|m| m.get(name))
        .copied()
        .ok_or_else(|| not_found(category, name))
}

fn not_found(category: &str, name: &str) -> HtmlError {
    HtmlError::ThemeVariableNotFound {
        variable: format!("{}.{}", category, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::px;

    const THEME_YAML: &str = r##"
colors:
  primary: "#4a90e2"
  surface:
    light: "#ffffff"
    dark: "#111111"
spacing:
  small: 8
  medium: 16
borderRadius:
  card: 6
"##;

    #[test]
    fn test_theme_resolve_colors() {
        let theme = Theme::from_yaml(THEME_YAML).unwrap();
        assert_eq!(
            theme.resolve("$theme.colors.primary"),
            Some("#4a90e2".to_string())
        );
        assert_eq!(theme.resolve("$theme.colors.unknown"), None);
    }

    #[test]
    fn test_theme_resolve_spacing() {
        let theme = Theme::from_yaml(THEME_YAML).unwrap();
        assert_eq!(theme.resolve("$theme.spacing.small"), Some("8".to_string()));
        assert_eq!(theme.spacing("medium").unwrap(), px(16.0));
        assert_eq!(theme.radius("card").unwrap(), px(6.0));
    }

    #[test]
    fn test_color_pairs() {
        let theme = Theme::from_yaml(THEME_YAML).unwrap();
        let surface = theme.resolve_color("$theme.colors.surface").unwrap();
        assert_eq!(surface.light, Color::hex(0xffffff));
        assert_eq!(surface.dark, Some(Color::hex(0x111111)));
        assert_eq!(theme.color("primary").unwrap().dark, None);
    }

    #[test]
    fn test_missing_tokens() {
        let theme = Theme::new();
        assert_eq!(
            theme.spacing("huge"),
            Err(HtmlError::ThemeVariableNotFound {
                variable: "spacing.huge".into()
            })
        );
        assert!(matches!(
            theme.resolve_color("$theme.spacing.small"),
            Err(HtmlError::InvalidThemeReference { .. })
        ));
    }

    #[test]
    fn test_invalid_color_token_rejected() {
        let err = Theme::from_yaml("colors:\n  bad: \"#zzz\"").unwrap_err();
        assert!(matches!(err, HtmlError::InvalidColor { .. }));
    }

    #[test]
    fn test_is_theme_reference() {
        assert!(Theme::is_theme_reference("$theme.colors.primary"));
        assert!(!Theme::is_theme_reference("#4a90e2"));
        assert_eq!(Theme::new().resolve("$theme.colors"), None);
    }
}
