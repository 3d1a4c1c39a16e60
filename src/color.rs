use crate::error::{HtmlError, HtmlResult};
use crate::units::format_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS color value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Color {
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
    Named(NamedColor),
    Transparent,
    CurrentColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Black,
    White,
    Gray,
    Silver,
    Red,
    Maroon,
    Orange,
    Yellow,
    Olive,
    Lime,
    Green,
    Teal,
    Aqua,
    Blue,
    Navy,
    Fuchsia,
    Purple,
}

const NAMED_COLORS: &[(NamedColor, &str, (u8, u8, u8))] = &[
    (NamedColor::Black, "black", (0, 0, 0)),
    (NamedColor::White, "white", (255, 255, 255)),
    (NamedColor::Gray, "gray", (128, 128, 128)),
    (NamedColor::Silver, "silver", (192, 192, 192)),
    (NamedColor::Red, "red", (255, 0, 0)),
    (NamedColor::Maroon, "maroon", (128, 0, 0)),
    (NamedColor::Orange, "orange", (255, 165, 0)),
    (NamedColor::Yellow, "yellow", (255, 255, 0)),
    (NamedColor::Olive, "olive", (128, 128, 0)),
    (NamedColor::Lime, "lime", (0, 255, 0)),
    (NamedColor::Green, "green", (0, 128, 0)),
    (NamedColor::Teal, "teal", (0, 128, 128)),
    (NamedColor::Aqua, "aqua", (0, 255, 255)),
    (NamedColor::Blue, "blue", (0, 0, 255)),
    (NamedColor::Navy, "navy", (0, 0, 128)),
    (NamedColor::Fuchsia, "fuchsia", (255, 0, 255)),
    (NamedColor::Purple, "purple", (128, 0, 128)),
];

impl NamedColor {
    pub fn name(self) -> &'static str {
        NAMED_COLORS
            .iter()
            .find(|(c, _, _)| *c == self)
            .map(|(_, name, _)| *name)
            .unwrap_or("black")
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        NAMED_COLORS
            .iter()
            .find(|(c, _, _)| *c == self)
            .map(|(_, _, rgb)| *rgb)
            .unwrap_or((0, 0, 0))
    }

    fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(_, n, _)| n.eq_ignore_ascii_case(name))
            .map(|(c, _, _)| *c)
    }
}

impl Color {
    pub const BLACK: Color = Color::Named(NamedColor::Black);
    pub const WHITE: Color = Color::Named(NamedColor::White);
    pub const GRAY: Color = Color::Named(NamedColor::Gray);
    pub const RED: Color = Color::Named(NamedColor::Red);
    pub const GREEN: Color = Color::Named(NamedColor::Green);
    pub const BLUE: Color = Color::Named(NamedColor::Blue);

    /// Builds a color from a `0xRRGGBB` literal.
    pub fn hex(value: u32) -> Self {
        Color::Rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Color::Rgba(r, g, b, alpha.clamp(0.0, 1.0))
    }

    /// Pairs this color with an explicit dark-mode value.
    pub fn with_dark(self, dark: Color) -> DarkModeColor {
        DarkModeColor {
            light: self,
            dark: Some(dark),
        }
    }

    /// Parses a color token from configuration: `#rgb`, `#rrggbb`, a named
    /// color, `transparent` or `currentColor`.
    pub fn parse(value: &str) -> HtmlResult<Self> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Color::Transparent);
        }
        if trimmed.eq_ignore_ascii_case("currentcolor") {
            return Ok(Color::CurrentColor);
        }
        if let Some(named) = NamedColor::from_name(trimmed) {
            return Ok(Color::Named(named));
        }

        let hex = trimmed.strip_prefix('#').ok_or_else(|| HtmlError::InvalidColor {
            value: value.to_string(),
            reason: "expected '#rgb', '#rrggbb' or a color name".to_string(),
        })?;
        let invalid = || HtmlError::InvalidColor {
            value: value.to_string(),
            reason: "invalid hex digits".to_string(),
        };
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        match hex.len() {
            3 => {
                let digits: Vec<u8> = hex
                    .chars()
                    .map(|c| c.to_digit(16).map(|d| (d * 17) as u8))
                    .collect::<Option<_>>()
                    .ok_or_else(invalid)?;
                Ok(Color::Rgb(digits[0], digits[1], digits[2]))
            }
            6 => {
                let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
                Ok(Color::hex(value))
            }
            _ => Err(HtmlError::InvalidColor {
                value: value.to_string(),
                reason: "hex colors must have 3 or 6 digits".to_string(),
            }),
        }
    }

    /// Channel values for colors that have them.
    pub fn to_rgba(self) -> Option<(u8, u8, u8, f64)> {
        match self {
            Color::Rgb(r, g, b) => Some((r, g, b, 1.0)),
            Color::Rgba(r, g, b, a) => Some((r, g, b, a)),
            Color::Named(named) => {
                let (r, g, b) = named.rgb();
                Some((r, g, b, 1.0))
            }
            Color::Transparent | Color::CurrentColor => None,
        }
    }

    /// Compares colors by what they paint rather than how they are spelled,
    /// so `red` and `#ff0000` are the same.
    pub fn same_as(self, other: Color) -> bool {
        match (self.to_rgba(), other.to_rgba()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self == other,
            _ => false,
        }
    }

    /// Derives a dark-mode counterpart by mirroring HSL lightness.
    pub fn derive_dark(self) -> Color {
        let Some((r, g, b, a)) = self.to_rgba() else {
            return self;
        };
        let (h, s, l) = rgb_to_hsl(r, g, b);
        let (r, g, b) = hsl_to_rgb(h, s, 1.0 - l);
        if a < 1.0 {
            Color::Rgba(r, g, b, a)
        } else {
            Color::Rgb(r, g, b)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, format_number(*a)),
            Color::Named(named) => f.write_str(named.name()),
            Color::Transparent => f.write_str("transparent"),
            Color::CurrentColor => f.write_str("currentColor"),
        }
    }
}

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if max == min {
        return (0.0, 0.0, l);
    }
    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    (h / 6.0, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let to_byte = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    if s == 0.0 {
        let v = to_byte(l);
        return (v, v, v);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_byte(hue_to_channel(p, q, h)),
        to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// A color with an optional dark-mode value.
///
/// When `dark` is omitted it is derived from `light` with [`Color::derive_dark`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DarkModeColor {
    pub light: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<Color>,
}

impl DarkModeColor {
    pub fn new(light: Color, dark: Option<Color>) -> Self {
        Self { light, dark }
    }

    /// A color that stays the same in both schemes.
    pub fn fixed(color: Color) -> Self {
        Self {
            light: color,
            dark: Some(color),
        }
    }

    pub fn resolved_dark(&self) -> Color {
        self.dark.unwrap_or_else(|| self.light.derive_dark())
    }

    /// True when the dark value would paint the same as the light one.
    pub fn is_uniform(&self) -> bool {
        self.light.same_as(self.resolved_dark())
    }
}

impl From<Color> for DarkModeColor {
    fn from(light: Color) -> Self {
        Self { light, dark: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(Color::hex(0x4a90e2).to_string(), "#4a90e2");
        assert_eq!(Color::RED.to_string(), "red");
        assert_eq!(Color::rgba(0, 0, 0, 0.5).to_string(), "rgba(0,0,0,0.5)");
        assert_eq!(Color::CurrentColor.to_string(), "currentColor");
    }

    #[test]
    fn parse_tokens() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::Rgb(255, 255, 255));
        assert_eq!(Color::parse("#4A90E2").unwrap(), Color::hex(0x4a90e2));
        assert_eq!(Color::parse("Navy").unwrap(), Color::Named(NamedColor::Navy));
        assert_eq!(Color::parse("transparent").unwrap(), Color::Transparent);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(Color::parse("#ggg"), Err(HtmlError::InvalidColor { .. })));
        assert!(matches!(Color::parse("#12345"), Err(HtmlError::InvalidColor { .. })));
        assert!(matches!(Color::parse("nope"), Err(HtmlError::InvalidColor { .. })));
    }

    #[test]
    fn derive_dark_mirrors_lightness() {
        assert_eq!(Color::WHITE.derive_dark(), Color::Rgb(0, 0, 0));
        assert_eq!(Color::BLACK.derive_dark(), Color::Rgb(255, 255, 255));
        assert_eq!(Color::hex(0x333333).derive_dark(), Color::hex(0xcccccc));
    }

    #[test]
    fn derive_dark_keeps_alpha() {
        match Color::rgba(255, 255, 255, 0.25).derive_dark() {
            Color::Rgba(0, 0, 0, a) => assert_eq!(a, 0.25),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn keywords_derive_to_themselves() {
        assert_eq!(Color::Transparent.derive_dark(), Color::Transparent);
        assert_eq!(Color::CurrentColor.derive_dark(), Color::CurrentColor);
    }

    #[test]
    fn uniform_pairs() {
        // Pure red sits at 50% lightness, so mirroring leaves it unchanged.
        assert!(DarkModeColor::from(Color::RED).is_uniform());
        assert!(DarkModeColor::fixed(Color::hex(0x123456)).is_uniform());
        assert!(!DarkModeColor::from(Color::WHITE).is_uniform());
        assert!(Color::RED.same_as(Color::hex(0xff0000)));
    }
}
