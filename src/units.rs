use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS length value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Zero,
    Auto,
    Px(f64),
    Rem(f64),
    Em(f64),
    Percent(f64),
    Vw(f64),
    Vh(f64),
}

pub fn px(value: f64) -> Length {
    Length::Px(value)
}

pub fn rem(value: f64) -> Length {
    Length::Rem(value)
}

pub fn em(value: f64) -> Length {
    Length::Em(value)
}

pub fn percent(value: f64) -> Length {
    Length::Percent(value)
}

pub fn vw(value: f64) -> Length {
    Length::Vw(value)
}

pub fn vh(value: f64) -> Length {
    Length::Vh(value)
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Zero => f.write_str("0"),
            Length::Auto => f.write_str("auto"),
            Length::Px(v) => write!(f, "{}px", format_number(*v)),
            Length::Rem(v) => write!(f, "{}rem", format_number(*v)),
            Length::Em(v) => write!(f, "{}em", format_number(*v)),
            Length::Percent(v) => write!(f, "{}%", format_number(*v)),
            Length::Vw(v) => write!(f, "{}vw", format_number(*v)),
            Length::Vh(v) => write!(f, "{}vh", format_number(*v)),
        }
    }
}

/// Formats a number the way CSS authors write it: `16`, `1.5`, `0.3333`.
///
/// NaN and infinities have no CSS spelling and render as `0`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let fixed = format!("{:.4}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(px(16.0).to_string(), "16px");
        assert_eq!(percent(100.0).to_string(), "100%");
        assert_eq!(px(-4.0).to_string(), "-4px");
    }

    #[test]
    fn fractions_are_trimmed() {
        assert_eq!(rem(1.5).to_string(), "1.5rem");
        assert_eq!(em(0.125).to_string(), "0.125em");
        assert_eq!(format_number(1.0 / 3.0), "0.3333");
    }

    #[test]
    fn non_finite_values_render_zero() {
        assert_eq!(px(f64::NAN).to_string(), "0px");
        assert_eq!(rem(f64::INFINITY).to_string(), "0rem");
        assert_eq!(format_number(f64::NEG_INFINITY), "0");
    }

    #[test]
    fn keywords() {
        assert_eq!(Length::Zero.to_string(), "0");
        assert_eq!(Length::Auto.to_string(), "auto");
    }
}
