//! `<input>` elements whose attributes depend on their type.
//!
//! Each [`InputType`] variant carries only the attributes that are valid
//! for that type, so a `multiple` flag on a date field cannot be expressed.

use crate::color::Color;
use crate::element::Element;
use crate::units::format_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar date, rendered as `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
            day: day.clamp(1, 31),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A wall-clock time, rendered as `HH:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
}

impl Time {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour.min(23),
            minute: minute.min(59),
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum InputType {
    Text {
        placeholder: Option<String>,
        max_length: Option<u32>,
    },
    Password {
        placeholder: Option<String>,
        min_length: Option<u32>,
    },
    Email {
        placeholder: Option<String>,
        multiple: bool,
    },
    Search {
        placeholder: Option<String>,
    },
    Url {
        placeholder: Option<String>,
    },
    Tel {
        pattern: Option<String>,
    },
    Number {
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
    Range {
        min: f64,
        max: f64,
        step: Option<f64>,
    },
    Date {
        min: Option<Date>,
        max: Option<Date>,
    },
    Time {
        min: Option<Time>,
        max: Option<Time>,
    },
    DateTimeLocal {
        min: Option<(Date, Time)>,
        max: Option<(Date, Time)>,
    },
    File {
        accept: Vec<String>,
        multiple: bool,
    },
    Checkbox {
        checked: bool,
    },
    Radio {
        checked: bool,
    },
    Color {
        value: Option<Color>,
    },
    Hidden {
        value: String,
    },
    Submit {
        label: Option<String>,
    },
}

impl InputType {
    pub fn type_name(&self) -> &'static str {
        match self {
            InputType::Text { .. } => "text",
            InputType::Password { .. } => "password",
            InputType::Email { .. } => "email",
            InputType::Search { .. } => "search",
            InputType::Url { .. } => "url",
            InputType::Tel { .. } => "tel",
            InputType::Number { .. } => "number",
            InputType::Range { .. } => "range",
            InputType::Date { .. } => "date",
            InputType::Time { .. } => "time",
            InputType::DateTimeLocal { .. } => "datetime-local",
            InputType::File { .. } => "file",
            InputType::Checkbox { .. } => "checkbox",
            InputType::Radio { .. } => "radio",
            InputType::Color { .. } => "color",
            InputType::Hidden { .. } => "hidden",
            InputType::Submit { .. } => "submit",
        }
    }

    fn apply(&self, el: Element) -> Element {
        match self {
            InputType::Text {
                placeholder,
                max_length,
            } => with_opt(
                with_opt(el, "placeholder", placeholder.clone()),
                "maxlength",
                max_length.map(|n| n.to_string()),
            ),
            InputType::Password {
                placeholder,
                min_length,
            } => with_opt(
                with_opt(el, "placeholder", placeholder.clone()),
                "minlength",
                min_length.map(|n| n.to_string()),
            ),
            InputType::Email {
                placeholder,
                multiple,
            } => with_opt(el, "placeholder", placeholder.clone()).flag_if("multiple", *multiple),
            InputType::Search { placeholder } | InputType::Url { placeholder } => {
                with_opt(el, "placeholder", placeholder.clone())
            }
            InputType::Tel { pattern } => with_opt(el, "pattern", pattern.clone()),
            InputType::Number { min, max, step } => {
                let el = with_opt(el, "min", min.map(format_number));
                let el = with_opt(el, "max", max.map(format_number));
                with_opt(el, "step", step.map(format_number))
            }
            InputType::Range { min, max, step } => with_opt(
                el.attr("min", format_number(*min))
                    .attr("max", format_number(*max)),
                "step",
                step.map(format_number),
            ),
            InputType::Date { min, max } => with_opt(
                with_opt(el, "min", min.map(|d| d.to_string())),
                "max",
                max.map(|d| d.to_string()),
            ),
            InputType::Time { min, max } => with_opt(
                with_opt(el, "min", min.map(|t| t.to_string())),
                "max",
                max.map(|t| t.to_string()),
            ),
            InputType::DateTimeLocal { min, max } => with_opt(
                with_opt(el, "min", min.map(|(d, t)| format!("{}T{}", d, t))),
                "max",
                max.map(|(d, t)| format!("{}T{}", d, t)),
            ),
            InputType::File { accept, multiple } => {
                let el = if accept.is_empty() {
                    el
                } else {
                    el.attr("accept", accept.join(","))
                };
                el.flag_if("multiple", *multiple)
            }
            InputType::Checkbox { checked } | InputType::Radio { checked } => {
                el.flag_if("checked", *checked)
            }
            InputType::Color { value } => with_opt(el, "value", value.and_then(color_input_value)),
            InputType::Hidden { value } => el.attr("value", value.clone()),
            InputType::Submit { label } => with_opt(el, "value", label.clone()),
        }
    }
}

fn with_opt(el: Element, name: &str, value: Option<String>) -> Element {
    match value {
        Some(v) => el.attr(name, v),
        None => el,
    }
}

/// Color inputs only accept `#rrggbb`.
fn color_input_value(color: Color) -> Option<String> {
    color
        .to_rgba()
        .map(|(r, g, b, _)| Color::Rgb(r, g, b).to_string())
}

/// Builds `<input type=... name=...>` with the attributes of `kind`.
pub fn input(name: &str, kind: InputType) -> Element {
    let el = Element::new("input")
        .attr("type", kind.type_name())
        .attr("name", name);
    kind.apply(el)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_input_bounds() {
        let el = input(
            "start",
            InputType::Date {
                min: Some(Date::new(2024, 1, 5)),
                max: None,
            },
        );
        assert_eq!(el.attribute("type"), Some("date"));
        assert_eq!(el.attribute("name"), Some("start"));
        assert_eq!(el.attribute("min"), Some("2024-01-05"));
        assert_eq!(el.attribute("max"), None);
    }

    #[test]
    fn file_input() {
        let el = input(
            "avatar",
            InputType::File {
                accept: vec!["image/png".into(), "image/jpeg".into()],
                multiple: true,
            },
        );
        assert_eq!(el.attribute("accept"), Some("image/png,image/jpeg"));
        assert_eq!(el.attribute("multiple"), Some(""));
    }

    #[test]
    fn datetime_local_format() {
        let el = input(
            "at",
            InputType::DateTimeLocal {
                min: Some((Date::new(2024, 12, 31), Time::new(9, 5))),
                max: None,
            },
        );
        assert_eq!(el.attribute("type"), Some("datetime-local"));
        assert_eq!(el.attribute("min"), Some("2024-12-31T09:05"));
    }

    #[test]
    fn color_input_uses_hex() {
        let el = input("tint", InputType::Color { value: Some(Color::RED) });
        assert_eq!(el.attribute("value"), Some("#ff0000"));
    }

    #[test]
    fn range_requires_bounds() {
        let el = input(
            "volume",
            InputType::Range {
                min: 0.0,
                max: 1.0,
                step: Some(0.1),
            },
        );
        assert_eq!(el.attribute("min"), Some("0"));
        assert_eq!(el.attribute("step"), Some("0.1"));
    }

    #[test]
    fn unchecked_checkbox_has_no_flag() {
        let el = input("agree", InputType::Checkbox { checked: false });
        assert_eq!(el.attribute("checked"), None);
    }
}
