use crate::error::{HtmlError, HtmlResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// How generated class names are spelled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassNaming {
    /// `{property}-{n}`, e.g. `padding-0`
    #[default]
    Property,
    /// `c{n}` with `n` in base 36
    Compact,
}

/// Render options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Indent the generated stylesheet. Markup is always written compactly
    /// since whitespace between inline elements is significant.
    pub pretty: bool,
    pub class_naming: ClassNaming,
    /// Prepended to every generated class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_prefix: Option<String>,
    /// Emit `<!doctype html>` before documents
    pub doctype: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            class_naming: ClassNaming::Property,
            class_prefix: None,
            doctype: true,
        }
    }
}

impl RenderConfig {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    /// Loads and validates a config from YAML, e.g.
    ///
    /// ```yaml
    /// pretty: true
    /// classNaming: compact
    /// classPrefix: nt-
    /// ```
    pub fn from_yaml(yaml: &str) -> HtmlResult<Self> {
        let config: RenderConfig = if yaml.trim().is_empty() {
            RenderConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> HtmlResult<()> {
        static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
        let prefix_regex =
            PREFIX_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_-]*$").unwrap());

        if let Some(prefix) = &self.class_prefix {
            if !prefix_regex.is_match(prefix) {
                return Err(HtmlError::InvalidConfig {
                    field: "classPrefix".to_string(),
                    reason: format!(
                        "'{}' must start with a letter or '_' and contain only letters, digits, '_' or '-'",
                        prefix
                    ),
                });
            }
        }
        Ok(())
    }
}
