use thiserror::Error;

pub type HtmlResult<T> = Result<T, HtmlError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HtmlError {
    #[error("Invalid tag '{tag}': tag names must start with a letter and contain only letters, digits or '-'")]
    InvalidTag { tag: String },

    #[error("Invalid attribute '{name}' on <{tag}>: {reason}")]
    InvalidAttribute {
        tag: String,
        name: String,
        reason: String,
    },

    #[error("Invalid selector target '{selector}' on <{tag}>: {reason}")]
    InvalidSelector {
        tag: String,
        selector: String,
        reason: String,
    },

    #[error("Invalid style property '{property}': {reason}")]
    InvalidProperty { property: String, reason: String },

    #[error("Invalid color value '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("Void element <{tag}> cannot have children")]
    VoidElementChildren { tag: String },

    #[error("Maximum nesting depth ({max_depth}) exceeded")]
    MaxNestingDepthExceeded { max_depth: usize },

    #[error("Document head is missing required field 'title'")]
    MissingTitle,

    #[error("Invalid font family name '{family}': must be a non-empty string")]
    InvalidFontFamily { family: String },

    #[error("Theme variable '{variable}' not found")]
    ThemeVariableNotFound { variable: String },

    #[error("Invalid theme variable reference: {reference}")]
    InvalidThemeReference { reference: String },

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<serde_yaml::Error> for HtmlError {
    fn from(err: serde_yaml::Error) -> Self {
        HtmlError::DeserializationError(err.to_string())
    }
}
