//! Error types for i18n operations

use crate::parser::ParseError;
use crate::value::ConversionError;
use thiserror::Error;

/// Errors that can occur during i18n operations.
///
/// Rendering itself degrades to placeholder text instead of failing; these
/// errors surface from registration, configuration, and the `try_*`
/// rendering entry points.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Invalid locale string
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Formatter name collides with a built-in ICU argument type
    #[error("Formatter name '{0}' is reserved")]
    ReservedFormatterName(String),

    /// Formatter name is not a plain identifier
    #[error("Invalid formatter name: '{0}'")]
    InvalidFormatterName(String),

    /// Template is not valid ICU message syntax
    #[error("Failed to parse message: {0}")]
    Parse(#[from] ParseError),

    /// A variable could not be coerced to the type an element needs
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Format error
    #[error("Format error: {0}")]
    Format(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
