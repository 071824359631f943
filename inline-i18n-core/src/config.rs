//! Engine configuration

use crate::missing::{DebugFormatters, MissingVarHandler};
use crate::{I18nError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Default number of parsed templates kept in the parse cache.
pub const DEFAULT_PARSE_CACHE_SIZE: usize = 500;

/// Details of a translation that was not available in the requested locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationWarning {
    /// Locale the caller asked for
    pub requested_locale: String,
    /// Locales that had a template
    pub available_locales: Vec<String>,
    /// Locale whose template was rendered instead, if any
    pub fallback_used: Option<String>,
}

impl fmt::Display for TranslationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Missing translation for locale \"{}\"",
            self.requested_locale
        )?;
        write!(f, " | Available: [{}]", self.available_locales.join(", "))?;
        if let Some(ref used) = self.fallback_used {
            write!(f, " | Using fallback: \"{}\"", used)?;
        }
        Ok(())
    }
}

/// Handler for missing-translation warnings.
pub type WarningHandler = Arc<dyn Fn(&TranslationWarning) + Send + Sync>;

/// Interpolation and fallback configuration.
///
/// The data fields can be loaded from JSON (camelCase keys); handlers and
/// debug formatters are set in code.
///
/// # Example
///
/// ```
/// use inline_i18n_core::I18nConfig;
///
/// let config = I18nConfig::new()
///     .with_fallback_locale("en")
///     .with_fallback_chain("pt-BR", ["pt", "es", "en"])
///     .with_parse_cache_size(100);
///
/// assert_eq!(config.fallback_chain["pt-BR"], vec!["pt", "es", "en"]);
/// ```
#[derive(Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct I18nConfig {
    /// Locale used when a caller passes an empty locale tag
    pub default_locale: String,

    /// Final locale appended to every derived fallback chain ("" disables it)
    pub fallback_locale: String,

    /// Derive parent locales (`zh-TW` -> `zh`) when building chains
    pub auto_parent_locale: bool,

    /// Per-locale chains that replace auto derivation
    pub fallback_chain: HashMap<String, Vec<String>>,

    /// Parse cache capacity (0 disables caching)
    pub parse_cache_size: usize,

    /// Prefix rendered translations with fallback/missing markers
    pub debug_mode: bool,

    /// Report translations that were missing in the requested locale
    pub warn_on_missing: bool,

    /// Custom text for unresolved variables
    #[serde(skip)]
    pub missing_var_handler: Option<MissingVarHandler>,

    /// Receives missing-translation warnings instead of the log
    #[serde(skip)]
    pub on_missing_translation: Option<WarningHandler>,

    /// Debug-mode prefix formatters
    #[serde(skip)]
    pub debug_formatters: DebugFormatters,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            fallback_locale: "en".to_string(),
            auto_parent_locale: true,
            fallback_chain: HashMap::new(),
            parse_cache_size: DEFAULT_PARSE_CACHE_SIZE,
            debug_mode: false,
            warn_on_missing: true,
            missing_var_handler: None,
            on_missing_translation: None,
            debug_formatters: DebugFormatters::default(),
        }
    }
}

impl fmt::Debug for I18nConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18nConfig")
            .field("default_locale", &self.default_locale)
            .field("fallback_locale", &self.fallback_locale)
            .field("auto_parent_locale", &self.auto_parent_locale)
            .field("fallback_chain", &self.fallback_chain)
            .field("parse_cache_size", &self.parse_cache_size)
            .field("debug_mode", &self.debug_mode)
            .field("warn_on_missing", &self.warn_on_missing)
            .field("missing_var_handler", &self.missing_var_handler.is_some())
            .field("on_missing_translation", &self.on_missing_translation.is_some())
            .finish()
    }
}

impl I18nConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON.
    ///
    /// ```
    /// use inline_i18n_core::I18nConfig;
    ///
    /// let config = I18nConfig::from_json(r#"{
    ///     "fallbackLocale": "ko",
    ///     "autoParentLocale": false,
    ///     "parseCacheSize": 0
    /// }"#).unwrap();
    ///
    /// assert_eq!(config.fallback_locale, "ko");
    /// assert!(!config.auto_parent_locale);
    /// assert_eq!(config.parse_cache_size, 0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject an empty default locale and chains that contain empty tags.
    pub fn validate(&self) -> Result<()> {
        if self.default_locale.is_empty() {
            return Err(I18nError::Config("default locale is empty".to_string()));
        }
        for (locale, chain) in &self.fallback_chain {
            if locale.is_empty() || chain.iter().any(|l| l.is_empty()) {
                return Err(I18nError::Config(format!(
                    "fallback chain for '{}' contains an empty locale",
                    locale
                )));
            }
        }
        Ok(())
    }

    /// Set the locale used for empty locale tags.
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Set the final fallback locale.
    pub fn with_fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = locale.into();
        self
    }

    /// Enable/disable parent locale derivation.
    pub fn with_auto_parent_locale(mut self, enable: bool) -> Self {
        self.auto_parent_locale = enable;
        self
    }

    /// Set a custom chain for one locale.
    pub fn with_fallback_chain<I, S>(mut self, locale: impl Into<String>, chain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_chain
            .insert(locale.into(), chain.into_iter().map(Into::into).collect());
        self
    }

    /// Set the parse cache capacity.
    pub fn with_parse_cache_size(mut self, size: usize) -> Self {
        self.parse_cache_size = size;
        self
    }

    /// Enable/disable debug prefixes.
    pub fn with_debug_mode(mut self, enable: bool) -> Self {
        self.debug_mode = enable;
        self
    }

    /// Enable/disable missing-translation warnings.
    pub fn with_warn_on_missing(mut self, enable: bool) -> Self {
        self.warn_on_missing = enable;
        self
    }

    /// Set the missing-variable handler.
    pub fn with_missing_var_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.missing_var_handler = Some(Arc::new(handler));
        self
    }

    /// Set the missing-translation handler.
    pub fn with_on_missing_translation<F>(mut self, handler: F) -> Self
    where
        F: Fn(&TranslationWarning) + Send + Sync + 'static,
    {
        self.on_missing_translation = Some(Arc::new(handler));
        self
    }

    /// Set the debug prefix formatters.
    pub fn with_debug_formatters(mut self, formatters: DebugFormatters) -> Self {
        self.debug_formatters = formatters;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = I18nConfig::default();

        assert_eq!(config.default_locale, "en");
        assert_eq!(config.fallback_locale, "en");
        assert!(config.auto_parent_locale);
        assert!(config.fallback_chain.is_empty());
        assert_eq!(config.parse_cache_size, 500);
        assert!(!config.debug_mode);
        assert!(config.missing_var_handler.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = I18nConfig::new()
            .with_fallback_locale("ja")
            .with_auto_parent_locale(false)
            .with_debug_mode(true)
            .with_missing_var_handler(|name, _| format!("[{}]", name));

        assert_eq!(config.fallback_locale, "ja");
        assert!(!config.auto_parent_locale);
        assert!(config.debug_mode);
        let handler = config.missing_var_handler.unwrap();
        assert_eq!(handler("x", "en"), "[x]");
    }

    #[test]
    fn test_from_json_chain() {
        let config = I18nConfig::from_json(
            r#"{ "fallbackChain": { "pt-BR": ["pt", "es"] }, "debugMode": true }"#,
        )
        .unwrap();

        assert_eq!(config.fallback_chain["pt-BR"], vec!["pt", "es"]);
        assert!(config.debug_mode);
        assert_eq!(config.fallback_locale, "en");
    }

    #[test]
    fn test_from_json_rejects_empty_locale() {
        let err = I18nConfig::from_json(r#"{ "fallbackChain": { "pt-BR": [""] } }"#);
        assert!(matches!(err, Err(I18nError::Config(_))));
    }

    #[test]
    fn test_from_json_rejects_empty_default_locale() {
        let err = I18nConfig::from_json(r#"{ "defaultLocale": "" }"#);
        assert!(matches!(err, Err(I18nError::Config(_))));
    }

    #[test]
    fn test_from_json_rejects_bad_types() {
        let err = I18nConfig::from_json(r#"{ "parseCacheSize": -1 }"#);
        assert!(matches!(err, Err(I18nError::Json(_))));
    }

    #[test]
    fn test_warning_display() {
        let warning = TranslationWarning {
            requested_locale: "ja".to_string(),
            available_locales: vec!["en".to_string(), "ko".to_string()],
            fallback_used: Some("en".to_string()),
        };
        assert_eq!(
            warning.to_string(),
            "Missing translation for locale \"ja\" | Available: [en, ko] | Using fallback: \"en\""
        );

        let unmatched = TranslationWarning {
            requested_locale: "fr".to_string(),
            available_locales: vec!["ko".to_string()],
            fallback_used: None,
        };
        assert_eq!(
            unmatched.to_string(),
            "Missing translation for locale \"fr\" | Available: [ko]"
        );
    }
}
