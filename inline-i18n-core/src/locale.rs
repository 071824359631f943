//! BCP 47 locale tags
//!
//! Locales travel through the public API as plain strings (`"zh-TW"`). The
//! formatters parse them into [`Locale`] to pick separators, month names and
//! plural rules.

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed locale (language + optional script and region).
///
/// # Examples
///
/// ```
/// use inline_i18n_core::Locale;
///
/// let zh = Locale::parse("zh-Hant-TW").unwrap();
/// assert_eq!(zh.language, "zh");
/// assert_eq!(zh.script.as_deref(), Some("Hant"));
/// assert_eq!(zh.region.as_deref(), Some("TW"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// Language subtag, lower case ("en", "zh")
    pub language: String,
    /// Script subtag, title case ("Hans")
    pub script: Option<String>,
    /// Region subtag, upper case ("US") or UN M.49 digits ("419")
    pub region: Option<String>,
}

impl Locale {
    /// Create a new locale.
    pub fn new(language: impl Into<String>, region: Option<impl Into<String>>) -> Self {
        Self {
            language: language.into().to_ascii_lowercase(),
            script: None,
            region: region.map(|r| r.into().to_ascii_uppercase()),
        }
    }

    /// Parse a BCP 47 tag such as `en-US` or `zh-Hans-CN`.
    ///
    /// `_` is accepted as a separator. Variant and extension subtags are
    /// validated for shape and then ignored.
    pub fn parse(tag: &str) -> Result<Self> {
        let invalid = || I18nError::InvalidLocale(tag.to_string());
        let mut parts = tag.trim().split(['-', '_']);

        let language = parts.next().filter(|p| !p.is_empty()).ok_or_else(invalid)?;
        if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let mut script = None;
        let mut region = None;

        for part in parts {
            if part.is_empty()
                || part.len() > 8
                || !part.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(invalid());
            }

            let alpha = part.chars().all(|c| c.is_ascii_alphabetic());
            if part.len() == 4 && alpha && script.is_none() && region.is_none() {
                script = Some(title_case(part));
            } else if part.len() == 2 && alpha && region.is_none() {
                region = Some(part.to_ascii_uppercase());
            } else if part.len() == 3
                && part.chars().all(|c| c.is_ascii_digit())
                && region.is_none()
            {
                region = Some(part.to_string());
            }
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            script,
            region,
        })
    }

    /// Get the canonical tag (e.g., "en-US").
    pub fn tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(ref script) = self.script {
            tag.push('-');
            tag.push_str(script);
        }
        if let Some(ref region) = self.region {
            tag.push('-');
            tag.push_str(region);
        }
        tag
    }

    /// Get language-only locale (strips script and region).
    pub fn language_only(&self) -> Self {
        Self {
            language: self.language.clone(),
            script: None,
            region: None,
        }
    }

    /// English (no region)
    pub fn en() -> Self {
        Self::new("en", None::<&str>)
    }

    /// English (US)
    pub fn en_us() -> Self {
        Self::new("en", Some("US"))
    }

    /// English (GB)
    pub fn en_gb() -> Self {
        Self::new("en", Some("GB"))
    }

    /// German (Germany)
    pub fn de_de() -> Self {
        Self::new("de", Some("DE"))
    }

    /// French (France)
    pub fn fr_fr() -> Self {
        Self::new("fr", Some("FR"))
    }

    /// Japanese
    pub fn ja() -> Self {
        Self::new("ja", None::<&str>)
    }

    /// Korean (South Korea)
    pub fn ko_kr() -> Self {
        Self::new("ko", Some("KR"))
    }
}

fn title_case(s: &str) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if i == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en()
    }
}

/// Derive the parent of a BCP 47 tag by cutting at the first `-`.
///
/// # Example
///
/// ```
/// use inline_i18n_core::parent_locale;
///
/// assert_eq!(parent_locale("zh-TW"), Some("zh"));
/// assert_eq!(parent_locale("zh-Hant-TW"), Some("zh"));
/// assert_eq!(parent_locale("en"), None);
/// ```
pub fn parent_locale(locale: &str) -> Option<&str> {
    match locale.find('-') {
        Some(idx) if idx > 0 => Some(&locale[..idx]),
        _ => None,
    }
}
