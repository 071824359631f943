//! Inline translations
//!
//! A [`Translations`] value carries every locale's template for one message
//! right where it is used. Lookup walks the fallback chain and reports which
//! locale actually supplied the template.

use std::collections::BTreeMap;

/// Templates for one message, keyed by locale tag.
///
/// Locales are kept sorted so "first available" is deterministic.
///
/// ```
/// use inline_i18n_core::Translations;
///
/// let greeting = Translations::new()
///     .with("en", "Hello, {name}!")
///     .with("ko", "안녕하세요, {name}님!");
///
/// assert_eq!(greeting.get("ko"), Some("안녕하세요, {name}님!"));
/// assert_eq!(greeting.locales().collect::<Vec<_>>(), ["en", "ko"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    templates: BTreeMap<String, String>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two-locale shorthand, e.g. `Translations::pair("ko", "안녕", "en", "Hi")`.
    pub fn pair(
        first_locale: impl Into<String>,
        first: impl Into<String>,
        second_locale: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::new()
            .with(first_locale, first)
            .with(second_locale, second)
    }

    /// Add a template (builder style).
    pub fn with(mut self, locale: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(locale, template);
        self
    }

    /// Add or replace a template.
    pub fn insert(&mut self, locale: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(locale.into(), template.into());
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.templates.get(locale).map(String::as_str)
    }

    /// Locales with a template, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Pick the template for a fallback chain.
    ///
    /// The first chain locale with a template wins. When none has one, the
    /// first template in locale order stands in.
    pub fn resolve<'t>(&'t self, chain: &'t [String]) -> Resolution<'t> {
        let requested = chain.first().map(String::as_str).unwrap_or_default();

        for (i, locale) in chain.iter().enumerate() {
            if let Some((locale, template)) = self.templates.get_key_value(locale) {
                return if i == 0 {
                    Resolution::Exact(template)
                } else {
                    Resolution::Fallback {
                        requested,
                        used: locale,
                        template,
                    }
                };
            }
        }

        match self.templates.iter().next() {
            Some((locale, template)) => Resolution::Unmatched {
                requested,
                used: locale,
                template,
            },
            None => Resolution::Empty { requested },
        }
    }
}

impl<L, T> FromIterator<(L, T)> for Translations
where
    L: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        let mut translations = Self::new();
        for (locale, template) in iter {
            translations.insert(locale, template);
        }
        translations
    }
}

impl<L, T, const N: usize> From<[(L, T); N]> for Translations
where
    L: Into<String>,
    T: Into<String>,
{
    fn from(pairs: [(L, T); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Outcome of [`Translations::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'t> {
    /// The requested locale had a template
    Exact(&'t str),
    /// A later locale in the chain supplied the template
    Fallback {
        requested: &'t str,
        used: &'t str,
        template: &'t str,
    },
    /// Nothing in the chain matched; the first available template is used
    Unmatched {
        requested: &'t str,
        used: &'t str,
        template: &'t str,
    },
    /// There are no templates at all
    Empty { requested: &'t str },
}

impl<'t> Resolution<'t> {
    /// The template to render, if any.
    pub fn template(&self) -> Option<&'t str> {
        match *self {
            Resolution::Exact(template)
            | Resolution::Fallback { template, .. }
            | Resolution::Unmatched { template, .. } => Some(template),
            Resolution::Empty { .. } => None,
        }
    }

    /// The locale whose template stood in for the requested one.
    pub fn fallback_used(&self) -> Option<&'t str> {
        match *self {
            Resolution::Fallback { used, .. } | Resolution::Unmatched { used, .. } => Some(used),
            _ => None,
        }
    }
}
