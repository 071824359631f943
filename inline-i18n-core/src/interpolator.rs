//! Interpolation dispatcher
//!
//! [`Interpolator`] owns a configuration, a custom formatter registry and a
//! parse cache, and turns `(template, vars, locale)` into a string:
//!
//! 1. Templates with only `{name}` placeholders are substituted directly.
//! 2. Otherwise plural shorthand is expanded, the template is parsed (through
//!    the cache) and the message tree is evaluated.

use crate::ast::Message;
use crate::cache::ParseCache;
use crate::config::{I18nConfig, TranslationWarning};
use crate::eval::{evaluate_message, EvalContext};
use crate::fallback;
use crate::formatter::{CustomFormatter, FormatterRegistry, FormatterSet};
use crate::missing::{DebugPrefix, MissingVarPolicy};
use crate::parser::{self, ExtensionSyntax};
use crate::preprocess::{
    expand_plural_shorthand, has_icu_pattern, has_plural_shorthand, has_quoted_section,
    SIMPLE_ARGUMENT,
};
use crate::translate::{Resolution, Translations};
use crate::value::{Value, Vars};
use crate::Result;
use chrono::{DateTime, Utc};
use inline_i18n_log::warn;
use parking_lot::RwLock;
use regex::Captures;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// ICU message interpolation engine.
///
/// Cheap to share: all methods take `&self`.
///
/// ```
/// use inline_i18n_core::{vars, Interpolator};
///
/// let i18n = Interpolator::new();
/// let template = "{count, plural, =0 {No items} one {# item} other {# items}}";
///
/// assert_eq!(i18n.render(template, &vars! { "count" => 0 }, "en"), "No items");
/// assert_eq!(i18n.render(template, &vars! { "count" => 5 }, "en"), "5 items");
/// assert_eq!(i18n.render("Hello {name}", &vars! { "name" => "Alice" }, "en"), "Hello Alice");
/// ```
pub struct Interpolator {
    config: RwLock<I18nConfig>,
    formatters: FormatterRegistry,
    cache: ParseCache,
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpolator {
    /// Create an interpolator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(I18nConfig::default())
    }

    /// Create an interpolator with `config`.
    pub fn with_config(config: I18nConfig) -> Self {
        let cache = ParseCache::new(config.parse_cache_size);
        Self {
            config: RwLock::new(config),
            formatters: FormatterRegistry::new(),
            cache,
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Update the configuration in place.
    ///
    /// ```
    /// use inline_i18n_core::Interpolator;
    ///
    /// let i18n = Interpolator::new();
    /// i18n.configure(|config| config.fallback_locale = "ko".into());
    /// assert_eq!(i18n.build_fallback_chain("ja"), ["ja", "ko"]);
    /// ```
    pub fn configure<F>(&self, update: F)
    where
        F: FnOnce(&mut I18nConfig),
    {
        let cache_size = {
            let mut config = self.config.write();
            update(&mut config);
            config.parse_cache_size
        };
        self.cache.resize(cache_size);
    }

    /// Replace the whole configuration.
    pub fn set_config(&self, config: I18nConfig) {
        self.configure(|current| *current = config);
    }

    /// A copy of the current configuration.
    pub fn config(&self) -> I18nConfig {
        self.config.read().clone()
    }

    /// Restore the default configuration.
    pub fn reset_config(&self) {
        self.set_config(I18nConfig::default());
    }

    /// Fallback chain for `locale` under the current configuration.
    pub fn build_fallback_chain(&self, locale: &str) -> Vec<String> {
        fallback::build_fallback_chain(locale, &self.config.read())
    }

    // ========================================================================
    // Custom formatters
    // ========================================================================

    /// Register a custom formatter usable as `{value, name}` or
    /// `{value, name, style}`.
    ///
    /// Built-in type names and non-identifiers are rejected and leave the
    /// registry unchanged.
    ///
    /// ```
    /// use inline_i18n_core::{vars, Interpolator};
    ///
    /// let i18n = Interpolator::new();
    /// i18n.register_formatter("upper", |value, _locale, _style| {
    ///     value.to_display_string().to_uppercase()
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(i18n.render("Hi {name, upper}", &vars! { "name" => "bob" }, "en"), "Hi BOB");
    /// assert!(i18n.register_formatter("plural", |v, _, _| v.to_string()).is_err());
    /// ```
    pub fn register_formatter<F>(&self, name: &str, formatter: F) -> Result<()>
    where
        F: Fn(&Value, &str, Option<&str>) -> String + Send + Sync + 'static,
    {
        self.register_formatter_arc(name, Arc::new(formatter))
    }

    /// Register a shared formatter.
    pub fn register_formatter_arc(&self, name: &str, formatter: Arc<dyn CustomFormatter>) -> Result<()> {
        self.formatters.register_arc(name, formatter)?;
        self.cache.clear();
        Ok(())
    }

    /// Remove a custom formatter. Returns whether it was registered.
    pub fn unregister_formatter(&self, name: &str) -> bool {
        let removed = self.formatters.unregister(name);
        if removed {
            self.cache.clear();
        }
        removed
    }

    /// Remove every custom formatter.
    pub fn clear_formatters(&self) {
        self.formatters.clear();
        self.cache.clear();
    }

    /// Registered formatter names, sorted.
    pub fn formatter_names(&self) -> Vec<String> {
        self.formatters.names()
    }

    /// Whether `template` uses a registered custom formatter.
    pub fn has_custom_formatter(&self, template: &str) -> bool {
        self.formatters.snapshot().matches(template)
    }

    // ========================================================================
    // Parse cache
    // ========================================================================

    /// Drop every cached parse.
    pub fn clear_parse_cache(&self) {
        self.cache.clear();
    }

    /// Number of cached parses.
    pub fn parse_cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn parse_cache(&self) -> &ParseCache {
        &self.cache
    }

    /// Parse `template` (after shorthand expansion) with the current
    /// formatter names.
    pub fn parse(&self, template: &str) -> Result<Arc<Message>> {
        let formatters = self.formatters.snapshot();
        let expanded = expand_plural_shorthand(template);
        self.parse_cached(&expanded, &formatters)
    }

    fn parse_cached(&self, template: &str, formatters: &Arc<FormatterSet>) -> Result<Arc<Message>> {
        if let Some(message) = self.cache.get(template) {
            return Ok(message);
        }

        let message = Arc::new(parser::parse(template, ExtensionSyntax::new(formatters.as_map()))?);

        // registry changes swap the set before clearing the cache, so a
        // check made under the cache lock cannot miss one
        self.cache.insert_if(template, Arc::clone(&message), || {
            Arc::ptr_eq(formatters, &self.formatters.snapshot())
        });
        Ok(message)
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render `template`.
    ///
    /// Never fails: unresolved variables go through the missing-variable
    /// policy, and a template that does not parse is logged and returned
    /// unchanged.
    pub fn render(&self, template: &str, vars: &Vars, locale: &str) -> String {
        self.render_at(template, vars, locale, Utc::now())
    }

    /// Render with an explicit "now" for relative time elements.
    pub fn render_at(&self, template: &str, vars: &Vars, locale: &str, now: DateTime<Utc>) -> String {
        match self.try_render_at(template, vars, locale, now) {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    target: "inline_i18n::interpolator",
                    "failed to render template {:?}: {}",
                    template,
                    err
                );
                template.to_string()
            }
        }
    }

    /// Render `template`, surfacing grammar errors.
    ///
    /// ```
    /// use inline_i18n_core::{vars, I18nError, Interpolator};
    ///
    /// let i18n = Interpolator::new();
    /// let err = i18n.try_render("{count, plural, one {x}", &vars! {}, "en").unwrap_err();
    /// assert!(matches!(err, I18nError::Parse(_)));
    /// ```
    pub fn try_render(&self, template: &str, vars: &Vars, locale: &str) -> Result<String> {
        self.try_render_at(template, vars, locale, Utc::now())
    }

    /// [`try_render`](Self::try_render) with an explicit "now".
    pub fn try_render_at(
        &self,
        template: &str,
        vars: &Vars,
        locale: &str,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let (handler, default_locale) = {
            let config = self.config.read();
            (config.missing_var_handler.clone(), config.default_locale.clone())
        };
        let locale = if locale.is_empty() {
            default_locale.as_str()
        } else {
            locale
        };
        let policy = MissingVarPolicy::new(handler.as_ref());
        let formatters = self.formatters.snapshot();

        if !has_icu_pattern(template)
            && !formatters.matches(template)
            && !has_plural_shorthand(template)
            && !has_quoted_section(template)
        {
            return Ok(substitute_arguments(template, vars, locale, policy).into_owned());
        }

        let expanded = expand_plural_shorthand(template);
        let message = self.parse_cached(&expanded, &formatters)?;
        let ctx = EvalContext::new(vars, locale, policy, &formatters, now);
        Ok(evaluate_message(&message, &ctx))
    }

    // ========================================================================
    // Inline translations
    // ========================================================================

    /// Pick the template for `locale` along its fallback chain and render it.
    ///
    /// ```
    /// use inline_i18n_core::{vars, Interpolator, Translations};
    ///
    /// let i18n = Interpolator::new();
    /// let greeting = Translations::pair("ko", "안녕, {name}", "en", "Hi, {name}");
    ///
    /// assert_eq!(i18n.translate(&greeting, &vars! { "name" => "Mina" }, "ko"), "안녕, Mina");
    /// assert_eq!(i18n.translate(&greeting, &vars! { "name" => "Sam" }, "en-GB"), "Hi, Sam");
    /// ```
    pub fn translate(&self, translations: &Translations, vars: &Vars, locale: &str) -> String {
        self.translate_at(translations, vars, locale, Utc::now())
    }

    /// [`translate`](Self::translate) with an explicit "now".
    pub fn translate_at(
        &self,
        translations: &Translations,
        vars: &Vars,
        locale: &str,
        now: DateTime<Utc>,
    ) -> String {
        let config = self.config();
        let locale = if locale.is_empty() {
            config.default_locale.as_str()
        } else {
            locale
        };

        let chain = fallback::build_fallback_chain(locale, &config);
        let resolution = translations.resolve(&chain);

        if !matches!(resolution, Resolution::Exact(_)) {
            self.report_missing(translations, &resolution, locale, &config);
        }

        let rendered = resolution
            .template()
            .map(|template| self.render_at(template, vars, locale, now))
            .unwrap_or_default();

        if !config.debug_mode {
            return rendered;
        }
        let prefix = match resolution {
            Resolution::Exact(_) => return rendered,
            Resolution::Fallback { requested, used, .. } => DebugPrefix::Fallback { requested, used },
            Resolution::Unmatched { requested, .. } | Resolution::Empty { requested } => {
                DebugPrefix::Missing { locale: requested }
            }
        };
        config.debug_formatters.apply(prefix, &rendered)
    }

    fn report_missing(
        &self,
        translations: &Translations,
        resolution: &Resolution<'_>,
        locale: &str,
        config: &I18nConfig,
    ) {
        if !config.warn_on_missing {
            return;
        }

        let warning = TranslationWarning {
            requested_locale: locale.to_string(),
            available_locales: translations.locales().map(str::to_string).collect(),
            fallback_used: resolution.fallback_used().map(str::to_string),
        };

        match config.on_missing_translation {
            Some(ref handler) => handler(&warning),
            None => warn!(target: "inline_i18n::translate", "{}", warning),
        }
    }
}

impl fmt::Debug for Interpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpolator")
            .field("config", &*self.config.read())
            .field("formatters", &self.formatters)
            .field("cache", &self.cache)
            .finish()
    }
}

/// Fast path: replace `{name}` placeholders without parsing.
fn substitute_arguments<'t>(
    template: &'t str,
    vars: &Vars,
    locale: &str,
    policy: MissingVarPolicy<'_>,
) -> Cow<'t, str> {
    SIMPLE_ARGUMENT.replace_all(template, |caps: &Captures<'_>| match vars.get(&caps[1]) {
        Some(value) => value.to_display_string(),
        None => policy.resolve(&caps[1], locale),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vars, I18nError};
    use inline_i18n_log::Capture;
    use parking_lot::Mutex;

    #[test]
    fn test_fast_path_skips_parser() {
        let i18n = Interpolator::new();
        let out = i18n.render("Hi {name}, {missing} it's }", &vars! { "name" => "Bo" }, "en");
        assert_eq!(out, "Hi Bo, {missing} it's }");
        assert_eq!(i18n.parse_cache_len(), 0);
    }

    #[test]
    fn test_fast_path_agrees_with_parser() {
        let i18n = Interpolator::new();
        let vars = vars! { "이름" => "Mina", "name" => "Bo", "n" => 2 };

        assert_eq!(i18n.render("안녕 {이름}", &vars, "ko"), "안녕 Mina");
        assert_eq!(i18n.render("Hi { name }", &vars, "en"), "Hi Bo");
        assert_eq!(i18n.parse_cache_len(), 0);

        assert_eq!(
            i18n.render("안녕 {이름}, {n, plural, one {# 건} other {# 건들}}", &vars, "ko"),
            "안녕 Mina, 2 건들"
        );
        assert_eq!(
            i18n.render("Hi { name }, {n, number}", &vars, "en"),
            "Hi Bo, 2"
        );
    }

    #[test]
    fn test_fast_path_consults_handler_for_padded_names() {
        let i18n = Interpolator::with_config(
            I18nConfig::new().with_missing_var_handler(|name: &str, _: &str| format!("<{name}>")),
        );
        assert_eq!(i18n.render("Hi { who }", &vars! {}, "en"), "Hi <who>");
        assert_eq!(i18n.parse_cache_len(), 0);
    }

    #[test]
    fn test_quoted_template_uses_parser() {
        let i18n = Interpolator::new();
        let out = i18n.render("Hi {name}, '{x}' }", &vars! { "name" => "Bo" }, "en");
        assert_eq!(out, "Hi Bo, {x} }");
        assert_eq!(i18n.parse_cache_len(), 1);
    }

    #[test]
    fn test_icu_path_populates_cache() {
        let i18n = Interpolator::new();
        let template = "{n, plural, one {# file} other {# files}}";
        assert_eq!(i18n.render(template, &vars! { "n" => 1 }, "en"), "1 file");
        assert_eq!(i18n.render(template, &vars! { "n" => 2 }, "en"), "2 files");
        assert_eq!(i18n.parse_cache_len(), 1);
        assert_eq!(i18n.parse_cache().stats().hits(), 1);
    }

    #[test]
    fn test_shorthand() {
        let i18n = Interpolator::new();
        let two = "{count, p, item|items}";
        assert_eq!(i18n.render(two, &vars! { "count" => 1 }, "en"), "1 item");
        assert_eq!(i18n.render(two, &vars! { "count" => 5 }, "en"), "5 items");

        let three = "{count, p, none|item|items}";
        assert_eq!(i18n.render(three, &vars! { "count" => 0 }, "en"), "none");
        assert_eq!(i18n.render(three, &vars! { "count" => 3 }, "en"), "3 items");
    }

    #[test]
    fn test_parse_error_degrades_and_logs() {
        let capture = Capture::start();
        let i18n = Interpolator::new();
        let template = "{count, plural, one {x}";

        assert_eq!(i18n.render(template, &vars! { "count" => 1 }, "en"), template);
        assert!(capture.contains("failed to render template"));
        assert!(matches!(
            i18n.try_render(template, &vars! {}, "en"),
            Err(I18nError::Parse(_))
        ));
    }

    #[test]
    fn test_stale_snapshot_parse_not_cached() {
        let i18n = Interpolator::new();
        let before = i18n.formatters.snapshot();
        i18n.register_formatter("phone", |v, _, _| v.to_string()).unwrap();

        let message = i18n.parse_cached("{n, number}", &before).unwrap();
        assert!(!message.is_empty());
        assert_eq!(i18n.parse_cache_len(), 0);

        let current = i18n.formatters.snapshot();
        i18n.parse_cached("{n, number}", &current).unwrap();
        assert_eq!(i18n.parse_cache_len(), 1);
    }

    #[test]
    fn test_registration_clears_cache() {
        let i18n = Interpolator::new();
        i18n.render("{n, number}", &vars! { "n" => 1 }, "en");
        assert_eq!(i18n.parse_cache_len(), 1);

        i18n.register_formatter("phone", |v, _, _| v.to_string()).unwrap();
        assert_eq!(i18n.parse_cache_len(), 0);

        i18n.render("{n, number}", &vars! { "n" => 1 }, "en");
        assert!(!i18n.unregister_formatter("nope"));
        assert_eq!(i18n.parse_cache_len(), 1);
        assert!(i18n.unregister_formatter("phone"));
        assert_eq!(i18n.parse_cache_len(), 0);
    }

    #[test]
    fn test_custom_formatter_with_style() {
        let i18n = Interpolator::new();
        i18n.register_formatter("phone", |value, _locale, style| {
            let digits = value.to_display_string();
            let formatted = format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..]);
            match style {
                Some("intl") => format!("+1 {}", formatted),
                _ => formatted,
            }
        })
        .unwrap();

        let vars = vars! { "num" => "2125551234" };
        assert!(i18n.has_custom_formatter("Call {num, phone}"));
        assert_eq!(i18n.render("Call {num, phone}", &vars, "en"), "Call (212) 555-1234");
        assert_eq!(i18n.render("{num, phone, intl}", &vars, "en"), "+1 (212) 555-1234");
        assert_eq!(i18n.render("{other, phone}", &vars, "en"), "{other}");
    }

    #[test]
    fn test_configure_resizes_cache() {
        let i18n = Interpolator::new();
        for n in 0..5 {
            i18n.render(&format!("{{n, number}} {}", n), &vars! { "n" => n }, "en");
        }
        assert_eq!(i18n.parse_cache_len(), 5);

        i18n.configure(|config| config.parse_cache_size = 2);
        assert_eq!(i18n.parse_cache_len(), 2);

        i18n.reset_config();
        assert_eq!(i18n.config().parse_cache_size, 500);
    }

    #[test]
    fn test_missing_var_handler() {
        let i18n = Interpolator::with_config(
            I18nConfig::new().with_missing_var_handler(|name, locale| format!("[{}@{}]", name, locale)),
        );
        assert_eq!(i18n.render("Hi {name}", &vars! {}, "ko"), "Hi [name@ko]");
        assert_eq!(
            i18n.render("{g, select, a {A}}", &vars! { "g" => "b" }, "ko"),
            "[g@ko]"
        );
    }

    #[test]
    fn test_empty_locale_uses_default() {
        let i18n = Interpolator::with_config(
            I18nConfig::new()
                .with_default_locale("ko")
                .with_missing_var_handler(|_, locale| locale.to_string()),
        );
        assert_eq!(i18n.render("{x}", &vars! {}, ""), "ko");
    }

    #[test]
    fn test_translate_fallback_warning() {
        let warnings = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&warnings);
        let i18n = Interpolator::with_config(
            I18nConfig::new().with_on_missing_translation(move |w| sink.lock().push(w.clone())),
        );

        let hello = Translations::from([("en", "Hello"), ("zh", "你好")]);
        assert_eq!(i18n.translate(&hello, &vars! {}, "zh-TW"), "你好");
        assert_eq!(i18n.translate(&hello, &vars! {}, "en"), "Hello");

        let warnings = warnings.lock();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].requested_locale, "zh-TW");
        assert_eq!(warnings[0].fallback_used.as_deref(), Some("zh"));
        assert_eq!(warnings[0].available_locales, ["en", "zh"]);
    }

    #[test]
    fn test_translate_debug_prefixes() {
        let i18n = Interpolator::with_config(
            I18nConfig::new().with_debug_mode(true).with_warn_on_missing(false),
        );
        let hello = Translations::pair("ko", "안녕", "zh", "你好");

        assert_eq!(i18n.translate(&hello, &vars! {}, "ko"), "안녕");
        assert_eq!(i18n.translate(&hello, &vars! {}, "zh-TW"), "[zh-TW -> zh] 你好");
        assert_eq!(i18n.translate(&hello, &vars! {}, "fr"), "[MISSING: fr] 안녕");
        assert_eq!(i18n.translate(&Translations::new(), &vars! {}, "fr"), "[MISSING: fr] ");
    }

    #[test]
    fn test_translate_empty_logs_warning() {
        let capture = Capture::start();
        let i18n = Interpolator::new();
        assert_eq!(i18n.translate(&Translations::new(), &vars! {}, "ja"), "");
        assert!(capture.contains("Missing translation for locale \"ja\""));
    }

    #[test]
    fn test_interpolator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Interpolator>();
    }
}
