// inline-i18n - Inline translations with ICU Message Format interpolation
//
// The engine lives in inline-i18n-core. This crate re-exports it and adds a
// process-wide default interpolator with free-function access.

//! # inline-i18n
//!
//! ```rust
//! use inline_i18n::{render, vars};
//!
//! assert_eq!(
//!     render("{count, plural, =0 {No items} one {# item} other {# items}}", &vars! { "count" => 1 }, "en"),
//!     "1 item"
//! );
//! assert_eq!(render("Hello {name}", &vars! { "name" => "Alice" }, "en"), "Hello Alice");
//! ```
//!
//! Applications that need isolated registries or configurations create their
//! own [`Interpolator`] instead of using the shared one.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

// Re-export the engine
pub use inline_i18n_core::*;

// Re-export logging controls
pub use inline_i18n_log as log;

static DEFAULT: Lazy<Interpolator> = Lazy::new(Interpolator::new);

/// The shared interpolator behind the free functions.
pub fn interpolator() -> &'static Interpolator {
    &DEFAULT
}

/// Render `template` with the shared interpolator.
pub fn render(template: &str, vars: &Vars, locale: &str) -> String {
    DEFAULT.render(template, vars, locale)
}

/// Render with an explicit "now" for relative time elements.
pub fn render_at(template: &str, vars: &Vars, locale: &str, now: DateTime<Utc>) -> String {
    DEFAULT.render_at(template, vars, locale, now)
}

/// Render, surfacing grammar errors.
pub fn try_render(template: &str, vars: &Vars, locale: &str) -> Result<String> {
    DEFAULT.try_render(template, vars, locale)
}

/// Translate inline translations with the shared interpolator.
pub fn translate(translations: &Translations, vars: &Vars, locale: &str) -> String {
    DEFAULT.translate(translations, vars, locale)
}

/// Register a custom formatter on the shared interpolator.
pub fn register_formatter<F>(name: &str, formatter: F) -> Result<()>
where
    F: Fn(&Value, &str, Option<&str>) -> String + Send + Sync + 'static,
{
    DEFAULT.register_formatter(name, formatter)
}

pub fn unregister_formatter(name: &str) -> bool {
    DEFAULT.unregister_formatter(name)
}

pub fn clear_formatters() {
    DEFAULT.clear_formatters();
}

/// Whether `template` uses a formatter registered on the shared interpolator.
pub fn has_custom_formatter(template: &str) -> bool {
    DEFAULT.has_custom_formatter(template)
}

pub fn clear_parse_cache() {
    DEFAULT.clear_parse_cache();
}

pub fn parse_cache_len() -> usize {
    DEFAULT.parse_cache_len()
}

/// Fallback chain for `locale` under the shared configuration.
pub fn build_fallback_chain(locale: &str) -> Vec<String> {
    DEFAULT.build_fallback_chain(locale)
}

/// Update the shared configuration.
pub fn configure<F>(update: F)
where
    F: FnOnce(&mut I18nConfig),
{
    DEFAULT.configure(update);
}

/// A copy of the shared configuration.
pub fn config() -> I18nConfig {
    DEFAULT.config()
}

pub fn reset_config() {
    DEFAULT.reset_config();
}
