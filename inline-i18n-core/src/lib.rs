//! ICU Message Format interpolation for inline-i18n
//!
//! Provides the engine behind inline translations:
//!
//! - **ICU Messages**: plural, selectordinal, select, number, date and time
//!   elements with apostrophe quoting
//! - **Extensions**: `{v, currency}`, `{v, number, compact}`,
//!   `{v, relativeTime}`, `{v, list}` and registered custom formatters
//! - **Plural Shorthand**: `{count, p, item|items}`
//! - **Fallback Chains**: `zh-TW -> zh -> en`, custom chains per locale
//! - **Locale Formatting**: CLDR-subset number, currency, date, relative time
//!   and list patterns
//!
//! # Quick Start
//!
//! ```rust
//! use inline_i18n_core::{vars, Interpolator, Translations};
//!
//! let i18n = Interpolator::new();
//!
//! let out = i18n.render(
//!     "{count, plural, offset:1 =0 {Nobody} =1 {Just {name}} one {# other and {name}} other {# others and {name}}}",
//!     &vars! { "count" => 2, "name" => "Alice" },
//!     "en",
//! );
//! assert_eq!(out, "1 other and Alice");
//!
//! let cart = Translations::pair("en", "{n, p, item|items}", "ko", "{n}개");
//! assert_eq!(i18n.translate(&cart, &vars! { "n" => 3 }, "en-US"), "3 items");
//! ```
//!
//! # Custom Formatters
//!
//! ```rust
//! use inline_i18n_core::{vars, Interpolator};
//!
//! let i18n = Interpolator::new();
//! i18n.register_formatter("phone", |value, _locale, _style| {
//!     let d = value.to_display_string();
//!     format!("({}) {}-{}", &d[0..3], &d[3..6], &d[6..])
//! })?;
//!
//! assert_eq!(
//!     i18n.render("Call {num, phone}", &vars! { "num" => "2125551234" }, "en"),
//!     "Call (212) 555-1234"
//! );
//! # Ok::<(), inline_i18n_core::I18nError>(())
//! ```

pub mod ast;
mod cache;
mod config;
mod datetime;
mod error;
mod eval;
mod fallback;
mod format;
mod formatter;
mod interpolator;
mod list;
mod locale;
mod missing;
pub mod parser;
mod plural;
mod preprocess;
mod relative;
mod richtext;
mod translate;
mod value;

pub use cache::{CacheStats, ParseCache};
pub use config::{DEFAULT_PARSE_CACHE_SIZE, I18nConfig, TranslationWarning, WarningHandler};
pub use datetime::{DateFormatter, DateStyle, TimeStyle, format_date, format_time};
pub use error::I18nError;
pub use eval::{EvalContext, evaluate, evaluate_message};
pub use fallback::build_fallback_chain;
pub use format::{
    CompactDisplay, CompactFormatter, CurrencyFormatter, NumberFormatter, NumberSkeleton,
    NumberStyle, format_compact, format_currency, format_number, format_percent,
};
pub use formatter::{
    CustomFormatter, FormatterMap, FormatterRegistry, FormatterSet, RESERVED_FORMATTER_NAMES,
    validate_formatter_name,
};
pub use interpolator::Interpolator;
pub use list::{ListFormatter, ListStyle, ListType, format_list};
pub use locale::{Locale, parent_locale};
pub use missing::{
    DebugFallbackFormatter, DebugFormatters, DebugMissingFormatter, DebugPrefix,
    MissingVarHandler, MissingVarPolicy, placeholder,
};
pub use parser::{ParseError, ParseErrorKind};
pub use plural::{
    PluralCategory, PluralRules, PluralType, ordinal_category, plural_category,
};
pub use preprocess::{
    custom_formatter_probe, expand_plural_shorthand, has_custom_formatter, has_icu_pattern,
    has_plural_shorthand,
};
pub use relative::{
    RelativeTimeFormatter, RelativeTimeStyle, RelativeTimeUnit, format_relative_time, select_unit,
};
pub use richtext::{RichTextSegment, parse_rich_text};
pub use translate::{Resolution, Translations};
pub use value::{ConversionError, Value, Vars, number_to_string};

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        I18nConfig, I18nError, Interpolator, Locale, PluralCategory, Result, Translations,
        Value, Vars, build_fallback_chain, format_currency, format_number, plural_category,
        vars,
    };
}
