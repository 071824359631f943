//! Message evaluation
//!
//! Walks a parsed [`Message`] and concatenates the text of every node.
//! Evaluation never fails: anything that cannot be resolved from the
//! variables goes through the [`MissingVarPolicy`].

use crate::ast::{ExtensionKind, Message, Node, PluralOption, PluralSelector, SelectOption};
use crate::datetime::DateFormatter;
use crate::format::{CompactFormatter, CurrencyFormatter, NumberStyle};
use crate::formatter::FormatterSet;
use crate::list::ListFormatter;
use crate::missing::MissingVarPolicy;
use crate::plural::{self, PluralType};
use crate::relative::{RelativeTimeFormatter, RelativeTimeStyle};
use crate::value::{number_to_string, Value, Vars};
use crate::Locale;
use chrono::{DateTime, Utc};
use inline_i18n_log::debug;

/// Everything a render needs besides the message itself.
pub struct EvalContext<'a> {
    vars: &'a Vars,
    locale: &'a str,
    parsed_locale: Option<Locale>,
    policy: MissingVarPolicy<'a>,
    formatters: &'a FormatterSet,
    now: DateTime<Utc>,
}

impl<'a> EvalContext<'a> {
    pub fn new(
        vars: &'a Vars,
        locale: &'a str,
        policy: MissingVarPolicy<'a>,
        formatters: &'a FormatterSet,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            vars,
            locale,
            parsed_locale: Locale::parse(locale).ok(),
            policy,
            formatters,
            now,
        }
    }

    fn missing(&self, name: &str) -> String {
        self.policy.resolve(name, self.locale)
    }

    /// Run `format` against the parsed locale, or fall back to the raw value
    /// when the locale tag could not be parsed.
    fn localized(&self, value: &Value, format: impl FnOnce(&Locale) -> String) -> String {
        match self.parsed_locale {
            Some(ref locale) => format(locale),
            None => value.to_display_string(),
        }
    }
}

/// Evaluate `nodes`.
///
/// `plural_value` is the offset-adjusted value of the innermost enclosing
/// plural, rendered for `#`.
pub fn evaluate(nodes: &[Node], ctx: &EvalContext<'_>, plural_value: Option<f64>) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Literal(text) => out.push_str(text),
            Node::Argument(name) => match ctx.vars.get(name) {
                Some(value) => out.push_str(&value.to_display_string()),
                None => out.push_str(&ctx.missing(name)),
            },
            Node::Pound => match plural_value {
                Some(n) => out.push_str(&number_to_string(n)),
                None => out.push('#'),
            },
            Node::Plural {
                name,
                offset,
                plural_type,
                options,
            } => out.push_str(&eval_plural(name, *offset, *plural_type, options, ctx)),
            Node::Select { name, options } => out.push_str(&eval_select(name, options, ctx)),
            Node::Number { name, style } => out.push_str(&eval_number(name, style, ctx)),
            Node::Date { name, style } => {
                out.push_str(&eval_datetime(name, ctx, DateFormatter::new().date_style(*style)))
            }
            Node::Time { name, style } => {
                out.push_str(&eval_datetime(name, ctx, DateFormatter::new().time_style(*style)))
            }
            Node::Extension { kind, name } => out.push_str(&eval_extension(kind, name, ctx)),
        }
    }
    out
}

/// Evaluate a whole message with no enclosing plural.
pub fn evaluate_message(message: &Message, ctx: &EvalContext<'_>) -> String {
    evaluate(message, ctx, None)
}

// ============================================================================
// Branching
// ============================================================================

fn eval_plural(
    name: &str,
    offset: f64,
    plural_type: PluralType,
    options: &[PluralOption],
    ctx: &EvalContext<'_>,
) -> String {
    let Some(Value::Number(value)) = ctx.vars.get(name) else {
        return ctx.missing(name);
    };
    let value = *value;
    let adjusted = value - offset;
    let category = plural::select(adjusted, ctx.locale, plural_type);

    let exact = options
        .iter()
        .find(|o| matches!(o.selector, PluralSelector::Exact(n) if n == value));
    let keyword = |key: &str| {
        options
            .iter()
            .find(|o| matches!(&o.selector, PluralSelector::Keyword(k) if k == key))
    };

    match exact
        .or_else(|| keyword(category.as_str()))
        .or_else(|| keyword("other"))
    {
        Some(option) => evaluate(&option.body, ctx, Some(adjusted)),
        None => ctx.missing(name),
    }
}

fn eval_select(name: &str, options: &[SelectOption], ctx: &EvalContext<'_>) -> String {
    let key = ctx
        .vars
        .get(name)
        .map(Value::to_display_string)
        .unwrap_or_else(|| "undefined".to_string());

    let find = |k: &str| options.iter().find(|o| o.key == k);
    match find(key.as_str()).or_else(|| find("other")) {
        Some(option) => evaluate(&option.body, ctx, None),
        None => ctx.missing(name),
    }
}

// ============================================================================
// Formatting elements
// ============================================================================

fn eval_number(name: &str, style: &NumberStyle, ctx: &EvalContext<'_>) -> String {
    let Some(value) = ctx.vars.get(name) else {
        return ctx.missing(name);
    };
    let Ok(n) = value.to_number() else {
        return ctx.missing(name);
    };

    ctx.localized(value, |locale| match style.format(n, locale) {
        Ok(text) => text,
        Err(err) => {
            debug!(target: "inline_i18n::format", "number element '{}': {}", name, err);
            number_to_string(n)
        }
    })
}

fn eval_datetime(name: &str, ctx: &EvalContext<'_>, formatter: DateFormatter) -> String {
    let Some(value) = ctx.vars.get(name) else {
        return ctx.missing(name);
    };
    let Ok(at) = value.to_datetime() else {
        return ctx.missing(name);
    };

    ctx.localized(value, |locale| formatter.format(&at, locale))
}

// ============================================================================
// Extensions
// ============================================================================

fn eval_extension(kind: &ExtensionKind, name: &str, ctx: &EvalContext<'_>) -> String {
    let Some(value) = ctx.vars.get(name) else {
        return ctx.missing(name);
    };

    match kind {
        ExtensionKind::Custom { formatter, style } => match ctx.formatters.get(formatter) {
            Some(f) => f.format(value, ctx.locale, style.as_deref()),
            None => ctx.missing(name),
        },
        ExtensionKind::Currency(code) => {
            let Ok(amount) = value.to_number() else {
                return ctx.missing(name);
            };
            ctx.localized(value, |locale| match CurrencyFormatter::new(code) {
                Ok(formatter) => formatter.format(amount, locale),
                Err(err) => {
                    debug!(target: "inline_i18n::format", "currency element '{}': {}", name, err);
                    value.to_display_string()
                }
            })
        }
        ExtensionKind::Compact(display) => {
            let Ok(n) = value.to_number() else {
                return ctx.missing(name);
            };
            ctx.localized(value, |locale| CompactFormatter::new(*display).format(n, locale))
        }
        ExtensionKind::RelativeTime(style) => {
            let Ok(target) = value.to_datetime() else {
                return ctx.missing(name);
            };
            ctx.localized(value, |locale| relative(&target, *style, ctx, locale))
        }
        ExtensionKind::List(list_type, style) => {
            let Ok(items) = value.as_list() else {
                return ctx.missing(name);
            };
            ctx.localized(value, |locale| {
                ListFormatter::new(*list_type, *style).format(items, locale)
            })
        }
    }
}

fn relative(
    target: &DateTime<Utc>,
    style: RelativeTimeStyle,
    ctx: &EvalContext<'_>,
    locale: &Locale,
) -> String {
    RelativeTimeFormatter::new(style).format_between(target, &ctx.now, locale)
}
