//! Parsed message tree

use crate::datetime::{DateStyle, TimeStyle};
use crate::format::{CompactDisplay, NumberStyle};
use crate::list::{ListStyle, ListType};
use crate::plural::PluralType;
use crate::relative::RelativeTimeStyle;

/// A parsed message.
pub type Message = Vec<Node>;

/// One element of a parsed message.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal text, quotes already resolved
    Literal(String),

    /// `{name}`
    Argument(String),

    /// `#` inside a plural body
    Pound,

    /// `{name, plural, ...}` / `{name, selectordinal, ...}`
    Plural {
        name: String,
        offset: f64,
        plural_type: PluralType,
        options: Vec<PluralOption>,
    },

    /// `{name, select, ...}`
    Select {
        name: String,
        options: Vec<SelectOption>,
    },

    /// `{name, number[, style]}`
    Number { name: String, style: NumberStyle },

    /// `{name, date[, style]}`
    Date { name: String, style: DateStyle },

    /// `{name, time[, style]}`
    Time { name: String, style: TimeStyle },

    /// Syntax beyond standard ICU (currency, compact, relative time, lists
    /// and registered custom formatters)
    Extension { kind: ExtensionKind, name: String },
}

/// Selector of a plural branch.
#[derive(Debug, Clone, PartialEq)]
pub enum PluralSelector {
    /// `=N`, matched against the value before the offset is applied
    Exact(f64),
    /// Category keyword (`zero`, `one`, ..., `other`)
    Keyword(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PluralOption {
    pub selector: PluralSelector,
    pub body: Message,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub key: String,
    pub body: Message,
}

/// Extension element kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionKind {
    /// `{v, currency[, CODE]}`
    Currency(String),
    /// `{v, number, compact}` / `{v, number, compactLong}`
    Compact(CompactDisplay),
    /// `{v, relativeTime[, style]}`
    RelativeTime(RelativeTimeStyle),
    /// `{v, list[, type[, style]]}`
    List(ListType, ListStyle),
    /// `{v, name[, style]}` for a registered formatter
    Custom { formatter: String, style: Option<String> },
}
