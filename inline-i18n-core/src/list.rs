//! List Formatting
//!
//! Joins items the way `Intl.ListFormat` does: "Alice, Bob, and Carol",
//! "red or blue", "철수, 영희 및 민수".

use crate::Locale;

/// Kind of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListType {
    /// "and" lists
    #[default]
    Conjunction,
    /// "or" lists
    Disjunction,
    /// Measurements ("5 kg, 10 cm")
    Unit,
}

/// Width of the connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListStyle {
    #[default]
    Long,
    Short,
    Narrow,
}

impl ListType {
    /// Parse a type keyword; anything unknown is `Conjunction`.
    pub fn parse(list_type: Option<&str>) -> Self {
        match list_type.map(str::trim) {
            Some("disjunction") => Self::Disjunction,
            Some("unit") => Self::Unit,
            _ => Self::Conjunction,
        }
    }
}

impl ListStyle {
    /// Parse a style keyword; anything unknown is `Long`.
    pub fn parse(style: Option<&str>) -> Self {
        match style.map(str::trim) {
            Some("short") => Self::Short,
            Some("narrow") => Self::Narrow,
            _ => Self::Long,
        }
    }
}

/// Separators for one locale, type and style.
struct ListPattern {
    /// Between leading items
    middle: &'static str,
    /// Before the last of three or more items
    end: &'static str,
    /// Between exactly two items
    pair: &'static str,
}

const fn pattern(middle: &'static str, end: &'static str, pair: &'static str) -> ListPattern {
    ListPattern { middle, end, pair }
}

/// Locale-aware list formatter.
///
/// ```
/// use inline_i18n_core::{ListFormatter, ListStyle, ListType, Locale};
///
/// let and = ListFormatter::default();
/// assert_eq!(and.format(&["Alice", "Bob", "Carol"], &Locale::en_us()), "Alice, Bob, and Carol");
/// assert_eq!(and.format(&["Alice", "Bob"], &Locale::en_us()), "Alice and Bob");
///
/// let or = ListFormatter::new(ListType::Disjunction, ListStyle::Long);
/// assert_eq!(or.format(&["red", "blue", "green"], &Locale::en_us()), "red, blue, or green");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFormatter {
    pub list_type: ListType,
    pub style: ListStyle,
}

impl ListFormatter {
    pub fn new(list_type: ListType, style: ListStyle) -> Self {
        Self { list_type, style }
    }

    /// Join `items` for `locale`.
    pub fn format<S: AsRef<str>>(&self, items: &[S], locale: &Locale) -> String {
        let pattern = self.pattern(locale);

        match items {
            [] => String::new(),
            [only] => only.as_ref().to_string(),
            [first, second] => format!("{}{}{}", first.as_ref(), pattern.pair, second.as_ref()),
            [init @ .., last] => {
                let mut out = String::new();
                for (i, item) in init.iter().enumerate() {
                    if i > 0 {
                        out.push_str(pattern.middle);
                    }
                    out.push_str(item.as_ref());
                }
                out.push_str(pattern.end);
                out.push_str(last.as_ref());
                out
            }
        }
    }

    fn pattern(&self, locale: &Locale) -> ListPattern {
        use ListStyle::*;
        use ListType::*;

        match (locale.language.as_str(), self.list_type, self.style) {
            ("ko", Conjunction, _) => pattern(", ", " 및 ", " 및 "),
            ("ko", Disjunction, _) => pattern(", ", " 또는 ", " 또는 "),
            ("ko", Unit, _) => pattern(" ", " ", " "),

            ("ja", Conjunction, _) => pattern("、", "、", "、"),
            ("ja", Disjunction, _) => pattern("、", "、または", "または"),
            ("ja", Unit, _) => pattern(" ", " ", " "),

            ("zh", Conjunction, _) => pattern("、", "和", "和"),
            ("zh", Disjunction, _) => pattern("、", "或", "或"),
            ("zh", Unit, _) => pattern("", "", ""),

            ("de", Disjunction, _) => pattern(", ", " oder ", " oder "),
            ("de", _, Narrow) => pattern(", ", ", ", ", "),
            ("de", _, _) => pattern(", ", " und ", " und "),

            ("fr", Disjunction, _) => pattern(", ", " ou ", " ou "),
            ("fr", _, Narrow) => pattern(", ", ", ", ", "),
            ("fr", _, _) => pattern(", ", " et ", " et "),

            ("es", Disjunction, _) => pattern(", ", " o ", " o "),
            ("es", _, Narrow) => pattern(", ", ", ", ", "),
            ("es", _, _) => pattern(", ", " y ", " y "),

            (_, Conjunction, Long) => pattern(", ", ", and ", " and "),
            (_, Conjunction, Short) => pattern(", ", ", & ", " & "),
            (_, Conjunction, Narrow) => pattern(", ", ", ", ", "),
            (_, Disjunction, _) => pattern(", ", ", or ", " or "),
            (_, Unit, Narrow) => pattern(" ", " ", " "),
            (_, Unit, _) => pattern(", ", ", ", ", "),
        }
    }
}

/// Format a conjunction list in long style.
pub fn format_list<S: AsRef<str>>(items: &[S], locale: &Locale) -> String {
    ListFormatter::default().format(items, locale)
}
