//! Template probes and plural shorthand expansion
//!
//! Cheap regex checks decide whether a template needs the full parser at
//! all; plain `{name}` templates take the fast path.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::ops::Range;

static ICU_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\{[^}]+,\s*(plural|select|selectordinal|number|date|time|relativeTime|list|currency)\s*[,}]",
    )
    .unwrap()
});

static PLURAL_SHORTHAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\{\s*((?:[^\s[:punct:]]|_)+)\s*,\s*p\s*,([^|{}]+)\|([^|{}]+)(?:\|([^|{}]+))?\}",
    )
    .unwrap()
});

/// Plain `{name}` placeholders, as substituted by the fast path.
///
/// Names follow the parser: anything but whitespace and ASCII punctuation
/// other than `_`, optionally padded with whitespace inside the braces.
pub(crate) static SIMPLE_ARGUMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\s*((?:[^\s[:punct:]]|_)+)\s*\}").unwrap());

/// An apostrophe that opens a quoted section.
static QUOTE_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"'[{}<>]").unwrap());

/// Whether `template` contains an ICU or built-in extension element.
///
/// ```
/// use inline_i18n_core::has_icu_pattern;
///
/// assert!(has_icu_pattern("{count, plural, one {# item} other {# items}}"));
/// assert!(has_icu_pattern("{names, list}"));
/// assert!(!has_icu_pattern("Hello {name}"));
/// ```
pub fn has_icu_pattern(template: &str) -> bool {
    ICU_PATTERN.is_match(template)
}

/// Whether `template` uses the `{var, p, singular|plural}` shorthand.
pub fn has_plural_shorthand(template: &str) -> bool {
    PLURAL_SHORTHAND.is_match(template)
}

/// Rewrite plural shorthand into full plural elements.
///
/// `{n, p, a|b}` becomes `{n, plural, one {# a} other {# b}}` and
/// `{n, p, z|a|b}` additionally gets `=0 {z}`.
///
/// ```
/// use inline_i18n_core::expand_plural_shorthand;
///
/// assert_eq!(
///     expand_plural_shorthand("{count, p, item|items}"),
///     "{count, plural, one {# item} other {# items}}"
/// );
/// assert_eq!(
///     expand_plural_shorthand("{count, p, none|item|items}"),
///     "{count, plural, =0 {none} one {# item} other {# items}}"
/// );
/// ```
pub fn expand_plural_shorthand(template: &str) -> Cow<'_, str> {
    if !PLURAL_SHORTHAND.is_match(template) {
        return Cow::Borrowed(template);
    }

    let quoted = quoted_ranges(template);
    let mut out = String::with_capacity(template.len() + 32);
    let mut last = 0;
    let mut expanded = false;

    for caps in PLURAL_SHORTHAND.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if quoted.iter().any(|r| r.start < whole.end() && whole.start() < r.end) {
            continue;
        }
        out.push_str(&template[last..whole.start()]);
        out.push_str(&expand_one(&caps));
        last = whole.end();
        expanded = true;
    }

    if !expanded {
        return Cow::Borrowed(template);
    }
    out.push_str(&template[last..]);
    Cow::Owned(out)
}

fn expand_one(caps: &Captures<'_>) -> String {
    let name = &caps[1];
    let first = escape_fragment(caps[2].trim());
    let second = escape_fragment(caps[3].trim());

    match caps.get(4) {
        Some(third) => format!(
            "{{{}, plural, =0 {{{}}} one {{# {}}} other {{# {}}}}}",
            name,
            first,
            second,
            escape_fragment(third.as_str().trim())
        ),
        None => format!(
            "{{{}, plural, one {{# {}}} other {{# {}}}}}",
            name, first, second
        ),
    }
}

/// Quote the characters that mean something inside a plural body.
fn escape_fragment(fragment: &str) -> Cow<'_, str> {
    if !fragment.contains(['#', '\'']) {
        return Cow::Borrowed(fragment);
    }
    let mut out = String::with_capacity(fragment.len() + 4);
    for c in fragment.chars() {
        match c {
            '\'' => out.push_str("''"),
            '#' => out.push_str("'#'"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Whether `template` uses apostrophe quoting, which only the parser
/// understands.
pub(crate) fn has_quoted_section(template: &str) -> bool {
    QUOTE_START.is_match(template)
}

/// Byte ranges of apostrophe-quoted sections, quotes included.
fn quoted_ranges(template: &str) -> Vec<Range<usize>> {
    let bytes = template.as_bytes();
    let mut ranges = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\'' {
            i += 1;
            continue;
        }
        match bytes.get(i + 1) {
            Some(b'\'') => i += 2,
            Some(b'{' | b'}' | b'<' | b'>') => {
                let start = i;
                i += 1;
                loop {
                    match bytes.get(i) {
                        None => break,
                        Some(b'\'') if bytes.get(i + 1) == Some(&b'\'') => i += 2,
                        Some(b'\'') => {
                            i += 1;
                            break;
                        }
                        Some(_) => i += 1,
                    }
                }
                ranges.push(start..i);
            }
            _ => i += 1,
        }
    }
    ranges
}

/// Build a probe matching `{v, name}` / `{v, name, ...}` for any of `names`.
///
/// Returns `None` when there are no names.
pub fn custom_formatter_probe<I, S>(names: I) -> Option<Regex>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let alternatives: Vec<String> = names
        .into_iter()
        .map(|name| regex::escape(name.as_ref()))
        .collect();
    if alternatives.is_empty() {
        return None;
    }

    Regex::new(&format!(
        r"\{{[^}}]+,\s*({})\s*[,}}]",
        alternatives.join("|")
    ))
    .ok()
}

/// Whether `template` uses any of the custom formatter `names`.
///
/// ```
/// use inline_i18n_core::has_custom_formatter;
///
/// assert!(has_custom_formatter("Call {num, phone}", ["phone"]));
/// assert!(!has_custom_formatter("Call {num}", ["phone"]));
/// assert!(!has_custom_formatter::<_, &str>("Call {num, phone}", []));
/// ```
pub fn has_custom_formatter<I, S>(template: &str, names: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    custom_formatter_probe(names).is_some_and(|probe| probe.is_match(template))
}
