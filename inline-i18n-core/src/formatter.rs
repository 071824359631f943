//! Custom formatter registry
//!
//! Registered formatters extend the message syntax with `{value, name}` and
//! `{value, name, style}` elements.

use crate::preprocess::custom_formatter_probe;
use crate::{I18nError, Result, Value};
use inline_i18n_log::debug;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Type names that belong to the message syntax itself.
pub const RESERVED_FORMATTER_NAMES: [&str; 9] = [
    "plural",
    "select",
    "selectordinal",
    "number",
    "date",
    "time",
    "relativeTime",
    "list",
    "currency",
];

static FORMATTER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// A user-supplied element formatter.
///
/// Implemented for every `Fn(&Value, &str, Option<&str>) -> String`.
pub trait CustomFormatter: Send + Sync {
    /// Format `value` for `locale`, with the optional style argument.
    fn format(&self, value: &Value, locale: &str, style: Option<&str>) -> String;
}

impl<F> CustomFormatter for F
where
    F: Fn(&Value, &str, Option<&str>) -> String + Send + Sync,
{
    fn format(&self, value: &Value, locale: &str, style: Option<&str>) -> String {
        self(value, locale, style)
    }
}

/// Formatters by name.
pub type FormatterMap = HashMap<String, Arc<dyn CustomFormatter>>;

/// Check that `name` can be registered.
pub fn validate_formatter_name(name: &str) -> Result<()> {
    if RESERVED_FORMATTER_NAMES.contains(&name) {
        return Err(I18nError::ReservedFormatterName(name.to_string()));
    }
    if !FORMATTER_NAME.is_match(name) {
        return Err(I18nError::InvalidFormatterName(name.to_string()));
    }
    Ok(())
}

/// An immutable set of formatters together with the template probe for
/// their names.
#[derive(Default)]
pub struct FormatterSet {
    formatters: FormatterMap,
    probe: Option<Regex>,
}

impl FormatterSet {
    fn new(formatters: FormatterMap) -> Self {
        let probe = custom_formatter_probe(formatters.keys());
        Self { formatters, probe }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn CustomFormatter>> {
        self.formatters.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }

    /// The underlying map, for [`ExtensionSyntax`](crate::parser::ExtensionSyntax).
    pub fn as_map(&self) -> &FormatterMap {
        &self.formatters
    }

    /// Whether `template` contains a `{v, name}` element for any formatter.
    pub fn matches(&self, template: &str) -> bool {
        self.probe.as_ref().is_some_and(|probe| probe.is_match(template))
    }
}

/// Copy-on-write formatter registry.
///
/// Readers take a [`snapshot`](Self::snapshot) and never hold the lock while
/// a formatter runs.
#[derive(Default)]
pub struct FormatterRegistry {
    current: RwLock<Arc<FormatterSet>>,
}

impl FormatterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure under `name`, replacing any previous formatter.
    pub fn register<F>(&self, name: &str, formatter: F) -> Result<()>
    where
        F: Fn(&Value, &str, Option<&str>) -> String + Send + Sync + 'static,
    {
        self.register_arc(name, Arc::new(formatter))
    }

    /// Register a shared formatter under `name`.
    pub fn register_arc(&self, name: &str, formatter: Arc<dyn CustomFormatter>) -> Result<()> {
        validate_formatter_name(name)?;

        let mut current = self.current.write();
        let mut next = current.formatters.clone();
        let replaced = next.insert(name.to_string(), formatter).is_some();
        *current = Arc::new(FormatterSet::new(next));

        debug!(
            target: "inline_i18n::formatter",
            "{} custom formatter '{}'",
            if replaced { "replaced" } else { "registered" },
            name
        );
        Ok(())
    }

    /// Remove a formatter. Returns whether it was registered.
    pub fn unregister(&self, name: &str) -> bool {
        let mut current = self.current.write();
        if !current.contains(name) {
            return false;
        }
        let mut next = current.formatters.clone();
        next.remove(name);
        *current = Arc::new(FormatterSet::new(next));

        debug!(target: "inline_i18n::formatter", "unregistered custom formatter '{}'", name);
        true
    }

    /// Remove every formatter.
    pub fn clear(&self) {
        *self.current.write() = Arc::new(FormatterSet::default());
    }

    /// Current formatters.
    pub fn snapshot(&self) -> Arc<FormatterSet> {
        Arc::clone(&self.current.read())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.current.read().contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.current.read().is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.current.read().formatters.keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("names", &self.names())
            .finish()
    }
}
