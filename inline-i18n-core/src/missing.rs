//! Missing-variable policy and debug-mode prefixes
//!
//! Every "value not found" path in the engine ends in
//! [`MissingVarPolicy::resolve`]: a plain argument with no variable, a
//! plural without a numeric value, a select with no matching branch and no
//! `other`, an extension whose value cannot be coerced. Without a handler
//! the original `{name}` syntax is echoed so the gap stays visible and the
//! output can be fed through the engine again.

use std::fmt;
use std::sync::Arc;

/// Handler invoked as `(var_name, locale)` for unresolved variables.
pub type MissingVarHandler = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// The literal placeholder echoed for an unresolved variable.
pub fn placeholder(name: &str) -> String {
    format!("{{{}}}", name)
}

/// Resolution strategy for unresolved variables.
#[derive(Clone, Copy)]
pub struct MissingVarPolicy<'a> {
    handler: Option<&'a MissingVarHandler>,
}

impl<'a> MissingVarPolicy<'a> {
    /// Policy backed by an optional user handler.
    pub fn new(handler: Option<&'a MissingVarHandler>) -> Self {
        Self { handler }
    }

    /// Resolve an unresolved variable to its output text.
    pub fn resolve(&self, name: &str, locale: &str) -> String {
        match self.handler {
            Some(handler) => handler(name, locale),
            None => placeholder(name),
        }
    }
}

impl fmt::Debug for MissingVarPolicy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MissingVarPolicy")
            .field("custom_handler", &self.handler.is_some())
            .finish()
    }
}

// ============================================================================
// Debug Mode
// ============================================================================

/// Formats the prefix shown when no template was found for a locale.
pub type DebugMissingFormatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Formats the prefix shown when a fallback locale's template was used.
pub type DebugFallbackFormatter = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Which debug prefix applies to a rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugPrefix<'a> {
    /// No template matched at all
    Missing { locale: &'a str },
    /// A template from `used` stood in for `requested`
    Fallback { requested: &'a str, used: &'a str },
}

/// User-overridable debug prefix formatters.
#[derive(Clone)]
pub struct DebugFormatters {
    pub missing: DebugMissingFormatter,
    pub fallback: DebugFallbackFormatter,
}

impl Default for DebugFormatters {
    fn default() -> Self {
        Self {
            missing: Arc::new(|locale| format!("[MISSING: {}] ", locale)),
            fallback: Arc::new(|requested, used| format!("[{} -> {}] ", requested, used)),
        }
    }
}

impl DebugFormatters {
    /// Prefix `text` with the formatted debug marker.
    pub fn apply(&self, prefix: DebugPrefix<'_>, text: &str) -> String {
        let marker = match prefix {
            DebugPrefix::Missing { locale } => (self.missing)(locale),
            DebugPrefix::Fallback { requested, used } => (self.fallback)(requested, used),
        };
        format!("{}{}", marker, text)
    }
}

impl fmt::Debug for DebugFormatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugFormatters").finish_non_exhaustive()
    }
}
