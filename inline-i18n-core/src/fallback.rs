//! Locale fallback chains

use crate::config::I18nConfig;
use crate::locale::parent_locale;

/// Build the ordered list of locales to try for `locale`.
///
/// A custom chain configured for exactly `locale` is returned verbatim after
/// the locale itself. Otherwise parents are derived (when enabled) and the
/// configured final fallback is appended if not already present.
///
/// # Example
///
/// ```
/// use inline_i18n_core::{build_fallback_chain, I18nConfig};
///
/// let config = I18nConfig::default();
/// assert_eq!(build_fallback_chain("zh-TW", &config), ["zh-TW", "zh", "en"]);
/// assert_eq!(build_fallback_chain("en-US", &config), ["en-US", "en"]);
/// assert_eq!(build_fallback_chain("en", &config), ["en"]);
///
/// let config = config.with_fallback_chain("pt-BR", ["pt", "es", "en"]);
/// assert_eq!(build_fallback_chain("pt-BR", &config), ["pt-BR", "pt", "es", "en"]);
/// ```
pub fn build_fallback_chain(locale: &str, config: &I18nConfig) -> Vec<String> {
    if let Some(custom) = config.fallback_chain.get(locale) {
        let mut chain = Vec::with_capacity(custom.len() + 1);
        chain.push(locale.to_string());
        chain.extend(custom.iter().cloned());
        return chain;
    }

    let mut chain = vec![locale.to_string()];

    if config.auto_parent_locale {
        let mut current = locale;
        while let Some(parent) = parent_locale(current) {
            if chain.iter().any(|l| l == parent) {
                break;
            }
            chain.push(parent.to_string());
            current = parent;
        }
    }

    let last = &config.fallback_locale;
    if !last.is_empty() && !chain.iter().any(|l| l == last) {
        chain.push(last.clone());
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_derivation() {
        let config = I18nConfig::default();
        assert_eq!(build_fallback_chain("zh-TW", &config), ["zh-TW", "zh", "en"]);
        assert_eq!(
            build_fallback_chain("zh-Hant-TW", &config),
            ["zh-Hant-TW", "zh", "en"]
        );
    }

    #[test]
    fn test_no_duplicate_final_fallback() {
        let config = I18nConfig::default();
        assert_eq!(build_fallback_chain("en", &config), ["en"]);
        assert_eq!(build_fallback_chain("en-GB", &config), ["en-GB", "en"]);
    }

    #[test]
    fn test_auto_parent_disabled() {
        let config = I18nConfig::default().with_auto_parent_locale(false);
        assert_eq!(build_fallback_chain("zh-TW", &config), ["zh-TW", "en"]);
    }

    #[test]
    fn test_custom_chain_is_verbatim() {
        let config = I18nConfig::default().with_fallback_chain("pt-BR", ["pt", "pt", "en"]);
        assert_eq!(
            build_fallback_chain("pt-BR", &config),
            ["pt-BR", "pt", "pt", "en"]
        );
        // Only the exact tag is overridden.
        assert_eq!(build_fallback_chain("pt-PT", &config), ["pt-PT", "pt", "en"]);
    }

    #[test]
    fn test_empty_final_fallback() {
        let config = I18nConfig::default().with_fallback_locale("");
        assert_eq!(build_fallback_chain("ko-KR", &config), ["ko-KR", "ko"]);
    }

    #[test]
    fn test_custom_final_fallback() {
        let config = I18nConfig::default().with_fallback_locale("ko");
        assert_eq!(build_fallback_chain("ja-JP", &config), ["ja-JP", "ja", "ko"]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_locale() -> impl Strategy<Value = String> {
            "[a-z]{2,3}(-[A-Z][a-z]{3})?(-[A-Z]{2})?"
        }

        proptest! {
            #[test]
            fn chain_starts_with_locale(locale in arb_locale(), auto in any::<bool>()) {
                let config = I18nConfig::default().with_auto_parent_locale(auto);
                let chain = build_fallback_chain(&locale, &config);
                prop_assert_eq!(&chain[0], &locale);
            }

            #[test]
            fn derived_chain_has_no_duplicates(locale in arb_locale(), last in arb_locale()) {
                let config = I18nConfig::default().with_fallback_locale(last);
                let chain = build_fallback_chain(&locale, &config);
                for (i, l) in chain.iter().enumerate() {
                    prop_assert!(!chain[i + 1..].contains(l));
                }
            }
        }
    }
}
