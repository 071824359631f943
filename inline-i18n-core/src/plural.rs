//! Pluralization Rules
//!
//! CLDR plural rules for cardinal (`plural`) and ordinal (`selectordinal`)
//! selection. Different languages have different plural forms - English has
//! 2 cardinal forms (one, other) and 4 ordinal forms, Russian has 3 cardinal
//! forms and Arabic has 6.

use crate::Locale;

/// CLDR plural categories.
///
/// Not all languages use all categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// Zero items (Arabic, Welsh)
    Zero,
    /// One item (most languages)
    One,
    /// Two items (Arabic, Welsh), "2nd" in English ordinals
    Two,
    /// Few items (Slavic languages), "3rd" in English ordinals
    Few,
    /// Many items (Slavic languages, Arabic)
    Many,
    /// All other cases
    Other,
}

impl PluralCategory {
    /// Selector keyword for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cardinal (`plural`) or ordinal (`selectordinal`) selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PluralType {
    #[default]
    Cardinal,
    Ordinal,
}

/// Plural rules for a specific language.
pub trait PluralRules {
    /// Get the plural category for a number.
    fn category(&self, n: f64) -> PluralCategory;

    /// Get all categories used by this language.
    fn categories(&self) -> &[PluralCategory];
}

/// Get the cardinal plural category for a number in a locale.
///
/// # Example
///
/// ```
/// use inline_i18n_core::{plural_category, PluralCategory, Locale};
///
/// assert_eq!(plural_category(1, &Locale::en()), PluralCategory::One);
/// assert_eq!(plural_category(2, &Locale::en()), PluralCategory::Other);
/// assert_eq!(plural_category(0, &Locale::en()), PluralCategory::Other);
/// ```
pub fn plural_category(n: impl Into<f64>, locale: &Locale) -> PluralCategory {
    cardinal_rules(&locale.language).category(n.into())
}

/// Get the ordinal plural category for a number in a locale.
///
/// ```
/// use inline_i18n_core::{ordinal_category, PluralCategory, Locale};
///
/// assert_eq!(ordinal_category(1, &Locale::en()), PluralCategory::One);
/// assert_eq!(ordinal_category(22, &Locale::en()), PluralCategory::Two);
/// assert_eq!(ordinal_category(13, &Locale::en()), PluralCategory::Other);
/// ```
pub fn ordinal_category(n: impl Into<f64>, locale: &Locale) -> PluralCategory {
    ordinal_rules(&locale.language).category(n.into())
}

/// Select a category for a raw locale tag.
///
/// Tags that do not parse use the root rules, where everything is `other`
/// except English-style `one` for cardinals.
pub fn select(n: f64, locale: &str, plural_type: PluralType) -> PluralCategory {
    let language = Locale::parse(locale)
        .map(|l| l.language)
        .unwrap_or_default();
    match plural_type {
        PluralType::Cardinal => cardinal_rules(&language).category(n),
        PluralType::Ordinal => ordinal_rules(&language).category(n),
    }
}

fn cardinal_rules(language: &str) -> &'static dyn PluralRules {
    match language {
        // East Asian languages - no plural forms
        "ja" | "ko" | "zh" | "vi" | "th" | "id" | "ms" | "lo" | "my" | "km" => &NoPlurals,

        // 0 and 1 are singular
        "fr" | "pt" => &FrenchPlurals,

        // Fractions below 1 and exactly 1 are singular
        "hi" | "fa" | "bn" | "gu" | "kn" | "zu" | "am" => &HindiPlurals,

        // Slavic languages with complex plurals
        "ru" | "uk" | "be" => &RussianPlurals,
        "pl" => &PolishPlurals,
        "cs" | "sk" => &CzechPlurals,

        // Celtic languages
        "cy" => &WelshPlurals,

        // Arabic
        "ar" => &ArabicPlurals,

        // Germanic, Romance (except French), and most others
        _ => &DefaultPlurals,
    }
}

fn ordinal_rules(language: &str) -> &'static dyn PluralRules {
    match language {
        "en" => &EnglishOrdinals,
        "fr" => &FrenchOrdinals,
        "it" => &ItalianOrdinals,
        _ => &NoPlurals,
    }
}

fn integer(n: f64) -> Option<u64> {
    if n.is_finite() && n.fract() == 0.0 {
        Some(n.abs() as u64)
    } else {
        None
    }
}

// ============================================================================
// Cardinal Rule Implementations
// ============================================================================

/// Default pluralization (English-like): 1 = one, else other.
struct DefaultPlurals;

impl PluralRules for DefaultPlurals {
    fn category(&self, n: f64) -> PluralCategory {
        match integer(n) {
            Some(1) => PluralCategory::One,
            _ => PluralCategory::Other,
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[PluralCategory::One, PluralCategory::Other]
    }
}

/// No plural forms (Chinese, Japanese, Korean, etc.).
struct NoPlurals;

impl PluralRules for NoPlurals {
    fn category(&self, _n: f64) -> PluralCategory {
        PluralCategory::Other
    }

    fn categories(&self) -> &[PluralCategory] {
        &[PluralCategory::Other]
    }
}

/// French pluralization: integer part 0 or 1 = one, else other.
struct FrenchPlurals;

impl PluralRules for FrenchPlurals {
    fn category(&self, n: f64) -> PluralCategory {
        if n.is_finite() && n.abs() < 2.0 {
            PluralCategory::One
        } else {
            PluralCategory::Other
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[PluralCategory::One, PluralCategory::Other]
    }
}

/// Hindi pluralization (also Persian, Bengali): integer part 0 or exactly
/// 1 = one, else other.
struct HindiPlurals;

impl PluralRules for HindiPlurals {
    fn category(&self, n: f64) -> PluralCategory {
        if n.is_finite() && n.abs() <= 1.0 {
            PluralCategory::One
        } else {
            PluralCategory::Other
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[PluralCategory::One, PluralCategory::Other]
    }
}

/// Russian pluralization (also Ukrainian, Belarusian).
///
/// - one: 1, 21, 31, 41, 51, 61, 71, 81, 101, 1001, ...
/// - few: 2-4, 22-24, 32-34, ...
/// - many: 0, 5-20, 25-30, 35-40, ...
struct RussianPlurals;

impl PluralRules for RussianPlurals {
    fn category(&self, n: f64) -> PluralCategory {
        let Some(i) = integer(n) else {
            return PluralCategory::Other;
        };

        let mod10 = i % 10;
        let mod100 = i % 100;

        if mod10 == 1 && mod100 != 11 {
            PluralCategory::One
        } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
            PluralCategory::Few
        } else {
            PluralCategory::Many
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[
            PluralCategory::One,
            PluralCategory::Few,
            PluralCategory::Many,
            PluralCategory::Other,
        ]
    }
}

/// Polish pluralization.
///
/// - one: 1
/// - few: 2-4, 22-24, 32-34, ...
/// - many: 0, 5-21, 25-31, ...
struct PolishPlurals;

impl PluralRules for PolishPlurals {
    fn category(&self, n: f64) -> PluralCategory {
        let Some(i) = integer(n) else {
            return PluralCategory::Other;
        };

        if i == 1 {
            return PluralCategory::One;
        }

        let mod10 = i % 10;
        let mod100 = i % 100;

        if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
            PluralCategory::Few
        } else {
            PluralCategory::Many
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[
            PluralCategory::One,
            PluralCategory::Few,
            PluralCategory::Many,
            PluralCategory::Other,
        ]
    }
}

/// Czech/Slovak pluralization.
///
/// - one: 1
/// - few: 2-4
/// - many: fractions
/// - other: 0, 5+
struct CzechPlurals;

impl PluralRules for CzechPlurals {
    fn category(&self, n: f64) -> PluralCategory {
        match integer(n) {
            None => PluralCategory::Many,
            Some(1) => PluralCategory::One,
            Some(2..=4) => PluralCategory::Few,
            Some(_) => PluralCategory::Other,
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[
            PluralCategory::One,
            PluralCategory::Few,
            PluralCategory::Many,
            PluralCategory::Other,
        ]
    }
}

/// Welsh pluralization.
///
/// - zero: 0, one: 1, two: 2, few: 3, many: 6, other: rest
struct WelshPlurals;

impl PluralRules for WelshPlurals {
    fn category(&self, n: f64) -> PluralCategory {
        match integer(n) {
            Some(0) => PluralCategory::Zero,
            Some(1) => PluralCategory::One,
            Some(2) => PluralCategory::Two,
            Some(3) => PluralCategory::Few,
            Some(6) => PluralCategory::Many,
            _ => PluralCategory::Other,
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[
            PluralCategory::Zero,
            PluralCategory::One,
            PluralCategory::Two,
            PluralCategory::Few,
            PluralCategory::Many,
            PluralCategory::Other,
        ]
    }
}

/// Arabic pluralization (most complex).
///
/// - zero: 0
/// - one: 1
/// - two: 2
/// - few: 3-10, 103-110, ...
/// - many: 11-99, 111-199, ...
/// - other: 100-102, 200-202, ...
struct ArabicPlurals;

impl PluralRules for ArabicPlurals {
    fn category(&self, n: f64) -> PluralCategory {
        let Some(i) = integer(n) else {
            return PluralCategory::Other;
        };
        let mod100 = i % 100;

        match i {
            0 => PluralCategory::Zero,
            1 => PluralCategory::One,
            2 => PluralCategory::Two,
            _ if (3..=10).contains(&mod100) => PluralCategory::Few,
            _ if (11..=99).contains(&mod100) => PluralCategory::Many,
            _ => PluralCategory::Other,
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[
            PluralCategory::Zero,
            PluralCategory::One,
            PluralCategory::Two,
            PluralCategory::Few,
            PluralCategory::Many,
            PluralCategory::Other,
        ]
    }
}

// ============================================================================
// Ordinal Rule Implementations
// ============================================================================

/// English ordinals: 1st, 2nd, 3rd, 4th, 11th-13th, 21st, ...
struct EnglishOrdinals;

impl PluralRules for EnglishOrdinals {
    fn category(&self, n: f64) -> PluralCategory {
        let Some(i) = integer(n) else {
            return PluralCategory::Other;
        };
        let mod10 = i % 10;
        let mod100 = i % 100;

        match (mod10, mod100) {
            (1, m) if m != 11 => PluralCategory::One,
            (2, m) if m != 12 => PluralCategory::Two,
            (3, m) if m != 13 => PluralCategory::Few,
            _ => PluralCategory::Other,
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[
            PluralCategory::One,
            PluralCategory::Two,
            PluralCategory::Few,
            PluralCategory::Other,
        ]
    }
}

/// French ordinals: 1er, 2e, ...
struct FrenchOrdinals;

impl PluralRules for FrenchOrdinals {
    fn category(&self, n: f64) -> PluralCategory {
        match integer(n) {
            Some(1) => PluralCategory::One,
            _ => PluralCategory::Other,
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[PluralCategory::One, PluralCategory::Other]
    }
}

/// Italian ordinals: l'11°, l'8°, l'80°, l'800° take "many".
struct ItalianOrdinals;

impl PluralRules for ItalianOrdinals {
    fn category(&self, n: f64) -> PluralCategory {
        match integer(n) {
            Some(8 | 11 | 80 | 800) => PluralCategory::Many,
            _ => PluralCategory::Other,
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[PluralCategory::Many, PluralCategory::Other]
    }
}
