//! Number Formatting
//!
//! Locale-aware decimal, percent, currency and compact number formatting
//! backed by in-house CLDR subset tables.

use crate::plural::{PluralCategory, plural_category};
use crate::{I18nError, Locale, Result};

/// Named or skeleton style of a `{v, number, ...}` element.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberStyle {
    /// Up to 3 fraction digits (`{v, number}`)
    Decimal,
    /// No fraction digits (`integer`)
    Integer,
    /// Multiplied by 100 (`percent`)
    Percent,
    /// Currency with an ISO 4217 code (`currency` defaults to USD)
    Currency(String),
    /// `::`-prefixed skeleton
    Skeleton(NumberSkeleton),
    /// Unrecognized style name, formatted as decimal
    Named(String),
}

impl NumberStyle {
    /// Parse the style argument of a number element.
    pub fn parse(style: Option<&str>) -> Self {
        match style.map(str::trim) {
            None | Some("") | Some("decimal") => Self::Decimal,
            Some("integer") => Self::Integer,
            Some("percent") => Self::Percent,
            Some("currency") => Self::Currency("USD".to_string()),
            Some(s) if s.starts_with("::") => Self::Skeleton(NumberSkeleton::parse(&s[2..])),
            Some(s) => Self::Named(s.to_string()),
        }
    }

    /// Format `n` in this style.
    ///
    /// Fails only for an invalid currency code.
    pub fn format(&self, n: f64, locale: &Locale) -> Result<String> {
        match self {
            Self::Decimal | Self::Named(_) => Ok(NumberFormatter::new().format(n, locale)),
            Self::Integer => Ok(NumberFormatter::new().max_fraction_digits(0).format(n, locale)),
            Self::Percent => Ok(format_percent(n, locale)),
            Self::Currency(code) => Ok(CurrencyFormatter::new(code)?.format(n, locale)),
            Self::Skeleton(skeleton) => skeleton.format(n, locale),
        }
    }
}

// ============================================================================
// Number Formatting
// ============================================================================

/// Number formatting configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatter {
    /// Minimum fraction digits
    pub min_fraction_digits: usize,
    /// Maximum fraction digits
    pub max_fraction_digits: usize,
    /// Use grouping separators
    pub use_grouping: bool,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            use_grouping: true,
        }
    }
}

impl NumberFormatter {
    /// Create a new number formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set minimum fraction digits.
    pub fn min_fraction_digits(mut self, digits: usize) -> Self {
        self.min_fraction_digits = digits;
        self
    }

    /// Set maximum fraction digits.
    pub fn max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Set whether to use grouping separators.
    pub fn use_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }

    /// Format a number for the given locale.
    ///
    /// Rounds half away from zero at `max_fraction_digits`, then trims
    /// trailing zeros down to `min_fraction_digits`.
    pub fn format(&self, n: f64, locale: &Locale) -> String {
        if n.is_nan() {
            return "NaN".to_string();
        }
        if n.is_infinite() {
            return if n > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let symbols = number_symbols(locale);
        let max = self.max_fraction_digits.max(self.min_fraction_digits);
        let (integer_part, mut fraction) = round_digits(n.abs(), max);

        while fraction.len() > self.min_fraction_digits && fraction.ends_with('0') {
            fraction.pop();
        }

        let grouped = if self.use_grouping && integer_part.len() >= symbols.min_grouping + 3 {
            add_grouping(&integer_part, symbols.group)
        } else {
            integer_part.clone()
        };

        let is_zero = integer_part.bytes().all(|b| b == b'0') && fraction.bytes().all(|b| b == b'0');
        let sign = if n < 0.0 && !is_zero { "-" } else { "" };

        if fraction.is_empty() {
            format!("{}{}", sign, grouped)
        } else {
            format!("{}{}{}{}", sign, grouped, symbols.decimal, fraction)
        }
    }
}

/// Round a non-negative finite number to `digits` fraction digits, half away
/// from zero, returning the integer and fraction digit strings.
///
/// Rounding works on the shortest decimal form of `abs`, so `1.005` rounds
/// to `1.01` even though its binary value is slightly below the half.
fn round_digits(abs: f64, digits: usize) -> (String, String) {
    let shortest = format!("{}", abs);
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    if fraction.len() <= digits {
        return (integer.to_string(), format!("{:0<width$}", fraction, width = digits));
    }

    let round_up = fraction.as_bytes()[digits] >= b'5';
    let mut kept: Vec<u8> = integer.bytes().chain(fraction[..digits].bytes()).collect();

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let fraction = String::from_utf8_lossy(&kept[split..]).into_owned();
    let integer = String::from_utf8_lossy(&kept[..split]).into_owned();
    (integer, fraction)
}

/// Format a number for a locale with up to 3 fraction digits.
///
/// # Example
///
/// ```
/// use inline_i18n_core::{format_number, Locale};
///
/// assert_eq!(format_number(1234567.89, &Locale::en_us()), "1,234,567.89");
/// assert_eq!(format_number(1234567.89, &Locale::de_de()), "1.234.567,89");
/// assert_eq!(format_number(1234.5, &Locale::en_us()), "1,234.5");
/// ```
pub fn format_number(n: f64, locale: &Locale) -> String {
    NumberFormatter::new().format(n, locale)
}

/// Format a ratio as a percentage for a locale.
///
/// ```
/// use inline_i18n_core::{format_percent, Locale};
///
/// assert_eq!(format_percent(0.25, &Locale::en_us()), "25%");
/// assert_eq!(format_percent(0.125, &Locale::de_de()), "13\u{a0}%");
/// ```
pub fn format_percent(n: f64, locale: &Locale) -> String {
    let formatted = NumberFormatter::new()
        .max_fraction_digits(0)
        .format(n * 100.0, locale);
    format!("{}{}", formatted, percent_suffix(locale))
}

fn percent_suffix(locale: &Locale) -> &'static str {
    match locale.language.as_str() {
        "de" | "fr" | "es" | "sv" | "nb" | "no" | "fi" | "da" | "cs" | "sk" | "ru" | "uk" => {
            "\u{a0}%"
        }
        _ => "%",
    }
}

// ============================================================================
// Currency Formatting
// ============================================================================

/// Currency formatting configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormatter {
    /// Currency code (ISO 4217)
    pub currency_code: String,
    /// Show currency symbol instead of code
    pub use_symbol: bool,
}

impl CurrencyFormatter {
    /// Create a currency formatter; the code must be three ASCII letters.
    pub fn new(currency_code: &str) -> Result<Self> {
        let code = currency_code.trim();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(I18nError::Format(format!(
                "invalid currency code '{}'",
                currency_code
            )));
        }
        Ok(Self {
            currency_code: code.to_ascii_uppercase(),
            use_symbol: true,
        })
    }

    /// Set whether to use symbol.
    pub fn use_symbol(mut self, use_symbol: bool) -> Self {
        self.use_symbol = use_symbol;
        self
    }

    /// Number of minor-unit digits for the currency.
    pub fn fraction_digits(&self) -> usize {
        match self.currency_code.as_str() {
            "JPY" | "KRW" | "VND" | "CLP" | "ISK" | "UGX" | "PYG" => 0,
            "BHD" | "KWD" | "OMR" | "JOD" | "TND" => 3,
            _ => 2,
        }
    }

    /// Format a currency amount.
    pub fn format(&self, amount: f64, locale: &Locale) -> String {
        let digits = self.fraction_digits();
        let formatted = NumberFormatter::new()
            .min_fraction_digits(digits)
            .max_fraction_digits(digits)
            .format(amount.abs(), locale);

        let sign = if amount < 0.0 && formatted.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
            "-"
        } else {
            ""
        };

        if !self.use_symbol {
            return format!("{}{}\u{a0}{}", sign, formatted, self.currency_code);
        }

        let symbol = currency_symbol(&self.currency_code, locale);
        if symbol_before(locale) {
            format!("{}{}{}", sign, symbol, formatted)
        } else {
            format!("{}{}\u{a0}{}", sign, formatted, symbol)
        }
    }
}

/// Format a currency amount for a locale.
///
/// # Example
///
/// ```
/// use inline_i18n_core::{format_currency, Locale};
///
/// assert_eq!(format_currency(100.0, "USD", &Locale::en_us()).unwrap(), "$100.00");
/// assert_eq!(format_currency(99.99, "EUR", &Locale::de_de()).unwrap(), "99,99\u{a0}€");
/// assert_eq!(format_currency(1500.0, "KRW", &Locale::ko_kr()).unwrap(), "₩1,500");
/// assert!(format_currency(1.0, "DOLLARS", &Locale::en_us()).is_err());
/// ```
pub fn format_currency(amount: f64, currency_code: &str, locale: &Locale) -> Result<String> {
    Ok(CurrencyFormatter::new(currency_code)?.format(amount, locale))
}

fn symbol_before(locale: &Locale) -> bool {
    !matches!(
        locale.language.as_str(),
        "de" | "fr" | "es" | "it" | "pt" | "nl" | "da" | "sv" | "no" | "nb" | "fi" | "pl" | "cs"
            | "sk" | "hu" | "ro" | "bg" | "el" | "ru" | "uk" | "vi"
    ) || (locale.language == "pt" && locale.region.as_deref() == Some("BR"))
        || (locale.language == "nl" && locale.region.as_deref() != Some("BE"))
}

fn currency_symbol<'a>(currency_code: &'a str, locale: &Locale) -> &'a str {
    match (currency_code, locale.language.as_str()) {
        ("USD", "en") if locale.region.as_deref().is_some_and(|r| r != "US") => "US$",
        ("JPY", "ja") => "￥",
        ("CNY", "zh") => "¥",
        ("CNY", _) => "CN¥",
        ("USD", _) => "$",
        ("EUR", _) => "€",
        ("GBP", _) => "£",
        ("JPY", _) => "¥",
        ("KRW", _) => "₩",
        ("INR", _) => "₹",
        ("RUB", "ru") => "₽",
        ("BRL", _) => "R$",
        ("CAD", _) => "CA$",
        ("AUD", _) => "A$",
        ("HKD", _) => "HK$",
        ("MXN", _) => "MX$",
        ("TWD", _) => "NT$",
        ("ILS", _) => "₪",
        ("VND", _) => "₫",
        ("PHP", _) => "₱",
        _ => currency_code,
    }
}

// ============================================================================
// Compact Formatting
// ============================================================================

/// Compact notation display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompactDisplay {
    /// `1.2K`
    #[default]
    Short,
    /// `1.2 thousand`
    Long,
}

/// Compact number formatter (`1.2K`, `1.5 million`, `1.2万`).
///
/// Scaled values below 10 keep two significant digits, larger ones are
/// rounded to an integer. A value that rounds up to the next unit is shown
/// in that unit.
///
/// ```
/// use inline_i18n_core::{CompactDisplay, CompactFormatter, Locale};
///
/// let short = CompactFormatter::new(CompactDisplay::Short);
/// assert_eq!(short.format(1234.0, &Locale::en_us()), "1.2K");
/// assert_eq!(short.format(999_999.0, &Locale::en_us()), "1M");
///
/// let long = CompactFormatter::new(CompactDisplay::Long);
/// assert_eq!(long.format(1_500_000.0, &Locale::en_us()), "1.5 million");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompactFormatter {
    pub display: CompactDisplay,
}

struct CompactUnit {
    power: i32,
    /// `None` means the short form prints the plain number.
    short: Option<&'static str>,
    long_one: &'static str,
    long_other: &'static str,
}

const fn unit(
    power: i32,
    short: Option<&'static str>,
    long_one: &'static str,
    long_other: &'static str,
) -> CompactUnit {
    CompactUnit {
        power,
        short,
        long_one,
        long_other,
    }
}

const EN_UNITS: &[CompactUnit] = &[
    unit(3, Some("K"), " thousand", " thousand"),
    unit(6, Some("M"), " million", " million"),
    unit(9, Some("B"), " billion", " billion"),
    unit(12, Some("T"), " trillion", " trillion"),
];

const DE_UNITS: &[CompactUnit] = &[
    unit(3, None, " Tausend", " Tausend"),
    unit(6, Some("\u{a0}Mio."), " Million", " Millionen"),
    unit(9, Some("\u{a0}Mrd."), " Milliarde", " Milliarden"),
    unit(12, Some("\u{a0}Bio."), " Billion", " Billionen"),
];

const FR_UNITS: &[CompactUnit] = &[
    unit(3, Some("\u{a0}k"), " mille", " mille"),
    unit(6, Some("\u{a0}M"), " million", " millions"),
    unit(9, Some("\u{a0}Md"), " milliard", " milliards"),
    unit(12, Some("\u{a0}Bn"), " billion", " billions"),
];

const ES_UNITS: &[CompactUnit] = &[
    unit(3, Some("\u{a0}mil"), " mil", " mil"),
    unit(6, Some("\u{a0}M"), " millón", " millones"),
    unit(9, Some("\u{a0}mil\u{a0}M"), " mil millones", " mil millones"),
    unit(12, Some("\u{a0}B"), " billón", " billones"),
];

const JA_UNITS: &[CompactUnit] = &[
    unit(4, Some("万"), "万", "万"),
    unit(8, Some("億"), "億", "億"),
    unit(12, Some("兆"), "兆", "兆"),
];

const ZH_UNITS: &[CompactUnit] = &[
    unit(4, Some("万"), "万", "万"),
    unit(8, Some("亿"), "亿", "亿"),
    unit(12, Some("万亿"), "万亿", "万亿"),
];

const KO_UNITS: &[CompactUnit] = &[
    unit(3, Some("천"), "천", "천"),
    unit(4, Some("만"), "만", "만"),
    unit(8, Some("억"), "억", "억"),
    unit(12, Some("조"), "조", "조"),
];

fn compact_units(locale: &Locale) -> &'static [CompactUnit] {
    match locale.language.as_str() {
        "de" => DE_UNITS,
        "fr" => FR_UNITS,
        "es" => ES_UNITS,
        "ja" => JA_UNITS,
        "zh" => ZH_UNITS,
        "ko" => KO_UNITS,
        _ => EN_UNITS,
    }
}

/// Fraction digits that keep two significant digits below 10, capped at 15.
fn compact_fraction_digits(scaled: f64) -> usize {
    if scaled >= 10.0 || scaled == 0.0 {
        0
    } else {
        ((1 - scaled.log10().floor() as i32).max(0) as usize).min(15)
    }
}

fn round_to(value: f64, digits: usize) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

impl CompactFormatter {
    /// Create a compact formatter.
    pub fn new(display: CompactDisplay) -> Self {
        Self { display }
    }

    /// Format a number in compact notation.
    pub fn format(&self, n: f64, locale: &Locale) -> String {
        if !n.is_finite() {
            return format_number(n, locale);
        }

        let units = compact_units(locale);
        let abs = n.abs();
        let mut index = units.iter().rposition(|u| abs >= 10f64.powi(u.power));

        loop {
            let divisor = index.map_or(1.0, |i| 10f64.powi(units[i].power));
            let scaled = abs / divisor;
            let digits = compact_fraction_digits(scaled);
            let rounded = round_to(scaled, digits);

            let next = index.map_or(0, |i| i + 1);
            if let Some(next_unit) = units.get(next) {
                if rounded * divisor >= 10f64.powi(next_unit.power) {
                    index = Some(next);
                    continue;
                }
            }

            let signed = if n < 0.0 { -rounded } else { rounded };
            let number = NumberFormatter::new()
                .max_fraction_digits(digits)
                .use_grouping(abs >= 10_000.0)
                .format(signed, locale);

            let Some(unit) = index.map(|i| &units[i]) else {
                return number;
            };

            return match self.display {
                CompactDisplay::Short => match unit.short {
                    Some(suffix) => format!("{}{}", number, suffix),
                    None => format_number(n.round(), locale),
                },
                CompactDisplay::Long => {
                    let suffix = match plural_category(rounded, locale) {
                        PluralCategory::One => unit.long_one,
                        _ => unit.long_other,
                    };
                    format!("{}{}", number, suffix)
                }
            };
        }
    }
}

/// Format a number in short compact notation.
pub fn format_compact(n: f64, locale: &Locale) -> String {
    CompactFormatter::new(CompactDisplay::Short).format(n, locale)
}

// ============================================================================
// Skeletons
// ============================================================================

/// Subset of ICU number skeletons (`::percent .00`, `::currency/EUR`).
///
/// Unknown tokens are ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberSkeleton {
    pub percent: bool,
    pub currency: Option<String>,
    pub min_fraction_digits: Option<usize>,
    pub max_fraction_digits: Option<usize>,
    pub grouping: bool,
    pub compact: Option<CompactDisplay>,
    pub scale: Option<f64>,
}

impl NumberSkeleton {
    /// Parse the text after `::`.
    pub fn parse(skeleton: &str) -> Self {
        let mut parsed = Self {
            grouping: true,
            ..Self::default()
        };

        for token in skeleton.split_whitespace() {
            match token {
                "percent" | "%" => parsed.percent = true,
                "integer" | "precision-integer" => {
                    parsed.min_fraction_digits = Some(0);
                    parsed.max_fraction_digits = Some(0);
                }
                "group-off" | ",_" => parsed.grouping = false,
                "compact-short" | "K" => parsed.compact = Some(CompactDisplay::Short),
                "compact-long" | "KK" => parsed.compact = Some(CompactDisplay::Long),
                _ if token.starts_with("currency/") => {
                    parsed.currency = Some(token["currency/".len()..].to_string());
                }
                _ if token.starts_with("scale/") => {
                    parsed.scale = token["scale/".len()..].parse().ok();
                }
                _ if token.starts_with('.') => {
                    let precision = &token[1..];
                    let zeros = precision.chars().take_while(|&c| c == '0').count();
                    let hashes = precision[zeros..].chars().take_while(|&c| c == '#').count();
                    if zeros + hashes == precision.len() {
                        parsed.min_fraction_digits = Some(zeros);
                        parsed.max_fraction_digits = Some(zeros + hashes);
                    }
                }
                _ => {}
            }
        }

        parsed
    }

    /// Format `n` according to the skeleton.
    pub fn format(&self, n: f64, locale: &Locale) -> Result<String> {
        let n = n * self.scale.unwrap_or(1.0);

        if let Some(display) = self.compact {
            return Ok(CompactFormatter::new(display).format(n, locale));
        }

        if let Some(ref code) = self.currency {
            let currency = CurrencyFormatter::new(code)?;
            if self.min_fraction_digits.is_none() && self.max_fraction_digits.is_none() {
                return Ok(currency.format(n, locale));
            }
        }

        let (value, default_max) = if self.percent { (n * 100.0, 0) } else { (n, 3) };
        let min = self.min_fraction_digits.unwrap_or(0);
        let max = self.max_fraction_digits.unwrap_or(default_max).max(min);
        let number = NumberFormatter::new()
            .min_fraction_digits(min)
            .max_fraction_digits(max)
            .use_grouping(self.grouping)
            .format(value, locale);

        Ok(match (&self.currency, self.percent) {
            (Some(code), _) => {
                let code = code.to_ascii_uppercase();
                let symbol = currency_symbol(&code, locale);
                if symbol_before(locale) {
                    match number.strip_prefix('-') {
                        Some(rest) => format!("-{}{}", symbol, rest),
                        None => format!("{}{}", symbol, number),
                    }
                } else {
                    format!("{}\u{a0}{}", number, symbol)
                }
            }
            (None, true) => format!("{}{}", number, percent_suffix(locale)),
            (None, false) => number,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

struct NumberSymbols {
    decimal: &'static str,
    group: &'static str,
    /// Integer digits required before grouping kicks in, minus 3.
    min_grouping: usize,
}

/// Decimal and grouping separators for a locale.
fn number_symbols(locale: &Locale) -> NumberSymbols {
    let (decimal, group) = match locale.language.as_str() {
        // Comma decimal, period grouping
        "de" | "es" | "it" | "pt" | "nl" | "da" | "ro" | "el" | "tr" | "id" | "vi" | "hr"
        | "sl" => (",", "."),

        // Comma decimal, narrow no-break space grouping
        "fr" => (",", "\u{202f}"),

        // Comma decimal, no-break space grouping
        "ru" | "uk" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "no" | "bg" | "hu" => {
            (",", "\u{a0}")
        }

        // Period decimal, comma grouping (English-like)
        _ => (".", ","),
    };

    // Spanish and Polish leave four-digit numbers ungrouped.
    let min_grouping = match locale.language.as_str() {
        "es" | "pl" => 2,
        _ => 1,
    };

    NumberSymbols {
        decimal,
        group,
        min_grouping,
    }
}

/// Add grouping separators to an integer digit string.
fn add_grouping(s: &str, sep: &str) -> String {
    let len = s.len();
    if len <= 3 {
        return s.to_string();
    }

    let mut result = String::with_capacity(len + (len - 1) / 3 * sep.len());
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(sep);
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn de() -> Locale {
        Locale::de_de()
    }

    #[test]
    fn test_format_number_us() {
        let locale = Locale::en_us();
        assert_eq!(format_number(1234.56, &locale), "1,234.56");
        assert_eq!(format_number(1234.5, &locale), "1,234.5");
        assert_eq!(format_number(1000.0, &locale), "1,000");
        assert_eq!(format_number(0.1234, &locale), "0.123");
        assert_eq!(format_number(-42.0, &locale), "-42");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        let locale = Locale::en_us();
        assert_eq!(format_number(1.10, &locale), "1.1");
        assert_eq!(format_number(2.0004, &locale), "2");
        assert_eq!(format_number(-0.0001, &locale), "0");
    }

    #[test]
    fn test_format_number_locales() {
        assert_eq!(format_number(1234.56, &de()), "1.234,56");
        assert_eq!(format_number(1234567.89, &Locale::fr_fr()), "1\u{202f}234\u{202f}567,89");
        let es = Locale::new("es", None::<&str>);
        assert_eq!(format_number(1234.0, &es), "1234");
        assert_eq!(format_number(12345.0, &es), "12.345");
    }

    #[test]
    fn test_integer_rounds_half_away_from_zero() {
        let locale = Locale::en_us();
        let integer = NumberStyle::Integer;
        assert_eq!(integer.format(42.7, &locale).unwrap(), "43");
        assert_eq!(integer.format(42.5, &locale).unwrap(), "43");
        assert_eq!(integer.format(-2.5, &locale).unwrap(), "-3");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY, &Locale::en_us()), "∞");
        assert_eq!(format_number(f64::NAN, &Locale::en_us()), "NaN");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.25, &Locale::en_us()), "25%");
        assert_eq!(format_percent(1.5, &Locale::en_us()), "150%");
        assert_eq!(format_percent(0.25, &Locale::fr_fr()), "25\u{a0}%");
    }

    #[test]
    fn test_format_currency() {
        let us = Locale::en_us();
        assert_eq!(format_currency(100.0, "USD", &us).unwrap(), "$100.00");
        assert_eq!(format_currency(-5.5, "usd", &us).unwrap(), "-$5.50");
        assert_eq!(format_currency(1234.5, "JPY", &us).unwrap(), "¥1,235");
        assert_eq!(format_currency(1234.5, "JPY", &Locale::ja()).unwrap(), "￥1,235");
        assert_eq!(format_currency(99.99, "GBP", &Locale::en_gb()).unwrap(), "£99.99");
        assert_eq!(format_currency(10.0, "CHF", &us).unwrap(), "CHF10.00");
    }

    #[test]
    fn test_rounding_uses_decimal_digits() {
        let us = Locale::en_us();
        assert_eq!(format_currency(1.005, "USD", &us).unwrap(), "$1.01");
        assert_eq!(format_currency(-1.005, "USD", &us).unwrap(), "-$1.01");
        assert_eq!(format_number(1.0005, &us), "1.001");
        assert_eq!(format_number(9.9995, &us), "10");
        assert_eq!(format_number(0.0005, &us), "0.001");
        assert_eq!(format_number(1e21, &us), "1,000,000,000,000,000,000,000");
    }

    #[test]
    fn test_compact_subnormal() {
        let en = Locale::en_us();
        assert_eq!(CompactFormatter::default().format(1e-320, &en), "0");
        assert_eq!(CompactFormatter::new(CompactDisplay::Long).format(-1e-320, &en), "0");
    }

    #[test]
    fn test_invalid_currency_code() {
        assert!(CurrencyFormatter::new("US").is_err());
        assert!(CurrencyFormatter::new("U$D").is_err());
        assert!(NumberStyle::Currency("EURO".into()).format(1.0, &de()).is_err());
    }

    #[test]
    fn test_compact_short() {
        let en = Locale::en_us();
        let short = CompactFormatter::default();
        assert_eq!(short.format(999.0, &en), "999");
        assert_eq!(short.format(1000.0, &en), "1K");
        assert_eq!(short.format(1234.0, &en), "1.2K");
        assert_eq!(short.format(12_345.0, &en), "12K");
        assert_eq!(short.format(1_500_000.0, &en), "1.5M");
        assert_eq!(short.format(2_000_000_000.0, &en), "2B");
        assert_eq!(short.format(-1234.0, &en), "-1.2K");
        assert_eq!(short.format(1.234, &en), "1.2");
    }

    #[test]
    fn test_compact_rounds_into_next_unit() {
        let short = CompactFormatter::default();
        assert_eq!(short.format(999.9, &Locale::en_us()), "1K");
        assert_eq!(short.format(99_999_999.0, &Locale::ja()), "1億");
    }

    #[test]
    fn test_compact_long() {
        let long = CompactFormatter::new(CompactDisplay::Long);
        let en = Locale::en_us();
        assert_eq!(long.format(1234.0, &en), "1.2 thousand");
        assert_eq!(long.format(3_000_000.0, &en), "3 million");
        assert_eq!(long.format(1_000_000.0, &de()), "1 Million");
        assert_eq!(long.format(2_000_000.0, &de()), "2 Millionen");
    }

    #[test]
    fn test_compact_cjk() {
        let short = CompactFormatter::default();
        assert_eq!(short.format(12_345.0, &Locale::ja()), "1.2万");
        assert_eq!(short.format(150_000_000.0, &Locale::new("zh", None::<&str>)), "1.5亿");
        assert_eq!(short.format(1234.0, &Locale::ko_kr()), "1.2천");
        assert_eq!(short.format(1234.0, &Locale::ja()), "1234");
    }

    #[test]
    fn test_compact_de_thousands_are_plain() {
        let short = CompactFormatter::default();
        assert_eq!(short.format(1234.0, &de()), "1.234");
        assert_eq!(short.format(1_500_000.0, &de()), "1,5\u{a0}Mio.");
    }

    #[test]
    fn test_number_style_parse() {
        assert_eq!(NumberStyle::parse(None), NumberStyle::Decimal);
        assert_eq!(NumberStyle::parse(Some(" percent ")), NumberStyle::Percent);
        assert_eq!(
            NumberStyle::parse(Some("currency")),
            NumberStyle::Currency("USD".into())
        );
        assert_eq!(
            NumberStyle::parse(Some("fancy")),
            NumberStyle::Named("fancy".into())
        );
        assert!(matches!(
            NumberStyle::parse(Some("::percent")),
            NumberStyle::Skeleton(_)
        ));
    }

    #[test]
    fn test_skeletons() {
        let en = Locale::en_us();
        let fmt = |s: &str, n: f64| NumberSkeleton::parse(s).format(n, &en).unwrap();

        assert_eq!(fmt("percent", 0.256), "26%");
        assert_eq!(fmt("percent .0", 0.256), "25.6%");
        assert_eq!(fmt(".00", 3.0), "3.00");
        assert_eq!(fmt(".0#", 3.456), "3.46");
        assert_eq!(fmt("group-off", 12345.0), "12345");
        assert_eq!(fmt("currency/EUR", 12.5), "€12.50");
        assert_eq!(fmt("currency/EUR .0", 12.5), "€12.5");
        assert_eq!(fmt("compact-short", 4200.0), "4.2K");
        assert_eq!(fmt("scale/100", 0.5), "50");
        assert_eq!(fmt("unknown-token", 1.5), "1.5");
    }

    #[test]
    fn test_add_grouping() {
        assert_eq!(add_grouping("1234567", ","), "1,234,567");
        assert_eq!(add_grouping("123", ","), "123");
        assert_eq!(add_grouping("1234", " "), "1 234");
    }
}
