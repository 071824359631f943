//! Relative Time Formatting
//!
//! Picks a unit for the distance between a timestamp and "now" and phrases
//! it the way `Intl.RelativeTimeFormat` does with `numeric: "auto"`
//! ("yesterday", "in 2 hours", "3일 전").

use crate::format::format_number;
use crate::plural::{PluralCategory, plural_category};
use crate::Locale;
use chrono::{DateTime, Utc};

/// Width of the phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RelativeTimeStyle {
    #[default]
    Long,
    Short,
    Narrow,
}

impl RelativeTimeStyle {
    /// Parse a style keyword; anything unknown is `Long`.
    pub fn parse(style: Option<&str>) -> Self {
        match style.map(str::trim) {
            Some("short") => Self::Short,
            Some("narrow") => Self::Narrow,
            _ => Self::Long,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
            Self::Narrow => "narrow",
        }
    }
}

/// Unit a relative time is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeTimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// `Math.round`: halves go toward positive infinity.
fn js_round(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Choose the unit and signed amount for a difference in milliseconds
/// (`target - now`).
///
/// ```
/// use inline_i18n_core::{select_unit, RelativeTimeUnit};
///
/// assert_eq!(select_unit(-45_000.0), (-45, RelativeTimeUnit::Second));
/// assert_eq!(select_unit(2.0 * 3_600_000.0), (2, RelativeTimeUnit::Hour));
/// assert_eq!(select_unit(-3.0 * 86_400_000.0), (-3, RelativeTimeUnit::Day));
/// ```
pub fn select_unit(diff_ms: f64) -> (i64, RelativeTimeUnit) {
    let seconds = js_round(diff_ms / 1000.0);
    if seconds.abs() < 60.0 {
        return (seconds as i64, RelativeTimeUnit::Second);
    }

    let minutes = js_round(seconds / 60.0);
    if minutes.abs() < 60.0 {
        return (minutes as i64, RelativeTimeUnit::Minute);
    }

    let hours = js_round(minutes / 60.0);
    if hours.abs() < 24.0 {
        return (hours as i64, RelativeTimeUnit::Hour);
    }

    let days = js_round(hours / 24.0);
    if days.abs() < 7.0 {
        return (days as i64, RelativeTimeUnit::Day);
    }

    let weeks = js_round(days / 7.0);
    if weeks.abs() < 4.0 {
        return (weeks as i64, RelativeTimeUnit::Week);
    }

    let months = js_round(days / 30.0);
    if months.abs() < 12.0 {
        return (months as i64, RelativeTimeUnit::Month);
    }

    (js_round(days / 365.0) as i64, RelativeTimeUnit::Year)
}

/// Relative time formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelativeTimeFormatter {
    pub style: RelativeTimeStyle,
}

impl RelativeTimeFormatter {
    pub fn new(style: RelativeTimeStyle) -> Self {
        Self { style }
    }

    /// Phrase a signed amount of `unit` (negative is past).
    pub fn format(&self, value: i64, unit: RelativeTimeUnit, locale: &Locale) -> String {
        let language = locale.language.as_str();
        if let Some(text) = auto_phrase(language, self.style, unit, value) {
            return text.to_string();
        }

        let past = value < 0;
        let count = value.unsigned_abs() as f64;
        let number = format_number(count, locale);
        let one = plural_category(count, locale) == PluralCategory::One;

        match language {
            "ko" => format!("{}{} {}", number, ko_unit(unit), if past { "전" } else { "후" }),
            "ja" => format!("{}{}{}", number, ja_unit(unit), if past { "前" } else { "後" }),
            "zh" => format!("{}{}{}", number, zh_unit(unit), if past { "前" } else { "后" }),
            "de" => {
                let word = de_unit(unit, self.style, one);
                if past {
                    format!("vor {} {}", number, word)
                } else {
                    format!("in {} {}", number, word)
                }
            }
            "fr" => {
                let word = fr_unit(unit, self.style, one);
                if past {
                    format!("il y a {} {}", number, word)
                } else {
                    format!("dans {} {}", number, word)
                }
            }
            "es" => {
                let word = es_unit(unit, self.style, one);
                if past {
                    format!("hace {} {}", number, word)
                } else {
                    format!("dentro de {} {}", number, word)
                }
            }
            _ => {
                let word = en_unit(unit, self.style, one);
                let spacer = if self.style == RelativeTimeStyle::Narrow { "" } else { " " };
                if past {
                    format!("{}{}{} ago", number, spacer, word)
                } else {
                    format!("in {}{}{}", number, spacer, word)
                }
            }
        }
    }

    /// Phrase the distance from `now` to `target`.
    pub fn format_between(&self, target: &DateTime<Utc>, now: &DateTime<Utc>, locale: &Locale) -> String {
        let diff_ms = (*target - *now).num_milliseconds() as f64;
        let (value, unit) = select_unit(diff_ms);
        self.format(value, unit, locale)
    }
}

/// Format `target` relative to `now`.
///
/// ```
/// use chrono::{Duration, Utc};
/// use inline_i18n_core::{format_relative_time, Locale, RelativeTimeStyle};
///
/// let now = Utc::now();
/// let en = Locale::en_us();
/// assert_eq!(
///     format_relative_time(&(now - Duration::days(3)), &now, RelativeTimeStyle::Long, &en),
///     "3 days ago"
/// );
/// assert_eq!(
///     format_relative_time(&(now - Duration::days(1)), &now, RelativeTimeStyle::Long, &en),
///     "yesterday"
/// );
/// ```
pub fn format_relative_time(
    target: &DateTime<Utc>,
    now: &DateTime<Utc>,
    style: RelativeTimeStyle,
    locale: &Locale,
) -> String {
    RelativeTimeFormatter::new(style).format_between(target, now, locale)
}

// ============================================================================
// Phrase tables
// ============================================================================

fn auto_phrase(
    language: &str,
    style: RelativeTimeStyle,
    unit: RelativeTimeUnit,
    value: i64,
) -> Option<&'static str> {
    use RelativeTimeUnit::*;

    let abbreviated = style != RelativeTimeStyle::Long;
    let text = match (language, unit, value) {
        ("ko", Second, 0) => "지금",
        ("ko", Day, -2) => "그저께",
        ("ko", Day, -1) => "어제",
        ("ko", Day, 0) => "오늘",
        ("ko", Day, 1) => "내일",
        ("ko", Day, 2) => "모레",
        ("ko", Week, -1) => "지난주",
        ("ko", Week, 0) => "이번 주",
        ("ko", Week, 1) => "다음 주",
        ("ko", Month, -1) => "지난달",
        ("ko", Month, 0) => "이번 달",
        ("ko", Month, 1) => "다음 달",
        ("ko", Year, -1) => "작년",
        ("ko", Year, 0) => "올해",
        ("ko", Year, 1) => "내년",

        ("ja", Second, 0) => "今",
        ("ja", Day, -2) => "一昨日",
        ("ja", Day, -1) => "昨日",
        ("ja", Day, 0) => "今日",
        ("ja", Day, 1) => "明日",
        ("ja", Day, 2) => "明後日",
        ("ja", Week, -1) => "先週",
        ("ja", Week, 0) => "今週",
        ("ja", Week, 1) => "来週",
        ("ja", Month, -1) => "先月",
        ("ja", Month, 0) => "今月",
        ("ja", Month, 1) => "来月",
        ("ja", Year, -1) => "昨年",
        ("ja", Year, 0) => "今年",
        ("ja", Year, 1) => "来年",

        ("zh", Second, 0) => "现在",
        ("zh", Day, -2) => "前天",
        ("zh", Day, -1) => "昨天",
        ("zh", Day, 0) => "今天",
        ("zh", Day, 1) => "明天",
        ("zh", Day, 2) => "后天",
        ("zh", Week, -1) => "上周",
        ("zh", Week, 0) => "本周",
        ("zh", Week, 1) => "下周",
        ("zh", Month, -1) => "上个月",
        ("zh", Month, 0) => "本月",
        ("zh", Month, 1) => "下个月",
        ("zh", Year, -1) => "去年",
        ("zh", Year, 0) => "今年",
        ("zh", Year, 1) => "明年",

        ("de", Second, 0) => "jetzt",
        ("de", Day, -2) => "vorgestern",
        ("de", Day, -1) => "gestern",
        ("de", Day, 0) => "heute",
        ("de", Day, 1) => "morgen",
        ("de", Day, 2) => "übermorgen",
        ("de", Week, -1) => "letzte Woche",
        ("de", Week, 0) => "diese Woche",
        ("de", Week, 1) => "nächste Woche",
        ("de", Month, -1) => "letzten Monat",
        ("de", Month, 0) => "diesen Monat",
        ("de", Month, 1) => "nächsten Monat",
        ("de", Year, -1) => "letztes Jahr",
        ("de", Year, 0) => "dieses Jahr",
        ("de", Year, 1) => "nächstes Jahr",

        ("fr", Second, 0) => "maintenant",
        ("fr", Day, -2) => "avant-hier",
        ("fr", Day, -1) => "hier",
        ("fr", Day, 0) => "aujourd’hui",
        ("fr", Day, 1) => "demain",
        ("fr", Day, 2) => "après-demain",
        ("fr", Week, -1) => "la semaine dernière",
        ("fr", Week, 0) => "cette semaine",
        ("fr", Week, 1) => "la semaine prochaine",
        ("fr", Month, -1) => "le mois dernier",
        ("fr", Month, 0) => "ce mois-ci",
        ("fr", Month, 1) => "le mois prochain",
        ("fr", Year, -1) => "l’année dernière",
        ("fr", Year, 0) => "cette année",
        ("fr", Year, 1) => "l’année prochaine",

        ("es", Second, 0) => "ahora",
        ("es", Day, -2) => "anteayer",
        ("es", Day, -1) => "ayer",
        ("es", Day, 0) => "hoy",
        ("es", Day, 1) => "mañana",
        ("es", Day, 2) => "pasado mañana",
        ("es", Week, -1) => "la semana pasada",
        ("es", Week, 0) => "esta semana",
        ("es", Week, 1) => "la próxima semana",
        ("es", Month, -1) => "el mes pasado",
        ("es", Month, 0) => "este mes",
        ("es", Month, 1) => "el próximo mes",
        ("es", Year, -1) => "el año pasado",
        ("es", Year, 0) => "este año",
        ("es", Year, 1) => "el próximo año",

        ("ko" | "ja" | "zh" | "de" | "fr" | "es", _, _) => return None,

        (_, Second, 0) => "now",
        (_, Minute, 0) => "this minute",
        (_, Hour, 0) => "this hour",
        (_, Day, -1) => "yesterday",
        (_, Day, 0) => "today",
        (_, Day, 1) => "tomorrow",
        (_, Week, -1) if abbreviated => "last wk.",
        (_, Week, 0) if abbreviated => "this wk.",
        (_, Week, 1) if abbreviated => "next wk.",
        (_, Month, -1) if abbreviated => "last mo.",
        (_, Month, 0) if abbreviated => "this mo.",
        (_, Month, 1) if abbreviated => "next mo.",
        (_, Year, -1) if abbreviated => "last yr.",
        (_, Year, 0) if abbreviated => "this yr.",
        (_, Year, 1) if abbreviated => "next yr.",
        (_, Week, -1) => "last week",
        (_, Week, 0) => "this week",
        (_, Week, 1) => "next week",
        (_, Month, -1) => "last month",
        (_, Month, 0) => "this month",
        (_, Month, 1) => "next month",
        (_, Year, -1) => "last year",
        (_, Year, 0) => "this year",
        (_, Year, 1) => "next year",
        _ => return None,
    };
    Some(text)
}

fn en_unit(unit: RelativeTimeUnit, style: RelativeTimeStyle, one: bool) -> &'static str {
    use RelativeTimeUnit::*;

    match style {
        RelativeTimeStyle::Long => match (unit, one) {
            (Second, true) => "second",
            (Second, false) => "seconds",
            (Minute, true) => "minute",
            (Minute, false) => "minutes",
            (Hour, true) => "hour",
            (Hour, false) => "hours",
            (Day, true) => "day",
            (Day, false) => "days",
            (Week, true) => "week",
            (Week, false) => "weeks",
            (Month, true) => "month",
            (Month, false) => "months",
            (Year, true) => "year",
            (Year, false) => "years",
        },
        RelativeTimeStyle::Short => match unit {
            Second => "sec.",
            Minute => "min.",
            Hour => "hr.",
            Day if one => "day",
            Day => "days",
            Week => "wk.",
            Month => "mo.",
            Year => "yr.",
        },
        RelativeTimeStyle::Narrow => match unit {
            Second => "s",
            Minute => "m",
            Hour => "h",
            Day => "d",
            Week => "w",
            Month => "mo",
            Year => "y",
        },
    }
}

fn de_unit(unit: RelativeTimeUnit, style: RelativeTimeStyle, one: bool) -> &'static str {
    use RelativeTimeUnit::*;

    if style != RelativeTimeStyle::Long {
        return match unit {
            Second => "Sek.",
            Minute => "Min.",
            Hour => "Std.",
            Day if one => "Tag",
            Day => "Tagen",
            Week => "Wo.",
            Month => "Mon.",
            Year => "J.",
        };
    }
    match (unit, one) {
        (Second, true) => "Sekunde",
        (Second, false) => "Sekunden",
        (Minute, true) => "Minute",
        (Minute, false) => "Minuten",
        (Hour, true) => "Stunde",
        (Hour, false) => "Stunden",
        (Day, true) => "Tag",
        (Day, false) => "Tagen",
        (Week, true) => "Woche",
        (Week, false) => "Wochen",
        (Month, true) => "Monat",
        (Month, false) => "Monaten",
        (Year, true) => "Jahr",
        (Year, false) => "Jahren",
    }
}

fn fr_unit(unit: RelativeTimeUnit, style: RelativeTimeStyle, one: bool) -> &'static str {
    use RelativeTimeUnit::*;

    if style != RelativeTimeStyle::Long {
        return match unit {
            Second => "s",
            Minute => "min",
            Hour => "h",
            Day => "j",
            Week => "sem.",
            Month => "m.",
            Year => "a",
        };
    }
    match (unit, one) {
        (Second, true) => "seconde",
        (Second, false) => "secondes",
        (Minute, true) => "minute",
        (Minute, false) => "minutes",
        (Hour, true) => "heure",
        (Hour, false) => "heures",
        (Day, true) => "jour",
        (Day, false) => "jours",
        (Week, true) => "semaine",
        (Week, false) => "semaines",
        (Month, _) => "mois",
        (Year, true) => "an",
        (Year, false) => "ans",
    }
}

fn es_unit(unit: RelativeTimeUnit, style: RelativeTimeStyle, one: bool) -> &'static str {
    use RelativeTimeUnit::*;

    if style != RelativeTimeStyle::Long {
        return match unit {
            Second => "s",
            Minute => "min",
            Hour => "h",
            Day if one => "día",
            Day => "días",
            Week => "sem.",
            Month => "m.",
            Year => "a",
        };
    }
    match (unit, one) {
        (Second, true) => "segundo",
        (Second, false) => "segundos",
        (Minute, true) => "minuto",
        (Minute, false) => "minutos",
        (Hour, true) => "hora",
        (Hour, false) => "horas",
        (Day, true) => "día",
        (Day, false) => "días",
        (Week, true) => "semana",
        (Week, false) => "semanas",
        (Month, true) => "mes",
        (Month, false) => "meses",
        (Year, true) => "año",
        (Year, false) => "años",
    }
}

fn ko_unit(unit: RelativeTimeUnit) -> &'static str {
    match unit {
        RelativeTimeUnit::Second => "초",
        RelativeTimeUnit::Minute => "분",
        RelativeTimeUnit::Hour => "시간",
        RelativeTimeUnit::Day => "일",
        RelativeTimeUnit::Week => "주",
        RelativeTimeUnit::Month => "개월",
        RelativeTimeUnit::Year => "년",
    }
}

fn ja_unit(unit: RelativeTimeUnit) -> &'static str {
    match unit {
        RelativeTimeUnit::Second => "秒",
        RelativeTimeUnit::Minute => "分",
        RelativeTimeUnit::Hour => "時間",
        RelativeTimeUnit::Day => "日",
        RelativeTimeUnit::Week => "週間",
        RelativeTimeUnit::Month => "か月",
        RelativeTimeUnit::Year => "年",
    }
}

fn zh_unit(unit: RelativeTimeUnit) -> &'static str {
    match unit {
        RelativeTimeUnit::Second => "秒钟",
        RelativeTimeUnit::Minute => "分钟",
        RelativeTimeUnit::Hour => "小时",
        RelativeTimeUnit::Day => "天",
        RelativeTimeUnit::Week => "周",
        RelativeTimeUnit::Month => "个月",
        RelativeTimeUnit::Year => "年",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    const MINUTE: f64 = 60_000.0;
    const HOUR: f64 = 60.0 * MINUTE;
    const DAY: f64 = 24.0 * HOUR;

    fn long() -> RelativeTimeFormatter {
        RelativeTimeFormatter::new(RelativeTimeStyle::Long)
    }

    #[test]
    fn test_unit_ladder() {
        assert_eq!(select_unit(0.0), (0, RelativeTimeUnit::Second));
        assert_eq!(select_unit(59_000.0), (59, RelativeTimeUnit::Second));
        assert_eq!(select_unit(-5.0 * MINUTE), (-5, RelativeTimeUnit::Minute));
        assert_eq!(select_unit(23.0 * HOUR), (23, RelativeTimeUnit::Hour));
        assert_eq!(select_unit(6.0 * DAY), (6, RelativeTimeUnit::Day));
        assert_eq!(select_unit(-14.0 * DAY), (-2, RelativeTimeUnit::Week));
        assert_eq!(select_unit(60.0 * DAY), (2, RelativeTimeUnit::Month));
        assert_eq!(select_unit(-800.0 * DAY), (-2, RelativeTimeUnit::Year));
    }

    #[test]
    fn test_js_rounding_of_halves() {
        assert_eq!(select_unit(-1500.0), (-1, RelativeTimeUnit::Second));
        assert_eq!(select_unit(1500.0), (2, RelativeTimeUnit::Second));
        assert_eq!(select_unit(90.0 * MINUTE), (2, RelativeTimeUnit::Hour));
    }

    #[test]
    fn test_english_long() {
        let en = Locale::en_us();
        assert_eq!(long().format(-3, RelativeTimeUnit::Day, &en), "3 days ago");
        assert_eq!(long().format(2, RelativeTimeUnit::Hour, &en), "in 2 hours");
        assert_eq!(long().format(-1, RelativeTimeUnit::Minute, &en), "1 minute ago");
        assert_eq!(long().format(-1, RelativeTimeUnit::Day, &en), "yesterday");
        assert_eq!(long().format(1, RelativeTimeUnit::Week, &en), "next week");
        assert_eq!(long().format(0, RelativeTimeUnit::Second, &en), "now");
        assert_eq!(long().format(-1500, RelativeTimeUnit::Year, &en), "1,500 years ago");
    }

    #[test]
    fn test_english_short_and_narrow() {
        let en = Locale::en_us();
        let short = RelativeTimeFormatter::new(RelativeTimeStyle::Short);
        let narrow = RelativeTimeFormatter::new(RelativeTimeStyle::Narrow);
        assert_eq!(short.format(-5, RelativeTimeUnit::Minute, &en), "5 min. ago");
        assert_eq!(short.format(-1, RelativeTimeUnit::Month, &en), "last mo.");
        assert_eq!(narrow.format(-2, RelativeTimeUnit::Day, &en), "2d ago");
        assert_eq!(narrow.format(3, RelativeTimeUnit::Hour, &en), "in 3h");
    }

    #[test]
    fn test_other_languages() {
        let ko = Locale::ko_kr();
        assert_eq!(long().format(-1, RelativeTimeUnit::Day, &ko), "어제");
        assert_eq!(long().format(-3, RelativeTimeUnit::Day, &ko), "3일 전");
        assert_eq!(long().format(2, RelativeTimeUnit::Hour, &ko), "2시간 후");
        assert_eq!(long().format(-5, RelativeTimeUnit::Minute, &Locale::ja()), "5分前");
        assert_eq!(long().format(-3, RelativeTimeUnit::Day, &Locale::de_de()), "vor 3 Tagen");
        assert_eq!(long().format(1, RelativeTimeUnit::Hour, &Locale::de_de()), "in 1 Stunde");
        assert_eq!(long().format(-2, RelativeTimeUnit::Month, &Locale::fr_fr()), "il y a 2 mois");
        let es = Locale::new("es", None::<&str>);
        assert_eq!(long().format(4, RelativeTimeUnit::Day, &es), "dentro de 4 días");
        let zh = Locale::new("zh", None::<&str>);
        assert_eq!(long().format(1, RelativeTimeUnit::Day, &zh), "明天");
    }

    #[test]
    fn test_format_between() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let en = Locale::en_us();
        assert_eq!(
            long().format_between(&(now + Duration::hours(2)), &now, &en),
            "in 2 hours"
        );
        assert_eq!(
            long().format_between(&(now - Duration::minutes(1)), &now, &en),
            "1 minute ago"
        );
    }

    #[test]
    fn test_style_parse() {
        assert_eq!(RelativeTimeStyle::parse(Some("narrow")), RelativeTimeStyle::Narrow);
        assert_eq!(RelativeTimeStyle::parse(Some("loud")), RelativeTimeStyle::Long);
        assert_eq!(RelativeTimeStyle::parse(None), RelativeTimeStyle::Long);
    }
}
