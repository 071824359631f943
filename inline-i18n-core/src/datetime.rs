//! Date and Time Formatting
//!
//! CLDR-style date and time patterns for a handful of locales. All
//! timestamps are rendered in UTC.

use crate::Locale;
use chrono::{DateTime, Datelike, Timelike, Utc};

/// Date formatting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// Full date (e.g., "Friday, March 15, 2024")
    Full,
    /// Long date (e.g., "March 15, 2024")
    Long,
    /// Medium date (e.g., "Mar 15, 2024")
    #[default]
    Medium,
    /// Short date (e.g., "3/15/24")
    Short,
}

/// Time formatting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeStyle {
    /// Full time with zone name (e.g., "2:30:45 PM Coordinated Universal Time")
    Full,
    /// Long time with zone abbreviation (e.g., "2:30:45 PM UTC")
    Long,
    /// Medium time (e.g., "2:30:45 PM")
    #[default]
    Medium,
    /// Short time (e.g., "2:30 PM")
    Short,
}

impl DateStyle {
    /// Parse a style keyword; anything unknown is `Medium`.
    pub fn parse(style: Option<&str>) -> Self {
        match style.map(str::trim) {
            Some("full") => Self::Full,
            Some("long") => Self::Long,
            Some("short") => Self::Short,
            _ => Self::Medium,
        }
    }
}

impl TimeStyle {
    /// Parse a style keyword; anything unknown is `Medium`.
    pub fn parse(style: Option<&str>) -> Self {
        match style.map(str::trim) {
            Some("full") => Self::Full,
            Some("long") => Self::Long,
            Some("short") => Self::Short,
            _ => Self::Medium,
        }
    }
}

/// Date formatting configuration.
#[derive(Debug, Clone, Default)]
pub struct DateFormatter {
    /// Date style
    pub date_style: Option<DateStyle>,
    /// Time style
    pub time_style: Option<TimeStyle>,
}

impl DateFormatter {
    /// Create a new date formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set date style.
    pub fn date_style(mut self, style: DateStyle) -> Self {
        self.date_style = Some(style);
        self
    }

    /// Set time style.
    pub fn time_style(mut self, style: TimeStyle) -> Self {
        self.time_style = Some(style);
        self
    }

    /// Format a timestamp.
    ///
    /// With neither style set the date is printed in `Medium` style.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use inline_i18n_core::{DateFormatter, DateStyle, Locale, TimeStyle};
    ///
    /// let at = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 45).unwrap();
    /// let formatter = DateFormatter::new()
    ///     .date_style(DateStyle::Medium)
    ///     .time_style(TimeStyle::Short);
    ///
    /// assert_eq!(formatter.format(&at, &Locale::en_us()), "Mar 15, 2024, 2:30 PM");
    /// ```
    pub fn format(&self, at: &DateTime<Utc>, locale: &Locale) -> String {
        match (self.date_style, self.time_style) {
            (Some(date), Some(time)) => {
                let separator = match locale.language.as_str() {
                    "en" | "de" | "es" | "it" | "ru" => ", ",
                    _ => " ",
                };
                format!(
                    "{}{}{}",
                    format_date(at, date, locale),
                    separator,
                    format_time(at, time, locale)
                )
            }
            (None, Some(time)) => format_time(at, time, locale),
            (date, None) => format_date(at, date.unwrap_or_default(), locale),
        }
    }
}

// ============================================================================
// Date patterns
// ============================================================================

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const EN_WEEKDAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

const DE_MONTHS: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
    "Oktober", "November", "Dezember",
];
const DE_WEEKDAYS: [&str; 7] = [
    "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
];

const FR_MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];
const FR_MONTHS_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];
const FR_WEEKDAYS: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

const ES_MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];
const ES_WEEKDAYS: [&str; 7] = [
    "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
];

const IT_MONTHS: [&str; 12] = [
    "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
    "settembre", "ottobre", "novembre", "dicembre",
];
const IT_WEEKDAYS: [&str; 7] = [
    "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato", "domenica",
];

const PT_MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];
const PT_WEEKDAYS: [&str; 7] = [
    "segunda-feira", "terça-feira", "quarta-feira", "quinta-feira", "sexta-feira", "sábado",
    "domingo",
];

/// Genitive month names.
const RU_MONTHS: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];
const RU_MONTHS_SHORT: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];
const RU_WEEKDAYS: [&str; 7] = [
    "понедельник", "вторник", "среда", "четверг", "пятница", "суббота", "воскресенье",
];

const JA_WEEKDAYS: [&str; 7] = [
    "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日", "日曜日",
];
const KO_WEEKDAYS: [&str; 7] = [
    "월요일", "화요일", "수요일", "목요일", "금요일", "토요일", "일요일",
];
const ZH_WEEKDAYS: [&str; 7] = [
    "星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日",
];

fn abbreviate(name: &str, len: usize) -> String {
    name.chars().take(len).collect()
}

/// Format the date part of a timestamp.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use inline_i18n_core::{format_date, DateStyle, Locale};
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
/// assert_eq!(format_date(&at, DateStyle::Short, &Locale::en_us()), "3/15/24");
/// assert_eq!(format_date(&at, DateStyle::Medium, &Locale::en_us()), "Mar 15, 2024");
/// assert_eq!(format_date(&at, DateStyle::Long, &Locale::en_us()), "March 15, 2024");
/// assert_eq!(format_date(&at, DateStyle::Long, &Locale::ko_kr()), "2024년 3월 15일");
/// ```
pub fn format_date(at: &DateTime<Utc>, style: DateStyle, locale: &Locale) -> String {
    let year = at.year();
    let month = at.month();
    let day = at.day();
    let yy = year.rem_euclid(100);
    let m = month0(at);
    let w = at.weekday().num_days_from_monday() as usize;

    match locale.language.as_str() {
        "en" if is_day_first_english(locale) => match style {
            DateStyle::Full => format!("{} {} {} {}", EN_WEEKDAYS[w], day, EN_MONTHS[m], year),
            DateStyle::Long => format!("{} {} {}", day, EN_MONTHS[m], year),
            DateStyle::Medium => format!("{} {} {}", day, abbreviate(EN_MONTHS[m], 3), year),
            DateStyle::Short => format!("{:02}/{:02}/{}", day, month, year),
        },
        "de" => match style {
            DateStyle::Full => format!("{}, {}. {} {}", DE_WEEKDAYS[w], day, DE_MONTHS[m], year),
            DateStyle::Long => format!("{}. {} {}", day, DE_MONTHS[m], year),
            DateStyle::Medium => format!("{:02}.{:02}.{}", day, month, year),
            DateStyle::Short => format!("{:02}.{:02}.{:02}", day, month, yy),
        },
        "fr" => match style {
            DateStyle::Full => format!("{} {} {} {}", FR_WEEKDAYS[w], day, FR_MONTHS[m], year),
            DateStyle::Long => format!("{} {} {}", day, FR_MONTHS[m], year),
            DateStyle::Medium => format!("{} {} {}", day, FR_MONTHS_SHORT[m], year),
            DateStyle::Short => format!("{:02}/{:02}/{}", day, month, year),
        },
        "es" => match style {
            DateStyle::Full => {
                format!("{}, {} de {} de {}", ES_WEEKDAYS[w], day, ES_MONTHS[m], year)
            }
            DateStyle::Long => format!("{} de {} de {}", day, ES_MONTHS[m], year),
            DateStyle::Medium => format!("{} {} {}", day, abbreviate(ES_MONTHS[m], 3), year),
            DateStyle::Short => format!("{}/{}/{:02}", day, month, yy),
        },
        "it" => match style {
            DateStyle::Full => format!("{} {} {} {}", IT_WEEKDAYS[w], day, IT_MONTHS[m], year),
            DateStyle::Long => format!("{} {} {}", day, IT_MONTHS[m], year),
            DateStyle::Medium => format!("{} {} {}", day, abbreviate(IT_MONTHS[m], 3), year),
            DateStyle::Short => format!("{:02}/{:02}/{:02}", day, month, yy),
        },
        "pt" => match style {
            DateStyle::Full => {
                format!("{}, {} de {} de {}", PT_WEEKDAYS[w], day, PT_MONTHS[m], year)
            }
            DateStyle::Long => format!("{} de {} de {}", day, PT_MONTHS[m], year),
            DateStyle::Medium => {
                format!("{} de {}. de {}", day, abbreviate(PT_MONTHS[m], 3), year)
            }
            DateStyle::Short => format!("{:02}/{:02}/{}", day, month, year),
        },
        "ru" => match style {
            DateStyle::Full => format!("{}, {} {} {} г.", RU_WEEKDAYS[w], day, RU_MONTHS[m], year),
            DateStyle::Long => format!("{} {} {} г.", day, RU_MONTHS[m], year),
            DateStyle::Medium => format!("{} {} {} г.", day, RU_MONTHS_SHORT[m], year),
            DateStyle::Short => format!("{:02}.{:02}.{}", day, month, year),
        },
        "ja" => match style {
            DateStyle::Full => format!("{}年{}月{}日{}", year, month, day, JA_WEEKDAYS[w]),
            DateStyle::Long => format!("{}年{}月{}日", year, month, day),
            DateStyle::Medium | DateStyle::Short => format!("{}/{:02}/{:02}", year, month, day),
        },
        "ko" => match style {
            DateStyle::Full => format!("{}년 {}월 {}일 {}", year, month, day, KO_WEEKDAYS[w]),
            DateStyle::Long => format!("{}년 {}월 {}일", year, month, day),
            DateStyle::Medium => format!("{}. {}. {}.", year, month, day),
            DateStyle::Short => format!("{:02}. {}. {}.", yy, month, day),
        },
        "zh" => match style {
            DateStyle::Full => format!("{}年{}月{}日{}", year, month, day, ZH_WEEKDAYS[w]),
            DateStyle::Long | DateStyle::Medium => format!("{}年{}月{}日", year, month, day),
            DateStyle::Short => format!("{}/{}/{}", year, month, day),
        },
        _ => match style {
            DateStyle::Full => format!("{}, {} {}, {}", EN_WEEKDAYS[w], EN_MONTHS[m], day, year),
            DateStyle::Long => format!("{} {}, {}", EN_MONTHS[m], day, year),
            DateStyle::Medium => format!("{} {}, {}", abbreviate(EN_MONTHS[m], 3), day, year),
            DateStyle::Short => format!("{}/{}/{:02}", month, day, yy),
        },
    }
}

fn month0(at: &DateTime<Utc>) -> usize {
    at.month0() as usize
}

/// English regions that write the day before the month.
fn is_day_first_english(locale: &Locale) -> bool {
    matches!(
        locale.region.as_deref(),
        Some("GB" | "AU" | "NZ" | "IE" | "IN" | "ZA")
    )
}

// ============================================================================
// Time patterns
// ============================================================================

/// Format the time-of-day part of a timestamp.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use inline_i18n_core::{format_time, Locale, TimeStyle};
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 45).unwrap();
/// assert_eq!(format_time(&at, TimeStyle::Short, &Locale::en_us()), "2:30 PM");
/// assert_eq!(format_time(&at, TimeStyle::Medium, &Locale::de_de()), "14:30:45");
/// ```
pub fn format_time(at: &DateTime<Utc>, style: TimeStyle, locale: &Locale) -> String {
    let (hour, minute, second) = (at.hour(), at.minute(), at.second());
    let (is_pm, hour12) = at.hour12();

    match locale.language.as_str() {
        "en" if !is_day_first_english(locale) => {
            let period = if is_pm { "PM" } else { "AM" };
            match style {
                TimeStyle::Short => format!("{}:{:02} {}", hour12, minute, period),
                TimeStyle::Medium => format!("{}:{:02}:{:02} {}", hour12, minute, second, period),
                TimeStyle::Long => {
                    format!("{}:{:02}:{:02} {} UTC", hour12, minute, second, period)
                }
                TimeStyle::Full => format!(
                    "{}:{:02}:{:02} {} Coordinated Universal Time",
                    hour12, minute, second, period
                ),
            }
        }
        "ko" => {
            let period = if is_pm { "오후" } else { "오전" };
            match style {
                TimeStyle::Short => format!("{} {}:{:02}", period, hour12, minute),
                TimeStyle::Medium => format!("{} {}:{:02}:{:02}", period, hour12, minute, second),
                TimeStyle::Long => {
                    format!("{} {}시 {}분 {}초 UTC", period, hour12, minute, second)
                }
                TimeStyle::Full => {
                    format!("{} {}시 {}분 {}초 협정 세계시", period, hour12, minute, second)
                }
            }
        }
        "ja" if style == TimeStyle::Full => {
            format!("{}時{}分{}秒 協定世界時", hour, minute, second)
        }
        "zh" if matches!(style, TimeStyle::Long | TimeStyle::Full) => {
            format!("UTC {:02}:{:02}:{:02}", hour, minute, second)
        }
        language => match style {
            TimeStyle::Short => format!("{:02}:{:02}", hour, minute),
            TimeStyle::Medium => format!("{:02}:{:02}:{:02}", hour, minute, second),
            TimeStyle::Long => format!("{:02}:{:02}:{:02} UTC", hour, minute, second),
            TimeStyle::Full => format!(
                "{:02}:{:02}:{:02} {}",
                hour,
                minute,
                second,
                utc_name(language)
            ),
        },
    }
}

fn utc_name(language: &str) -> &'static str {
    match language {
        "en" => "Coordinated Universal Time",
        "de" => "Koordinierte Weltzeit",
        "fr" => "temps universel coordonné",
        "es" => "tiempo universal coordinado",
        _ => "UTC",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn march_15() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 45).unwrap()
    }

    #[test]
    fn test_en_us_dates() {
        let us = Locale::en_us();
        let at = march_15();
        assert_eq!(format_date(&at, DateStyle::Short, &us), "3/15/24");
        assert_eq!(format_date(&at, DateStyle::Medium, &us), "Mar 15, 2024");
        assert_eq!(format_date(&at, DateStyle::Long, &us), "March 15, 2024");
        assert_eq!(format_date(&at, DateStyle::Full, &us), "Friday, March 15, 2024");
    }

    #[test]
    fn test_en_gb_dates() {
        let gb = Locale::en_gb();
        let at = march_15();
        assert_eq!(format_date(&at, DateStyle::Short, &gb), "15/03/2024");
        assert_eq!(format_date(&at, DateStyle::Medium, &gb), "15 Mar 2024");
        assert_eq!(format_time(&at, TimeStyle::Short, &gb), "14:30");
    }

    #[test]
    fn test_european_dates() {
        let at = march_15();
        assert_eq!(format_date(&at, DateStyle::Long, &Locale::de_de()), "15. März 2024");
        assert_eq!(format_date(&at, DateStyle::Short, &Locale::de_de()), "15.03.24");
        assert_eq!(format_date(&at, DateStyle::Full, &Locale::fr_fr()), "vendredi 15 mars 2024");
        let es = Locale::new("es", None::<&str>);
        assert_eq!(format_date(&at, DateStyle::Long, &es), "15 de marzo de 2024");
        let ru = Locale::new("ru", None::<&str>);
        assert_eq!(format_date(&at, DateStyle::Long, &ru), "15 марта 2024 г.");
    }

    #[test]
    fn test_cjk_dates() {
        let at = march_15();
        assert_eq!(format_date(&at, DateStyle::Long, &Locale::ja()), "2024年3月15日");
        assert_eq!(format_date(&at, DateStyle::Short, &Locale::ja()), "2024/03/15");
        assert_eq!(format_date(&at, DateStyle::Medium, &Locale::ko_kr()), "2024. 3. 15.");
        let zh = Locale::new("zh", None::<&str>);
        assert_eq!(format_date(&at, DateStyle::Full, &zh), "2024年3月15日星期五");
    }

    #[test]
    fn test_times() {
        let at = march_15();
        let us = Locale::en_us();
        assert_eq!(format_time(&at, TimeStyle::Short, &us), "2:30 PM");
        assert_eq!(format_time(&at, TimeStyle::Medium, &us), "2:30:45 PM");
        assert_eq!(format_time(&at, TimeStyle::Long, &us), "2:30:45 PM UTC");
        assert_eq!(format_time(&at, TimeStyle::Short, &Locale::ko_kr()), "오후 2:30");
        assert_eq!(format_time(&at, TimeStyle::Long, &Locale::de_de()), "14:30:45 UTC");
    }

    #[test]
    fn test_midnight_is_twelve_am() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 5, 0).unwrap();
        assert_eq!(format_time(&at, TimeStyle::Short, &Locale::en_us()), "12:05 AM");
    }

    #[test]
    fn test_style_parse() {
        assert_eq!(DateStyle::parse(Some("short")), DateStyle::Short);
        assert_eq!(DateStyle::parse(None), DateStyle::Medium);
        assert_eq!(TimeStyle::parse(Some("bogus")), TimeStyle::Medium);
    }

    #[test]
    fn test_formatter_defaults_to_medium_date() {
        let formatter = DateFormatter::new();
        assert_eq!(formatter.format(&march_15(), &Locale::en_us()), "Mar 15, 2024");
        let time_only = DateFormatter::new().time_style(TimeStyle::Short);
        assert_eq!(time_only.format(&march_15(), &Locale::de_de()), "14:30");
    }
}
