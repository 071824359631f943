//! Integration tests for ICU message rendering.

use chrono::{Duration, TimeZone, Utc};
use inline_i18n::*;

fn i18n() -> Interpolator {
    Interpolator::new()
}

// =============================================================================
// Plural / Select
// =============================================================================

#[test]
fn test_plural_exact_match_precedence() {
    let template = "{count, plural, =0 {No items} one {# item} other {# items}}";
    let i18n = i18n();

    assert_eq!(i18n.render(template, &vars! { "count" => 0 }, "en"), "No items");
    assert_eq!(i18n.render(template, &vars! { "count" => 1 }, "en"), "1 item");
    assert_eq!(i18n.render(template, &vars! { "count" => 5 }, "en"), "5 items");
}

#[test]
fn test_plural_offset_arithmetic() {
    let template = "{count, plural, offset:1 =0 {Nobody} =1 {Just {name}} one {# other and {name}} other {# others and {name}}}";
    let out = i18n().render(template, &vars! { "count" => 2, "name" => "Alice" }, "en");
    assert_eq!(out, "1 other and Alice");
}

#[test]
fn test_select_fallback_to_other() {
    let template = "{gender, select, male {He} female {She} other {They}}";
    assert_eq!(i18n().render(template, &vars! { "gender" => "unknown" }, "en"), "They");
}

#[test]
fn test_nested_select_and_plural() {
    let template = "{host, select, female {{guests, plural, =0 {She has no guests} one {She invited # guest} other {She invited # guests}}} other {{guests, plural, =0 {They have no guests} other {They invited # guests}}}}";
    let i18n = i18n();

    assert_eq!(
        i18n.render(template, &vars! { "host" => "female", "guests" => 1 }, "en"),
        "She invited 1 guest"
    );
    assert_eq!(
        i18n.render(template, &vars! { "host" => "x", "guests" => 0 }, "en"),
        "They have no guests"
    );
}

#[test]
fn test_plural_uses_locale_rules() {
    let template = "{n, plural, one {# файл} few {# файла} many {# файлов} other {# файла}}";
    let i18n = i18n();

    assert_eq!(i18n.render(template, &vars! { "n" => 1 }, "ru"), "1 файл");
    assert_eq!(i18n.render(template, &vars! { "n" => 3 }, "ru"), "3 файла");
    assert_eq!(i18n.render(template, &vars! { "n" => 11 }, "ru"), "11 файлов");
    assert_eq!(i18n.render(template, &vars! { "n" => 21 }, "ru-RU"), "21 файл");
}

#[test]
fn test_selectordinal_english() {
    let template = "You finished {place, selectordinal, one {#st} two {#nd} few {#rd} other {#th}}";
    let i18n = i18n();

    assert_eq!(i18n.render(template, &vars! { "place" => 1 }, "en"), "You finished 1st");
    assert_eq!(i18n.render(template, &vars! { "place" => 12 }, "en"), "You finished 12th");
    assert_eq!(i18n.render(template, &vars! { "place" => 23 }, "en"), "You finished 23rd");
}

// =============================================================================
// Shorthand
// =============================================================================

#[test]
fn test_plural_shorthand_round_trip() {
    let i18n = i18n();
    assert_eq!(i18n.render("{count, p, item|items}", &vars! { "count" => 1 }, "en"), "1 item");
    assert_eq!(i18n.render("{count, p, item|items}", &vars! { "count" => 5 }, "en"), "5 items");
    assert_eq!(
        i18n.render("{count, p, none|item|items}", &vars! { "count" => 0 }, "en"),
        "none"
    );
}

#[test]
fn test_shorthand_mixed_with_other_elements() {
    let out = i18n().render(
        "{name} has {count, p, message|messages} from {senders, list}",
        &vars! { "name" => "Kim", "count" => 2, "senders" => ["Lee", "Park"] },
        "en",
    );
    assert_eq!(out, "Kim has 2 messages from Lee and Park");
}

// =============================================================================
// Formatting elements
// =============================================================================

#[test]
fn test_currency_default_usd() {
    assert_eq!(i18n().render("{price, currency}", &vars! { "price" => 100 }, "en-US"), "$100.00");
}

#[test]
fn test_currency_locales() {
    let i18n = i18n();
    assert_eq!(
        i18n.render("{price, currency, EUR}", &vars! { "price" => 1234.5 }, "de-DE"),
        "1.234,50\u{a0}€"
    );
    assert_eq!(
        i18n.render("{price, currency, JPY}", &vars! { "price" => 1234.5 }, "ja-JP"),
        "￥1,235"
    );
}

#[test]
fn test_compact_numbers() {
    let i18n = i18n();
    assert_eq!(i18n.render("{n, number, compact}", &vars! { "n" => 1500 }, "en"), "1.5K");
    assert_eq!(
        i18n.render("{n, number, compactLong}", &vars! { "n" => 2_000_000 }, "en"),
        "2 million"
    );
}

#[test]
fn test_list_formatting() {
    let i18n = i18n();
    assert_eq!(i18n.render("{names, list}", &vars! { "names" => ["Alice", "Bob"] }, "en"), "Alice and Bob");
    assert_eq!(i18n.render("{names, list}", &vars! { "names" => ["Alice"] }, "en"), "Alice");
    assert_eq!(
        i18n.render("{opts, list, disjunction}", &vars! { "opts" => ["A", "B", "C"] }, "en"),
        "A, B, or C"
    );
}

#[test]
fn test_relative_time_with_fixed_now() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let i18n = i18n();
    let render = |when, style: &str, locale| {
        i18n.render_at(
            &format!("{{when, relativeTime{}}}", style),
            &vars! { "when" => when },
            locale,
            now,
        )
    };

    assert_eq!(render(now - Duration::days(3), "", "en"), "3 days ago");
    assert_eq!(render(now + Duration::hours(2), "", "en"), "in 2 hours");
    assert_eq!(render(now - Duration::days(1), "", "en"), "yesterday");
    assert_eq!(render(now - Duration::days(1), "", "ko"), "어제");
    assert_eq!(render(now - Duration::minutes(5), ", short", "en"), "5 min. ago");
}

#[test]
fn test_relative_time_accepts_strings_and_epoch_ms() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let i18n = i18n();
    let template = "{when, relativeTime}";

    assert_eq!(
        i18n.render_at(template, &vars! { "when" => "2024-05-25" }, "en", now),
        "last week"
    );
    let epoch_ms = (now - Duration::seconds(30)).timestamp_millis();
    assert_eq!(
        i18n.render_at(template, &vars! { "when" => epoch_ms }, "en", now),
        "30 seconds ago"
    );
}

#[test]
fn test_date_and_time_elements() {
    let at = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 45).unwrap();
    let i18n = i18n();

    assert_eq!(i18n.render("{d, date, short}", &vars! { "d" => at }, "en-US"), "3/15/24");
    assert_eq!(i18n.render("{d, date, long}", &vars! { "d" => at }, "en-US"), "March 15, 2024");
    assert_eq!(i18n.render("{d, time, short}", &vars! { "d" => at }, "en-US"), "2:30 PM");
    assert_eq!(i18n.render("{d, time, short}", &vars! { "d" => at }, "de-DE"), "14:30");
}

#[test]
fn test_number_styles() {
    let i18n = i18n();
    let vars = vars! { "n" => 1234567.891, "ratio" => 0.421 };

    assert_eq!(i18n.render("{n, number}", &vars, "en-US"), "1,234,567.891");
    assert_eq!(i18n.render("{n, number}", &vars, "de-DE"), "1.234.567,891");
    assert_eq!(i18n.render("{n, number, integer}", &vars, "en-US"), "1,234,568");
    assert_eq!(i18n.render("{ratio, number, percent}", &vars, "en-US"), "42%");
    assert_eq!(i18n.render("{n, number, ::.00}", &vars, "en-US"), "1,234,567.89");
}

// =============================================================================
// Degradation
// =============================================================================

#[test]
fn test_missing_variables_echo_placeholders() {
    let i18n = i18n();
    assert_eq!(i18n.render("Hello {name}", &vars! {}, "en"), "Hello {name}");
    assert_eq!(
        i18n.render("{count, plural, one {#} other {#}} {name}", &vars! {}, "en"),
        "{count} {name}"
    );
    assert_eq!(i18n.render("{price, currency}", &vars! {}, "en"), "{price}");
    assert_eq!(i18n.render("{names, list}", &vars! { "names" => 3 }, "en"), "{names}");
}

#[test]
fn test_quoted_literals() {
    let i18n = i18n();
    assert_eq!(
        i18n.render("It''s '{literal}' {n, number}", &vars! { "n" => 2 }, "en"),
        "It's {literal} 2"
    );
}

#[test]
fn test_quoted_literals_without_elements() {
    let i18n = i18n();
    assert_eq!(
        i18n.render("Use '{name}' for {name}", &vars! { "name" => "Bo" }, "en"),
        "Use {name} for Bo"
    );
    assert_eq!(i18n.render("It's {name}", &vars! { "name" => "Bo" }, "en"), "It's Bo");
}

#[test]
fn test_argument_names_match_parser() {
    let i18n = i18n();
    let vars = vars! { "이름" => "Mina", "name" => "Bo", "n" => 3 };
    assert_eq!(i18n.render("{이름}님", &vars, "ko"), "Mina님");
    assert_eq!(i18n.render("{이름}님 {n, number}", &vars, "ko"), "Mina님 3");
    assert_eq!(i18n.render("Hi { name }", &vars, "en"), "Hi Bo");
    assert_eq!(i18n.render("Hi { name } x{n, number}", &vars, "en"), "Hi Bo x3");
}

#[test]
fn test_shorthand_fragments_are_literal() {
    let i18n = i18n();
    let template = "{n, p, #1 item|it's #s}";
    assert_eq!(i18n.render(template, &vars! { "n" => 1 }, "en"), "1 #1 item");
    assert_eq!(i18n.render(template, &vars! { "n" => 4 }, "en"), "4 it's #s");
    assert_eq!(
        i18n.render("'{n, p, a|b}' {n, p, a|b}", &vars! { "n" => 2 }, "en"),
        "{n, p, a|b} 2 b"
    );
}

#[test]
fn test_malformed_template_is_returned_unchanged() {
    let i18n = i18n();
    let template = "{count, plural, one {# item} other {# items}";
    assert_eq!(i18n.render(template, &vars! { "count" => 2 }, "en"), template);
    assert!(matches!(
        i18n.try_render(template, &vars! { "count" => 2 }, "en"),
        Err(I18nError::Parse(_))
    ));
}

#[test]
fn test_rich_text_after_render() {
    let i18n = i18n();
    let rendered = i18n.render(
        "Read <link>{count, p, rule|rules}</link> now",
        &vars! { "count" => 3 },
        "en",
    );
    assert_eq!(
        parse_rich_text(&rendered, &["link"]),
        vec![
            RichTextSegment::Text("Read ".into()),
            RichTextSegment::Component {
                name: "link".into(),
                content: "3 rules".into()
            },
            RichTextSegment::Text(" now".into()),
        ]
    );
}
