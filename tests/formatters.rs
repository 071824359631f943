//! Integration tests for custom formatters.

use inline_i18n::*;
use std::sync::Arc;

fn phone(value: &Value, _locale: &str, style: Option<&str>) -> String {
    let digits: String = value
        .to_display_string()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    if digits.len() != 10 {
        return value.to_display_string();
    }
    match style {
        Some("intl") => format!("+1 {}-{}-{}", &digits[0..3], &digits[3..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..]),
    }
}

#[test]
fn test_phone_formatter() {
    let i18n = Interpolator::new();
    i18n.register_formatter("phone", phone).unwrap();

    assert_eq!(
        i18n.render("Call {num, phone}", &vars! { "num" => "2125551234" }, "en"),
        "Call (212) 555-1234"
    );
    assert_eq!(
        i18n.render("Call {num, phone, intl}", &vars! { "num" => "212-555-1234" }, "en"),
        "Call +1 212-555-1234"
    );
}

#[test]
fn test_formatter_receives_locale() {
    let i18n = Interpolator::new();
    i18n.register_formatter("tag", |value: &Value, locale: &str, _style: Option<&str>| {
        format!("{}@{}", value, locale)
    })
    .unwrap();

    assert_eq!(i18n.render("{v, tag}", &vars! { "v" => 7 }, "ko-KR"), "7@ko-KR");
}

#[test]
fn test_reserved_names_leave_registry_unchanged() {
    let i18n = Interpolator::new();
    i18n.register_formatter("upper", |v: &Value, _: &str, _: Option<&str>| {
        v.to_display_string().to_uppercase()
    })
    .unwrap();

    for name in ["plural", "select", "number", "currency", "list", "date", "relativeTime"] {
        let result = i18n.register_formatter(name, |_: &Value, _: &str, _: Option<&str>| String::new());
        assert!(
            matches!(result, Err(I18nError::ReservedFormatterName(ref n)) if n == name),
            "{} should be reserved",
            name
        );
    }
    assert!(matches!(
        i18n.register_formatter("has space", |_: &Value, _: &str, _: Option<&str>| String::new()),
        Err(I18nError::InvalidFormatterName(_))
    ));

    assert_eq!(i18n.formatter_names(), ["upper"]);
    assert_eq!(
        i18n.render("{n, plural, one {# one} other {# many}}", &vars! { "n" => 2 }, "en"),
        "2 many"
    );
}

#[test]
fn test_unregister_restores_placeholder() {
    let i18n = Interpolator::new();
    i18n.register_formatter("upper", |v: &Value, _: &str, _: Option<&str>| {
        v.to_display_string().to_uppercase()
    })
    .unwrap();
    let vars = vars! { "w" => "hi" };

    assert_eq!(i18n.render("{w, upper}!", &vars, "en"), "HI!");
    assert!(i18n.unregister_formatter("upper"));
    assert!(!i18n.unregister_formatter("upper"));
    assert_eq!(i18n.render("{w, upper}!", &vars, "en"), "{w}!");
}

#[test]
fn test_arc_formatter_shared_between_interpolators() {
    struct Shout;

    impl CustomFormatter for Shout {
        fn format(&self, value: &Value, _locale: &str, _style: Option<&str>) -> String {
            format!("{}!", value.to_display_string().to_uppercase())
        }
    }

    let shared: Arc<dyn CustomFormatter> = Arc::new(Shout);
    let a = Interpolator::new();
    let b = Interpolator::new();
    a.register_formatter_arc("shout", Arc::clone(&shared)).unwrap();
    b.register_formatter_arc("shout", shared).unwrap();

    let vars = vars! { "w" => "hey" };
    assert_eq!(a.render("{w, shout}", &vars, "en"), "HEY!");
    assert_eq!(b.render("{w, shout}", &vars, "en"), "HEY!");
}

#[test]
fn test_custom_formatter_inside_plural_branch() {
    let i18n = Interpolator::new();
    i18n.register_formatter("upper", |v: &Value, _: &str, _: Option<&str>| {
        v.to_display_string().to_uppercase()
    })
    .unwrap();

    let template = "{count, plural, one {# file from {who, upper}} other {# files from {who, upper}}}";
    assert_eq!(
        i18n.render(template, &vars! { "count" => 2, "who" => "kim" }, "en"),
        "2 files from KIM"
    );
}
