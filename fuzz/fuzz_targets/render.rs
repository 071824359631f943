//! Fuzz target for rendering.
//!
//! Rendering never fails, whatever the template, variables or locale.

#![no_main]

use arbitrary::Arbitrary;
use inline_i18n::{Interpolator, Value, Vars};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    template: String,
    locale: String,
    vars: Vec<(String, FuzzValue)>,
}

fuzz_target!(|input: FuzzInput| {
    let vars: Vars = input
        .vars
        .into_iter()
        .map(|(name, value)| {
            let value = match value {
                FuzzValue::Text(s) => Value::from(s),
                FuzzValue::Number(n) => Value::from(n),
                FuzzValue::List(items) => Value::from(items),
            };
            (name, value)
        })
        .collect();

    let i18n = Interpolator::new();
    let _ = i18n.render(&input.template, &vars, &input.locale);
    let _ = i18n.try_render(&input.template, &vars, &input.locale);
});
