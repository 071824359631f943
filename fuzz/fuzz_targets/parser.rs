//! Fuzz target for the message parser.
//!
//! Arbitrary text must either parse or produce a positioned error.

#![no_main]

use inline_i18n::Interpolator;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(template) = std::str::from_utf8(data) else {
        return;
    };

    let i18n = Interpolator::new();
    if let Err(err) = i18n.parse(template) {
        let _ = err.to_string();
    }

    // A second parse must agree with the first (cache hit path)
    let first = i18n.parse(template).is_ok();
    assert_eq!(first, i18n.parse(template).is_ok());
});
