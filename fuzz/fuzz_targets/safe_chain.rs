#![no_main]

use libfuzzer_sys::fuzz_target;

use extensions_maybe::{Maybe, SafeMaybe};
use extensions_util::hex::from_hex_string;

fuzz_target!(|text: Option<&str>| {
    let propagated = text.try_with(|t| from_hex_string(t).map(Some));
    let swallowed = text.safe_with(|t| from_hex_string(t).map(Some));
    assert_eq!(propagated.clone().ok().flatten(), swallowed);
    assert_eq!(propagated.is_err(), text.is_some() && swallowed.is_none());
});
