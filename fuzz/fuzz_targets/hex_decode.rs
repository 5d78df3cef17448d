#![no_main]

use libfuzzer_sys::fuzz_target;

use extensions_util::hex::{from_hex_string, to_hex_string};

fuzz_target!(|text: &str| {
    // Whatever decodes must encode back to the same digits, modulo case
    if let Ok(bytes) = from_hex_string(text) {
        assert_eq!(to_hex_string(bytes), text.to_ascii_uppercase());
    }
});
