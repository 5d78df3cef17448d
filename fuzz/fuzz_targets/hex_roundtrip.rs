#![no_main]

use libfuzzer_sys::fuzz_target;

use extensions_util::hex::{from_hex_string, to_hex_string, HexDisplay};

fuzz_target!(|data: &[u8]| {
    let text = to_hex_string(data);
    assert_eq!(text.len(), 2 * data.len());
    assert_eq!(text, data.fmt_hex().to_string());
    assert_eq!(from_hex_string(&text).unwrap(), data);
});
