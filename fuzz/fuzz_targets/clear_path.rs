#![no_main]

use libfuzzer_sys::fuzz_target;

use extensions_util::path::{clear_path, FORBIDDEN_PATH_SEQUENCES};

fuzz_target!(|text: &str| {
    let cleared = clear_path(text);
    assert!(cleared.len() <= text.len());
    // Removing a later entry can join two slashes again, so only single characters are guaranteed gone
    for forbidden in FORBIDDEN_PATH_SEQUENCES.iter().filter(|f| f.len() == 1) {
        assert!(!cleared.contains(forbidden), "{forbidden:?} left in {cleared:?}");
    }
});
