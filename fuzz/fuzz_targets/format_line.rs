#![no_main]
extern crate arbitrary;

use std::fmt::Display;

use libfuzzer_sys::fuzz_target;

use extensions_util::fmt::{append_format_line, LINE_TERMINATOR};

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub format: String,
    pub args: Vec<String>,
}

fuzz_target!(|input: Input| {
    let args: Vec<&dyn Display> = input.args.iter().map(|a| a as &dyn Display).collect();
    let mut buf = String::from("prefix");

    // We expect errors while fuzzing; the buffer must only change on success
    match append_format_line(&mut buf, &input.format, &args) {
        Ok(out) => assert!(out.starts_with("prefix") && out.ends_with(LINE_TERMINATOR)),
        Err(_) => assert_eq!(buf, "prefix"),
    }
});
