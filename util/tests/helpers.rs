use extensions_util::append_all;
use extensions_util::fmt::{AppendFormatLine, FormatError};
use extensions_util::hex::{from_hex_string, to_hex_string, HexError};
use extensions_util::mem::sequence_equals;
use extensions_util::path::clear_path;
use extensions_util::vec::AppendAll;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn hex_known_vectors() -> anyhow::Result<()> {
    assert_eq!(to_hex_string([0x00u8, 0xFF, 0x1A]), "00FF1A");
    assert_eq!(from_hex_string("00FF1A")?, [0x00, 0xFF, 0x1A]);

    let samples: [&[u8]; 4] = [b"", b"\x00", b"hello world", &[0xFF; 33]];
    for sample in samples {
        assert_eq!(to_hex_string(sample).len(), 2 * sample.len());
        assert_eq!(from_hex_string(&to_hex_string(sample))?, sample);
    }
    Ok(())
}

#[test]
fn hex_errors_convert_into_anyhow() {
    let err: anyhow::Error = from_hex_string("0").unwrap_err().into();
    assert_eq!(err.to_string(), "Hex string has odd length (1)");
    assert_eq!(
        err.downcast_ref::<HexError>(),
        Some(&HexError::OddLength { len: 1 })
    );
}

#[test]
fn sequence_equals_examples() {
    assert!(sequence_equals(
        Some(&[1u8, 2, 3][..]),
        Some(&[9, 1, 2, 3][..]),
        0,
        1
    ));
    assert!(!sequence_equals(
        Some(&[1u8, 2, 3][..]),
        Some(&[1, 2, 4][..]),
        0,
        0
    ));
    assert!(!sequence_equals(None, Some(&[1u8][..]), 0, 0));
}

#[test]
fn clear_path_strips_the_forbidden_set() {
    assert_eq!(clear_path("a:b*c?d\"e>f<g|h\\i//j"), "abcdefghij");
}

#[test]
fn append_all_forms() {
    let mut list: Vec<i32> = vec![];
    append_all!(list; 1, 2, 3);
    assert_eq!(list, [1, 2, 3]);

    list.append_all(vec![4, 5]);
    assert_eq!(list, [1, 2, 3, 4, 5]);
}

#[test]
fn format_line_builds_a_report() -> anyhow::Result<()> {
    init_logging();

    let mut report = String::new();
    report
        .append_format_line("{0}: {1}", &[&"total", &3])?
        .append_format_line("{{{0}}}", &[&"braced"])?;
    assert_eq!(report, "total: 3\n{braced}\n");

    let err = report.append_format_line("{0}: {1}", &[&"total"]).unwrap_err();
    assert_eq!(err, FormatError::IndexOutOfRange { index: 1, count: 1 });
    assert_eq!(
        err.to_string(),
        "Placeholder refers to argument 1, but only 1 were given"
    );
    Ok(())
}
