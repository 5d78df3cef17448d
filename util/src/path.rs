//! Stripping characters that are not allowed in file paths

/// Sequences removed by [clear_path], in the order they are applied
pub const FORBIDDEN_PATH_SEQUENCES: [&str; 9] =
    ["\\", "//", ":", "*", "?", "\"", ">", "<", "|"];

/// Remove every forbidden sequence from `s`. Nothing is substituted.
///
/// Each entry of [FORBIDDEN_PATH_SEQUENCES] is removed from the whole string
/// before the next one is applied, so the result can depend on the order:
/// a `//` that only appears once the backslashes are gone is removed too,
/// while one that appears once a later entry is gone stays.
///
/// # Examples
///
/// ```rust
/// use extensions_util::path::clear_path;
///
/// assert_eq!(clear_path("a:b*c?d\"e>f<g|h\\i//j"), "abcdefghij");
/// assert_eq!(clear_path("dir/file.txt"), "dir/file.txt");
/// ```
pub fn clear_path(s: &str) -> String {
    FORBIDDEN_PATH_SEQUENCES
        .iter()
        .fold(s.to_owned(), |current, forbidden| current.replace(*forbidden, ""))
}

#[cfg(test)]
mod tests {
    use super::clear_path;

    #[test]
    fn single_slashes_survive() {
        assert_eq!(clear_path("/usr/local"), "/usr/local");
        assert_eq!(clear_path("///"), "/");
        assert_eq!(clear_path("a////b"), "ab");
    }

    #[test]
    fn backslashes_go_before_double_slashes() {
        assert_eq!(clear_path("/\\/"), "");
        assert_eq!(clear_path("C:\\Users\\me"), "CUsersme");
    }

    #[test]
    fn later_removals_can_leave_double_slashes() {
        assert_eq!(clear_path("/:/"), "//");
        assert_eq!(clear_path("a/*/b"), "a//b");
    }

    #[test]
    fn clean_input_is_unchanged() {
        assert_eq!(clear_path(""), "");
        assert_eq!(clear_path("report-2024_v2.pdf"), "report-2024_v2.pdf");
        assert_eq!(clear_path("ünïcødé"), "ünïcødé");
    }
}
