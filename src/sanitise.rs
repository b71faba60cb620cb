//! Destination-key sanitisation.
//!
//! Local relative paths double as object keys once their leading `.` and `/`
//! are stripped. The stripping is deliberately a first-occurrence-only
//! replace, not a trim: each rule removes at most one character, and only
//! when the string currently starts with it. Inputs with unusual leading
//! sequences (`"..foo"`, `"//a"`) keep whatever the single pass leaves.

/// Normalise a local relative path into a storage object key.
///
/// Used both for item destination keys and for listing prefixes.
pub fn sanitise_key(path: &str) -> String {
    let mut result = path.to_string();
    if result.starts_with('.') {
        result = result.replacen('.', "", 1);
    }

    if result.starts_with('/') {
        result = result.replacen('/', "", 1);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::sanitise_key;

    #[test]
    fn plain_relative_path_is_unchanged() {
        assert_eq!(sanitise_key("a/b"), "a/b");
    }

    #[test]
    fn strips_leading_dot_then_slash() {
        assert_eq!(sanitise_key("./a"), "a");
    }

    #[test]
    fn strips_leading_slash() {
        assert_eq!(sanitise_key("/a"), "a");
    }

    #[test]
    fn removes_at_most_one_character_per_rule() {
        // Single-occurrence replace only: the second dot survives and the
        // slash rule no longer applies.
        assert_eq!(sanitise_key("../a"), "./a");
        assert_eq!(sanitise_key("//a"), "/a");
    }

    #[test]
    fn inner_dots_and_slashes_are_untouched() {
        assert_eq!(sanitise_key("dir/file.txt"), "dir/file.txt");
        assert_eq!(sanitise_key(".hidden"), "hidden");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitise_key(""), "");
    }
}
