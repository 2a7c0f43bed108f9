//! Option value quoting.
//!
//! Configuration values arrive as untyped strings. This module turns them into
//! annotation-literal syntax:
//!
//! - `true` / `false` (exact spelling) stay bare boolean literals
//! - every run of word characters is wrapped in double quotes
//! - a value containing a comma becomes an array literal `{...}`
//!
//! ```rust
//! use annogen::quoting::literal;
//!
//! assert_eq!(literal("true"), "true");
//! assert_eq!(literal("get"), "\"get\"");
//! assert_eq!(literal("foo,bar"), "{\"foo\", \"bar\"}");
//! ```
//!
//! Values are not validated. Free-form text is quoted word by word and may
//! produce a literal the Java compiler rejects.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal run of ASCII letters, digits and underscores.
static WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("word-run regex should be valid"));

/// Quote every word run in `value`, leaving boolean literals untouched.
pub fn quote(value: &str) -> String {
    if value == "true" || value == "false" {
        return value.to_string();
    }
    WORD_RUN.replace_all(value, "\"$0\"").into_owned()
}

/// Convert a raw configuration value into its annotation-literal form.
///
/// Comma-separated values are wrapped as `{a, b}` before quoting.
pub fn literal(value: &str) -> String {
    if value.contains(',') {
        let items: Vec<&str> = value.split(',').map(str::trim).collect();
        quote(&format!("{{{}}}", items.join(", ")))
    } else {
        quote(value)
    }
}

/// Build a `key=value` option fragment with the value quoted.
pub fn option_entry(option_key: &str, value: &str) -> String {
    format!("{}={}", option_key, literal(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booleans_pass_through() {
        assert_eq!(quote("true"), "true");
        assert_eq!(quote("false"), "false");
        assert_eq!(literal("true"), "true");
        assert_eq!(literal("false"), "false");
    }

    #[test]
    fn test_boolean_spelling_is_case_sensitive() {
        assert_eq!(quote("TRUE"), "\"TRUE\"");
        assert_eq!(quote("False"), "\"False\"");
    }

    #[test]
    fn test_single_identifier_is_quoted() {
        assert_eq!(literal("foo"), "\"foo\"");
        assert_eq!(literal("with_underscore9"), "\"with_underscore9\"");
    }

    #[test]
    fn test_comma_list_becomes_array() {
        assert_eq!(literal("foo,bar"), "{\"foo\", \"bar\"}");
        assert_eq!(literal("foo, bar"), "{\"foo\", \"bar\"}");
        assert_eq!(literal("id,name,createdAt"), "{\"id\", \"name\", \"createdAt\"}");
    }

    #[test]
    fn test_booleans_inside_array_are_quoted() {
        assert_eq!(literal("true,false"), "{\"true\", \"false\"}");
    }

    #[test]
    fn test_punctuation_is_untouched() {
        assert_eq!(quote("{a}"), "{\"a\"}");
        assert_eq!(quote("a.b"), "\"a\".\"b\"");
        assert_eq!(quote("hello world"), "\"hello\" \"world\"");
        assert_eq!(quote(""), "");
        assert_eq!(quote("--"), "--");
    }

    #[test]
    fn test_unbalanced_value_is_not_validated() {
        assert_eq!(literal("{a"), "{\"a\"");
    }

    #[test]
    fn test_option_entry() {
        assert_eq!(option_entry("toBuilder", "true"), "toBuilder=true");
        assert_eq!(option_entry("prefix", "get"), "prefix=\"get\"");
        assert_eq!(
            option_entry("exclude", "password,salt"),
            "exclude={\"password\", \"salt\"}"
        );
    }
}
