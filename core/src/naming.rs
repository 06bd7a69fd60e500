#![deny(missing_docs)]

//! # Identifier Utilities
//!
//! Pure string helpers shared by the descriptor generator and the CLI:
//! deriving code-safe class names from dotted package ids, enforcing
//! generator-option key prefixes, and parsing `key=value` tokens.

use crate::error::{AppError, AppResult};

/// Derives a code-safe identifier from a dotted package name.
///
/// Each `.`-separated segment has its first character upper-cased and the
/// rest left untouched; segments are concatenated without a separator
/// (`"My.Package.Name"` -> `"MyPackageName"`).
///
/// An empty input, or an empty segment (leading/trailing/consecutive dots),
/// is a precondition violation and yields a configuration error: a package
/// id that cannot produce an identifier is caller error, not something to
/// silently repair.
pub fn sanitize_class_name(name: &str) -> AppResult<String> {
    if name.is_empty() {
        return Err(AppError::Config(
            "cannot derive a class name from an empty package id".into(),
        ));
    }

    let mut out = String::with_capacity(name.len());
    for segment in name.split('.') {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) => {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
            None => {
                return Err(AppError::Config(format!(
                    "cannot derive a class name from '{}': empty segment",
                    name
                )));
            }
        }
    }

    Ok(out)
}

/// Ensures `value` carries `prefix`, without double-prefixing.
///
/// The check is case-insensitive and the original casing is preserved when
/// the prefix is already present (`"nswagJsonLibrary"` stays untouched).
pub fn normalize_prefix(prefix: &str, value: &str) -> String {
    let already_prefixed = value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix));

    if already_prefixed {
        value.to_string()
    } else {
        format!("{}{}", prefix, value)
    }
}

/// Parses a single `key=value` token into a trimmed pair.
///
/// The token is split on `=` with empty entries from repeated delimiters
/// dropped; after trimming, exactly two non-empty parts must remain.
/// Anything else is a parse error naming the offending token verbatim.
///
/// Usable directly as a clap `value_parser`.
pub fn parse_key_value(token: &str) -> AppResult<(String, String)> {
    let parts: Vec<&str> = token
        .split('=')
        .filter(|part| !part.is_empty())
        .map(str::trim)
        .collect();

    match parts.as_slice() {
        [key, value] if !key.is_empty() && !value.is_empty() => {
            Ok((key.to_string(), value.to_string()))
        }
        _ => Err(AppError::Parse(format!(
            "expected 'key=value', got '{}'",
            token
        ))),
    }
}

/// Parses a sequence of `key=value` tokens, preserving input order.
///
/// Duplicate keys are permitted and all occurrences are retained; callers
/// that accept no tokens pass an empty slice and get an empty result.
pub fn parse_key_value_pairs(tokens: &[String]) -> AppResult<Vec<(String, String)>> {
    tokens.iter().map(|token| parse_key_value(token)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_multi_segment() {
        assert_eq!(
            sanitize_class_name("My.Package.Name").unwrap(),
            "MyPackageName"
        );
        assert_eq!(sanitize_class_name("A.B.C.D").unwrap(), "ABCD");
    }

    #[test]
    fn test_sanitize_idempotent_on_single_segment() {
        assert_eq!(sanitize_class_name("Foo").unwrap(), "Foo");
    }

    #[test]
    fn test_sanitize_preserves_inner_casing() {
        assert_eq!(
            sanitize_class_name("acme.petStore").unwrap(),
            "AcmePetStore"
        );
    }

    #[test]
    fn test_sanitize_rejects_empty_input() {
        let err = sanitize_class_name("").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_sanitize_rejects_empty_segments() {
        for bad in [".Leading", "Trailing.", "Double..Dot"] {
            let err = sanitize_class_name(bad).unwrap_err();
            assert!(
                format!("{}", err).contains("empty segment"),
                "expected empty-segment error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_normalize_prefix_applied() {
        assert_eq!(
            normalize_prefix("NSwag", "JsonLibrary"),
            "NSwagJsonLibrary"
        );
    }

    #[test]
    fn test_normalize_prefix_already_present() {
        assert_eq!(
            normalize_prefix("NSwag", "NSwagJsonLibrary"),
            "NSwagJsonLibrary"
        );
        // Case-insensitive match, original casing preserved
        assert_eq!(
            normalize_prefix("NSwag", "nswagJsonLibrary"),
            "nswagJsonLibrary"
        );
    }

    #[test]
    fn test_parse_key_value_basic() {
        assert_eq!(
            parse_key_value("key=value").unwrap(),
            ("key".to_string(), "value".to_string())
        );
    }

    #[test]
    fn test_parse_key_value_trims_whitespace() {
        assert_eq!(
            parse_key_value(" key = value ").unwrap(),
            ("key".to_string(), "value".to_string())
        );
    }

    #[test]
    fn test_parse_key_value_repeated_delimiter() {
        // Empty entries between delimiters are dropped before counting
        assert_eq!(
            parse_key_value("key==value").unwrap(),
            ("key".to_string(), "value".to_string())
        );
    }

    #[test]
    fn test_parse_key_value_errors_name_the_token() {
        for bad in ["invalid", "no-equals-sign", "", "a=b=c", "=value", "key="] {
            let err = parse_key_value(bad).unwrap_err();
            match err {
                AppError::Parse(msg) => {
                    assert!(msg.contains(bad), "message should quote {:?}: {}", bad, msg)
                }
                other => panic!("expected Parse error for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_parse_pairs_empty_input() {
        assert!(parse_key_value_pairs(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_parse_pairs_retains_duplicates_in_order() {
        let tokens = vec!["key=value1".to_string(), "key=value2".to_string()];
        let pairs = parse_key_value_pairs(&tokens).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("key".to_string(), "value1".to_string()),
                ("key".to_string(), "value2".to_string()),
            ]
        );
    }
}
