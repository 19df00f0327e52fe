//! Helpers for callers that version prompts with `MAJOR.MINOR.PATCH`.
//!
//! Dotted versions do not sort correctly as strings (`"1.10.0" < "1.9.0"`).
//! Padding every segment to four digits gives tokens whose string order
//! matches numeric order. The server never applies this implicitly.

use super::error::PromptError;

const SEGMENT_WIDTH: usize = 4;
const SEGMENT_COUNT: usize = 3;

/// Pads a `MAJOR.MINOR.PATCH` version into a sortable token.
///
/// `"1.2.13"` becomes `"0001.0002.0013"`.
pub fn encode_semver(version: &str) -> Result<String, PromptError> {
    let segments: Vec<&str> = version.split('.').collect();
    let valid = segments.len() == SEGMENT_COUNT
        && segments.iter().all(|s| {
            !s.is_empty() && s.len() <= SEGMENT_WIDTH && s.chars().all(|c| c.is_ascii_digit())
        });

    if !valid {
        return Err(PromptError::InvalidSemver(version.to_string()));
    }

    Ok(segments
        .iter()
        .map(|s| format!("{s:0>SEGMENT_WIDTH$}"))
        .collect::<Vec<_>>()
        .join("."))
}

/// Strips the padding added by [`encode_semver`].
///
/// Tokens that were not produced by `encode_semver` are returned with each
/// dot-separated segment trimmed of leading zeros.
pub fn decode_semver(token: &str) -> String {
    token
        .split('.')
        .map(|s| {
            let trimmed = s.trim_start_matches('0');
            if trimmed.is_empty() {
                "0"
            } else {
                trimmed
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pads_each_segment() {
        assert_eq!(encode_semver("1.2.13").unwrap(), "0001.0002.0013");
        assert_eq!(encode_semver("0.0.0").unwrap(), "0000.0000.0000");
        assert_eq!(encode_semver("1234.1.9999").unwrap(), "1234.0001.9999");
    }

    #[test]
    fn test_encode_rejects_malformed_versions() {
        for bad in ["", "1.2", "1.2.3.4", "1..3", "a.b.c", "12345.0.0", "1.2.-3"] {
            assert_eq!(
                encode_semver(bad),
                Err(PromptError::InvalidSemver(bad.to_string())),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_encoded_tokens_sort_numerically() {
        let lower = encode_semver("1.9.0").unwrap();
        let higher = encode_semver("1.10.0").unwrap();
        assert!(lower < higher);
    }

    #[test]
    fn test_decode_strips_padding() {
        assert_eq!(decode_semver("0001.0002.0013"), "1.2.13");
        assert_eq!(decode_semver("0000.0010.0000"), "0.10.0");
    }
}
