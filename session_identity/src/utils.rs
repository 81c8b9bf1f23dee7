use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use thiserror::Error;

/// Standard alphabet, padding optional, trailing bits ignored.
/// Partial padding is rejected separately in `base64_decode`.
const FORGIVING_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode standard base64 the way browsers decode `atob` input.
///
/// ASCII whitespace is skipped anywhere. Padding may be left off entirely,
/// but when present the input must be a whole number of 4-character groups.
pub(crate) fn base64_decode(input: &str) -> Result<Vec<u8>, UtilError> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    if compact.len() % 4 != 0 && compact.contains('=') {
        return Err(UtilError::Format(
            "Failed to decode base64: incomplete padding".to_string(),
        ));
    }

    FORGIVING_STANDARD
        .decode(compact)
        .map_err(|e| UtilError::Format(format!("Failed to decode base64: {e}")))
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilError {
    #[error("Invalid format: {0}")]
    Format(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    #[test]
    fn test_base64_decode_padded() {
        let encoded = STANDARD.encode(b"{\"a\":1}");
        assert_eq!(base64_decode(&encoded).unwrap(), b"{\"a\":1}");
    }

    #[test]
    fn test_base64_decode_without_padding() {
        // "ab" encodes to "YWI=" with padding
        assert_eq!(base64_decode("YWI").unwrap(), b"ab");
    }

    #[test]
    fn test_base64_decode_rejects_partial_padding() {
        assert!(matches!(base64_decode("YQ="), Err(UtilError::Format(_))));
        assert!(base64_decode("YWJjZA=").is_err());
        assert_eq!(base64_decode("YQ==").unwrap(), b"a");
        assert_eq!(base64_decode("YQ").unwrap(), b"a");
    }

    #[test]
    fn test_base64_decode_skips_whitespace() {
        assert_eq!(base64_decode(" YW\nJj ").unwrap(), b"abc");
    }

    #[test]
    fn test_base64_decode_rejects_invalid_alphabet() {
        assert!(matches!(
            base64_decode("!!!invalid!!!"),
            Err(UtilError::Format(_))
        ));
        // URL-safe characters are not part of the standard alphabet
        assert!(base64_decode("invalid_base64").is_err());
    }

    #[test]
    fn test_base64_decode_rejects_impossible_length() {
        // A single trailing sextet can never form a byte
        assert!(base64_decode("YWJjZ").is_err());
    }
}
