//! Text transport for encoded payloads: URL-safe base64 without padding.

use base64ct::{Base64UrlUnpadded, Encoding};

use crate::error::CodecError;

/// Render bytes as a URL-safe, unpadded base64 string.
pub fn encode(bytes: &[u8]) -> String {
    Base64UrlUnpadded::encode_string(bytes)
}

/// Parse a string produced by [`encode`].
///
/// # Errors
///
/// [`CodecError::InvalidTransport`] for characters outside the URL-safe
/// alphabet, padding, or a non-canonical trailing group.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(Base64UrlUnpadded::decode_vec(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_safe_alphabet() {
        let text = encode(&[0xFB, 0xFF, 0xBF]);
        assert_eq!(text, "-_-_");
        assert_eq!(decode(&text).unwrap(), vec![0xFB, 0xFF, 0xBF]);
    }

    #[test]
    fn no_padding() {
        assert_eq!(encode(&[0xAB]), "qw");
        assert_eq!(decode("qw").unwrap(), vec![0xAB]);
        assert!(decode("qw==").is_err());
    }

    #[test]
    fn rejects_standard_alphabet() {
        assert!(matches!(decode("+/+/"), Err(CodecError::InvalidTransport(_))));
    }

    #[test]
    fn empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }
}
