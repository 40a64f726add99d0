//! Conversion between UTF-8 text and the TIS-620 code page

use thiserror::Error;

use crate::types::ThaiChar;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("No valid TIS-620 encoding for any alignment of {0:?}")]
    NoValidAlignment(String),

    #[error("No valid UTF-8 encoding for any alignment of {0} TIS-620 bytes")]
    UnmappedBytes(usize),
}

/// Byte transcoding between the host's text and the internal code page
pub trait Transcoder: Send + std::fmt::Debug {
    /// UTF-8 → code page
    fn decode(&self, text: &str) -> Result<Vec<ThaiChar>, CodecError>;

    /// Code page → UTF-8
    fn encode(&self, chars: &[ThaiChar]) -> Result<String, CodecError>;
}

/// TIS-620 transcoder.
///
/// Both directions retry from each successive character boundary: the first
/// suffix that converts completely is returned, so unmappable leading
/// characters are dropped rather than failing the whole conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tis620;

impl Tis620 {
    fn decode_all(text: &str) -> Option<Vec<ThaiChar>> {
        text.chars().map(ThaiChar::from_char).collect()
    }

    fn encode_all(chars: &[ThaiChar]) -> Option<String> {
        chars.iter().map(|c| c.to_char()).collect()
    }
}

impl Transcoder for Tis620 {
    fn decode(&self, text: &str) -> Result<Vec<ThaiChar>, CodecError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        text.char_indices()
            .find_map(|(start, _)| Self::decode_all(&text[start..]))
            .ok_or_else(|| CodecError::NoValidAlignment(text.to_string()))
    }

    fn encode(&self, chars: &[ThaiChar]) -> Result<String, CodecError> {
        if chars.is_empty() {
            return Ok(String::new());
        }
        (0..chars.len())
            .find_map(|start| Self::encode_all(&chars[start..]))
            .ok_or(CodecError::UnmappedBytes(chars.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tis_str;

    #[test]
    fn test_decode_thai_and_ascii() {
        let chars = Tis620.decode("ก่a").unwrap();
        assert_eq!(chars, vec![ThaiChar(0xA1), ThaiChar(0xE8), ThaiChar(b'a')]);
    }

    #[test]
    fn test_decode_skips_unmappable_prefix() {
        assert_eq!(Tis620.decode("éกิ").unwrap(), tis_str("กิ"));
    }

    #[test]
    fn test_decode_fails_when_no_suffix_converts() {
        assert!(matches!(
            Tis620.decode("กé"),
            Err(CodecError::NoValidAlignment(_))
        ));
    }

    #[test]
    fn test_encode() {
        assert_eq!(Tis620.encode(&tis_str("ฟ")).unwrap(), "ฟ");
        assert_eq!(Tis620.encode(&[ThaiChar(0xDB), ThaiChar(0xA1)]).unwrap(), "ก");
        assert_eq!(Tis620.encode(&[ThaiChar(0xA1), ThaiChar(0xFF)]), Err(CodecError::UnmappedBytes(2)));
        assert_eq!(Tis620.encode(&[]).unwrap(), "");
    }
}
