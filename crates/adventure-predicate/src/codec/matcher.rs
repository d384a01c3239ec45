//! Property matcher encoding/decoding.
//!
//! ```text
//! PropertyMatcher := name:string ValueMatcher
//! ValueMatcher    := is_exact:bool
//!                    (is_exact ? value:string : min:Opt<string> max:Opt<string>)
//! ```

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::MAX_STRING_LEN;
use crate::model::{PropertyMatcher, ValueMatcher};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a value matcher from the reader.
pub fn decode_value_matcher(reader: &mut Reader<'_>) -> Result<ValueMatcher, DecodeError> {
    if reader.read_bool("value_matcher.exact")? {
        let value = reader.read_string(MAX_STRING_LEN, "value_matcher.value")?;
        return Ok(ValueMatcher::Exact(value));
    }

    let min = reader.read_optional("value_matcher.min", |r| {
        r.read_string(MAX_STRING_LEN, "value_matcher.min")
    })?;
    let max = reader.read_optional("value_matcher.max", |r| {
        r.read_string(MAX_STRING_LEN, "value_matcher.max")
    })?;
    Ok(ValueMatcher::Ranged { min, max })
}

/// Decodes a property matcher from the reader.
pub fn decode_property_matcher(reader: &mut Reader<'_>) -> Result<PropertyMatcher, DecodeError> {
    let name = reader.read_string(MAX_STRING_LEN, "property.name")?;
    let matcher = decode_value_matcher(reader)?;
    Ok(PropertyMatcher { name, matcher })
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a value matcher to the writer.
pub fn encode_value_matcher(writer: &mut Writer, matcher: &ValueMatcher) -> Result<(), EncodeError> {
    match matcher {
        ValueMatcher::Exact(value) => {
            writer.write_bool(true);
            writer.write_string(value, MAX_STRING_LEN, "value_matcher.value")
        }
        ValueMatcher::Ranged { min, max } => {
            writer.write_bool(false);
            writer.write_optional(min.as_deref(), |w, v| {
                w.write_string(v, MAX_STRING_LEN, "value_matcher.min")
            })?;
            writer.write_optional(max.as_deref(), |w, v| {
                w.write_string(v, MAX_STRING_LEN, "value_matcher.max")
            })
        }
    }
}

/// Encodes a property matcher to the writer.
pub fn encode_property_matcher(
    writer: &mut Writer,
    matcher: &PropertyMatcher,
) -> Result<(), EncodeError> {
    writer.write_string(&matcher.name, MAX_STRING_LEN, "property.name")?;
    encode_value_matcher(writer, &matcher.matcher)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(matcher: &ValueMatcher) -> Vec<u8> {
        let mut writer = Writer::new();
        encode_value_matcher(&mut writer, matcher).unwrap();
        writer.into_bytes()
    }

    #[test]
    fn test_exact_discriminator() {
        let bytes = encode(&ValueMatcher::Exact("x".to_string()));
        assert_eq!(bytes, [0x01, 0x01, b'x']);
    }

    #[test]
    fn test_unbounded_range_discriminator() {
        let bytes = encode(&ValueMatcher::Ranged {
            min: None,
            max: None,
        });
        assert_eq!(bytes, [0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_range_bounds_order() {
        let bytes = encode(&ValueMatcher::Ranged {
            min: None,
            max: Some("5".to_string()),
        });
        assert_eq!(bytes, [0x00, 0x00, 0x01, 0x01, b'5']);

        let bytes = encode(&ValueMatcher::Ranged {
            min: Some("2".to_string()),
            max: None,
        });
        assert_eq!(bytes, [0x00, 0x01, 0x01, b'2', 0x00]);
    }

    #[test]
    fn test_value_matcher_roundtrip() {
        let matchers = [
            ValueMatcher::Exact(String::new()),
            ValueMatcher::Exact("north".to_string()),
            ValueMatcher::Ranged {
                min: None,
                max: None,
            },
            ValueMatcher::Ranged {
                min: Some("1".to_string()),
                max: None,
            },
            ValueMatcher::Ranged {
                min: None,
                max: Some("15".to_string()),
            },
            ValueMatcher::Ranged {
                min: Some("1".to_string()),
                max: Some("15".to_string()),
            },
        ];

        for matcher in matchers {
            let bytes = encode(&matcher);
            let mut reader = Reader::new(&bytes);
            let decoded = decode_value_matcher(&mut reader).unwrap();
            assert_eq!(decoded, matcher);
            assert!(reader.is_empty());
        }
    }

    #[test]
    fn test_property_matcher_wire_format() {
        let matcher = PropertyMatcher::exact("axis", "y");

        let mut writer = Writer::new();
        encode_property_matcher(&mut writer, &matcher).unwrap();
        assert_eq!(
            writer.as_bytes(),
            &[0x04, b'a', b'x', b'i', b's', 0x01, 0x01, b'y']
        );

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(decode_property_matcher(&mut reader).unwrap(), matcher);
    }

    #[test]
    fn test_invalid_discriminator() {
        let mut reader = Reader::new(&[0x02]);
        assert_eq!(
            decode_value_matcher(&mut reader),
            Err(DecodeError::InvalidBool { value: 2 })
        );
    }

    #[test]
    fn test_overlong_value_rejected_on_encode() {
        let value = "a".repeat(MAX_STRING_LEN + 1);
        let mut writer = Writer::new();
        let result = encode_value_matcher(&mut writer, &ValueMatcher::Exact(value));
        assert_eq!(
            result,
            Err(EncodeError::StringTooLong {
                field: "value_matcher.value",
                len: MAX_STRING_LEN + 1,
                max: MAX_STRING_LEN,
            })
        );
    }
}
