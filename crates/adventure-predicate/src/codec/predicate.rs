//! Block predicate and adventure-mode predicate encoding/decoding.
//!
//! ```text
//! AdventureModePredicate := List<BlockPredicate> show_in_tooltip:bool
//! BlockPredicate         := Opt<HolderSet> Opt<List<PropertyMatcher>> Opt<OpaqueCompound>
//! ```
//!
//! Fields are positional; their order is part of the wire format.

use crate::codec::holder_set::{decode_holder_set, encode_holder_set};
use crate::codec::matcher::{decode_property_matcher, encode_property_matcher};
use crate::codec::nbt::{decode_compound, encode_compound};
use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::model::{AdventureModePredicate, BlockPredicate};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a complete predicate from a byte slice.
///
/// The whole input must be consumed; use [`decode_adventure_predicate`] to
/// read a predicate embedded in a larger packet.
pub fn decode_predicate(input: &[u8]) -> Result<AdventureModePredicate, DecodeError> {
    log::trace!("decoding adventure predicate from {} bytes", input.len());

    let mut reader = Reader::new(input);
    let predicate = decode_adventure_predicate(&mut reader)?;
    if !reader.is_empty() {
        return Err(DecodeError::TrailingBytes {
            remaining: reader.remaining_len(),
        });
    }
    Ok(predicate)
}

/// Decodes an adventure-mode predicate from the reader.
pub fn decode_adventure_predicate(
    reader: &mut Reader<'_>,
) -> Result<AdventureModePredicate, DecodeError> {
    let predicates = reader.read_list("predicates", decode_block_predicate)?;
    let show_in_tooltip = reader.read_bool("show_in_tooltip")?;
    Ok(AdventureModePredicate {
        predicates,
        show_in_tooltip,
    })
}

/// Decodes a block predicate from the reader.
pub fn decode_block_predicate(reader: &mut Reader<'_>) -> Result<BlockPredicate, DecodeError> {
    let blocks = reader.read_optional("blocks", decode_holder_set)?;
    let properties = reader.read_optional("properties", |r| {
        r.read_list("properties", decode_property_matcher)
    })?;
    let nbt = reader.read_optional("nbt", decode_compound)?;
    Ok(BlockPredicate {
        blocks,
        properties,
        nbt,
    })
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a predicate to a new byte vector.
pub fn encode_predicate(predicate: &AdventureModePredicate) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::new();
    encode_adventure_predicate(&mut writer, predicate)?;
    log::trace!(
        "encoded {} block predicates into {} bytes",
        predicate.predicates.len(),
        writer.len()
    );
    Ok(writer.into_bytes())
}

/// Encodes an adventure-mode predicate to the writer.
pub fn encode_adventure_predicate(
    writer: &mut Writer,
    predicate: &AdventureModePredicate,
) -> Result<(), EncodeError> {
    writer.write_list(&predicate.predicates, "predicates", encode_block_predicate)?;
    writer.write_bool(predicate.show_in_tooltip);
    Ok(())
}

/// Encodes a block predicate to the writer.
pub fn encode_block_predicate(
    writer: &mut Writer,
    predicate: &BlockPredicate,
) -> Result<(), EncodeError> {
    writer.write_optional(predicate.blocks.as_ref(), encode_holder_set)?;
    writer.write_optional(predicate.properties.as_deref(), |w, properties| {
        w.write_list(properties, "properties", encode_property_matcher)
    })?;
    writer.write_optional(predicate.nbt.as_ref(), |w, nbt| {
        encode_compound(w, nbt);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HolderSet, Identifier, OpaqueCompound, PropertyMatcher, ValueMatcher};

    use proptest::prelude::*;

    fn roundtrip(predicate: &AdventureModePredicate) -> AdventureModePredicate {
        let bytes = encode_predicate(predicate).unwrap();
        decode_predicate(&bytes).unwrap()
    }

    fn sample_compound() -> OpaqueCompound {
        // {lock: "key"}
        let mut bytes = vec![10, 8, 0, 4];
        bytes.extend_from_slice(b"lock");
        bytes.extend_from_slice(&[0, 3]);
        bytes.extend_from_slice(b"key");
        bytes.push(0);
        OpaqueCompound::from_bytes(bytes).unwrap()
    }

    #[test]
    fn test_end_to_end_wire_bytes() {
        let predicate = AdventureModePredicate::new(
            vec![BlockPredicate::new(
                Some(HolderSet::Ids(vec![1, 2, 3])),
                None,
                None,
            )],
            true,
        );

        let bytes = encode_predicate(&predicate).unwrap();
        assert_eq!(
            bytes,
            [
                0x01, // predicate count
                0x01, // blocks present
                0x04, // ids.len() + 1
                0x01, 0x02, 0x03, // ids
                0x00, // properties absent
                0x00, // nbt absent
                0x01, // show_in_tooltip
            ]
        );
        assert_eq!(decode_predicate(&bytes).unwrap(), predicate);
    }

    #[test]
    fn test_empty_predicate() {
        let predicate = AdventureModePredicate::new(vec![], false);
        let bytes = encode_predicate(&predicate).unwrap();
        assert_eq!(bytes, [0x00, 0x00]);
        assert_eq!(decode_predicate(&bytes).unwrap(), predicate);
    }

    #[test]
    fn test_all_fields_present_roundtrip() {
        let block = BlockPredicate::new(
            Some(HolderSet::Tag(Identifier::minecraft("doors").unwrap())),
            Some(vec![
                PropertyMatcher::exact("half", "lower"),
                PropertyMatcher::ranged("power", Some("1"), Some("15")),
            ]),
            Some(sample_compound()),
        );
        let predicate = AdventureModePredicate::new(vec![block.clone(), block], true);

        assert_eq!(roundtrip(&predicate), predicate);
    }

    #[test]
    fn test_present_but_empty_properties_distinct_from_absent() {
        let absent = BlockPredicate::new(None, None, None);
        let empty = BlockPredicate::new(None, Some(vec![]), None);

        let mut writer = Writer::new();
        encode_block_predicate(&mut writer, &absent).unwrap();
        assert_eq!(writer.as_bytes(), &[0x00, 0x00, 0x00]);

        let mut writer = Writer::new();
        encode_block_predicate(&mut writer, &empty).unwrap();
        assert_eq!(writer.as_bytes(), &[0x00, 0x01, 0x00, 0x00]);

        let predicate = AdventureModePredicate::new(vec![absent, empty], false);
        assert_eq!(roundtrip(&predicate), predicate);
    }

    #[test]
    fn test_predicate_order_preserved() {
        let predicate = AdventureModePredicate::new(
            vec![
                BlockPredicate::new(Some(HolderSet::Ids(vec![9])), None, None),
                BlockPredicate::new(Some(HolderSet::Ids(vec![1])), None, None),
                BlockPredicate::new(Some(HolderSet::Ids(vec![9])), None, None),
            ],
            false,
        );
        assert_eq!(roundtrip(&predicate), predicate);
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        assert_eq!(
            decode_predicate(&[0x00, 0x01, 0xFF]),
            Err(DecodeError::TrailingBytes { remaining: 1 })
        );
    }

    #[test]
    fn test_missing_tooltip_flag() {
        assert_eq!(
            decode_predicate(&[0x00]),
            Err(DecodeError::UnexpectedEof {
                context: "show_in_tooltip"
            })
        );
    }

    #[test]
    fn test_embedded_decode_leaves_rest() {
        let predicate = AdventureModePredicate::new(vec![BlockPredicate::default()], true);

        let mut writer = Writer::new();
        encode_adventure_predicate(&mut writer, &predicate).unwrap();
        writer.write_varint(42);

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(decode_adventure_predicate(&mut reader).unwrap(), predicate);
        assert_eq!(reader.read_varint("next").unwrap(), 42);
    }

    #[test]
    fn test_malformed_nested_field_aborts_decode() {
        // One predicate whose nbt field is not a compound
        let bytes = [0x01, 0x00, 0x00, 0x01, 0x08, 0x00];
        assert_eq!(
            decode_predicate(&bytes),
            Err(DecodeError::InvalidNbtRoot { found: 8 })
        );
    }

    #[test]
    fn test_encode_error_propagates_from_nested_matcher() {
        let predicate = AdventureModePredicate::new(
            vec![BlockPredicate::new(
                None,
                Some(vec![PropertyMatcher::exact(
                    "name".repeat(10_000),
                    "v",
                )]),
                None,
            )],
            false,
        );
        assert!(matches!(
            encode_predicate(&predicate),
            Err(EncodeError::StringTooLong {
                field: "property.name",
                ..
            })
        ));
    }

    // =========================================================================
    // Property tests
    // =========================================================================

    fn arb_identifier() -> impl Strategy<Value = Identifier> {
        ("[a-z0-9_.-]{1,12}", "[a-z0-9_./-]{1,24}")
            .prop_map(|(namespace, path)| Identifier::new(namespace, path).unwrap())
    }

    fn arb_holder_set() -> impl Strategy<Value = HolderSet> {
        prop_oneof![
            arb_identifier().prop_map(HolderSet::Tag),
            prop::collection::vec(any::<u32>(), 0..16).prop_map(HolderSet::Ids),
        ]
    }

    fn arb_value_matcher() -> impl Strategy<Value = ValueMatcher> {
        prop_oneof![
            ".{0,8}".prop_map(ValueMatcher::Exact),
            (proptest::option::of(".{0,8}"), proptest::option::of(".{0,8}"))
                .prop_map(|(min, max)| ValueMatcher::Ranged { min, max }),
        ]
    }

    fn arb_property_matcher() -> impl Strategy<Value = PropertyMatcher> {
        ("[a-z_]{1,10}", arb_value_matcher()).prop_map(|(name, matcher)| PropertyMatcher {
            name,
            matcher,
        })
    }

    fn arb_compound() -> impl Strategy<Value = OpaqueCompound> {
        prop_oneof![Just(OpaqueCompound::empty()), Just(sample_compound())]
    }

    fn arb_block_predicate() -> impl Strategy<Value = BlockPredicate> {
        (
            proptest::option::of(arb_holder_set()),
            proptest::option::of(prop::collection::vec(arb_property_matcher(), 0..4)),
            proptest::option::of(arb_compound()),
        )
            .prop_map(|(blocks, properties, nbt)| BlockPredicate {
                blocks,
                properties,
                nbt,
            })
    }

    fn arb_predicate() -> impl Strategy<Value = AdventureModePredicate> {
        (prop::collection::vec(arb_block_predicate(), 0..6), any::<bool>()).prop_map(
            |(predicates, show_in_tooltip)| AdventureModePredicate {
                predicates,
                show_in_tooltip,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_predicate_roundtrip(predicate in arb_predicate()) {
            let bytes = encode_predicate(&predicate).unwrap();
            prop_assert_eq!(decode_predicate(&bytes).unwrap(), predicate);
        }

        #[test]
        fn prop_truncated_input_never_decodes(predicate in arb_predicate(), cut in any::<prop::sample::Index>()) {
            let bytes = encode_predicate(&predicate).unwrap();
            let cut = cut.index(bytes.len());
            prop_assert!(decode_predicate(&bytes[..cut]).is_err());
        }
    }
}
