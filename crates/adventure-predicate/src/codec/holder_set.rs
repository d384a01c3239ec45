//! Holder set encoding/decoding.
//!
//! The variant is folded into the leading varint:
//!
//! ```text
//! HolderSet := count_plus_one:varint
//!              (count_plus_one == 0 ? tag:identifier
//!                                   : (count_plus_one - 1) x id:varint)
//! ```
//!
//! `0` selects a tag reference, any other value `n` introduces `n - 1` ids,
//! so an empty id list is written as `1`.

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::model::HolderSet;

/// Count field value that marks a tag reference.
const TAG_REFERENCE: u32 = 0;

/// Decodes a holder set from the reader.
pub fn decode_holder_set(reader: &mut Reader<'_>) -> Result<HolderSet, DecodeError> {
    let count_plus_one = reader.read_length("holder_set.count")?;

    if count_plus_one == TAG_REFERENCE as usize {
        let tag = reader.read_identifier("holder_set.tag")?;
        return Ok(HolderSet::Tag(tag));
    }

    let ids = reader.read_elements(count_plus_one - 1, "holder_set.ids", |r| {
        r.read_varint("holder_set.id")
    })?;
    Ok(HolderSet::Ids(ids))
}

/// Encodes a holder set to the writer.
pub fn encode_holder_set(writer: &mut Writer, set: &HolderSet) -> Result<(), EncodeError> {
    match set {
        HolderSet::Tag(tag) => {
            writer.write_varint(TAG_REFERENCE);
            writer.write_identifier(tag, "holder_set.tag")
        }
        HolderSet::Ids(ids) => {
            // The folded count must still fit a signed 32-bit varint
            writer.write_length(ids.len().saturating_add(1), "holder_set.ids")?;
            for &id in ids {
                writer.write_varint(id);
            }
            Ok(())
        }
    }
}
