//! Opaque NBT compound payloads.

use crate::codec::nbt::decode_compound;
use crate::codec::primitives::Reader;
use crate::error::{ConstructionError, DecodeError};

/// Tag type id of an NBT compound.
pub const TAG_COMPOUND: u8 = 10;

/// Raw bytes of one network NBT compound (type byte, then a nameless
/// compound payload).
///
/// The contents are never interpreted; only the framing is checked.
/// Equality is byte equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpaqueCompound {
    bytes: Vec<u8>,
}

impl OpaqueCompound {
    /// The empty compound `{}`.
    pub fn empty() -> Self {
        Self {
            bytes: vec![TAG_COMPOUND, 0],
        }
    }

    /// Wraps the encoded bytes of a compound, checking that they hold exactly
    /// one well-formed compound.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ConstructionError> {
        let mut reader = Reader::new(&bytes);
        decode_compound(&mut reader)?;
        if !reader.is_empty() {
            return Err(DecodeError::TrailingBytes {
                remaining: reader.remaining_len(),
            }
            .into());
        }
        Ok(Self { bytes })
    }

    /// Wraps bytes whose framing has already been checked by the decoder.
    pub(crate) fn from_validated(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns true for the empty compound `{}`.
    pub fn is_empty(&self) -> bool {
        self.bytes == [TAG_COMPOUND, 0]
    }
}

impl Default for OpaqueCompound {
    fn default() -> Self {
        Self::empty()
    }
}
