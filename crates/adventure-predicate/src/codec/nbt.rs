//! Framing for opaque NBT compounds.
//!
//! The decoder walks the tag structure only far enough to find where the
//! compound ends. Names and payloads are never interpreted; the consumed
//! bytes are kept verbatim.

use crate::codec::primitives::{Reader, Writer};
use crate::error::DecodeError;
use crate::limits::MAX_NBT_DEPTH;
use crate::model::OpaqueCompound;
use crate::model::compound::TAG_COMPOUND;

// NBT tag type ids
const TAG_END: u8 = 0;
const TAG_BYTE: u8 = 1;
const TAG_SHORT: u8 = 2;
const TAG_INT: u8 = 3;
const TAG_LONG: u8 = 4;
const TAG_FLOAT: u8 = 5;
const TAG_DOUBLE: u8 = 6;
const TAG_BYTE_ARRAY: u8 = 7;
const TAG_STRING: u8 = 8;
const TAG_LIST: u8 = 9;
const TAG_INT_ARRAY: u8 = 11;
const TAG_LONG_ARRAY: u8 = 12;

/// Decodes one network compound (type byte, nameless payload).
pub fn decode_compound(reader: &mut Reader<'_>) -> Result<OpaqueCompound, DecodeError> {
    let start = reader.position();

    let root = reader.read_byte("nbt.type")?;
    if root != TAG_COMPOUND {
        return Err(DecodeError::InvalidNbtRoot { found: root });
    }
    skip_compound_body(reader, 0)?;

    Ok(OpaqueCompound::from_validated(
        reader.consumed_since(start).to_vec(),
    ))
}

/// Encodes a compound by writing its bytes verbatim.
pub fn encode_compound(writer: &mut Writer, compound: &OpaqueCompound) {
    writer.write_bytes(compound.as_bytes());
}

fn skip_compound_body(reader: &mut Reader<'_>, depth: usize) -> Result<(), DecodeError> {
    loop {
        let tag = reader.read_byte("nbt.entry_type")?;
        if tag == TAG_END {
            return Ok(());
        }
        let name_len = reader.read_u16_be("nbt.name")? as usize;
        reader.read_bytes(name_len, "nbt.name")?;
        skip_payload(reader, tag, depth)?;
    }
}

fn skip_payload(reader: &mut Reader<'_>, tag: u8, depth: usize) -> Result<(), DecodeError> {
    match tag {
        TAG_BYTE => skip(reader, 1),
        TAG_SHORT => skip(reader, 2),
        TAG_INT | TAG_FLOAT => skip(reader, 4),
        TAG_LONG | TAG_DOUBLE => skip(reader, 8),
        TAG_BYTE_ARRAY => {
            let len = read_array_len(reader, "nbt.byte_array")?;
            skip(reader, len)
        }
        TAG_STRING => {
            let len = reader.read_u16_be("nbt.string")? as usize;
            skip(reader, len)
        }
        TAG_LIST => {
            let depth = nested(depth)?;
            let element = reader.read_byte("nbt.list_type")?;
            let len = read_array_len(reader, "nbt.list")?;
            if element == TAG_END && len > 0 {
                return Err(DecodeError::InvalidNbtTag { tag: element });
            }
            for _ in 0..len {
                skip_payload(reader, element, depth)?;
            }
            Ok(())
        }
        TAG_COMPOUND => skip_compound_body(reader, nested(depth)?),
        TAG_INT_ARRAY => {
            let len = read_array_len(reader, "nbt.int_array")?;
            skip(reader, len.saturating_mul(4))
        }
        TAG_LONG_ARRAY => {
            let len = read_array_len(reader, "nbt.long_array")?;
            skip(reader, len.saturating_mul(8))
        }
        _ => Err(DecodeError::InvalidNbtTag { tag }),
    }
}

fn skip(reader: &mut Reader<'_>, n: usize) -> Result<(), DecodeError> {
    reader.read_bytes(n, "nbt.payload").map(|_| ())
}

fn nested(depth: usize) -> Result<usize, DecodeError> {
    let depth = depth + 1;
    if depth > MAX_NBT_DEPTH {
        return Err(DecodeError::NbtTooDeep { max: MAX_NBT_DEPTH });
    }
    Ok(depth)
}

fn read_array_len(reader: &mut Reader<'_>, field: &'static str) -> Result<usize, DecodeError> {
    let len = reader.read_i32_be(field)?;
    if len < 0 {
        return Err(DecodeError::NegativeLength { field, len });
    }
    Ok(len as usize)
}
