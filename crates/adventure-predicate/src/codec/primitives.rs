//! Primitive encoding/decoding for the predicate wire format.
//!
//! Implements varints, booleans, strings, identifiers and the generic
//! optional and list framings that the structured codecs plug into.

use crate::error::{DecodeError, EncodeError};
use crate::limits::{MAX_PREALLOCATION, MAX_STRING_LEN, MAX_VARINT_BYTES};
use crate::model::Identifier;

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and provides methods for reading primitives
/// with bounds checking and error handling.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the remaining bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Returns the bytes consumed since `start`.
    pub(crate) fn consumed_since(&self, start: usize) -> &'a [u8] {
        &self.data[start..self.pos]
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        if self.pos >= self.data.len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining_len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads a boolean encoded as 0x00 or 0x01.
    #[inline]
    pub fn read_bool(&mut self, context: &'static str) -> Result<bool, DecodeError> {
        match self.read_byte(context)? {
            0x00 => Ok(false),
            0x01 => Ok(true),
            value => Err(DecodeError::InvalidBool { value }),
        }
    }

    /// Reads a big-endian u16.
    pub fn read_u16_be(&mut self, context: &'static str) -> Result<u16, DecodeError> {
        let bytes = self.read_bytes(2, context)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Reads a big-endian i32.
    pub fn read_i32_be(&mut self, context: &'static str) -> Result<i32, DecodeError> {
        let bytes = self.read_bytes(4, context)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads an unsigned 32-bit varint (LEB128).
    #[inline]
    pub fn read_varint(&mut self, context: &'static str) -> Result<u32, DecodeError> {
        let mut result: u32 = 0;

        for i in 0..MAX_VARINT_BYTES {
            let byte = self.read_byte(context)?;
            let value = (byte & 0x7F) as u32;
            let shift = 7 * i as u32;

            // The fifth byte only has room for the top four bits
            if i == MAX_VARINT_BYTES - 1 && value > 0x0F {
                return Err(DecodeError::VarintOverflow);
            }

            result |= value << shift;

            if byte & 0x80 == 0 {
                return Ok(result);
            }
        }

        Err(DecodeError::VarintTooLong)
    }

    /// Reads a varint length, rejecting values that are negative when read
    /// as a signed 32-bit integer.
    pub fn read_length(&mut self, field: &'static str) -> Result<usize, DecodeError> {
        let raw = self.read_varint(field)? as i32;
        if raw < 0 {
            return Err(DecodeError::NegativeLength { field, len: raw });
        }
        Ok(raw as usize)
    }

    /// Reads a length-prefixed UTF-8 string of at most `max_len` UTF-16 units.
    pub fn read_string(
        &mut self,
        max_len: usize,
        field: &'static str,
    ) -> Result<String, DecodeError> {
        let len = self.read_length(field)?;
        let max_bytes = max_len.saturating_mul(3);
        if len > max_bytes {
            return Err(DecodeError::LengthExceedsLimit {
                field,
                len,
                max: max_bytes,
            });
        }
        let bytes = self.read_bytes(len, field)?;
        // Validate UTF-8 on borrowed slice, then allocate once
        let s = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 { field })?;
        let units = utf16_len(s);
        if units > max_len {
            return Err(DecodeError::LengthExceedsLimit {
                field,
                len: units,
                max: max_len,
            });
        }
        Ok(s.to_string())
    }

    /// Reads a namespaced identifier.
    pub fn read_identifier(&mut self, field: &'static str) -> Result<Identifier, DecodeError> {
        let value = self.read_string(MAX_STRING_LEN, field)?;
        match Identifier::parse(&value) {
            Ok(id) => Ok(id),
            Err(_) => Err(DecodeError::InvalidIdentifier { value }),
        }
    }

    /// Reads a presence flag, then the element if present.
    pub fn read_optional<T, F>(&mut self, context: &'static str, read: F) -> Result<Option<T>, DecodeError>
    where
        F: FnOnce(&mut Self) -> Result<T, DecodeError>,
    {
        if self.read_bool(context)? {
            Ok(Some(read(self)?))
        } else {
            Ok(None)
        }
    }

    /// Reads a varint count, then exactly that many elements in order.
    ///
    /// The count only sizes the initial allocation up to
    /// [`MAX_PREALLOCATION`]; every declared element is still read.
    pub fn read_list<T, F>(&mut self, field: &'static str, read: F) -> Result<Vec<T>, DecodeError>
    where
        F: FnMut(&mut Self) -> Result<T, DecodeError>,
    {
        let count = self.read_length(field)?;
        self.read_elements(count, field, read)
    }

    /// Reads `count` elements with a capped preallocation.
    pub(crate) fn read_elements<T, F>(
        &mut self,
        count: usize,
        field: &'static str,
        mut read: F,
    ) -> Result<Vec<T>, DecodeError>
    where
        F: FnMut(&mut Self) -> Result<T, DecodeError>,
    {
        let mut items = Vec::with_capacity(capped_capacity(count, field));
        for _ in 0..count {
            items.push(read(self)?);
        }
        Ok(items)
    }
}

/// Clamps a declared element count to a safe preallocation size.
pub fn capped_capacity(count: usize, field: &'static str) -> usize {
    if count > MAX_PREALLOCATION {
        log::debug!(
            "{field}: declared count {count} exceeds preallocation cap {MAX_PREALLOCATION}"
        );
        MAX_PREALLOCATION
    } else {
        count
    }
}

/// Length of a string in UTF-16 code units.
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a boolean as 0x00 or 0x01.
    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.buf.push(value as u8);
    }

    /// Writes an unsigned 32-bit varint (LEB128).
    #[inline]
    pub fn write_varint(&mut self, mut value: u32) {
        // Use stack buffer to batch writes
        let mut buf = [0u8; MAX_VARINT_BYTES];
        let mut len = 0;
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            buf[len] = byte;
            len += 1;
            if value == 0 {
                break;
            }
        }
        self.buf.extend_from_slice(&buf[..len]);
    }

    /// Writes a varint length, which must fit a signed 32-bit integer.
    pub fn write_length(&mut self, len: usize, field: &'static str) -> Result<(), EncodeError> {
        if len > i32::MAX as usize {
            return Err(EncodeError::LengthExceedsLimit {
                field,
                len,
                max: i32::MAX as usize,
            });
        }
        self.write_varint(len as u32);
        Ok(())
    }

    /// Writes a length-prefixed UTF-8 string of at most `max_len` UTF-16 units.
    pub fn write_string(
        &mut self,
        s: &str,
        max_len: usize,
        field: &'static str,
    ) -> Result<(), EncodeError> {
        let units = utf16_len(s);
        if units > max_len {
            return Err(EncodeError::StringTooLong {
                field,
                len: units,
                max: max_len,
            });
        }
        self.write_length(s.len(), field)?;
        self.buf.extend_from_slice(s.as_bytes());
        Ok(())
    }

    /// Writes a namespaced identifier as `namespace:path`.
    pub fn write_identifier(&mut self, id: &Identifier, field: &'static str) -> Result<(), EncodeError> {
        self.write_string(&id.to_string(), MAX_STRING_LEN, field)
    }

    /// Writes a presence flag, then the element if present.
    pub fn write_optional<T, F>(&mut self, value: Option<&T>, write: F) -> Result<(), EncodeError>
    where
        T: ?Sized,
        F: FnOnce(&mut Self, &T) -> Result<(), EncodeError>,
    {
        match value {
            Some(value) => {
                self.write_bool(true);
                write(self, value)
            }
            None => {
                self.write_bool(false);
                Ok(())
            }
        }
    }

    /// Writes the element count, then each element in order.
    pub fn write_list<T, F>(
        &mut self,
        items: &[T],
        field: &'static str,
        mut write: F,
    ) -> Result<(), EncodeError>
    where
        F: FnMut(&mut Self, &T) -> Result<(), EncodeError>,
    {
        self.write_length(items.len(), field)?;
        for item in items {
            write(self, item)?;
        }
        Ok(())
    }
}
