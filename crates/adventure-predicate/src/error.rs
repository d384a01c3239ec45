//! Error types for predicate encoding, decoding and construction.

use thiserror::Error;

/// Coarse classification of decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Input ended before the structure was complete
    Truncated,
    /// E002: Malformed varint/length/bool/trailing data
    MalformedEncoding,
    /// E003: Invalid UTF-8 encoding
    InvalidUtf8,
    /// E004: Invalid identifier or compound framing
    InvalidPayload,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::Truncated => "E001",
            ErrorCode::MalformedEncoding => "E002",
            ErrorCode::InvalidUtf8 => "E003",
            ErrorCode::InvalidPayload => "E004",
        }
    }
}

/// Error during binary decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    // === E001: Truncated input ===
    #[error("[E001] unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    // === E002: Malformed encoding ===
    #[error("[E002] varint exceeds maximum length (5 bytes)")]
    VarintTooLong,

    #[error("[E002] varint overflow (value exceeds 32 bits)")]
    VarintOverflow,

    #[error("[E002] {field} length {len} is negative")]
    NegativeLength { field: &'static str, len: i32 },

    #[error("[E002] {field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("[E002] invalid bool value: {value} (expected 0x00 or 0x01)")]
    InvalidBool { value: u8 },

    #[error("[E002] {remaining} trailing bytes after predicate")]
    TrailingBytes { remaining: usize },

    // === E003: Invalid UTF-8 ===
    #[error("[E003] invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    // === E004: Invalid payload ===
    #[error("[E004] invalid identifier: {value:?}")]
    InvalidIdentifier { value: String },

    #[error("[E004] compound must start with tag type 10, found {found}")]
    InvalidNbtRoot { found: u8 },

    #[error("[E004] unknown NBT tag type: {tag}")]
    InvalidNbtTag { tag: u8 },

    #[error("[E004] compound nesting exceeds maximum depth {max}")]
    NbtTooDeep { max: usize },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::UnexpectedEof { .. } => ErrorCode::Truncated,
            DecodeError::InvalidUtf8 { .. } => ErrorCode::InvalidUtf8,
            DecodeError::InvalidIdentifier { .. }
            | DecodeError::InvalidNbtRoot { .. }
            | DecodeError::InvalidNbtTag { .. }
            | DecodeError::NbtTooDeep { .. } => ErrorCode::InvalidPayload,
            _ => ErrorCode::MalformedEncoding,
        }
    }
}

/// Error during binary encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("{field} string length {len} exceeds maximum {max}")]
    StringTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

/// Error when building a value that violates a model invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("illegal holder set: one of tag or ids has to be set")]
    EmptyHolderSet,

    #[error("illegal holder set: tag and ids are mutually exclusive")]
    AmbiguousHolderSet,

    #[error("invalid identifier {value:?}: {reason}")]
    InvalidIdentifier { value: String, reason: &'static str },

    #[error("invalid compound: {0}")]
    InvalidCompound(#[from] DecodeError),
}
