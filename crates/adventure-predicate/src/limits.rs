//! Protocol limits applied while decoding untrusted input.

/// Upper bound on the capacity preallocated from a declared list count.
///
/// The declared count is only a hint: decoding still reads every declared
/// element, this only caps the eager allocation.
pub const MAX_PREALLOCATION: usize = 65_536;

/// Maximum string length in UTF-16 code units.
pub const MAX_STRING_LEN: usize = 32_767;

/// Maximum encoded length of a 32-bit varint.
pub const MAX_VARINT_BYTES: usize = 5;

/// Maximum nesting depth of compound and list tags inside an opaque compound.
pub const MAX_NBT_DEPTH: usize = 512;

/// Namespace assumed for identifiers written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";
