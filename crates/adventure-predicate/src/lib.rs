//! Adventure-mode block predicates: wire codec for the `can_place_on` and
//! `can_break` item components.
//!
//! An adventure-mode predicate lists block predicates that restrict which
//! blocks a player in adventure mode may place on or break. Each block
//! predicate can constrain the block type (a tag or an explicit id list),
//! its state properties and its block entity data.
//!
//! # Quick Start
//!
//! ```rust
//! use adventure_predicate::{AdventureModePredicateBuilder, Identifier};
//! use adventure_predicate::codec::{decode_predicate, encode_predicate};
//!
//! // Allow breaking upright logs and three specific blocks
//! let predicate = AdventureModePredicateBuilder::new()
//!     .block(|b| b
//!         .tag(Identifier::minecraft("logs").unwrap())
//!         .exact("axis", "y")
//!     )
//!     .block(|b| b.ids([1, 2, 3]))
//!     .show_in_tooltip(true)
//!     .build();
//!
//! // Encode to binary
//! let bytes = encode_predicate(&predicate).unwrap();
//!
//! // Decode back
//! let decoded = decode_predicate(&bytes).unwrap();
//! assert_eq!(predicate, decoded);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Value types (predicates, holder sets, matchers, identifiers)
//! - [`codec`]: Binary encoding/decoding and the primitive reader/writer
//! - [`error`]: Error types
//! - [`limits`]: Protocol limits for decoding
//!
//! # Security
//!
//! The decoder is designed to handle untrusted input:
//! - Declared counts only size preallocation up to a fixed cap
//! - Varints are limited to 5 bytes / 32 bits
//! - Strings are bounded and UTF-8 checked
//! - Compound nesting is depth-limited
//!
//! # Wire Format
//!
//! ```text
//! AdventureModePredicate := List<BlockPredicate> show_in_tooltip:bool
//! BlockPredicate         := Opt<HolderSet> Opt<List<PropertyMatcher>> Opt<Compound>
//! HolderSet              := count_plus_one:varint (0 ? tag:identifier : ids:varint*)
//! PropertyMatcher        := name:string ValueMatcher
//! ValueMatcher           := is_exact:bool (value:string | min:Opt<string> max:Opt<string>)
//! ```

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{decode_predicate, encode_predicate};
pub use error::{ConstructionError, DecodeError, EncodeError, ErrorCode};
pub use model::{
    AdventureModePredicate, AdventureModePredicateBuilder, BlockPredicate, BlockPredicateBuilder,
    HolderId, HolderSet, Identifier, OpaqueCompound, PropertyMatcher, ValueMatcher,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
