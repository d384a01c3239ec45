//! Binary encoding/decoding for adventure-mode predicates.
//!
//! Each structured codec is a pair of free functions over a [`Reader`] or
//! [`Writer`]; composite codecs plug element codecs into the optional and
//! list framings of [`primitives`].

pub mod holder_set;
pub mod matcher;
pub mod nbt;
pub mod predicate;
pub mod primitives;

pub use holder_set::{decode_holder_set, encode_holder_set};
pub use matcher::{
    decode_property_matcher, decode_value_matcher, encode_property_matcher, encode_value_matcher,
};
pub use nbt::{decode_compound, encode_compound};
pub use predicate::{
    decode_adventure_predicate, decode_block_predicate, decode_predicate,
    encode_adventure_predicate, encode_block_predicate, encode_predicate,
};
pub use primitives::{Reader, Writer};
