//! Data model types for adventure-mode predicates.
//!
//! This module contains the value types that make up a predicate tree:
//! - Identifiers (namespaced resource locations)
//! - Holder sets (tag or explicit id list)
//! - Property matchers (exact or ranged)
//! - Block predicates and the top-level predicate
//! - Builders (ergonomic construction)

pub mod builder;
pub mod compound;
pub mod holder_set;
pub mod identifier;
pub mod matcher;
pub mod predicate;

pub use builder::{AdventureModePredicateBuilder, BlockPredicateBuilder};
pub use compound::OpaqueCompound;
pub use holder_set::{HolderId, HolderSet};
pub use identifier::Identifier;
pub use matcher::{PropertyMatcher, ValueMatcher};
pub use predicate::{AdventureModePredicate, BlockPredicate};
