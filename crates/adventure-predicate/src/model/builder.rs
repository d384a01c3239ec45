//! Builder API for ergonomic predicate construction.
//!
//! Provides a fluent interface for building adventure-mode predicates.
//!
//! # Example
//!
//! ```rust
//! use adventure_predicate::model::builder::AdventureModePredicateBuilder;
//! use adventure_predicate::Identifier;
//!
//! let predicate = AdventureModePredicateBuilder::new()
//!     .block(|b| b
//!         .tag(Identifier::minecraft("logs").unwrap())
//!         .exact("axis", "y")
//!     )
//!     .block(|b| b.ids([1, 2, 3]))
//!     .show_in_tooltip(true)
//!     .build();
//!
//! assert_eq!(predicate.predicates.len(), 2);
//! ```

use crate::model::{
    AdventureModePredicate, BlockPredicate, HolderId, HolderSet, Identifier, OpaqueCompound,
    PropertyMatcher,
};

/// Builder for constructing an [`AdventureModePredicate`].
#[derive(Debug, Clone, Default)]
pub struct AdventureModePredicateBuilder {
    predicates: Vec<BlockPredicate>,
    show_in_tooltip: bool,
}

impl AdventureModePredicateBuilder {
    /// Creates a new builder with no predicates and the tooltip hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a block predicate using a builder function.
    pub fn block<F>(mut self, f: F) -> Self
    where
        F: FnOnce(BlockPredicateBuilder) -> BlockPredicateBuilder,
    {
        self.predicates.push(f(BlockPredicateBuilder::new()).build());
        self
    }

    /// Adds a prebuilt block predicate.
    pub fn predicate(mut self, predicate: BlockPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Adds multiple prebuilt block predicates.
    pub fn predicates(mut self, predicates: impl IntoIterator<Item = BlockPredicate>) -> Self {
        self.predicates.extend(predicates);
        self
    }

    /// Sets whether the predicates are shown in the item tooltip.
    pub fn show_in_tooltip(mut self, show: bool) -> Self {
        self.show_in_tooltip = show;
        self
    }

    /// Builds the final predicate.
    pub fn build(self) -> AdventureModePredicate {
        AdventureModePredicate {
            predicates: self.predicates,
            show_in_tooltip: self.show_in_tooltip,
        }
    }

    /// Returns the number of block predicates added so far.
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }
}

/// Builder for a single [`BlockPredicate`].
///
/// Fields left untouched stay absent. Adding the first property matcher
/// makes the property list present.
#[derive(Debug, Clone, Default)]
pub struct BlockPredicateBuilder {
    blocks: Option<HolderSet>,
    properties: Option<Vec<PropertyMatcher>>,
    nbt: Option<OpaqueCompound>,
}

impl BlockPredicateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches every block in a tag. Replaces any previous block set.
    pub fn tag(mut self, tag: Identifier) -> Self {
        self.blocks = Some(HolderSet::Tag(tag));
        self
    }

    /// Matches an explicit list of block ids. Replaces any previous block set.
    pub fn ids(mut self, ids: impl IntoIterator<Item = HolderId>) -> Self {
        self.blocks = Some(HolderSet::Ids(ids.into_iter().collect()));
        self
    }

    /// Sets the block set directly.
    pub fn blocks(mut self, blocks: HolderSet) -> Self {
        self.blocks = Some(blocks);
        self
    }

    /// Adds a property matcher.
    pub fn property(mut self, matcher: PropertyMatcher) -> Self {
        self.properties.get_or_insert_with(Vec::new).push(matcher);
        self
    }

    /// Adds an exact-value property matcher.
    pub fn exact(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.property(PropertyMatcher::exact(name, value))
    }

    /// Adds a ranged property matcher.
    pub fn ranged(self, name: impl Into<String>, min: Option<&str>, max: Option<&str>) -> Self {
        self.property(PropertyMatcher::ranged(name, min, max))
    }

    /// Marks the property list present even if no matcher is added.
    pub fn any_properties(mut self) -> Self {
        self.properties.get_or_insert_with(Vec::new);
        self
    }

    /// Sets the block entity data to match.
    pub fn nbt(mut self, nbt: OpaqueCompound) -> Self {
        self.nbt = Some(nbt);
        self
    }

    pub fn build(self) -> BlockPredicate {
        BlockPredicate {
            blocks: self.blocks,
            properties: self.properties,
            nbt: self.nbt,
        }
    }
}
