//! Block predicates and the top-level adventure-mode predicate.

use crate::model::{HolderSet, OpaqueCompound, PropertyMatcher};

/// Restricts which block an adventure-mode player may place on or break.
///
/// Every field is optional and independent: an absent field does not
/// constrain the match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockPredicate {
    /// Which blocks match.
    pub blocks: Option<HolderSet>,
    /// Block state properties that must match.
    pub properties: Option<Vec<PropertyMatcher>>,
    /// Block entity data that must match.
    pub nbt: Option<OpaqueCompound>,
}

impl BlockPredicate {
    pub fn new(
        blocks: Option<HolderSet>,
        properties: Option<Vec<PropertyMatcher>>,
        nbt: Option<OpaqueCompound>,
    ) -> Self {
        Self {
            blocks,
            properties,
            nbt,
        }
    }

    /// Returns true if no field constrains the match.
    pub fn is_unconstrained(&self) -> bool {
        self.blocks.is_none() && self.properties.is_none() && self.nbt.is_none()
    }
}

/// The `can_place_on` / `can_break` item component payload.
///
/// Predicates are kept in wire order; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdventureModePredicate {
    pub predicates: Vec<BlockPredicate>,
    /// Whether the client lists the predicates in the item tooltip.
    pub show_in_tooltip: bool,
}

impl AdventureModePredicate {
    pub fn new(predicates: Vec<BlockPredicate>, show_in_tooltip: bool) -> Self {
        Self {
            predicates,
            show_in_tooltip,
        }
    }
}
