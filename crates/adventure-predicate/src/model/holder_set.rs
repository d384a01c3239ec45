//! Holder sets: either a tag reference or an explicit list of registry ids.

use crate::error::ConstructionError;
use crate::model::Identifier;

/// Numeric registry id of a holder (e.g. a block type).
pub type HolderId = u32;

/// A set of registry entries.
///
/// On the wire the variant is not a separate field; it is folded into the
/// id count (see [`crate::codec::holder_set`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HolderSet {
    /// Every holder in the named tag.
    Tag(Identifier),
    /// An explicit list of holder ids, in wire order.
    Ids(Vec<HolderId>),
}

impl HolderSet {
    /// Builds a holder set from the nullable pair shape used by other
    /// implementations of the protocol.
    ///
    /// Exactly one of `tag` and `ids` must be present.
    pub fn from_parts(
        tag: Option<Identifier>,
        ids: Option<Vec<HolderId>>,
    ) -> Result<Self, ConstructionError> {
        match (tag, ids) {
            (Some(tag), None) => Ok(HolderSet::Tag(tag)),
            (None, Some(ids)) => Ok(HolderSet::Ids(ids)),
            (None, None) => Err(ConstructionError::EmptyHolderSet),
            (Some(_), Some(_)) => Err(ConstructionError::AmbiguousHolderSet),
        }
    }

    /// Returns the tag, if this set references one.
    pub fn tag(&self) -> Option<&Identifier> {
        match self {
            HolderSet::Tag(tag) => Some(tag),
            HolderSet::Ids(_) => None,
        }
    }

    /// Returns the explicit ids, if this set lists them.
    pub fn ids(&self) -> Option<&[HolderId]> {
        match self {
            HolderSet::Tag(_) => None,
            HolderSet::Ids(ids) => Some(ids),
        }
    }
}

impl From<Identifier> for HolderSet {
    fn from(tag: Identifier) -> Self {
        HolderSet::Tag(tag)
    }
}

impl From<Vec<HolderId>> for HolderSet {
    fn from(ids: Vec<HolderId>) -> Self {
        HolderSet::Ids(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_requires_one_variant() {
        assert_eq!(
            HolderSet::from_parts(None, None),
            Err(ConstructionError::EmptyHolderSet)
        );
    }

    #[test]
    fn test_from_parts_rejects_both() {
        let tag = Identifier::minecraft("logs").unwrap();
        assert_eq!(
            HolderSet::from_parts(Some(tag), Some(vec![1])),
            Err(ConstructionError::AmbiguousHolderSet)
        );
    }

    #[test]
    fn test_from_parts_single_variant() {
        let tag = Identifier::minecraft("logs").unwrap();
        let set = HolderSet::from_parts(Some(tag.clone()), None).unwrap();
        assert_eq!(set.tag(), Some(&tag));
        assert_eq!(set.ids(), None);

        // An empty id list is still a populated variant
        let set = HolderSet::from_parts(None, Some(vec![])).unwrap();
        assert_eq!(set, HolderSet::Ids(vec![]));
        assert_eq!(set.ids(), Some(&[][..]));
    }
}
