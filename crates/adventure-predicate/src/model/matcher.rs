//! Block state property matchers.

/// Matches a single block state property by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyMatcher {
    /// The property name (e.g. `facing`).
    pub name: String,
    pub matcher: ValueMatcher,
}

impl PropertyMatcher {
    pub fn new(name: impl Into<String>, matcher: ValueMatcher) -> Self {
        Self {
            name: name.into(),
            matcher,
        }
    }

    /// Matches the property against one exact value.
    pub fn exact(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ValueMatcher::Exact(value.into()))
    }

    /// Matches the property against an optionally bounded range.
    pub fn ranged(name: impl Into<String>, min: Option<&str>, max: Option<&str>) -> Self {
        Self::new(
            name,
            ValueMatcher::Ranged {
                min: min.map(str::to_owned),
                max: max.map(str::to_owned),
            },
        )
    }
}

/// How a property value is compared.
///
/// Values stay strings; their interpretation belongs to the block state
/// definition on the receiving side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueMatcher {
    /// The property must equal this value.
    Exact(String),
    /// The property must fall within these bounds; a missing bound is open.
    Ranged {
        min: Option<String>,
        max: Option<String>,
    },
}
