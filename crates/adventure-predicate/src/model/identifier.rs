//! Namespaced resource identifiers (`namespace:path`).
//!
//! Identifiers name registry entries and tags, e.g. `minecraft:logs`.

use std::fmt;
use std::str::FromStr;

use crate::error::ConstructionError;
use crate::limits::DEFAULT_NAMESPACE;

/// A namespaced resource identifier.
///
/// Both parts are restricted to lowercase ASCII: the namespace may contain
/// `[a-z0-9_.-]`, the path additionally `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    /// Creates an identifier from its two parts, validating both.
    pub fn new(
        namespace: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        let namespace = namespace.into();
        let path = path.into();
        if namespace.is_empty() || !namespace.bytes().all(is_namespace_byte) {
            return Err(ConstructionError::InvalidIdentifier {
                value: format!("{namespace}:{path}"),
                reason: "namespace must match [a-z0-9_.-]+",
            });
        }
        if path.is_empty() || !path.bytes().all(is_path_byte) {
            return Err(ConstructionError::InvalidIdentifier {
                value: format!("{namespace}:{path}"),
                reason: "path must match [a-z0-9_.-/]+",
            });
        }
        Ok(Self { namespace, path })
    }

    /// Creates an identifier in the default `minecraft` namespace.
    pub fn minecraft(path: impl Into<String>) -> Result<Self, ConstructionError> {
        Self::new(DEFAULT_NAMESPACE, path)
    }

    /// Parses `namespace:path`, or `path` alone in the default namespace.
    pub fn parse(s: &str) -> Result<Self, ConstructionError> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::minecraft(s),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl FromStr for Identifier {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

fn is_namespace_byte(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'.' | b'-')
}

fn is_path_byte(b: u8) -> bool {
    is_namespace_byte(b) || b == b'/'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_namespace() {
        let id = Identifier::parse("custom:blocks/ores").unwrap();
        assert_eq!(id.namespace(), "custom");
        assert_eq!(id.path(), "blocks/ores");
    }

    #[test]
    fn test_parse_defaults_namespace() {
        let id: Identifier = "stone".parse().unwrap();
        assert_eq!(id.namespace(), "minecraft");
        assert_eq!(id.to_string(), "minecraft:stone");
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let id = Identifier::new("my_mod", "logs.v2").unwrap();
        assert_eq!(Identifier::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert!(Identifier::parse("Minecraft:stone").is_err());
        assert!(Identifier::parse("minecraft:Stone").is_err());
        assert!(Identifier::parse("mine/craft:stone").is_err());
        assert!(Identifier::parse("a:b:c").is_err());
    }

    #[test]
    fn test_empty_parts_rejected() {
        assert!(matches!(
            Identifier::parse(":stone"),
            Err(ConstructionError::InvalidIdentifier { .. })
        ));
        assert!(Identifier::parse("minecraft:").is_err());
        assert!(Identifier::parse("").is_err());
    }
}
