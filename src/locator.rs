use std::fmt;

/// Resource selector rendered into a request path segment.
///
/// The server addresses resources by dimension-prefixed segments such as
/// `id:MyProject`, `name:My%20Project` or `uuid:4f4e-...`. Values are
/// percent-encoded when formatted, so the same locator always renders the
/// same string regardless of the characters in the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Id(String),
    Name(String),
    Uuid(String),
}

impl Locator {
    pub fn id(value: impl Into<String>) -> Locator {
        Locator::Id(value.into())
    }

    /// Numeric id selector, used by resources keyed by integer ids.
    pub fn id_int(value: i64) -> Locator {
        Locator::Id(value.to_string())
    }

    pub fn name(value: impl Into<String>) -> Locator {
        Locator::Name(value.into())
    }

    pub fn uuid(value: impl Into<String>) -> Locator {
        Locator::Uuid(value.into())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(value) => write!(f, "id:{}", urlencoding::encode(value)),
            Locator::Name(value) => write!(f, "name:{}", urlencoding::encode(value)),
            Locator::Uuid(value) => write!(f, "uuid:{}", urlencoding::encode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_locator() {
        assert_eq!(Locator::id("MyProject").to_string(), "id:MyProject");
    }

    #[test]
    fn test_numeric_id_locator() {
        assert_eq!(Locator::id_int(42).to_string(), "id:42");
    }

    #[test]
    fn test_name_locator_encodes_value() {
        assert_eq!(
            Locator::name("My Project").to_string(),
            "name:My%20Project"
        );
    }

    #[test]
    fn test_uuid_locator() {
        assert_eq!(
            Locator::uuid("f9d3d0d8-2f7e-4c4e-9b3a-1f0a8f0d6a2b").to_string(),
            "uuid:f9d3d0d8-2f7e-4c4e-9b3a-1f0a8f0d6a2b"
        );
    }

    #[test]
    fn test_same_locator_formats_identically() {
        let locator = Locator::name("a b&c");
        assert_eq!(locator.to_string(), locator.to_string());
    }
}
