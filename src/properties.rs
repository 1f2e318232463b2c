use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Prefix marking a value the server accepts on writes but never echoes back.
const SECURE_PREFIX: &str = "secure:";

fn is_zero(value: &usize) -> bool {
    *value == 0
}

/// Optional type descriptor attached to a property by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyType {
    pub raw_value: String,
}

/// Single named value, shared by project parameters and feature settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    // Absent on the wire for password-typed parameters; the server strips
    // the value and sends only the name and type.
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<PropertyType>,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Property {
        Property {
            name: name.into(),
            value: value.into(),
            inherited: None,
            type_: None,
        }
    }

    /// Whether the server treats this property's value as write-only.
    pub fn is_secure(&self) -> bool {
        self.name.starts_with(SECURE_PREFIX)
    }
}

/// Ordered property collection in the server's wire shape.
///
/// `count` mirrors the number of items and is kept in sync by the mutating
/// methods here, so a collection built locally serializes exactly like one
/// read back from the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Properties {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(rename = "property", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Property>,
}

impl Properties {
    pub fn new() -> Properties {
        Properties::default()
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Properties
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let items: Vec<Property> = pairs
            .into_iter()
            .map(|(name, value)| Property::new(name, value))
            .collect();
        Properties {
            count: items.len(),
            href: None,
            items,
        }
    }

    pub fn add(&mut self, property: Property) {
        self.items.push(property);
        self.count = self.items.len();
    }

    /// Replace the value of an existing property in place, or append a new
    /// one if the name is not present yet.
    pub fn add_or_replace(&mut self, name: &str, value: &str) {
        for item in &mut self.items {
            if item.name == name {
                item.value = value.to_string();
                return;
            }
        }
        self.add(Property::new(name, value));
    }

    /// Merge every property of `other` into this set. Same-named entries
    /// take the other set's value, new names are appended in order.
    pub fn concat(&mut self, other: &Properties) {
        for item in &other.items {
            self.add_or_replace(&item.name, &item.value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.value.as_str())
    }

    /// Name-to-value view with secure values masked out.
    pub fn map(&self) -> HashMap<String, String> {
        self.items
            .iter()
            .filter(|item| !item.is_secure())
            .map(|item| (item.name.clone(), item.value.clone()))
            .collect()
    }

    /// Copy holding only the properties defined on the resource itself,
    /// dropping the ones inherited from ancestors.
    pub fn non_inherited(&self) -> Properties {
        let items: Vec<Property> = self
            .items
            .iter()
            .filter(|item| item.inherited != Some(true))
            .cloned()
            .collect();
        Properties {
            count: items.len(),
            href: None,
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_keeps_order_and_count() {
        let properties = Properties::from_pairs([("b", "2"), ("a", "1")]);

        assert_eq!(properties.count, 2);
        assert_eq!(properties.items[0].name, "b");
        assert_eq!(properties.items[1].name, "a");
    }

    #[test]
    fn test_add_or_replace_updates_in_place() {
        let mut properties = Properties::from_pairs([("url", "old"), ("branch", "main")]);

        properties.add_or_replace("url", "new");

        assert_eq!(properties.count, 2);
        assert_eq!(properties.items[0].value, "new");
    }

    #[test]
    fn test_add_or_replace_appends_unknown_name() {
        let mut properties = Properties::from_pairs([("url", "u")]);

        properties.add_or_replace("branch", "main");

        assert_eq!(properties.count, 2);
        assert_eq!(properties.get("branch"), Some("main"));
    }

    #[test]
    fn test_concat_merges_another_set() {
        let mut properties = Properties::from_pairs([("url", "git@host:repo"), ("branch", "main")]);
        let overrides = Properties::from_pairs([("branch", "release"), ("shallow", "true")]);

        properties.concat(&overrides);

        assert_eq!(properties.count, 3);
        assert_eq!(properties.get("url"), Some("git@host:repo"));
        assert_eq!(properties.get("branch"), Some("release"));
        assert_eq!(properties.get("shallow"), Some("true"));
    }

    #[test]
    fn test_map_masks_secure_values() {
        let properties = Properties::from_pairs([
            ("clientId", "abcd.1234"),
            ("secure:token", "xoxb-secret"),
            ("displayName", "Notifier"),
        ]);

        let map = properties.map();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("clientId"), Some(&"abcd.1234".to_string()));
        assert_eq!(map.get("displayName"), Some(&"Notifier".to_string()));
        assert!(!map.contains_key("secure:token"));
    }

    #[test]
    fn test_non_inherited_recomputes_count() {
        let mut properties = Properties::new();
        properties.add(Property::new("own", "1"));
        properties.add(Property {
            name: "inherited".to_string(),
            value: "2".to_string(),
            inherited: Some(true),
            type_: None,
        });

        let own = properties.non_inherited();

        assert_eq!(own.count, 1);
        assert_eq!(own.get("own"), Some("1"));
        assert_eq!(own.get("inherited"), None);
    }

    #[test]
    fn test_empty_collection_serializes_to_empty_object() {
        let serialized = serde_json::to_value(Properties::new()).unwrap();

        assert_eq!(serialized, serde_json::json!({}));
    }

    #[test]
    fn test_deserializes_wire_shape() {
        let properties: Properties = serde_json::from_str(
            r#"{"count":2,"property":[{"name":"a","value":"1"},{"name":"b","value":"2","inherited":true}]}"#,
        )
        .unwrap();

        assert_eq!(properties.count, 2);
        assert_eq!(properties.get("a"), Some("1"));
        assert_eq!(properties.items[1].inherited, Some(true));
    }

    #[test]
    fn test_deserializes_password_property_without_value() {
        let properties: Properties = serde_json::from_str(
            r#"{"count":1,"property":[{"name":"env.DEPLOY_KEY","type":{"rawValue":"password"}}]}"#,
        )
        .unwrap();

        assert_eq!(properties.get("env.DEPLOY_KEY"), Some(""));
        let type_ = properties.items[0].type_.as_ref().unwrap();
        assert_eq!(type_.raw_value, "password");
    }
}
