//! Element identity and tags.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Tags of an element. Keys are unique, order is irrelevant.
pub type Tags = HashMap<String, String>;

/// Kind of OSM element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ElementType {
    Node,
    Way,
    Relation,
}

impl ElementType {
    /// Name used when the type is written into render properties.
    pub fn name(&self) -> &'static str {
        match self {
            ElementType::Node => "NODE",
            ElementType::Way => "WAY",
            ElementType::Relation => "RELATION",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NODE" => Ok(ElementType::Node),
            "WAY" => Ok(ElementType::Way),
            "RELATION" => Ok(ElementType::Relation),
            _ => Err(()),
        }
    }
}

/// Identifies an element across the whole map data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementKey {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub id: i64,
}

impl ElementKey {
    pub fn new(element_type: ElementType, id: i64) -> Self {
        Self { element_type, id }
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.element_type, self.id)
    }
}

/// A map feature: identity plus tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub id: i64,
    #[serde(default)]
    pub tags: Tags,
}

impl Element {
    pub fn new(element_type: ElementType, id: i64) -> Self {
        Self {
            element_type,
            id,
            tags: Tags::new(),
        }
    }

    /// Builder-style helper to attach a tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    pub fn key(&self) -> ElementKey {
        ElementKey::new(self.element_type, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_names_round_trip() {
        for t in [ElementType::Node, ElementType::Way, ElementType::Relation] {
            assert_eq!(t.name().parse::<ElementType>(), Ok(t));
        }
        assert!("node".parse::<ElementType>().is_err());
        assert!("".parse::<ElementType>().is_err());
    }

    #[test]
    fn test_element_json() {
        let json = r#"{"type":"WAY","id":42,"tags":{"highway":"residential"}}"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(element.key(), ElementKey::new(ElementType::Way, 42));
        assert_eq!(
            element.tags.get("highway").map(String::as_str),
            Some("residential")
        );

        // tags are optional
        let element: Element = serde_json::from_str(r#"{"type":"NODE","id":1}"#).unwrap();
        assert!(element.tags.is_empty());
    }

    #[test]
    fn test_key_display() {
        assert_eq!(
            ElementKey::new(ElementType::Relation, 7).to_string(),
            "RELATION#7"
        );
    }
}
