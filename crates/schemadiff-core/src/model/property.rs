use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::errors::SchemaDiffError;

/// Prefix used when a reference is written back out as a JSON pointer
const DEFINITIONS_POINTER: &str = "#/definitions/";

/// Field type description: either a reference to another named definition
/// in the same side's table, or a self-contained schema fragment.
///
/// Serialized in the usual schema-object shape: `{"$ref": "..."}` for
/// references, `{"type": ..., "format": ..., <constraints>}` for leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProperty", into = "RawProperty")]
pub enum Property {
    /// Simple name of the referenced definition
    Reference(String),
    Leaf(LeafSchema),
}

impl Property {
    /// Reference to a definition, given as a bare name (`Pet`) or a local
    /// pointer (`#/definitions/Pet`). Only the simple name is kept.
    pub fn reference(target: impl AsRef<str>) -> Self {
        Property::Reference(simple_ref(target.as_ref()).to_string())
    }

    /// Leaf with only a `type`
    pub fn leaf(type_name: impl Into<String>) -> Self {
        Property::Leaf(LeafSchema::new(type_name))
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Property::Reference(_))
    }

    /// Referenced definition name, for references
    pub fn reference_name(&self) -> Option<&str> {
        match self {
            Property::Reference(name) => Some(name),
            Property::Leaf(_) => None,
        }
    }
}

/// Self-contained schema fragment compared by structural equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeafSchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Every other keyword (`maxLength`, `enum`, `items`, ...)
    #[serde(flatten)]
    pub constraints: BTreeMap<String, Value>,
}

impl LeafSchema {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_constraint(mut self, keyword: impl Into<String>, value: Value) -> Self {
        self.constraints.insert(keyword.into(), value);
        self
    }
}

impl From<LeafSchema> for Property {
    fn from(leaf: LeafSchema) -> Self {
        Property::Leaf(leaf)
    }
}

/// Simple name of a reference: the last `/`-separated segment.
///
/// ```
/// use schemadiff_core::model::simple_ref;
///
/// assert_eq!(simple_ref("#/definitions/Pet"), "Pet");
/// assert_eq!(simple_ref("#/components/schemas/Pet"), "Pet");
/// assert_eq!(simple_ref("Pet"), "Pet");
/// ```
pub fn simple_ref(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

#[derive(Serialize, Deserialize)]
struct RawProperty {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(flatten)]
    leaf: LeafSchema,
}

impl TryFrom<RawProperty> for Property {
    type Error = SchemaDiffError;

    fn try_from(raw: RawProperty) -> Result<Self, Self::Error> {
        match raw.reference {
            Some(reference) => {
                if simple_ref(&reference).is_empty() {
                    return Err(SchemaDiffError::InvalidReference { reference });
                }
                Ok(Property::reference(reference))
            }
            None => Ok(Property::Leaf(raw.leaf)),
        }
    }
}

impl From<Property> for RawProperty {
    fn from(property: Property) -> Self {
        match property {
            Property::Reference(name) => RawProperty {
                reference: Some(format!("{}{}", DEFINITIONS_POINTER, name)),
                leaf: LeafSchema::default(),
            },
            Property::Leaf(leaf) => RawProperty {
                reference: None,
                leaf,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_keeps_simple_name() {
        assert_eq!(
            Property::reference("#/definitions/Owner"),
            Property::Reference("Owner".to_string())
        );
        assert_eq!(Property::reference("Owner").reference_name(), Some("Owner"));
    }

    #[test]
    fn test_leaf_equality_is_structural() {
        let a = LeafSchema::new("string").with_constraint("maxLength", json!(10));
        let b = LeafSchema::new("string").with_constraint("maxLength", json!(10));
        let c = LeafSchema::new("string").with_constraint("maxLength", json!(12));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, LeafSchema::new("string").with_format("uuid"));
    }

    #[test]
    fn test_deserialize_reference_and_leaf() {
        let reference: Property =
            serde_json::from_value(json!({"$ref": "#/definitions/Category"})).unwrap();
        assert_eq!(reference, Property::reference("Category"));

        let leaf: Property = serde_json::from_value(
            json!({"type": "integer", "format": "int64", "minimum": 0}),
        )
        .unwrap();
        assert_eq!(
            leaf,
            Property::Leaf(
                LeafSchema::new("integer")
                    .with_format("int64")
                    .with_constraint("minimum", json!(0))
            )
        );
    }

    #[test]
    fn test_deserialize_rejects_empty_reference() {
        let err = serde_json::from_value::<Property>(json!({"$ref": "#/definitions/"}))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid reference"));
    }

    #[test]
    fn test_reference_serializes_as_pointer() {
        let value = serde_json::to_value(Property::reference("Tag")).unwrap();
        assert_eq!(value, json!({"$ref": "#/definitions/Tag"}));
    }
}
