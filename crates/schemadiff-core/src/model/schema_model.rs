use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::property::Property;

/// A named schema node: field name to field type.
///
/// Field order carries no meaning; the map is ordered so every traversal
/// of a model visits fields in the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub properties: BTreeMap<String, Property>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field
    pub fn with_property(mut self, name: impl Into<String>, property: impl Into<Property>) -> Self {
        self.properties.insert(name.into(), property.into());
        self
    }

    pub fn properties(&self) -> &BTreeMap<String, Property> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_properties_deserialize_as_empty() {
        let model: Model = serde_json::from_value(json!({"type": "object"})).unwrap();
        assert!(model.properties().is_empty());
    }

    #[test]
    fn test_with_property_replaces_existing_field() {
        let model = Model::new()
            .with_property("id", Property::leaf("string"))
            .with_property("id", Property::leaf("integer"));
        assert_eq!(model.properties().len(), 1);
        assert_eq!(model.property("id"), Some(&Property::leaf("integer")));
    }
}
