use schemadiff_core::{DefinitionTable, ElProperty, Model};
use serde_json::Value;

/// Build a definition table from a JSON object of name to model
#[allow(dead_code)]
pub fn table(definitions: Value) -> DefinitionTable {
    DefinitionTable::from_json(&definitions.to_string()).expect("fixture table should load")
}

/// Build a standalone model (not a member of any table)
#[allow(dead_code)]
pub fn model(value: Value) -> Model {
    serde_json::from_value(value).expect("fixture model should load")
}

/// Paths of a result list, in order
#[allow(dead_code)]
pub fn els(properties: &[ElProperty]) -> Vec<&str> {
    properties.iter().map(|p| p.el.as_str()).collect()
}

/// A small petstore: Pet -> Category, Pet -> Tag, Category -> Category (parent)
#[allow(dead_code)]
pub fn petstore() -> Value {
    serde_json::json!({
        "Pet": {
            "type": "object",
            "properties": {
                "id": {"type": "integer", "format": "int64"},
                "name": {"type": "string"},
                "category": {"$ref": "#/definitions/Category"},
                "tag": {"$ref": "#/definitions/Tag"}
            }
        },
        "Category": {
            "properties": {
                "id": {"type": "integer", "format": "int64"},
                "name": {"type": "string"},
                "parent": {"$ref": "#/definitions/Category"}
            }
        },
        "Tag": {
            "properties": {
                "id": {"type": "integer", "format": "int64"},
                "label": {"type": "string", "maxLength": 32}
            }
        }
    })
}
