use serde::{Deserialize, Serialize};

use super::property::Property;

/// A property found at a dotted path (`pet.owner.name`) on one side of a diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElProperty {
    pub el: String,
    pub property: Property,
}

impl ElProperty {
    pub fn new(el: impl Into<String>, property: Property) -> Self {
        Self {
            el: el.into(),
            property,
        }
    }
}
