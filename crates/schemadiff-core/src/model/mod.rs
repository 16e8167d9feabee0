pub mod definitions;
pub mod el_property;
pub mod property;
pub mod schema_model;

pub use definitions::{DefinitionTable, ModelIndex};
pub use el_property::ElProperty;
pub use property::{simple_ref, LeafSchema, Property};
pub use schema_model::Model;
