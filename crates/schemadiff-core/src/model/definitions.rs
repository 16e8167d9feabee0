use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::schema_model::Model;
use crate::errors::{Result, SchemaDiffError};

/// Stable identity of a model inside one [`DefinitionTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModelIndex(usize);

/// One side's definitions: an arena of models plus a name index into it.
///
/// Several names may point at the same model (see [`DefinitionTable::alias`]);
/// identity is the arena slot, not the name.
#[derive(Debug, Clone, Default)]
pub struct DefinitionTable {
    models: Vec<Model>,
    names: BTreeMap<String, ModelIndex>,
}

impl DefinitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a JSON object of definition name to model.
    ///
    /// # Errors
    ///
    /// - `Serialization` if the text is not such an object
    /// - `InvalidReference` if a `$ref` has no definition name
    pub fn from_json(text: &str) -> Result<Self> {
        let definitions: BTreeMap<String, Model> = serde_json::from_str(text)?;
        Self::from_definitions(definitions)
    }

    /// Build a table from `(name, model)` pairs, each model getting its own identity.
    ///
    /// # Errors
    ///
    /// `DefinitionAlreadyExists` if a name repeats.
    pub fn from_definitions<I, S>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Model)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, model) in definitions {
            table.insert(name, model)?;
        }
        Ok(table)
    }

    /// Register a model under a new name.
    ///
    /// # Errors
    ///
    /// `DefinitionAlreadyExists` if the name is taken.
    pub fn insert(&mut self, name: impl Into<String>, model: Model) -> Result<ModelIndex> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(SchemaDiffError::DefinitionAlreadyExists { name });
        }
        let index = ModelIndex(self.models.len());
        self.models.push(model);
        self.names.insert(name, index);
        Ok(index)
    }

    /// Make `name` denote the same model as `existing`.
    ///
    /// # Errors
    ///
    /// - `DefinitionNotFound` if `existing` is not registered
    /// - `DefinitionAlreadyExists` if `name` is taken
    pub fn alias(&mut self, name: impl Into<String>, existing: &str) -> Result<ModelIndex> {
        let name = name.into();
        let index = self
            .names
            .get(existing)
            .copied()
            .ok_or_else(|| SchemaDiffError::DefinitionNotFound {
                name: existing.to_string(),
            })?;
        if self.names.contains_key(&name) {
            return Err(SchemaDiffError::DefinitionAlreadyExists { name });
        }
        self.names.insert(name, index);
        Ok(index)
    }

    pub fn get(&self, name: &str) -> Option<&Model> {
        self.resolve(name).map(|(_, model)| model)
    }

    /// Model and its identity for a definition name
    pub fn resolve(&self, name: &str) -> Option<(ModelIndex, &Model)> {
        let index = *self.names.get(name)?;
        self.models.get(index.0).map(|model| (index, model))
    }

    /// Identity of a model borrowed from this table, or `None` for models
    /// that live elsewhere (even if structurally equal to a member).
    pub fn index_of(&self, model: &Model) -> Option<ModelIndex> {
        self.models
            .iter()
            .position(|candidate| std::ptr::eq(candidate, model))
            .map(ModelIndex)
    }

    /// Number of distinct models (aliases not counted)
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Registered names in ascending order, aliases included
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }
}
