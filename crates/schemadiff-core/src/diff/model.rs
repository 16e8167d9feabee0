//! Diff output types.

use serde::{Deserialize, Serialize};

use crate::model::ElProperty;

/// The three path-annotated lists produced by a diff run.
///
/// `changed` entries carry the left (old) side's property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDiffResult {
    /// Properties only on the right side
    pub increased: Vec<ElProperty>,
    /// Properties only on the left side
    pub missing: Vec<ElProperty>,
    /// Properties on both sides whose types differ
    pub changed: Vec<ElProperty>,
}

impl ModelDiffResult {
    pub fn is_empty(&self) -> bool {
        self.increased.is_empty() && self.missing.is_empty() && self.changed.is_empty()
    }
}
