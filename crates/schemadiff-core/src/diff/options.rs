//! Diff configuration.

use serde::{Deserialize, Serialize};

/// How added or removed reference fields are expanded into result entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefExpansion {
    /// Expand the first resolvable reference at each level, then stop
    /// scanning that level. Later siblings, leaves included, are not
    /// reported. Matches the reports produced by existing tooling.
    #[default]
    FirstOnly,
    /// Expand every resolvable reference and report every sibling.
    All,
}

/// Options for a [`ModelDiff`](super::ModelDiff) run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    pub ref_expansion: RefExpansion,
}

impl DiffOptions {
    pub fn with_ref_expansion(mut self, ref_expansion: RefExpansion) -> Self {
        self.ref_expansion = ref_expansion;
        self
    }
}
