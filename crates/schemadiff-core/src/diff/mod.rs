//! Schema graph diff engine.
//!
//! Compares two versions of a set of named model definitions and reports
//! which fields were added, removed or changed, each located by a dotted
//! path from the diff root.
//!
//! ## Entry point
//!
//! ```
//! use schemadiff_core::diff::ModelDiff;
//! use schemadiff_core::model::{DefinitionTable, Model, Property};
//!
//! let mut old = DefinitionTable::new();
//! old.insert("Pet", Model::new().with_property("name", Property::leaf("string")))?;
//! let mut new = DefinitionTable::new();
//! new.insert("Pet", Model::new().with_property("name", Property::leaf("integer")))?;
//!
//! let mut diff = ModelDiff::with_definitions(&old, &new);
//! diff.diff_definitions("Pet", "Pet")?;
//! assert_eq!(diff.changed()[0].el, "name");
//! # Ok::<(), schemadiff_core::errors::SchemaDiffError>(())
//! ```
//!
//! ## Guarantees
//!
//! - **Termination**: a model already being expanded on the current path is
//!   never entered again, so cyclic definitions are safe.
//! - **Determinism**: fields are visited in ascending name order.
//! - **Silent data conditions**: absent models and dangling references are
//!   skipped, never reported as errors.

pub mod engine;
pub mod key_diff;
pub mod model;
pub mod options;

pub use engine::ModelDiff;
pub use key_diff::MapKeyDiff;
pub use model::ModelDiffResult;
pub use options::{DiffOptions, RefExpansion};
