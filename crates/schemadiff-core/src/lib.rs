//! schemadiff Core - structural diff of schema definition graphs
//!
//! This crate provides:
//! - The schema data model: models, properties and per-side definition tables
//! - A key-set differ for any pair of ordered maps
//! - The recursive, cycle-safe model diff engine
//! - Error and structured logging facilities

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Used by the logging macros
#[doc(hidden)]
pub use schemadiff_core_types;

// Re-export commonly used types
pub use diff::{DiffOptions, MapKeyDiff, ModelDiff, ModelDiffResult, RefExpansion};
pub use errors::{ExError, ExErrorKind, Result, SchemaDiffError};
pub use model::{DefinitionTable, ElProperty, LeafSchema, Model, ModelIndex, Property};
