//! Core types shared across schemadiff facilities
//!
//! This crate provides the canonical field keys and event names used by
//! the logging facility and by anything that consumes its events.

pub mod schema;
