//! Domain module for Type Ordering
//!
//! Contains the type and relation value objects, the authored tables,
//! errors, and invariants.

pub mod errors;
pub mod invariants;
pub mod tables;
pub mod value_objects;

pub use errors::*;
pub use tables::*;
pub use value_objects::*;
