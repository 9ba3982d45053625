//! Algorithms module for Type Ordering
//!
//! Contains:
//! - Pairwise relation derivation
//! - The derived relation table

pub mod relate;
pub mod table;

pub use relate::TypeOrderingOracle;
pub use table::{relation_table, RelationTable};
