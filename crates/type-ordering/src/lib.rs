//! # Type Ordering
//!
//! Cross-type ordering oracle for typed values. For every ordered pair of the
//! 16 type tags it decides whether values of the first type always sort
//! before or after values of the second, need a same-type or cross-type value
//! comparison, or cannot be ordered at all.
//!
//! ## Architecture
//!
//! - **Domain**: `TypeTag`, `Relation`, the authored `UnsupportedSet` and
//!   `StrictLessMap`, errors and table invariants
//! - **Algorithms**: `TypeOrderingOracle` (pairwise derivation) and the
//!   row-major `RelationTable`
//! - **Ports**: Inbound `TypeOrderingApi`
//! - **Application**: `RelationTableService` (verify, derive, render)
//! - **Codegen**: Go, Rust and JSON renderings of the table
//!
//! ## Usage Example
//!
//! ```
//! use type_ordering::{relation_table, Relation, TypeOrderingOracle, TypeTag};
//!
//! let oracle = TypeOrderingOracle::new();
//! assert_eq!(oracle.relate(TypeTag::Bool, TypeTag::Uint), Relation::Less);
//! assert_eq!(
//!     relation_table().get(TypeTag::Uint, TypeTag::Float),
//!     Relation::CompareDifferentTypes
//! );
//! ```

pub mod algorithms;
pub mod application;
pub mod codegen;
pub mod config;
pub mod domain;
pub mod ports;

pub use algorithms::{relation_table, RelationTable, TypeOrderingOracle};
pub use application::RelationTableService;
pub use config::{OutputFormat, RenderConfig};
pub use domain::errors::OrderingError;
pub use domain::tables::{StrictLessMap, UnsupportedSet};
pub use domain::value_objects::*;
pub use ports::inbound::TypeOrderingApi;
