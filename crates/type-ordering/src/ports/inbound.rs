//! Inbound Ports (Driving Ports / API)

use crate::algorithms::table::RelationTable;
use crate::domain::value_objects::{Relation, TypeTag};

/// Type-level ordering queries
///
/// Implementations are pure: every method only reads immutable tables, so a
/// shared reference may be used from any number of threads.
pub trait TypeOrderingApi: Send + Sync {
    /// Tag can never take part in an ordering comparison.
    fn is_unsupported(&self, tag: TypeTag) -> bool;

    /// Tag is one of the numeric categories, which compare by value across types.
    fn is_numeric(&self, tag: TypeTag) -> bool;

    /// `type2` is listed directly after `type1` in the strict-less table.
    fn strictly_less(&self, type1: TypeTag, type2: TypeTag) -> bool;

    /// Relation between a value of `type1` and a value of `type2`.
    fn relate(&self, type1: TypeTag, type2: TypeTag) -> Relation;

    /// `relate` for every ordered pair, row-major over `type1`, `type2`.
    fn all_relations(&self) -> RelationTable;
}
