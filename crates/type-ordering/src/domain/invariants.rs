//! Invariants over the authored tables and the derived relation table
//!
//! None of these run inside `relate`; they are checked by tests and by the
//! service before an artifact is emitted.

use super::tables::{StrictLessMap, UnsupportedSet};
use super::value_objects::{Relation, TypeTag};
use crate::algorithms::table::RelationTable;

/// INVARIANT-1: Irreflexive
/// No tag is strictly less than itself.
pub fn invariant_irreflexive(map: &StrictLessMap) -> bool {
    TypeTag::ALL.iter().all(|t| !map.contains(*t, *t))
}

/// INVARIANT-2: Asymmetric
/// If a < b is authored, b < a is not.
pub fn invariant_asymmetric(map: &StrictLessMap) -> bool {
    find_contradictions(map).is_empty()
}

/// Pairs claimed in both directions, each reported once with `a < b` in code order
pub fn find_contradictions(map: &StrictLessMap) -> Vec<(TypeTag, TypeTag)> {
    map.pairs()
        .into_iter()
        .filter(|(less, greater)| less < greater && map.contains(*greater, *less))
        .collect()
}

/// INVARIANT-3: Same-type diagonal
/// `relate(t, t)` is `CompareSameType` for supported tags and `Invalid` otherwise.
pub fn invariant_diagonal(table: &RelationTable, unsupported: &UnsupportedSet) -> bool {
    TypeTag::ALL.iter().all(|t| {
        let expected = if unsupported.contains(*t) {
            Relation::Invalid
        } else {
            Relation::CompareSameType
        };
        table.get(*t, *t) == expected
    })
}

/// INVARIANT-4: Unsupported dominance
/// An unsupported tag on either side makes the relation `Invalid`.
pub fn invariant_unsupported_dominance(table: &RelationTable, unsupported: &UnsupportedSet) -> bool {
    table.pairs().all(|(a, b, rel)| {
        let invalid = unsupported.contains(a) || unsupported.contains(b);
        invalid == (rel == Relation::Invalid)
    })
}

/// INVARIANT-5: Pairwise consistency
/// `relate(a, b)` and `relate(b, a)` are inverses.
pub fn invariant_pairwise_consistent(table: &RelationTable) -> bool {
    find_inconsistencies(table).is_empty()
}

/// Pairs `(a, b)` with `a < b` whose mirrored entries disagree
pub fn find_inconsistencies(table: &RelationTable) -> Vec<(TypeTag, TypeTag)> {
    table
        .pairs()
        .filter(|(a, b, rel)| a < b && table.get(*b, *a) != rel.inverse())
        .map(|(a, b, _)| (a, b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::relate::TypeOrderingOracle;

    #[test]
    fn test_authored_map_is_a_strict_order() {
        let map = StrictLessMap::authored();
        assert!(invariant_irreflexive(&map));
        assert!(invariant_asymmetric(&map));
    }

    #[test]
    fn test_reflexive_claim_detected() {
        let mut map = StrictLessMap::new();
        map.insert(TypeTag::Blob, TypeTag::Blob);
        assert!(!invariant_irreflexive(&map));
    }

    #[test]
    fn test_contradiction_detected() {
        let mut map = StrictLessMap::authored();
        map.insert(TypeTag::List, TypeTag::Bool);
        assert_eq!(find_contradictions(&map), vec![(TypeTag::Bool, TypeTag::List)]);
        assert!(!invariant_asymmetric(&map));
    }

    #[test]
    fn test_default_table_invariants() {
        let oracle = TypeOrderingOracle::new();
        let table = oracle.all_relations();
        let unsupported = UnsupportedSet::default();

        assert!(invariant_diagonal(&table, &unsupported));
        assert!(invariant_unsupported_dominance(&table, &unsupported));
        assert!(invariant_pairwise_consistent(&table));
    }

    #[test]
    fn test_contradictory_map_breaks_table_consistency() {
        let mut map = StrictLessMap::authored();
        map.insert(TypeTag::String, TypeTag::Timestamp);
        let oracle = TypeOrderingOracle::with_tables(UnsupportedSet::default(), map);
        let table = oracle.all_relations();

        // timestamp < string and string < timestamp: both sides resolve to Less
        assert_eq!(table.get(TypeTag::Timestamp, TypeTag::String), Relation::Less);
        assert_eq!(table.get(TypeTag::String, TypeTag::Timestamp), Relation::Less);
        assert_eq!(
            find_inconsistencies(&table),
            vec![(TypeTag::Timestamp, TypeTag::String)]
        );
    }
}
