//! The derived 16x16 relation table
//!
//! Row-major: the entry for `(type1, type2)` lives at `type1 << 4 | type2`,
//! the codeword a comparator builds from two type nibbles.

use lazy_static::lazy_static;
use serde::ser::{Serialize, Serializer};

use crate::algorithms::relate::TypeOrderingOracle;
use crate::domain::value_objects::{Relation, TypeTag, RELATION_COUNT, TYPE_COUNT};

lazy_static! {
    /// Table over the authored orderings, built on first use
    static ref DEFAULT_TABLE: RelationTable = TypeOrderingOracle::new().all_relations();
}

/// Shared table derived from the authored orderings
pub fn relation_table() -> &'static RelationTable {
    &DEFAULT_TABLE
}

/// Immutable 256-entry relation grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationTable {
    entries: [Relation; RELATION_COUNT],
}

impl RelationTable {
    pub fn from_entries(entries: [Relation; RELATION_COUNT]) -> Self {
        Self { entries }
    }

    /// Position of `(type1, type2)` in row-major order
    pub const fn index_of(type1: TypeTag, type2: TypeTag) -> usize {
        ((type1 as usize) << 4) | type2 as usize
    }

    pub fn get(&self, type1: TypeTag, type2: TypeTag) -> Relation {
        self.entries[Self::index_of(type1, type2)]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Relation] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = Relation> + '_ {
        self.entries.iter().copied()
    }

    /// Every entry with its coordinates, in row-major order
    pub fn pairs(&self) -> impl Iterator<Item = (TypeTag, TypeTag, Relation)> + '_ {
        self.entries.iter().enumerate().map(|(index, relation)| {
            (
                TypeTag::ALL[index / TYPE_COUNT],
                TypeTag::ALL[index % TYPE_COUNT],
                *relation,
            )
        })
    }

    /// Wire codes, row-major
    pub fn codes(&self) -> [u8; RELATION_COUNT] {
        let mut codes = [0u8; RELATION_COUNT];
        for (code, relation) in codes.iter_mut().zip(self.entries.iter()) {
            *code = relation.code();
        }
        codes
    }

    /// Number of entries holding `relation`
    pub fn count(&self, relation: Relation) -> usize {
        self.entries.iter().filter(|r| **r == relation).count()
    }
}

impl Serialize for RelationTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_is_codeword() {
        assert_eq!(RelationTable::index_of(TypeTag::Null, TypeTag::Null), 0);
        assert_eq!(RelationTable::index_of(TypeTag::Bool, TypeTag::Uint), 0x12);
        assert_eq!(
            RelationTable::index_of(TypeTag::Reserved, TypeTag::Reserved),
            255
        );
    }

    #[test]
    fn test_shared_table_matches_fresh_derivation() {
        let fresh = TypeOrderingOracle::new().all_relations();
        assert_eq!(relation_table(), &fresh);
        assert!(std::ptr::eq(relation_table(), relation_table()));
    }

    #[test]
    fn test_relation_counts() {
        let table = relation_table();

        // 11 supported tags: 121 supported pairs, 135 invalid
        assert_eq!(table.count(Relation::Invalid), 256 - 11 * 11);
        assert_eq!(table.count(Relation::CompareSameType), 11);
        assert_eq!(table.count(Relation::Less), table.count(Relation::Greater));
        let total: usize = Relation::ALL.iter().map(|r| table.count(*r)).sum();
        assert_eq!(total, 256);
    }

    #[test]
    fn test_codes_follow_wire_order() {
        let codes = relation_table().codes();
        assert_eq!(codes[RelationTable::index_of(TypeTag::Bool, TypeTag::Uint)], 0);
        assert_eq!(codes[RelationTable::index_of(TypeTag::Uint, TypeTag::Bool)], 1);
        assert_eq!(codes[RelationTable::index_of(TypeTag::Sexp, TypeTag::Bool)], 2);
        assert_eq!(codes[RelationTable::index_of(TypeTag::Int, TypeTag::Int)], 3);
        assert_eq!(codes[RelationTable::index_of(TypeTag::Int, TypeTag::Float)], 4);
    }

    #[test]
    fn test_serializes_as_name_sequence() {
        let json = serde_json::to_value(relation_table()).unwrap();
        let names = json.as_array().unwrap();
        assert_eq!(names.len(), 256);
        assert_eq!(names[0], "compareSameType");
        assert_eq!(names[0x12], "alwaysLess");
        assert_eq!(names[0x7f], "unsupportedRelation");
    }
}
