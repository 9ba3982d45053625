//! Relation derivation
//!
//! Decides, from the type tags alone, how two values compare. Evaluation
//! order is fixed: unsupported, same type, direct less, direct greater,
//! different types.

use crate::algorithms::table::RelationTable;
use crate::domain::errors::OrderingError;
use crate::domain::tables::{StrictLessMap, UnsupportedSet};
use crate::domain::value_objects::{Relation, TypeTag, RELATION_COUNT};
use crate::ports::inbound::TypeOrderingApi;

/// Holds the authored tables and answers pairwise relation queries.
#[derive(Clone, Debug)]
pub struct TypeOrderingOracle {
    unsupported: UnsupportedSet,
    strict_less: StrictLessMap,
}

impl TypeOrderingOracle {
    /// Oracle over the authored tables
    pub fn new() -> Self {
        Self::with_tables(UnsupportedSet::default(), StrictLessMap::authored())
    }

    /// Oracle over caller-supplied tables; no validation is performed
    pub fn with_tables(unsupported: UnsupportedSet, strict_less: StrictLessMap) -> Self {
        Self {
            unsupported,
            strict_less,
        }
    }

    pub fn unsupported(&self) -> &UnsupportedSet {
        &self.unsupported
    }

    pub fn strict_less(&self) -> &StrictLessMap {
        &self.strict_less
    }

    pub fn is_unsupported(&self, tag: TypeTag) -> bool {
        self.unsupported.contains(tag)
    }

    pub fn is_numeric(&self, tag: TypeTag) -> bool {
        tag.is_numeric()
    }

    /// Only direct entries count; no transitive closure is taken.
    pub fn strictly_less(&self, type1: TypeTag, type2: TypeTag) -> bool {
        self.strict_less.contains(type1, type2)
    }

    pub fn relate(&self, type1: TypeTag, type2: TypeTag) -> Relation {
        if self.is_unsupported(type1) || self.is_unsupported(type2) {
            return Relation::Invalid;
        }

        if type1 == type2 {
            return Relation::CompareSameType;
        }

        // A contradictory table resolves to Less here; invariants catch it.
        if self.strictly_less(type1, type2) {
            return Relation::Less;
        }

        if self.strictly_less(type2, type1) {
            return Relation::Greater;
        }

        Relation::CompareDifferentTypes
    }

    /// `relate` over integer codes; codes above 15 fail fast.
    pub fn relate_raw(&self, type1: u8, type2: u8) -> Result<Relation, OrderingError> {
        let type1 = TypeTag::from_code(type1)?;
        let type2 = TypeTag::from_code(type2)?;
        Ok(self.relate(type1, type2))
    }

    /// Relations for every ordered pair, outer `type1`, inner `type2`
    pub fn relations(&self) -> impl Iterator<Item = Relation> + '_ {
        TypeTag::ALL.into_iter().flat_map(move |type1| {
            TypeTag::ALL
                .into_iter()
                .map(move |type2| self.relate(type1, type2))
        })
    }

    pub fn all_relations(&self) -> RelationTable {
        let mut entries = [Relation::Invalid; RELATION_COUNT];
        for (slot, relation) in entries.iter_mut().zip(self.relations()) {
            *slot = relation;
        }
        RelationTable::from_entries(entries)
    }
}

impl Default for TypeOrderingOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeOrderingApi for TypeOrderingOracle {
    fn is_unsupported(&self, tag: TypeTag) -> bool {
        TypeOrderingOracle::is_unsupported(self, tag)
    }

    fn is_numeric(&self, tag: TypeTag) -> bool {
        TypeOrderingOracle::is_numeric(self, tag)
    }

    fn strictly_less(&self, type1: TypeTag, type2: TypeTag) -> bool {
        TypeOrderingOracle::strictly_less(self, type1, type2)
    }

    fn relate(&self, type1: TypeTag, type2: TypeTag) -> Relation {
        TypeOrderingOracle::relate(self, type1, type2)
    }

    fn all_relations(&self) -> RelationTable {
        TypeOrderingOracle::all_relations(self)
    }
}
