//! Authored ordering tables
//!
//! The strict-less map is hand-specified and sparse: a tag absent as a key
//! makes no "less than" claims. Nothing here computes a transitive closure;
//! only direct entries count.

use std::collections::{HashMap, HashSet};

use super::value_objects::TypeTag;

/// Tags that can never take part in an ordering comparison
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsupportedSet {
    tags: HashSet<TypeTag>,
}

impl UnsupportedSet {
    /// Empty set: every tag is orderable
    pub fn new() -> Self {
        Self {
            tags: HashSet::new(),
        }
    }

    pub fn with_tags(tags: impl IntoIterator<Item = TypeTag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }

    pub fn contains(&self, tag: TypeTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Members in code order
    pub fn tags(&self) -> Vec<TypeTag> {
        let mut tags: Vec<TypeTag> = self.tags.iter().copied().collect();
        tags.sort();
        tags
    }
}

/// Symbol, sexp, struct, annotation wrapper and reserved.
impl Default for UnsupportedSet {
    fn default() -> Self {
        Self::with_tags([
            TypeTag::Symbol,
            TypeTag::Sexp,
            TypeTag::Struct,
            TypeTag::Annotation,
            TypeTag::Reserved,
        ])
    }
}

/// Sparse adjacency list of the strict-less relation: `less -> {greater}`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StrictLessMap {
    successors: HashMap<TypeTag, HashSet<TypeTag>>,
}

impl StrictLessMap {
    /// Map with no claims at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that every value of `less` sorts before every value of `greater`
    pub fn insert(&mut self, less: TypeTag, greater: TypeTag) {
        self.successors.entry(less).or_default().insert(greater);
    }

    pub fn extend(&mut self, less: TypeTag, greater: impl IntoIterator<Item = TypeTag>) {
        self.successors.entry(less).or_default().extend(greater);
    }

    /// Drop a single claim; an emptied entry is removed so the key reads as absent
    pub fn remove(&mut self, less: TypeTag, greater: TypeTag) -> bool {
        let Some(set) = self.successors.get_mut(&less) else {
            return false;
        };
        let removed = set.remove(&greater);
        if set.is_empty() {
            self.successors.remove(&less);
        }
        removed
    }

    /// True iff `greater` is listed directly under `less`
    pub fn contains(&self, less: TypeTag, greater: TypeTag) -> bool {
        self.successors
            .get(&less)
            .is_some_and(|set| set.contains(&greater))
    }

    /// Entry for `less`, `None` when the tag makes no claims
    pub fn successors(&self, less: TypeTag) -> Option<&HashSet<TypeTag>> {
        self.successors.get(&less)
    }

    pub fn has_entry(&self, tag: TypeTag) -> bool {
        self.successors.contains_key(&tag)
    }

    /// All `(less, greater)` claims, sorted for determinism
    pub fn pairs(&self) -> Vec<(TypeTag, TypeTag)> {
        let mut pairs: Vec<(TypeTag, TypeTag)> = self
            .successors
            .iter()
            .flat_map(|(less, set)| set.iter().map(move |greater| (*less, *greater)))
            .collect();
        pairs.sort();
        pairs
    }

    pub fn len(&self) -> usize {
        self.successors.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// The authored cross-type order.
    ///
    /// Null has no entry: where nulls sort is a runtime policy of the
    /// comparator. Numeric tags make no claims about each other, and clob and
    /// blob are mutually unordered; those pairs need a value comparison.
    pub fn authored() -> Self {
        use super::value_objects::TypeTag::*;

        const AFTER_NUMBERS: [TypeTag; 5] = [Timestamp, String, Clob, Blob, List];

        let mut map = Self::new();
        map.extend(
            Bool,
            [Uint, Int, Float, Decimal, Timestamp, String, Clob, Blob, List],
        );
        for numeric in [Uint, Int, Float, Decimal] {
            map.extend(numeric, AFTER_NUMBERS);
        }
        map.extend(Timestamp, [String, Clob, Blob, List]);
        map.extend(String, [Clob, Blob, List]);
        map.insert(Clob, List);
        map.insert(Blob, List);
        map.insert(List, Struct);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_unsupported_set() {
        let set = UnsupportedSet::default();
        assert_eq!(
            set.tags(),
            vec![
                TypeTag::Symbol,
                TypeTag::Sexp,
                TypeTag::Struct,
                TypeTag::Annotation,
                TypeTag::Reserved
            ]
        );
        assert!(!set.contains(TypeTag::List));
    }

    #[test]
    fn test_absent_key_makes_no_claims() {
        let map = StrictLessMap::authored();
        assert!(!map.has_entry(TypeTag::Null));
        assert!(map.successors(TypeTag::Null).is_none());
        for tag in TypeTag::ALL {
            assert!(!map.contains(TypeTag::Null, tag));
        }
    }

    #[test]
    fn test_authored_claims() {
        let map = StrictLessMap::authored();
        assert!(map.contains(TypeTag::Bool, TypeTag::Uint));
        assert!(map.contains(TypeTag::Timestamp, TypeTag::String));
        assert!(map.contains(TypeTag::List, TypeTag::Struct));
        assert!(!map.contains(TypeTag::Uint, TypeTag::Int));
        assert!(!map.contains(TypeTag::Clob, TypeTag::Blob));
        assert_eq!(map.len(), 9 + 4 * 5 + 4 + 3 + 1 + 1 + 1);
    }

    #[test]
    fn test_remove_clears_empty_entry() {
        let mut map = StrictLessMap::new();
        map.insert(TypeTag::Clob, TypeTag::List);
        assert!(map.remove(TypeTag::Clob, TypeTag::List));
        assert!(!map.has_entry(TypeTag::Clob));
        assert!(map.is_empty());
        assert!(!map.remove(TypeTag::Clob, TypeTag::List));
    }

    #[test]
    fn test_pairs_sorted() {
        let mut map = StrictLessMap::new();
        map.insert(TypeTag::String, TypeTag::List);
        map.insert(TypeTag::Bool, TypeTag::String);
        assert_eq!(
            map.pairs(),
            vec![
                (TypeTag::Bool, TypeTag::String),
                (TypeTag::String, TypeTag::List)
            ]
        );
    }
}
