//! Value objects for Type Ordering
//!
//! `TypeTag` is the closed 16-value type enumeration, `Relation` the outcome
//! of comparing two tags.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::errors::OrderingError;

/// Number of type tags in the enumeration
pub const TYPE_COUNT: usize = 16;

/// Number of entries in the relation table (`TYPE_COUNT * TYPE_COUNT`)
pub const RELATION_COUNT: usize = TYPE_COUNT * TYPE_COUNT;

/// Category of a typed value, encoded in the high nibble of its type descriptor.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Null = 0,
    Bool = 1,
    /// Unsigned integer
    Uint = 2,
    /// Signed integer; always negative in the binary encoding
    Int = 3,
    Float = 4,
    Decimal = 5,
    Timestamp = 6,
    Symbol = 7,
    String = 8,
    Clob = 9,
    Blob = 10,
    List = 11,
    Sexp = 12,
    Struct = 13,
    Annotation = 14,
    Reserved = 15,
}

impl TypeTag {
    /// All tags in code order
    pub const ALL: [TypeTag; TYPE_COUNT] = [
        TypeTag::Null,
        TypeTag::Bool,
        TypeTag::Uint,
        TypeTag::Int,
        TypeTag::Float,
        TypeTag::Decimal,
        TypeTag::Timestamp,
        TypeTag::Symbol,
        TypeTag::String,
        TypeTag::Clob,
        TypeTag::Blob,
        TypeTag::List,
        TypeTag::Sexp,
        TypeTag::Struct,
        TypeTag::Annotation,
        TypeTag::Reserved,
    ];

    /// Integer code in [0, 15]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Tag for an integer code, failing fast outside [0, 15]
    pub fn from_code(code: u8) -> Result<Self, OrderingError> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(OrderingError::TagOutOfRange { tag: code })
    }

    /// Lowercase name used in logs and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::Null => "null",
            TypeTag::Bool => "bool",
            TypeTag::Uint => "uint",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Decimal => "decimal",
            TypeTag::Timestamp => "timestamp",
            TypeTag::Symbol => "symbol",
            TypeTag::String => "string",
            TypeTag::Clob => "clob",
            TypeTag::Blob => "blob",
            TypeTag::List => "list",
            TypeTag::Sexp => "sexp",
            TypeTag::Struct => "struct",
            TypeTag::Annotation => "annotation",
            TypeTag::Reserved => "reserved",
        }
    }

    /// Unsigned integer, signed integer, float or decimal
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            TypeTag::Uint | TypeTag::Int | TypeTag::Float | TypeTag::Decimal
        )
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = OrderingError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<TypeTag> for u8 {
    fn from(tag: TypeTag) -> Self {
        tag.code()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the lowercase name or the integer code.
impl FromStr for TypeTag {
    type Err = OrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| OrderingError::UnknownTypeName(s.to_string()))
    }
}

/// Relation between type(val1) and type(val2)
///
/// Discriminants are the wire codes of the downstream comparator enumeration.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// Every value of the first type sorts before every value of the second
    #[serde(rename = "alwaysLess")]
    Less = 0,
    /// Every value of the first type sorts after every value of the second
    #[serde(rename = "alwaysGreater")]
    Greater = 1,
    /// At least one side can never be ordered
    #[serde(rename = "unsupportedRelation")]
    Invalid = 2,
    /// Same type; a type-specific comparator decides
    #[serde(rename = "compareSameType")]
    CompareSameType = 3,
    /// Different types with no unconditional order; values must be inspected
    #[serde(rename = "compareDifferentTypes")]
    CompareDifferentTypes = 4,
}

impl Relation {
    /// All relations in wire-code order
    pub const ALL: [Relation; 5] = [
        Relation::Less,
        Relation::Greater,
        Relation::Invalid,
        Relation::CompareSameType,
        Relation::CompareDifferentTypes,
    ];

    /// Identifier the downstream comparator keys its dispatch on
    pub const fn vocabulary_name(self) -> &'static str {
        match self {
            Relation::Less => "alwaysLess",
            Relation::Greater => "alwaysGreater",
            Relation::Invalid => "unsupportedRelation",
            Relation::CompareSameType => "compareSameType",
            Relation::CompareDifferentTypes => "compareDifferentTypes",
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Relation seen from the other side of the pair
    pub const fn inverse(self) -> Self {
        match self {
            Relation::Less => Relation::Greater,
            Relation::Greater => Relation::Less,
            other => other,
        }
    }

    /// Ordering decided by type alone, if any
    pub const fn ordering(self) -> Option<Ordering> {
        match self {
            Relation::Less => Some(Ordering::Less),
            Relation::Greater => Some(Ordering::Greater),
            _ => None,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.vocabulary_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tag_codes_are_dense() {
        for (i, tag) in TypeTag::ALL.iter().enumerate() {
            assert_eq!(tag.code() as usize, i);
            assert_eq!(TypeTag::from_code(i as u8), Ok(*tag));
        }
    }

    #[test]
    fn test_type_tag_out_of_range() {
        assert_eq!(
            TypeTag::try_from(16),
            Err(OrderingError::TagOutOfRange { tag: 16 })
        );
        assert_eq!(
            TypeTag::try_from(0xff),
            Err(OrderingError::TagOutOfRange { tag: 0xff })
        );
    }

    #[test]
    fn test_type_tag_parse() {
        assert_eq!("uint".parse::<TypeTag>(), Ok(TypeTag::Uint));
        assert_eq!("STRUCT".parse::<TypeTag>(), Ok(TypeTag::Struct));
        assert_eq!("11".parse::<TypeTag>(), Ok(TypeTag::List));
        assert_eq!(
            "42".parse::<TypeTag>(),
            Err(OrderingError::TagOutOfRange { tag: 42 })
        );
        assert_eq!(
            "bigint".parse::<TypeTag>(),
            Err(OrderingError::UnknownTypeName("bigint".to_string()))
        );
    }

    #[test]
    fn test_numeric_tags() {
        let numeric: Vec<TypeTag> = TypeTag::ALL
            .iter()
            .copied()
            .filter(|t| t.is_numeric())
            .collect();
        assert_eq!(
            numeric,
            vec![TypeTag::Uint, TypeTag::Int, TypeTag::Float, TypeTag::Decimal]
        );
    }

    #[test]
    fn test_relation_inverse() {
        assert_eq!(Relation::Less.inverse(), Relation::Greater);
        assert_eq!(Relation::Greater.inverse(), Relation::Less);
        assert_eq!(Relation::Invalid.inverse(), Relation::Invalid);
        assert_eq!(
            Relation::CompareSameType.inverse(),
            Relation::CompareSameType
        );
        assert_eq!(
            Relation::CompareDifferentTypes.inverse(),
            Relation::CompareDifferentTypes
        );
    }

    #[test]
    fn test_relation_codes_follow_vocabulary_order() {
        let names: Vec<&str> = Relation::ALL.iter().map(|r| r.vocabulary_name()).collect();
        assert_eq!(
            names,
            vec![
                "alwaysLess",
                "alwaysGreater",
                "unsupportedRelation",
                "compareSameType",
                "compareDifferentTypes"
            ]
        );
        for (i, rel) in Relation::ALL.iter().enumerate() {
            assert_eq!(rel.code() as usize, i);
        }
    }

    #[test]
    fn test_relation_serializes_as_vocabulary_name() {
        let json = serde_json::to_string(&Relation::CompareDifferentTypes).unwrap();
        assert_eq!(json, "\"compareDifferentTypes\"");
        let back: Relation = serde_json::from_str("\"alwaysGreater\"").unwrap();
        assert_eq!(back, Relation::Greater);
    }

    #[test]
    fn test_relation_ordering() {
        assert_eq!(Relation::Less.ordering(), Some(Ordering::Less));
        assert_eq!(Relation::Greater.ordering(), Some(Ordering::Greater));
        assert_eq!(Relation::CompareSameType.ordering(), None);
    }
}
