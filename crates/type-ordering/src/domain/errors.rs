//! Error types for Type Ordering

use thiserror::Error;

use super::value_objects::TypeTag;

/// All errors that can occur while deriving or rendering the relation table
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderingError {
    /// Integer tag outside the closed 16-value enumeration
    #[error("Type tag out of range: {tag} > 15")]
    TagOutOfRange { tag: u8 },

    /// Name that does not match any type tag
    #[error("Unknown type name: {0}")]
    UnknownTypeName(String),

    /// Strict-less table claims both a < b and b < a
    #[error("Contradictory ordering: {less} < {greater} and {greater} < {less}")]
    Contradiction { less: TypeTag, greater: TypeTag },

    /// Derived table entries for (a, b) and (b, a) are not inverses
    #[error("Inconsistent relation table at ({first}, {second})")]
    InconsistentTable { first: TypeTag, second: TypeTag },

    /// Render configuration rejected by validation
    #[error("Invalid render config: {0}")]
    InvalidConfig(String),

    /// Output format name not recognised
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// Serialization failure while rendering
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for OrderingError {
    fn from(err: serde_json::Error) -> Self {
        OrderingError::Serialization(err.to_string())
    }
}
