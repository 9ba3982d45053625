//! Relation Table Service
//!
//! Builds the relation table, verifies it, and renders the artifact the
//! value comparator is compiled against.

use crate::algorithms::relate::TypeOrderingOracle;
use crate::algorithms::table::RelationTable;
use crate::codegen;
use crate::config::RenderConfig;
use crate::domain::errors::OrderingError;
use crate::domain::invariants;
use crate::domain::value_objects::{Relation, TypeTag};

use tracing::{debug, info, warn};

/// Relation Table Service
///
/// Pipeline:
/// 1. Verify the authored strict-less table is a strict order
/// 2. Derive all 256 relations
/// 3. Verify pairwise consistency of the derived table
/// 4. Render per `RenderConfig`
pub struct RelationTableService {
    oracle: TypeOrderingOracle,
    config: RenderConfig,
}

impl RelationTableService {
    /// Service over the authored tables with default config
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self::with_oracle(TypeOrderingOracle::new(), config)
    }

    pub fn with_oracle(oracle: TypeOrderingOracle, config: RenderConfig) -> Self {
        Self { oracle, config }
    }

    pub fn oracle(&self) -> &TypeOrderingOracle {
        &self.oracle
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Reject strict-less tables that claim a < a or both a < b and b < a
    pub fn verify_tables(&self) -> Result<(), OrderingError> {
        let strict_less = self.oracle.strict_less();

        if !invariants::invariant_irreflexive(strict_less) {
            let tag = TypeTag::ALL
                .into_iter()
                .find(|t| strict_less.contains(*t, *t))
                .unwrap_or(TypeTag::Null);
            warn!(%tag, "Strict-less table orders a type before itself");
            return Err(OrderingError::Contradiction {
                less: tag,
                greater: tag,
            });
        }

        if let Some((less, greater)) = invariants::find_contradictions(strict_less).first() {
            warn!(%less, %greater, "Strict-less table claims both directions");
            return Err(OrderingError::Contradiction {
                less: *less,
                greater: *greater,
            });
        }

        debug!(
            claims = strict_less.len(),
            unsupported = self.oracle.unsupported().len(),
            "Ordering tables verified"
        );
        Ok(())
    }

    /// Derive and verify the relation table
    pub fn build_table(&self) -> Result<RelationTable, OrderingError> {
        self.verify_tables()?;

        let table = self.oracle.all_relations();

        if let Some((first, second)) = invariants::find_inconsistencies(&table).first() {
            warn!(%first, %second, "Derived relations are not inverses");
            return Err(OrderingError::InconsistentTable {
                first: *first,
                second: *second,
            });
        }

        info!(
            entries = table.len(),
            less = table.count(Relation::Less),
            greater = table.count(Relation::Greater),
            same_type = table.count(Relation::CompareSameType),
            different_types = table.count(Relation::CompareDifferentTypes),
            unsupported = table.count(Relation::Invalid),
            "Relation table derived"
        );

        Ok(table)
    }

    /// Build, verify and render the artifact
    pub fn render(&self) -> Result<String, OrderingError> {
        let table = self.build_table()?;
        let rendered = codegen::render(&table, &self.config)?;
        debug!(
            format = %self.config.format,
            bytes = rendered.len(),
            "Relation table rendered"
        );
        Ok(rendered)
    }
}

impl Default for RelationTableService {
    fn default() -> Self {
        Self::new()
    }
}
