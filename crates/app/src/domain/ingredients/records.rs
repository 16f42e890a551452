//! Ingredient Records

use crate::uuids::TypedUuid;

/// Ingredient UUID
pub type IngredientUuid = TypedUuid<IngredientRecord>;

/// Ingredient Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRecord {
    pub uuid: IngredientUuid,
    pub name: String,
    pub measurement_unit: String,
}

/// Outcome of a bulk ingredient import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows inserted by this import.
    pub created: u64,

    /// Rows whose `(name, measurement_unit)` pair was already present.
    pub existing: u64,
}
