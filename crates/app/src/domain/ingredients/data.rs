//! Ingredient Data

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use thiserror::Error;

pub const MAX_INGREDIENT_NAME_LENGTH: usize = 128;
pub const MAX_MEASUREMENT_UNIT_LENGTH: usize = 64;

/// New Ingredient
///
/// Deserializes from `{"name": ..., "measurement_unit": ...}` JSON objects and
/// from headerless `name,measurement_unit` CSV rows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewIngredient {
    pub name: String,
    pub measurement_unit: String,
}

impl NewIngredient {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let name_len = self.name.chars().count();
        let unit_len = self.measurement_unit.chars().count();

        (1..=MAX_INGREDIENT_NAME_LENGTH).contains(&name_len)
            && (1..=MAX_MEASUREMENT_UNIT_LENGTH).contains(&unit_len)
    }
}

/// Layouts accepted for ingredient import files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientFileFormat {
    /// Headerless `name,measurement_unit` rows.
    Csv,

    /// An array of `{"name", "measurement_unit"}` objects.
    Json,
}

impl IngredientFileFormat {
    /// Pick the format from the file extension, ignoring case.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;

        if extension.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

#[derive(Debug, Error)]
pub enum IngredientFileError {
    #[error("invalid csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse an ingredient import file.
///
/// # Errors
///
/// Returns an error when a row or object does not hold a name and a unit.
pub fn parse_ingredients(
    contents: &str,
    format: IngredientFileFormat,
) -> Result<Vec<NewIngredient>, IngredientFileError> {
    match format {
        IngredientFileFormat::Json => Ok(serde_json::from_str(contents)?),
        IngredientFileFormat::Csv => Ok(ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_reader(contents.as_bytes())
            .deserialize()
            .collect::<Result<_, _>>()?),
    }
}

/// Escape `LIKE` wildcards so a user supplied prefix only matches literally.
pub(crate) fn escape_like(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());

    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }

        escaped.push(c);
    }

    escaped
}
