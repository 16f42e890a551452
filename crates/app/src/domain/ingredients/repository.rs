//! Ingredients Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::ingredients::{
    data::NewIngredient,
    records::{IngredientRecord, IngredientUuid},
};

const LIST_INGREDIENTS_SQL: &str = include_str!("sql/list_ingredients.sql");
const GET_INGREDIENT_SQL: &str = include_str!("sql/get_ingredient.sql");
const INSERT_INGREDIENT_SQL: &str = include_str!("sql/insert_ingredient.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgIngredientsRepository;

impl PgIngredientsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// `name_prefix` must already have its `LIKE` wildcards escaped.
    #[tracing::instrument(name = "ingredients.repository.list_ingredients", skip(self, tx), err)]
    pub(crate) async fn list_ingredients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name_prefix: Option<&str>,
    ) -> Result<Vec<IngredientRecord>, sqlx::Error> {
        query_as::<Postgres, IngredientRecord>(LIST_INGREDIENTS_SQL)
            .bind(name_prefix)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_ingredient(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ingredient: IngredientUuid,
    ) -> Result<IngredientRecord, sqlx::Error> {
        query_as::<Postgres, IngredientRecord>(GET_INGREDIENT_SQL)
            .bind(ingredient.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Insert an ingredient unless its `(name, measurement_unit)` pair already exists.
    ///
    /// Returns the new identifier, or `None` when nothing was inserted.
    pub(crate) async fn insert_ingredient(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ingredient: &NewIngredient,
    ) -> Result<Option<IngredientUuid>, sqlx::Error> {
        let uuid: Option<Uuid> = query_scalar(INSERT_INGREDIENT_SQL)
            .bind(IngredientUuid::new().into_uuid())
            .bind(&ingredient.name)
            .bind(&ingredient.measurement_unit)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(uuid.map(IngredientUuid::from_uuid))
    }
}

impl<'r> FromRow<'r, PgRow> for IngredientRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: IngredientUuid::from_uuid(row.try_get::<Uuid, _>("uuid")?),
            name: row.try_get("name")?,
            measurement_unit: row.try_get("measurement_unit")?,
        })
    }
}
