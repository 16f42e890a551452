//! Carts Repository

use sqlx::{Postgres, Transaction, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    carts::shopping_list::IngredientQuantity, recipes::records::RecipeUuid,
    users::records::UserUuid,
};

const ADD_TO_CART_SQL: &str = include_str!("sql/add_to_cart.sql");
const REMOVE_FROM_CART_SQL: &str = include_str!("sql/remove_from_cart.sql");
const LIST_CART_RECIPE_UUIDS_SQL: &str = include_str!("sql/list_cart_recipe_uuids.sql");
const LIST_INGREDIENT_QUANTITIES_SQL: &str = include_str!("sql/list_ingredient_quantities.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Returns the number of rows inserted, zero when the recipe was already in the cart.
    #[tracing::instrument(name = "carts.repository.add_to_cart", skip(self, tx), err)]
    pub(crate) async fn add_to_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(ADD_TO_CART_SQL)
            .bind(user.into_uuid())
            .bind(recipe.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    #[tracing::instrument(name = "carts.repository.remove_from_cart", skip(self, tx), err)]
    pub(crate) async fn remove_from_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(REMOVE_FROM_CART_SQL)
            .bind(user.into_uuid())
            .bind(recipe.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Recipes in the user's cart, in the order they were added.
    pub(crate) async fn list_cart_recipe_uuids(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<RecipeUuid>, sqlx::Error> {
        let uuids: Vec<Uuid> = query_scalar(LIST_CART_RECIPE_UUIDS_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        Ok(uuids.into_iter().map(RecipeUuid::from_uuid).collect())
    }

    /// Ingredient lines of `recipes`, recipe by recipe in the given order.
    #[tracing::instrument(
        name = "carts.repository.list_ingredient_quantities",
        skip(self, tx, recipes),
        fields(recipe_count = recipes.len()),
        err
    )]
    pub(crate) async fn list_ingredient_quantities(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipes: &[RecipeUuid],
    ) -> Result<Vec<IngredientQuantity>, sqlx::Error> {
        let uuids: Vec<Uuid> = recipes.iter().map(|recipe| recipe.into_uuid()).collect();

        let rows: Vec<(String, String, i32)> = query_as(LIST_INGREDIENT_QUANTITIES_SQL)
            .bind(&uuids)
            .fetch_all(&mut **tx)
            .await?;

        rows.into_iter()
            .map(|(name, measurement_unit, amount)| {
                let amount = u16::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
                    index: "amount".to_string(),
                    source: Box::new(e),
                })?;

                Ok(IngredientQuantity {
                    name,
                    measurement_unit,
                    amount,
                })
            })
            .collect()
    }
}
