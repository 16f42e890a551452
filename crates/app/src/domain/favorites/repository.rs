//! Favorites Repository

use sqlx::{Postgres, Transaction, query};

use crate::domain::{recipes::records::RecipeUuid, users::records::UserUuid};

const ADD_FAVORITE_SQL: &str = include_str!("sql/add_favorite.sql");
const REMOVE_FAVORITE_SQL: &str = include_str!("sql/remove_favorite.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgFavoritesRepository;

impl PgFavoritesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Returns the number of rows inserted, zero when the favorite already existed.
    #[tracing::instrument(name = "favorites.repository.add_favorite", skip(self, tx), err)]
    pub(crate) async fn add_favorite(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(ADD_FAVORITE_SQL)
            .bind(user.into_uuid())
            .bind(recipe.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    #[tracing::instrument(name = "favorites.repository.remove_favorite", skip(self, tx), err)]
    pub(crate) async fn remove_favorite(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(REMOVE_FAVORITE_SQL)
            .bind(user.into_uuid())
            .bind(recipe.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
