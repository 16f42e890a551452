//! Favorites service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        favorites::{errors::FavoritesServiceError, repository::PgFavoritesRepository},
        recipes::{
            PgRecipesRepository,
            records::{RecipeSummary, RecipeUuid},
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgFavoritesService {
    db: Db,
    repository: PgFavoritesRepository,
    recipes_repository: PgRecipesRepository,
}

impl PgFavoritesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgFavoritesRepository::new(),
            recipes_repository: PgRecipesRepository::new(),
        }
    }
}

#[async_trait]
impl FavoritesService for PgFavoritesService {
    async fn add_favorite(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<RecipeSummary, FavoritesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let summary = self
            .recipes_repository
            .get_recipe_summary(&mut tx, recipe)
            .await?;

        if self.repository.add_favorite(&mut tx, user, recipe).await? == 0 {
            return Err(FavoritesServiceError::AlreadyExists);
        }

        tx.commit().await?;

        Ok(summary)
    }

    async fn remove_favorite(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), FavoritesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.recipes_repository
            .get_recipe_summary(&mut tx, recipe)
            .await?;

        if self.repository.remove_favorite(&mut tx, user, recipe).await? == 0 {
            return Err(FavoritesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait FavoritesService: Send + Sync {
    /// Mark a recipe as a favorite of `user`.
    async fn add_favorite(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<RecipeSummary, FavoritesServiceError>;

    /// Remove a recipe from `user`'s favorites. Removing an absent favorite is an error.
    async fn remove_favorite(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), FavoritesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{
        TestContext,
        helpers::{create_recipe, create_user},
    };

    use super::*;

    #[tokio::test]
    async fn add_then_remove_favorite() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "cook").await?;
        let recipe = create_recipe(&ctx, user.uuid, "Soup").await?;

        let summary = ctx.favorites.add_favorite(user.uuid, recipe.uuid).await?;

        assert_eq!(summary.uuid, recipe.uuid);
        assert_eq!(summary.name, "Soup");

        ctx.favorites.remove_favorite(user.uuid, recipe.uuid).await?;

        Ok(())
    }

    #[tokio::test]
    async fn adding_twice_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "cook").await?;
        let recipe = create_recipe(&ctx, user.uuid, "Soup").await?;

        ctx.favorites.add_favorite(user.uuid, recipe.uuid).await?;

        let result = ctx.favorites.add_favorite(user.uuid, recipe.uuid).await;

        assert!(
            matches!(result, Err(FavoritesServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn removing_absent_favorite_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "cook").await?;
        let recipe = create_recipe(&ctx, user.uuid, "Soup").await?;

        let result = ctx.favorites.remove_favorite(user.uuid, recipe.uuid).await;

        assert!(
            matches!(result, Err(FavoritesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_recipe_returns_recipe_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "cook").await?;

        let result = ctx.favorites.add_favorite(user.uuid, RecipeUuid::new()).await;

        assert!(
            matches!(result, Err(FavoritesServiceError::RecipeNotFound)),
            "expected RecipeNotFound, got {result:?}"
        );

        Ok(())
    }
}
