//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError, repository::PgCartsRepository,
            shopping_list::ShoppingList,
        },
        recipes::{
            PgRecipesRepository,
            records::{RecipeSummary, RecipeUuid},
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    repository: PgCartsRepository,
    recipes_repository: PgRecipesRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartsRepository::new(),
            recipes_repository: PgRecipesRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn add_to_cart(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<RecipeSummary, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let summary = self
            .recipes_repository
            .get_recipe_summary(&mut tx, recipe)
            .await?;

        if self.repository.add_to_cart(&mut tx, user, recipe).await? == 0 {
            return Err(CartsServiceError::AlreadyExists);
        }

        tx.commit().await?;

        Ok(summary)
    }

    async fn remove_from_cart(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.recipes_repository
            .get_recipe_summary(&mut tx, recipe)
            .await?;

        if self.repository.remove_from_cart(&mut tx, user, recipe).await? == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn shopping_list(&self, user: UserUuid) -> Result<ShoppingList, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let recipes = self.repository.list_cart_recipe_uuids(&mut tx, user).await?;

        if recipes.is_empty() {
            tx.commit().await?;

            return Ok(ShoppingList::default());
        }

        let quantities = self
            .repository
            .list_ingredient_quantities(&mut tx, &recipes)
            .await?;

        tx.commit().await?;

        let list = ShoppingList::aggregate(quantities);

        debug!(
            recipe_count = recipes.len(),
            line_count = list.lines().len(),
            "aggregated shopping list"
        );

        Ok(list)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Put a recipe in `user`'s shopping cart.
    async fn add_to_cart(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<RecipeSummary, CartsServiceError>;

    /// Take a recipe out of `user`'s shopping cart. Removing an absent entry is an error.
    async fn remove_from_cart(
        &self,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), CartsServiceError>;

    /// Aggregate the ingredients of every recipe in `user`'s cart.
    async fn shopping_list(&self, user: UserUuid) -> Result<ShoppingList, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::recipes::RecipesService,
        test::{
            TestContext,
            helpers::{create_ingredient, create_tag, create_user, new_recipe},
        },
    };

    use super::*;

    #[tokio::test]
    async fn empty_cart_yields_empty_list() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "cook").await?;

        let list = ctx.carts.shopping_list(user.uuid).await?;

        assert!(list.is_empty());
        assert_eq!(list.render(), "");

        Ok(())
    }

    #[tokio::test]
    async fn shopping_list_merges_cart_recipes_in_order() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "cook").await?;
        let flour = create_ingredient(&ctx, "flour", "g").await?;
        let milk = create_ingredient(&ctx, "milk", "ml").await?;
        let eggs = create_ingredient(&ctx, "eggs", "pcs").await?;
        let tag = create_tag(&ctx, "Breakfast", "breakfast").await?;

        let pancakes = ctx
            .recipes
            .create_recipe(
                user.uuid,
                new_recipe("Pancakes", &[(milk, 300), (flour, 200)], &[tag]),
            )
            .await?;
        let bread = ctx
            .recipes
            .create_recipe(user.uuid, new_recipe("Bread", &[(flour, 500), (eggs, 2)], &[tag]))
            .await?;

        ctx.carts.add_to_cart(user.uuid, pancakes.uuid).await?;
        ctx.carts.add_to_cart(user.uuid, bread.uuid).await?;

        let list = ctx.carts.shopping_list(user.uuid).await?;

        assert_eq!(
            list.render(),
            "milk - 300 (ml)\nflour - 700 (g)\neggs - 2 (pcs)"
        );

        Ok(())
    }

    #[tokio::test]
    async fn cart_membership_errors() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "cook").await?;
        let recipe = crate::test::helpers::create_recipe(&ctx, user.uuid, "Soup").await?;

        ctx.carts.add_to_cart(user.uuid, recipe.uuid).await?;

        let duplicate = ctx.carts.add_to_cart(user.uuid, recipe.uuid).await;

        assert!(
            matches!(duplicate, Err(CartsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {duplicate:?}"
        );

        ctx.carts.remove_from_cart(user.uuid, recipe.uuid).await?;

        let absent = ctx.carts.remove_from_cart(user.uuid, recipe.uuid).await;

        assert!(
            matches!(absent, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {absent:?}"
        );

        let unknown = ctx.carts.add_to_cart(user.uuid, RecipeUuid::new()).await;

        assert!(
            matches!(unknown, Err(CartsServiceError::RecipeNotFound)),
            "expected RecipeNotFound, got {unknown:?}"
        );

        Ok(())
    }
}
