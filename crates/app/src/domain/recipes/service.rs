//! Recipes service.

use std::str::FromStr;

use async_trait::async_trait;
use mockall::automock;
use rand::{CryptoRng, Rng, rngs::OsRng};
use rustc_hash::FxHashMap;
use sqlx::{Postgres, Transaction};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        recipes::{
            data::{IngredientAmount, NewRecipe, RecipeFilter, RecipeUpdate},
            errors::RecipesServiceError,
            records::{RecipeRecord, RecipeUuid},
            repository::{PgRecipesRepository, RecipeContent},
            short_link::{ShortLink, ensure_capacity},
        },
        tags::records::TagUuid,
        users::records::UserUuid,
    },
    pagination::{Page, Pagination},
};

#[derive(Debug, Clone)]
pub struct PgRecipesService {
    db: Db,
    repository: PgRecipesRepository,
}

impl PgRecipesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgRecipesRepository::new(),
        }
    }

    /// Draw tokens from `rng` until one has never been issued, and claim it.
    async fn issue_short_link<R>(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        rng: &mut R,
    ) -> Result<ShortLink, RecipesServiceError>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        ensure_capacity(self.repository.count_short_links(tx).await?)?;

        loop {
            let candidate = ShortLink::generate(&mut *rng);

            if self.repository.claim_short_link(tx, &candidate).await? {
                return Ok(candidate);
            }

            debug!(%candidate, "short link collision, drawing again");
        }
    }

    async fn create_recipe_with_rng<R>(
        &self,
        author: UserUuid,
        recipe: NewRecipe,
        rng: &mut R,
    ) -> Result<RecipeRecord, RecipesServiceError>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        recipe.validate()?;

        let content = RecipeContent {
            name: &recipe.name,
            text: &recipe.text,
            cooking_time: recipe.cooking_time,
        };

        let mut tx = self.db.begin_transaction().await?;

        let short_link = self.issue_short_link(&mut tx, rng).await?;

        self.repository
            .insert_recipe(&mut tx, recipe.uuid, author, &content, &short_link)
            .await?;

        self.store_details(&mut tx, recipe.uuid, &recipe.ingredients, &recipe.tags)
            .await?;

        let created = self.load_recipe(&mut tx, Some(author), recipe.uuid).await?;

        tx.commit().await?;

        info!(recipe_uuid = %created.uuid, %short_link, "created recipe");

        Ok(created)
    }

    /// Fill in ingredient lines and tags for already loaded recipes.
    async fn attach_details(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipes: &mut [RecipeRecord],
    ) -> Result<(), sqlx::Error> {
        if recipes.is_empty() {
            return Ok(());
        }

        let uuids: Vec<Uuid> = recipes.iter().map(|r| r.uuid.into_uuid()).collect();

        let index: FxHashMap<RecipeUuid, usize> = recipes
            .iter()
            .enumerate()
            .map(|(i, recipe)| (recipe.uuid, i))
            .collect();

        for (recipe, line) in self.repository.list_recipe_ingredients(tx, &uuids).await? {
            if let Some(&i) = index.get(&recipe) {
                recipes[i].ingredients.push(line);
            }
        }

        for (recipe, tag) in self.repository.list_recipe_tags(tx, &uuids).await? {
            if let Some(&i) = index.get(&recipe) {
                recipes[i].tags.push(tag);
            }
        }

        Ok(())
    }

    async fn load_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        viewer: Option<UserUuid>,
        recipe: RecipeUuid,
    ) -> Result<RecipeRecord, sqlx::Error> {
        let mut recipe = self.repository.get_recipe(tx, viewer, recipe).await?;

        self.attach_details(tx, std::slice::from_mut(&mut recipe))
            .await?;

        Ok(recipe)
    }

    async fn store_details(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
        ingredients: &[IngredientAmount],
        tags: &[TagUuid],
    ) -> Result<(), sqlx::Error> {
        self.repository
            .insert_recipe_ingredients(tx, recipe, ingredients)
            .await?;

        self.repository.insert_recipe_tags(tx, recipe, tags).await
    }

    /// Lock the recipe and check that `editor` wrote it.
    async fn authorize_edit(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        editor: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), RecipesServiceError> {
        let author = self.repository.find_recipe_author(tx, recipe).await?;

        if author != editor {
            return Err(RecipesServiceError::Forbidden);
        }

        Ok(())
    }
}

#[async_trait]
impl RecipesService for PgRecipesService {
    async fn list_recipes(
        &self,
        viewer: Option<UserUuid>,
        filter: RecipeFilter,
        pagination: Pagination,
    ) -> Result<Page<RecipeRecord>, RecipesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let count = self
            .repository
            .count_recipes(&mut tx, viewer, &filter)
            .await?;

        let mut recipes = self
            .repository
            .list_recipes(&mut tx, viewer, &filter, pagination)
            .await?;

        self.attach_details(&mut tx, &mut recipes).await?;

        tx.commit().await?;

        Ok(Page::new(count, recipes))
    }

    async fn get_recipe(
        &self,
        viewer: Option<UserUuid>,
        recipe: RecipeUuid,
    ) -> Result<RecipeRecord, RecipesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let recipe = self.load_recipe(&mut tx, viewer, recipe).await?;

        tx.commit().await?;

        Ok(recipe)
    }

    async fn create_recipe(
        &self,
        author: UserUuid,
        recipe: NewRecipe,
    ) -> Result<RecipeRecord, RecipesServiceError> {
        self.create_recipe_with_rng(author, recipe, &mut OsRng).await
    }

    async fn update_recipe(
        &self,
        editor: UserUuid,
        recipe: RecipeUuid,
        update: RecipeUpdate,
    ) -> Result<RecipeRecord, RecipesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.authorize_edit(&mut tx, editor, recipe).await?;

        update.validate()?;

        let content = RecipeContent {
            name: &update.name,
            text: &update.text,
            cooking_time: update.cooking_time,
        };

        self.repository
            .update_recipe(&mut tx, recipe, &content)
            .await?;

        self.repository.clear_recipe_details(&mut tx, recipe).await?;

        self.store_details(&mut tx, recipe, &update.ingredients, &update.tags)
            .await?;

        let updated = self.load_recipe(&mut tx, Some(editor), recipe).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_recipe(
        &self,
        editor: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), RecipesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.authorize_edit(&mut tx, editor, recipe).await?;

        let rows_affected = self.repository.delete_recipe(&mut tx, recipe).await?;

        if rows_affected == 0 {
            return Err(RecipesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn resolve_short_link(&self, token: &str) -> Result<RecipeUuid, RecipesServiceError> {
        // Anything that is not a well-formed token was never issued.
        let short_link = ShortLink::from_str(token)?;

        let mut tx = self.db.begin_transaction().await?;

        let recipe = self
            .repository
            .resolve_short_link(&mut tx, &short_link)
            .await?;

        tx.commit().await?;

        recipe.ok_or(RecipesServiceError::NotFound)
    }

    async fn get_short_link(&self, recipe: RecipeUuid) -> Result<ShortLink, RecipesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let short_link = self.repository.get_short_link(&mut tx, recipe).await?;

        tx.commit().await?;

        Ok(short_link)
    }
}

#[automock]
#[async_trait]
pub trait RecipesService: Send + Sync {
    /// Retrieve a page of recipes, newest first.
    async fn list_recipes(
        &self,
        viewer: Option<UserUuid>,
        filter: RecipeFilter,
        pagination: Pagination,
    ) -> Result<Page<RecipeRecord>, RecipesServiceError>;

    async fn get_recipe(
        &self,
        viewer: Option<UserUuid>,
        recipe: RecipeUuid,
    ) -> Result<RecipeRecord, RecipesServiceError>;

    /// Store a new recipe and issue its short link.
    async fn create_recipe(
        &self,
        author: UserUuid,
        recipe: NewRecipe,
    ) -> Result<RecipeRecord, RecipesServiceError>;

    /// Replace a recipe's content, ingredients and tags. Only the author may do this.
    async fn update_recipe(
        &self,
        editor: UserUuid,
        recipe: RecipeUuid,
        update: RecipeUpdate,
    ) -> Result<RecipeRecord, RecipesServiceError>;

    /// Delete a recipe and everything attached to it. Only the author may do this.
    async fn delete_recipe(
        &self,
        editor: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), RecipesServiceError>;

    /// Map a short link token back to its recipe.
    async fn resolve_short_link(&self, token: &str) -> Result<RecipeUuid, RecipesServiceError>;

    async fn get_short_link(&self, recipe: RecipeUuid) -> Result<ShortLink, RecipesServiceError>;
}
