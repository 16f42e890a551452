//! Recipes Repository

use std::str::FromStr;

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use tracing::debug;
use uuid::Uuid;

use crate::{
    database::try_into_count,
    domain::{
        ingredients::records::IngredientUuid,
        recipes::{
            data::{IngredientAmount, RecipeFilter},
            records::{RecipeIngredientRecord, RecipeRecord, RecipeSummary, RecipeUuid},
            short_link::ShortLink,
        },
        tags::records::{TagRecord, TagUuid},
        users::records::{UserRecord, UserUuid},
    },
    pagination::Pagination,
};

const LIST_RECIPES_SQL: &str = include_str!("sql/list_recipes.sql");
const COUNT_RECIPES_SQL: &str = include_str!("sql/count_recipes.sql");
const GET_RECIPE_SQL: &str = include_str!("sql/get_recipe.sql");
const GET_RECIPE_SUMMARY_SQL: &str = include_str!("sql/get_recipe_summary.sql");
const LIST_RECIPE_INGREDIENTS_SQL: &str = include_str!("sql/list_recipe_ingredients.sql");
const LIST_RECIPE_TAGS_SQL: &str = include_str!("sql/list_recipe_tags.sql");
const COUNT_SHORT_LINKS_SQL: &str = include_str!("sql/count_short_links.sql");
const CLAIM_SHORT_LINK_SQL: &str = include_str!("sql/claim_short_link.sql");
const INSERT_RECIPE_SQL: &str = include_str!("sql/insert_recipe.sql");
const INSERT_RECIPE_INGREDIENTS_SQL: &str = include_str!("sql/insert_recipe_ingredients.sql");
const INSERT_RECIPE_TAGS_SQL: &str = include_str!("sql/insert_recipe_tags.sql");
const FIND_RECIPE_AUTHOR_SQL: &str = include_str!("sql/find_recipe_author.sql");
const UPDATE_RECIPE_SQL: &str = include_str!("sql/update_recipe.sql");
const DELETE_RECIPE_INGREDIENTS_SQL: &str = include_str!("sql/delete_recipe_ingredients.sql");
const DELETE_RECIPE_TAGS_SQL: &str = include_str!("sql/delete_recipe_tags.sql");
const DELETE_RECIPE_FAVORITES_SQL: &str = include_str!("sql/delete_recipe_favorites.sql");
const DELETE_RECIPE_CART_ENTRIES_SQL: &str = include_str!("sql/delete_recipe_cart_entries.sql");
const DELETE_RECIPE_SQL: &str = include_str!("sql/delete_recipe.sql");
const RESOLVE_SHORT_LINK_SQL: &str = include_str!("sql/resolve_short_link.sql");
const GET_SHORT_LINK_SQL: &str = include_str!("sql/get_short_link.sql");

/// Content columns shared by recipe inserts and updates.
pub(crate) struct RecipeContent<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub cooking_time: u16,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRecipesRepository;

impl PgRecipesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    #[tracing::instrument(
        name = "recipes.repository.list_recipes",
        skip(self, tx, filter),
        fields(tag_count = filter.tags.len()),
        err
    )]
    pub(crate) async fn list_recipes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        viewer: Option<UserUuid>,
        filter: &RecipeFilter,
        pagination: Pagination,
    ) -> Result<Vec<RecipeRecord>, sqlx::Error> {
        query_as::<Postgres, RecipeRecord>(LIST_RECIPES_SQL)
            .bind(viewer.map(UserUuid::into_uuid))
            .bind(filter.author.map(UserUuid::into_uuid))
            .bind(filter.tags.as_slice())
            .bind(filter.is_favorited)
            .bind(filter.is_in_shopping_cart)
            .bind(i64::from(pagination.limit()))
            .bind(pagination.offset())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_recipes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        viewer: Option<UserUuid>,
        filter: &RecipeFilter,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_RECIPES_SQL)
            .bind(viewer.map(UserUuid::into_uuid))
            .bind(filter.author.map(UserUuid::into_uuid))
            .bind(filter.tags.as_slice())
            .bind(filter.is_favorited)
            .bind(filter.is_in_shopping_cart)
            .fetch_one(&mut **tx)
            .await?;

        try_into_count(count, "count")
    }

    #[tracing::instrument(name = "recipes.repository.get_recipe", skip(self, tx), err)]
    pub(crate) async fn get_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        viewer: Option<UserUuid>,
        recipe: RecipeUuid,
    ) -> Result<RecipeRecord, sqlx::Error> {
        query_as::<Postgres, RecipeRecord>(GET_RECIPE_SQL)
            .bind(viewer.map(UserUuid::into_uuid))
            .bind(recipe.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_recipe_summary(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
    ) -> Result<RecipeSummary, sqlx::Error> {
        query_as::<Postgres, RecipeSummary>(GET_RECIPE_SUMMARY_SQL)
            .bind(recipe.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Ingredient lines for each recipe, grouped by recipe and in recipe order.
    pub(crate) async fn list_recipe_ingredients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipes: &[Uuid],
    ) -> Result<Vec<(RecipeUuid, RecipeIngredientRecord)>, sqlx::Error> {
        let rows: Vec<(Uuid, Uuid, String, String, i32)> =
            query_as(LIST_RECIPE_INGREDIENTS_SQL)
                .bind(recipes)
                .fetch_all(&mut **tx)
                .await?;

        rows.into_iter()
            .map(|(recipe, ingredient, name, measurement_unit, amount)| {
                Ok((
                    RecipeUuid::from_uuid(recipe),
                    RecipeIngredientRecord {
                        uuid: IngredientUuid::from_uuid(ingredient),
                        name,
                        measurement_unit,
                        amount: try_into_u16(amount, "amount")?,
                    },
                ))
            })
            .collect()
    }

    pub(crate) async fn list_recipe_tags(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipes: &[Uuid],
    ) -> Result<Vec<(RecipeUuid, TagRecord)>, sqlx::Error> {
        let rows: Vec<(Uuid, Uuid, String, String)> = query_as(LIST_RECIPE_TAGS_SQL)
            .bind(recipes)
            .fetch_all(&mut **tx)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(recipe, tag, name, slug)| {
                (
                    RecipeUuid::from_uuid(recipe),
                    TagRecord {
                        uuid: TagUuid::from_uuid(tag),
                        name,
                        slug,
                    },
                )
            })
            .collect())
    }

    /// Number of short links handed out so far, including those of deleted recipes.
    pub(crate) async fn count_short_links(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_SHORT_LINKS_SQL)
            .fetch_one(&mut **tx)
            .await?;

        try_into_count(count, "count")
    }

    /// Record `short_link` as issued.
    ///
    /// Returns `false` when the link was handed out before.
    #[tracing::instrument(
        name = "recipes.repository.claim_short_link",
        skip(self, tx),
        fields(short_link = %short_link),
        err
    )]
    pub(crate) async fn claim_short_link(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        short_link: &ShortLink,
    ) -> Result<bool, sqlx::Error> {
        let claimed: Option<String> = query_scalar(CLAIM_SHORT_LINK_SQL)
            .bind(short_link.as_str())
            .fetch_optional(&mut **tx)
            .await?;

        if claimed.is_none() {
            debug!("short link already issued");
        }

        Ok(claimed.is_some())
    }

    /// Insert the recipe row under an already claimed `short_link`.
    #[tracing::instrument(
        name = "recipes.repository.insert_recipe",
        skip(self, tx, content),
        fields(recipe_uuid = %recipe, short_link = %short_link),
        err
    )]
    pub(crate) async fn insert_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
        author: UserUuid,
        content: &RecipeContent<'_>,
        short_link: &ShortLink,
    ) -> Result<(), sqlx::Error> {
        query(INSERT_RECIPE_SQL)
            .bind(recipe.into_uuid())
            .bind(author.into_uuid())
            .bind(content.name)
            .bind(content.text)
            .bind(i32::from(content.cooking_time))
            .bind(short_link.as_str())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Store ingredient lines, keeping their order as the recipe position.
    pub(crate) async fn insert_recipe_ingredients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
        ingredients: &[IngredientAmount],
    ) -> Result<(), sqlx::Error> {
        let (uuids, amounts): (Vec<Uuid>, Vec<i32>) = ingredients
            .iter()
            .map(|line| (line.ingredient_uuid.into_uuid(), i32::from(line.amount)))
            .unzip();

        query(INSERT_RECIPE_INGREDIENTS_SQL)
            .bind(recipe.into_uuid())
            .bind(&uuids)
            .bind(&amounts)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn insert_recipe_tags(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
        tags: &[TagUuid],
    ) -> Result<(), sqlx::Error> {
        let uuids: Vec<Uuid> = tags.iter().map(|tag| tag.into_uuid()).collect();

        query(INSERT_RECIPE_TAGS_SQL)
            .bind(recipe.into_uuid())
            .bind(&uuids)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Lock the recipe row and return its author.
    pub(crate) async fn find_recipe_author(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
    ) -> Result<UserUuid, sqlx::Error> {
        let author: Uuid = query_scalar(FIND_RECIPE_AUTHOR_SQL)
            .bind(recipe.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(UserUuid::from_uuid(author))
    }

    pub(crate) async fn update_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
        content: &RecipeContent<'_>,
    ) -> Result<(), sqlx::Error> {
        query(UPDATE_RECIPE_SQL)
            .bind(recipe.into_uuid())
            .bind(content.name)
            .bind(content.text)
            .bind(i32::from(content.cooking_time))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Remove the recipe's ingredient lines and tag links.
    pub(crate) async fn clear_recipe_details(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
    ) -> Result<(), sqlx::Error> {
        for sql in [DELETE_RECIPE_INGREDIENTS_SQL, DELETE_RECIPE_TAGS_SQL] {
            query(sql).bind(recipe.into_uuid()).execute(&mut **tx).await?;
        }

        Ok(())
    }

    /// Delete the recipe together with every row that refers to it.
    #[tracing::instrument(name = "recipes.repository.delete_recipe", skip(self, tx), err)]
    pub(crate) async fn delete_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
    ) -> Result<u64, sqlx::Error> {
        self.clear_recipe_details(tx, recipe).await?;

        for sql in [DELETE_RECIPE_FAVORITES_SQL, DELETE_RECIPE_CART_ENTRIES_SQL] {
            query(sql).bind(recipe.into_uuid()).execute(&mut **tx).await?;
        }

        let rows_affected = query(DELETE_RECIPE_SQL)
            .bind(recipe.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn resolve_short_link(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        short_link: &ShortLink,
    ) -> Result<Option<RecipeUuid>, sqlx::Error> {
        let recipe: Option<Uuid> = query_scalar(RESOLVE_SHORT_LINK_SQL)
            .bind(short_link.as_str())
            .fetch_optional(&mut **tx)
            .await?;

        Ok(recipe.map(RecipeUuid::from_uuid))
    }

    pub(crate) async fn get_short_link(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
    ) -> Result<ShortLink, sqlx::Error> {
        let short_link: String = query_scalar(GET_SHORT_LINK_SQL)
            .bind(recipe.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        parse_short_link(&short_link)
    }
}

fn try_into_u16(value: i32, column: &str) -> Result<u16, sqlx::Error> {
    u16::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

fn parse_short_link(value: &str) -> Result<ShortLink, sqlx::Error> {
    ShortLink::from_str(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: "short_link".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for RecipeRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let author = UserRecord {
            uuid: UserUuid::from_uuid(row.try_get::<Uuid, _>("author_uuid")?),
            email: row.try_get("author_email")?,
            username: row.try_get("author_username")?,
            first_name: row.try_get("author_first_name")?,
            last_name: row.try_get("author_last_name")?,
            is_subscribed: row.try_get("author_is_subscribed")?,
            created_at: row.try_get::<SqlxTimestamp, _>("author_created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("author_updated_at")?.to_jiff(),
        };

        Ok(Self {
            uuid: RecipeUuid::from_uuid(row.try_get::<Uuid, _>("uuid")?),
            author,
            name: row.try_get("name")?,
            text: row.try_get("text")?,
            cooking_time: try_into_u16(row.try_get("cooking_time")?, "cooking_time")?,
            short_link: parse_short_link(row.try_get("short_link")?)?,
            tags: Vec::new(),
            ingredients: Vec::new(),
            is_favorited: row.try_get("is_favorited")?,
            is_in_shopping_cart: row.try_get("is_in_shopping_cart")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for RecipeSummary {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: RecipeUuid::from_uuid(row.try_get::<Uuid, _>("uuid")?),
            name: row.try_get("name")?,
            cooking_time: try_into_u16(row.try_get("cooking_time")?, "cooking_time")?,
        })
    }
}
