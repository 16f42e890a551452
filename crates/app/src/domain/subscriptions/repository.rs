//! Subscriptions Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    database::try_into_count,
    domain::{
        recipes::records::{RecipeSummary, RecipeUuid},
        subscriptions::records::SubscribedAuthor,
        users::records::{UserRecord, UserUuid},
    },
    pagination::Pagination,
};

const CREATE_SUBSCRIPTION_SQL: &str = include_str!("sql/create_subscription.sql");
const DELETE_SUBSCRIPTION_SQL: &str = include_str!("sql/delete_subscription.sql");
const COUNT_SUBSCRIPTIONS_SQL: &str = include_str!("sql/count_subscriptions.sql");
const LIST_SUBSCRIBED_AUTHORS_SQL: &str = include_str!("sql/list_subscribed_authors.sql");
const GET_AUTHOR_SQL: &str = include_str!("sql/get_author.sql");
const LIST_AUTHOR_RECIPES_SQL: &str = include_str!("sql/list_author_recipes.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSubscriptionsRepository;

impl PgSubscriptionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Returns the number of rows inserted, zero when already subscribed.
    #[tracing::instrument(name = "subscriptions.repository.create_subscription", skip(self, tx), err)]
    pub(crate) async fn create_subscription(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subscriber: UserUuid,
        author: UserUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CREATE_SUBSCRIPTION_SQL)
            .bind(subscriber.into_uuid())
            .bind(author.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    #[tracing::instrument(name = "subscriptions.repository.delete_subscription", skip(self, tx), err)]
    pub(crate) async fn delete_subscription(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subscriber: UserUuid,
        author: UserUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_SUBSCRIPTION_SQL)
            .bind(subscriber.into_uuid())
            .bind(author.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn count_subscriptions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subscriber: UserUuid,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_SUBSCRIPTIONS_SQL)
            .bind(subscriber.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        try_into_count(count, "count")
    }

    pub(crate) async fn list_subscribed_authors(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subscriber: UserUuid,
        pagination: Pagination,
    ) -> Result<Vec<SubscribedAuthor>, sqlx::Error> {
        query_as::<Postgres, SubscribedAuthor>(LIST_SUBSCRIBED_AUTHORS_SQL)
            .bind(subscriber.into_uuid())
            .bind(i64::from(pagination.limit()))
            .bind(pagination.offset())
            .fetch_all(&mut **tx)
            .await
    }

    /// Load `author` as seen by `viewer`.
    pub(crate) async fn get_author(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        viewer: UserUuid,
        author: UserUuid,
    ) -> Result<SubscribedAuthor, sqlx::Error> {
        query_as::<Postgres, SubscribedAuthor>(GET_AUTHOR_SQL)
            .bind(viewer.into_uuid())
            .bind(author.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Newest recipes of each author, at most `limit` per author when given.
    pub(crate) async fn list_author_recipes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        authors: &[Uuid],
        limit: Option<u32>,
    ) -> Result<Vec<(UserUuid, RecipeSummary)>, sqlx::Error> {
        let rows: Vec<(Uuid, Uuid, String, i32)> = query_as(LIST_AUTHOR_RECIPES_SQL)
            .bind(authors)
            .bind(limit.map(i64::from))
            .fetch_all(&mut **tx)
            .await?;

        rows.into_iter()
            .map(|(author, recipe, name, cooking_time)| {
                let cooking_time =
                    u16::try_from(cooking_time).map_err(|e| sqlx::Error::ColumnDecode {
                        index: "cooking_time".to_string(),
                        source: Box::new(e),
                    })?;

                Ok((
                    UserUuid::from_uuid(author),
                    RecipeSummary {
                        uuid: RecipeUuid::from_uuid(recipe),
                        name,
                        cooking_time,
                    },
                ))
            })
            .collect()
    }
}

impl<'r> FromRow<'r, PgRow> for SubscribedAuthor {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            author: UserRecord::from_row(row)?,
            recipes_count: try_into_count(row.try_get("recipes_count")?, "recipes_count")?,
            recipes: Vec::new(),
        })
    }
}
