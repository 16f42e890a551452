//! Subscriptions service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        subscriptions::{
            errors::SubscriptionsServiceError, records::SubscribedAuthor,
            repository::PgSubscriptionsRepository,
        },
        users::{PgUsersRepository, records::UserUuid},
    },
    pagination::{Page, Pagination},
};

#[derive(Debug, Clone)]
pub struct PgSubscriptionsService {
    db: Db,
    repository: PgSubscriptionsRepository,
    users_repository: PgUsersRepository,
}

impl PgSubscriptionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgSubscriptionsRepository::new(),
            users_repository: PgUsersRepository::new(),
        }
    }

    async fn attach_recipes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        authors: &mut [SubscribedAuthor],
        recipes_limit: Option<u32>,
    ) -> Result<(), sqlx::Error> {
        if authors.is_empty() {
            return Ok(());
        }

        let uuids: Vec<Uuid> = authors.iter().map(|a| a.author.uuid.into_uuid()).collect();

        let index: FxHashMap<UserUuid, usize> = authors
            .iter()
            .enumerate()
            .map(|(i, a)| (a.author.uuid, i))
            .collect();

        for (author, recipe) in self
            .repository
            .list_author_recipes(tx, &uuids, recipes_limit)
            .await?
        {
            if let Some(&i) = index.get(&author) {
                authors[i].recipes.push(recipe);
            }
        }

        Ok(())
    }
}

#[async_trait]
impl SubscriptionsService for PgSubscriptionsService {
    async fn subscribe(
        &self,
        subscriber: UserUuid,
        author: UserUuid,
        recipes_limit: Option<u32>,
    ) -> Result<SubscribedAuthor, SubscriptionsServiceError> {
        if subscriber == author {
            return Err(SubscriptionsServiceError::SelfSubscription);
        }

        let mut tx = self.db.begin_transaction().await?;

        if !self.users_repository.user_exists(&mut tx, author).await? {
            return Err(SubscriptionsServiceError::AuthorNotFound);
        }

        if self
            .repository
            .create_subscription(&mut tx, subscriber, author)
            .await?
            == 0
        {
            return Err(SubscriptionsServiceError::AlreadyExists);
        }

        let mut subscribed = self.repository.get_author(&mut tx, subscriber, author).await?;

        self.attach_recipes(&mut tx, std::slice::from_mut(&mut subscribed), recipes_limit)
            .await?;

        tx.commit().await?;

        Ok(subscribed)
    }

    async fn unsubscribe(
        &self,
        subscriber: UserUuid,
        author: UserUuid,
    ) -> Result<(), SubscriptionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        if !self.users_repository.user_exists(&mut tx, author).await? {
            return Err(SubscriptionsServiceError::AuthorNotFound);
        }

        if self
            .repository
            .delete_subscription(&mut tx, subscriber, author)
            .await?
            == 0
        {
            return Err(SubscriptionsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn list_subscriptions(
        &self,
        subscriber: UserUuid,
        pagination: Pagination,
        recipes_limit: Option<u32>,
    ) -> Result<Page<SubscribedAuthor>, SubscriptionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let count = self.repository.count_subscriptions(&mut tx, subscriber).await?;

        let mut authors = self
            .repository
            .list_subscribed_authors(&mut tx, subscriber, pagination)
            .await?;

        self.attach_recipes(&mut tx, &mut authors, recipes_limit)
            .await?;

        tx.commit().await?;

        Ok(Page::new(count, authors))
    }
}

#[automock]
#[async_trait]
pub trait SubscriptionsService: Send + Sync {
    /// Subscribe to `author` and return them with their newest recipes.
    async fn subscribe(
        &self,
        subscriber: UserUuid,
        author: UserUuid,
        recipes_limit: Option<u32>,
    ) -> Result<SubscribedAuthor, SubscriptionsServiceError>;

    async fn unsubscribe(
        &self,
        subscriber: UserUuid,
        author: UserUuid,
    ) -> Result<(), SubscriptionsServiceError>;

    /// Authors `subscriber` follows, ordered by username.
    async fn list_subscriptions(
        &self,
        subscriber: UserUuid,
        pagination: Pagination,
        recipes_limit: Option<u32>,
    ) -> Result<Page<SubscribedAuthor>, SubscriptionsServiceError>;
}
