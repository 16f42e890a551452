//! Users service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::users::{
        data::NewUser,
        errors::UsersServiceError,
        records::{UserRecord, UserUuid},
        repository::PgUsersRepository,
    },
    pagination::{Page, Pagination},
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn get_user(
        &self,
        viewer: Option<UserUuid>,
        user: UserUuid,
    ) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let user = self.repository.get_user(&mut tx, viewer, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn list_users(
        &self,
        viewer: Option<UserUuid>,
        pagination: Pagination,
    ) -> Result<Page<UserRecord>, UsersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let count = self.repository.count_users(&mut tx).await?;
        let users = self
            .repository
            .list_users(&mut tx, viewer, pagination)
            .await?;

        tx.commit().await?;

        Ok(Page::new(count, users))
    }

    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_user(&mut tx, &user).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Retrieve a single user as seen by `viewer`.
    async fn get_user(
        &self,
        viewer: Option<UserUuid>,
        user: UserUuid,
    ) -> Result<UserRecord, UsersServiceError>;

    /// Retrieve a page of users ordered by username.
    async fn list_users(
        &self,
        viewer: Option<UserUuid>,
        pagination: Pagination,
    ) -> Result<Page<UserRecord>, UsersServiceError>;

    /// Creates a new user profile.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;
}
