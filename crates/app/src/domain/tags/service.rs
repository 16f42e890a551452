//! Tags service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::tags::{
        data::NewTag,
        errors::TagsServiceError,
        records::{TagRecord, TagUuid},
        repository::PgTagsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgTagsService {
    db: Db,
    repository: PgTagsRepository,
}

impl PgTagsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgTagsRepository::new(),
        }
    }
}

#[async_trait]
impl TagsService for PgTagsService {
    async fn list_tags(&self) -> Result<Vec<TagRecord>, TagsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let tags = self.repository.list_tags(&mut tx).await?;

        tx.commit().await?;

        Ok(tags)
    }

    async fn get_tag(&self, tag: TagUuid) -> Result<TagRecord, TagsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let tag = self.repository.get_tag(&mut tx, tag).await?;

        tx.commit().await?;

        Ok(tag)
    }

    async fn create_tag(&self, tag: NewTag) -> Result<TagRecord, TagsServiceError> {
        if !tag.is_valid() {
            return Err(TagsServiceError::InvalidData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_tag(&mut tx, &tag).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait TagsService: Send + Sync {
    /// Retrieve every tag ordered by name.
    async fn list_tags(&self) -> Result<Vec<TagRecord>, TagsServiceError>;

    async fn get_tag(&self, tag: TagUuid) -> Result<TagRecord, TagsServiceError>;

    /// Create a tag. Names and slugs are unique.
    async fn create_tag(&self, tag: NewTag) -> Result<TagRecord, TagsServiceError>;
}
