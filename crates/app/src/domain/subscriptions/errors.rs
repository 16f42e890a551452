//! Subscriptions service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubscriptionsServiceError {
    #[error("users cannot subscribe to themselves")]
    SelfSubscription,

    #[error("author not found")]
    AuthorNotFound,

    #[error("already subscribed to this author")]
    AlreadyExists,

    #[error("not subscribed to this author")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for SubscriptionsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::AuthorNotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::AuthorNotFound,
            Some(ErrorKind::CheckViolation) => Self::SelfSubscription,
            Some(_) | None => Self::Sql(error),
        }
    }
}
