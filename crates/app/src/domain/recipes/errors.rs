//! Recipes service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::recipes::short_link::ShortLinkError;

/// Reasons a recipe payload is rejected before it reaches storage.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RecipeValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("name is too long")]
    NameTooLong,

    #[error("text must not be empty")]
    EmptyText,

    #[error("cooking time is out of range")]
    CookingTimeOutOfRange,

    #[error("at least one ingredient is required")]
    NoIngredients,

    #[error("ingredients must not repeat")]
    DuplicateIngredient,

    #[error("ingredient amount is out of range")]
    AmountOutOfRange,

    #[error("at least one tag is required")]
    NoTags,

    #[error("tags must not repeat")]
    DuplicateTag,
}

#[derive(Debug, Error)]
pub enum RecipesServiceError {
    #[error("recipe not found")]
    NotFound,

    #[error("only the author may change this recipe")]
    Forbidden,

    #[error("recipe already exists")]
    AlreadyExists,

    #[error("invalid recipe: {0}")]
    Invalid(#[from] RecipeValidationError),

    #[error("recipe references an unknown ingredient or tag")]
    InvalidReference,

    #[error("invalid data")]
    InvalidData,

    #[error("short link space exhausted")]
    ShortLinkSpaceExhausted,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for RecipesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(_) | None => Self::Sql(error),
        }
    }
}

impl From<ShortLinkError> for RecipesServiceError {
    fn from(error: ShortLinkError) -> Self {
        match error {
            ShortLinkError::Malformed => Self::NotFound,
            ShortLinkError::SpaceExhausted => Self::ShortLinkSpaceExhausted,
        }
    }
}
