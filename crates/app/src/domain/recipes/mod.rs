//! Recipes

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;
pub mod short_link;

pub use errors::{RecipeValidationError, RecipesServiceError};
pub use service::*;

pub(crate) use repository::PgRecipesRepository;
