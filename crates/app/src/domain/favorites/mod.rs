//! Favorites

pub mod errors;
mod repository;
pub mod service;

pub use errors::FavoritesServiceError;
pub use service::*;
