//! Favorite Errors

use salvo::http::StatusError;
use tracing::error;

use pantry_app::domain::favorites::FavoritesServiceError;

pub(crate) fn into_status_error(error: FavoritesServiceError) -> StatusError {
    match error {
        FavoritesServiceError::RecipeNotFound => StatusError::not_found().brief("Recipe not found"),
        FavoritesServiceError::AlreadyExists => {
            StatusError::bad_request().brief("Recipe is already in favorites")
        }
        FavoritesServiceError::NotFound => {
            StatusError::bad_request().brief("Recipe is not in favorites")
        }
        FavoritesServiceError::Sql(source) => {
            error!("failed to update favorites: {source}");

            StatusError::internal_server_error()
        }
    }
}
