//! Ingredient Errors

use salvo::http::StatusError;
use tracing::error;

use pantry_app::domain::ingredients::IngredientsServiceError;

pub(crate) fn into_status_error(error: IngredientsServiceError) -> StatusError {
    match error {
        IngredientsServiceError::NotFound => StatusError::not_found().brief("Ingredient not found"),
        IngredientsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid ingredient payload")
        }
        IngredientsServiceError::Sql(source) => {
            error!("failed to load ingredients: {source}");

            StatusError::internal_server_error()
        }
    }
}
