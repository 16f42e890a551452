//! Shopping Cart Errors

use salvo::http::StatusError;
use tracing::error;

use pantry_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::RecipeNotFound => StatusError::not_found().brief("Recipe not found"),
        CartsServiceError::AlreadyExists => {
            StatusError::bad_request().brief("Recipe is already in the shopping cart")
        }
        CartsServiceError::NotFound => {
            StatusError::bad_request().brief("Recipe is not in the shopping cart")
        }
        CartsServiceError::Sql(source) => {
            error!("failed to access shopping cart: {source}");

            StatusError::internal_server_error()
        }
    }
}
