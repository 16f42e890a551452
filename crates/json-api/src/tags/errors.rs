//! Tag Errors

use salvo::http::StatusError;
use tracing::error;

use pantry_app::domain::tags::TagsServiceError;

pub(crate) fn into_status_error(error: TagsServiceError) -> StatusError {
    match error {
        TagsServiceError::NotFound => StatusError::not_found().brief("Tag not found"),
        TagsServiceError::AlreadyExists => StatusError::conflict().brief("Tag already exists"),
        TagsServiceError::InvalidData => StatusError::bad_request().brief("Invalid tag payload"),
        TagsServiceError::Sql(source) => {
            error!("failed to load tags: {source}");

            StatusError::internal_server_error()
        }
    }
}
