//! Subscription Errors

use salvo::http::StatusError;
use tracing::error;

use pantry_app::domain::subscriptions::SubscriptionsServiceError;

pub(crate) fn into_status_error(error: SubscriptionsServiceError) -> StatusError {
    match error {
        SubscriptionsServiceError::SelfSubscription => {
            StatusError::bad_request().brief("You cannot subscribe to yourself")
        }
        SubscriptionsServiceError::AuthorNotFound => {
            StatusError::not_found().brief("Author not found")
        }
        SubscriptionsServiceError::AlreadyExists => {
            StatusError::bad_request().brief("Already subscribed to this author")
        }
        SubscriptionsServiceError::NotFound => {
            StatusError::bad_request().brief("Not subscribed to this author")
        }
        SubscriptionsServiceError::Sql(source) => {
            error!("failed to process subscription: {source}");

            StatusError::internal_server_error()
        }
    }
}
