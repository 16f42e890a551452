//! Unsubscribe Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State, subscriptions::errors::into_status_error};

/// Unsubscribe Handler
#[endpoint(
    tags("subscriptions"),
    summary = "Unsubscribe from Author",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Unsubscribed from the author"),
        (status_code = StatusCode::BAD_REQUEST, description = "Not subscribed to this author"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Authentication required"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let subscriber = depot.user_uuid_or_401()?;

    state
        .app
        .subscriptions
        .unsubscribe(subscriber, user.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
