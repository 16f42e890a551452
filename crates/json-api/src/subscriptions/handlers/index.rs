//! Subscription Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use pantry_app::domain::subscriptions::records::SubscribedAuthor;

use crate::{
    extensions::*, recipes::get::RecipeSummaryResponse, state::State,
    subscriptions::errors::into_status_error, users::get::UserResponse,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubscribedAuthorResponse {
    #[serde(flatten)]
    pub author: UserResponse,

    /// Total number of recipes the author has published
    pub recipes_count: u64,

    /// The author's newest recipes
    pub recipes: Vec<RecipeSummaryResponse>,
}

impl From<SubscribedAuthor> for SubscribedAuthorResponse {
    fn from(subscribed: SubscribedAuthor) -> Self {
        SubscribedAuthorResponse {
            author: subscribed.author.into(),
            recipes_count: subscribed.recipes_count,
            recipes: subscribed.recipes.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubscriptionsResponse {
    /// Total number of subscribed authors
    pub count: u64,

    /// Number of the next page, if any
    pub next: Option<u32>,

    /// Number of the previous page, if any
    pub previous: Option<u32>,

    pub results: Vec<SubscribedAuthorResponse>,
}

/// Subscription Index Handler
///
/// Returns the authors the caller follows, ordered by username, each with up
/// to `recipes_limit` of their newest recipes.
#[endpoint(
    tags("subscriptions"),
    summary = "List Subscriptions",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Subscribed authors"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Authentication required"),
    ),
)]
pub(crate) async fn handler(
    page: QueryParam<u32, false>,
    limit: QueryParam<u32, false>,
    recipes_limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<SubscriptionsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let subscriber = depot.user_uuid_or_401()?;
    let pagination = page.into_pagination(limit)?;

    let authors = state
        .app
        .subscriptions
        .list_subscriptions(subscriber, pagination, recipes_limit.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(SubscriptionsResponse {
        count: authors.count,
        next: authors.next_page(pagination),
        previous: authors.previous_page(pagination),
        results: authors.results.into_iter().map(Into::into).collect(),
    }))
}
