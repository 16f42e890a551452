//! Get Short Link Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, short_links::errors::into_get_link_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShortLinkResponse {
    /// Absolute URL that redirects to the recipe
    #[serde(rename = "short-link")]
    pub short_link: String,
}

/// Get Short Link Handler
#[endpoint(
    tags("short links"),
    summary = "Get Recipe Short Link",
    responses(
        (status_code = StatusCode::OK, description = "Short link for the recipe"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not found"),
    ),
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ShortLinkResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let short_link = state
        .app
        .recipes
        .get_short_link(recipe.into_inner().into())
        .await
        .map_err(into_get_link_status_error)?;

    Ok(Json(ShortLinkResponse {
        short_link: state.short_link_url(short_link.as_str()),
    }))
}
