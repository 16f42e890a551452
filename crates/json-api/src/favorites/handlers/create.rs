//! Add Favorite Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*, favorites::errors::into_status_error, recipes::get::RecipeSummaryResponse,
    state::State,
};

/// Add Favorite Handler
#[endpoint(
    tags("favorites"),
    summary = "Add Recipe to Favorites",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Recipe added to favorites"),
        (status_code = StatusCode::BAD_REQUEST, description = "Recipe is already in favorites"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Authentication required"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not found"),
    ),
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RecipeSummaryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let recipe = state
        .app
        .favorites
        .add_favorite(user, recipe.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(recipe.into()))
}
