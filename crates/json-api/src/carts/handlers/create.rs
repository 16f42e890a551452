//! Add to Shopping Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::errors::into_status_error, extensions::*, recipes::get::RecipeSummaryResponse,
    state::State,
};

/// Add to Shopping Cart Handler
#[endpoint(
    tags("shopping cart"),
    summary = "Add Recipe to Shopping Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Recipe added to the shopping cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Recipe is already in the shopping cart"),
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
        .carts
        .add_to_cart(user, recipe.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(recipe.into()))
}
