//! Ingredient Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    ingredients::{errors::into_status_error, get::IngredientResponse},
    state::State,
};

/// Ingredient Index Handler
///
/// Returns ingredients whose name starts with `name`, ignoring case.
#[endpoint(tags("ingredients"), summary = "Search Ingredients")]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<IngredientResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let ingredients = state
        .app
        .ingredients
        .list_ingredients(name.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ingredients.into_iter().map(Into::into).collect()))
}
