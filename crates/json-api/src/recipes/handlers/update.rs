//! Update Recipe Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pantry_app::domain::recipes::data::RecipeUpdate;

use crate::{
    extensions::*,
    recipes::{create::RecipeIngredientRequest, errors::into_status_error, get::RecipeResponse},
    state::State,
};

/// Update Recipe Request
///
/// Ingredients and tags replace the recipe's current ones.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateRecipeRequest {
    pub name: String,

    pub text: String,

    /// Cooking time in minutes, 1 to 32000
    pub cooking_time: u16,

    pub ingredients: Vec<RecipeIngredientRequest>,

    /// Tag UUIDs
    pub tags: Vec<Uuid>,
}

impl From<UpdateRecipeRequest> for RecipeUpdate {
    fn from(request: UpdateRecipeRequest) -> Self {
        RecipeUpdate {
            name: request.name,
            text: request.text,
            cooking_time: request.cooking_time,
            ingredients: request.ingredients.into_iter().map(Into::into).collect(),
            tags: request.tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Update Recipe Handler
///
/// Only the author may update a recipe. The short link never changes.
#[endpoint(
    tags("recipes"),
    summary = "Update Recipe",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Recipe updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Authentication required"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the author"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "recipes.update",
    skip(recipe, json, depot),
    fields(
        user_uuid = tracing::field::Empty,
        recipe_uuid = tracing::field::Empty,
        ingredients_count = tracing::field::Empty,
        tags_count = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    json: JsonBody<UpdateRecipeRequest>,
    depot: &mut Depot,
) -> Result<Json<RecipeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let editor = depot.user_uuid_or_401()?;
    let request = json.into_inner();
    let recipe = recipe.into_inner();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(editor));
    span.record("recipe_uuid", tracing::field::display(recipe));
    span.record(
        "ingredients_count",
        tracing::field::display(request.ingredients.len()),
    );
    span.record("tags_count", tracing::field::display(request.tags.len()));

    let updated = state
        .app
        .recipes
        .update_recipe(editor, recipe.into(), request.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(recipe_uuid = %recipe, "updated recipe");

    Ok(Json(updated.into()))
}
