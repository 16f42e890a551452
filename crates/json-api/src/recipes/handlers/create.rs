//! Create Recipe Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pantry_app::domain::recipes::{
    data::{IngredientAmount, NewRecipe},
    records::RecipeUuid,
};

use crate::{
    extensions::*,
    recipes::{errors::into_status_error, get::RecipeResponse},
    state::State,
};

/// An ingredient and the amount of it the recipe uses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeIngredientRequest {
    /// Ingredient UUID
    pub uuid: Uuid,

    /// Amount in the ingredient's measurement unit, 1 to 32000
    pub amount: u16,
}

impl From<RecipeIngredientRequest> for IngredientAmount {
    fn from(request: RecipeIngredientRequest) -> Self {
        IngredientAmount {
            ingredient_uuid: request.uuid.into(),
            amount: request.amount,
        }
    }
}

/// Create Recipe Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateRecipeRequest {
    /// Client-chosen recipe UUID, generated when omitted
    #[serde(default)]
    pub uuid: Option<Uuid>,

    pub name: String,

    pub text: String,

    /// Cooking time in minutes, 1 to 32000
    pub cooking_time: u16,

    pub ingredients: Vec<RecipeIngredientRequest>,

    /// Tag UUIDs
    pub tags: Vec<Uuid>,
}

impl From<CreateRecipeRequest> for NewRecipe {
    fn from(request: CreateRecipeRequest) -> Self {
        NewRecipe {
            uuid: request.uuid.map_or_else(RecipeUuid::new, Into::into),
            name: request.name,
            text: request.text,
            cooking_time: request.cooking_time,
            ingredients: request.ingredients.into_iter().map(Into::into).collect(),
            tags: request.tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Create Recipe Handler
///
/// Stores a recipe authored by the requesting user and issues its short link.
#[endpoint(
    tags("recipes"),
    summary = "Create Recipe",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Recipe created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Authentication required"),
        (status_code = StatusCode::CONFLICT, description = "Recipe already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "recipes.create",
    skip(json, depot, res),
    fields(
        user_uuid = tracing::field::Empty,
        recipe_uuid = tracing::field::Empty,
        ingredients_count = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateRecipeRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RecipeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let author = depot.user_uuid_or_401()?;
    let recipe: NewRecipe = json.into_inner().into();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(author));
    span.record("recipe_uuid", tracing::field::display(recipe.uuid));
    span.record(
        "ingredients_count",
        tracing::field::display(recipe.ingredients.len()),
    );

    let recipe = state
        .app
        .recipes
        .create_recipe(author, recipe)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/recipes/{}", recipe.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(recipe_uuid = %recipe.uuid, short_link = %recipe.short_link, "created recipe");

    Ok(Json(recipe.into()))
}
