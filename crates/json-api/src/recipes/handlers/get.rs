//! Get Recipe Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pantry_app::domain::recipes::records::{RecipeIngredientRecord, RecipeRecord, RecipeSummary};

use crate::{
    extensions::*, recipes::errors::into_status_error, state::State, tags::get::TagResponse,
    users::get::UserResponse,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeIngredientResponse {
    /// The unique identifier of the ingredient
    pub uuid: Uuid,

    pub name: String,

    pub measurement_unit: String,

    pub amount: u16,
}

impl From<RecipeIngredientRecord> for RecipeIngredientResponse {
    fn from(ingredient: RecipeIngredientRecord) -> Self {
        RecipeIngredientResponse {
            uuid: ingredient.uuid.into(),
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
            amount: ingredient.amount,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeResponse {
    /// The unique identifier of the recipe
    pub uuid: Uuid,

    pub author: UserResponse,

    pub name: String,

    pub text: String,

    /// Cooking time in minutes
    pub cooking_time: u16,

    pub tags: Vec<TagResponse>,

    /// Ingredients in the order the author listed them
    pub ingredients: Vec<RecipeIngredientResponse>,

    /// Whether the requesting user has favorited this recipe
    pub is_favorited: bool,

    /// Whether this recipe is in the requesting user's shopping cart
    pub is_in_shopping_cart: bool,

    /// The date and time the recipe was created
    pub created_at: String,

    /// The date and time the recipe was last updated
    pub updated_at: String,
}

impl From<RecipeRecord> for RecipeResponse {
    fn from(recipe: RecipeRecord) -> Self {
        RecipeResponse {
            uuid: recipe.uuid.into(),
            author: recipe.author.into(),
            name: recipe.name,
            text: recipe.text,
            cooking_time: recipe.cooking_time,
            tags: recipe.tags.into_iter().map(Into::into).collect(),
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            is_favorited: recipe.is_favorited,
            is_in_shopping_cart: recipe.is_in_shopping_cart,
            created_at: recipe.created_at.to_string(),
            updated_at: recipe.updated_at.to_string(),
        }
    }
}

/// Short form of a recipe used by favorites, the cart and subscriptions.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeSummaryResponse {
    pub uuid: Uuid,

    pub name: String,

    /// Cooking time in minutes
    pub cooking_time: u16,
}

impl From<RecipeSummary> for RecipeSummaryResponse {
    fn from(recipe: RecipeSummary) -> Self {
        RecipeSummaryResponse {
            uuid: recipe.uuid.into(),
            name: recipe.name,
            cooking_time: recipe.cooking_time,
        }
    }
}

/// Get Recipe Handler
///
/// Returns a recipe with its author, tags and ingredients.
#[endpoint(
    tags("recipes"),
    summary = "Get Recipe",
    responses(
        (status_code = StatusCode::OK, description = "Recipe found"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not found"),
    ),
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<RecipeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let viewer = depot.user_uuid();

    let recipe = state
        .app
        .recipes
        .get_recipe(viewer, recipe.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(recipe.into()))
}
