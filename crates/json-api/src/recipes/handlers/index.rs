//! Recipe Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pantry_app::domain::recipes::data::RecipeFilter;

use crate::{
    extensions::*,
    recipes::{errors::into_status_error, get::RecipeResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipesResponse {
    /// Total number of matching recipes
    pub count: u64,

    /// Number of the next page, if any
    pub next: Option<u32>,

    /// Number of the previous page, if any
    pub previous: Option<u32>,

    pub results: Vec<RecipeResponse>,
}

/// Recipe Index Handler
///
/// Returns a page of recipes, newest first. `tags` may repeat and matches
/// recipes carrying any of the given slugs. `is_favorited` and
/// `is_in_shopping_cart` accept `1`/`0` or `true`/`false`.
#[endpoint(tags("recipes"), summary = "List Recipes")]
pub(crate) async fn handler(
    page: QueryParam<u32, false>,
    limit: QueryParam<u32, false>,
    author: QueryParam<String, false>,
    tags: QueryParam<Vec<String>, false>,
    is_favorited: QueryParam<String, false>,
    is_in_shopping_cart: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<RecipesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let viewer = depot.user_uuid();
    let pagination = page.into_pagination(limit)?;

    let author = author
        .into_inner()
        .map(|value| value.parse::<Uuid>())
        .transpose()
        .or_400("could not parse \"author\" query parameter")?;

    let filter = RecipeFilter {
        author: author.map(Into::into),
        tags: tags.into_inner().unwrap_or_default().into_iter().collect(),
        is_favorited: parse_flag("is_favorited", is_favorited.into_inner())?,
        is_in_shopping_cart: parse_flag("is_in_shopping_cart", is_in_shopping_cart.into_inner())?,
    };

    let recipes = state
        .app
        .recipes
        .list_recipes(viewer, filter, pagination)
        .await
        .map_err(into_status_error)?;

    Ok(Json(RecipesResponse {
        count: recipes.count,
        next: recipes.next_page(pagination),
        previous: recipes.previous_page(pagination),
        results: recipes.results.into_iter().map(Into::into).collect(),
    }))
}

fn parse_flag(name: &str, value: Option<String>) -> Result<bool, StatusError> {
    match value.as_deref() {
        None | Some("0" | "false") => Ok(false),
        Some("1" | "true") => Ok(true),
        Some(_) => {
            Err(StatusError::bad_request().brief(format!("\"{name}\" must be 0, 1, true or false")))
        }
    }
}
