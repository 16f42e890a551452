//! Test Helpers

use crate::{
    domain::{
        ingredients::{
            IngredientsService, IngredientsServiceError, data::NewIngredient,
            records::IngredientUuid,
        },
        recipes::{
            RecipesService,
            data::{IngredientAmount, NewRecipe},
            records::{RecipeRecord, RecipeUuid},
        },
        tags::{
            TagsService, TagsServiceError,
            data::NewTag,
            records::{TagRecord, TagUuid},
        },
        users::{
            UsersService, UsersServiceError,
            data::NewUser,
            records::{UserRecord, UserUuid},
        },
    },
    test::TestContext,
};

pub(crate) fn new_user(username: &str) -> NewUser {
    NewUser {
        uuid: UserUuid::new(),
        email: format!("{username}@example.com"),
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "Cook".to_string(),
    }
}

pub(crate) fn new_tag(name: &str, slug: &str) -> NewTag {
    NewTag {
        uuid: TagUuid::new(),
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

pub(crate) fn new_ingredient(name: &str, measurement_unit: &str) -> NewIngredient {
    NewIngredient {
        name: name.to_string(),
        measurement_unit: measurement_unit.to_string(),
    }
}

pub(crate) fn new_recipe(
    name: &str,
    ingredients: &[(IngredientUuid, u16)],
    tags: &[TagUuid],
) -> NewRecipe {
    NewRecipe {
        uuid: RecipeUuid::new(),
        name: name.to_string(),
        text: format!("How to make {name}."),
        cooking_time: 30,
        ingredients: ingredients
            .iter()
            .map(|&(ingredient_uuid, amount)| IngredientAmount {
                ingredient_uuid,
                amount,
            })
            .collect(),
        tags: tags.to_vec(),
    }
}

pub(crate) async fn create_user(
    ctx: &TestContext,
    username: &str,
) -> Result<UserRecord, UsersServiceError> {
    ctx.users.create_user(new_user(username)).await
}

pub(crate) async fn create_tag(
    ctx: &TestContext,
    name: &str,
    slug: &str,
) -> Result<TagUuid, TagsServiceError> {
    let tag: TagRecord = ctx.tags.create_tag(new_tag(name, slug)).await?;

    Ok(tag.uuid)
}

pub(crate) async fn create_ingredient(
    ctx: &TestContext,
    name: &str,
    measurement_unit: &str,
) -> Result<IngredientUuid, IngredientsServiceError> {
    ctx.ingredients
        .import_ingredients(vec![new_ingredient(name, measurement_unit)])
        .await?;

    ctx.ingredients
        .list_ingredients(Some(name.to_string()))
        .await?
        .into_iter()
        .find(|i| i.name == name && i.measurement_unit == measurement_unit)
        .map(|i| i.uuid)
        .ok_or(IngredientsServiceError::NotFound)
}

/// Create a recipe with its own single ingredient and tag.
pub(crate) async fn create_recipe(
    ctx: &TestContext,
    author: UserUuid,
    name: &str,
) -> Result<RecipeRecord, Box<dyn std::error::Error>> {
    let key = RecipeUuid::new().into_uuid().simple().to_string();
    let slug = &key[key.len() - 12..];

    let ingredient = create_ingredient(ctx, &format!("{name} base {slug}"), "g").await?;
    let tag = create_tag(ctx, slug, slug).await?;

    let recipe = ctx
        .recipes
        .create_recipe(author, new_recipe(name, &[(ingredient, 100)], &[tag]))
        .await?;

    Ok(recipe)
}
