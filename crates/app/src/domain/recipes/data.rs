//! Recipe Data

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::domain::{
    ingredients::records::IngredientUuid,
    recipes::{errors::RecipeValidationError, records::RecipeUuid},
    tags::records::TagUuid,
    users::records::UserUuid,
};

pub const MAX_RECIPE_NAME_LENGTH: usize = 256;

/// Smallest and largest permitted ingredient amount.
pub const MIN_AMOUNT: u16 = 1;
pub const MAX_AMOUNT: u16 = 32_000;

/// Smallest and largest permitted cooking time, in minutes.
pub const MIN_COOKING_TIME: u16 = 1;
pub const MAX_COOKING_TIME: u16 = 32_000;

/// An ingredient and the amount a recipe uses of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientAmount {
    pub ingredient_uuid: IngredientUuid,
    pub amount: u16,
}

/// New Recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub uuid: RecipeUuid,
    pub name: String,
    pub text: String,
    pub cooking_time: u16,
    pub ingredients: Vec<IngredientAmount>,
    pub tags: Vec<TagUuid>,
}

impl NewRecipe {
    /// # Errors
    ///
    /// Returns the first rule the recipe breaks.
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        validate_recipe(
            &self.name,
            &self.text,
            self.cooking_time,
            &self.ingredients,
            &self.tags,
        )
    }
}

/// Replacement content for an existing recipe.
///
/// The short link is not part of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeUpdate {
    pub name: String,
    pub text: String,
    pub cooking_time: u16,
    pub ingredients: Vec<IngredientAmount>,
    pub tags: Vec<TagUuid>,
}

impl RecipeUpdate {
    /// # Errors
    ///
    /// Returns the first rule the update breaks.
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        validate_recipe(
            &self.name,
            &self.text,
            self.cooking_time,
            &self.ingredients,
            &self.tags,
        )
    }
}

/// Recipe list filter. Boolean flags only apply when `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub author: Option<UserUuid>,

    /// Tag slugs; a recipe matches when it carries any of them.
    pub tags: SmallVec<[String; 4]>,

    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

fn validate_recipe(
    name: &str,
    text: &str,
    cooking_time: u16,
    ingredients: &[IngredientAmount],
    tags: &[TagUuid],
) -> Result<(), RecipeValidationError> {
    if name.trim().is_empty() {
        return Err(RecipeValidationError::EmptyName);
    }

    if name.chars().count() > MAX_RECIPE_NAME_LENGTH {
        return Err(RecipeValidationError::NameTooLong);
    }

    if text.trim().is_empty() {
        return Err(RecipeValidationError::EmptyText);
    }

    if !(MIN_COOKING_TIME..=MAX_COOKING_TIME).contains(&cooking_time) {
        return Err(RecipeValidationError::CookingTimeOutOfRange);
    }

    if ingredients.is_empty() {
        return Err(RecipeValidationError::NoIngredients);
    }

    let mut seen_ingredients = FxHashSet::default();

    for line in ingredients {
        if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&line.amount) {
            return Err(RecipeValidationError::AmountOutOfRange);
        }

        if !seen_ingredients.insert(line.ingredient_uuid) {
            return Err(RecipeValidationError::DuplicateIngredient);
        }
    }

    if tags.is_empty() {
        return Err(RecipeValidationError::NoTags);
    }

    let mut seen_tags = FxHashSet::default();

    if !tags.iter().all(|tag| seen_tags.insert(*tag)) {
        return Err(RecipeValidationError::DuplicateTag);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update() -> RecipeUpdate {
        RecipeUpdate {
            name: "Pancakes".to_string(),
            text: "Mix and fry.".to_string(),
            cooking_time: 20,
            ingredients: vec![IngredientAmount {
                ingredient_uuid: IngredientUuid::new(),
                amount: 200,
            }],
            tags: vec![TagUuid::new()],
        }
    }

    #[test]
    fn accepts_a_complete_recipe() {
        assert_eq!(update().validate(), Ok(()));
    }

    #[test]
    fn rejects_missing_ingredients_and_tags() {
        let mut recipe = update();
        recipe.ingredients.clear();

        assert_eq!(recipe.validate(), Err(RecipeValidationError::NoIngredients));

        let mut recipe = update();
        recipe.tags.clear();

        assert_eq!(recipe.validate(), Err(RecipeValidationError::NoTags));
    }

    #[test]
    fn rejects_duplicates() {
        let mut recipe = update();
        recipe.ingredients.push(recipe.ingredients[0]);

        assert_eq!(
            recipe.validate(),
            Err(RecipeValidationError::DuplicateIngredient)
        );

        let mut recipe = update();
        recipe.tags.push(recipe.tags[0]);

        assert_eq!(recipe.validate(), Err(RecipeValidationError::DuplicateTag));
    }

    #[test]
    fn enforces_amount_bounds() {
        for (amount, expected) in [
            (0, Err(RecipeValidationError::AmountOutOfRange)),
            (MIN_AMOUNT, Ok(())),
            (MAX_AMOUNT, Ok(())),
            (MAX_AMOUNT + 1, Err(RecipeValidationError::AmountOutOfRange)),
        ] {
            let mut recipe = update();
            recipe.ingredients[0].amount = amount;

            assert_eq!(recipe.validate(), expected, "amount {amount}");
        }
    }

    #[test]
    fn enforces_cooking_time_bounds() {
        let mut recipe = update();
        recipe.cooking_time = 0;

        assert_eq!(
            recipe.validate(),
            Err(RecipeValidationError::CookingTimeOutOfRange)
        );

        recipe.cooking_time = MAX_COOKING_TIME + 1;

        assert_eq!(
            recipe.validate(),
            Err(RecipeValidationError::CookingTimeOutOfRange)
        );
    }

    #[test]
    fn rejects_blank_names() {
        let mut recipe = update();
        recipe.name = "   ".to_string();

        assert_eq!(recipe.validate(), Err(RecipeValidationError::EmptyName));

        recipe.name = "x".repeat(MAX_RECIPE_NAME_LENGTH + 1);

        assert_eq!(recipe.validate(), Err(RecipeValidationError::NameTooLong));
    }
}
