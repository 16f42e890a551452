//! Recipe Records

use jiff::Timestamp;

use crate::{
    domain::{
        ingredients::records::IngredientUuid, recipes::short_link::ShortLink,
        tags::records::TagRecord, users::records::UserRecord,
    },
    uuids::TypedUuid,
};

/// Recipe UUID
pub type RecipeUuid = TypedUuid<RecipeRecord>;

/// Recipe Record
///
/// `is_favorited`, `is_in_shopping_cart` and `author.is_subscribed` are
/// relative to the viewer the recipe was loaded for.
#[derive(Debug, Clone)]
pub struct RecipeRecord {
    pub uuid: RecipeUuid,
    pub author: UserRecord,
    pub name: String,
    pub text: String,
    pub cooking_time: u16,
    pub short_link: ShortLink,
    pub tags: Vec<TagRecord>,
    pub ingredients: Vec<RecipeIngredientRecord>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An ingredient line of a recipe, in recipe order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeIngredientRecord {
    pub uuid: IngredientUuid,
    pub name: String,
    pub measurement_unit: String,
    pub amount: u16,
}

/// The short form of a recipe used by favorites, the cart and subscriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub uuid: RecipeUuid,
    pub name: String,
    pub cooking_time: u16,
}
