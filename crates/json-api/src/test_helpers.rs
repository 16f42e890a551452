//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use pantry_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        carts::MockCartsService,
        favorites::MockFavoritesService,
        ingredients::{MockIngredientsService, records::IngredientUuid},
        recipes::{
            MockRecipesService,
            records::{RecipeIngredientRecord, RecipeRecord, RecipeSummary, RecipeUuid},
            short_link::ShortLinkError,
        },
        subscriptions::MockSubscriptionsService,
        tags::{
            MockTagsService,
            records::{TagRecord, TagUuid},
        },
        users::{
            MockUsersService,
            records::{UserRecord, UserUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

pub(crate) const TEST_PUBLIC_URL: &str = "https://pantry.example.com";

/// One strict mock per service. Unconfigured mocks panic when called.
#[derive(Default)]
pub(crate) struct TestServices {
    pub(crate) auth: MockAuthService,
    pub(crate) users: MockUsersService,
    pub(crate) tags: MockTagsService,
    pub(crate) ingredients: MockIngredientsService,
    pub(crate) recipes: MockRecipesService,
    pub(crate) favorites: MockFavoritesService,
    pub(crate) carts: MockCartsService,
    pub(crate) subscriptions: MockSubscriptionsService,
}

impl TestServices {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(
            AppContext {
                auth: Arc::new(self.auth),
                users: Arc::new(self.users),
                tags: Arc::new(self.tags),
                ingredients: Arc::new(self.ingredients),
                recipes: Arc::new(self.recipes),
                favorites: Arc::new(self.favorites),
                carts: Arc::new(self.carts),
                subscriptions: Arc::new(self.subscriptions),
            },
            TEST_PUBLIC_URL.to_string(),
        )
    }
}

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    TestServices {
        auth,
        ..TestServices::default()
    }
    .into_state()
}

/// Serve `route` as [`TEST_USER_UUID`].
pub(crate) fn authenticated_service(services: TestServices, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(services.into_state()))
            .hoop(inject_user)
            .push(route),
    )
}

/// Serve `route` without an authenticated user.
pub(crate) fn anonymous_service(services: TestServices, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(services.into_state()))
            .push(route),
    )
}

pub(crate) fn make_user(uuid: UserUuid, username: &str) -> UserRecord {
    UserRecord {
        uuid,
        email: format!("{username}@example.com"),
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "Cook".to_string(),
        is_subscribed: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_tag(uuid: TagUuid, slug: &str) -> TagRecord {
    TagRecord {
        uuid,
        name: slug.to_uppercase(),
        slug: slug.to_string(),
    }
}

pub(crate) fn make_recipe(uuid: RecipeUuid) -> Result<RecipeRecord, ShortLinkError> {
    Ok(RecipeRecord {
        uuid,
        author: make_user(TEST_USER_UUID, "cook"),
        name: "Pancakes".to_string(),
        text: "Mix and fry.".to_string(),
        cooking_time: 20,
        short_link: "ab12cd".parse()?,
        tags: vec![make_tag(TagUuid::from_uuid(Uuid::from_u128(2)), "breakfast")],
        ingredients: vec![RecipeIngredientRecord {
            uuid: IngredientUuid::from_uuid(Uuid::from_u128(3)),
            name: "flour".to_string(),
            measurement_unit: "g".to_string(),
            amount: 200,
        }],
        is_favorited: false,
        is_in_shopping_cart: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    })
}

pub(crate) fn make_summary(uuid: RecipeUuid) -> RecipeSummary {
    RecipeSummary {
        uuid,
        name: "Pancakes".to_string(),
        cooking_time: 20,
    }
}
