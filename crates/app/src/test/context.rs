//! Test context for service-level integration tests.

use crate::{
    auth::PgAuthService,
    database::Db,
    domain::{
        carts::PgCartsService, favorites::PgFavoritesService,
        ingredients::PgIngredientsService, recipes::PgRecipesService,
        subscriptions::PgSubscriptionsService, tags::PgTagsService, users::PgUsersService,
    },
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub db: TestDb,
    pub auth: PgAuthService,
    pub users: PgUsersService,
    pub tags: PgTagsService,
    pub ingredients: PgIngredientsService,
    pub recipes: PgRecipesService,
    pub favorites: PgFavoritesService,
    pub carts: PgCartsService,
    pub subscriptions: PgSubscriptionsService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            auth: PgAuthService::new(test_db.pool().clone()),
            users: PgUsersService::new(db.clone()),
            tags: PgTagsService::new(db.clone()),
            ingredients: PgIngredientsService::new(db.clone()),
            recipes: PgRecipesService::new(db.clone()),
            favorites: PgFavoritesService::new(db.clone()),
            carts: PgCartsService::new(db.clone()),
            subscriptions: PgSubscriptionsService::new(db),
            db: test_db,
        }
    }
}
