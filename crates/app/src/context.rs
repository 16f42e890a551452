//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        favorites::{FavoritesService, PgFavoritesService},
        ingredients::{IngredientsService, PgIngredientsService},
        recipes::{PgRecipesService, RecipesService},
        subscriptions::{PgSubscriptionsService, SubscriptionsService},
        tags::{PgTagsService, TagsService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Every service the HTTP layer talks to.
#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UsersService>,
    pub tags: Arc<dyn TagsService>,
    pub ingredients: Arc<dyn IngredientsService>,
    pub recipes: Arc<dyn RecipesService>,
    pub favorites: Arc<dyn FavoritesService>,
    pub carts: Arc<dyn CartsService>,
    pub subscriptions: Arc<dyn SubscriptionsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            auth: Arc::new(PgAuthService::new(pool)),
            users: Arc::new(PgUsersService::new(db.clone())),
            tags: Arc::new(PgTagsService::new(db.clone())),
            ingredients: Arc::new(PgIngredientsService::new(db.clone())),
            recipes: Arc::new(PgRecipesService::new(db.clone())),
            favorites: Arc::new(PgFavoritesService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            subscriptions: Arc::new(PgSubscriptionsService::new(db)),
        })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
