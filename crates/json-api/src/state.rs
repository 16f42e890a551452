//! State

use std::sync::Arc;

use pantry_app::context::AppContext;

#[derive(Debug, Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Base URL that short links and redirects are built on.
    pub(crate) public_url: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, public_url: String) -> Self {
        Self { app, public_url }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, public_url: String) -> Arc<Self> {
        Arc::new(Self::new(app, public_url))
    }

    #[must_use]
    pub(crate) fn short_link_url(&self, short_link: &str) -> String {
        format!("{}/s/{short_link}", self.public_url)
    }

    #[must_use]
    pub(crate) fn recipe_url(&self, recipe: &str) -> String {
        format!("{}/recipes/{recipe}", self.public_url)
    }
}
