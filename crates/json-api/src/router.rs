//! App Router

use salvo::Router;

use crate::{
    auth, carts, favorites, ingredients, recipes, short_links, subscriptions, tags, users,
};

/// Short link redirects, served without looking at credentials.
pub(crate) fn short_link_router() -> Router {
    Router::with_path("s/{short_link}").get(short_links::resolve::handler)
}

/// JSON resources. Literal segments are pushed before their `{param}` siblings.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("recipes")
                .get(recipes::index::handler)
                .post(recipes::create::handler)
                .push(Router::with_path("download_shopping_cart").get(carts::download::handler))
                .push(
                    Router::with_path("{recipe}")
                        .get(recipes::get::handler)
                        .patch(recipes::update::handler)
                        .delete(recipes::delete::handler)
                        .push(Router::with_path("get-link").get(short_links::get::handler))
                        .push(
                            Router::with_path("favorite")
                                .post(favorites::create::handler)
                                .delete(favorites::delete::handler),
                        )
                        .push(
                            Router::with_path("shopping_cart")
                                .post(carts::create::handler)
                                .delete(carts::delete::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("tags")
                .get(tags::index::handler)
                .push(Router::with_path("{tag}").get(tags::get::handler)),
        )
        .push(
            Router::with_path("ingredients")
                .get(ingredients::index::handler)
                .push(Router::with_path("{ingredient}").get(ingredients::get::handler)),
        )
        .push(
            Router::with_path("users")
                .get(users::index::handler)
                .push(Router::with_path("me").get(users::me::handler))
                .push(Router::with_path("subscriptions").get(subscriptions::index::handler))
                .push(
                    Router::with_path("{user}").get(users::get::handler).push(
                        Router::with_path("subscribe")
                            .post(subscriptions::create::handler)
                            .delete(subscriptions::delete::handler),
                    ),
                ),
        )
}
