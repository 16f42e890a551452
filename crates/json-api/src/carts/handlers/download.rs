//! Download Shopping List Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::errors::into_status_error, extensions::*, observability::record_shopping_list_download,
    state::State,
};

/// Download Shopping List Handler
///
/// Renders the merged ingredients of every recipe in the caller's cart as
/// plain text, one `name - amount (unit)` line per ingredient.
#[endpoint(
    tags("shopping cart"),
    summary = "Download Shopping List",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Shopping list as plain text"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Authentication required"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<String, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let list = state
        .app
        .carts
        .shopping_list(user)
        .await
        .map_err(into_status_error)?;

    record_shopping_list_download();

    Ok(list.render())
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::CONTENT_TYPE,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use pantry_app::domain::carts::{
        CartsServiceError,
        shopping_list::{IngredientQuantity, ShoppingList},
    };

    use crate::test_helpers::{
        TEST_USER_UUID, TestServices, anonymous_service, authenticated_service,
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("recipes/download_shopping_cart").get(handler)
    }

    fn quantity(name: &str, unit: &str, amount: u16) -> IngredientQuantity {
        IngredientQuantity {
            name: name.to_string(),
            measurement_unit: unit.to_string(),
            amount,
        }
    }

    #[tokio::test]
    async fn test_download_renders_merged_lines_as_text() -> TestResult {
        let mut services = TestServices::default();

        services
            .carts
            .expect_shopping_list()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(|_| {
                Ok(ShoppingList::aggregate([
                    quantity("flour", "g", 200),
                    quantity("milk", "ml", 300),
                    quantity("flour", "g", 50),
                ]))
            });

        let mut res = TestClient::get("http://example.com/recipes/download_shopping_cart")
            .send(&authenticated_service(services, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        assert!(content_type.starts_with("text/plain"), "got {content_type}");
        assert_eq!(res.take_string().await?, "flour - 250 (g)\nmilk - 300 (ml)");

        Ok(())
    }

    #[tokio::test]
    async fn test_download_empty_cart_returns_empty_body() -> TestResult {
        let mut services = TestServices::default();

        services
            .carts
            .expect_shopping_list()
            .once()
            .return_once(|_| Ok(ShoppingList::default()));

        let mut res = TestClient::get("http://example.com/recipes/download_shopping_cart")
            .send(&authenticated_service(services, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "");

        Ok(())
    }

    #[tokio::test]
    async fn test_download_anonymous_returns_401() -> TestResult {
        let mut services = TestServices::default();

        services.carts.expect_shopping_list().never();

        let res = TestClient::get("http://example.com/recipes/download_shopping_cart")
            .send(&anonymous_service(services, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_download_storage_error_returns_500() -> TestResult {
        let mut services = TestServices::default();

        services
            .carts
            .expect_shopping_list()
            .once()
            .return_once(|_| Err(CartsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/recipes/download_shopping_cart")
            .send(&authenticated_service(services, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
