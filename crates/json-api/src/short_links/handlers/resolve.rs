//! Resolve Short Link Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};

use pantry_app::domain::recipes::RecipesServiceError;

use crate::{
    extensions::*,
    observability::{ShortLinkOutcome, record_short_link_resolution},
    short_links::errors::into_resolve_status_error,
    state::State,
};

/// Resolve Short Link Handler
///
/// Redirects to the recipe the token was issued for. Tokens match exactly,
/// so `AB12CD` does not resolve to the recipe behind `ab12cd`.
#[endpoint(
    tags("short links"),
    summary = "Resolve Short Link",
    responses(
        (status_code = StatusCode::FOUND, description = "Redirect to the recipe"),
        (status_code = StatusCode::NOT_FOUND, description = "Short link not found"),
    ),
)]
pub(crate) async fn handler(
    short_link: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let recipe = match state.app.recipes.resolve_short_link(&short_link).await {
        Ok(recipe) => recipe,
        Err(error) => {
            if matches!(error, RecipesServiceError::NotFound) {
                record_short_link_resolution(ShortLinkOutcome::Miss);
            }

            return Err(into_resolve_status_error(error));
        }
    };

    record_short_link_resolution(ShortLinkOutcome::Hit);

    res.add_header(LOCATION, state.recipe_url(&recipe.to_string()), true)
        .or_500("failed to set redirect location")?;

    Ok(StatusCode::FOUND)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use pantry_app::domain::recipes::records::RecipeUuid;

    use crate::test_helpers::{TEST_PUBLIC_URL, TestServices, anonymous_service};

    use super::*;

    fn route() -> Router {
        Router::with_path("s/{short_link}").get(handler)
    }

    #[tokio::test]
    async fn test_known_short_link_redirects_to_recipe() -> TestResult {
        let uuid = RecipeUuid::new();
        let mut services = TestServices::default();

        services
            .recipes
            .expect_resolve_short_link()
            .once()
            .withf(|token| token == "ab12cd")
            .return_once(move |_| Ok(uuid));

        let res = TestClient::get("http://example.com/s/ab12cd")
            .send(&anonymous_service(services, route()))
            .await;

        let location = res
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
        assert_eq!(location, Some(format!("{TEST_PUBLIC_URL}/recipes/{uuid}")));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_short_link_returns_404() -> TestResult {
        let mut services = TestServices::default();

        services
            .recipes
            .expect_resolve_short_link()
            .once()
            .withf(|token| token == "AB12CD")
            .return_once(|_| Err(RecipesServiceError::NotFound));

        let res = TestClient::get("http://example.com/s/AB12CD")
            .send(&anonymous_service(services, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(res.headers().get(LOCATION).is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_error_returns_500() -> TestResult {
        let mut services = TestServices::default();

        services
            .recipes
            .expect_resolve_short_link()
            .once()
            .return_once(|_| Err(RecipesServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/s/ab12cd")
            .send(&anonymous_service(services, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
