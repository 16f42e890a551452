//! Subscribe Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::State,
    subscriptions::{errors::into_status_error, index::SubscribedAuthorResponse},
};

/// Subscribe Handler
#[endpoint(
    tags("subscriptions"),
    summary = "Subscribe to Author",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Subscribed to the author"),
        (status_code = StatusCode::BAD_REQUEST, description = "Already subscribed, or subscribing to yourself"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Authentication required"),
        (status_code = StatusCode::NOT_FOUND, description = "Author not found"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    recipes_limit: QueryParam<u32, false>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SubscribedAuthorResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let subscriber = depot.user_uuid_or_401()?;

    let author = state
        .app
        .subscriptions
        .subscribe(
            subscriber,
            user.into_inner().into(),
            recipes_limit.into_inner(),
        )
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(author.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use pantry_app::domain::{
        subscriptions::{SubscriptionsServiceError, records::SubscribedAuthor},
        users::records::UserUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, TestServices, authenticated_service, make_user};

    use super::*;

    fn route() -> Router {
        Router::with_path("users/{user}/subscribe").post(handler)
    }

    #[tokio::test]
    async fn test_subscribe_returns_201_with_author() -> TestResult {
        let author = UserUuid::new();
        let mut services = TestServices::default();

        services
            .subscriptions
            .expect_subscribe()
            .once()
            .withf(move |subscriber, a, recipes_limit| {
                *subscriber == TEST_USER_UUID && *a == author && recipes_limit.is_none()
            })
            .return_once(move |_, _, _| {
                Ok(SubscribedAuthor {
                    author: make_user(author, "chef"),
                    recipes_count: 0,
                    recipes: Vec::new(),
                })
            });

        let mut res = TestClient::post(format!("http://example.com/users/{author}/subscribe"))
            .send(&authenticated_service(services, route()))
            .await;

        let body: SubscribedAuthorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.author.uuid, author.into_uuid());
        assert!(body.recipes.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_subscribe_to_self_returns_400() -> TestResult {
        let mut services = TestServices::default();

        services
            .subscriptions
            .expect_subscribe()
            .once()
            .return_once(|_, _, _| Err(SubscriptionsServiceError::SelfSubscription));

        let res = TestClient::post(format!(
            "http://example.com/users/{TEST_USER_UUID}/subscribe"
        ))
        .send(&authenticated_service(services, route()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_subscribe_to_unknown_author_returns_404() -> TestResult {
        let mut services = TestServices::default();

        services
            .subscriptions
            .expect_subscribe()
            .once()
            .return_once(|_, _, _| Err(SubscriptionsServiceError::AuthorNotFound));

        let res = TestClient::post(format!(
            "http://example.com/users/{}/subscribe",
            UserUuid::new()
        ))
        .send(&authenticated_service(services, route()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
