//! Current User Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, get::UserResponse},
};

/// Current User Handler
///
/// Returns the profile of the authenticated user.
#[endpoint(
    tags("users"),
    summary = "Get Current User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Current user"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Authentication required"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let user = state
        .app
        .users
        .get_user(Some(user), user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{
        TEST_USER_UUID, TestServices, anonymous_service, authenticated_service, make_user,
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("users/me").get(handler)
    }

    #[tokio::test]
    async fn test_me_returns_authenticated_user() -> TestResult {
        let mut services = TestServices::default();

        services
            .users
            .expect_get_user()
            .once()
            .withf(|viewer, u| *viewer == Some(TEST_USER_UUID) && *u == TEST_USER_UUID)
            .return_once(|_, _| Ok(make_user(TEST_USER_UUID, "cook")));

        let body: UserResponse = TestClient::get("http://example.com/users/me")
            .send(&authenticated_service(services, route()))
            .await
            .take_json()
            .await?;

        assert_eq!(body.uuid, TEST_USER_UUID.into_uuid());
        assert_eq!(body.email, "cook@example.com");

        Ok(())
    }

    #[tokio::test]
    async fn test_me_anonymous_returns_401() -> TestResult {
        let mut services = TestServices::default();

        services.users.expect_get_user().never();

        let res = TestClient::get("http://example.com/users/me")
            .send(&anonymous_service(services, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
