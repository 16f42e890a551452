//! Get User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pantry_app::domain::users::records::UserRecord;

use crate::{extensions::*, state::State, users::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// The unique identifier of the user
    pub uuid: Uuid,

    pub email: String,

    pub username: String,

    pub first_name: String,

    pub last_name: String,

    /// Whether the requesting user is subscribed to this user
    pub is_subscribed: bool,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        UserResponse {
            uuid: user.uuid.into(),
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            is_subscribed: user.is_subscribed,
        }
    }
}

/// Get User Handler
///
/// Returns a user profile.
#[endpoint(
    tags("users"),
    summary = "Get User",
    responses(
        (status_code = StatusCode::OK, description = "User found"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let viewer = depot.user_uuid();

    let user = state
        .app
        .users
        .get_user(viewer, user.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use pantry_app::domain::users::{UsersServiceError, records::UserUuid};

    use crate::test_helpers::{
        TEST_USER_UUID, TestServices, anonymous_service, authenticated_service, make_user,
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("users/{user}").get(handler)
    }

    #[tokio::test]
    async fn test_get_user_as_viewer_returns_subscription_flag() -> TestResult {
        let uuid = UserUuid::new();
        let mut services = TestServices::default();

        services
            .users
            .expect_get_user()
            .once()
            .withf(move |viewer, u| *viewer == Some(TEST_USER_UUID) && *u == uuid)
            .return_once(move |_, _| {
                let mut user = make_user(uuid, "author");
                user.is_subscribed = true;

                Ok(user)
            });

        let mut res = TestClient::get(format!("http://example.com/users/{uuid}"))
            .send(&authenticated_service(services, route()))
            .await;

        let body: UserResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.username, "author");
        assert!(body.is_subscribed);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_user_anonymous_passes_no_viewer() -> TestResult {
        let uuid = UserUuid::new();
        let mut services = TestServices::default();

        services
            .users
            .expect_get_user()
            .once()
            .withf(move |viewer, u| viewer.is_none() && *u == uuid)
            .return_once(move |_, _| Ok(make_user(uuid, "author")));

        let res = TestClient::get(format!("http://example.com/users/{uuid}"))
            .send(&anonymous_service(services, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_user_returns_404() -> TestResult {
        let mut services = TestServices::default();

        services
            .users
            .expect_get_user()
            .once()
            .return_once(|_, _| Err(UsersServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/users/{}", UserUuid::new()))
            .send(&anonymous_service(services, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_user_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/users/123")
            .send(&anonymous_service(TestServices::default(), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
