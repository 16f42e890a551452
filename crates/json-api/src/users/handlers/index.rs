//! User Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, get::UserResponse},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UsersResponse {
    /// Total number of users
    pub count: u64,

    /// Number of the next page, if any
    pub next: Option<u32>,

    /// Number of the previous page, if any
    pub previous: Option<u32>,

    pub results: Vec<UserResponse>,
}

/// User Index Handler
///
/// Returns a page of users ordered by username.
#[endpoint(tags("users"), summary = "List Users")]
pub(crate) async fn handler(
    page: QueryParam<u32, false>,
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<UsersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let viewer = depot.user_uuid();
    let pagination = page.into_pagination(limit)?;

    let users = state
        .app
        .users
        .list_users(viewer, pagination)
        .await
        .map_err(into_status_error)?;

    Ok(Json(UsersResponse {
        count: users.count,
        next: users.next_page(pagination),
        previous: users.previous_page(pagination),
        results: users.results.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use pantry_app::{
        domain::users::{UsersServiceError, records::UserUuid},
        pagination::{Page, Pagination},
    };

    use crate::test_helpers::{TestServices, anonymous_service, make_user};

    use super::*;

    fn route() -> Router {
        Router::with_path("users").get(handler)
    }

    #[tokio::test]
    async fn test_index_returns_page_envelope() -> TestResult {
        let uuid = UserUuid::new();
        let mut services = TestServices::default();

        services
            .users
            .expect_list_users()
            .once()
            .withf(|viewer, pagination| {
                viewer.is_none() && pagination.page() == 2 && pagination.limit() == 1
            })
            .return_once(move |_, _| Ok(Page::new(3, vec![make_user(uuid, "bob")])));

        let body: UsersResponse = TestClient::get("http://example.com/users?page=2&limit=1")
            .send(&anonymous_service(services, route()))
            .await
            .take_json()
            .await?;

        assert_eq!(body.count, 3);
        assert_eq!(body.next, Some(3));
        assert_eq!(body.previous, Some(1));
        assert_eq!(body.results.len(), 1);
        assert_eq!(body.results[0].uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_defaults_pagination() -> TestResult {
        let mut services = TestServices::default();

        services
            .users
            .expect_list_users()
            .once()
            .withf(|_, pagination| *pagination == Pagination::default())
            .return_once(|_, _| Ok(Page::empty()));

        let body: UsersResponse = TestClient::get("http://example.com/users")
            .send(&anonymous_service(services, route()))
            .await
            .take_json()
            .await?;

        assert_eq!(body.count, 0);
        assert_eq!(body.next, None);
        assert_eq!(body.previous, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_rejects_zero_page() -> TestResult {
        let mut services = TestServices::default();

        services.users.expect_list_users().never();

        let res = TestClient::get("http://example.com/users?page=0")
            .send(&anonymous_service(services, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut services = TestServices::default();

        services
            .users
            .expect_list_users()
            .once()
            .return_once(|_, _| Err(UsersServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/users")
            .send(&anonymous_service(services, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
