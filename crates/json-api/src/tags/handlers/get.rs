//! Get Tag Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pantry_app::domain::tags::records::TagRecord;

use crate::{extensions::*, state::State, tags::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TagResponse {
    /// The unique identifier of the tag
    pub uuid: Uuid,

    pub name: String,

    /// URL-safe identifier used to filter recipes
    pub slug: String,
}

impl From<TagRecord> for TagResponse {
    fn from(tag: TagRecord) -> Self {
        TagResponse {
            uuid: tag.uuid.into(),
            name: tag.name,
            slug: tag.slug,
        }
    }
}

/// Get Tag Handler
#[endpoint(
    tags("tags"),
    summary = "Get Tag",
    responses(
        (status_code = StatusCode::OK, description = "Tag found"),
        (status_code = StatusCode::NOT_FOUND, description = "Tag not found"),
    ),
)]
pub(crate) async fn handler(
    tag: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<TagResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let tag = state
        .app
        .tags
        .get_tag(tag.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(tag.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use pantry_app::domain::tags::{TagsServiceError, records::TagUuid};

    use crate::test_helpers::{TestServices, anonymous_service, make_tag};

    use super::*;

    fn route() -> Router {
        Router::with_path("tags/{tag}").get(handler)
    }

    #[tokio::test]
    async fn test_get_tag_returns_200() -> TestResult {
        let uuid = TagUuid::new();
        let mut services = TestServices::default();

        services
            .tags
            .expect_get_tag()
            .once()
            .withf(move |t| *t == uuid)
            .return_once(move |_| Ok(make_tag(uuid, "lunch")));

        let body: TagResponse = TestClient::get(format!("http://example.com/tags/{uuid}"))
            .send(&anonymous_service(services, route()))
            .await
            .take_json()
            .await?;

        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.slug, "lunch");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_tag_returns_404() -> TestResult {
        let mut services = TestServices::default();

        services
            .tags
            .expect_get_tag()
            .once()
            .return_once(|_| Err(TagsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/tags/{}", TagUuid::new()))
            .send(&anonymous_service(services, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
