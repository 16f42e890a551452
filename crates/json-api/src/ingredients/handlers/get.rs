//! Get Ingredient Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pantry_app::domain::ingredients::records::IngredientRecord;

use crate::{extensions::*, ingredients::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IngredientResponse {
    /// The unique identifier of the ingredient
    pub uuid: Uuid,

    pub name: String,

    pub measurement_unit: String,
}

impl From<IngredientRecord> for IngredientResponse {
    fn from(ingredient: IngredientRecord) -> Self {
        IngredientResponse {
            uuid: ingredient.uuid.into(),
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
        }
    }
}

/// Get Ingredient Handler
#[endpoint(
    tags("ingredients"),
    summary = "Get Ingredient",
    responses(
        (status_code = StatusCode::OK, description = "Ingredient found"),
        (status_code = StatusCode::NOT_FOUND, description = "Ingredient not found"),
    ),
)]
pub(crate) async fn handler(
    ingredient: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<IngredientResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let ingredient = state
        .app
        .ingredients
        .get_ingredient(ingredient.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ingredient.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use pantry_app::domain::ingredients::{IngredientsServiceError, records::IngredientUuid};

    use crate::test_helpers::{TestServices, anonymous_service};

    use super::*;

    fn route() -> Router {
        Router::with_path("ingredients/{ingredient}").get(handler)
    }

    #[tokio::test]
    async fn test_get_ingredient_returns_200() -> TestResult {
        let uuid = IngredientUuid::new();
        let mut services = TestServices::default();

        services
            .ingredients
            .expect_get_ingredient()
            .once()
            .withf(move |i| *i == uuid)
            .return_once(move |_| {
                Ok(IngredientRecord {
                    uuid,
                    name: "milk".to_string(),
                    measurement_unit: "ml".to_string(),
                })
            });

        let body: IngredientResponse =
            TestClient::get(format!("http://example.com/ingredients/{uuid}"))
                .send(&anonymous_service(services, route()))
                .await
                .take_json()
                .await?;

        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.measurement_unit, "ml");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_ingredient_returns_404() -> TestResult {
        let mut services = TestServices::default();

        services
            .ingredients
            .expect_get_ingredient()
            .once()
            .return_once(|_| Err(IngredientsServiceError::NotFound));

        let res = TestClient::get(format!(
            "http://example.com/ingredients/{}",
            IngredientUuid::new()
        ))
        .send(&anonymous_service(services, route()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
