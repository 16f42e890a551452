//! Recipe Errors

use salvo::http::StatusError;
use tracing::error;

use pantry_app::domain::recipes::RecipesServiceError;

pub(crate) fn into_status_error(error: RecipesServiceError) -> StatusError {
    match error {
        RecipesServiceError::NotFound => StatusError::not_found().brief("Recipe not found"),
        RecipesServiceError::Forbidden => {
            StatusError::forbidden().brief("Only the author may change this recipe")
        }
        RecipesServiceError::AlreadyExists => StatusError::conflict().brief("Recipe already exists"),
        RecipesServiceError::Invalid(reason) => {
            StatusError::bad_request().brief(format!("Invalid recipe payload: {reason}"))
        }
        RecipesServiceError::InvalidReference => {
            StatusError::bad_request().brief("Recipe references an unknown ingredient or tag")
        }
        RecipesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid recipe payload")
        }
        RecipesServiceError::ShortLinkSpaceExhausted => {
            error!("no short links left to issue");

            StatusError::internal_server_error()
        }
        RecipesServiceError::Sql(source) => {
            error!("failed to process recipe: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use pantry_app::domain::recipes::RecipeValidationError;
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        let error = into_status_error(RecipesServiceError::Invalid(
            RecipeValidationError::DuplicateIngredient,
        ));

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert!(
            error.brief.contains("ingredients must not repeat"),
            "unexpected brief {}",
            error.brief
        );
    }

    #[test]
    fn non_authors_are_forbidden() {
        let error = into_status_error(RecipesServiceError::Forbidden);

        assert_eq!(error.code, StatusCode::FORBIDDEN);
    }

    #[test]
    fn exhausted_short_links_are_server_errors() {
        let error = into_status_error(RecipesServiceError::ShortLinkSpaceExhausted);

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
