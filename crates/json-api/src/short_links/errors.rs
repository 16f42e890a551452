//! Short Link Errors

use salvo::http::StatusError;
use tracing::error;

use pantry_app::domain::recipes::RecipesServiceError;

/// Errors from following `/s/{token}`.
pub(crate) fn into_resolve_status_error(error: RecipesServiceError) -> StatusError {
    into_lookup_status_error(error, "Short link not found")
}

/// Errors from asking a recipe for its short link.
pub(crate) fn into_get_link_status_error(error: RecipesServiceError) -> StatusError {
    into_lookup_status_error(error, "Recipe not found")
}

fn into_lookup_status_error(error: RecipesServiceError, not_found: &'static str) -> StatusError {
    match error {
        RecipesServiceError::NotFound => StatusError::not_found().brief(not_found),
        RecipesServiceError::Sql(source) => {
            error!("failed to look up short link: {source}");

            StatusError::internal_server_error()
        }
        other => {
            error!("unexpected short link failure: {other}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn unknown_tokens_are_reported_as_missing_short_links() {
        let error = into_resolve_status_error(RecipesServiceError::NotFound);

        assert_eq!(error.code, StatusCode::NOT_FOUND);
        assert_eq!(error.brief, "Short link not found");
    }

    #[test]
    fn unknown_recipes_are_reported_as_missing_recipes() {
        let error = into_get_link_status_error(RecipesServiceError::NotFound);

        assert_eq!(error.code, StatusCode::NOT_FOUND);
        assert_eq!(error.brief, "Recipe not found");
    }
}
