//! Tag Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    state::State,
    tags::{errors::into_status_error, get::TagResponse},
};

/// Tag Index Handler
///
/// Returns every tag ordered by name. Tags are not paginated.
#[endpoint(tags("tags"), summary = "List Tags")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<TagResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let tags = state
        .app
        .tags
        .list_tags()
        .await
        .map_err(into_status_error)?;

    Ok(Json(tags.into_iter().map(Into::into).collect()))
}
