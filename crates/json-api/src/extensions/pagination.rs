//! Page and limit query parsing helpers.

use pantry_app::pagination::Pagination;
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

/// Combine the `page` query parameter with `limit` into a page request.
pub(crate) trait PaginationExt {
    fn into_pagination(self, limit: QueryParam<u32, false>) -> Result<Pagination, StatusError>;
}

impl PaginationExt for QueryParam<u32, false> {
    fn into_pagination(self, limit: QueryParam<u32, false>) -> Result<Pagination, StatusError> {
        Pagination::new(self.into_inner(), limit.into_inner()).or_400("invalid pagination")
    }
}
