//! Extension traits

mod depot;
mod pagination;
mod result;
mod user;

pub(crate) use depot::DepotExt as _;
pub(crate) use pagination::PaginationExt as _;
pub(crate) use result::ResultExt as _;
pub(crate) use user::UserDepotExt as _;
