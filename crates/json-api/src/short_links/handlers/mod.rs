//! Short Link Handlers

pub(crate) mod get;
pub(crate) mod resolve;
