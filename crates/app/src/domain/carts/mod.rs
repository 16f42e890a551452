//! Shopping Carts

pub mod errors;
mod repository;
pub mod service;
pub mod shopping_list;

pub use errors::CartsServiceError;
pub use service::*;
