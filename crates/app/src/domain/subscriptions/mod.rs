//! Subscriptions

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::SubscriptionsServiceError;
pub use service::*;
