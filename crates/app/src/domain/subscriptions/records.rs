//! Subscription Records

use crate::domain::{recipes::records::RecipeSummary, users::records::UserRecord};

/// An author as shown to one of their subscribers.
#[derive(Debug, Clone)]
pub struct SubscribedAuthor {
    pub author: UserRecord,

    /// Total number of recipes the author has published.
    pub recipes_count: u64,

    /// The author's newest recipes, truncated to the requested limit.
    pub recipes: Vec<RecipeSummary>,
}
