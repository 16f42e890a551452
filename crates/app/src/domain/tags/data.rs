//! Tag Data

use crate::domain::tags::records::TagUuid;

/// Longest permitted tag name or slug, in characters.
pub const MAX_TAG_LENGTH: usize = 32;

/// New Tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub uuid: TagUuid,
    pub name: String,
    pub slug: String,
}

impl NewTag {
    /// Whether the name and slug fit the stored constraints.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let name_len = self.name.chars().count();

        (1..=MAX_TAG_LENGTH).contains(&name_len) && is_valid_slug(&self.slug)
    }
}

/// Slugs are 1 to 32 characters of `[-a-zA-Z0-9_]`.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    (1..=MAX_TAG_LENGTH).contains(&slug.len())
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
