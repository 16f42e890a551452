//! Short Links
//!
//! Every recipe is issued one 6 character token from `[a-z0-9]` when it is
//! first stored. Tokens never change, are never handed out again once their
//! recipe is deleted, and are resolved by exact match.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rand::{CryptoRng, Rng};
use thiserror::Error;

/// Characters a short link may contain.
pub const SHORT_LINK_ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Number of characters in every short link.
pub const SHORT_LINK_LENGTH: usize = 6;

/// Number of distinct short links, 36^6.
pub const SHORT_LINK_SPACE: u64 = 2_176_782_336;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShortLinkError {
    #[error("short link must be {SHORT_LINK_LENGTH} characters from [a-z0-9]")]
    Malformed,

    #[error("all {SHORT_LINK_SPACE} short links have been issued")]
    SpaceExhausted,
}

/// A validated short link token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortLink(String);

impl ShortLink {
    /// Draw a uniformly random token.
    pub fn generate<R>(rng: &mut R) -> Self
    where
        R: Rng + CryptoRng + ?Sized,
    {
        let token = (0..SHORT_LINK_LENGTH)
            .map(|_| char::from(SHORT_LINK_ALPHABET[rng.gen_range(0..SHORT_LINK_ALPHABET.len())]))
            .collect();

        Self(token)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ShortLink {
    type Err = ShortLinkError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let well_formed = token.len() == SHORT_LINK_LENGTH
            && token
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());

        if !well_formed {
            return Err(ShortLinkError::Malformed);
        }

        Ok(Self(token.to_string()))
    }
}

impl Display for ShortLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Fail once every token in the space has been handed out.
///
/// Drawing against a full space would never find a free token.
///
/// # Errors
///
/// Returns [`ShortLinkError::SpaceExhausted`] when `issued >= SHORT_LINK_SPACE`.
pub fn ensure_capacity(issued: u64) -> Result<(), ShortLinkError> {
    if issued >= SHORT_LINK_SPACE {
        return Err(ShortLinkError::SpaceExhausted);
    }

    Ok(())
}
