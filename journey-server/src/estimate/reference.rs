//! Submission reference ids.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix on every generated reference id.
const PREFIX: &str = "PMJ-";

/// Number of random characters after the prefix.
const TOKEN_LEN: usize = 9;

/// A loose correlation handle for one submission.
///
/// Random, not guaranteed unique, and not a secret: it only lets a user
/// and an operator talk about the same estimate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceId(String);

impl ReferenceId {
    /// Generate a new id such as `PMJ-3F9A0C21B`.
    pub fn generate() -> Self {
        let token: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(TOKEN_LEN)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Self(format!("{PREFIX}{token}"))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
