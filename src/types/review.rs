use serde::{Deserialize, Serialize};

use crate::types::{id::Id, rating::Rating};

/// A review of a book; the viewer's own review has the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub reviewer: Id,
    pub username: Option<String>,
    pub rating:   Rating,
    #[serde(rename = "user_Review")]
    pub text:     Option<String>,
}

impl Review {
    /// Name to show for the reviewer, falling back to the reviewer id.
    pub fn display_name(&self) -> String {
        match self.username.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.reviewer.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}
