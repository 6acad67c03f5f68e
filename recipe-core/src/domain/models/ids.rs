use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque recipe identifier.
///
/// Assigned once when a recipe is created and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
