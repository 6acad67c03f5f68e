use std::ops::Deref;
use std::sync::Arc;

use super::{Recipe, RecipeId};

/// An immutable view of the whole recipe collection at one point in time.
///
/// Cloning is cheap; every mutation of the repository installs a new snapshot
/// instead of touching one that readers may still hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeSnapshot(Arc<Vec<Recipe>>);

impl RecipeSnapshot {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self(Arc::new(recipes))
    }

    pub fn find(&self, id: &RecipeId) -> Option<&Recipe> {
        self.0.iter().find(|recipe| &recipe.id == id)
    }

    pub fn contains_id(&self, id: &RecipeId) -> bool {
        self.find(id).is_some()
    }

    /// True when both snapshots share the same underlying collection.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for RecipeSnapshot {
    type Target = [Recipe];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Recipe>> for RecipeSnapshot {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self::new(recipes)
    }
}
