//! Recipe repository port (outbound).
//!
//! The single owner of the recipe collection. Every mutation installs a new
//! [`RecipeSnapshot`] and returns it; readers holding an older snapshot keep
//! seeing the collection exactly as it was.

use tokio::sync::watch;

use crate::domain::{
    models::{Recipe, RecipeId, RecipeSnapshot},
    RecipeError,
};

/// Outbound port for recipe storage.
///
/// Lifecycle commands (`delete`, `archive`, `unarchive`) are idempotent:
/// unknown ids and repeated commands leave the collection unchanged and are
/// never errors.
pub trait RecipeRepository: Send + Sync + 'static {
    /// The current collection.
    fn snapshot(&self) -> RecipeSnapshot;

    /// Append a recipe to the end of the collection.
    ///
    /// The recipe is trusted to be valid; only id uniqueness is checked.
    fn add(&self, recipe: Recipe) -> Result<RecipeSnapshot, RecipeError>;

    /// Look up a recipe by id.
    fn find(&self, id: &RecipeId) -> Option<Recipe>;

    /// Remove the recipe with this id, if present.
    fn delete(&self, id: &RecipeId) -> RecipeSnapshot;

    /// Mark the recipe with this id as archived, if present.
    fn archive(&self, id: &RecipeId) -> RecipeSnapshot;

    /// Mark the recipe with this id as active, if present.
    fn unarchive(&self, id: &RecipeId) -> RecipeSnapshot;

    /// Receive the latest snapshot whenever the collection actually changes.
    fn subscribe(&self) -> watch::Receiver<RecipeSnapshot>;
}
