use tokio::sync::watch;

use crate::domain::{
    models::{NewRecipe, Recipe, RecipeId, RecipeSnapshot},
    ListQuery, RecipeError, RecipePage,
};

/// A delete that has been requested but not yet confirmed.
///
/// Dropping it cancels the delete.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending delete does nothing until it is confirmed"]
pub struct PendingDelete {
    id: RecipeId,
    title: String,
}

impl PendingDelete {
    pub(crate) fn new(id: RecipeId, title: String) -> Self {
        Self { id, title }
    }

    pub fn id(&self) -> &RecipeId {
        &self.id
    }

    /// Title of the recipe at the time the delete was requested, for the prompt.
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Inbound port for recipe use cases.
///
/// This is what the creation form, the list views and the detail view call.
pub trait RecipeService: Send + Sync + 'static {
    /// Validate the payload, assign an id and store the new recipe.
    ///
    /// Nothing is stored when validation fails.
    fn create_recipe(&self, recipe: NewRecipe) -> Result<Recipe, RecipeError>;

    fn get_recipe(&self, id: &RecipeId) -> Option<Recipe>;

    fn archive_recipe(&self, id: &RecipeId) -> RecipeSnapshot;

    fn unarchive_recipe(&self, id: &RecipeId) -> RecipeSnapshot;

    /// Start a delete. Returns `None` when there is nothing to delete.
    fn request_delete(&self, id: &RecipeId) -> Option<PendingDelete>;

    /// Carry out a previously requested delete.
    fn confirm_delete(&self, pending: PendingDelete) -> RecipeSnapshot;

    /// Project the current collection into one list page.
    fn list_recipes(&self, query: &ListQuery) -> RecipePage;

    fn subscribe(&self) -> watch::Receiver<RecipeSnapshot>;
}
