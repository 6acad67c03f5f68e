//! In-memory recipe repository.

use tokio::sync::watch;
use tracing::debug;

use crate::domain::{
    models::{Recipe, RecipeId, RecipeSnapshot},
    ports::outbound::RecipeRepository,
    RecipeError,
};
use crate::seed;

/// Recipe repository backed by a watch channel holding the current snapshot.
///
/// The sender owns the collection: reads borrow it, mutations replace it with
/// a fresh snapshot and notify subscribers. No-op commands replace nothing and
/// notify no one.
#[derive(Debug)]
pub struct InMemoryRecipeRepository {
    state: watch::Sender<RecipeSnapshot>,
}

impl Default for InMemoryRecipeRepository {
    fn default() -> Self {
        Self::with_recipes(Vec::new())
    }
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an initial collection.
    ///
    /// The recipes are trusted to be valid and to have unique ids.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let (state, _) = watch::channel(RecipeSnapshot::new(recipes));
        Self { state }
    }

    /// Start from the predefined seed recipes.
    pub fn seeded() -> Self {
        Self::with_recipes(seed::recipes())
    }

    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    /// Replace the collection with `update(current)` when it returns `Some`.
    fn replace_with<F>(&self, update: F) -> RecipeSnapshot
    where
        F: FnOnce(&RecipeSnapshot) -> Option<Vec<Recipe>>,
    {
        self.state.send_if_modified(|current| match update(&*current) {
            Some(recipes) => {
                *current = RecipeSnapshot::new(recipes);
                true
            }
            None => false,
        });
        self.snapshot()
    }

    fn set_archived(&self, id: &RecipeId, is_archived: bool) -> RecipeSnapshot {
        self.replace_with(|current| {
            let target = current.find(id)?;
            if target.is_archived == is_archived {
                debug!(%id, is_archived, "recipe already in requested state");
                return None;
            }
            Some(
                current
                    .iter()
                    .map(|recipe| {
                        if &recipe.id == id {
                            Recipe {
                                is_archived,
                                ..recipe.clone()
                            }
                        } else {
                            recipe.clone()
                        }
                    })
                    .collect(),
            )
        })
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    fn snapshot(&self) -> RecipeSnapshot {
        self.state.borrow().clone()
    }

    fn add(&self, recipe: Recipe) -> Result<RecipeSnapshot, RecipeError> {
        let mut duplicate = None;
        let snapshot = self.replace_with(|current| {
            if current.contains_id(&recipe.id) {
                duplicate = Some(recipe.id.clone());
                return None;
            }
            let mut recipes = current.to_vec();
            recipes.push(recipe);
            Some(recipes)
        });

        match duplicate {
            Some(id) => Err(RecipeError::DuplicateId(id)),
            None => Ok(snapshot),
        }
    }

    fn find(&self, id: &RecipeId) -> Option<Recipe> {
        self.state.borrow().find(id).cloned()
    }

    fn delete(&self, id: &RecipeId) -> RecipeSnapshot {
        self.replace_with(|current| {
            if !current.contains_id(id) {
                debug!(%id, "delete of unknown recipe ignored");
                return None;
            }
            Some(
                current
                    .iter()
                    .filter(|recipe| &recipe.id != id)
                    .cloned()
                    .collect(),
            )
        })
    }

    fn archive(&self, id: &RecipeId) -> RecipeSnapshot {
        self.set_archived(id, true)
    }

    fn unarchive(&self, id: &RecipeId) -> RecipeSnapshot {
        self.set_archived(id, false)
    }

    fn subscribe(&self) -> watch::Receiver<RecipeSnapshot> {
        self.state.subscribe()
    }
}
