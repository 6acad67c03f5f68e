//! Recipe book core: the recipe store and the list views derived from it.
//!
//! - [`adapters::outbound::memory::InMemoryRecipeRepository`] owns the collection
//!   and hands out immutable snapshots.
//! - [`domain::projection`] filters by archive status, searches titles and paginates.
//! - [`domain::services::RecipeServiceImpl`] is what a front-end talks to: it
//!   validates new recipes, assigns ids and issues lifecycle commands.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use recipe_core::adapters::outbound::memory::InMemoryRecipeRepository;
//! use recipe_core::domain::models::{NewIngredient, NewRecipe};
//! use recipe_core::domain::ports::inbound::RecipeService;
//! use recipe_core::domain::services::RecipeServiceImpl;
//! use recipe_core::domain::ListQuery;
//!
//! let service = RecipeServiceImpl::new(Arc::new(InMemoryRecipeRepository::new()));
//! let tea = service
//!     .create_recipe(
//!         NewRecipe::new("Tea", "Hot tea").with_ingredient(NewIngredient::new("Water", 200.0, "ml")),
//!     )
//!     .unwrap();
//!
//! let page = service.list_recipes(&ListQuery::default());
//! assert_eq!(page.items, vec![tea]);
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod seed;
