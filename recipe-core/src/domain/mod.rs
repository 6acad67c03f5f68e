mod browse;
mod error;
mod id_generator;
pub mod models;
pub mod ports;
pub mod projection;
pub mod services;

pub use browse::*;
pub use error::*;
pub use id_generator::*;
pub use projection::{ListQuery, RecipePage, RecipeView, DEFAULT_PAGE_SIZE};
