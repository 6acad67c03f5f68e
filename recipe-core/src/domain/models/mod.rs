mod ids;
mod ingredient;
mod new_recipe;
mod recipe;
mod snapshot;

pub use ids::*;
pub use ingredient::*;
pub use new_recipe::*;
pub use recipe::*;
pub use snapshot::*;
