mod recipes;

pub use recipes::RecipeServiceImpl;
