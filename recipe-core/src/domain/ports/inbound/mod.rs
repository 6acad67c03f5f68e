mod recipes;

pub use recipes::*;
