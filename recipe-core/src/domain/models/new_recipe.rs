use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Ingredient, Recipe, RecipeId, Unit};
use crate::domain::ValidationErrors;

pub const TITLE_REQUIRED: &str = "Recipe name is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const INGREDIENT_NAME_REQUIRED: &str = "Ingredient name is required";
pub const QUANTITY_TOO_SMALL: &str = "Quantity must be at least 1";
pub const UNIT_INVALID: &str = "Unit must be one of mg, l, ml, nos";

/// Unvalidated recipe payload as submitted by the creation form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<NewIngredient>,
}

/// Unvalidated ingredient row. `unit` is kept as raw text until validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl Default for NewIngredient {
    /// The blank row added by "Add Ingredient".
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1.0,
            unit: Unit::Nos.to_string(),
        }
    }
}

impl NewIngredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

impl NewRecipe {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ingredients: Vec::new(),
        }
    }

    pub fn with_ingredient(mut self, ingredient: NewIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Check every field, collecting all failures.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.checked_units().map(|_| ())
    }

    /// Validate and build an active recipe with the given id.
    pub fn into_recipe(self, id: RecipeId) -> Result<Recipe, ValidationErrors> {
        let units = self.checked_units()?;

        let ingredients = self
            .ingredients
            .into_iter()
            .zip(units)
            .map(|(ingredient, unit)| Ingredient::new(ingredient.name, ingredient.quantity, unit))
            .collect();

        Ok(Recipe {
            id,
            title: self.title,
            description: self.description,
            ingredients,
            is_archived: false,
        })
    }

    /// Runs every field check; on success yields the parsed unit of each
    /// ingredient row, in order.
    fn checked_units(&self) -> Result<Vec<Unit>, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut units = Vec::with_capacity(self.ingredients.len());

        if self.title.is_empty() {
            errors.push("title", TITLE_REQUIRED);
        }
        if self.description.is_empty() {
            errors.push("description", DESCRIPTION_REQUIRED);
        }

        for (index, ingredient) in self.ingredients.iter().enumerate() {
            if ingredient.name.is_empty() {
                errors.push(format!("ingredients.{index}.name"), INGREDIENT_NAME_REQUIRED);
            }
            // NaN fails the comparison as well.
            if !(ingredient.quantity.is_finite() && ingredient.quantity >= 1.0) {
                errors.push(format!("ingredients.{index}.quantity"), QUANTITY_TOO_SMALL);
            }
            match Unit::from_str(&ingredient.unit) {
                Ok(unit) => units.push(unit),
                Err(_) => errors.push(format!("ingredients.{index}.unit"), UNIT_INVALID),
            }
        }

        errors.into_result().map(|()| units)
    }
}
