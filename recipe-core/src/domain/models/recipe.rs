use serde::{Deserialize, Serialize};

use super::{Ingredient, RecipeId};

/// A recipe as held by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub is_archived: bool,
}

impl Recipe {
    /// Create an active recipe with no ingredients.
    pub fn new(
        id: impl Into<RecipeId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            ingredients: Vec::new(),
            is_archived: false,
        }
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn with_ingredients(mut self, ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        self.ingredients.extend(ingredients);
        self
    }

    pub fn archived(mut self) -> Self {
        self.is_archived = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Unit;

    #[test]
    fn new_recipe_is_active() {
        let recipe = Recipe::new("1", "Tea", "Hot tea");
        assert!(!recipe.is_archived);
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let recipe = Recipe::new("42", "Tea", "Hot tea")
            .with_ingredient(Ingredient::new("Water", 200.0, Unit::Ml));

        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["id"], "42");
        assert_eq!(value["isArchived"], false);
        assert_eq!(value["ingredients"][0]["unit"], "ml");
        assert_eq!(value["ingredients"][0]["quantity"], 200.0);
    }

    #[test]
    fn deserializes_camel_case_record() {
        let raw = r#"{
            "id": "1700000000000",
            "title": "Pancakes",
            "description": "Fluffy",
            "ingredients": [{ "name": "Eggs", "unit": "nos", "quantity": 2 }],
            "isArchived": true
        }"#;

        let recipe: Recipe = serde_json::from_str(raw).unwrap();
        assert_eq!(recipe.id.as_str(), "1700000000000");
        assert!(recipe.is_archived);
        assert_eq!(recipe.ingredients[0].unit, Unit::Nos);
        assert_eq!(recipe.ingredients[0].quantity, 2.0);
    }
}
