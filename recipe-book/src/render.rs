use std::fmt;

use recipe_core::domain::{models::Recipe, RecipePage, RecipeView};

pub const EMPTY_STATE: &str = "No recipes found.";

pub fn view_heading(view: RecipeView) -> &'static str {
    match view {
        RecipeView::Active => "Recipes",
        RecipeView::Archived => "Archived Recipes",
    }
}

/// One list page: recipe cards, then pagination controls when there is more
/// than one page.
pub struct PageView<'a>(pub &'a RecipePage);

impl fmt::Display for PageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;
        if page.is_empty() {
            return writeln!(f, "{EMPTY_STATE}");
        }

        for recipe in &page.items {
            writeln!(f, "  [{}] {}", recipe.id, recipe.title)?;
            writeln!(f, "      {}", recipe.description)?;
        }

        if page.shows_pagination() {
            // Disabled controls lose their arrow.
            let previous = if page.has_previous() { "< Previous" } else { "  Previous" };
            let next = if page.has_next() { "Next >" } else { "Next  " };
            writeln!(
                f,
                "{}   Page {} of {}   {}",
                previous, page.page, page.total_pages, next
            )?;
        }

        Ok(())
    }
}

/// Detail view of one recipe with its ingredient table.
pub struct RecipeDetail<'a>(pub &'a Recipe);

impl fmt::Display for RecipeDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.0;
        writeln!(f, "{}", recipe.title)?;
        writeln!(f, "{}", recipe.description)?;
        if recipe.is_archived {
            writeln!(f, "(archived)")?;
        }

        let name_width = recipe
            .ingredients
            .iter()
            .map(|i| i.name.chars().count())
            .chain(std::iter::once("Ingredient".len()))
            .max()
            .unwrap_or_default();

        writeln!(
            f,
            "{:<width$}  {:>8}  {}",
            "Ingredient",
            "Quantity",
            "Unit",
            width = name_width
        )?;
        for ingredient in &recipe.ingredients {
            writeln!(
                f,
                "{:<width$}  {:>8}  {}",
                ingredient.name,
                ingredient.quantity,
                ingredient.unit,
                width = name_width
            )?;
        }

        Ok(())
    }
}
