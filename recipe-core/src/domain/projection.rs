//! List projection: archive-status filter, title search, then pagination.
//!
//! Everything here is a pure function of the collection and a [`ListQuery`].
//! Page numbers are 1-based and are never corrected; an out-of-range page
//! simply produces an empty page (see [`crate::domain::ListState::reconcile`]
//! for the caller-side clamp).

use serde::{Deserialize, Serialize};

use super::models::Recipe;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Which half of the collection a list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeView {
    #[default]
    Active,
    Archived,
}

impl RecipeView {
    pub fn from_archived_flag(is_archived: bool) -> Self {
        if is_archived {
            RecipeView::Archived
        } else {
            RecipeView::Active
        }
    }

    pub fn is_archived(self) -> bool {
        matches!(self, RecipeView::Archived)
    }

    pub fn includes(self, recipe: &Recipe) -> bool {
        recipe.is_archived == self.is_archived()
    }
}

/// Parameters of one list projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub view: RecipeView,
    pub search: String,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            view: RecipeView::Active,
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    pub fn new(view: RecipeView) -> Self {
        Self {
            view,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// One page of a projected list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePage {
    pub items: Vec<Recipe>,
    /// The page that was requested, as given.
    pub page: usize,
    pub total_pages: usize,
    /// Number of recipes matching the view and search, across all pages.
    pub total_items: usize,
}

impl RecipePage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pagination controls are only worth showing with more than one page.
    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Recipes belonging to `view`, in collection order.
pub fn filter_by_view(recipes: &[Recipe], view: RecipeView) -> impl Iterator<Item = &Recipe> {
    recipes.iter().filter(move |recipe| view.includes(recipe))
}

/// Case-insensitive substring match on the title. Empty search matches everything.
pub fn matches_search(recipe: &Recipe, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    recipe.title.to_lowercase().contains(&search.to_lowercase())
}

/// Project the collection into a single page.
pub fn project(recipes: &[Recipe], query: &ListQuery) -> RecipePage {
    let page_size = query.page_size.max(1);

    let matching: Vec<&Recipe> = filter_by_view(recipes, query.view)
        .filter(|recipe| matches_search(recipe, &query.search))
        .collect();

    let total_items = matching.len();
    let total_pages = total_items.div_ceil(page_size);

    let items = match query.page.checked_sub(1) {
        Some(index) => matching
            .into_iter()
            .skip(index.saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect(),
        // Page 0 precedes the first page.
        None => Vec::new(),
    };

    RecipePage {
        items,
        page: query.page,
        total_pages,
        total_items,
    }
}
