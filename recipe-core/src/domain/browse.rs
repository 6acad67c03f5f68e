use super::projection::{ListQuery, RecipePage, RecipeView};

/// Per-list browsing state: which view, the search box, and the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    view: RecipeView,
    search: String,
    page: usize,
}

impl ListState {
    pub fn new(view: RecipeView) -> Self {
        Self {
            view,
            search: String::new(),
            page: 1,
        }
    }

    pub fn view(&self) -> RecipeView {
        self.view
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the search text. A new search starts from the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.search {
            self.search = search;
            self.page = 1;
        }
    }

    pub fn next_page(&mut self, current: &RecipePage) {
        if self.page < current.total_pages {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Clamp the page into `1..=total_pages` after the collection changed.
    ///
    /// Returns true when the page moved.
    pub fn reconcile(&mut self, total_pages: usize) -> bool {
        let clamped = self.page.clamp(1, total_pages.max(1));
        let moved = clamped != self.page;
        self.page = clamped;
        moved
    }

    pub fn query(&self, page_size: usize) -> ListQuery {
        ListQuery {
            view: self.view,
            search: self.search.clone(),
            page: self.page,
            page_size,
        }
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(RecipeView::Active)
    }
}
