use serde::Deserialize;

use crate::domain::DEFAULT_PAGE_SIZE;

/// Settings for the recipe catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Number of recipes per list page.
    pub page_size: usize,
    /// Start with the predefined seed recipes instead of an empty collection.
    pub seed_recipes: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            seed_recipes: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_five_per_page() {
        let config = CatalogConfig::default();
        assert_eq!(config.page_size, 5);
        assert!(config.seed_recipes);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: CatalogConfig = serde_json::from_str(r#"{ "page_size": 10 }"#).unwrap();
        assert_eq!(config.page_size, 10);
        assert!(config.seed_recipes);
    }
}
