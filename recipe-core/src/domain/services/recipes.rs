use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::domain::{
    models::{NewRecipe, Recipe, RecipeId, RecipeSnapshot},
    ports::{
        inbound::{PendingDelete, RecipeService},
        outbound::RecipeRepository,
    },
    projection, ListQuery, RecipeError, RecipeIdGenerator, RecipePage,
};

/// Implementation of the RecipeService inbound port.
///
/// Validates creation payloads, assigns ids and delegates storage to a
/// RecipeRepository (outbound port).
pub struct RecipeServiceImpl<R: RecipeRepository> {
    repository: Arc<R>,
    ids: RecipeIdGenerator,
}

impl<R: RecipeRepository> RecipeServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            ids: RecipeIdGenerator::new(),
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }
}

impl<R: RecipeRepository> RecipeService for RecipeServiceImpl<R> {
    #[instrument(skip_all, fields(title = %recipe.title))]
    fn create_recipe(&self, recipe: NewRecipe) -> Result<Recipe, RecipeError> {
        if let Err(errors) = recipe.validate() {
            warn!(fields = errors.len(), "rejected recipe payload: {}", errors);
            return Err(errors.into());
        }

        let recipe = recipe.into_recipe(self.ids.next_id())?;
        self.repository.add(recipe.clone())?;

        info!(id = %recipe.id, ingredients = recipe.ingredients.len(), "created recipe");
        Ok(recipe)
    }

    fn get_recipe(&self, id: &RecipeId) -> Option<Recipe> {
        self.repository.find(id)
    }

    #[instrument(skip(self))]
    fn archive_recipe(&self, id: &RecipeId) -> RecipeSnapshot {
        let before = self.repository.snapshot();
        let snapshot = self.repository.archive(id);
        if snapshot.ptr_eq(&before) {
            debug!("archive changed nothing");
        } else {
            info!("archived recipe");
        }
        snapshot
    }

    #[instrument(skip(self))]
    fn unarchive_recipe(&self, id: &RecipeId) -> RecipeSnapshot {
        let before = self.repository.snapshot();
        let snapshot = self.repository.unarchive(id);
        if snapshot.ptr_eq(&before) {
            debug!("unarchive changed nothing");
        } else {
            info!("unarchived recipe");
        }
        snapshot
    }

    fn request_delete(&self, id: &RecipeId) -> Option<PendingDelete> {
        let recipe = self.repository.find(id);
        if recipe.is_none() {
            debug!(%id, "delete requested for unknown recipe");
        }
        recipe.map(|recipe| PendingDelete::new(recipe.id, recipe.title))
    }

    #[instrument(skip_all, fields(id = %pending.id()))]
    fn confirm_delete(&self, pending: PendingDelete) -> RecipeSnapshot {
        let before = self.repository.snapshot();
        let snapshot = self.repository.delete(pending.id());
        if snapshot.ptr_eq(&before) {
            debug!(title = pending.title(), "recipe already deleted");
        } else {
            info!(title = pending.title(), "deleted recipe");
        }
        snapshot
    }

    fn list_recipes(&self, query: &ListQuery) -> RecipePage {
        projection::project(&self.repository.snapshot(), query)
    }

    fn subscribe(&self) -> watch::Receiver<RecipeSnapshot> {
        self.repository.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::InMemoryRecipeRepository;
    use crate::domain::models::{Ingredient, NewIngredient, Unit, TITLE_REQUIRED};
    use crate::domain::RecipeView;
    use proptest::prelude::*;

    fn make_service() -> RecipeServiceImpl<InMemoryRecipeRepository> {
        RecipeServiceImpl::new(Arc::new(InMemoryRecipeRepository::new()))
    }

    fn tea() -> NewRecipe {
        NewRecipe::new("Tea", "Hot tea")
            .with_ingredient(NewIngredient::new("Water", 200.0, "ml"))
            .with_ingredient(NewIngredient::new("Tea Leaves", 5.0, "mg"))
    }

    fn create_titled(service: &impl RecipeService, title: &str) -> Recipe {
        service
            .create_recipe(NewRecipe::new(title, format!("{title} description")))
            .unwrap()
    }

    #[test]
    fn create_then_find_tea() {
        let service = make_service();

        let created = service.create_recipe(tea()).unwrap();
        let found = service.get_recipe(&created.id).unwrap();

        assert_eq!(found, created);
        assert_eq!(found.title, "Tea");
        assert_eq!(found.description, "Hot tea");
        assert!(!found.is_archived);
        assert_eq!(
            found.ingredients,
            vec![
                Ingredient::new("Water", 200.0, Unit::Ml),
                Ingredient::new("Tea Leaves", 5.0, Unit::Mg),
            ]
        );
    }

    #[test]
    fn invalid_payload_never_reaches_repository() {
        let service = make_service();
        let mut rx = service.subscribe();

        let err = service
            .create_recipe(NewRecipe::new("", "Hot tea"))
            .unwrap_err();

        match err {
            RecipeError::Validation(errors) => {
                assert_eq!(errors.message_for("title"), Some(TITLE_REQUIRED));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(service.repository().is_empty());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn created_recipes_get_distinct_ids() {
        let service = make_service();

        let first = service.create_recipe(tea()).unwrap();
        let second = service.create_recipe(tea()).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(service.repository().len(), 2);
    }

    #[test]
    fn archive_moves_recipe_between_views() {
        let service = make_service();
        let recipes: Vec<_> = (1..=6)
            .map(|i| create_titled(&service, &format!("Recipe {i}")))
            .collect();

        let active_page_two = service.list_recipes(&ListQuery::default().with_page(2));
        assert_eq!(active_page_two.items.len(), 1);
        assert_eq!(active_page_two.total_pages, 2);
        let target = active_page_two.items[0].id.clone();
        assert_eq!(target, recipes[5].id);

        let active_before = service.list_recipes(&ListQuery::default()).total_items;
        let archived_before = service
            .list_recipes(&ListQuery::new(RecipeView::Archived))
            .total_items;

        service.archive_recipe(&target);

        let active_after = service.list_recipes(&ListQuery::default());
        let archived_after = service.list_recipes(&ListQuery::new(RecipeView::Archived));
        assert_eq!(active_after.total_items, active_before - 1);
        assert_eq!(active_after.total_pages, 1);
        assert_eq!(archived_after.total_items, archived_before + 1);
        assert_eq!(archived_after.items[0].id, target);
        assert!(archived_after.items[0].is_archived);
    }

    #[test]
    fn unarchive_restores_active_view() {
        let service = make_service();
        let recipe = create_titled(&service, "Stew");

        service.archive_recipe(&recipe.id);
        service.unarchive_recipe(&recipe.id);

        assert_eq!(service.get_recipe(&recipe.id), Some(recipe));
        assert_eq!(service.list_recipes(&ListQuery::default()).total_items, 1);
    }

    #[test]
    fn delete_requires_confirmation() {
        let service = make_service();
        let recipe = create_titled(&service, "Stew");

        let pending = service.request_delete(&recipe.id).unwrap();
        assert_eq!(pending.title(), "Stew");
        drop(pending);
        assert!(service.get_recipe(&recipe.id).is_some());

        let pending = service.request_delete(&recipe.id).unwrap();
        let snapshot = service.confirm_delete(pending);
        assert!(snapshot.is_empty());
        assert!(service.get_recipe(&recipe.id).is_none());
    }

    #[test]
    fn delete_request_for_unknown_recipe_is_none() {
        let service = make_service();
        assert!(service.request_delete(&RecipeId::new("missing")).is_none());
    }

    #[test]
    fn confirming_stale_delete_is_noop() {
        let service = make_service();
        let recipe = create_titled(&service, "Stew");
        let other = create_titled(&service, "Soup");

        let first = service.request_delete(&recipe.id).unwrap();
        let second = first.clone();
        service.confirm_delete(first);
        let snapshot = service.confirm_delete(second);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, other.id);
    }

    #[test]
    fn list_uses_search_and_view() {
        let service = make_service();
        create_titled(&service, "Tomato Soup");
        create_titled(&service, "Pizza");
        let salad = create_titled(&service, "Tomato Salad");
        service.archive_recipe(&salad.id);

        let page = service.list_recipes(&ListQuery::default().with_search("tomato"));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "Tomato Soup");

        let archived =
            service.list_recipes(&ListQuery::new(RecipeView::Archived).with_search("SALAD"));
        assert_eq!(archived.items.len(), 1);
    }

    #[test]
    fn subscribers_are_notified_of_new_recipes() {
        let service = make_service();
        let mut rx = service.subscribe();

        let recipe = service.create_recipe(tea()).unwrap();

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().contains_id(&recipe.id));
    }

    #[test]
    fn services_sharing_a_repository_never_collide() {
        let repository = Arc::new(InMemoryRecipeRepository::new());
        let first = RecipeServiceImpl::new(repository.clone());
        let second = RecipeServiceImpl::new(repository.clone());

        for _ in 0..200 {
            first.create_recipe(tea()).unwrap();
            second.create_recipe(tea()).unwrap();
        }

        assert_eq!(repository.len(), 400);
    }

    #[test]
    fn noop_archive_returns_unchanged_snapshot() {
        let service = make_service();
        let recipe = create_titled(&service, "Stew");
        let before = service.repository().snapshot();

        assert!(service.unarchive_recipe(&recipe.id).ptr_eq(&before));
        assert!(service.archive_recipe(&RecipeId::new("missing")).ptr_eq(&before));

        let archived = service.archive_recipe(&recipe.id);
        assert!(!archived.ptr_eq(&before));
        assert!(service.archive_recipe(&recipe.id).ptr_eq(&archived));
    }

    fn arb_unit() -> impl Strategy<Value = Unit> {
        prop_oneof![Just(Unit::Mg), Just(Unit::L), Just(Unit::Ml), Just(Unit::Nos)]
    }

    fn arb_ingredient() -> impl Strategy<Value = Ingredient> {
        (".{1,12}", 1.0f64..10_000.0, arb_unit())
            .prop_map(|(name, quantity, unit)| Ingredient::new(name, quantity, unit))
    }

    fn arb_payload() -> impl Strategy<Value = (NewRecipe, Vec<Ingredient>)> {
        (".{1,24}", ".{1,48}", prop::collection::vec(arb_ingredient(), 0..6)).prop_map(
            |(title, description, ingredients)| {
                let payload = ingredients.iter().fold(
                    NewRecipe::new(title, description),
                    |payload, ingredient| {
                        payload.with_ingredient(NewIngredient::new(
                            ingredient.name.clone(),
                            ingredient.quantity,
                            ingredient.unit.to_string(),
                        ))
                    },
                );
                (payload, ingredients)
            },
        )
    }

    proptest! {
        #[test]
        fn any_valid_payload_is_stored_as_given((payload, ingredients) in arb_payload()) {
            let service = make_service();

            let created = service.create_recipe(payload.clone()).unwrap();
            let found = service.get_recipe(&created.id).unwrap();

            prop_assert_eq!(&found, &created);
            prop_assert!(!found.is_archived);
            prop_assert_eq!(&found.title, &payload.title);
            prop_assert_eq!(&found.description, &payload.description);
            prop_assert_eq!(&found.ingredients, &ingredients);
        }
    }
}
