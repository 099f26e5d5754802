//! Client-local recipe view.
//!
//! The view is an ordered collection of recipe snapshots mutated only by
//! applying broadcast events. Applying is idempotent per event and
//! order-independent across distinct recipe identifiers; ordering between
//! events for the *same* identifier must be preserved by the transport
//! (one ordered channel per client), since there is no version check here
//! to resolve an Updated arriving before its Added.

use mise_server::domain::{Recipe, RecipeEvent, RecipeId};

/// An ordered, newest-first collection of recipe snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientView {
    recipes: Vec<Recipe>,
}

impl ClientView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the view from an authoritative snapshot, replacing whatever
    /// was held before.
    pub fn from_snapshot(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Apply one broadcast event.
    ///
    /// - Added: prepend, unless the identifier is already present
    ///   (duplicate delivery is a no-op).
    /// - Updated: replace the matching entry in place; no-op when absent.
    /// - Deleted: remove the matching entry; no-op when absent.
    pub fn apply(&mut self, event: RecipeEvent) {
        match event {
            RecipeEvent::Added(recipe) => {
                if !self.contains(&recipe.id) {
                    self.recipes.insert(0, recipe);
                }
            }
            RecipeEvent::Updated(recipe) => {
                if let Some(existing) = self.recipes.iter_mut().find(|r| r.id == recipe.id) {
                    *existing = recipe;
                }
            }
            RecipeEvent::Deleted(id) => {
                self.recipes.retain(|r| r.id != id);
            }
        }
    }

    pub fn contains(&self, id: &RecipeId) -> bool {
        self.recipes.iter().any(|r| &r.id == id)
    }

    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    /// Recipes in view order (newest first).
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mise_server::domain::{Category, Timestamp, UserId};

    fn recipe(id: &str, title: &str) -> Recipe {
        Recipe::new(
            RecipeId::new(id.to_string()).unwrap(),
            title.to_string(),
            vec!["ingredient".to_string()],
            vec!["step".to_string()],
            10,
            Category::Dinner,
            None,
            UserId::new("u1".to_string()).unwrap(),
            Timestamp::new(1000),
            Timestamp::new(1000),
        )
        .unwrap()
    }

    fn id(value: &str) -> RecipeId {
        RecipeId::new(value.to_string()).unwrap()
    }

    #[test]
    fn test_added_prepends_newest_first() {
        // given:
        let mut view = ClientView::new();

        // when:
        view.apply(RecipeEvent::Added(recipe("r1", "Soup")));
        view.apply(RecipeEvent::Added(recipe("r2", "Salad")));

        // then: the most recently added recipe is at index 0
        assert_eq!(view.recipes()[0].id, id("r2"));
        assert_eq!(view.recipes()[1].id, id("r1"));
    }

    #[test]
    fn test_added_twice_is_idempotent() {
        // given:
        let mut view = ClientView::new();
        view.apply(RecipeEvent::Added(recipe("r1", "Soup")));
        let after_first = view.clone();

        // when: duplicate delivery of the same event
        view.apply(RecipeEvent::Added(recipe("r1", "Soup")));

        // then:
        assert_eq!(view, after_first);
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_updated_replaces_matching_entry_in_place() {
        // given:
        let mut view = ClientView::new();
        view.apply(RecipeEvent::Added(recipe("r1", "Soup")));
        view.apply(RecipeEvent::Added(recipe("r2", "Salad")));

        // when:
        view.apply(RecipeEvent::Updated(recipe("r1", "Better Soup")));

        // then: position preserved, title replaced
        assert_eq!(view.recipes()[1].id, id("r1"));
        assert_eq!(view.recipes()[1].title, "Better Soup");
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_updated_for_absent_recipe_is_a_no_op() {
        // given: view = [r1, r2]
        let mut view = ClientView::new();
        view.apply(RecipeEvent::Added(recipe("r2", "Salad")));
        view.apply(RecipeEvent::Added(recipe("r1", "Soup")));
        let before = view.clone();

        // when: r3 was never in view
        view.apply(RecipeEvent::Updated(recipe("r3", "Stew")));

        // then: view unchanged
        assert_eq!(view, before);
    }

    #[test]
    fn test_deleted_removes_matching_entry() {
        // given:
        let mut view = ClientView::new();
        view.apply(RecipeEvent::Added(recipe("r1", "Soup")));
        view.apply(RecipeEvent::Added(recipe("r2", "Salad")));

        // when:
        view.apply(RecipeEvent::Deleted(id("r1")));

        // then:
        assert_eq!(view.len(), 1);
        assert!(!view.contains(&id("r1")));
    }

    #[test]
    fn test_deleted_for_absent_recipe_is_a_no_op() {
        // given:
        let mut view = ClientView::new();
        view.apply(RecipeEvent::Added(recipe("r1", "Soup")));

        // when:
        view.apply(RecipeEvent::Deleted(id("r9")));

        // then:
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_cross_identifier_events_commute() {
        // given: events referencing distinct identifiers
        let events = [
            RecipeEvent::Added(recipe("r1", "Soup")),
            RecipeEvent::Added(recipe("r2", "Salad")),
            RecipeEvent::Deleted(id("r3")),
        ];
        let orders: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];

        for order in orders {
            // when: applied in this order to an empty view
            let mut view = ClientView::new();
            for index in order {
                view.apply(events[index].clone());
            }

            // then: the surviving set is {added} \ {deleted} regardless of order
            assert_eq!(view.len(), 2);
            assert!(view.contains(&id("r1")));
            assert!(view.contains(&id("r2")));
            assert!(!view.contains(&id("r3")));
        }
    }

    #[test]
    fn test_broadcast_scenario_across_three_client_views() {
        // given: three connected clients, each with an empty view
        let mut views = [ClientView::new(), ClientView::new(), ClientView::new()];

        // when: recipe_added is fanned out to all three
        for view in views.iter_mut() {
            view.apply(RecipeEvent::Added(recipe("r1", "Soup")));
        }

        // then: all three hold r1 at index 0
        for view in &views {
            assert_eq!(view.recipes()[0].id, id("r1"));
        }

        // when: recipe_deleted is fanned out to all three
        for view in views.iter_mut() {
            view.apply(RecipeEvent::Deleted(id("r1")));
        }

        // then: all three views are empty
        for view in &views {
            assert!(view.is_empty());
        }
    }

    #[test]
    fn test_from_snapshot_replaces_previous_contents() {
        // given: a view with stale contents
        let mut view = ClientView::new();
        view.apply(RecipeEvent::Added(recipe("r1", "Soup")));

        // when:
        view = ClientView::from_snapshot(vec![recipe("r2", "Salad"), recipe("r3", "Stew")]);

        // then:
        assert_eq!(view.len(), 2);
        assert!(!view.contains(&id("r1")));
        assert_eq!(view.recipes()[0].id, id("r2"));
    }
}
