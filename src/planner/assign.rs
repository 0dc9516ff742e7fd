use tracing::debug;

use crate::error::{PrepError, Result};
use crate::models::{Assignment, Dish, Meal, PlanGrid, PlanState, SlotKey};
use crate::planner::constants::DEFAULT_DISH_COLOR;

/// Check the inputs shared by both assignment modes.
fn validate_assignment(dish_id: &str, servings: u32) -> Result<()> {
    if dish_id.trim().is_empty() {
        return Err(PrepError::Validation("Select a dish".to_string()));
    }
    if servings < 1 {
        return Err(PrepError::Validation(
            "Servings must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Put a dish into a specific slot, replacing whatever was there.
pub fn assign_to_slot(
    plan: &mut PlanGrid,
    key: SlotKey,
    dish_id: &str,
    servings: u32,
) -> Result<Option<Assignment>> {
    validate_assignment(dish_id, servings)?;

    let previous = plan.insert(key, Assignment::new(dish_id, servings));
    debug!(slot = %key, dish = dish_id, servings, replaced = previous.is_some(), "assigned slot");
    Ok(previous)
}

/// Put a dish into the earliest empty slot of `meal`, scanning Monday to Sunday.
///
/// Fails with [`PrepError::NoCapacity`] when all seven slots of that meal are taken.
pub fn assign_first_empty(
    plan: &mut PlanGrid,
    meal: Meal,
    dish_id: &str,
    servings: u32,
) -> Result<SlotKey> {
    validate_assignment(dish_id, servings)?;

    let key = SlotKey::for_meal(meal)
        .find(|k| plan.is_empty_slot(*k))
        .ok_or(PrepError::NoCapacity { meal })?;

    plan.insert(key, Assignment::new(dish_id, servings));
    debug!(slot = %key, dish = dish_id, servings, "assigned first empty slot");
    Ok(key)
}

/// Add a dish to the library.
///
/// The name is trimmed; `color` falls back to the default dish color.
pub fn add_dish(
    state: &mut PlanState,
    id: &str,
    name: &str,
    servings: u32,
    color: Option<&str>,
) -> Result<Dish> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PrepError::Validation("Dish name required".to_string()));
    }
    if servings < 1 {
        return Err(PrepError::Validation(
            "A dish must make at least 1 serving".to_string(),
        ));
    }
    if id.is_empty() || state.contains_dish(id) {
        return Err(PrepError::Validation(format!(
            "Dish id '{}' is empty or already in use",
            id
        )));
    }

    let color = color
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_DISH_COLOR);
    let dish = Dish::new(id, name, servings).with_color(color);
    state.dishes.push(dish.clone());
    debug!(dish = id, dish_name = name, servings, "added dish");
    Ok(dish)
}

/// Remove a dish and every slot that uses it.
pub fn remove_dish(state: &mut PlanState, dish_id: &str) -> Result<Dish> {
    let index = state
        .dishes
        .iter()
        .position(|d| d.id == dish_id)
        .ok_or_else(|| PrepError::DishNotFound(dish_id.to_string()))?;

    let dish = state.dishes.remove(index);
    let freed = state.plan.remove_dish(dish_id);
    debug!(dish = dish_id, freed, "removed dish");
    Ok(dish)
}

/// Empty the whole week. Dishes and settings stay.
pub fn clear_week(state: &mut PlanState) -> usize {
    let freed = state.plan.occupied_count();
    state.plan.clear();
    freed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    #[test]
    fn test_assign_to_slot_rejects_invalid_input() {
        let mut plan = PlanGrid::new();
        let key = SlotKey::new(Day::Mon, Meal::Lunch);

        assert!(matches!(
            assign_to_slot(&mut plan, key, "", 1),
            Err(PrepError::Validation(_))
        ));
        assert!(matches!(
            assign_to_slot(&mut plan, key, "a", 0),
            Err(PrepError::Validation(_))
        ));
        assert!(plan.is_empty());
    }

    #[test]
    fn test_assign_to_slot_overwrites() {
        let mut plan = PlanGrid::new();
        let key = SlotKey::new(Day::Thu, Meal::Dinner);

        assert_eq!(assign_to_slot(&mut plan, key, "a", 2).unwrap(), None);
        let previous = assign_to_slot(&mut plan, key, "b", 1).unwrap();

        assert_eq!(previous, Some(Assignment::new("a", 2)));
        assert_eq!(plan.get(key), Some(&Assignment::new("b", 1)));
        assert_eq!(plan.occupied_count(), 1);
    }

    #[test]
    fn test_assign_first_empty_no_capacity() {
        let mut plan = PlanGrid::new();
        for key in SlotKey::for_meal(Meal::Lunch) {
            plan.insert(key, Assignment::new("a", 1));
        }
        let before = plan.clone();

        let err = assign_first_empty(&mut plan, Meal::Lunch, "b", 1).unwrap_err();
        assert!(matches!(err, PrepError::NoCapacity { meal: Meal::Lunch }));
        assert_eq!(plan, before);

        // Other meals are unaffected.
        let key = assign_first_empty(&mut plan, Meal::Dinner, "b", 1).unwrap();
        assert_eq!(key, SlotKey::new(Day::Mon, Meal::Dinner));
    }

    #[test]
    fn test_assign_first_empty_validates_before_scanning() {
        let mut plan = PlanGrid::new();
        assert!(matches!(
            assign_first_empty(&mut plan, Meal::Lunch, "a", 0),
            Err(PrepError::Validation(_))
        ));
        assert!(plan.is_empty());
    }

    #[test]
    fn test_add_dish_validation() {
        let mut state = PlanState::default();

        assert!(add_dish(&mut state, "d_1", "   ", 4, None).is_err());
        assert!(add_dish(&mut state, "d_1", "Soup", 0, None).is_err());
        assert!(state.dishes.is_empty());

        let dish = add_dish(&mut state, "d_1", "  Soup ", 4, None).unwrap();
        assert_eq!(dish.name, "Soup");
        assert_eq!(dish.color, DEFAULT_DISH_COLOR);

        assert!(add_dish(&mut state, "d_1", "Other", 2, Some("#000000")).is_err());
        assert_eq!(state.dishes.len(), 1);
    }

    #[test]
    fn test_remove_dish_cascades() {
        let mut state = PlanState::default();
        add_dish(&mut state, "a", "Soup", 4, None).unwrap();
        add_dish(&mut state, "b", "Stew", 4, None).unwrap();
        state
            .plan
            .insert(SlotKey::new(Day::Mon, Meal::Lunch), Assignment::new("a", 1));
        state
            .plan
            .insert(SlotKey::new(Day::Tue, Meal::Lunch), Assignment::new("a", 2));
        state
            .plan
            .insert(SlotKey::new(Day::Wed, Meal::Lunch), Assignment::new("b", 1));

        let removed = remove_dish(&mut state, "a").unwrap();
        assert_eq!(removed.name, "Soup");
        assert_eq!(state.plan.servings_for("a"), 0);
        assert_eq!(state.plan.occupied_count(), 1);
        assert!(!state.contains_dish("a"));

        assert!(matches!(
            remove_dish(&mut state, "a"),
            Err(PrepError::DishNotFound(_))
        ));
    }

    #[test]
    fn test_clear_week_keeps_dishes() {
        let mut state = PlanState::default();
        add_dish(&mut state, "a", "Soup", 4, None).unwrap();
        state
            .plan
            .insert(SlotKey::new(Day::Mon, Meal::Lunch), Assignment::new("a", 1));

        assert_eq!(clear_week(&mut state), 1);
        assert!(state.plan.is_empty());
        assert_eq!(state.dishes.len(), 1);
    }
}
