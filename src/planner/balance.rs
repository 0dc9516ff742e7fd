use tracing::debug;

use crate::models::{Assignment, PlanGrid, PlanState};
use crate::planner::constants::BALANCE_SERVINGS_PER_SLOT;
use crate::planner::leftovers::compute_leftovers;

/// Spread leftover servings into empty slots.
///
/// Single greedy pass over dishes in library order. Each dish with
/// leftovers claims empty slots in grid order (Mon-Breakfast, Mon-Lunch, ...),
/// one serving per slot, until its leftovers run out or the grid is full.
/// Occupied slots are never touched. The input state is not modified; the
/// caller commits the returned grid.
pub fn auto_balance(state: &PlanState) -> PlanGrid {
    let mut plan = state.plan.clone();
    let report = compute_leftovers(state);

    for leftover in &report.leftovers {
        let mut remaining = leftover.remaining;
        let targets: Vec<_> = plan
            .empty_slots()
            .take(remaining as usize)
            .collect();

        if targets.is_empty() {
            debug!("grid full, stopping balance pass");
            break;
        }

        for key in targets {
            let use_servings = remaining.min(BALANCE_SERVINGS_PER_SLOT);
            plan.insert(key, Assignment::new(leftover.id.as_str(), use_servings));
            remaining -= use_servings;
        }

        debug!(
            dish = leftover.id.as_str(),
            placed = leftover.remaining - remaining,
            unplaced = remaining,
            "balanced leftovers"
        );
    }

    plan
}

/// Number of slots a balance pass would fill, without committing anything.
pub fn balance_preview(state: &PlanState) -> usize {
    auto_balance(state).occupied_count() - state.plan.occupied_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Dish, Meal, SlotKey};

    #[test]
    fn test_no_dishes_is_noop() {
        let state = PlanState::default();
        assert_eq!(auto_balance(&state), state.plan);
    }

    #[test]
    fn test_skips_occupied_slots() {
        let mut state = PlanState {
            dishes: vec![Dish::new("a", "Chili", 3)],
            ..Default::default()
        };
        let occupied = SlotKey::new(Day::Mon, Meal::Lunch);
        state.plan.insert(occupied, Assignment::new("x", 2));

        let plan = auto_balance(&state);
        assert_eq!(plan.get(occupied), Some(&Assignment::new("x", 2)));
        assert_eq!(
            plan.get(SlotKey::new(Day::Mon, Meal::Breakfast)),
            Some(&Assignment::new("a", 1))
        );
        assert_eq!(
            plan.get(SlotKey::new(Day::Mon, Meal::Dinner)),
            Some(&Assignment::new("a", 1))
        );
        assert_eq!(
            plan.get(SlotKey::new(Day::Tue, Meal::Breakfast)),
            Some(&Assignment::new("a", 1))
        );
        assert_eq!(plan.occupied_count(), 4);
    }

    #[test]
    fn test_dishes_fill_in_library_order() {
        let state = PlanState {
            dishes: vec![Dish::new("small", "Salad", 1), Dish::new("big", "Roast", 5)],
            ..Default::default()
        };

        let plan = auto_balance(&state);
        assert_eq!(
            plan.get(SlotKey::new(Day::Mon, Meal::Breakfast)),
            Some(&Assignment::new("small", 1))
        );
        assert_eq!(plan.servings_for("big"), 5);
        assert_eq!(
            plan.get(SlotKey::new(Day::Mon, Meal::Lunch)),
            Some(&Assignment::new("big", 1))
        );
    }

    #[test]
    fn test_leftovers_beyond_capacity_stay_unplaced() {
        let state = PlanState {
            dishes: vec![Dish::new("a", "Giant Pot", 30)],
            ..Default::default()
        };

        let plan = auto_balance(&state);
        assert!(plan.is_full());
        assert_eq!(plan.servings_for("a"), 21);
    }

    #[test]
    fn test_does_not_modify_input() {
        let state = PlanState {
            dishes: vec![Dish::new("a", "Chili", 2)],
            ..Default::default()
        };
        let before = state.clone();
        let _ = auto_balance(&state);
        assert_eq!(state, before);
        assert_eq!(balance_preview(&state), 2);
    }
}
