use std::collections::HashMap;

use crate::models::PlanState;

/// A dish that still has unplaced servings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leftover {
    pub id: String,
    pub name: String,
    pub remaining: u32,
}

/// Remaining servings for every dish, plus the subset that is non-zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeftoverReport {
    /// Remaining servings keyed by dish id, including dishes at zero.
    pub per_dish: HashMap<String, u32>,

    /// Dishes with `remaining > 0`, in library order.
    pub leftovers: Vec<Leftover>,
}

impl LeftoverReport {
    pub fn remaining(&self, dish_id: &str) -> u32 {
        self.per_dish.get(dish_id).copied().unwrap_or(0)
    }

    /// Total unplaced servings across all dishes, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.leftovers
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.remaining))
    }

    pub fn is_empty(&self) -> bool {
        self.leftovers.is_empty()
    }
}

/// Servings of a dish not yet placed anywhere in the week.
///
/// Over-assignment clamps to zero rather than going negative.
#[inline]
pub fn remaining_servings(yield_servings: u32, assigned: u32) -> u32 {
    yield_servings.saturating_sub(assigned)
}

/// Compute leftovers for every dish across the whole week.
///
/// Assignments that reference a dish not in the library contribute nothing.
pub fn compute_leftovers(state: &PlanState) -> LeftoverReport {
    let mut assigned: HashMap<&str, u32> = HashMap::new();
    for (_, assignment) in state.plan.iter() {
        let used = assigned.entry(assignment.dish_id.as_str()).or_insert(0);
        *used = used.saturating_add(assignment.servings);
    }

    let mut report = LeftoverReport::default();
    for dish in &state.dishes {
        let used = assigned.get(dish.id.as_str()).copied().unwrap_or(0);
        let remaining = remaining_servings(dish.servings, used);

        report.per_dish.insert(dish.id.clone(), remaining);
        if remaining > 0 {
            report.leftovers.push(Leftover {
                id: dish.id.clone(),
                name: dish.name.clone(),
                remaining,
            });
        }
    }

    report
}
