use strum::VariantArray;

use crate::models::{Day, Meal, PlanState, SlotKey};
use crate::planner::LeftoverReport;

/// Text shown in one grid cell.
pub fn format_cell(state: &PlanState, key: SlotKey, report: &LeftoverReport) -> String {
    let Some(assignment) = state.plan.get(key) else {
        return "Empty".to_string();
    };

    match state.find_dish(&assignment.dish_id) {
        Some(dish) => {
            let remaining = report.remaining(&dish.id);
            if remaining > 0 {
                format!("{} x{} ({} left)", dish.name, assignment.servings, remaining)
            } else {
                format!("{} x{}", dish.name, assignment.servings)
            }
        }
        None => "(missing dish)".to_string(),
    }
}

/// Display the week as a meal-by-day table.
pub fn display_week(state: &PlanState, report: &LeftoverReport) {
    let cells: Vec<Vec<String>> = Meal::VARIANTS
        .iter()
        .map(|&meal| {
            Day::VARIANTS
                .iter()
                .map(|&day| format_cell(state, SlotKey::new(day, meal), report))
                .collect()
        })
        .collect();

    let width = cells
        .iter()
        .flatten()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);
    let label_width = Meal::VARIANTS
        .iter()
        .map(|m| m.as_ref().len())
        .max()
        .unwrap_or(9);

    println!();
    println!("=== Week Plan ===");
    println!();

    let header: Vec<String> = Day::VARIANTS
        .iter()
        .map(|d| format!("{:<width$}", d.as_ref(), width = width))
        .collect();
    println!("{:<lw$} | {}", "", header.join(" | "), lw = label_width);

    for (meal, row) in Meal::VARIANTS.iter().zip(&cells) {
        let row: Vec<String> = row
            .iter()
            .map(|c| format!("{:<width$}", c, width = width))
            .collect();
        println!("{:<lw$} | {}", meal.as_ref(), row.join(" | "), lw = label_width);
    }

    println!();
}

/// Display the dish library.
pub fn display_dish_list(state: &PlanState) {
    if state.dishes.is_empty() {
        println!("No dishes yet. Add one!");
        return;
    }

    println!();
    println!("=== Dishes ({} items) ===", state.dishes.len());
    println!();

    let max_name_len = state
        .dishes
        .iter()
        .map(|d| d.name.chars().count())
        .max()
        .unwrap_or(10);

    for dish in &state.dishes {
        println!(
            "  [{}] {:<width$}  makes {:>2} servings  {}  ({})",
            dish.initial(),
            dish.name,
            dish.servings,
            dish.color,
            dish.id,
            width = max_name_len
        );
    }

    println!();
}

/// Display leftovers and the servings summary.
pub fn display_leftovers(report: &LeftoverReport, servings_planned: u32) {
    println!("--- Leftovers ---");
    if report.is_empty() {
        println!("No leftovers");
    } else {
        for leftover in &report.leftovers {
            println!("{} - {} leftover(s)", leftover.name, leftover.remaining);
        }
    }
    println!();
    println!("{} servings planned", servings_planned);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Dish};
    use crate::planner::compute_leftovers;

    #[test]
    fn test_format_cell_variants() {
        let mut state = PlanState {
            dishes: vec![Dish::new("a", "Chili", 4), Dish::new("b", "Soup", 1)],
            ..Default::default()
        };
        let mon = SlotKey::new(Day::Mon, Meal::Lunch);
        let tue = SlotKey::new(Day::Tue, Meal::Lunch);
        let wed = SlotKey::new(Day::Wed, Meal::Lunch);
        state.plan.insert(mon, Assignment::new("a", 1));
        state.plan.insert(tue, Assignment::new("b", 1));
        state.plan.insert(wed, Assignment::new("gone", 2));
        let report = compute_leftovers(&state);

        assert_eq!(format_cell(&state, mon, &report), "Chili x1 (3 left)");
        assert_eq!(format_cell(&state, tue, &report), "Soup x1");
        assert_eq!(format_cell(&state, wed, &report), "(missing dish)");
        assert_eq!(
            format_cell(&state, SlotKey::new(Day::Sun, Meal::Dinner), &report),
            "Empty"
        );
    }
}
