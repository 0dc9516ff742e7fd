use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::error::{PrepError, Result};
use crate::models::Dish;
use crate::planner::constants::FUZZY_MATCH_THRESHOLD;

/// How a user-typed dish reference matched the library.
#[derive(Debug, PartialEq)]
pub enum DishMatch<'a> {
    /// Id or case-insensitive name match.
    Exact(&'a Dish),
    /// Fuzzy name matches, best first.
    Fuzzy(Vec<&'a Dish>),
    None,
}

/// Match a dish by id, then by name, then fuzzily by name.
pub fn match_dish<'a>(dishes: &'a [Dish], query: &str) -> DishMatch<'a> {
    let query = query.trim();
    if query.is_empty() {
        return DishMatch::None;
    }

    if let Some(dish) = dishes.iter().find(|d| d.id == query) {
        return DishMatch::Exact(dish);
    }

    let lowered = query.to_lowercase();
    if let Some(dish) = dishes.iter().find(|d| d.name.to_lowercase() == lowered) {
        return DishMatch::Exact(dish);
    }

    let mut candidates: Vec<(&Dish, f64)> = dishes
        .iter()
        .map(|d| (d, jaro_winkler(&d.name.to_lowercase(), &lowered)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        DishMatch::None
    } else {
        DishMatch::Fuzzy(candidates.into_iter().map(|(d, _)| d).collect())
    }
}

/// Resolve a dish reference to an id, asking the user when the match is fuzzy.
pub fn resolve_dish(dishes: &[Dish], query: &str) -> Result<String> {
    match match_dish(dishes, query) {
        DishMatch::Exact(dish) => Ok(dish.id.clone()),
        DishMatch::Fuzzy(candidates) if candidates.len() == 1 => {
            let dish = candidates[0];
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", dish.name))
                .default(true)
                .interact()?;

            if confirm {
                Ok(dish.id.clone())
            } else {
                Err(PrepError::DishNotFound(query.to_string()))
            }
        }
        DishMatch::Fuzzy(candidates) => {
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|d| format!("{} ({})", d.name, d.id))
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                Ok(candidates[selection].id.clone())
            } else {
                Err(PrepError::DishNotFound(query.to_string()))
            }
        }
        DishMatch::None => Err(PrepError::DishNotFound(query.to_string())),
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
