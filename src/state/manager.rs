use tracing::debug;

use crate::error::{PrepError, Result};
use crate::models::{Dish, Meal, PlanState, SlotKey};
use crate::planner::{self, LeftoverReport};
use crate::state::ids::new_dish_id;

/// Owns the live plan for one session and threads it through the planner.
///
/// After every successful assignment the auto-balance setting is honoured.
pub struct PlanManager {
    state: PlanState,
}

impl PlanManager {
    pub fn new(state: PlanState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &PlanState {
        &self.state
    }

    pub fn into_state(self) -> PlanState {
        self.state
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.state.dishes
    }

    pub fn get_dish(&self, id: &str) -> Option<&Dish> {
        self.state.find_dish(id)
    }

    /// Add a dish with a freshly generated id.
    pub fn add_dish(&mut self, name: &str, servings: u32, color: Option<&str>) -> Result<Dish> {
        let id = new_dish_id(&self.state);
        planner::add_dish(&mut self.state, &id, name, servings, color)
    }

    pub fn remove_dish(&mut self, id: &str) -> Result<Dish> {
        planner::remove_dish(&mut self.state, id)
    }

    /// Assign a dish to one slot, then auto-balance if enabled.
    pub fn assign_to_slot(&mut self, key: SlotKey, dish_id: &str, servings: u32) -> Result<()> {
        self.require_dish(dish_id)?;
        planner::assign_to_slot(&mut self.state.plan, key, dish_id, servings)?;
        self.balance_if_enabled();
        Ok(())
    }

    /// Assign a dish to the first free slot of `meal`, then auto-balance if enabled.
    pub fn assign_first_empty(&mut self, meal: Meal, dish_id: &str, servings: u32) -> Result<SlotKey> {
        self.require_dish(dish_id)?;
        let key = planner::assign_first_empty(&mut self.state.plan, meal, dish_id, servings)?;
        self.balance_if_enabled();
        Ok(key)
    }

    /// Run one balance pass and commit it. Returns the number of slots filled.
    pub fn balance(&mut self) -> usize {
        let before = self.state.plan.occupied_count();
        self.state.plan = planner::auto_balance(&self.state);
        let filled = self.state.plan.occupied_count() - before;
        debug!(filled, "committed balance pass");
        filled
    }

    /// Change the auto-balance setting. Turning it on balances straight away.
    pub fn set_auto_balance(&mut self, enabled: bool) -> usize {
        self.state.settings.auto_balance = enabled;
        self.balance_if_enabled()
    }

    pub fn clear_week(&mut self) -> usize {
        planner::clear_week(&mut self.state)
    }

    pub fn leftovers(&self) -> LeftoverReport {
        planner::compute_leftovers(&self.state)
    }

    /// Servings planned across the whole week.
    pub fn servings_planned(&self) -> u32 {
        self.state.plan.total_servings()
    }

    fn balance_if_enabled(&mut self) -> usize {
        if self.state.settings.auto_balance {
            self.balance()
        } else {
            0
        }
    }

    fn require_dish(&self, dish_id: &str) -> Result<()> {
        if dish_id.trim().is_empty() || self.state.contains_dish(dish_id) {
            // Empty ids fall through to the planner's "select a dish" check.
            Ok(())
        } else {
            Err(PrepError::DishNotFound(dish_id.to_string()))
        }
    }
}
