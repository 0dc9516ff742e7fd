use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{Dish, SlotKey};

/// A dish occupying one slot of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "dishId")]
    pub dish_id: String,

    /// Servings of the dish eaten at this slot. Always >= 1.
    #[serde(default = "one")]
    pub servings: u32,
}

fn one() -> u32 {
    1
}

impl Assignment {
    pub fn new(dish_id: impl Into<String>, servings: u32) -> Self {
        Self {
            dish_id: dish_id.into(),
            servings,
        }
    }
}

/// Week grid: at most one assignment per slot. A slot with no entry is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanGrid {
    slots: BTreeMap<SlotKey, Assignment>,
}

impl PlanGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: SlotKey) -> Option<&Assignment> {
        self.slots.get(&key)
    }

    pub fn is_empty_slot(&self, key: SlotKey) -> bool {
        !self.slots.contains_key(&key)
    }

    /// Place an assignment, returning whatever occupied the slot before.
    pub fn insert(&mut self, key: SlotKey, assignment: Assignment) -> Option<Assignment> {
        self.slots.insert(key, assignment)
    }

    pub fn remove(&mut self, key: SlotKey) -> Option<Assignment> {
        self.slots.remove(&key)
    }

    /// Drop every assignment that references `dish_id`. Returns how many went.
    pub fn remove_dish(&mut self, dish_id: &str) -> usize {
        let before = self.slots.len();
        self.slots.retain(|_, a| a.dish_id != dish_id);
        before - self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Occupied slots in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotKey, &Assignment)> {
        self.slots.iter().map(|(k, a)| (*k, a))
    }

    /// Empty slots in grid order.
    pub fn empty_slots(&self) -> impl Iterator<Item = SlotKey> + '_ {
        SlotKey::all().filter(|k| self.is_empty_slot(*k))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.empty_slots().next().is_none()
    }

    /// Servings of `dish_id` placed across the whole week, saturating at `u32::MAX`.
    pub fn servings_for(&self, dish_id: &str) -> u32 {
        self.slots
            .values()
            .filter(|a| a.dish_id == dish_id)
            .fold(0u32, |acc, a| acc.saturating_add(a.servings))
    }

    /// Servings placed across the whole week, all dishes, saturating at `u32::MAX`.
    pub fn total_servings(&self) -> u32 {
        self.slots
            .values()
            .fold(0u32, |acc, a| acc.saturating_add(a.servings))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn assignments_mut(&mut self) -> impl Iterator<Item = &mut Assignment> {
        self.slots.values_mut()
    }

    fn retain(&mut self, mut keep: impl FnMut(&SlotKey, &Assignment) -> bool) {
        self.slots.retain(|k, a| keep(k, a));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "autoBalance", default = "enabled")]
    pub auto_balance: bool,
}

fn enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self { auto_balance: true }
    }
}

/// Everything the planner knows: the dish library, the grid and settings.
///
/// This is the unit of persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanState {
    #[serde(default)]
    pub dishes: Vec<Dish>,

    #[serde(default)]
    pub plan: PlanGrid,

    #[serde(default)]
    pub settings: Settings,
}

impl PlanState {
    pub fn find_dish(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    pub fn contains_dish(&self, id: &str) -> bool {
        self.find_dish(id).is_some()
    }

    /// Repair values that break model invariants, typically after loading
    /// untrusted data. Returns the number of fixes applied.
    ///
    /// Zero servings become 1, duplicate dish ids keep their first
    /// occurrence and assignments without a dish id are dropped. Assignments
    /// pointing at unknown dishes are left alone.
    pub fn normalize(&mut self) -> usize {
        let mut fixes = 0;

        let mut seen = HashSet::new();
        let before = self.dishes.len();
        self.dishes.retain(|d| seen.insert(d.id.clone()));
        fixes += before - self.dishes.len();

        for dish in &mut self.dishes {
            if dish.servings == 0 {
                dish.servings = 1;
                fixes += 1;
            }
        }

        let before = self.plan.occupied_count();
        self.plan.retain(|_, a| !a.dish_id.is_empty());
        fixes += before - self.plan.occupied_count();

        for assignment in self.plan.assignments_mut() {
            if assignment.servings == 0 {
                assignment.servings = 1;
                fixes += 1;
            }
        }

        fixes
    }
}
