mod dish;
mod plan;
mod slot;

pub use dish::Dish;
pub use plan::{Assignment, PlanGrid, PlanState, Settings};
pub use slot::{Day, Meal, SlotKey};
