pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PrepError, Result};
pub use models::{Assignment, Day, Dish, Meal, PlanGrid, PlanState, Settings, SlotKey};
