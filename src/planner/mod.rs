pub mod assign;
pub mod balance;
pub mod constants;
pub mod leftovers;

pub use assign::{add_dish, assign_first_empty, assign_to_slot, clear_week, remove_dish};
pub use balance::{auto_balance, balance_preview};
pub use constants::*;
pub use leftovers::{compute_leftovers, remaining_servings, Leftover, LeftoverReport};
