pub mod prompts;
pub mod render;

pub use prompts::{match_dish, prompt_yes_no, resolve_dish, DishMatch};
pub use render::{display_dish_list, display_leftovers, display_week, format_cell};
