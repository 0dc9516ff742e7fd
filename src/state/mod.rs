mod export;
mod ids;
mod manager;
mod persistence;

pub use export::{export_plan, write_plan_csv, write_plan_json, ExportFormat};
pub use ids::{generate_dish_id, new_dish_id};
pub use manager::PlanManager;
pub use persistence::{sample_state, JsonFileStore, PlanStore};
