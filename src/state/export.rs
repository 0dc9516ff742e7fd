use std::fs::File;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Dish, PlanGrid, PlanState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

/// The exported document: the library and the week, without settings.
#[derive(Serialize)]
struct PlanExport<'a> {
    dishes: &'a [Dish],
    plan: &'a PlanGrid,
}

#[derive(Serialize)]
struct SlotRow<'a> {
    day: &'a str,
    meal: &'a str,
    dish_id: &'a str,
    dish_name: &'a str,
    servings: u32,
}

pub fn export_plan(state: &PlanState, path: &Path, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Json => write_plan_json(state, path),
        ExportFormat::Csv => write_plan_csv(state, path),
    }
}

/// Write `{dishes, plan}` as pretty JSON.
pub fn write_plan_json(state: &PlanState, path: &Path) -> Result<()> {
    let export = PlanExport {
        dishes: &state.dishes,
        plan: &state.plan,
    };
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&export)?.as_bytes())?;
    Ok(())
}

/// Write one row per occupied slot, in grid order.
///
/// Slots whose dish is gone get an empty name.
pub fn write_plan_csv(state: &PlanState, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for (key, assignment) in state.plan.iter() {
        let dish_name = state
            .find_dish(&assignment.dish_id)
            .map(|d| d.name.as_str())
            .unwrap_or("");
        wtr.serialize(SlotRow {
            day: key.day.as_ref(),
            meal: key.meal.as_ref(),
            dish_id: &assignment.dish_id,
            dish_name,
            servings: assignment.servings,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
