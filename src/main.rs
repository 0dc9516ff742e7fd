use clap::Parser;
use tracing_subscriber::EnvFilter;

use prep_mate_rs::cli::{Cli, Command, Toggle};
use prep_mate_rs::error::{PrepError, Result};
use prep_mate_rs::interface::{
    display_dish_list, display_leftovers, display_week, prompt_yes_no, resolve_dish,
};
use prep_mate_rs::models::{Meal, SlotKey};
use prep_mate_rs::planner::balance_preview;
use prep_mate_rs::state::{export_plan, ExportFormat, JsonFileStore, PlanManager, PlanStore};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let store = JsonFileStore::new(&cli.file);
    let load = || PlanManager::new(store.load());

    match command {
        Command::Show => cmd_show(&load()),
        Command::Dishes => {
            display_dish_list(load().state());
            Ok(())
        }
        Command::AddDish {
            name,
            servings,
            color,
        } => cmd_add_dish(&store, &mut load(), &name, servings, color.as_deref()),
        Command::RemoveDish { dish, yes } => cmd_remove_dish(&store, &mut load(), &dish, yes),
        Command::Assign {
            dish,
            servings,
            slot,
            meal,
        } => cmd_assign(&store, &mut load(), &dish, servings, slot, meal),
        Command::Balance { dry_run } => cmd_balance(&store, &mut load(), dry_run),
        Command::Leftovers => {
            let manager = load();
            display_leftovers(&manager.leftovers(), manager.servings_planned());
            Ok(())
        }
        Command::AutoBalance { mode } => cmd_auto_balance(&store, &mut load(), mode),
        Command::Clear { yes } => cmd_clear(&store, &mut load(), yes),
        Command::Export { out, format } => {
            export_plan(load().state(), &out, format)?;
            let kind = match format {
                ExportFormat::Json => "JSON",
                ExportFormat::Csv => "CSV",
            };
            println!("Exported plan as {} to {}", kind, out.display());
            Ok(())
        }
        Command::Reset { yes } => cmd_reset(&store, yes),
    }
}

/// Persist the current plan. A failed save keeps the in-memory plan as is.
fn commit(store: &JsonFileStore, manager: &PlanManager) {
    if store.save(manager.state()) {
        println!("Plan saved.");
    } else {
        eprintln!(
            "Warning: could not save plan to {}. Changes apply to this run only.",
            store.path().display()
        );
    }
}

fn cmd_show(manager: &PlanManager) -> Result<()> {
    let report = manager.leftovers();
    display_week(manager.state(), &report);
    display_leftovers(&report, manager.servings_planned());
    Ok(())
}

fn cmd_add_dish(
    store: &JsonFileStore,
    manager: &mut PlanManager,
    name: &str,
    servings: u32,
    color: Option<&str>,
) -> Result<()> {
    let dish = manager.add_dish(name, servings, color)?;
    println!("Added {} ({} servings) as {}", dish.name, dish.servings, dish.id);
    commit(store, manager);
    Ok(())
}

fn cmd_remove_dish(
    store: &JsonFileStore,
    manager: &mut PlanManager,
    query: &str,
    yes: bool,
) -> Result<()> {
    let id = resolve_dish(manager.dishes(), query)?;

    if !yes && !prompt_yes_no("Delete dish? This will remove it from the library.", false)? {
        return Ok(());
    }

    let dish = manager.remove_dish(&id)?;
    println!("Removed {}.", dish.name);
    commit(store, manager);
    Ok(())
}

fn cmd_assign(
    store: &JsonFileStore,
    manager: &mut PlanManager,
    query: &str,
    servings: u32,
    slot: Option<SlotKey>,
    meal: Option<Meal>,
) -> Result<()> {
    let id = resolve_dish(manager.dishes(), query)?;

    let key = match (slot, meal) {
        (Some(key), _) => {
            manager.assign_to_slot(key, &id, servings)?;
            key
        }
        (None, Some(meal)) => manager.assign_first_empty(meal, &id, servings)?,
        (None, None) => {
            return Err(PrepError::Validation(
                "Choose a slot with --slot or a meal with --meal".to_string(),
            ));
        }
    };

    let name = manager.get_dish(&id).map(|d| d.name.as_str()).unwrap_or(&id);
    println!("Assigned {} x{} to {}", name, servings, key);
    commit(store, manager);
    cmd_show(manager)
}

fn cmd_balance(store: &JsonFileStore, manager: &mut PlanManager, dry_run: bool) -> Result<()> {
    if dry_run {
        let filled = balance_preview(manager.state());
        println!("Balancing would fill {} empty slot(s).", filled);
        return Ok(());
    }

    let filled = manager.balance();
    if filled == 0 {
        println!("Nothing to balance.");
        return Ok(());
    }

    println!("Filled {} empty slot(s) with leftovers.", filled);
    commit(store, manager);
    cmd_show(manager)
}

fn cmd_auto_balance(store: &JsonFileStore, manager: &mut PlanManager, mode: Toggle) -> Result<()> {
    let filled = manager.set_auto_balance(mode.enabled());
    println!(
        "Auto-balance {}.",
        if mode.enabled() { "enabled" } else { "disabled" }
    );
    if filled > 0 {
        println!("Filled {} empty slot(s) with leftovers.", filled);
    }
    commit(store, manager);
    Ok(())
}

fn cmd_clear(store: &JsonFileStore, manager: &mut PlanManager, yes: bool) -> Result<()> {
    if !yes && !prompt_yes_no("Clear all assigned meals for the week?", false)? {
        return Ok(());
    }

    let freed = manager.clear_week();
    println!("Cleared {} slot(s).", freed);
    commit(store, manager);
    Ok(())
}

fn cmd_reset(store: &JsonFileStore, yes: bool) -> Result<()> {
    if !yes && !prompt_yes_no("Delete the stored plan and all dishes?", false)? {
        return Ok(());
    }

    if store.clear() {
        println!("Stored plan deleted.");
    } else {
        eprintln!("Could not delete {}.", store.path().display());
    }
    Ok(())
}
