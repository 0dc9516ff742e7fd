use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};

use crate::models::{Meal, SlotKey};
use crate::planner::constants::{DEFAULT_EXPORT_FILE, DEFAULT_STATE_FILE};
use crate::state::ExportFormat;

/// PrepMate - plan a week of meal prep and keep track of leftovers.
#[derive(Parser, Debug)]
#[command(name = "prepmate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the plan state JSON file.
    #[arg(short, long, global = true, env = "PREPMATE_FILE", default_value = DEFAULT_STATE_FILE)]
    pub file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn enabled(self) -> bool {
        matches!(self, Toggle::On)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the week grid and leftovers.
    Show,

    /// List the dish library.
    Dishes,

    /// Add a dish to the library.
    AddDish {
        /// Dish name.
        name: String,

        /// Servings one preparation yields.
        #[arg(short, long, default_value_t = 4)]
        servings: u32,

        /// Display color, e.g. "#34D399".
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Delete a dish and every slot that uses it.
    RemoveDish {
        /// Dish id or name.
        dish: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Put a dish into a slot, or into the first free slot of a meal.
    #[command(group(ArgGroup::new("target").required(true).args(["slot", "meal"])))]
    Assign {
        /// Dish id or name.
        dish: String,

        /// Servings eaten at that slot.
        #[arg(short, long, default_value_t = 1)]
        servings: u32,

        /// Exact slot, e.g. "Wed-Lunch". Replaces what is there.
        #[arg(long)]
        slot: Option<SlotKey>,

        /// Use the first empty slot of this meal, Monday first.
        #[arg(long)]
        meal: Option<Meal>,
    },

    /// Spread leftover servings into empty slots.
    Balance {
        /// Report how many slots would be filled without saving anything.
        #[arg(long)]
        dry_run: bool,
    },

    /// List dishes with unplaced servings.
    Leftovers,

    /// Turn automatic balancing after each assignment on or off.
    AutoBalance {
        #[arg(value_enum)]
        mode: Toggle,
    },

    /// Remove every assignment from the week.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Export dishes and the week plan.
    Export {
        /// Output file.
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        out: PathBuf,

        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },

    /// Delete the stored plan. The next run starts from the sample dishes.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Show
    }
}
