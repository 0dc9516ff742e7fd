/// Color given to a dish when none is supplied.
pub const DEFAULT_DISH_COLOR: &str = "#34D399";

/// Servings per slot placed by the auto-balancer.
pub const BALANCE_SERVINGS_PER_SLOT: u32 = 1;

/// Default file for the persisted plan state.
pub const DEFAULT_STATE_FILE: &str = "prepmate_state.json";

/// Default file name for plan exports.
pub const DEFAULT_EXPORT_FILE: &str = "prepmate-plan.json";

/// Prefix of generated dish identifiers.
pub const DISH_ID_PREFIX: &str = "d_";

/// Random characters following the prefix in a dish identifier.
pub const DISH_ID_LEN: usize = 7;

/// Minimum Jaro-Winkler similarity for a fuzzy dish-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Dishes seeded into a fresh plan: (name, servings, color).
pub const SAMPLE_DISHES: [(&str, u32, &str); 3] = [
    ("Roast Chicken", 6, "#F97316"),
    ("Veggie Pasta", 4, "#10B981"),
    ("Hearty Salad", 2, "#06B6D4"),
];
