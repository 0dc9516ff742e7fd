use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use crate::models::{Dish, PlanState, Settings};
use crate::planner::constants::SAMPLE_DISHES;
use crate::state::ids::new_dish_id;

/// Where plan state lives between sessions.
///
/// Loading never fails: missing or unreadable data yields a fresh sample
/// state. Saving reports success as a flag so callers can warn without
/// disturbing the in-memory plan.
pub trait PlanStore {
    fn load(&self) -> PlanState;

    fn save(&self, state: &PlanState) -> bool;

    fn clear(&self) -> bool;
}

/// A starter library of three dishes with an empty week.
pub fn sample_state() -> PlanState {
    let mut state = PlanState {
        settings: Settings::default(),
        ..Default::default()
    };
    for (name, servings, color) in SAMPLE_DISHES {
        let id = new_dish_id(&state);
        state
            .dishes
            .push(Dish::new(id, name, servings).with_color(color));
    }
    state
}

/// Plan state stored as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file, `None` when absent or corrupt.
    fn read_state(&self) -> Option<PlanState> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored plan");
                return None;
            }
            Err(e) => {
                warn!(path = %self.path.display(), err = %e, "failed to read stored plan");
                return None;
            }
        };

        match serde_json::from_str::<PlanState>(&content) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(path = %self.path.display(), err = %e, "stored plan is corrupt, starting over");
                None
            }
        }
    }
}

impl PlanStore for JsonFileStore {
    fn load(&self) -> PlanState {
        match self.read_state() {
            Some(mut state) if !state.dishes.is_empty() => {
                let fixes = state.normalize();
                if fixes > 0 {
                    warn!(fixes, "repaired invalid values in stored plan");
                }
                state
            }
            _ => {
                let sample = sample_state();
                self.save(&sample);
                sample
            }
        }
    }

    fn save(&self, state: &PlanState) -> bool {
        let json = match serde_json::to_string_pretty(state) {
            Ok(json) => json,
            Err(e) => {
                error!(err = %e, "failed to serialize plan");
                return false;
            }
        };

        match fs::write(&self.path, json) {
            Ok(()) => true,
            Err(e) => {
                error!(path = %self.path.display(), err = %e, "save failed");
                false
            }
        }
    }

    fn clear(&self) -> bool {
        match fs::remove_file(&self.path) {
            Ok(()) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => {
                error!(path = %self.path.display(), err = %e, "failed to clear stored plan");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Day, Meal, SlotKey};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_missing_file_loads_and_persists_sample() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let store = JsonFileStore::new(&path);

        let state = store.load();
        assert_eq!(state.dishes.len(), SAMPLE_DISHES.len());
        assert_eq!(state.dishes[0].name, "Roast Chicken");
        assert_eq!(state.dishes[0].servings, 6);
        assert!(state.plan.is_empty());
        assert!(state.settings.auto_balance);
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_loads_sample() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let state = JsonFileStore::new(file.path()).load();
        assert_eq!(state.dishes.len(), SAMPLE_DISHES.len());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        let store = JsonFileStore::new(file.path());

        let mut state = sample_state();
        state.settings.auto_balance = false;
        let id = state.dishes[1].id.clone();
        state.plan.insert(
            SlotKey::new(Day::Sat, Meal::Dinner),
            Assignment::new(id.as_str(), 2),
        );

        assert!(store.save(&state));
        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_load_normalizes() {
        let json = r#"{
            "dishes": [{"id": "d_1", "name": "Soup", "servings": 0}],
            "plan": {"Mon-Lunch": {"dishId": "d_1", "servings": 0}}
        }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let state = JsonFileStore::new(file.path()).load();
        assert_eq!(state.dishes[0].servings, 1);
        assert_eq!(state.plan.servings_for("d_1"), 1);
    }

    #[test]
    fn test_save_to_unwritable_path_reports_failure() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing").join("state.json"));
        assert!(!store.save(&PlanState::default()));
    }

    #[test]
    fn test_clear_removes_file() {
        let file = NamedTempFile::new().unwrap();
        let store = JsonFileStore::new(file.path());
        assert!(store.save(&sample_state()));

        assert!(store.clear());
        assert!(!file.path().exists());
        assert!(store.clear());
    }
}
