use serde::{Deserialize, Serialize};

use crate::planner::constants::DEFAULT_DISH_COLOR;

/// A reusable recipe with a fixed yield.
///
/// `color` is a display attribute only; the planner carries it through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,

    pub name: String,

    /// Total servings one preparation yields. Always >= 1.
    pub servings: u32,

    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_DISH_COLOR.to_string()
}

impl Dish {
    pub fn new(id: impl Into<String>, name: impl Into<String>, servings: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            servings,
            color: default_color(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// First letter of the name, used as a badge in listings.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_color_gets_default() {
        let json = r#"{"id": "d_abc1234", "name": "Chili", "servings": 8}"#;
        let dish: Dish = serde_json::from_str(json).unwrap();
        assert_eq!(dish.color, DEFAULT_DISH_COLOR);
        assert_eq!(dish.servings, 8);
    }

    #[test]
    fn test_initial() {
        assert_eq!(Dish::new("a", "roast chicken", 6).initial(), 'R');
        assert_eq!(Dish::new("b", "", 1).initial(), '?');
    }
}
