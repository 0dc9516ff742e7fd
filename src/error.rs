use thiserror::Error;

use crate::models::Meal;

#[derive(Debug, Error)]
pub enum PrepError {
    #[error("Dish not found: {0}")]
    DishNotFound(String),

    #[error("No empty {meal} slots available. Choose a specific slot.")]
    NoCapacity { meal: Meal },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, PrepError>;
