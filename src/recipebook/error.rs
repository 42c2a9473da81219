use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    /// Unknown config key or a value the key does not accept.
    #[error("Config error: {0}")]
    Config(String),

    /// A session line that is not a valid command.
    #[error("Could not parse command: {0}")]
    Parse(String),

    /// A recipe change the catalog refused, e.g. a blank name.
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
