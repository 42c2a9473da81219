//! # Command Layer
//!
//! One module per store operation. Every command takes the [`RecipeBook`]
//! (by `&` or `&mut`) plus its arguments and returns a [`CmdResult`].
//!
//! Commands never touch storage and never fail: invalid input and unknown ids
//! are reported through [`CmdMessage`]s, not errors. Whether the primary
//! collection changed is reported through [`CmdResult::primary_changed`] so
//! the API facade can write it through to storage.
//!
//! [`RecipeBook`]: crate::book::RecipeBook

use crate::config::RecipeConfig;
use crate::model::Recipe;
use std::path::PathBuf;

pub mod commit;
pub mod config;
pub mod delete;
pub mod draft;
pub mod edit;
pub mod query;
pub mod search;

/// Locations the API works against.
#[derive(Debug, Clone)]
pub struct RecipePaths {
    /// Directory holding `config.json` and, for the file store, the data.
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_recipes: Vec<Recipe>,
    pub listed_recipes: Vec<Recipe>,
    pub config: Option<RecipeConfig>,
    pub messages: Vec<CmdMessage>,
    /// Set when the primary collection was modified and needs saving.
    pub primary_changed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }

    pub fn with_config(mut self, config: RecipeConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
