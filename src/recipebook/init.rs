use crate::api::{RecipeApi, RecipePaths};
use crate::config::RecipeConfig;
use crate::error::{RecipeError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable that overrides the platform data directory.
pub const HOME_ENV: &str = "RECIPEBOOK_HOME";

pub struct RecipeContext {
    pub api: RecipeApi<FileStore>,
    pub paths: RecipePaths,
}

/// Pick the data directory: an explicit path wins, then `RECIPEBOOK_HOME`,
/// then the platform data dir (e.g. `~/.local/share/recipebook`).
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("com", "recipebook", "recipebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RecipeError::Store("Could not determine data directory".to_string()))
}

pub fn initialize(explicit: Option<&Path>) -> Result<RecipeContext> {
    let data_dir = resolve_data_dir(explicit)?;
    if data_dir.exists() && !data_dir.is_dir() {
        return Err(RecipeError::Store(format!(
            "Data path is not a directory: {}",
            data_dir.display()
        )));
    }
    debug!(data_dir = %data_dir.display(), "using data directory");

    let config = RecipeConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        RecipeConfig::default()
    });

    let store = FileStore::new(data_dir.clone());
    let api = RecipeApi::open(store, config);

    Ok(RecipeContext {
        api,
        paths: RecipePaths { data_dir },
    })
}
