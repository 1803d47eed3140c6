pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod web;

use crate::config::Config;
use crate::database::{activities_repo::ActivityDirectory, seed};
use crate::error::DirectoryError;

/// Loads the directory from `ACTIVITIES_FILE` when configured, else the built-in seed.
pub fn load_directory(config: &Config) -> Result<ActivityDirectory, DirectoryError> {
    let activities = match &config.activities_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading activities from file");
            seed::load_from_file(path)?
        }
        None => seed::mergington_activities(),
    };
    ActivityDirectory::load(activities)
}
