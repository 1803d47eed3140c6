use std::path::PathBuf;

use thiserror::Error;

use crate::services::schedule_service::ScheduleError;

/// Start-up failures. All of these are fatal.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Activity directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}

/// Problems with the activity data detected while loading the directory.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Duplicate activity name: {0}")]
    DuplicateActivity(String),

    #[error("Activity {0:?} must allow at least one participant")]
    ZeroCapacity(String),

    #[error("Activity {activity:?} lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },

    #[error("Activity {activity:?}: {source}")]
    InvalidSchedule {
        activity: String,
        #[source]
        source: ScheduleError,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejections from the signup workflow, in guard order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Cannot sign up {email} for {activity}: schedule overlaps with {conflicting}.")]
    ScheduleConflict {
        email: String,
        activity: String,
        conflicting: String,
    },
}
