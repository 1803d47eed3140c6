use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockWriteGuard};

use crate::error::DirectoryError;
use crate::models::Activity;
use crate::services::schedule_service;

/// In-memory activity directory, kept in seed order.
///
/// Cloning shares the underlying store. Writers hold the lock for the whole
/// check-then-append sequence of a signup.
#[derive(Clone, Debug, Default)]
pub struct ActivityDirectory {
    inner: Arc<RwLock<Vec<Activity>>>,
}

impl ActivityDirectory {
    /// Builds the directory, rejecting data the signup checks could not rely on.
    pub fn load(activities: Vec<Activity>) -> Result<Self, DirectoryError> {
        validate(&activities)?;
        tracing::info!(count = activities.len(), "activity directory loaded");
        Ok(Self {
            inner: Arc::new(RwLock::new(activities)),
        })
    }

    pub async fn list(&self) -> Vec<Activity> {
        self.inner.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.inner
            .read()
            .await
            .iter()
            .find(|a| a.name == name)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Vec<Activity>> {
        self.inner.write().await
    }
}

fn validate(activities: &[Activity]) -> Result<(), DirectoryError> {
    let mut names = HashSet::new();
    for activity in activities {
        if !names.insert(activity.name.as_str()) {
            return Err(DirectoryError::DuplicateActivity(activity.name.clone()));
        }
        if activity.max_participants == 0 {
            return Err(DirectoryError::ZeroCapacity(activity.name.clone()));
        }
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(DirectoryError::DuplicateParticipant {
                    activity: activity.name.clone(),
                    email: email.clone(),
                });
            }
        }
        schedule_service::validate_schedule(&activity.schedule).map_err(|source| {
            DirectoryError::InvalidSchedule {
                activity: activity.name.clone(),
                source,
            }
        })?;
        if activity.is_full() {
            tracing::warn!(activity = %activity.name, "activity seeded at or over capacity");
        }
    }
    Ok(())
}
