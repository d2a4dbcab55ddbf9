use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, info};

use crate::database::activities_repo::{ActivityMap, RosterStore};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
    #[error("Activity is full")]
    ActivityFull,
}

/// Whether `max_participants` caps signups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    #[default]
    Ignore,
    Enforce,
}

impl FromStr for CapacityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "enforce" => Ok(Self::Enforce),
            other => Err(format!(
                "unknown capacity policy {other:?} (expected \"ignore\" or \"enforce\")"
            )),
        }
    }
}

pub async fn list_activities(store: &RosterStore) -> ActivityMap {
    store.list_activities().await
}

pub async fn signup(
    store: &RosterStore,
    policy: CapacityPolicy,
    activity_name: &str,
    email: &str,
) -> Result<String, RosterError> {
    let result = store
        .update(activity_name, |activity| -> Result<(), RosterError> {
            if activity.has_participant(email) {
                return Err(RosterError::AlreadySignedUp);
            }
            if policy == CapacityPolicy::Enforce && activity.is_full() {
                return Err(RosterError::ActivityFull);
            }
            activity.participants.push(email.to_string());
            Ok(())
        })
        .await
        .unwrap_or(Err(RosterError::NotFound));

    match result {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "participant signed up");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            debug!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

pub async fn unregister(
    store: &RosterStore,
    activity_name: &str,
    email: &str,
) -> Result<String, RosterError> {
    let result = store
        .update(activity_name, |activity| -> Result<(), RosterError> {
            let pos = activity
                .participants
                .iter()
                .position(|p| p == email)
                .ok_or(RosterError::NotSignedUp)?;
            activity.participants.remove(pos);
            Ok(())
        })
        .await
        .unwrap_or(Err(RosterError::NotFound));

    match result {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "participant unregistered");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            debug!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            Err(e)
        }
    }
}
