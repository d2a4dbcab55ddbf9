use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Activity;

pub type ActivityMap = BTreeMap<String, Activity>;

/// In-memory roster of all activities, keyed by activity name.
///
/// Cloning the store clones the handle, not the data.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    activities: Arc<RwLock<ActivityMap>>,
}

impl RosterStore {
    pub fn new(activities: impl IntoIterator<Item = Activity>) -> Self {
        let activities = activities
            .into_iter()
            .map(|activity| (activity.name.clone(), activity))
            .collect();
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    /// Snapshot of every activity, ordered by name.
    pub async fn list_activities(&self) -> ActivityMap {
        self.activities.read().await.clone()
    }

    /// Runs `f` against the named activity while holding the write lock.
    /// Returns `None` if no activity has that name.
    pub async fn update<R>(&self, name: &str, f: impl FnOnce(&mut Activity) -> R) -> Option<R> {
        let mut activities = self.activities.write().await;
        activities.get_mut(name).map(f)
    }
}

#[cfg(test)]
impl RosterStore {
    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }
}
