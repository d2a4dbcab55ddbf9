use serde::{Deserialize, Serialize};

/// One extracurricular activity and its roster.
///
/// The name is the key of the roster mapping, so it is not part of the JSON
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_name() {
        let activity = Activity::new("Chess Club", "Chess", "Fridays", 2, &["a@example.com"]);
        let value = serde_json::to_value(&activity).unwrap();

        assert!(value.get("name").is_none());
        assert_eq!(value["max_participants"], 2);
        assert_eq!(value["participants"][0], "a@example.com");
    }

    #[test]
    fn capacity_helpers() {
        let mut activity = Activity::new("Chess Club", "Chess", "Fridays", 2, &["a@example.com"]);
        assert!(!activity.is_full());
        assert!(activity.has_participant("a@example.com"));

        activity.participants.push("b@example.com".to_string());
        assert!(activity.is_full());

        activity.participants.push("c@example.com".to_string());
        assert!(activity.is_full());
    }
}
