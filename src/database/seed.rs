use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::models::Activity;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("could not read seed file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("could not parse seed file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("seed file {0} contains no activities")]
    Empty(String),
    #[error("activity {0:?} has max_participants = 0")]
    ZeroCapacity(String),
    #[error("activity {activity:?} lists {email:?} more than once")]
    DuplicateParticipant { activity: String, email: String },
}

pub fn default_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        Activity::new(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        Activity::new(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        Activity::new(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        Activity::new(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        Activity::new(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        Activity::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ]
}

/// Loads activities from a JSON object of `name -> record`.
pub fn load_activities(path: &Path) -> Result<Vec<Activity>, SeedError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: display.clone(),
        source,
    })?;
    parse_activities(&display, &raw)
}

fn parse_activities(path: &str, raw: &str) -> Result<Vec<Activity>, SeedError> {
    let parsed: BTreeMap<String, Activity> =
        serde_json::from_str(raw).map_err(|source| SeedError::Parse {
            path: path.to_string(),
            source,
        })?;
    if parsed.is_empty() {
        return Err(SeedError::Empty(path.to_string()));
    }

    let mut activities = Vec::with_capacity(parsed.len());
    for (name, mut activity) in parsed {
        if activity.max_participants == 0 {
            return Err(SeedError::ZeroCapacity(name));
        }
        for (i, email) in activity.participants.iter().enumerate() {
            if activity.participants[..i].contains(email) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name,
                    email: email.clone(),
                });
            }
        }
        if activity.participants.len() > activity.max_participants as usize {
            warn!(
                activity = %name,
                participants = activity.participants.len(),
                max_participants = activity.max_participants,
                "seeded activity is over capacity"
            );
        }
        activity.name = name;
        activities.push(activity);
    }
    Ok(activities)
}
