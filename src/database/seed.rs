use std::path::Path;

use serde_json::{Map, Value};

use crate::error::DirectoryError;
use crate::models::Activity;

/// The activities Mergington High School starts the term with.
pub fn mergington_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Basketball Team",
            "Join the school basketball team and compete in local leagues",
            "Wednesdays, 4:00 PM - 6:00 PM",
            15,
            &["alex@mergington.edu", "jordan@mergington.edu"],
        ),
        Activity::new(
            "Soccer Club",
            "Practice soccer skills and play friendly matches",
            "Saturdays, 10:00 AM - 12:00 PM",
            20,
            &["lucas@mergington.edu", "mia@mergington.edu"],
        ),
        Activity::new(
            "Art Workshop",
            "Explore painting, drawing, and sculpture techniques",
            "Thursdays, 3:30 PM - 5:00 PM",
            10,
            &["ava@mergington.edu", "liam@mergington.edu"],
        ),
        Activity::new(
            "Drama Club",
            "Act, direct, and produce school plays and performances",
            "Mondays, 4:00 PM - 5:30 PM",
            18,
            &["ella@mergington.edu", "noah@mergington.edu"],
        ),
        Activity::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Tuesdays, 4:00 PM - 5:30 PM",
            12,
            &["oliver@mergington.edu", "isabella@mergington.edu"],
        ),
        Activity::new(
            "Math Club",
            "Solve challenging math problems and prepare for competitions",
            "Fridays, 2:00 PM - 3:30 PM",
            16,
            &["ethan@mergington.edu", "charlotte@mergington.edu"],
        ),
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
    ]
}

/// Reads a JSON object of name -> activity record, the same shape
/// `GET /activities` returns. Key order is kept.
pub fn load_from_file(path: &Path) -> Result<Vec<Activity>, DirectoryError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DirectoryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_activities(&raw).map_err(|source| DirectoryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_activities(raw: &str) -> serde_json::Result<Vec<Activity>> {
    let records: Map<String, Value> = serde_json::from_str(raw)?;
    records
        .into_iter()
        .map(|(name, record)| -> serde_json::Result<Activity> {
            let mut activity: Activity = serde_json::from_value(record)?;
            activity.name = name;
            Ok(activity)
        })
        .collect()
}
