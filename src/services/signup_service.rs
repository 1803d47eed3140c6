use serde::Serialize;

use crate::database::activities_repo::ActivityDirectory;
use crate::error::SignupError;
use crate::models::Activity;
use crate::services::schedule_service;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupReceipt {
    pub message: String,
}

pub async fn sign_up(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<SignupReceipt, SignupError> {
    let mut activities = directory.write().await;
    enroll(&mut activities, activity_name, email)
}

/// Runs the signup guards in order and appends the email when all pass.
///
/// Capacity is not checked here; `max_participants` is informational.
pub fn enroll(
    activities: &mut [Activity],
    activity_name: &str,
    email: &str,
) -> Result<SignupReceipt, SignupError> {
    let target = activities
        .iter()
        .position(|a| a.name == activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    if activities[target].has_participant(email) {
        return Err(SignupError::AlreadySignedUp);
    }

    let schedule = &activities[target].schedule;
    if let Some(other) = activities
        .iter()
        .enumerate()
        .filter(|(i, a)| *i != target && a.has_participant(email))
        .map(|(_, a)| a)
        .find(|a| schedule_service::collides(schedule, &a.schedule))
    {
        tracing::info!(
            email = %email,
            activity = %activity_name,
            conflicting = %other.name,
            "signup rejected: schedule collision"
        );
        return Err(SignupError::ScheduleConflict {
            email: email.to_string(),
            activity: activity_name.to_string(),
            conflicting: other.name.clone(),
        });
    }

    activities[target].participants.push(email.to_string());
    tracing::info!(email = %email, activity = %activity_name, "signed up");
    Ok(SignupReceipt {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::mergington_activities;

    fn participants<'a>(activities: &'a [Activity], name: &str) -> &'a [String] {
        &activities
            .iter()
            .find(|a| a.name == name)
            .unwrap()
            .participants
    }

    #[test]
    fn unknown_activity_is_not_found() {
        let mut activities = mergington_activities();
        assert_eq!(
            enroll(&mut activities, "Underwater Basket Weaving", "new@mergington.edu"),
            Err(SignupError::ActivityNotFound)
        );
    }

    #[test]
    fn new_student_joins_chess_club_once() {
        let mut activities = mergington_activities();
        let receipt = enroll(&mut activities, "Chess Club", "new@mergington.edu").unwrap();
        assert_eq!(receipt.message, "Signed up new@mergington.edu for Chess Club");
        let chess = participants(&activities, "Chess Club");
        assert_eq!(chess.iter().filter(|p| *p == "new@mergington.edu").count(), 1);
        assert_eq!(chess.last().unwrap(), "new@mergington.edu");
    }

    #[test]
    fn repeat_signup_is_rejected_and_roster_unchanged() {
        let mut activities = mergington_activities();
        enroll(&mut activities, "Chess Club", "new@mergington.edu").unwrap();
        let before = participants(&activities, "Chess Club").len();
        assert_eq!(
            enroll(&mut activities, "Chess Club", "new@mergington.edu"),
            Err(SignupError::AlreadySignedUp)
        );
        assert_eq!(participants(&activities, "Chess Club").len(), before);
    }

    #[test]
    fn duplicate_check_runs_before_collision_check() {
        let mut activities = mergington_activities();
        assert_eq!(
            enroll(&mut activities, "Basketball Team", "alex@mergington.edu"),
            Err(SignupError::AlreadySignedUp)
        );
    }

    #[test]
    fn overlapping_schedule_is_rejected() {
        let mut activities = mergington_activities();
        activities.push(Activity::new(
            "Jazz Band",
            "Rehearse for the spring concert",
            "Wednesdays, 5:00 PM - 5:30 PM",
            25,
            &[],
        ));
        let err = enroll(&mut activities, "Jazz Band", "alex@mergington.edu").unwrap_err();
        assert_eq!(
            err,
            SignupError::ScheduleConflict {
                email: "alex@mergington.edu".to_string(),
                activity: "Jazz Band".to_string(),
                conflicting: "Basketball Team".to_string(),
            }
        );
        assert!(participants(&activities, "Jazz Band").is_empty());
    }

    #[test]
    fn back_to_back_activities_are_allowed() {
        let mut activities = mergington_activities();
        // Math Club ends at 3:30 PM on Fridays, Chess Club starts at 3:30 PM.
        enroll(&mut activities, "Chess Club", "ethan@mergington.edu").unwrap();
        assert!(participants(&activities, "Chess Club").contains(&"ethan@mergington.edu".to_string()));
    }

    #[test]
    fn gym_class_days_are_checked() {
        let mut activities = mergington_activities();
        // Gym Class runs Fridays 2:00-3:00 PM, Math Club Fridays 2:00-3:30 PM.
        let err = enroll(&mut activities, "Math Club", "john@mergington.edu").unwrap_err();
        assert!(matches!(
            err,
            SignupError::ScheduleConflict { ref conflicting, .. } if conflicting == "Gym Class"
        ));
    }

    #[test]
    fn singular_day_schedule_still_collides() {
        let mut activities = mergington_activities();
        activities.push(Activity::new(
            "Choir",
            "Sing in the school choir",
            "Monday, 4:30 PM - 5:00 PM",
            30,
            &[],
        ));
        // Drama Club runs Mondays 4:00-5:30 PM.
        let err = enroll(&mut activities, "Choir", "ella@mergington.edu").unwrap_err();
        assert!(matches!(
            err,
            SignupError::ScheduleConflict { ref conflicting, .. } if conflicting == "Drama Club"
        ));
    }

    #[test]
    fn capacity_is_not_enforced() {
        let mut activities = vec![Activity::new(
            "Tiny Club",
            "One seat only",
            "Mondays, 1:00 PM - 2:00 PM",
            1,
            &["first@mergington.edu"],
        )];
        enroll(&mut activities, "Tiny Club", "second@mergington.edu").unwrap();
        assert_eq!(activities[0].participants.len(), 2);
        assert!(activities[0].participants.len() > activities[0].max_participants as usize);
    }

    #[tokio::test]
    async fn sign_up_mutates_shared_directory() {
        let directory = ActivityDirectory::load(mergington_activities()).unwrap();
        sign_up(&directory, "Soccer Club", "new@mergington.edu")
            .await
            .unwrap();
        let soccer = directory.get("Soccer Club").await.unwrap();
        assert_eq!(soccer.participants.len(), 3);
    }
}
