use tracing::{info, warn};

use crate::database::activity_repo::{self, DeleteOutcome, InsertOutcome};
use crate::database::ActivityStore;
use crate::error::ActivityError;
use crate::models::{Catalog, SignupRequest};

pub fn list_activities(store: &ActivityStore) -> Catalog {
    activity_repo::list_activities(store)
}

/// Adds a participant to an activity's roster.
///
/// Capacity is not enforced: `max_participants` is informational.
pub fn sign_up(
    store: &ActivityStore,
    activity_name: &str,
    request: SignupRequest,
) -> Result<String, ActivityError> {
    let email = request.email.clone();
    match activity_repo::insert_participant(store, activity_name, request.into()) {
        InsertOutcome::Inserted { roster_size } => {
            info!(activity = %activity_name, email = %email, roster_size, "participant signed up");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        InsertOutcome::ActivityMissing => {
            warn!(activity = %activity_name, "signup for unknown activity");
            Err(ActivityError::ActivityNotFound)
        }
        InsertOutcome::Duplicate => {
            warn!(activity = %activity_name, email = %email, "duplicate signup rejected");
            Err(ActivityError::AlreadySignedUp)
        }
    }
}

pub fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    match activity_repo::delete_participant(store, activity_name, email) {
        DeleteOutcome::Deleted(participant) => {
            info!(
                activity = %activity_name,
                email = %participant.email,
                name = %participant.name,
                "participant unregistered"
            );
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        DeleteOutcome::ActivityMissing => {
            warn!(activity = %activity_name, "unregister from unknown activity");
            Err(ActivityError::ActivityNotFound)
        }
        DeleteOutcome::ParticipantMissing => {
            warn!(activity = %activity_name, email = %email, "unregister of unknown participant");
            Err(ActivityError::ParticipantNotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_EMAIL: &str = "testuser@mergington.edu";

    fn test_user() -> SignupRequest {
        SignupRequest {
            name: "Test User".to_string(),
            email: TEST_EMAIL.to_string(),
        }
    }

    fn roster_len(store: &ActivityStore, name: &str) -> usize {
        store.read(|c| c.get(name).unwrap().participants.len())
    }

    #[test]
    fn soccer_team_scenario() {
        let store = ActivityStore::seeded();
        assert_eq!(roster_len(&store, "Soccer Team"), 2);

        let msg = sign_up(&store, "Soccer Team", test_user()).unwrap();
        assert_eq!(msg, "Signed up testuser@mergington.edu for Soccer Team");
        assert_eq!(roster_len(&store, "Soccer Team"), 3);

        let dup = sign_up(&store, "Soccer Team", test_user());
        assert_eq!(dup, Err(ActivityError::AlreadySignedUp));
        assert_eq!(roster_len(&store, "Soccer Team"), 3);

        let msg = unregister(&store, "Soccer Team", TEST_EMAIL).unwrap();
        assert_eq!(msg, "Unregistered testuser@mergington.edu from Soccer Team");
        assert_eq!(roster_len(&store, "Soccer Team"), 2);

        let again = unregister(&store, "Soccer Team", TEST_EMAIL);
        assert_eq!(again, Err(ActivityError::ParticipantNotFound));
    }

    #[test]
    fn round_trip_restores_roster() {
        let store = ActivityStore::seeded();
        let before = list_activities(&store);

        sign_up(&store, "Debate Team", test_user()).unwrap();
        unregister(&store, "Debate Team", TEST_EMAIL).unwrap();

        assert_eq!(list_activities(&store), before);
    }

    #[test]
    fn unknown_activity_is_not_found_and_nothing_changes() {
        let store = ActivityStore::seeded();
        let before = list_activities(&store);

        assert_eq!(
            sign_up(&store, "Nonexistent Club", test_user()),
            Err(ActivityError::ActivityNotFound)
        );
        assert_eq!(
            unregister(&store, "Nonexistent Club", TEST_EMAIL),
            Err(ActivityError::ActivityNotFound)
        );
        assert_eq!(list_activities(&store), before);
    }

    #[test]
    fn activity_names_are_matched_exactly() {
        let store = ActivityStore::seeded();
        assert_eq!(
            sign_up(&store, "soccer team", test_user()),
            Err(ActivityError::ActivityNotFound)
        );
    }

    #[test]
    fn same_email_may_join_several_activities() {
        let store = ActivityStore::seeded();
        sign_up(&store, "Chess Club", test_user()).unwrap();
        sign_up(&store, "Art Studio", test_user()).unwrap();

        let catalog = list_activities(&store);
        assert!(catalog.get("Chess Club").unwrap().has_participant(TEST_EMAIL));
        assert!(catalog.get("Art Studio").unwrap().has_participant(TEST_EMAIL));
    }

    #[test]
    fn signup_beyond_capacity_is_accepted() {
        // Known gap: max_participants is stored but not enforced.
        let store = ActivityStore::seeded();
        let capacity = store.read(|c| c.get("Chess Club").unwrap().max_participants) as usize;

        for i in 0..capacity {
            let req = SignupRequest {
                name: format!("Player {i}"),
                email: format!("player{i}@mergington.edu"),
            };
            sign_up(&store, "Chess Club", req).unwrap();
        }
        assert!(roster_len(&store, "Chess Club") > capacity);
    }
}
