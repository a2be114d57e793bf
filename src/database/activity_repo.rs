use super::ActivityStore;
use crate::models::{Catalog, Participant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted { roster_size: usize },
    ActivityMissing,
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Participant),
    ActivityMissing,
    ParticipantMissing,
}

/// Snapshot of the full catalog.
pub fn list_activities(store: &ActivityStore) -> Catalog {
    store.read(Catalog::clone)
}

pub fn insert_participant(
    store: &ActivityStore,
    activity_name: &str,
    participant: Participant,
) -> InsertOutcome {
    store.write(|catalog| {
        let Some(activity) = catalog.get_mut(activity_name) else {
            return InsertOutcome::ActivityMissing;
        };
        if activity.has_participant(&participant.email) {
            return InsertOutcome::Duplicate;
        }
        // max_participants is advisory only; no capacity check here.
        activity.participants.push(participant);
        InsertOutcome::Inserted {
            roster_size: activity.participants.len(),
        }
    })
}

pub fn delete_participant(store: &ActivityStore, activity_name: &str, email: &str) -> DeleteOutcome {
    store.write(|catalog| {
        let Some(activity) = catalog.get_mut(activity_name) else {
            return DeleteOutcome::ActivityMissing;
        };
        match activity.position_of(email) {
            Some(idx) => DeleteOutcome::Deleted(activity.participants.remove(idx)),
            None => DeleteOutcome::ParticipantMissing,
        }
    })
}
