use std::collections::HashSet;
use crate::actor_framework::Entity;
use crate::domain::Activity;
use super::actions::{RosterAction, RosterActionResult};
use super::error::ActivityError;

impl Entity for Activity {
    type Id = String;
    type Action = RosterAction;
    type ActionResult = RosterActionResult;
    type Error = ActivityError;

    fn id(&self) -> &String { &self.name }

    fn handle_action(&mut self, action: RosterAction) -> Result<RosterActionResult, ActivityError> {
        match action {
            RosterAction::Signup(email) => {
                if self.is_enrolled(&email) {
                    return Err(ActivityError::AlreadySignedUp { email, activity: self.name.clone() });
                }
                // max_participants is advisory only
                self.participants.push(email);
                Ok(RosterActionResult::SignedUp)
            }
            RosterAction::Unregister(email) => {
                match self.participants.iter().position(|p| *p == email) {
                    Some(index) => {
                        self.participants.remove(index);
                        Ok(RosterActionResult::Unregistered)
                    }
                    None => Err(ActivityError::NotSignedUp { email, activity: self.name.clone() }),
                }
            }
        }
    }
}

/// Checks a full catalog before it replaces the live one.
pub fn validate_catalog(activities: &[Activity]) -> Result<(), ActivityError> {
    let mut names = HashSet::new();
    for activity in activities {
        if activity.name.is_empty() {
            return Err(ActivityError::InvalidSeed("activity with empty name".to_string()));
        }
        if !names.insert(activity.name.as_str()) {
            return Err(ActivityError::InvalidSeed(format!("duplicate activity {}", activity.name)));
        }
        if activity.max_participants == 0 {
            return Err(ActivityError::InvalidSeed(format!("{} has max_participants 0", activity.name)));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = activity.participants.iter().find(|p| !seen.insert(*p)) {
            return Err(ActivityError::InvalidSeed(format!("{dup} listed twice in {}", activity.name)));
        }
    }
    Ok(())
}
