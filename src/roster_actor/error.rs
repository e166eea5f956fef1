use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur during roster operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound(String),
    #[error("Student {email} is already signed up for {activity}")]
    AlreadySignedUp { email: String, activity: String },
    #[error("Student {email} is not signed up for {activity}")]
    NotSignedUp { email: String, activity: String },
    #[error("Invalid activity catalog: {0}")]
    InvalidSeed(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ActivityError {
    /// The requested transition does not fit the current enrollment state.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadySignedUp { .. } | Self::NotSignedUp { .. })
    }
}

impl From<FrameworkError<ActivityError>> for ActivityError {
    fn from(err: FrameworkError<ActivityError>) -> Self {
        match err {
            FrameworkError::NotFound(name) => Self::NotFound(name),
            FrameworkError::Entity(e) => e,
            FrameworkError::DuplicateId(name) => Self::InvalidSeed(format!("duplicate activity {name}")),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                Self::ActorCommunicationError(e.to_string())
            }
        }
    }
}
