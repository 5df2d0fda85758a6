//! Error types for component operations

use std::error::Error;
use std::fmt;

use crate::component::LifecyclePhase;

/// Errors that can occur during component operations
#[derive(Debug)]
pub enum ComponentError {
    /// Error acquiring lock
    LockError(String),

    /// Invalid lifecycle transition
    InvalidLifecycleTransition(LifecyclePhase, String),

    /// Error updating component
    UpdateError(String),
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LockError(msg) => write!(f, "Lock error: {}", msg),
            Self::InvalidLifecycleTransition(phase, operation) => write!(
                f,
                "Invalid lifecycle transition: cannot {} while in {:?} phase",
                operation, phase
            ),
            Self::UpdateError(msg) => write!(f, "Error updating component: {}", msg),
        }
    }
}

impl Error for ComponentError {}

// Conversion into the crate-level error
impl From<ComponentError> for crate::Error {
    fn from(error: ComponentError) -> Self {
        crate::Error::Component(error.to_string())
    }
}
