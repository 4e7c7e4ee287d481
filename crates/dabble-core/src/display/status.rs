//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::store::StoreOutcome;

/// Wrapper type for displaying operation confirmation messages.
///
/// This provides consistent formatting for operations that require
/// user confirmation or status updates.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Feedback for a save or unsave request on the named craft.
    ///
    /// `saved` is the state the user asked for.
    pub fn for_save(outcome: StoreOutcome, name: &str, saved: bool) -> Self {
        match (outcome, saved) {
            (StoreOutcome::Changed, true) => Self::success(format!("Saved \"{name}\"")),
            (StoreOutcome::Changed, false) => {
                Self::success(format!("Removed \"{name}\" from saved crafts"))
            }
            (StoreOutcome::Unchanged, true) => {
                Self::success(format!("\"{name}\" is already saved"))
            }
            (StoreOutcome::Unchanged, false) => Self::success(format!("\"{name}\" was not saved")),
            (StoreOutcome::Failed, _) => {
                Self::failure(format!("Could not update saved crafts for \"{name}\""))
            }
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}
