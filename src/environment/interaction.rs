// src/environment/interaction.rs
//
// User-facing primitives consumed by the submission flow.

use crate::domain::FormFields;

/// The native submit event of the contact form
#[cfg_attr(test, mockall::automock)]
pub trait SubmitEvent: Send + Sync {
    /// Suppress the environment's own navigation for this event
    fn prevent_default(&self);
}

/// The live form element
#[cfg_attr(test, mockall::automock)]
pub trait FormSource: Send + Sync {
    /// Current field values, copied
    fn snapshot(&self) -> FormFields;
}

/// Page navigation command
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}

/// Blocking acknowledgement shown to the user (an alert)
#[cfg_attr(test, mockall::automock)]
pub trait UserNotifier: Send + Sync {
    fn acknowledge(&self, message: &str);
}
