pub mod cycle;
pub mod outcome;

pub use cycle::{SubmissionCycle, SubmissionState};
pub use outcome::SubmissionOutcome;
