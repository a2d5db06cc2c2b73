// src/application/mod.rs
//
// Application Layer - page boundary
//
// ARCHITECTURE:
// - Translates environment events into service calls
// - Turns outcomes into user-visible feedback
// - Holds no business rules of its own

pub mod feedback;
pub mod page;

pub use feedback::UserFeedback;
pub use page::{PageEnvironment, PageInteractions};
