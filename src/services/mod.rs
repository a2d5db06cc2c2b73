// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod rate_limiter;
pub mod scroll_effects;
pub mod submission_controller;
pub mod visibility_effects;


pub use rate_limiter::RateLimiter;

pub use scroll_effects::{ScrollEffects, ScrollReport};

pub use submission_controller::SubmissionController;

pub use visibility_effects::VisibilityEffects;
