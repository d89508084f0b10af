//! Job identity, lifecycle state, and the per-job runner

pub mod description;
pub mod runner;
pub mod state;

pub use description::JobDescription;
pub use state::{JobOutcome, JobSnapshot, JobState};
