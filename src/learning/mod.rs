//! Learning from experience
//!
//! Every decision the agent makes is stored as an (input, feedback) record
//! in a JSON file that survives restarts.

pub mod experience;

pub use experience::ExperienceLog;
