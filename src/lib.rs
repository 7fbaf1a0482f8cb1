//! Quantum Assistant Library
//!
//! A toy decision agent:
//! - XOR gate over two input bits
//! - Neuron with coin-flip weights and sigmoid activation
//! - Uniform choice over a fixed label set
//! - Experience log persisted as a JSON array
//!
//! # Example
//!
//! ```no_run
//! use quantum_assistant::{Agent, BitPair, Config};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let mut agent = Agent::from_config(&config)?;
//!     let outcome = agent.process_input(BitPair::new(0, 1)?)?;
//!     println!("{}", outcome.choice);
//!     Ok(())
//! }
//! ```

// Core modules
pub mod types;
pub mod logic;
pub mod neuron;
pub mod decision;
pub mod learning;
pub mod agent;
pub mod config;
pub mod cli;
pub mod logging;

// Re-export commonly used types for convenience
pub use agent::{Agent, Outcome};
pub use config::Config;
pub use decision::ChoiceSelector;
pub use learning::ExperienceLog;
pub use logic::{GateOp, LogicGate};
pub use neuron::Neuron;
pub use types::{BitPair, ExperienceRecord, Feedback, InputError};
