//! Quantum Assistant - bit-input decision agent
//!
//! Terminal front end over the library pipeline.

use quantum_assistant::{cli, logging};

fn main() -> anyhow::Result<()> {
    // WARN level by default, use RUST_LOG=info for pipeline traces
    logging::init();

    cli::run()
}
