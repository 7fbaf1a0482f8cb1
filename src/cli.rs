//! CLI interface for quantum-assistant

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::agent::interactive;
use crate::agent::Agent;
use crate::config::Config;
use crate::learning::ExperienceLog;

#[derive(Parser)]
#[command(name = "quantum-assistant")]
#[command(about = "Bit-input decision agent with a persistent experience log", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive form (default when no command given)
    Form,
    /// Submit two bits once and print the decision
    Process {
        /// First bit (0 or 1)
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Second bit (0 or 1)
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Show the agent's experience log
    Experience,
    /// Show or reset configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Form) => {
            let mut agent = load_agent()?;
            interactive::run_form(&mut agent)?;
        }
        Some(Commands::Process { a, b }) => {
            let mut agent = load_agent()?;
            let submission = interactive::submit(&mut agent, &a, &b)?;
            interactive::print_submission(&submission);
        }
        Some(Commands::Experience) => {
            let config = Config::load()?;
            let log = ExperienceLog::open(&config.experience.file);
            interactive::print_experience(&log);
        }
        Some(Commands::Config { show, reset }) => {
            if reset {
                crate::config::reset_config()?;
            } else if show {
                crate::config::show_config()?;
            } else {
                println!("Configuration options:");
                println!("  --show     Display current configuration");
                println!("  --reset    Reset configuration to defaults");
            }
        }
    }

    Ok(())
}

fn load_agent() -> Result<Agent> {
    let config = Config::load()?;
    Agent::from_config(&config).context("Failed to initialize agent")
}
