//! Configuration management
//!
//! Manages the experience file location, the decision labels and the planner goals.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Experience log settings
    #[serde(default)]
    pub experience: ExperienceConfig,
    /// Decision labels
    #[serde(default)]
    pub decision: DecisionConfig,
    /// Planner settings
    #[serde(default)]
    pub agent: AgentConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceConfig {
    /// Backing file for the experience log, relative to the working directory
    #[serde(default = "default_experience_file")]
    pub file: PathBuf,
}

fn default_experience_file() -> PathBuf {
    PathBuf::from("experience.json")
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            file: default_experience_file(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionConfig {
    /// Labels the agent picks from
    #[serde(default = "default_options")]
    pub options: Vec<String>,
    /// Label that earns positive feedback
    #[serde(default = "default_preferred")]
    pub preferred: String,
}

fn default_options() -> Vec<String> {
    vec![
        "ответ A".to_string(),
        "ответ B".to_string(),
        "ответ C".to_string(),
    ]
}

fn default_preferred() -> String {
    "ответ A".to_string()
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            options: default_options(),
            preferred: default_preferred(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Goals reported by the planner, first one is the active goal
    #[serde(default = "default_goals")]
    pub goals: Vec<String>,
}

fn default_goals() -> Vec<String> {
    vec![
        "Улучшать ответы".to_string(),
        "Понимать пользователя".to_string(),
    ]
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            goals: default_goals(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .context("Failed to read config file")?;
            let config: Config = toml::from_str(&contents)
                .context("Failed to parse config file")?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent()
            .context("Config path has no parent")?;

        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Check the decision labels are usable
    pub fn validate(&self) -> Result<()> {
        if self.decision.options.is_empty() {
            anyhow::bail!("decision.options must not be empty");
        }
        if !self.decision.options.contains(&self.decision.preferred) {
            anyhow::bail!(
                "decision.preferred '{}' is not one of: {}",
                self.decision.preferred,
                self.decision.options.join(", ")
            );
        }
        Ok(())
    }
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "quantum-assistant", "quantum-assistant")
        .context("Failed to get project directories")?;
    Ok(base.config_dir().join("config.toml"))
}

/// Show current configuration
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Configuration ({})", config_path()?.display());
    println!("  experience file: {}", config.experience.file.display());
    println!("  options:         {}", config.decision.options.join(", "));
    println!("  preferred:       {}", config.decision.preferred);
    println!("  goals:           {}", config.agent.goals.join(", "));

    Ok(())
}

/// Reset configuration to defaults
pub fn reset_config() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults.");
    Ok(())
}
