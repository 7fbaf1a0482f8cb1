//! Agent module - the bit-input decision pipeline
//!
//! XOR gate → coin-weight neuron → planner → uniform choice → experience log.
//! Only the choice reaches the caller and the log; the gate, neuron and plan
//! are computed and logged but do not steer the decision.

pub mod planner;
pub mod interactive;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::Config;
use crate::decision::ChoiceSelector;
use crate::learning::ExperienceLog;
use crate::logic::LogicGate;
use crate::neuron::Neuron;
use crate::types::{BitPair, ExperienceRecord, Feedback};
use planner::{DecisionContext, Planner};

/// Everything one pipeline run produced
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub input: BitPair,
    pub logic: u8,
    pub activation: f64,
    pub plan: &'static str,
    /// The chosen label, what the caller displays
    pub choice: String,
    pub feedback: Feedback,
}

pub struct Agent {
    logic: LogicGate,
    neuron: Neuron,
    planner: Planner,
    selector: ChoiceSelector,
    preferred: String,
    experience: ExperienceLog,
    rng: StdRng,
}

impl Agent {
    /// Build an agent from configuration, loading the experience file it names
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_config_with_rng(config, StdRng::from_os_rng())
    }

    /// Same as [`Agent::from_config`] with a deterministic random source
    pub fn from_config_seeded(config: &Config, seed: u64) -> Result<Self> {
        Self::from_config_with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_config_with_rng(config: &Config, mut rng: StdRng) -> Result<Self> {
        config.validate()?;
        let neuron = Neuron::with_rng(2, &mut rng);
        let selector = ChoiceSelector::new(config.decision.options.iter().cloned())
            .context("Invalid decision options")?;
        Ok(Self {
            logic: LogicGate,
            neuron,
            planner: Planner::new(config.agent.goals.clone()),
            selector,
            preferred: config.decision.preferred.clone(),
            experience: ExperienceLog::open(&config.experience.file),
            rng,
        })
    }

    /// Assemble an agent from prepared parts
    pub fn with_components(
        neuron: Neuron,
        selector: ChoiceSelector,
        preferred: impl Into<String>,
        planner: Planner,
        experience: ExperienceLog,
        rng: StdRng,
    ) -> Self {
        Self {
            logic: LogicGate,
            neuron,
            planner,
            selector,
            preferred: preferred.into(),
            experience,
            rng,
        }
    }

    /// Run the pipeline for one input and record the experience
    pub fn process_input(&mut self, input: BitPair) -> Result<Outcome> {
        let logic = self.logic.xor(input.a(), input.b());
        info!("XOR: {} ^ {} = {}", input.a(), input.b(), logic);

        let activation = self.neuron.activate(&input.to_vector())
            .context("Neuron activation failed")?;
        info!("Neuron activation: {:.4}", activation);

        let context = DecisionContext { logic, neuron: activation };
        let plan = self.planner.plan_action(&context);

        let choice = self.selector.choose_with(&mut self.rng).to_string();
        info!("Decision: {}", choice);

        let feedback = Feedback::for_choice(&choice, &self.preferred);
        self.experience.append(ExperienceRecord::new(input, feedback));

        Ok(Outcome {
            input,
            logic,
            activation,
            plan,
            choice,
            feedback,
        })
    }

    pub fn experience(&self) -> &ExperienceLog {
        &self.experience
    }

    pub fn neuron(&self) -> &Neuron {
        &self.neuron
    }

    pub fn options(&self) -> &[String] {
        self.selector.options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neuron::sigmoid;
    use tempfile::TempDir;

    fn agent_in(dir: &TempDir, weights: Vec<f64>, seed: u64) -> Agent {
        Agent::with_components(
            Neuron::from_weights(weights),
            ChoiceSelector::new(["ответ A", "ответ B", "ответ C"]).unwrap(),
            "ответ A",
            Planner::new(vec!["Улучшать ответы".to_string()]),
            ExperienceLog::open(dir.path().join("experience.json")),
            StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn test_process_input_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let mut agent = agent_in(&temp_dir, vec![1.0, 1.0], 3);

        let outcome = agent.process_input(BitPair::new(0, 1).unwrap()).unwrap();
        assert_eq!(outcome.logic, 1);
        assert!((outcome.activation - sigmoid(1.0)).abs() < 1e-12);
        assert!(agent.options().contains(&outcome.choice));
        assert_eq!(outcome.feedback == Feedback::Success, outcome.choice == "ответ A");

        let records = agent.experience().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].input, BitPair::new(0, 1).unwrap());
        assert_eq!(records[0].feedback, outcome.feedback);
    }

    #[test]
    fn test_each_input_appends_one_record() {
        let temp_dir = TempDir::new().unwrap();
        let mut agent = agent_in(&temp_dir, vec![0.0, 1.0], 11);
        for (a, b) in [(0, 0), (1, 1), (1, 0)] {
            agent.process_input(BitPair::new(a, b).unwrap()).unwrap();
        }
        let inputs: Vec<BitPair> = agent.experience().records().iter().map(|r| r.input).collect();
        assert_eq!(
            inputs,
            vec![
                BitPair::new(0, 0).unwrap(),
                BitPair::new(1, 1).unwrap(),
                BitPair::new(1, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn test_shape_mismatch_records_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut agent = agent_in(&temp_dir, vec![1.0, 1.0, 1.0], 1);
        assert!(agent.process_input(BitPair::new(1, 1).unwrap()).is_err());
        assert!(agent.experience().is_empty());
    }

    #[test]
    fn test_from_config_rejects_bad_preferred() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.experience.file = temp_dir.path().join("experience.json");
        config.decision.preferred = "ответ Z".to_string();
        assert!(Agent::from_config(&config).is_err());
    }
}
