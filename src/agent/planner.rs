//! Goal-driven planner
//!
//! Reports the pipeline context against the active goal. The plan it returns
//! is informational only and does not steer the decision.

use serde::Serialize;
use tracing::info;

/// Intermediate results handed to the planner
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecisionContext {
    /// XOR of the input bits
    pub logic: u8,
    /// Neuron activation
    pub neuron: f64,
}

impl std::fmt::Display for DecisionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{logic: {}, neuron: {:.4}}}", self.logic, self.neuron)
    }
}

pub const DEFAULT_PLAN: &str = "проанализировать и выбрать лучший ответ";

pub struct Planner {
    goals: Vec<String>,
}

impl Planner {
    pub fn new(goals: Vec<String>) -> Self {
        Self { goals }
    }

    /// The goal currently pursued, if any
    pub fn active_goal(&self) -> Option<&str> {
        self.goals.first().map(String::as_str)
    }

    pub fn plan_action(&self, context: &DecisionContext) -> &'static str {
        info!(
            "Context: {}, goal: {}",
            context,
            self.active_goal().unwrap_or("-")
        );
        DEFAULT_PLAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_ignores_context() {
        let planner = Planner::new(vec!["Улучшать ответы".to_string()]);
        let low = DecisionContext { logic: 0, neuron: 0.5 };
        let high = DecisionContext { logic: 1, neuron: 0.88 };
        assert_eq!(planner.plan_action(&low), planner.plan_action(&high));
        assert_eq!(planner.active_goal(), Some("Улучшать ответы"));
    }

    #[test]
    fn test_no_goals() {
        let planner = Planner::new(Vec::new());
        assert_eq!(planner.active_goal(), None);
        assert_eq!(planner.plan_action(&DecisionContext { logic: 0, neuron: 0.5 }), DEFAULT_PLAN);
    }

    #[test]
    fn test_context_display() {
        let context = DecisionContext { logic: 1, neuron: 0.731_058 };
        assert_eq!(context.to_string(), "{logic: 1, neuron: 0.7311}");
    }
}
