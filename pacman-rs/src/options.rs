use thiserror::Error;
use types::types::{AgentIndex, PACMAN_INDEX};

use crate::{EvaluationFunction, EvaluationFunctionName, HeuristicWeights};

/// Problems with how an agent was configured
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown evaluation function `{0}`")]
    UnknownEvaluationFunction(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Settings for the search agents
///
/// Anything left out when deserializing falls back to its default
///
/// ```rust
/// use pacman_rs::{AgentOptions, EvaluationFunctionName};
///
/// let options: AgentOptions = serde_json::from_str(r#"{"searchDepth": 3}"#).unwrap();
///
/// assert_eq!(options.agent_index, 0);
/// assert_eq!(options.search_depth, 3);
/// assert_eq!(options.evaluation_function, EvaluationFunctionName::Heuristic);
/// ```
pub struct AgentOptions {
    /// The agent we are choosing moves for
    ///
    /// Defaults to pacman
    #[serde(alias = "index")]
    pub agent_index: AgentIndex,
    /// Used to score the states at the bottom of the search
    ///
    /// Defaults to the heuristic
    #[serde(alias = "evalFn", alias = "evaluationFunctionName")]
    pub evaluation_function: EvaluationFunctionName,
    /// How many full rounds to look ahead, where every agent moves once per round
    ///
    /// Defaults to 2
    #[serde(alias = "depth")]
    pub search_depth: usize,
    /// Only used by the heuristic evaluation function
    pub weights: HeuristicWeights,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            agent_index: PACMAN_INDEX,
            evaluation_function: EvaluationFunctionName::Heuristic,
            search_depth: 2,
            weights: HeuristicWeights::default(),
        }
    }
}

impl AgentOptions {
    /// Build options from an evaluation function name, failing straight away if we don't know
    /// the name
    pub fn new(
        agent_index: AgentIndex,
        evaluation_function: &str,
        search_depth: usize,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            agent_index,
            evaluation_function: evaluation_function.parse()?,
            search_depth,
            ..Default::default()
        })
    }

    pub fn evaluator(&self) -> EvaluationFunction {
        EvaluationFunction::new(self.evaluation_function, self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AgentOptions::default();

        assert_eq!(options.agent_index, 0);
        assert_eq!(options.search_depth, 2);
        assert_eq!(
            options.evaluator(),
            EvaluationFunction::Heuristic(HeuristicWeights::default())
        );
    }

    #[test]
    fn test_new() {
        let options = AgentOptions::new(0, "scoreEvaluationFunction", 4).unwrap();

        assert_eq!(options.evaluation_function, EvaluationFunctionName::Score);
        assert_eq!(options.search_depth, 4);
        assert_eq!(options.evaluator(), EvaluationFunction::Score);
    }

    #[test]
    fn test_unknown_evaluation_function_fails_fast() {
        let err = AgentOptions::new(0, "nope", 2).unwrap_err();

        assert_eq!(err, ConfigError::UnknownEvaluationFunction("nope".to_owned()));
        assert_eq!(err.to_string(), "Unknown evaluation function `nope`");
    }

    #[test]
    fn test_deserialize() {
        let options: AgentOptions = serde_json::from_str(
            r#"{
                "index": 0,
                "evalFn": "baselineEvaluationFunction",
                "depth": 1,
                "weights": {"foodProximity": 2.0}
            }"#,
        )
        .unwrap();

        assert_eq!(options.evaluation_function, EvaluationFunctionName::Baseline);
        assert_eq!(options.search_depth, 1);
        assert_eq!(options.weights.food_proximity, 2.0);
        assert_eq!(options.weights.danger_radius, 3);
    }

    #[test]
    fn test_deserialize_unknown_name() {
        let result = serde_json::from_str::<AgentOptions>(
            r#"{"evaluationFunction": "betterEvaluationFunction"}"#,
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("betterEvaluationFunction"));
    }
}
