use std::{fmt, str::FromStr};

use pacman_minimax::search::Evaluator;
use types::types::*;

use crate::{ConfigError, HeuristicWeights};

/// Manhattan distance from the agent to the closest remaining food pellet
///
/// `None` when there is no food left
pub fn nearest_food_distance<T>(game: &T, agent_index: AgentIndex) -> Option<u32>
where
    T: PositionGettableGame + FoodGettableGame,
{
    let position = game.get_agent_position(agent_index);

    game.get_all_food()
        .iter()
        .map(|food| position.manhattan_distance(food))
        .min()
}

/// The raw game score
pub fn score_evaluation<T: ScoreGettableGame>(game: &T, agent_index: AgentIndex) -> f64 {
    game.get_score(agent_index)
}

/// The raw game score minus the distance to the nearest food
///
/// This is cheap and ignores the ghosts completely
pub fn baseline_evaluation<T>(game: &T, agent_index: AgentIndex) -> f64
where
    T: ScoreGettableGame + PositionGettableGame + FoodGettableGame,
{
    let distance = nearest_food_distance(game, agent_index).unwrap_or(0);

    game.get_score(agent_index) - distance as f64
}

/// The score, pushed towards finishing the level and away from ghosts
///
/// `score - food penalty - capsule penalty + food proximity bonus - danger penalty`, see
/// [HeuristicWeights] for how each of those is worked out
pub fn heuristic_evaluation<T: EvaluableGame>(
    game: &T,
    agent_index: AgentIndex,
    weights: &HeuristicWeights,
) -> f64 {
    let position = game.get_agent_position(agent_index);
    let ghost_distances: Vec<u32> = game
        .get_ghost_positions()
        .iter()
        .map(|ghost| position.manhattan_distance(ghost))
        .collect();

    game.get_score(agent_index) - weights.food_count_penalty(game.get_food_count())
        - weights.capsule_count_penalty(game.get_capsules().len())
        + weights.food_proximity_bonus(nearest_food_distance(game, agent_index))
        - weights.danger_penalty(&ghost_distances)
}

/// The evaluation functions that can be picked by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum EvaluationFunctionName {
    /// See [score_evaluation]
    Score,
    /// See [baseline_evaluation]
    Baseline,
    /// See [heuristic_evaluation]
    #[default]
    Heuristic,
}

impl FromStr for EvaluationFunctionName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scoreEvaluationFunction" | "score" => Ok(Self::Score),
            "baselineEvaluationFunction" | "baseline" => Ok(Self::Baseline),
            "heuristicEvaluationFunction" | "heuristic" => Ok(Self::Heuristic),
            other => Err(ConfigError::UnknownEvaluationFunction(other.to_owned())),
        }
    }
}

impl TryFrom<String> for EvaluationFunctionName {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for EvaluationFunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Score => "scoreEvaluationFunction",
            Self::Baseline => "baselineEvaluationFunction",
            Self::Heuristic => "heuristicEvaluationFunction",
        };

        write!(f, "{}", name)
    }
}

/// A ready to use evaluation function, what an [EvaluationFunctionName] resolves to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvaluationFunction {
    /// [score_evaluation]
    Score,
    /// [baseline_evaluation]
    Baseline,
    /// [heuristic_evaluation] with these weights
    Heuristic(HeuristicWeights),
}

impl EvaluationFunction {
    /// Weights are only used by the heuristic, the other functions ignore them
    pub fn new(name: EvaluationFunctionName, weights: HeuristicWeights) -> Self {
        match name {
            EvaluationFunctionName::Score => Self::Score,
            EvaluationFunctionName::Baseline => Self::Baseline,
            EvaluationFunctionName::Heuristic => Self::Heuristic(weights),
        }
    }

    /// The name this function is picked by
    pub fn name(&self) -> EvaluationFunctionName {
        match self {
            Self::Score => EvaluationFunctionName::Score,
            Self::Baseline => EvaluationFunctionName::Baseline,
            Self::Heuristic(_) => EvaluationFunctionName::Heuristic,
        }
    }
}

impl<T: EvaluableGame> Evaluator<T> for EvaluationFunction {
    fn evaluate(&self, game: &T, agent_index: AgentIndex) -> f64 {
        match self {
            Self::Score => score_evaluation(game, agent_index),
            Self::Baseline => baseline_evaluation(game, agent_index),
            Self::Heuristic(weights) => heuristic_evaluation(game, agent_index, weights),
        }
    }
}
