//! Pacman agents built on top of `pacman-minimax`
//!
//! This holds the evaluation functions that know what a good pacman position looks like, and
//! the agents that use them to pick moves.

#[macro_use]
extern crate serde_derive;

pub use types::types::Move;
pub use types::wire_representation::Game;

use pacman_minimax::search::SearchError;
use types::types::*;

mod evaluation;
pub use evaluation::{
    baseline_evaluation, heuristic_evaluation, nearest_food_distance, score_evaluation,
    EvaluationFunction, EvaluationFunctionName,
};

mod heuristic;
pub use heuristic::HeuristicWeights;

mod options;
pub use options::{AgentOptions, ConfigError};

pub mod random_agent;
pub mod reflex_agent;
pub mod search_agent;

pub use random_agent::RandomAgent;
pub use reflex_agent::ReflexAgent;
pub use search_agent::SearchAgent;

pub type BoxedAgent<GameType> = Box<dyn PacmanAgent<GameType> + Send>;

/// Anything that can pick a move for one agent
pub trait PacmanAgent<GameType> {
    /// The move this agent makes in `game`
    ///
    /// Fails if the agent isn't part of the game or has no legal moves left
    fn choose_action(&mut self, game: &GameType) -> anyhow::Result<Move>;

    /// Called once the game is over
    fn end(&self) {}
}

/// Agents only ever look at their own index, so a game without that agent is a setup mistake
pub(crate) fn ensure_agent_in_game<GameType: AgentCountableGame>(
    game: &GameType,
    agent_index: AgentIndex,
) -> Result<(), SearchError> {
    if agent_index >= game.num_agents() {
        return Err(SearchError::InvalidAgent(agent_index));
    }

    Ok(())
}
