use anyhow::Context;
use pacman_minimax::search::{AdversaryModel, MinimaxSearch};
use tracing::info;

use super::*;

/// Picks moves by searching the game tree a fixed number of rounds ahead
///
/// The ghosts either play perfectly against us ([SearchAgent::minimax]) or pick uniformly at
/// random ([SearchAgent::expectimax]).
#[derive(Debug, Clone)]
pub struct SearchAgent {
    search: MinimaxSearch<EvaluationFunction>,
}

impl SearchAgent {
    pub fn new(options: &AgentOptions, adversary_model: AdversaryModel) -> Self {
        info!(
            agent_index = options.agent_index,
            search_depth = options.search_depth,
            evaluation_function = %options.evaluation_function,
            %adversary_model,
            "building search agent"
        );

        Self {
            search: MinimaxSearch::new(
                options.agent_index,
                options.search_depth,
                adversary_model,
                options.evaluator(),
            ),
        }
    }

    pub fn minimax(options: &AgentOptions) -> Self {
        Self::new(options, AdversaryModel::Minimax)
    }

    pub fn expectimax(options: &AgentOptions) -> Self {
        Self::new(options, AdversaryModel::Expectimax)
    }

    /// The search settings this agent runs with
    pub fn search(&self) -> &MinimaxSearch<EvaluationFunction> {
        &self.search
    }
}

impl<GameType> PacmanAgent<GameType> for SearchAgent
where
    GameType: SearchableGame + EvaluableGame,
{
    fn choose_action(&mut self, game: &GameType) -> anyhow::Result<Move> {
        self.search.choose_action(game).with_context(|| {
            format!(
                "{} agent {} could not pick a move",
                self.search.adversary_model(),
                self.search.root_agent()
            )
        })
    }
}
