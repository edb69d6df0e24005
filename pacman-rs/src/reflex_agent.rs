use decorum::N64;
use itertools::Itertools;
use pacman_minimax::search::SearchError;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::debug;

use super::*;

/// Looks one move ahead and takes whichever move leaves the best looking state, judged by
/// [baseline_evaluation]
///
/// Moves that tie are picked between at random
#[derive(Debug, Clone)]
pub struct ReflexAgent<R = StdRng> {
    agent_index: AgentIndex,
    rng: R,
}

impl ReflexAgent<StdRng> {
    /// Seeds a [StdRng] so the same seed always makes the same choices
    pub fn from_seed(agent_index: AgentIndex, seed: u64) -> Self {
        Self::with_rng(agent_index, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ReflexAgent<R> {
    /// Draws every random choice from `rng`
    pub fn with_rng(agent_index: AgentIndex, rng: R) -> Self {
        Self { agent_index, rng }
    }
}

impl<GameType, R> PacmanAgent<GameType> for ReflexAgent<R>
where
    GameType: SearchableGame + ScoreGettableGame + PositionGettableGame + FoodGettableGame,
    R: Rng,
{
    fn choose_action(&mut self, game: &GameType) -> anyhow::Result<Move> {
        let agent_index = self.agent_index;
        ensure_agent_in_game(game, agent_index)?;

        let scored = game
            .legal_actions(agent_index)
            .into_iter()
            .map(|action| {
                let next = game.generate_successor(agent_index, action);
                (action, N64::from(baseline_evaluation(&next, agent_index)))
            })
            .collect_vec();

        let best_score = scored
            .iter()
            .map(|(_, score)| *score)
            .max()
            .ok_or(SearchError::NoLegalMoves(agent_index))?;

        let best_actions = scored
            .iter()
            .filter(|(_, score)| *score == best_score)
            .map(|(action, _)| *action)
            .collect_vec();

        let action = *best_actions
            .choose(&mut self.rng)
            .ok_or(SearchError::NoLegalMoves(agent_index))?;

        debug!(agent_index, %action, ties = best_actions.len(), "reflex agent picked a move");

        Ok(action)
    }
}
