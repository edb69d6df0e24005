use pacman_minimax::search::SearchError;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use super::*;

/// Ignores the state completely and picks any legal move
#[derive(Debug, Clone)]
pub struct RandomAgent<R = StdRng> {
    agent_index: AgentIndex,
    rng: R,
}

impl RandomAgent<StdRng> {
    /// Seeds a [StdRng] so the same seed always makes the same choices
    pub fn from_seed(agent_index: AgentIndex, seed: u64) -> Self {
        Self::with_rng(agent_index, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomAgent<R> {
    /// Draws every random choice from `rng`
    pub fn with_rng(agent_index: AgentIndex, rng: R) -> Self {
        Self { agent_index, rng }
    }
}

impl<GameType, R> PacmanAgent<GameType> for RandomAgent<R>
where
    GameType: AgentCountableGame + LegalActionsGame,
    R: Rng,
{
    fn choose_action(&mut self, game: &GameType) -> anyhow::Result<Move> {
        ensure_agent_in_game(game, self.agent_index)?;

        let action = game
            .legal_actions(self.agent_index)
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::NoLegalMoves(self.agent_index))?;

        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use types::wire_representation::Game;

    use super::*;

    fn open_field() -> Game {
        serde_json::from_str(include_str!("../fixtures/open_field.json")).unwrap()
    }

    #[test]
    fn test_only_picks_legal_moves() {
        let game = open_field();

        for agent_index in 0..game.num_agents() {
            let legal = game.legal_actions(agent_index);
            let mut agent = RandomAgent::from_seed(agent_index, 3);

            let seen: HashSet<Move> = (0..100)
                .map(|_| agent.choose_action(&game).unwrap())
                .collect();

            assert!(seen.iter().all(|m| legal.contains(m)));
            assert_eq!(seen.len(), legal.len());
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let game = open_field();

        let mut a = RandomAgent::from_seed(1, 42);
        let mut b = RandomAgent::from_seed(1, 42);

        for _ in 0..20 {
            assert_eq!(a.choose_action(&game).unwrap(), b.choose_action(&game).unwrap());
        }
    }

    #[test]
    fn test_no_legal_moves() {
        let game: Game =
            serde_json::from_str(include_str!("../fixtures/game_over.json")).unwrap();

        assert!(RandomAgent::from_seed(0, 0).choose_action(&game).is_err());
    }

    #[test]
    fn test_agent_outside_the_game() {
        let game = open_field();
        let err = RandomAgent::from_seed(game.num_agents(), 0)
            .choose_action(&game)
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<SearchError>(),
            Some(&SearchError::InvalidAgent(3))
        );
    }
}
