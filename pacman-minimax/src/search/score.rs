use types::types::{AgentIndex, VictorDeterminableGame};

/// This trait is used to control something that can return a score from a game state
///
/// We use this trait to be able to layer in different evaluation approaches, plain functions
/// and closures implement it out of the box
pub trait Evaluator<GameType> {
    /// Score `game` from the point of view of `agent_index`. Higher is better for that agent
    fn evaluate(&self, game: &GameType, agent_index: AgentIndex) -> f64;
}

impl<GameType, FnLike: Fn(&GameType, AgentIndex) -> f64> Evaluator<GameType> for FnLike {
    fn evaluate(&self, game: &GameType, agent_index: AgentIndex) -> f64 {
        (self)(game, agent_index)
    }
}

/// Provides an implementation for `wrapped_score` if the implementer implements the `evaluate`
/// function.
///
/// `wrapped_score` takes into account if the node is an end state, and the depth limit, so that
/// the underlying evaluation functions don't need to worry about this
pub trait WrappedEvaluator<GameType>
where
    GameType: VictorDeterminableGame,
{
    /// This is the evaluation function used for every leaf of the tree
    fn evaluate(&self, node: &GameType, agent_index: AgentIndex) -> f64;

    /// `wrapped_score` checks the game state and decides if this is a leaf in our tree. Won
    /// and lost states are always leaves, no matter how many rounds are left. Otherwise we are
    /// a leaf once we've completed `max_rounds` rounds.
    ///
    /// Leaves are always scored from `root_agent`'s point of view
    fn wrapped_score(
        &self,
        node: &GameType,
        root_agent: AgentIndex,
        rounds: usize,
        max_rounds: usize,
    ) -> Option<f64> {
        if node.is_win() || node.is_lose() || rounds >= max_rounds {
            return Some(self.evaluate(node, root_agent));
        }

        None
    }
}
