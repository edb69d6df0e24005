use derivative::Derivative;
use itertools::Itertools;
use thiserror::Error;
use tracing::{info, info_span, warn};
use types::types::{AgentIndex, Move, SearchableGame, VictorDeterminableGame};

use crate::{Instruments, SearchInstruments};

use super::{AdversaryModel, Evaluator, NodeKind, SearchReturn, WrappedEvaluator};

/// Errors that can occur while picking a move
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The root agent has nothing it is allowed to do, so there is no move to return
    #[error("No legal moves available for agent {0}")]
    NoLegalMoves(AgentIndex),
    /// The agent we were asked to search for isn't one of the game's agents
    #[error("Agent {0} is not in the game")]
    InvalidAgent(AgentIndex),
}

#[derive(Derivative, Clone)]
#[derivative(Debug(bound = ""))]
/// This is the struct that wraps an evaluation function and the search settings and can be used
/// to run minimax or expectimax
///
/// It carries everything the recursion needs, so the search itself is a pure function of the
/// game state it is handed. It also outputs traces using the [tracing] crate.
pub struct MinimaxSearch<EvaluatorType, InstrumentsType = Instruments> {
    root_agent: AgentIndex,
    max_rounds: usize,
    adversary_model: AdversaryModel,
    #[derivative(Debug = "ignore")]
    evaluator: EvaluatorType,
    #[derivative(Debug = "ignore")]
    instruments: InstrumentsType,
}

impl<GameType, EvaluatorType, InstrumentsType> WrappedEvaluator<GameType>
    for MinimaxSearch<EvaluatorType, InstrumentsType>
where
    GameType: VictorDeterminableGame,
    EvaluatorType: Evaluator<GameType>,
{
    fn evaluate(&self, node: &GameType, agent_index: AgentIndex) -> f64 {
        self.evaluator.evaluate(node, agent_index)
    }
}

impl<EvaluatorType> MinimaxSearch<EvaluatorType, Instruments> {
    /// Construct a new `MinimaxSearch`
    ///
    /// `max_rounds` is the depth limit, counted in full rounds where every agent moves once.
    /// The evaluator is only ever asked to score states for `root_agent`
    pub fn new(
        root_agent: AgentIndex,
        max_rounds: usize,
        adversary_model: AdversaryModel,
        evaluator: EvaluatorType,
    ) -> Self {
        Self {
            root_agent,
            max_rounds,
            adversary_model,
            evaluator,
            instruments: Instruments {},
        }
    }
}

impl<EvaluatorType, InstrumentsType> MinimaxSearch<EvaluatorType, InstrumentsType> {
    /// Swap out the instruments that get told about every visited node
    pub fn with_instruments<NewInstruments>(
        self,
        instruments: NewInstruments,
    ) -> MinimaxSearch<EvaluatorType, NewInstruments> {
        MinimaxSearch {
            root_agent: self.root_agent,
            max_rounds: self.max_rounds,
            adversary_model: self.adversary_model,
            evaluator: self.evaluator,
            instruments,
        }
    }

    /// The agent this search picks moves for
    pub fn root_agent(&self) -> AgentIndex {
        self.root_agent
    }

    /// How many full rounds the search looks ahead
    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// How the other agents are expected to play
    pub fn adversary_model(&self) -> AdversaryModel {
        self.adversary_model
    }

    /// Who moves after `agent_index`, and how many rounds will be complete by then
    ///
    /// Turns go in index order and wrap around. A round is complete once the turn comes back
    /// around to the root agent
    fn next_turn(
        &self,
        num_agents: usize,
        agent_index: AgentIndex,
        rounds: usize,
    ) -> (AgentIndex, usize) {
        let next_agent = (agent_index + 1) % num_agents;

        if next_agent == self.root_agent {
            (next_agent, rounds + 1)
        } else {
            (next_agent, rounds)
        }
    }

    fn node_kind(&self, agent_index: AgentIndex) -> NodeKind {
        if agent_index == self.root_agent {
            NodeKind::Max
        } else {
            self.adversary_model.adversary_node_kind()
        }
    }

    /// Expand every one of `actions` for `agent_index` and fold the results into a node
    fn expand<GameType>(
        &self,
        node: &GameType,
        agent_index: AgentIndex,
        rounds: usize,
        actions: Vec<Move>,
    ) -> Option<SearchReturn>
    where
        GameType: SearchableGame,
        EvaluatorType: Evaluator<GameType>,
        InstrumentsType: SearchInstruments,
    {
        let (next_agent, next_rounds) = self.next_turn(node.num_agents(), agent_index, rounds);

        let options = actions
            .into_iter()
            .map(|action| {
                let successor = node.generate_successor(agent_index, action);
                (action, self.search(&successor, next_agent, next_rounds))
            })
            .collect_vec();

        SearchReturn::node(agent_index, self.node_kind(agent_index), options)
    }

    /// Score `node` where it is `agent_index`'s turn and `rounds` full rounds have already been
    /// played since the root
    ///
    /// Won, lost and depth limited states are scored directly by the evaluator. If the moving
    /// agent has no legal actions the state is scored directly as well, as if it were a leaf.
    pub fn search<GameType>(
        &self,
        node: &GameType,
        agent_index: AgentIndex,
        rounds: usize,
    ) -> SearchReturn
    where
        GameType: SearchableGame,
        EvaluatorType: Evaluator<GameType>,
        InstrumentsType: SearchInstruments,
    {
        self.instruments.observe_node(agent_index, rounds);

        if let Some(score) = self.wrapped_score(node, self.root_agent, rounds, self.max_rounds) {
            return SearchReturn::Leaf { score };
        }

        let actions = node.legal_actions(agent_index);

        self.expand(node, agent_index, rounds, actions)
            .unwrap_or_else(|| {
                warn!(
                    agent_index,
                    rounds, "No legal actions in a running game, scoring it as a leaf"
                );

                SearchReturn::Leaf {
                    score: self.evaluator.evaluate(node, self.root_agent),
                }
            })
    }

    /// The score of `node`, see [MinimaxSearch::search]
    pub fn value<GameType>(&self, node: &GameType, agent_index: AgentIndex, rounds: usize) -> f64
    where
        GameType: SearchableGame,
        EvaluatorType: Evaluator<GameType>,
        InstrumentsType: SearchInstruments,
    {
        self.search(node, agent_index, rounds).score()
    }

    /// This runs the search from the root agent's turn, returning a struct that contains all
    /// the information about the 'tree' we searched.
    ///
    /// Unlike [MinimaxSearch::search] the root is always expanded, even if the game is already
    /// over, as long as the root agent has a legal action.
    ///
    /// The root agent has to be one of the game's agents, otherwise the turn would never come
    /// back around to it and no round would ever finish.
    pub fn search_root<GameType>(&self, game: &GameType) -> Result<SearchReturn, SearchError>
    where
        GameType: SearchableGame,
        EvaluatorType: Evaluator<GameType>,
        InstrumentsType: SearchInstruments,
    {
        if self.root_agent >= game.num_agents() {
            return Err(SearchError::InvalidAgent(self.root_agent));
        }

        self.instruments.observe_node(self.root_agent, 0);

        let actions = game.legal_actions(self.root_agent);

        self.expand(game, self.root_agent, 0, actions)
            .ok_or(SearchError::NoLegalMoves(self.root_agent))
    }

    /// Pick the next move to make
    ///
    /// This is the move at the root with the strictly highest score. When several moves tie the
    /// one the game listed first wins
    pub fn choose_action<GameType>(&self, game: &GameType) -> Result<Move, SearchError>
    where
        GameType: SearchableGame,
        EvaluatorType: Evaluator<GameType>,
        InstrumentsType: SearchInstruments,
    {
        info_span!(
          "tree_search",
          root_agent = self.root_agent,
          max_rounds = self.max_rounds,
          adversary_model = %self.adversary_model,
          chosen_score = tracing::field::Empty,
          chosen_action = tracing::field::Empty,
        )
        .in_scope(|| {
            let result = self.search_root(game)?;
            let chosen = result
                .best_action()
                .ok_or(SearchError::NoLegalMoves(self.root_agent))?;

            let current_span = tracing::Span::current();
            current_span.record("chosen_score", format!("{:?}", result.score()).as_str());
            current_span.record("chosen_action", format!("{}", chosen).as_str());

            info!(nodes = result.node_count(), "finished search");

            Ok(chosen)
        })
    }
}
