//! Multi agent tree search where one agent, the root agent, maximizes its evaluation and every
//! other agent works against it.
//!
//! How the other agents are modelled is controlled by [AdversaryModel]:
//!
//! - [AdversaryModel::Minimax] assumes every adversary picks the move that is worst for the
//!   root agent.
//! - [AdversaryModel::Expectimax] assumes every adversary picks uniformly at random among its
//!   legal moves, so adversary nodes are worth the average of their children.
//!
//! Nodes are always scored from the root agent's point of view. The depth is counted in
//! rounds, where a round is every agent taking exactly one turn. There is no pruning, every
//! node down to the depth limit is visited.
//!
//! ```rust
//! use pacman_minimax::search::{AdversaryModel, MinimaxSearch};
//! use types::{types::*, wire_representation::Game};
//!
//! // A 3x1 board, pacman in the middle with the last food pellet to the east and a ghost
//! // right behind it to the west
//! let game: Game = serde_json::from_str(r#"{
//!     "board": { "width": 3, "height": 1, "food": [{"x": 2, "y": 0}] },
//!     "agents": [
//!         {"kind": "pacman", "position": {"x": 1, "y": 0}},
//!         {"kind": "ghost", "position": {"x": 0, "y": 0}}
//!     ]
//! }"#).unwrap();
//!
//! // This is the evaluation function that we will use to score the game states
//! // Here it is just the raw score but would ideally contain some logic to decide which
//! // states are better than others
//! fn evaluation_function(game: &Game, agent_index: AgentIndex) -> f64 {
//!     game.get_score(agent_index)
//! }
//!
//! let search = MinimaxSearch::new(0, 2, AdversaryModel::Minimax, evaluation_function);
//!
//! assert_eq!(search.choose_action(&game).unwrap(), Move::East);
//! ```

mod adversary;
pub use adversary::{AdversaryModel, NodeKind};

mod score;
pub use score::{Evaluator, WrappedEvaluator};

mod search_return;
pub use search_return::SearchReturn;

mod eval;
pub use eval::{MinimaxSearch, SearchError};
