use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of an agent in the turn order. Pacman is always `0`, ghosts are `1..num_agents`
pub type AgentIndex = usize;

/// The agent index pacman plays as
pub const PACMAN_INDEX: AgentIndex = 0;

/// Represents a single action an agent can take on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Move up, towards larger y
    North,
    /// Move down, towards smaller y
    South,
    /// Move right, towards larger x
    East,
    /// Move left, towards smaller x
    West,
    /// Stay where you are
    Stop,
}

impl Move {
    /// Every move in the order legal actions are reported in
    pub const fn all() -> [Move; 5] {
        [Move::North, Move::South, Move::East, Move::West, Move::Stop]
    }

    /// The four moves that actually change your position
    pub const fn all_directions() -> [Move; 4] {
        [Move::North, Move::South, Move::East, Move::West]
    }

    /// The offset applied to a position when taking this move
    pub fn to_vector(self) -> Vector {
        match self {
            Move::North => Vector { x: 0, y: 1 },
            Move::South => Vector { x: 0, y: -1 },
            Move::East => Vector { x: 1, y: 0 },
            Move::West => Vector { x: -1, y: 0 },
            Move::Stop => Vector { x: 0, y: 0 },
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::North => "north",
            Move::South => "south",
            Move::East => "east",
            Move::West => "west",
            Move::Stop => "stop",
        };

        write!(f, "{}", s)
    }
}

/// A difference between two positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i64,
    pub y: i64,
}

/// A cell on the grid
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Build a position from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position you end up at after applying `v`
    pub fn add_vec(&self, v: Vector) -> Position {
        Position {
            x: self.x + v.x as i32,
            y: self.y + v.y as i32,
        }
    }

    /// Sum of the absolute coordinate differences. This is the only distance metric the agents use
    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// A game that knows how many agents take turns in it
pub trait AgentCountableGame {
    /// Number of agents, pacman included
    fn num_agents(&self) -> usize;
}

/// A game that can list the legal actions for an agent
pub trait LegalActionsGame {
    /// The actions `agent_index` may take in this state
    ///
    /// The order is decided by the game but must be stable, since searches break ties by
    /// taking the first action they saw. This is empty when the game is over.
    fn legal_actions(&self, agent_index: AgentIndex) -> Vec<Move>;
}

/// A game that can produce the state after an agent acts
pub trait SuccessorGame: Sized {
    /// The state after `agent_index` takes `action`. `self` is left untouched
    fn generate_successor(&self, agent_index: AgentIndex, action: Move) -> Self;
}

/// A game that can tell if pacman has won or lost
pub trait VictorDeterminableGame {
    /// Pacman has eaten all the food
    fn is_win(&self) -> bool;

    /// Pacman was caught
    fn is_lose(&self) -> bool;

    /// Either side is done
    fn is_over(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// A game that keeps a score per agent
pub trait ScoreGettableGame {
    /// The current score of `agent_index`
    fn get_score(&self, agent_index: AgentIndex) -> f64;
}

/// A game where every agent has a position on the grid
pub trait PositionGettableGame {
    /// Where `agent_index` currently is
    fn get_agent_position(&self, agent_index: AgentIndex) -> Position;
}

/// A game with food on the board
pub trait FoodGettableGame {
    /// Every remaining food pellet
    fn get_all_food(&self) -> Vec<Position>;

    /// How many food pellets remain
    fn get_food_count(&self) -> usize {
        self.get_all_food().len()
    }
}

/// A game with power capsules on the board
pub trait CapsuleGettableGame {
    /// Every remaining capsule
    fn get_capsules(&self) -> Vec<Position>;
}

/// A game with ghosts on the board
pub trait GhostPositionGettableGame {
    /// The position of every ghost, in agent index order
    fn get_ghost_positions(&self) -> Vec<Position>;
}

/// Everything the tree search needs from a game
pub trait SearchableGame:
    AgentCountableGame + LegalActionsGame + SuccessorGame + VictorDeterminableGame
{
}

impl<T> SearchableGame for T where
    T: AgentCountableGame + LegalActionsGame + SuccessorGame + VictorDeterminableGame
{
}

/// Everything the evaluation functions need from a game
pub trait EvaluableGame:
    ScoreGettableGame
    + PositionGettableGame
    + FoodGettableGame
    + CapsuleGettableGame
    + GhostPositionGettableGame
{
}

impl<T> EvaluableGame for T where
    T: ScoreGettableGame
        + PositionGettableGame
        + FoodGettableGame
        + CapsuleGettableGame
        + GhostPositionGettableGame
{
}
