use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Points pacman loses for every move it makes
pub const TIME_PENALTY: i32 = 1;
/// Points for eating a single food pellet
pub const FOOD_POINTS: i32 = 10;
/// Bonus for eating the last food pellet
pub const WIN_POINTS: i32 = 500;
/// Points for catching a scared ghost
pub const GHOST_POINTS: i32 = 200;
/// Points lost when an unscared ghost catches pacman
pub const LOSE_PENALTY: i32 = 500;
/// How many of their own moves ghosts stay scared for after a capsule is eaten
pub const SCARED_TIME: u32 = 40;

/// Which side of the game an agent plays for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Eats food, wants to win
    Pacman,
    /// Chases pacman
    Ghost,
}

/// A single agent on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Pacman or ghost
    pub kind: AgentKind,
    /// Where the agent is right now
    pub position: Position,
    /// Where a ghost goes back to after being eaten. Defaults to wherever it was eaten
    #[serde(default)]
    pub start: Option<Position>,
    /// Only pacman agents ever score
    #[serde(default)]
    pub score: i32,
    /// Moves left until this ghost stops being scared
    #[serde(default)]
    pub scared_timer: u32,
}

impl Agent {
    fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

/// How a finished game ended, from pacman's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// All the food is gone
    Win,
    /// Pacman was caught
    Lose,
}

/// The static-ish parts of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Number of columns, `x` runs from `0` to `width - 1`
    pub width: u32,
    /// Number of rows, `y` runs from `0` to `height - 1`
    pub height: u32,
    /// Cells nobody can enter
    #[serde(default)]
    pub walls: Vec<Position>,
    /// Remaining food pellets
    #[serde(default)]
    pub food: Vec<Position>,
    /// Remaining power capsules
    #[serde(default)]
    pub capsules: Vec<Position>,
}

impl Board {
    /// Whether an agent could stand on `pos`
    pub fn is_open(&self, pos: &Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as u32) < self.width
            && (pos.y as u32) < self.height
            && !self.walls.contains(pos)
    }
}

/// A full game state as it would be sent over the wire
///
/// Agents take turns in index order. Index `0` is pacman by convention, every other agent is
/// normally a ghost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Walls, food and capsules
    pub board: Board,
    /// Every agent in turn order
    pub agents: Vec<Agent>,
    /// Set once the game is finished
    #[serde(default)]
    pub outcome: Option<Outcome>,
}

impl Game {
    fn ghost_indices(&self) -> Vec<AgentIndex> {
        self.agents
            .iter()
            .positions(|a| a.kind == AgentKind::Ghost)
            .collect_vec()
    }

    fn pacman_indices(&self) -> Vec<AgentIndex> {
        self.agents
            .iter()
            .positions(|a| a.kind == AgentKind::Pacman)
            .collect_vec()
    }

    fn move_pacman(&mut self, agent_index: AgentIndex, to: Position) {
        self.agents[agent_index].position = to;
        self.agents[agent_index].score -= TIME_PENALTY;

        if let Some(i) = self.board.food.iter().position(|f| *f == to) {
            self.board.food.remove(i);
            self.agents[agent_index].score += FOOD_POINTS;

            if self.board.food.is_empty() {
                self.agents[agent_index].score += WIN_POINTS;
                self.outcome = Some(Outcome::Win);
            }
        }

        if let Some(i) = self.board.capsules.iter().position(|c| *c == to) {
            self.board.capsules.remove(i);
            for g in self.ghost_indices() {
                self.agents[g].scared_timer = SCARED_TIME;
            }
        }

        self.resolve_collisions(agent_index);
    }

    fn move_ghost(&mut self, agent_index: AgentIndex, to: Position) {
        let ghost = &mut self.agents[agent_index];
        ghost.position = to;
        ghost.scared_timer = ghost.scared_timer.saturating_sub(1);

        for p in self.pacman_indices() {
            if self.agents[p].position == to {
                self.resolve_collisions(p);
            }
        }
    }

    /// Settle every ghost sharing a cell with the given pacman
    fn resolve_collisions(&mut self, pacman_index: AgentIndex) {
        let at = self.agents[pacman_index].position;

        for g in self.ghost_indices() {
            if self.agents[g].position != at {
                continue;
            }

            if self.agents[g].is_scared() {
                let ghost = &mut self.agents[g];
                ghost.position = ghost.start.unwrap_or(ghost.position);
                ghost.scared_timer = 0;

                self.agents[pacman_index].score += GHOST_POINTS;
            } else {
                self.agents[pacman_index].score -= LOSE_PENALTY;
                self.outcome = Some(Outcome::Lose);
            }
        }
    }
}

impl AgentCountableGame for Game {
    fn num_agents(&self) -> usize {
        self.agents.len()
    }
}

impl LegalActionsGame for Game {
    fn legal_actions(&self, agent_index: AgentIndex) -> Vec<Move> {
        if self.is_over() {
            return vec![];
        }

        let agent = &self.agents[agent_index];
        let mut moves = Move::all_directions()
            .into_iter()
            .filter(|m| self.board.is_open(&agent.position.add_vec(m.to_vector())))
            .collect_vec();

        // Ghosts only stand still when they are boxed in
        if agent.kind == AgentKind::Pacman || moves.is_empty() {
            moves.push(Move::Stop);
        }

        moves
    }
}

impl SuccessorGame for Game {
    fn generate_successor(&self, agent_index: AgentIndex, action: Move) -> Self {
        let mut next = self.clone();
        if next.is_over() {
            return next;
        }

        let to = next.agents[agent_index]
            .position
            .add_vec(action.to_vector());

        match next.agents[agent_index].kind {
            AgentKind::Pacman => next.move_pacman(agent_index, to),
            AgentKind::Ghost => next.move_ghost(agent_index, to),
        }

        next
    }
}

impl VictorDeterminableGame for Game {
    fn is_win(&self) -> bool {
        self.outcome == Some(Outcome::Win)
    }

    fn is_lose(&self) -> bool {
        self.outcome == Some(Outcome::Lose)
    }
}

impl ScoreGettableGame for Game {
    fn get_score(&self, agent_index: AgentIndex) -> f64 {
        self.agents[agent_index].score as f64
    }
}

impl PositionGettableGame for Game {
    fn get_agent_position(&self, agent_index: AgentIndex) -> Position {
        self.agents[agent_index].position
    }
}

impl FoodGettableGame for Game {
    fn get_all_food(&self) -> Vec<Position> {
        self.board.food.clone()
    }

    fn get_food_count(&self) -> usize {
        self.board.food.len()
    }
}

impl CapsuleGettableGame for Game {
    fn get_capsules(&self) -> Vec<Position> {
        self.board.capsules.clone()
    }
}

impl GhostPositionGettableGame for Game {
    fn get_ghost_positions(&self) -> Vec<Position> {
        self.ghost_indices()
            .into_iter()
            .map(|g| self.agents[g].position)
            .collect()
    }
}
