#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! This crate implements fixed depth game tree search for pacman. You provide an 'evaluation'
//! function that turns a game state into a score, and the search picks the move for one agent
//! that is best against all the others.
//!
//! We lean on the `pacman-game-types` crate for the game logic, and in particular for the
//! successor logic, which is used to generate the next game states.

use types::types::AgentIndex;

pub mod search;

/// Hooks that get called while the tree is being searched
///
/// This is mostly useful in tests and benchmarks, to see how much of the tree was visited.
pub trait SearchInstruments {
    /// Called once for every node the search visits, before anything is evaluated
    fn observe_node(&self, agent_index: AgentIndex, rounds: usize);
}

impl<T: SearchInstruments + ?Sized> SearchInstruments for &T {
    fn observe_node(&self, agent_index: AgentIndex, rounds: usize) {
        (**self).observe_node(agent_index, rounds)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Any empty struct that implements `SearchInstruments` as a no-op which can be used when you
/// don't want to watch the search
pub struct Instruments {}

impl SearchInstruments for Instruments {
    fn observe_node(&self, _agent_index: AgentIndex, _rounds: usize) {}
}

#[cfg(test)]
mod test_game;
