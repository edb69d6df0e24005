//! Game types for the pacman search agents.
//!
//! The [types] module holds the query interface the search engine and the evaluation functions
//! are written against. It is split into small capability traits so that each consumer only asks
//! for what it actually needs.
//!
//! The [wire_representation] module is a small JSON friendly grid game that implements all of
//! those traits. It is what the fixtures, tests and benchmarks run against.

pub mod types;
pub mod wire_representation;
