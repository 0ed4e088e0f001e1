//! Line-oriented operations scripts.
//!
//! A thin driver over [`BTree`](crate::BTree): each script line holds a
//! short op-code and an optional integer argument. The tree itself knows
//! nothing about this format.
//!
//! # Components
//! - [`Command`] - One parsed script line
//! - [`Interpreter`] - Runs commands and writes their reports

mod command;
mod interpreter;

pub use command::Command;
pub use interpreter::Interpreter;
