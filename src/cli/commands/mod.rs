//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod count_states;
pub mod race;
pub mod scramble;
pub mod solve;

// Shared utilities for commands
pub(crate) mod util;
