//! Process-wide runtime state.

mod state;

pub use state::*;
