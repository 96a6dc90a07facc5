//! Statement state and logic (UI-agnostic).

mod command;
mod ops;
mod seed;
mod state;

pub use command::{Command, CommandOutcome};
pub use ops::{EditEvent, EditOutcome, IgnoreReason};
pub use seed::SeedRow;
pub use state::Statement;
