pub mod commands;

pub use commands::{dispatch, CommandOutcome};
