pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod app;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::SquawkConfig;
pub use crate::core::{
    generator::{generate, generate_code, CodeGenerator},
    self_check::{SelfCheck, SuiteReport},
    validator::{check, is_valid},
};
pub use domain::model::{Emergency, SquawkCode, RESERVED_CODES};
pub use utils::error::{Rejection, Result, SquawkError};
