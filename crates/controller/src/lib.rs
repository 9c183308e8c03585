//! Game Controller
//!
//! Turn-taking coordination between a human actor and an engine, plus the
//! session plumbing around it: persisted stats and TOML configuration.

pub mod config;
pub mod controller;
pub mod stats;

pub use config::{ConfigError, HumanColor, SessionConfig};
pub use controller::GameController;
pub use stats::{GameStats, StatsError};
