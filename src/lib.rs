//! Resume intake library

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod notifier;
pub mod output;
pub mod selection;
pub mod session;

pub use config::Config;
pub use error::{IntakeError, Result};
