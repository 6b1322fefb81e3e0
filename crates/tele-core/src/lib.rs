//! Shared configuration and logging for tele.

pub mod config;
pub mod logging;

pub use config::Config;
