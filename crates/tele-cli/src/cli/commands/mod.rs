pub mod config;
pub mod prompter;
