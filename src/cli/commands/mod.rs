//! Subcommand handlers

pub mod config;
pub mod generate;
pub mod genres;
pub mod history;
