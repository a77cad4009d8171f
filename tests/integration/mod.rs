//! Integration tests for the scalagen module commands

mod config_integration;
mod generate_command;

pub use test_utils::*;
