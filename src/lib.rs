//! Scalagen: Play module commands
//!
//! Launches the external Scala code generator against a Play application and
//! installs the JQuery grid assets the generated views rely on.

pub mod application;
pub mod assets;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod generate;
pub mod java;
pub mod logging;
pub mod plugin;
pub mod process;
