//! CLI domain: parse, route, help and output only.
//! No module logic; the route dispatches to the plugin.

mod help;
mod output;
mod parse;
mod route;

pub use help::{command_listing, command_name};
pub use output::map_error;
pub use parse::Cli;
pub use route::RunContext;
