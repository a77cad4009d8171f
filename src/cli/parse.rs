//! CLI parse: clap types for scalagen. No behavior; definitions only.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Scalagen - Scala code generation commands for Play applications
#[derive(Parser, Debug)]
#[command(name = "scalagen")]
#[command(about = "Scala code generation and JQuery grid assets for Play applications")]
pub struct Cli {
    /// Module command followed by its arguments, forwarded verbatim
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        required_unless_present = "list_commands",
        value_parser = clap::value_parser!(OsString)
    )]
    pub command_line: Vec<OsString>,

    /// Application root directory
    #[arg(long, default_value = ".")]
    pub app: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the recognized commands and exit
    #[arg(long)]
    pub list_commands: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Command name, empty when only `--list-commands` was given. A name
    /// that is not UTF-8 matches no command and also reads as empty.
    pub fn command(&self) -> &str {
        self.command_line
            .first()
            .and_then(|name| name.to_str())
            .unwrap_or("")
    }

    /// Arguments after the command name.
    pub fn args(&self) -> &[OsString] {
        self.command_line.get(1..).unwrap_or(&[])
    }
}
