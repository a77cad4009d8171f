//! Command table: recognized command names and the action each one maps to.

/// Module name used as the command prefix.
pub const MODULE: &str = "scalagen";

/// Command names this module answers to, in the order they are advertised.
pub const COMMANDS: &[&str] = &[
    "scalagen:generate",
    "scalagen:g",
    "scalagen:jquery",
    "scalagen:j",
];

/// Action selected for a command name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginCommand {
    /// Launch the external code generator
    Generate,
    /// Override the JQuery grid assets into the application
    CopyAssets,
    /// Not one of ours; nothing happens
    Unrecognized,
}

impl PluginCommand {
    pub fn parse(name: &str) -> Self {
        match name {
            "scalagen:generate" | "scalagen:g" => PluginCommand::Generate,
            "scalagen:jquery" | "scalagen:j" => PluginCommand::CopyAssets,
            _ => PluginCommand::Unrecognized,
        }
    }

    /// Short name for log events.
    pub fn name(&self) -> &'static str {
        match self {
            PluginCommand::Generate => "generate",
            PluginCommand::CopyAssets => "jquery",
            PluginCommand::Unrecognized => "unrecognized",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, PluginCommand::Unrecognized)
    }
}
