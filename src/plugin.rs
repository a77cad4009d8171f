//! Module entry points called by the host: `execute` for our own commands,
//! `before`/`after` around every command the host runs.

use crate::application::Application;
use crate::assets::install_jquery_assets;
use crate::command::PluginCommand;
use crate::error::ScalagenError;
use crate::generate::run_generator;
use crate::java::GENERATOR_CLASS;
use crate::process::{Environment, ProcessRunner, SystemRunner};
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

/// Everything the host hands over for one command
pub struct CommandContext<'a> {
    pub command: &'a str,
    pub app: &'a dyn Application,
    pub args: &'a [OsString],
    pub env: &'a Environment,
}

/// What `execute` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Generated,
    AssetsCopied { count: usize },
    Ignored,
}

/// The scalagen module as seen by the host
pub struct Plugin<R = SystemRunner> {
    runner: R,
    generator_class: String,
}

impl Default for Plugin<SystemRunner> {
    fn default() -> Self {
        Self::new(SystemRunner)
    }
}

impl<R: ProcessRunner> Plugin<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            generator_class: GENERATOR_CLASS.to_string(),
        }
    }

    pub fn with_generator_class(mut self, class: impl Into<String>) -> Self {
        self.generator_class = class.into();
        self
    }

    /// Run a module command. Unrecognized names do nothing.
    pub fn execute(
        &self,
        ctx: &CommandContext<'_>,
        out: &mut dyn Write,
    ) -> Result<Outcome, ScalagenError> {
        let command = PluginCommand::parse(ctx.command);
        debug!(command = ctx.command, action = command.name(), "Dispatching");

        match command {
            PluginCommand::Generate => {
                run_generator(
                    ctx.app,
                    &self.runner,
                    &self.generator_class,
                    ctx.args,
                    ctx.env,
                    out,
                )?;
                Ok(Outcome::Generated)
            }
            PluginCommand::CopyAssets => {
                let written = install_jquery_assets(ctx.app, out)?;
                Ok(Outcome::AssetsCopied {
                    count: written.len(),
                })
            }
            PluginCommand::Unrecognized => Ok(Outcome::Ignored),
        }
    }

    /// Hook run before any host command.
    pub fn before(&self, ctx: &CommandContext<'_>) -> Result<(), ScalagenError> {
        debug!(command = ctx.command, "before hook");
        Ok(())
    }

    /// Hook run after any host command.
    pub fn after(&self, ctx: &CommandContext<'_>) -> Result<(), ScalagenError> {
        if ctx.command == "new" {
            debug!("New application created; nothing to set up");
        }
        Ok(())
    }
}
