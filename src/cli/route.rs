//! CLI route: run context and dispatch through the module hooks.

use crate::application::PlayApplication;
use crate::cli::command_name;
use crate::config::{ConfigLoader, ScalagenConfig};
use crate::error::ScalagenError;
use crate::plugin::{CommandContext, Outcome, Plugin};
use crate::process::{Environment, ProcessRunner, SystemRunner};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Runtime context for CLI execution: application handle, plugin and environment.
pub struct RunContext<R = SystemRunner> {
    app: PlayApplication,
    plugin: Plugin<R>,
    env: Environment,
}

impl RunContext<SystemRunner> {
    /// Load configuration for `app_root` (or from `config_path`) and build the handle.
    pub fn new(
        app_root: PathBuf,
        config_path: Option<PathBuf>,
        env: Environment,
    ) -> Result<Self, ScalagenError> {
        let config = load_config(&app_root, config_path.as_deref(), &env)?;
        Self::with_runner(&app_root, &config, env, SystemRunner)
    }
}

impl<R: ProcessRunner> RunContext<R> {
    pub fn with_runner(
        app_root: &Path,
        config: &ScalagenConfig,
        env: Environment,
        runner: R,
    ) -> Result<Self, ScalagenError> {
        let app = PlayApplication::from_config(app_root, config, &env)?;
        let plugin = Plugin::new(runner).with_generator_class(config.java.generator_class.clone());
        Ok(Self { app, plugin, env })
    }

    pub fn app(&self) -> &PlayApplication {
        &self.app
    }

    /// Run `command` wrapped in the before/after hooks.
    pub fn execute(
        &self,
        command: &str,
        args: &[OsString],
        out: &mut dyn Write,
    ) -> Result<Outcome, ScalagenError> {
        let started = Instant::now();
        let ctx = CommandContext {
            command,
            app: &self.app,
            args,
            env: &self.env,
        };

        self.plugin.before(&ctx)?;
        let outcome = self.plugin.execute(&ctx, out)?;
        self.plugin.after(&ctx)?;

        info!(
            command = command_name(command),
            outcome = ?outcome,
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        Ok(outcome)
    }
}

fn load_config(
    app_root: &Path,
    config_path: Option<&Path>,
    env: &Environment,
) -> Result<ScalagenConfig, ScalagenError> {
    match config_path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(app_root, env),
    }
}
