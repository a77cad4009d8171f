//! Generator launch: builds the JVM invocation through the application handle
//! and runs it to completion.

use crate::application::Application;
use crate::error::ScalagenError;
use crate::process::{Environment, ProcessExit, ProcessRunner};
use std::ffi::OsString;
use std::io::{self, Write};
use tracing::{debug, info, warn};

/// Launch the generator class with `args` forwarded unchanged.
///
/// Blocks until the generator exits. Any failure to start the runtime is
/// [`ScalagenError::JavaNotFound`]; a generator that exits non-zero is
/// reported as [`ScalagenError::GeneratorFailed`].
pub fn run_generator(
    app: &dyn Application,
    runner: &dyn ProcessRunner,
    generator_class: &str,
    args: &[OsString],
    env: &Environment,
    out: &mut dyn Write,
) -> Result<(), ScalagenError> {
    let stdout_err = |e: io::Error| ScalagenError::io("stdout", e);
    writeln!(out, "~ Generating code").map_err(stdout_err)?;
    writeln!(out, "~ ").map_err(stdout_err)?;
    // The child inherits our stdout; the banner must land first.
    out.flush().map_err(stdout_err)?;

    let invocation = app.java_cmd(&[], None, generator_class, args)?;
    let argv = invocation.to_argv()?;
    debug!(argv = ?argv, "Generator invocation built");

    let exit = runner.run(&argv, env).map_err(|source| {
        debug!(
            program = %invocation.program.display(),
            error = %source,
            "Java executable could not be launched"
        );
        ScalagenError::JavaNotFound {
            program: invocation.program.to_string_lossy().into_owned(),
            source,
        }
    })?;

    writeln!(out).map_err(stdout_err)?;

    match exit {
        ProcessExit::Code(0) => {
            info!("Generator completed");
            Ok(())
        }
        ProcessExit::Code(code) => {
            warn!(code, "Generator exited with non-zero status");
            Err(ScalagenError::GeneratorFailed { code })
        }
        ProcessExit::Terminated => {
            warn!("Generator terminated by signal");
            Err(ScalagenError::GeneratorTerminated)
        }
    }
}
