//! Integration tests for `scalagen:generate` / `scalagen:g`
//!
//! Unix-only where a stand-in `java` script records its arguments.

use scalagen::cli::RunContext;
use scalagen::config::ScalagenConfig;
use scalagen::error::ScalagenError;
use scalagen::java::GENERATOR_CLASS;
use scalagen::plugin::Outcome;
use scalagen::process::{Environment, SystemRunner};
use std::ffi::OsString;
use std::path::Path;

use crate::integration::{process_lock, Layout};

fn config_for(layout: &Layout, java_home: &Path) -> ScalagenConfig {
    let mut config = ScalagenConfig::default();
    config.java.home = Some(java_home.to_path_buf());
    config.module.root = Some(layout.module_root.clone());
    config
}

fn os_args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

fn test_env(args_file: &Path) -> Environment {
    let mut env = Environment::new();
    env.insert("SCALAGEN_TEST_ARGS".into(), args_file.into());
    env
}

fn generate(
    layout: &Layout,
    config: &ScalagenConfig,
    env: Environment,
    args: &[OsString],
) -> (Result<Outcome, ScalagenError>, String) {
    let ctx = RunContext::with_runner(&layout.app_root, config, env, SystemRunner).unwrap();
    let mut out: Vec<u8> = Vec::new();
    let result = ctx.execute("scalagen:g", &args, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_missing_java_is_reported_as_java_not_found() {
    let layout = Layout::new();
    let config = config_for(&layout, &layout.scratch().join("no-such-jdk"));

    let _guard = process_lock();
    let (result, printed) = generate(&layout, &config, Environment::new(), &os_args(&["-verbose"]));

    let err = result.unwrap_err();
    assert!(matches!(err, ScalagenError::JavaNotFound { .. }));
    assert_eq!(err.exit_code(), -1);
    assert!(err.to_string().contains("JAVA_HOME"));
    assert!(printed.starts_with("~ Generating code\n~ \n"));
}

#[cfg(unix)]
#[test]
fn test_generator_receives_forwarded_arguments() {
    let layout = Layout::new();
    std::fs::create_dir_all(layout.app_root.join("lib")).unwrap();
    std::fs::write(layout.app_root.join("lib").join("app.jar"), b"").unwrap();
    let args_file = layout.scratch().join("args.txt");

    let _guard = process_lock();
    let java_home = crate::integration::fake_java_home(layout.scratch());
    let config = config_for(&layout, &java_home);
    let (result, printed) = generate(
        &layout,
        &config,
        test_env(&args_file),
        &os_args(&["--scaffold", "User", "name:String", "-verbose"]),
    );
    assert_eq!(result.unwrap(), Outcome::Generated);
    assert_eq!(printed, "~ Generating code\n~ \n\n");

    let recorded = std::fs::read_to_string(&args_file).unwrap();
    let recorded: Vec<&str> = recorded.lines().collect();
    assert_eq!(
        recorded[recorded.len() - 5..],
        [GENERATOR_CLASS, "--scaffold", "User", "name:String", "-verbose"]
    );
    assert_eq!(recorded[0], "-Dfile.encoding=utf-8");
    assert!(recorded.contains(&"-classpath"));
    let app_path = format!("-Dapplication.path={}", layout.app_root.display());
    assert!(recorded.contains(&app_path.as_str()));
    assert!(recorded.contains(&"-Dplay.id="));
}

#[cfg(unix)]
#[test]
fn test_generator_exit_code_is_surfaced() {
    let layout = Layout::new();
    let args_file = layout.scratch().join("args.txt");

    let _guard = process_lock();
    let java_home = crate::integration::fake_java_home(layout.scratch());
    let config = config_for(&layout, &java_home);
    let mut env = test_env(&args_file);
    env.insert("SCALAGEN_TEST_EXIT".into(), "3".into());

    let (result, _) = generate(&layout, &config, env, &[]);
    let err = result.unwrap_err();
    assert!(matches!(err, ScalagenError::GeneratorFailed { code: 3 }));
    assert_eq!(err.exit_code(), 3);
}

#[cfg(unix)]
#[test]
fn test_java_home_taken_from_environment() {
    let layout = Layout::new();
    let args_file = layout.scratch().join("args.txt");

    let _guard = process_lock();
    let java_home = crate::integration::fake_java_home(layout.scratch());
    let mut config = ScalagenConfig::default();
    config.module.root = Some(layout.module_root.clone());
    let mut env = test_env(&args_file);
    env.insert("JAVA_HOME".into(), java_home.into_os_string());

    let (result, _) = generate(&layout, &config, env, &os_args(&["--m", "Post"]));
    assert_eq!(result.unwrap(), Outcome::Generated);
    assert!(std::fs::read_to_string(&args_file)
        .unwrap()
        .ends_with("--m\nPost\n"));
}

#[cfg(unix)]
#[test]
fn test_non_executable_java_is_reported_as_java_not_found() {
    let layout = Layout::new();
    let args_file = layout.scratch().join("args.txt");

    let _guard = process_lock();
    let java_home = crate::integration::non_executable_java_home(layout.scratch());
    let config = config_for(&layout, &java_home);

    let (result, printed) = generate(&layout, &config, test_env(&args_file), &[]);
    let err = result.unwrap_err();
    match &err {
        ScalagenError::JavaNotFound { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected JavaNotFound, got {:?}", other),
    }
    assert_eq!(err.exit_code(), -1);
    assert_eq!(printed, "~ Generating code\n~ \n");
    assert!(!args_file.exists());
}

#[cfg(unix)]
#[test]
fn test_non_utf8_environment_and_arguments_reach_generator() {
    use std::os::unix::ffi::OsStringExt;

    let layout = Layout::new();
    let args_file = layout.scratch().join("args.txt");

    let _guard = process_lock();
    let java_home = crate::integration::fake_java_home(layout.scratch());
    let config = config_for(&layout, &java_home);
    let mut env = test_env(&args_file);
    env.insert(
        "SCALAGEN_TEST_VALUE".into(),
        OsString::from_vec(b"caf\xe9".to_vec()),
    );
    let args = vec![OsString::from("--m"), OsString::from_vec(b"Caf\xe9".to_vec())];

    let (result, _) = generate(&layout, &config, env, &args);
    assert_eq!(result.unwrap(), Outcome::Generated);

    let value = std::fs::read(layout.scratch().join("args.txt.value")).unwrap();
    assert_eq!(value, b"caf\xe9");
    let recorded = std::fs::read(&args_file).unwrap();
    assert!(recorded.ends_with(b"--m\nCaf\xe9\n"));
}
