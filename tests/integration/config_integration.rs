//! Integration tests for Configuration System

use scalagen::application::Application;
use scalagen::cli::RunContext;
use scalagen::config::{app_config_paths, ConfigLoader};
use scalagen::error::ScalagenError;
use scalagen::process::Environment;
use std::path::PathBuf;

use crate::integration::{write_file, Layout};

#[test]
fn test_app_conf_file_is_loaded() {
    let layout = Layout::new();
    let [base, _] = app_config_paths(&layout.app_root, "dev");
    write_file(
        &base,
        r#"
[java]
options = ["-Xmx1g"]

[play]
id = "ci"
"#,
    );

    let config = ConfigLoader::load(&layout.app_root, &Environment::new()).unwrap();
    assert_eq!(config.java.options, vec!["-Xmx1g".to_string()]);
    assert_eq!(config.play.id, "ci");
}

#[test]
fn test_env_file_selected_from_captured_environment() {
    let layout = Layout::new();
    let [base, _] = app_config_paths(&layout.app_root, "dev");
    let [_, prod] = app_config_paths(&layout.app_root, "prod");
    write_file(&base, "[play]\nid = \"base\"\n");
    write_file(&prod, "[play]\nid = \"prod\"\n");

    let mut env = Environment::new();
    assert_eq!(ConfigLoader::load(&layout.app_root, &env).unwrap().play.id, "base");
    env.insert("SCALAGEN_ENV".into(), "prod".into());
    assert_eq!(ConfigLoader::load(&layout.app_root, &env).unwrap().play.id, "prod");
}

#[test]
fn test_explicit_file_skips_app_conf() {
    let layout = Layout::new();
    let [base, _] = app_config_paths(&layout.app_root, "dev");
    write_file(&base, "[play]\nid = \"from-app\"\n");
    let explicit = layout.scratch().join("explicit.toml");
    write_file(&explicit, "[play]\nid = \"explicit\"\n");

    let config = ConfigLoader::load_from_file(&explicit).unwrap();
    assert_eq!(config.play.id, "explicit");
}

#[test]
fn test_missing_explicit_file_is_config_error() {
    let layout = Layout::new();
    let result = ConfigLoader::load_from_file(&layout.scratch().join("missing.toml"));
    assert!(matches!(result, Err(ScalagenError::Config(_))));
}

#[test]
fn test_invalid_generator_class_rejected() {
    let layout = Layout::new();
    let explicit = layout.scratch().join("bad.toml");
    write_file(&explicit, "[java]\ngenerator_class = \"\"\n");
    assert!(matches!(
        ConfigLoader::load_from_file(&explicit),
        Err(ScalagenError::Config(_))
    ));
}

#[test]
fn test_run_context_uses_configured_module_root() {
    let layout = Layout::new();
    let explicit = layout.scratch().join("scalagen.toml");
    write_file(
        &explicit,
        &format!(
            "[module]\nroot = {:?}\n[java]\nclasspath = [\"/opt/play/framework/play.jar\"]\n",
            layout.module_root.to_string_lossy()
        ),
    );

    let ctx = RunContext::new(layout.app_root.clone(), Some(explicit), Environment::new()).unwrap();
    assert_eq!(ctx.app().module_root(), layout.module_root.as_path());
    assert_eq!(
        ctx.app().default_classpath().last(),
        Some(&PathBuf::from("/opt/play/framework/play.jar"))
    );
    assert_eq!(ctx.app().root(), layout.app_root.as_path());
}
