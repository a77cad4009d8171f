//! Java process invocation: executable resolution, classpath discovery and
//! rendering to an argument vector.

use crate::error::ScalagenError;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Fully qualified class of the external generator.
pub const GENERATOR_CLASS: &str = "play.modules.scalagen.Generator";

/// Options every JVM launch carries before configured ones.
pub const DEFAULT_JVM_OPTIONS: &[&str] = &["-Dfile.encoding=utf-8"];

/// A single JVM launch, not yet rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaInvocation {
    pub program: PathBuf,
    pub jvm_options: Vec<String>,
    pub classpath: Vec<PathBuf>,
    /// Rendered as `-Dkey=value`, sorted by key
    pub system_properties: BTreeMap<String, OsString>,
    pub main_class: String,
    pub args: Vec<OsString>,
}

impl JavaInvocation {
    /// Render to `[program, options.., -classpath, cp, -Dk=v.., main_class, args..]`.
    pub fn to_argv(&self) -> Result<Vec<OsString>, ScalagenError> {
        let mut argv = Vec::with_capacity(
            self.jvm_options.len() + self.system_properties.len() + self.args.len() + 4,
        );
        argv.push(self.program.clone().into_os_string());
        argv.extend(self.jvm_options.iter().map(OsString::from));
        if !self.classpath.is_empty() {
            argv.push(OsString::from("-classpath"));
            argv.push(join_classpath(&self.classpath)?);
        }
        for (key, value) in &self.system_properties {
            let mut property = OsString::from(format!("-D{}=", key));
            property.push(value);
            argv.push(property);
        }
        argv.push(OsString::from(&self.main_class));
        argv.extend(self.args.iter().cloned());
        Ok(argv)
    }
}

/// Java executable for a runtime home, or plain `java` for a `PATH` lookup.
pub fn java_program(java_home: Option<&Path>) -> PathBuf {
    match java_home {
        Some(home) if !home.as_os_str().is_empty() => home.join("bin").join(java_binary_name()),
        _ => PathBuf::from("java"),
    }
}

fn java_binary_name() -> &'static str {
    if cfg!(windows) {
        "java.exe"
    } else {
        "java"
    }
}

/// Every `*.jar` below `dir`, sorted by path. A missing directory yields nothing.
pub fn collect_jars(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    let mut jars: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "jar"))
        .collect();
    jars.sort();
    jars
}

/// Join classpath entries with the platform separator.
pub fn join_classpath(entries: &[PathBuf]) -> Result<OsString, ScalagenError> {
    std::env::join_paths(entries)
        .map_err(|e| ScalagenError::Config(format!("Invalid classpath entry: {}", e)))
}
