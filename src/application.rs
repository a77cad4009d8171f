//! Application handle: the target project a command operates on.
//!
//! The handle knows how to launch JVM code against the project and how to
//! override project files with files bundled in the module.

use crate::config::ScalagenConfig;
use crate::error::ScalagenError;
use crate::java::{collect_jars, java_program, JavaInvocation, DEFAULT_JVM_OPTIONS};
use crate::process::Environment;
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Operations a command needs from the target project.
pub trait Application {
    /// Application root directory.
    fn root(&self) -> &Path;

    /// Build a JVM launch of `main_class` with `args`.
    ///
    /// `classpath: None` derives the project's default classpath.
    fn java_cmd(
        &self,
        jvm_options: &[String],
        classpath: Option<Vec<PathBuf>>,
        main_class: &str,
        args: &[OsString],
    ) -> Result<JavaInvocation, ScalagenError>;

    /// Copy `source` from the module resources to `destination` in the
    /// project, replacing any existing file. Returns the written path.
    fn override_file(
        &self,
        source: &str,
        destination: &str,
        out: &mut dyn Write,
    ) -> Result<PathBuf, ScalagenError>;
}

/// Play application on disk
#[derive(Debug, Clone)]
pub struct PlayApplication {
    root: PathBuf,
    module_root: PathBuf,
    java_home: Option<PathBuf>,
    jvm_options: Vec<String>,
    extra_classpath: Vec<PathBuf>,
    play_id: String,
}

impl PlayApplication {
    pub fn new(root: impl Into<PathBuf>, module_root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            module_root: module_root.into(),
            java_home: None,
            jvm_options: Vec::new(),
            extra_classpath: Vec::new(),
            play_id: String::new(),
        }
    }

    /// Build the handle from loaded configuration and the process environment.
    ///
    /// `java.home` from configuration wins over `JAVA_HOME` in `env`.
    pub fn from_config(
        root: &Path,
        config: &ScalagenConfig,
        env: &Environment,
    ) -> Result<Self, ScalagenError> {
        let root = dunce::canonicalize(root).map_err(|e| ScalagenError::io(root, e))?;
        let module_root = config.module.resolve_root(env)?;
        let java_home = config
            .java
            .home
            .clone()
            .or_else(|| env.get(OsStr::new("JAVA_HOME")).map(PathBuf::from));

        debug!(
            root = %root.display(),
            module_root = %module_root.display(),
            java_home = ?java_home,
            "Application handle created"
        );

        Ok(Self::new(root, module_root)
            .with_java_home(java_home)
            .with_jvm_options(config.java.options.clone())
            .with_extra_classpath(config.java.classpath.clone())
            .with_play_id(config.play.id.clone()))
    }

    pub fn with_java_home(mut self, java_home: Option<PathBuf>) -> Self {
        self.java_home = java_home;
        self
    }

    pub fn with_jvm_options(mut self, options: Vec<String>) -> Self {
        self.jvm_options = options;
        self
    }

    pub fn with_extra_classpath(mut self, entries: Vec<PathBuf>) -> Self {
        self.extra_classpath = entries;
        self
    }

    pub fn with_play_id(mut self, play_id: String) -> Self {
        self.play_id = play_id;
        self
    }

    pub fn module_root(&self) -> &Path {
        &self.module_root
    }

    /// `conf/`, application jars, module jars, then configured extras.
    pub fn default_classpath(&self) -> Vec<PathBuf> {
        let mut classpath = vec![self.root.join("conf")];
        classpath.extend(collect_jars(&self.root.join("lib")));
        classpath.extend(collect_jars(&self.module_root.join("lib")));
        classpath.extend(self.extra_classpath.iter().cloned());
        classpath
    }
}

impl Application for PlayApplication {
    fn root(&self) -> &Path {
        &self.root
    }

    fn java_cmd(
        &self,
        jvm_options: &[String],
        classpath: Option<Vec<PathBuf>>,
        main_class: &str,
        args: &[OsString],
    ) -> Result<JavaInvocation, ScalagenError> {
        let options = DEFAULT_JVM_OPTIONS
            .iter()
            .map(|o| o.to_string())
            .chain(self.jvm_options.iter().cloned())
            .chain(jvm_options.iter().cloned())
            .collect();

        let mut system_properties = BTreeMap::new();
        system_properties.insert(
            "application.path".to_string(),
            self.root.clone().into_os_string(),
        );
        system_properties.insert("play.id".to_string(), OsString::from(&self.play_id));

        Ok(JavaInvocation {
            program: java_program(self.java_home.as_deref()),
            jvm_options: options,
            classpath: classpath.unwrap_or_else(|| self.default_classpath()),
            system_properties,
            main_class: main_class.to_string(),
            args: args.to_vec(),
        })
    }

    fn override_file(
        &self,
        source: &str,
        destination: &str,
        out: &mut dyn Write,
    ) -> Result<PathBuf, ScalagenError> {
        let from = self.module_root.join(source);
        if !from.is_file() {
            return Err(ScalagenError::AssetNotFound(from));
        }

        let to = self.root.join(destination);
        if let Some(parent) = to.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ScalagenError::io(parent, e))?;
        }
        std::fs::copy(&from, &to).map_err(|e| ScalagenError::io(&to, e))?;

        info!(from = %from.display(), to = %to.display(), "File overridden");
        writeln!(out, "~ Copied {} to {}", from.display(), to.display())
            .map_err(|e| ScalagenError::io("stdout", e))?;
        Ok(to)
    }
}
