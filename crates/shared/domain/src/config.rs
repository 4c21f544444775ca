use crate::ids::{CourseCode, StudentId};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration for the registrar application.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrarConfigInner {
    pub logging: LoggingConfig,
    pub shell: ShellConfig,
    pub seed: SeedConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct RegistrarConfig {
    #[serde(flatten, default)]
    inner: Arc<RegistrarConfigInner>,
}

impl Deref for RegistrarConfig {
    type Target = RegistrarConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for RegistrarConfig {
    fn deref_mut(&mut self) -> &mut RegistrarConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub directory: Option<PathBuf>,
    /// Write file logs as JSON lines.
    pub json: bool,
}

/// Interactive menu behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub banner: bool,
    pub show_menu: bool,
}

/// Entities loaded into the registry at startup.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub courses: Vec<SeedCourse>,
    pub students: Vec<SeedStudent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedCourse {
    pub code: CourseCode,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub capacity: usize,
    #[serde(default)]
    pub schedule: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedStudent {
    pub id: StudentId,
    pub name: String,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), directory: None, json: false }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { banner: true, show_menu: true }
    }
}
