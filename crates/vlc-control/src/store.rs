/// Settings persistence capability and its two stock backends.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use vlc_protocol::settings::Settings;

/// Where the host keeps the settings record between sessions.
pub trait SettingsStore {
    /// Stored record, or None if nothing has been saved yet.
    fn load(&self) -> anyhow::Result<Option<Settings>>;

    fn save(&self, settings: &Settings) -> anyhow::Result<()>;
}

/// Settings kept in a TOML file on disk.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for TomlFileStore {
    fn load(&self) -> anyhow::Result<Option<Settings>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No settings file, using defaults");
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read settings: {}", self.path.display()))?;
        let settings = Settings::from_toml(&contents)
            .with_context(|| format!("Invalid settings file: {}", self.path.display()))?;
        Ok(Some(settings))
    }

    /// Creates parent directories if needed. Overwrites any existing file.
    fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Cannot create {}", parent.display()))?;
            }
        }
        let contents = settings.to_toml().context("Cannot serialize settings")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Cannot write settings: {}", self.path.display()))?;
        info!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}

/// In-process store for hosts without persistent storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: RefCell<Option<Settings>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a previously stored record.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            record: RefCell::new(Some(settings)),
            saves: Cell::new(0),
        }
    }

    pub fn stored(&self) -> Option<Settings> {
        self.record.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> anyhow::Result<Option<Settings>> {
        Ok(self.record.borrow().clone())
    }

    fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        *self.record.borrow_mut() = Some(settings.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
