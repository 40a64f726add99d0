use std::path::{Path, PathBuf};

use crate::{
    config::{ConfigPatch, EngineConfig, SharedConfig},
    Result,
};
use super::{host::Host, session::ThaiSession};

/// The input method: owns the configuration shared by all sessions.
#[derive(Debug, Clone, Default)]
pub struct ThaiEngine {
    config: SharedConfig,
    /// Configuration file, if the engine persists its settings
    config_path: Option<PathBuf>,
}

impl ThaiEngine {
    /// Create an engine with the given settings and no configuration file
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: SharedConfig::new(config),
            config_path: None,
        }
    }

    /// Create an engine backed by a configuration file.
    ///
    /// A missing or unreadable file yields the defaults.
    pub fn with_config_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = EngineConfig::load_or_default(&path);
        log::debug!("Loaded configuration {:?} from {}", config, path.display());
        Self {
            config: SharedConfig::new(config),
            config_path: Some(path),
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config.snapshot()
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Create a session for a newly focused text field
    pub fn create_session(&self, host: &dyn Host) -> ThaiSession {
        ThaiSession::new(self.config.clone(), host)
    }

    /// Replace the whole configuration; takes effect on the next keystroke
    pub fn set_config(&self, config: EngineConfig) {
        self.config.replace(config);
    }

    /// Apply the keys present in an INI fragment, leaving the others alone
    pub fn apply_config_text(&self, text: &str) -> Result<EngineConfig> {
        let patch = ConfigPatch::parse(text)?;
        Ok(self.config.apply(&patch))
    }

    /// Re-read the configuration file, falling back to the defaults
    pub fn reload_config(&self) -> EngineConfig {
        let config = match &self.config_path {
            Some(path) => EngineConfig::load_or_default(path),
            None => EngineConfig::default(),
        };
        self.config.replace(config);
        config
    }

    /// Write the current configuration to the configuration file
    pub fn save_config(&self) -> Result<()> {
        if let Some(path) = &self.config_path {
            self.config().save(path)?;
        }
        Ok(())
    }
}
