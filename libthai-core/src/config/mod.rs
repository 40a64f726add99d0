//! Engine configuration and its INI file form
//!
//! The file uses the fcitx addon layout:
//!
//! ```text
//! KeyboardMap=KETMANEE
//! Correction=True
//! Strictness=Basic check
//! ```

pub mod lexer;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use logos::Logos;
use thiserror::Error;

use crate::error::Error;
use crate::grammar::Strictness;
use crate::keymap::KeyboardLayout;
use lexer::ConfToken;

pub const KEY_KEYBOARD_MAP: &str = "KeyboardMap";
pub const KEY_CORRECTION: &str = "Correction";
pub const KEY_STRICTNESS: &str = "Strictness";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Strictness {
    pub const ALL: [Strictness; 3] = [
        Strictness::Passthrough,
        Strictness::BasicCheck,
        Strictness::Strict,
    ];

    /// Name used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            Strictness::Passthrough => "Passthrough",
            Strictness::BasicCheck => "Basic check",
            Strictness::Strict => "Strict",
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strictness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "passthrough" | "none" => Ok(Strictness::Passthrough),
            "basiccheck" | "basic" => Ok(Strictness::BasicCheck),
            "strict" => Ok(Strictness::Strict),
            _ => Err(Error::UnknownStrictness(s.to_string())),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Settings read by every keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub keyboard_layout: KeyboardLayout,
    pub correction: bool,
    pub strictness: Strictness,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            keyboard_layout: KeyboardLayout::Ketmanee,
            correction: true,
            strictness: Strictness::BasicCheck,
        }
    }
}

/// A partial configuration: only the keys present in a file or a settings
/// update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigPatch {
    pub keyboard_layout: Option<KeyboardLayout>,
    pub correction: Option<bool>,
    pub strictness: Option<Strictness>,
}

impl ConfigPatch {
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        Self::parse_lines(input, false)
    }

    /// Like [`parse`](Self::parse), but a key with an invalid value is left
    /// unset instead of failing the whole input.
    pub fn parse_lenient(input: &str) -> Result<Self, ConfigError> {
        Self::parse_lines(input, true)
    }

    fn parse_lines(input: &str, lenient: bool) -> Result<Self, ConfigError> {
        let mut patch = ConfigPatch::default();
        let mut lexer = ConfToken::lexer(input);
        let mut line = 1;
        let mut pending = Vec::new();

        while let Some(token) = lexer.next() {
            match token {
                Ok(ConfToken::Newline) => {
                    patch.apply_line(&pending, line, lenient)?;
                    pending.clear();
                    line += 1;
                }
                Ok(token) => pending.push(token),
                Err(_) => {
                    return Err(ConfigError::Parse {
                        line,
                        message: format!("Unexpected token: '{}'", lexer.slice()),
                    });
                }
            }
        }
        patch.apply_line(&pending, line, lenient)?;

        Ok(patch)
    }

    fn apply_line(&mut self, tokens: &[ConfToken], line: usize, lenient: bool) -> Result<(), ConfigError> {
        match self.apply_tokens(tokens, line) {
            Err(ConfigError::InvalidValue { key, value }) if lenient => {
                log::warn!("Invalid value {:?} for {} on line {}, using the default", value, key, line);
                Ok(())
            }
            result => result,
        }
    }

    fn apply_tokens(&mut self, tokens: &[ConfToken], line: usize) -> Result<(), ConfigError> {
        match tokens {
            [] | [ConfToken::Section(_)] => Ok(()),
            [ConfToken::Word(key), ConfToken::Equals, ConfToken::Word(value) | ConfToken::Quoted(value)] => {
                self.set(key, value)
            }
            [ConfToken::Word(key), ConfToken::Equals] => Err(ConfigError::InvalidValue {
                key: key.clone(),
                value: String::new(),
            }),
            _ => Err(ConfigError::Parse {
                line,
                message: "Expected Key=Value".to_string(),
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            KEY_KEYBOARD_MAP => self.keyboard_layout = Some(value.parse().map_err(|_| invalid())?),
            KEY_CORRECTION => self.correction = Some(parse_bool(value).ok_or_else(invalid)?),
            KEY_STRICTNESS => self.strictness = Some(value.parse().map_err(|_| invalid())?),
            _ => log::warn!("Ignoring unknown configuration key {}", key),
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == ConfigPatch::default()
    }
}

impl EngineConfig {
    /// Overlays the keys present in `patch`
    pub fn merged(self, patch: &ConfigPatch) -> Self {
        Self {
            keyboard_layout: patch.keyboard_layout.unwrap_or(self.keyboard_layout),
            correction: patch.correction.unwrap_or(self.correction),
            strictness: patch.strictness.unwrap_or(self.strictness),
        }
    }

    pub fn from_ini_str(input: &str) -> Result<Self, ConfigError> {
        Ok(Self::default().merged(&ConfigPatch::parse(input)?))
    }

    pub fn to_ini_string(&self) -> String {
        format!(
            "{}={}\n{}={}\n{}={}\n",
            KEY_KEYBOARD_MAP,
            self.keyboard_layout.name(),
            KEY_CORRECTION,
            if self.correction { "True" } else { "False" },
            KEY_STRICTNESS,
            self.strictness.name(),
        )
    }

    /// Reads `path`. Keys with invalid values keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let input = fs::read_to_string(path)?;
        Ok(Self::default().merged(&ConfigPatch::parse_lenient(&input)?))
    }

    /// Loads `path`, falling back to the defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No configuration at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Writes through a temporary file so readers never see a partial file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("conf.tmp");
        fs::write(&tmp, self.to_ini_string())?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// Configuration shared by the engine and all of its sessions.
///
/// Keystrokes read a copy with [`snapshot`](Self::snapshot); updates replace
/// the whole value, so a keystroke never sees a half-applied change.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<EngineConfig>>,
}

impl SharedConfig {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    pub fn snapshot(&self) -> EngineConfig {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn replace(&self, config: EngineConfig) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = config;
    }

    /// Applies a partial update under a single write lock
    pub fn apply(&self, patch: &ConfigPatch) -> EngineConfig {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = guard.merged(patch);
        *guard
    }
}
