//! TOML-based configuration persistence for the shell.
//!
//! Reads and writes `ShellConfig` to the platform-appropriate config file:
//! - Linux:    `~/.config/mirrordeck/config.toml`
//! - macOS:    `~/Library/Application Support/MirrorDeck/config.toml`
//! - Windows:  `%APPDATA%\MirrorDeck\config.toml`
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return
//! value of `some_fn()` when the field is absent from the TOML file.  This
//! allows the shell to work correctly on first run (before a config file
//! exists) and when upgrading from an older config file that is missing
//! newer fields.
//!
//! # Example file
//!
//! ```toml
//! [shell]
//! switch_key = "Escape"
//! log_level = "info"
//!
//! [chrome]
//! top_bar_height = 50
//!
//! [panel]
//! width = 1280
//! height = 480
//!
//! [bindings]
//! selectDown = "Enter"
//! back = "Backspace"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use deck_core::{BindingError, BindingTable, BoxSize, ChromeConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level shell configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellConfig {
    pub shell: ShellSection,
    #[serde(default = "default_chrome")]
    pub chrome: ChromeConfig,
    #[serde(default)]
    pub panel: PanelSection,
    /// Action name → key code.  A `BTreeMap` keeps the on-disk and
    /// resolution order deterministic (alphabetical by action name).
    #[serde(default = "default_bindings")]
    pub bindings: BTreeMap<String, String>,
}

/// General shell behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellSection {
    /// Schema version string – bump when breaking changes are introduced.
    #[serde(default = "default_version")]
    pub version: String,
    /// Key code reserved for switching views.  An empty string disables the
    /// reservation.
    #[serde(default = "default_switch_key")]
    pub switch_key: String,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Panel (root container) resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanelSection {
    /// Panel width in layout units.
    #[serde(default = "default_panel_width")]
    pub width: u32,
    /// Panel height in layout units.
    #[serde(default = "default_panel_height")]
    pub height: u32,
}

impl PanelSection {
    /// The panel resolution as a domain box size.
    pub fn size(&self) -> BoxSize {
        BoxSize::new(self.width, self.height)
    }
}

impl ShellConfig {
    /// Builds the binding table from the `[bindings]` section.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::DuplicateKeyCode`] when two actions share a
    /// key code – a config mistake surfaced at startup rather than resolved
    /// arbitrarily at routing time.
    pub fn binding_table(&self) -> Result<BindingTable, BindingError> {
        BindingTable::from_entries(self.bindings.iter())
    }

    /// The reserved view-switch key, with the empty-string sentinel
    /// normalised to `None`.
    pub fn switch_key(&self) -> Option<String> {
        if self.shell.switch_key.is_empty() {
            None
        } else {
            Some(self.shell.switch_key.clone())
        }
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_version() -> String {
    "1.0".to_string()
}
fn default_switch_key() -> String {
    "Escape".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_chrome() -> ChromeConfig {
    ChromeConfig::new(50)
}
fn default_panel_width() -> u32 {
    1280
}
fn default_panel_height() -> u32 {
    480
}

/// The binding set the shell ships with.
fn default_bindings() -> BTreeMap<String, String> {
    [
        ("left", "ArrowLeft"),
        ("right", "ArrowRight"),
        ("up", "ArrowUp"),
        ("down", "ArrowDown"),
        ("selectDown", "Enter"),
        ("back", "Backspace"),
        ("home", "KeyH"),
    ]
    .into_iter()
    .map(|(a, k)| (a.to_string(), k.to_string()))
    .collect()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            shell: ShellSection::default(),
            chrome: default_chrome(),
            panel: PanelSection::default(),
            bindings: default_bindings(),
        }
    }
}

impl Default for ShellSection {
    fn default() -> Self {
        Self {
            version: default_version(),
            switch_key: default_switch_key(),
            log_level: default_log_level(),
        }
    }
}

impl Default for PanelSection {
    fn default() -> Self {
        Self {
            width: default_panel_width(),
            height: default_panel_height(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config
/// base directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory
/// cannot be determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `ShellConfig` from the platform config file, returning
/// `ShellConfig::default()` if the file does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not
/// found", and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<ShellConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads `ShellConfig` from an explicit path, returning
/// `ShellConfig::default()` if the file does not exist.
pub fn load_config_from(path: &Path) -> Result<ShellConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: ShellConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ShellConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to the platform config file.
///
/// Creates the config directory and file if they do not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &ShellConfig) -> Result<(), ConfigError> {
    let path = config_file_path()?;

    // Ensure directory exists before writing.
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("mirrordeck"))
    }

    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/MirrorDeck
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("MirrorDeck")
        })
    }

    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("MirrorDeck"))
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        // Fallback for unsupported platforms.
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
