//! Configuration file support.
//!
//! A configuration file holds the chart theme and the named bindings that
//! several charts share. It is plain JSON and versioned.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::binding::{BindingError, CategoryColorBinding};
use crate::color::Color;
use crate::palette::Palette;
use crate::theme::Theme;

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Where a binding's colors come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSource {
    /// Explicit colors, parallel to the labels
    Colors(Vec<Color>),
    /// A built-in palette by name
    Palette(String),
}

/// A named binding definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    /// Name used to select the binding
    pub name: String,
    /// Category labels in order
    pub labels: Vec<String>,
    /// Colors for the labels
    #[serde(flatten)]
    pub source: ColorSource,
}

impl BindingConfig {
    /// Build the binding this entry describes.
    pub fn build(&self) -> Result<CategoryColorBinding, ConfigError> {
        let binding = match &self.source {
            ColorSource::Colors(colors) => {
                CategoryColorBinding::new(self.labels.clone(), colors.clone())?
            }
            ColorSource::Palette(name) => {
                let palette = Palette::by_name(name, self.labels.len())
                    .ok_or_else(|| ConfigError::UnknownPalette(name.clone()))?;
                palette.bind(self.labels.clone())?
            }
        };
        Ok(binding)
    }
}

/// Configuration that can be saved and loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Theme applied to every chart
    #[serde(default)]
    pub theme: Theme,

    /// Named bindings
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

impl PaletteConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            theme: Theme::default(),
            bindings: vec![BindingConfig {
                name: "age".to_string(),
                labels: vec!["infant".into(), "child".into(), "adult".into()],
                source: ColorSource::Palette("colorblind".to_string()),
            }],
        }
    }

    /// Build the binding named `name`.
    pub fn binding(&self, name: &str) -> Result<CategoryColorBinding, ConfigError> {
        self.bindings
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| ConfigError::UnknownBinding(name.to_string()))?
            .build()
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        let mut names = HashSet::new();
        for binding in &config.bindings {
            if !names.insert(binding.name.as_str()) {
                return Err(ConfigError::DuplicateBinding(binding.name.clone()));
            }
        }

        Ok(config)
    }

    /// Load configuration from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json().map_err(ConfigError::SerializeError)?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "catpal.json"
    }

    /// Get the default config file path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("catpal").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("catpal")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from `path` if the file exists.
    ///
    /// A missing file is `Ok(None)`. A file that exists but cannot be read or
    /// parsed is an error.
    pub fn load_if_present(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Pick the configuration to use.
    ///
    /// An explicit path must load. Otherwise the file at `default_path` is
    /// used when present, and the built-in configuration only when no file
    /// exists there.
    pub fn select(
        explicit: Option<&Path>,
        default_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let found = match default_path {
            Some(path) => Self::load_if_present(path)?,
            None => None,
        };
        Ok(found.unwrap_or_else(|| {
            log::debug!("Using built-in default configuration");
            Self::default()
        }))
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// JSON serialization error when saving
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[source] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A binding entry is invalid
    #[error("Invalid binding: {0}")]
    Binding(#[from] BindingError),

    /// Two bindings share a name
    #[error("Duplicate binding: {0}")]
    DuplicateBinding(String),

    /// No binding with this name
    #[error("Unknown binding: {0}")]
    UnknownBinding(String),

    /// No built-in palette with this name
    #[error("Unknown palette: {0}")]
    UnknownPalette(String),
}
