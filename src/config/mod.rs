use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use thiserror::Error;

const CONFIG_DIR_NAME: &str = "contact_core";
const CONFIG_FILE_NAME: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Environment variables consulted when resolving delivery credentials.
pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";

/// Overrides the directory the config file is read from. Used by operators
/// running several profiles and by the test suite.
pub const ENV_CONFIG_DIR: &str = "CONTACT_CORE_CONFIG_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Missing delivery credential: {0}")]
    MissingCredential(&'static str),
    #[error("No configuration directory available")]
    NoConfigDir,
}

/// Credentials for the EmailJS-compatible delivery service.
///
/// Resolved once at startup; the wizard's delivery adapter is built from the
/// resolved value so a missing credential is detectable before the first
/// submit attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryConfig {
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
}

impl DeliveryConfig {
    /// Resolves credentials from the environment, falling back to the config
    /// file for any variable that is unset or blank. Resolution itself never
    /// fails; completeness is checked separately by [`validate`](Self::validate).
    pub fn resolve() -> Self {
        let file = match ConfigManager::new() {
            Ok(manager) => manager.load().unwrap_or_default(),
            Err(_) => DeliveryConfig::default(),
        };
        Self::from_sources(file, |name| std::env::var(name).ok())
    }

    /// Merges file-sourced values with an environment lookup. Environment
    /// values win; blank values count as unset.
    pub fn from_sources(
        file: DeliveryConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let pick = |name: &str, fallback: String| -> String {
            match env(name) {
                Some(value) if !value.trim().is_empty() => value,
                _ => fallback,
            }
        };
        Self {
            service_id: pick(ENV_SERVICE_ID, file.service_id),
            template_id: pick(ENV_TEMPLATE_ID, file.template_id),
            public_key: pick(ENV_PUBLIC_KEY, file.public_key),
        }
    }

    /// Reports the first missing credential, if any.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_id.trim().is_empty() {
            return Err(ConfigError::MissingCredential(ENV_SERVICE_ID));
        }
        if self.template_id.trim().is_empty() {
            return Err(ConfigError::MissingCredential(ENV_TEMPLATE_ID));
        }
        if self.public_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential(ENV_PUBLIC_KEY));
        }
        Ok(())
    }
}

/// Loads and saves the delivery config file under the platform config dir.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        let base = match std::env::var(ENV_CONFIG_DIR) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => dirs::config_dir()
                .ok_or(ConfigError::NoConfigDir)?
                .join(CONFIG_DIR_NAME),
        };
        Self::from_base(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, ConfigError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE_NAME),
        })
    }

    pub fn load(&self) -> Result<DeliveryConfig, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(DeliveryConfig::default())
        }
    }

    pub fn save(&self, config: &DeliveryConfig) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn ensure_dir(path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
