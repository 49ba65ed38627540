use crate::config::{StorageProvider, prepare_storage_config, storage_config::StorageConfig};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Storage settings as written in the TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub provider: Option<String>,
    pub bucket: Option<String>,
    pub access_key_id: Option<String>,
    pub access_key_secret: Option<String>,
    pub endpoint: Option<String>,
    pub region: Option<String>,
    pub root_path: Option<String>,
}

/// Values given on the command line or through `KILL_ITEMS_*` variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageOverrides {
    pub provider: Option<String>,
    pub bucket: Option<String>,
    pub access_key_id: Option<String>,
    pub access_key_secret: Option<String>,
    pub endpoint: Option<String>,
    pub region: Option<String>,
    pub root_path: Option<String>,
}

impl StorageOverrides {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigRequest {
    /// Explicit config file; it must exist when given.
    pub config_file: Option<PathBuf>,
    pub overrides: StorageOverrides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    CommandLine,
    ConfigFile,
    Defaults,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub storage: StorageConfig,
    pub source: ConfigSource,
    pub config_file: Option<PathBuf>,
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "kill-items").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn default_data_root() -> Option<String> {
    ProjectDirs::from("", "", "kill-items")
        .map(|dirs| dirs.data_local_dir().to_string_lossy().to_string())
}

/// Resolve the storage configuration: overrides win over the config file,
/// the config file wins over provider defaults.
pub fn resolve(request: ConfigRequest) -> Result<ResolvedConfig> {
    let (file, config_file) = match request.config_file {
        Some(path) => (read_config_file(&path)?, Some(path)),
        None => match default_config_path().filter(|path| path.is_file()) {
            Some(path) => (read_config_file(&path)?, Some(path)),
            None => (ConfigFile::default(), None),
        },
    };

    let source = if !request.overrides.is_empty() {
        ConfigSource::CommandLine
    } else if config_file.is_some() {
        ConfigSource::ConfigFile
    } else {
        ConfigSource::Defaults
    };

    let storage = merge(request.overrides, file, &default_data_root)?;
    Ok(ResolvedConfig {
        storage,
        source,
        config_file,
    })
}

pub fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path).map_err(|source| Error::ConfigFileIo {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| Error::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

fn merge(
    overrides: StorageOverrides,
    file: ConfigFile,
    data_root: &dyn Fn() -> Option<String>,
) -> Result<StorageConfig> {
    let pick = |over: Option<String>, from_file: Option<String>| {
        non_empty(over).or_else(|| non_empty(from_file))
    };

    let provider = match pick(overrides.provider, file.provider) {
        Some(raw) => StorageProvider::from_str(&raw)?,
        None => {
            info!("no storage provider configured, using default: fs");
            StorageProvider::Fs
        }
    };

    let mut config = StorageConfig::new(provider);
    config.bucket = pick(overrides.bucket, file.bucket);
    config.access_key_id = pick(overrides.access_key_id, file.access_key_id);
    config.access_key_secret = pick(overrides.access_key_secret, file.access_key_secret);
    config.endpoint = pick(overrides.endpoint, file.endpoint);
    config.region = pick(overrides.region, file.region);
    config.root_path = pick(overrides.root_path, file.root_path);

    if provider == StorageProvider::Fs && config.root_path.is_none() {
        config.root_path = data_root();
    }

    prepare_storage_config(&mut config)?;
    Ok(config)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
