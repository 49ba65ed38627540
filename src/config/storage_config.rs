use crate::config::StorageProvider;

/// Unified storage configuration for the item store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub provider: StorageProvider,
    pub bucket: Option<String>,
    pub access_key_id: Option<String>,
    pub access_key_secret: Option<String>,
    pub endpoint: Option<String>,
    pub region: Option<String>,
    pub root_path: Option<String>,
    pub anonymous: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProvider::Fs,
            bucket: None,
            access_key_id: None,
            access_key_secret: None,
            endpoint: None,
            region: None,
            root_path: None,
            anonymous: false,
        }
    }
}

impl StorageConfig {
    pub fn new(provider: StorageProvider) -> Self {
        Self {
            provider,
            ..Default::default()
        }
    }

    pub fn fs(root_path: Option<String>) -> Self {
        Self {
            root_path,
            ..Self::new(StorageProvider::Fs)
        }
    }

    pub fn memory() -> Self {
        Self::new(StorageProvider::Memory)
    }

    pub fn s3(bucket: impl Into<String>) -> Self {
        Self {
            bucket: Some(bucket.into()),
            ..Self::new(StorageProvider::S3)
        }
    }
}
