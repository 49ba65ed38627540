use crate::config::{StorageProvider, storage_config::StorageConfig};
use crate::error::{Error, Result};
use crate::storage::constants::DEFAULT_FS_ROOT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
    Unsupported,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    requirement: Requirement,
    default: Option<&'static str>,
}

impl FieldRule {
    pub const fn required() -> Self {
        Self {
            requirement: Requirement::Required,
            default: None,
        }
    }

    pub const fn optional() -> Self {
        Self {
            requirement: Requirement::Optional,
            default: None,
        }
    }

    pub const fn optional_with_default(default: &'static str) -> Self {
        Self {
            requirement: Requirement::Optional,
            default: Some(default),
        }
    }

    pub const fn unsupported() -> Self {
        Self {
            requirement: Requirement::Unsupported,
            default: None,
        }
    }

    pub fn apply(
        &self,
        provider: StorageProvider,
        field: &'static str,
        value: &mut Option<String>,
    ) -> Result<()> {
        match self.requirement {
            Requirement::Required => {
                if value.is_none() {
                    return Err(Error::MissingConfigField {
                        provider: provider.as_str().to_string(),
                        field: field.to_string(),
                    });
                }
            }
            Requirement::Optional => {}
            Requirement::Unsupported => {
                if value.is_some() {
                    log::warn!(
                        "ignoring '{field}': not supported by provider '{}'",
                        provider.as_str()
                    );
                    *value = None;
                }
            }
        }

        if self.requirement == Requirement::Optional
            && value.is_none()
            && let Some(default) = self.default
        {
            *value = Some(default.to_string());
        }

        Ok(())
    }

    pub const fn requirement(&self) -> Requirement {
        self.requirement
    }
}

/// Which configuration fields a provider needs, accepts or ignores.
#[derive(Clone, Copy, Debug)]
pub struct ProviderSpec {
    allow_anonymous: bool,
    bucket: FieldRule,
    access_key: FieldRule,
    secret_key: FieldRule,
    region: FieldRule,
    endpoint: FieldRule,
    root_path: FieldRule,
}

/// Fully validated settings for building an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderBackend {
    Fs {
        root: String,
    },
    Memory,
    S3 {
        bucket: String,
        access_key: Option<String>,
        secret_key: Option<String>,
        region: Option<String>,
        endpoint: Option<String>,
        anonymous: bool,
    },
}

impl ProviderSpec {
    const fn cloud() -> Self {
        Self {
            allow_anonymous: true,
            bucket: FieldRule::required(),
            access_key: FieldRule::optional(),
            secret_key: FieldRule::optional(),
            region: FieldRule::optional(),
            endpoint: FieldRule::optional(),
            root_path: FieldRule::optional(),
        }
    }

    const fn filesystem(root_rule: FieldRule) -> Self {
        Self {
            allow_anonymous: false,
            bucket: FieldRule::unsupported(),
            access_key: FieldRule::unsupported(),
            secret_key: FieldRule::unsupported(),
            region: FieldRule::unsupported(),
            endpoint: FieldRule::unsupported(),
            root_path: root_rule,
        }
    }

    pub const fn allows_anonymous(&self) -> bool {
        self.allow_anonymous
    }

    pub fn prepare(
        &self,
        provider: StorageProvider,
        config: &mut StorageConfig,
    ) -> Result<ProviderBackend> {
        self.bucket.apply(provider, "bucket", &mut config.bucket)?;
        self.access_key
            .apply(provider, "access_key_id", &mut config.access_key_id)?;
        self.secret_key
            .apply(provider, "access_key_secret", &mut config.access_key_secret)?;
        self.region.apply(provider, "region", &mut config.region)?;
        self.endpoint
            .apply(provider, "endpoint", &mut config.endpoint)?;
        self.root_path
            .apply(provider, "root_path", &mut config.root_path)?;

        if self.access_key.requirement() != Requirement::Unsupported {
            enforce_credentials(self.allow_anonymous, provider, config)?;
        } else {
            config.anonymous = false;
        }

        let missing = |field: &str| Error::MissingConfigField {
            provider: provider.as_str().to_string(),
            field: field.to_string(),
        };

        let backend = match provider {
            StorageProvider::Fs => ProviderBackend::Fs {
                root: config.root_path.clone().ok_or_else(|| missing("root_path"))?,
            },
            StorageProvider::Memory => ProviderBackend::Memory,
            StorageProvider::S3 => ProviderBackend::S3 {
                bucket: config.bucket.clone().ok_or_else(|| missing("bucket"))?,
                access_key: config.access_key_id.clone(),
                secret_key: config.access_key_secret.clone(),
                region: config.region.clone(),
                endpoint: config.endpoint.clone(),
                anonymous: config.anonymous,
            },
        };

        Ok(backend)
    }
}

pub fn provider_spec(provider: StorageProvider) -> ProviderSpec {
    match provider {
        StorageProvider::Fs => {
            ProviderSpec::filesystem(FieldRule::optional_with_default(DEFAULT_FS_ROOT))
        }
        StorageProvider::Memory => ProviderSpec::filesystem(FieldRule::unsupported()),
        StorageProvider::S3 => ProviderSpec::cloud(),
    }
}

pub fn prepare_storage_backend(config: &mut StorageConfig) -> Result<ProviderBackend> {
    provider_spec(config.provider).prepare(config.provider, config)
}

pub fn prepare_storage_config(config: &mut StorageConfig) -> Result<()> {
    prepare_storage_backend(config).map(|_| ())
}

fn enforce_credentials(
    allow_anonymous: bool,
    provider: StorageProvider,
    config: &mut StorageConfig,
) -> Result<()> {
    let access = config.access_key_id.as_ref();
    let secret = config.access_key_secret.as_ref();

    match (access, secret) {
        (Some(_), Some(_)) => {
            config.anonymous = false;
            Ok(())
        }
        (None, None) if allow_anonymous => {
            config.anonymous = true;
            Ok(())
        }
        (None, _) => Err(Error::MissingConfigField {
            provider: provider.as_str().to_string(),
            field: "access_key_id".to_string(),
        }),
        (Some(_), None) => Err(Error::MissingConfigField {
            provider: provider.as_str().to_string(),
            field: "access_key_secret".to_string(),
        }),
    }
}
