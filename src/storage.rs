use crate::config::{ProviderBackend, prepare_storage_backend};
pub use crate::config::{StorageProvider, storage_config::StorageConfig};
use crate::error::Result;
use crate::item::{Item, ItemId};
use opendal::Operator;
use std::collections::BTreeMap;

pub mod constants;
mod operations;
pub mod utils;

use self::operations::delete::OpenDalItemDeleter;
use self::operations::load::OpenDalItemLoader;
use self::operations::query::OpenDalItemLister;
use self::operations::{ItemDeleter, ItemLister, ItemLoader};
use self::utils::summarize_ids;
use crate::wrap_err;

/// Entity query service: enumerates the items that exist.
pub trait EntityQuery {
    async fn execute(&self) -> Result<Vec<ItemId>>;
}

/// Entity storage service: batch loads and deletes items.
pub trait EntityStorage {
    /// Missing ids are absent from the returned map.
    async fn load_multiple(&self, ids: &[ItemId]) -> Result<BTreeMap<ItemId, Item>>;

    /// Remove an item permanently.
    async fn delete(&self, item: &Item) -> Result<()>;
}

impl<T: EntityQuery + ?Sized> EntityQuery for &T {
    async fn execute(&self) -> Result<Vec<ItemId>> {
        (**self).execute().await
    }
}

impl<T: EntityStorage + ?Sized> EntityStorage for &T {
    async fn load_multiple(&self, ids: &[ItemId]) -> Result<BTreeMap<ItemId, Item>> {
        (**self).load_multiple(ids).await
    }

    async fn delete(&self, item: &Item) -> Result<()> {
        (**self).delete(item).await
    }
}

/// Item store backed by an OpenDAL operator
#[derive(Clone)]
pub struct StorageClient {
    operator: Operator,
    provider: StorageProvider,
}

impl StorageClient {
    pub async fn new(mut config: StorageConfig) -> Result<Self> {
        let provider = config.provider;
        let backend = prepare_storage_backend(&mut config)?;
        let operator = Self::build_operator(&backend)?;
        log::debug!("storage client ready provider={provider:?}");
        Ok(Self { operator, provider })
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    fn build_operator(backend: &ProviderBackend) -> Result<Operator> {
        match backend {
            ProviderBackend::Fs { root } => {
                let builder = opendal::services::Fs::default().root(root);
                Ok(Operator::new(builder)?.finish())
            }
            ProviderBackend::Memory => {
                let builder = opendal::services::Memory::default();
                Ok(Operator::new(builder)?.finish())
            }
            ProviderBackend::S3 {
                bucket,
                access_key,
                secret_key,
                region,
                endpoint,
                anonymous,
            } => {
                #[cfg(feature = "s3")]
                {
                    let mut builder = opendal::services::S3::default().bucket(bucket);
                    if *anonymous {
                        builder = builder.allow_anonymous();
                    }
                    if let Some(access_key_id) = access_key.as_deref() {
                        builder = builder.access_key_id(access_key_id);
                    }
                    if let Some(secret_access_key) = secret_key.as_deref() {
                        builder = builder.secret_access_key(secret_access_key);
                    }
                    if let Some(region) = region.as_deref() {
                        builder = builder.region(region);
                    }
                    if let Some(endpoint) = endpoint.as_deref() {
                        builder = builder.endpoint(endpoint);
                    }
                    log::debug!("S3 builder config: bucket={bucket}, endpoint={endpoint:?}");
                    Ok(Operator::new(builder)?.finish())
                }

                #[cfg(not(feature = "s3"))]
                {
                    let _ = (bucket, access_key, secret_key, region, endpoint, anonymous);
                    Err(crate::error::Error::UnsupportedProvider {
                        provider: "s3 (feature disabled)".to_string(),
                    })
                }
            }
        }
    }
}

impl EntityQuery for StorageClient {
    async fn execute(&self) -> Result<Vec<ItemId>> {
        log::debug!("query provider={:?}", self.provider);
        let lister = OpenDalItemLister::new(self.operator.clone());
        wrap_err!(lister.list_ids().await, QueryFailed {})
    }
}

impl EntityStorage for StorageClient {
    async fn load_multiple(&self, ids: &[ItemId]) -> Result<BTreeMap<ItemId, Item>> {
        log::debug!(
            "load_multiple provider={:?} ids_count={}",
            self.provider,
            ids.len()
        );
        let loader = OpenDalItemLoader::new(self.operator.clone());
        wrap_err!(
            loader.load_multiple(ids).await,
            LoadFailed {
                // summarize inputs to avoid huge error strings
                ids: summarize_ids(ids)
            }
        )
    }

    async fn delete(&self, item: &Item) -> Result<()> {
        log::debug!(
            "delete provider={:?} item_id={}",
            self.provider,
            item.item_id
        );
        let deleter = OpenDalItemDeleter::new(self.operator.clone());
        wrap_err!(
            deleter.delete(item).await,
            DeleteFailed {
                item_id: item.item_id.get()
            }
        )
    }
}
