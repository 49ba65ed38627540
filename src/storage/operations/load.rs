use crate::error::{Error, Result};
use crate::item::{Item, ItemId};
use crate::storage::constants::LOAD_CONCURRENCY;
use futures::stream::{self, StreamExt, TryStreamExt};
use opendal::{ErrorKind, Operator};
use std::collections::{BTreeMap, BTreeSet};

/// Trait for reading item documents.
pub trait ItemLoader {
    /// Load the items for `ids`.
    ///
    /// Ids without a document are absent from the result and duplicates
    /// collapse to a single entry. A document that does not parse, or that
    /// belongs to another id, yields [`Item::unreadable`].
    async fn load_multiple(&self, ids: &[ItemId]) -> Result<BTreeMap<ItemId, Item>>;
}

/// Implementation of ItemLoader for OpenDAL Operator.
pub struct OpenDalItemLoader {
    operator: Operator,
}

impl OpenDalItemLoader {
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }

    async fn load_one(&self, id: ItemId) -> Result<Option<Item>> {
        let path = id.document_path();
        let buffer = match self.operator.read(&path).await {
            Ok(buffer) => buffer,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("item {id} not found at {path}");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let item = match serde_json::from_slice::<Item>(&buffer.to_vec()) {
            Ok(item) if item.item_id == id => item,
            Ok(item) => {
                let err = Error::ItemIdMismatch {
                    path,
                    found: item.item_id.get(),
                };
                log::warn!("{err}, keeping item {id} without details");
                Item::unreadable(id)
            }
            Err(source) => {
                let err = Error::CorruptItem { path, source };
                log::warn!("{err}, keeping item {id} without details");
                Item::unreadable(id)
            }
        };

        Ok(Some(item))
    }
}

impl ItemLoader for OpenDalItemLoader {
    async fn load_multiple(&self, ids: &[ItemId]) -> Result<BTreeMap<ItemId, Item>> {
        let unique: BTreeSet<ItemId> = ids.iter().copied().collect();

        let loaded: Vec<Option<Item>> = stream::iter(unique)
            .map(|id| self.load_one(id))
            .buffered(LOAD_CONCURRENCY)
            .try_collect()
            .await?;

        Ok(loaded
            .into_iter()
            .flatten()
            .map(|item| (item.item_id, item))
            .collect())
    }
}
