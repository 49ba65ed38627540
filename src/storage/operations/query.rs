use crate::error::Result;
use crate::item::{ITEM_PREFIX, ItemId};
use futures::stream::TryStreamExt;
use opendal::{ErrorKind, Operator};

/// Trait for enumerating the ids of stored items.
pub trait ItemLister {
    /// List every item id in ascending order.
    ///
    /// A missing item prefix is treated as an empty store.
    async fn list_ids(&self) -> Result<Vec<ItemId>>;
}

/// Implementation of ItemLister for OpenDAL Operator.
pub struct OpenDalItemLister {
    operator: Operator,
}

impl OpenDalItemLister {
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl ItemLister for OpenDalItemLister {
    async fn list_ids(&self) -> Result<Vec<ItemId>> {
        let mut lister = match self.operator.lister(ITEM_PREFIX).await {
            Ok(lister) => lister,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        while let Some(entry) = lister.try_next().await? {
            if entry.metadata().mode().is_dir() {
                continue;
            }
            match ItemId::from_document_path(entry.path()) {
                Some(id) => ids.push(id),
                None => log::warn!("skipping unexpected entry '{}'", entry.path()),
            }
        }

        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }
}
