use crate::error::Result;
use crate::item::Item;
use opendal::Operator;

/// Trait for permanently removing item documents.
pub trait ItemDeleter {
    async fn delete(&self, item: &Item) -> Result<()>;
}

/// Implementation of ItemDeleter for OpenDAL Operator.
pub struct OpenDalItemDeleter {
    operator: Operator,
}

impl OpenDalItemDeleter {
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl ItemDeleter for OpenDalItemDeleter {
    async fn delete(&self, item: &Item) -> Result<()> {
        self.operator.delete(&item.item_id.document_path()).await?;
        log::info!(
            "killed item {} (field {}, host type {})",
            item.item_id,
            item.field_name_target(),
            item.host_type
        );
        Ok(())
    }
}
