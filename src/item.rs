//! Field collection item records as they are kept in storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// Storage prefix under which every item document lives.
pub const ITEM_PREFIX: &str = "field_collection_item/";

const ITEM_SUFFIX: &str = ".json";

/// Identifier of a field collection item. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(NonZeroU64);

impl ItemId {
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Storage path of the document holding this item.
    pub fn document_path(self) -> String {
        format!("{ITEM_PREFIX}{}{ITEM_SUFFIX}", self.0)
    }

    /// Recover an id from a storage path produced by [`ItemId::document_path`].
    ///
    /// Returns `None` for directories, foreign files and non-canonical names
    /// such as `007.json`.
    pub fn from_document_path(path: &str) -> Option<Self> {
        let name = path.strip_prefix(ITEM_PREFIX).unwrap_or(path);
        let stem = name.strip_suffix(ITEM_SUFFIX)?;
        if stem.is_empty() || stem.starts_with('0') || !stem.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        stem.parse::<u64>().ok().and_then(Self::new)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entity reference to the field storage this item belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReference {
    pub target_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: ItemId,
    #[serde(default)]
    pub field_name: Vec<FieldReference>,
    #[serde(default)]
    pub host_type: String,
}

impl Item {
    pub fn new(item_id: ItemId, field_name: impl Into<String>, host_type: impl Into<String>) -> Self {
        Self {
            item_id,
            field_name: vec![FieldReference {
                target_id: field_name.into(),
            }],
            host_type: host_type.into(),
        }
    }

    /// Stand-in for an item whose document cannot be read. Only the id is
    /// known, which is enough to list and delete it.
    pub fn unreadable(item_id: ItemId) -> Self {
        Self {
            item_id,
            field_name: Vec::new(),
            host_type: String::new(),
        }
    }

    /// Target id of the first field name reference, empty when there is none.
    pub fn field_name_target(&self) -> &str {
        self.field_name
            .first()
            .map(|reference| reference.target_id.as_str())
            .unwrap_or("")
    }
}
