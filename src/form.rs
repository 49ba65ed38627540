//! The kill items form: lists field collection items and deletes the ones
//! an administrator names.

use crate::error::Result;
use crate::ids::{IdList, IdListError};
use crate::messages::Messenger;
use crate::render::{FormView, SubmitButton, Table, TextField};
use crate::storage::{EntityQuery, EntityStorage};

pub const FORM_ID: &str = "field_collection_kill_items";

pub const NO_ITEMS: &str = "There are no field collection items.";
pub const INSTRUCTIONS: &str = "Here are the field collection items you can kill. Be careful!";
pub const FIELD_TITLE: &str = "Ids of items to kill";
pub const FIELD_DESCRIPTION: &str = "Comma separated list of ids of items to kill";
pub const SUBMIT_LABEL: &str = "Submit";

pub const NOTHING_TO_KILL: &str = "Sorry, no ids were given. Nothing to kill.";
pub const NOT_NUMBERS: &str = "Sorry, all of the ids must be numbers.";
pub const KILLED: &str = "The items have been killed.";

/// Result of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    NothingToKill,
    NotNumbers,
    /// `deleted` counts records actually removed; it may be zero.
    Killed { deleted: usize },
}

impl SubmitOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::NothingToKill => NOTHING_TO_KILL,
            SubmitOutcome::NotNumbers => NOT_NUMBERS,
            SubmitOutcome::Killed { .. } => KILLED,
        }
    }
}

pub struct KillItemsForm<Q, S, M> {
    query: Q,
    storage: S,
    messenger: M,
}

impl<Q, S, M> KillItemsForm<Q, S, M>
where
    Q: EntityQuery,
    S: EntityStorage,
    M: Messenger,
{
    pub fn new(query: Q, storage: S, messenger: M) -> Self {
        Self {
            query,
            storage,
            messenger,
        }
    }

    pub fn form_id(&self) -> &'static str {
        FORM_ID
    }

    /// Build the listing of every existing item, or a notice when there is none.
    pub async fn build_form(&self) -> Result<FormView> {
        let ids = self.query.execute().await?;
        log::debug!("building form {} for {} item(s)", self.form_id(), ids.len());
        let items = self.storage.load_multiple(&ids).await?;

        if items.is_empty() {
            return Ok(FormView::Empty {
                notice: NO_ITEMS.to_string(),
            });
        }

        let rows = items
            .values()
            .map(|item| {
                vec![
                    item.item_id.to_string(),
                    item.field_name_target().to_string(),
                    item.host_type.clone(),
                ]
            })
            .collect();

        Ok(FormView::Listing {
            instructions: INSTRUCTIONS.to_string(),
            table: Table {
                header: vec![
                    "Item id".to_string(),
                    "Field name".to_string(),
                    "Host type".to_string(),
                ],
                rows,
            },
            field: TextField {
                name: "items_to_kill",
                title: FIELD_TITLE.to_string(),
                description: FIELD_DESCRIPTION.to_string(),
                size: 50,
            },
            submit: SubmitButton {
                label: SUBMIT_LABEL.to_string(),
            },
        })
    }

    /// Validate the raw id field and delete the matching items.
    ///
    /// Validation problems become a status message, not an error. Deletion is
    /// not atomic: when a delete fails, items removed before it stay removed
    /// and the error is returned.
    pub async fn submit_form(&self, raw: &str) -> Result<SubmitOutcome> {
        let outcome = match IdList::parse(raw) {
            Err(IdListError::Empty) => SubmitOutcome::NothingToKill,
            Err(err @ IdListError::NotNumeric { .. }) => {
                log::debug!("rejecting id list: {err}");
                SubmitOutcome::NotNumbers
            }
            Ok(ids) => {
                let items = self.storage.load_multiple(ids.as_slice()).await?;
                log::debug!(
                    "killing {} of {} requested item(s)",
                    items.len(),
                    ids.len()
                );
                for item in items.values() {
                    self.storage.delete(item).await?;
                }
                SubmitOutcome::Killed {
                    deleted: items.len(),
                }
            }
        };

        self.messenger.set_message(outcome.message());
        Ok(outcome)
    }
}
