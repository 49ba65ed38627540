//! Utility functions for user interaction and common operations.

use crate::item::ItemId;
use crate::storage::constants::SUMMARY_LIMIT;

/// Format the kill confirmation message with the id list
pub fn format_kill_message(ids: &[ItemId]) -> String {
    let mut message = format!("About to kill {} item id(s):\n", ids.len());
    for id in ids.iter().take(SUMMARY_LIMIT) {
        message.push_str(&format!("  {}\n", id));
    }
    if ids.len() > SUMMARY_LIMIT {
        message.push_str(&format!("  ... and {} more\n", ids.len() - SUMMARY_LIMIT));
    }
    message.push_str("Continue?");
    message
}
