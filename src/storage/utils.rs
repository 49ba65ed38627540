use crate::item::ItemId;
use crate::storage::constants::SUMMARY_LIMIT;

/// Wrap the error of a storage call in a context-carrying variant.
#[macro_export]
macro_rules! wrap_err {
    ($result:expr, $variant:ident { $($field:ident : $value:expr),* $(,)? }) => {
        $result.map_err(|err| $crate::error::Error::$variant {
            $($field: $value,)*
            source: Box::new(err),
        })
    };
}

/// Join ids for messages, keeping only the first few.
pub fn summarize_ids(ids: &[ItemId]) -> String {
    let mut summary = ids
        .iter()
        .take(SUMMARY_LIMIT)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    if ids.len() > SUMMARY_LIMIT {
        summary.push_str(&format!(",... ({} more)", ids.len() - SUMMARY_LIMIT));
    }
    summary
}
