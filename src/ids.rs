//! Parsing of the comma separated id list typed by an administrator.

use crate::item::ItemId;
use snafu::Snafu;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum IdListError {
    /// Nothing but whitespace was given.
    #[snafu(display("no ids were given"))]
    Empty,
    /// A token is not a positive integer.
    #[snafu(display("'{token}' is not a positive integer"))]
    NotNumeric { token: String },
}

/// Validated list of ids, in the order they were typed. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdList(Vec<ItemId>);

impl IdList {
    /// Parse raw field contents. Validation is all-or-nothing: one bad token
    /// rejects the whole list.
    pub fn parse(raw: &str) -> Result<Self, IdListError> {
        let contents = raw.trim();
        if contents.is_empty() {
            return Err(IdListError::Empty);
        }

        let tokens: Vec<&str> = contents.split(',').collect();
        if tokens.is_empty() {
            return Err(IdListError::Empty);
        }

        tokens
            .into_iter()
            .map(parse_token)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn as_slice(&self) -> &[ItemId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn parse_token(token: &str) -> Result<ItemId, IdListError> {
    let trimmed = token.trim();
    let not_numeric = || IdListError::NotNumeric {
        token: trimmed.to_string(),
    };

    // u64::from_str would also take a leading '+'
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_numeric());
    }

    trimmed
        .parse::<u64>()
        .ok()
        .and_then(ItemId::new)
        .ok_or_else(not_numeric)
}
