use serde::Serialize;

use crate::error::FetchError;
use crate::record::Record;
use crate::transform::process_records;

/// Display state published to the presentation layer
///
/// After a completed fetch either `items` is present or `error` is non-empty,
/// never both. While `loading` is true the other two fields still hold the
/// previous outcome.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub loading: bool,
    pub items: Option<Vec<Record>>,
    pub error: String,
}

/// What a presentation layer should draw for a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// Nothing fetched yet and nothing in flight.
    Idle,
    Loading,
    Failed(&'a str),
    Loaded(&'a [Record]),
}

impl DisplayState {
    /// State published once a fetch completes
    ///
    /// Successful payloads go through [`process_records`]; failures clear the
    /// items and carry the fetch error message.
    pub fn from_outcome(outcome: Result<Vec<Record>, FetchError>) -> Self {
        match outcome {
            Ok(records) => DisplayState {
                loading: false,
                items: Some(process_records(records)),
                error: String::new(),
            },
            Err(err) => DisplayState {
                loading: false,
                items: None,
                error: err.message(),
            },
        }
    }

    pub fn is_failed(&self) -> bool {
        !self.error.is_empty()
    }

    /// Loading wins over a stale error, which wins over stale items
    pub fn view(&self) -> View<'_> {
        if self.loading {
            View::Loading
        } else if self.is_failed() {
            View::Failed(&self.error)
        } else if let Some(items) = &self.items {
            View::Loaded(items)
        } else {
            View::Idle
        }
    }
}
