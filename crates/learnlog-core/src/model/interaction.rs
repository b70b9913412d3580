use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind label assumed when an input record omits one.
pub const DEFAULT_KIND: &str = "attempt";

/// One learner's interaction with one item.
///
/// The record is a plain value: the filter and the reader never mutate a
/// record after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractionLog {
    pub id: i64,
    pub learner_id: i64,
    pub item_id: i64,
    #[serde(default = "default_kind")]
    pub kind: String,
}

impl InteractionLog {
    #[must_use]
    pub fn new(id: i64, learner_id: i64, item_id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            learner_id,
            item_id,
            kind: kind.into(),
        }
    }
}

impl fmt::Display for InteractionLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} learner={} item={} kind={}",
            self.id, self.learner_id, self.item_id, self.kind
        )
    }
}

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}
