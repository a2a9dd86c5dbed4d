use serde::{Deserialize, Serialize};

/// Audit record of an action performed on a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry<T> {
    pub action: String,
    pub model: T,
    pub when: String,
    pub who: String,
}

impl<T> HistoryEntry<T> {
    pub fn new(
        action: impl Into<String>,
        model: T,
        when: impl Into<String>,
        who: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            model,
            when: when.into(),
            who: who.into(),
        }
    }
}
