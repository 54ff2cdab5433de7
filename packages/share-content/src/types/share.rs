//! Generation results.

use serde::{Deserialize, Serialize};

/// Outcome of one share-text generation run.
///
/// A value type: returned by clone from the cache, never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareResult {
    /// The platform-ready text, handed verbatim to a share API or
    /// clipboard
    pub share_text: String,

    /// Number of real event lines counted as present in the text. When
    /// the omission marker replaced a line, that slot is not counted.
    pub included_event_count: usize,

    /// Whether any eligible event was cut from the text
    pub was_truncated: bool,
}
