//! Share configuration: destination link, hashtags, base message.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShareContentError};

/// Configuration for share-text generation.
///
/// Every generated text carries the destination URL; the hashtags and
/// base message frame it. Changing any field changes every output, which
/// is why the generator drops its whole cache on a config swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Link included in every share text
    pub destination_url: String,

    /// Hashtags rendered in the footer, in order. Stored without the
    /// leading `#`; one is added at render time if missing.
    #[serde(default)]
    pub hashtags: Vec<String>,

    /// Opening line(s) of the share text
    pub base_message: String,
}

impl ShareConfig {
    /// Create a config with no hashtags.
    pub fn new(destination_url: impl Into<String>, base_message: impl Into<String>) -> Self {
        Self {
            destination_url: destination_url.into(),
            hashtags: Vec::new(),
            base_message: base_message.into(),
        }
    }

    /// Set the footer hashtags.
    pub fn with_hashtags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.hashtags = tags.into_iter().map(|t| t.into()).collect();
        self
    }

    /// Replace the base message.
    pub fn with_base_message(mut self, message: impl Into<String>) -> Self {
        self.base_message = message.into();
        self
    }

    /// Render the footer block: the destination URL, then the hashtags
    /// space-joined on their own line when any exist.
    pub fn footer(&self) -> String {
        if self.hashtags.is_empty() {
            return self.destination_url.clone();
        }
        let tags = self
            .hashtags
            .iter()
            .map(|t| {
                if t.starts_with('#') {
                    t.clone()
                } else {
                    format!("#{t}")
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        format!("{}\n{}", self.destination_url, tags)
    }

    /// Reject configurations the generator cannot do anything sensible
    /// with. The engine itself never errors; callers run this at the
    /// boundary where the config comes in.
    pub fn validate(&self) -> Result<()> {
        if self.destination_url.trim().is_empty() {
            return Err(ShareContentError::InvalidConfig {
                reason: "destination_url must not be empty".to_string(),
            });
        }
        if self.hashtags.iter().any(|t| t.trim().is_empty()) {
            return Err(ShareContentError::InvalidConfig {
                reason: "hashtags must not contain blank entries".to_string(),
            });
        }
        Ok(())
    }
}
