//! Orchestration: filter, format, fit, memoize.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::cache::{self, ResultCache};
use crate::filter::eligible_events;
use crate::format::format_and_sort_lines;
use crate::truncate::fit_lines;
use crate::types::{Event, ShareConfig, ShareResult};

/// Sentence shown when nothing is eligible this month.
pub const NO_EVENTS_NOTICE: &str = "今月開催予定のイベントはありません。";

/// Share-text generator with a bounded result cache.
///
/// Owns its configuration and cache; both live and die with the value.
/// [`ShareGenerator::update_config`] swaps the configuration and drops
/// every cached result, since configuration shapes every output.
pub struct ShareGenerator {
    config: ShareConfig,
    cache: ResultCache,
}

impl ShareGenerator {
    /// Create a generator for the given configuration.
    pub fn new(config: ShareConfig) -> Self {
        Self {
            config,
            cache: ResultCache::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ShareConfig {
        &self.config
    }

    /// Generate the share text for `events`, serving from the cache when
    /// the same inputs were seen within the TTL.
    pub fn generate(&self, events: &[Event], now: DateTime<Utc>) -> ShareResult {
        let key = cache::fingerprint(events, &self.config);
        if let Some(hit) = self.cache.lookup(&key, now) {
            debug!(%key, "share cache hit");
            return hit;
        }
        debug!(%key, event_count = events.len(), "share cache miss");
        let result = generate_uncached(&self.config, events, now);
        self.cache.insert(key, result.clone(), now);
        result
    }

    /// Replace the configuration and drop every cached result. A stale
    /// entry under a new configuration would silently serve the wrong
    /// hashtags or URL.
    pub fn update_config(&mut self, config: ShareConfig) {
        self.config = config;
        self.cache.clear();
    }

    /// Number of live cache entries.
    pub fn cached_results(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached result without touching the configuration.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

/// One generation pass with no cache in front.
///
/// Public so callers and tests can hold the cached entry point to the
/// transparency contract: a hit must be byte-identical to this.
pub fn generate_uncached(
    config: &ShareConfig,
    events: &[Event],
    now: DateTime<Utc>,
) -> ShareResult {
    let eligible = eligible_events(events, now);
    if eligible.is_empty() {
        // Template substitution; this path never enters budget logic.
        return ShareResult {
            share_text: format!(
                "{}\n\n{}\n{}",
                config.base_message,
                NO_EVENTS_NOTICE,
                config.footer()
            ),
            included_event_count: 0,
            was_truncated: false,
        };
    }
    let lines = format_and_sort_lines(&eligible);
    fit_lines(config, &lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{approved_event, event_with_status, fixed_now, test_config};
    use crate::types::EventStatus;

    #[test]
    fn test_no_eligible_events_uses_notice() {
        let events = vec![event_with_status("e1", "会", 20, EventStatus::Pending)];
        let result = generate_uncached(&test_config(), &events, fixed_now());

        assert!(result.share_text.contains(NO_EVENTS_NOTICE));
        assert!(result.share_text.contains(&test_config().destination_url));
        assert_eq!(result.included_event_count, 0);
        assert!(!result.was_truncated);
    }

    #[test]
    fn test_generate_populates_cache() {
        let generator = ShareGenerator::new(test_config());
        let events = vec![approved_event("e1", "React勉強会", 20)];

        assert_eq!(generator.cached_results(), 0);
        generator.generate(&events, fixed_now());
        assert_eq!(generator.cached_results(), 1);

        // same inputs reuse the entry instead of adding one
        generator.generate(&events, fixed_now());
        assert_eq!(generator.cached_results(), 1);
    }

    #[test]
    fn test_update_config_clears_cache() {
        let mut generator = ShareGenerator::new(test_config());
        let events = vec![approved_event("e1", "React勉強会", 20)];
        generator.generate(&events, fixed_now());
        assert_eq!(generator.cached_results(), 1);

        generator.update_config(test_config().with_base_message("新しいお知らせ"));
        assert_eq!(generator.cached_results(), 0);
    }

    #[test]
    fn test_clear_cache_keeps_config() {
        let generator = ShareGenerator::new(test_config());
        let events = vec![approved_event("e1", "会", 20)];
        generator.generate(&events, fixed_now());

        generator.clear_cache();
        assert_eq!(generator.cached_results(), 0);
        assert_eq!(generator.config(), &test_config());
    }
}
