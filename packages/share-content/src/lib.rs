//! Share-content generation for upcoming community events.
//!
//! Renders a bounded-length, platform-safe text summary of the month's
//! approved events for posting to a social platform with a hard
//! 280-character limit. Given any candidate list the engine always
//! produces *some* valid output: as many event lines as fit in date
//! order, a mandatory link-and-hashtags footer, and a degraded
//! link-only fallback when even the fixed parts exceed the limit.
//!
//! # Pipeline
//!
//! raw events → [`filter`] → [`format`] → [`truncate`] → [`ShareResult`]
//!
//! [`ShareGenerator`] composes the stages and memoizes whole results in
//! a bounded, time-expiring [`ResultCache`]. The engine is synchronous
//! and performs no I/O; the clock is always injected by the caller.
//!
//! # Usage
//!
//! ```rust,ignore
//! use chrono::Utc;
//! use share_content::{ShareConfig, ShareGenerator};
//!
//! let config = ShareConfig::new("https://example.org/events", "今月のイベント情報")
//!     .with_hashtags(["イベント"]);
//! let generator = ShareGenerator::new(config);
//!
//! let result = generator.generate(&events, Utc::now());
//! println!("{}", result.share_text);
//! ```
//!
//! # Modules
//!
//! - [`types`] - event, config, and result types
//! - [`filter`] - eligibility filtering
//! - [`format`] - date and line rendering
//! - [`truncate`] - the greedy budget-fitting algorithm
//! - [`cache`] - bounded, TTL-expiring result cache
//! - [`generate`] - the orchestrating generator
//! - [`testing`] - deterministic fixtures

pub mod cache;
pub mod error;
pub mod filter;
pub mod format;
pub mod generate;
pub mod testing;
pub mod truncate;
pub mod types;

// Re-export the consumer surface at the crate root
pub use cache::{ResultCache, CACHE_TTL_SECS, MAX_CACHE_SIZE};
pub use error::ShareContentError;
pub use generate::{generate_uncached, ShareGenerator, NO_EVENTS_NOTICE};
pub use truncate::{fit_lines, CHARACTER_LIMIT};
pub use types::{Event, EventStatus, ShareConfig, ShareResult};
