//! Refreshable text cache.
//!
//! This module provides an in-memory text cache with two cooperating
//! refresh modes: a background poller that reloads the source file on a
//! fixed interval, and an inline per-call check that applies the same
//! interval logic when no poller is running. The source path can be
//! swapped at runtime, which forces the next refresh to fire
//! immediately instead of waiting out the remaining interval.

pub mod source;
pub mod store;

pub use source::read_joined_lines;
pub use store::TextCache;

use std::time::Duration;

/// How long a loaded value stays authoritative before the source is re-read.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// How often the background poller wakes to check the interval.
/// Strictly shorter than the refresh interval so expiry is seen promptly.
pub const WAKE_GRANULARITY: Duration = Duration::from_secs(1);
