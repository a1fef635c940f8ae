//! The text cache and its background poller.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use super::source::read_joined_lines;
use super::{DEFAULT_REFRESH_INTERVAL, WAKE_GRANULARITY};

/// Lock a guard, recovering from poisoning.
///
/// The per-frame path must never panic, and no writer holds a guard
/// across code that can panic, so a poisoned value is still consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// State shared between the poller thread and per-frame callers.
///
/// Each mutable field has its own guard so reading the path never
/// blocks a concurrent text swap and vice versa. Where two guards are
/// held at once the order is path, then timestamp ([`TextCache::redirect`]).
struct CacheInner {
    /// Where text is read from. Empty means no source configured.
    source_path: Mutex<PathBuf>,
    /// Last successfully loaded content.
    text: Mutex<String>,
    /// When the refresh cadence last fired. `None` makes the next check
    /// fire immediately (construction, start, and redirect all rewind
    /// to `None` instead of computing "now minus interval").
    last_refresh: Mutex<Option<Instant>>,
    /// True while the background poller is active.
    running: AtomicBool,
    interval: Duration,
    wake: Duration,
}

impl CacheInner {
    /// The shared refresh algorithm, used identically by the background
    /// poller and the inline per-frame path.
    fn refresh_if_due(&self) {
        let due = {
            let mut last = lock(&self.last_refresh);
            match *last {
                Some(at) if at.elapsed() < self.interval => false,
                _ => {
                    // Advance the cadence before the read so a slow or
                    // failing source cannot cause a refresh storm.
                    *last = Some(Instant::now());
                    true
                }
            }
        };

        if due {
            self.reload();
        }
    }

    /// Attempt to replace the cached text from the source file.
    ///
    /// The read happens with no guard held; only the final swap takes
    /// the text guard. A failed read leaves the stale value in place.
    fn reload(&self) {
        let path = lock(&self.source_path).clone();
        if path.as_os_str().is_empty() {
            tracing::debug!("no text source configured, skipping reload");
            return;
        }

        match read_joined_lines(&path) {
            Ok(new_text) => {
                tracing::debug!(
                    path = %path.display(),
                    bytes = new_text.len(),
                    "reloaded text source"
                );
                *lock(&self.text) = new_text;
            }
            Err(err) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %err,
                    "text source unreadable, keeping cached value"
                );
            }
        }
    }
}

/// A time-bounded text cache with a background and an inline refresh path.
///
/// The cache reloads a newline-joined text file at most once per
/// refresh interval. With [`start`](TextCache::start) a poller thread
/// performs the reloads; without it, [`tick`](TextCache::tick) applies
/// the same interval check synchronously. [`redirect`](TextCache::redirect)
/// swaps the source path at runtime and forces the next refresh to fire
/// without waiting out the remaining interval.
///
/// # Example
///
/// ```no_run
/// use autotext::TextCache;
///
/// let mut cache = TextCache::new();
/// cache.set_path("/run/overlay.txt");
/// cache.start();
/// let text = cache.tick();
/// cache.stop();
/// ```
pub struct TextCache {
    inner: Arc<CacheInner>,
    poller: Option<JoinHandle<()>>,
}

impl TextCache {
    /// Create a cache with the default interval and wake granularity.
    pub fn new() -> Self {
        Self::with_intervals(DEFAULT_REFRESH_INTERVAL, WAKE_GRANULARITY)
    }

    /// Create a cache with custom timing. The wake granularity should be
    /// shorter than the interval so expiry is detected promptly.
    pub fn with_intervals(interval: Duration, wake: Duration) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                source_path: Mutex::new(PathBuf::new()),
                text: Mutex::new(String::new()),
                last_refresh: Mutex::new(None),
                running: AtomicBool::new(false),
                interval,
                wake,
            }),
            poller: None,
        }
    }

    /// Set the source path. Performs no I/O.
    pub fn set_path(&self, path: impl Into<PathBuf>) {
        *lock(&self.inner.source_path) = path.into();
    }

    /// The current source path (empty if none configured).
    pub fn path(&self) -> PathBuf {
        lock(&self.inner.source_path).clone()
    }

    /// Whether the background poller is active.
    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::SeqCst)
    }

    /// Start the background poller.
    ///
    /// Rewinds the refresh timestamp so the first wake reads the source
    /// immediately. Calling this while already running is a no-op; a
    /// second poller is never spawned.
    pub fn start(&mut self) {
        if self.inner.running.swap(true, Ordering::SeqCst) {
            return;
        }

        *lock(&self.inner.last_refresh) = None;

        let inner = Arc::clone(&self.inner);
        self.poller = Some(std::thread::spawn(move || {
            while inner.running.load(Ordering::SeqCst) {
                inner.refresh_if_due();
                std::thread::sleep(inner.wake);
            }
        }));
    }

    /// Stop the background poller and join its thread.
    ///
    /// May block up to one wake period while the poller observes the
    /// flag. Idempotent; safe to call when never started.
    pub fn stop(&mut self) {
        self.inner.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.poller.take() {
            let _ = handle.join();
        }
    }

    /// Swap the source path at runtime.
    ///
    /// A no-op when `new_path` equals the current path. Otherwise the
    /// path is replaced and the refresh timestamp rewound, while still
    /// holding the path guard, so the next refresh check (background or
    /// inline) fires immediately against the new path.
    pub fn redirect(&self, new_path: &Path) {
        let mut current = lock(&self.inner.source_path);
        if *current == new_path {
            return;
        }

        tracing::debug!(
            from = %current.display(),
            to = %new_path.display(),
            "redirecting text source"
        );
        *current = new_path.to_path_buf();
        *lock(&self.inner.last_refresh) = None;
    }

    /// The per-frame call.
    ///
    /// When no poller is running, applies the inline refresh check (the
    /// same algorithm the poller runs). Always returns a snapshot copy
    /// of the cached text, never a reference into shared state.
    pub fn tick(&self) -> String {
        if !self.is_running() {
            self.inner.refresh_if_due();
        }
        lock(&self.inner.text).clone()
    }
}

impl Default for TextCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TextCache {
    fn drop(&mut self) {
        self.stop();
    }
}
