//! Coalescing of rapid settings writes.
//!
//! Typing into a tag field produces one `set_tags` per keystroke. Writing the
//! whole settings file each time is wasteful, so [`Debounced`] holds the most
//! recent snapshot and only hands it to the wrapped persister when:
//!
//! - the caller polls after a quiet period of `debounce` since the latest
//!   request,
//! - the pending snapshot has already waited `max_wait` since its first
//!   request (checked on every new request),
//! - the caller flushes explicitly,
//! - or the wrapper is dropped.
//!
//! A newer snapshot replaces an older pending one; superseded snapshots are
//! never written. There are no timers or threads: the owner drives time by
//! calling [`Debounced::poll`].

use super::Persister;
use crate::error::Result;
use crate::model::TagSettings;
use std::time::{Duration, Instant};

/// Timing for [`Debounced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    /// Quiet period after the latest request before a poll writes.
    pub debounce: Duration,
    /// Longest a pending snapshot may wait regardless of new requests.
    pub max_wait: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            max_wait: Duration::from_millis(5000),
        }
    }
}

impl DebounceConfig {
    pub fn from_millis(debounce_ms: u64, max_wait_ms: u64) -> Self {
        Self {
            debounce: Duration::from_millis(debounce_ms),
            max_wait: Duration::from_millis(max_wait_ms),
        }
    }
}

#[derive(Debug)]
struct Pending {
    settings: TagSettings,
    first_requested: Instant,
    last_requested: Instant,
}

/// Persister wrapper that collapses bursts of writes into one.
pub struct Debounced<P: Persister> {
    inner: P,
    config: DebounceConfig,
    pending: Option<Pending>,
}

impl<P: Persister> Debounced<P> {
    pub fn new(inner: P, config: DebounceConfig) -> Self {
        Self {
            inner,
            config,
            pending: None,
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut P {
        &mut self.inner
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a write request made at `now`.
    pub fn persist_at(&mut self, settings: &TagSettings, now: Instant) -> Result<()> {
        let first_requested = match self.pending.take() {
            Some(p) => p.first_requested,
            None => now,
        };
        self.pending = Some(Pending {
            settings: settings.clone(),
            first_requested,
            last_requested: now,
        });

        if now.saturating_duration_since(first_requested) >= self.config.max_wait {
            log::debug!("pending settings write hit max wait, flushing");
            self.flush()?;
        }
        Ok(())
    }

    /// Write the pending snapshot if the quiet period has passed at `now`.
    /// Returns whether a write happened.
    pub fn poll_at(&mut self, now: Instant) -> Result<bool> {
        let due = self.pending.as_ref().is_some_and(|p| {
            now.saturating_duration_since(p.last_requested) >= self.config.debounce
        });
        if due {
            self.flush()?;
        }
        Ok(due)
    }

    /// [`poll_at`](Self::poll_at) with the current time.
    pub fn poll(&mut self) -> Result<bool> {
        self.poll_at(Instant::now())
    }
}

impl<P: Persister> Persister for Debounced<P> {
    fn persist(&mut self, settings: &TagSettings) -> Result<()> {
        self.persist_at(settings, Instant::now())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(pending) = self.pending.take() {
            // Keep the snapshot so a later flush or drop can retry it.
            if let Err(e) = self.inner.persist(&pending.settings) {
                self.pending = Some(pending);
                return Err(e);
            }
        }
        self.inner.flush()
    }
}

impl<P: Persister> Drop for Debounced<P> {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            log::warn!("failed to save pending tag settings: {}", e);
        }
    }
}
