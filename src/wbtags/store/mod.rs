//! # Storage Layer
//!
//! [`TagStore`] is the single source of truth for which tags each world book
//! carries, plus the active filter selection. All mutations funnel through it
//! so normalization happens in exactly one place.
//!
//! The store never touches disk itself. After every mutation it hands a
//! snapshot of its [`TagSettings`] to an injected [`Persister`], and it does
//! not look at what happens next: a failed write is logged and forgotten.
//!
//! ## Persisters
//!
//! - [`memory::MemPersister`]: keeps every snapshot in memory (testing)
//! - [`fs::FilePersister`]: atomic JSON file writes (production)
//! - [`debounce::Debounced`]: wraps another persister and coalesces bursts of
//!   writes into one
//! - any `FnMut(&TagSettings) -> Result<()>` closure
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "tagsByFile": { "Eldoria.json": ["fantasy", "magic"] },
//!   "activeFilterTags": ["fantasy"]
//! }
//! ```

use crate::error::Result;
use crate::model::TagSettings;

pub mod debounce;
pub mod fs;
pub mod memory;
pub mod tag_store;

pub use tag_store::TagStore;

/// Durable save of the whole settings object.
///
/// Implementations must be idempotent: the store may call `persist` more
/// often than strictly necessary, always with the full current state.
pub trait Persister {
    /// Save (or schedule saving) a snapshot of the settings.
    fn persist(&mut self, settings: &TagSettings) -> Result<()>;

    /// Push any scheduled write through now. Immediate persisters have
    /// nothing to do.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<F> Persister for F
where
    F: FnMut(&TagSettings) -> Result<()>,
{
    fn persist(&mut self, settings: &TagSettings) -> Result<()> {
        self(settings)
    }
}
