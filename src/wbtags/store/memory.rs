use super::Persister;
use crate::error::{Result, WbTagsError};
use crate::model::TagSettings;

/// In-memory persister for testing.
///
/// Every snapshot handed to it is kept, so tests can count writes and inspect
/// exactly what would have been saved.
#[derive(Debug, Default)]
pub struct MemPersister {
    writes: Vec<TagSettings>,
    simulate_write_error: bool,
}

impl MemPersister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    pub fn last_write(&self) -> Option<&TagSettings> {
        self.writes.last()
    }
}

impl Persister for MemPersister {
    fn persist(&mut self, settings: &TagSettings) -> Result<()> {
        if self.simulate_write_error {
            return Err(WbTagsError::Store("Simulated write error".to_string()));
        }
        self.writes.push(settings.clone());
        Ok(())
    }
}
