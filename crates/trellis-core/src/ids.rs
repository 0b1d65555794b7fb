//! Identifier generation for projects and tasks.

use jiff::Timestamp;

/// Hands out time-based entity ids.
///
/// Ids are milliseconds since the Unix epoch. When two ids are requested
/// within the same millisecond (or the clock steps backwards) the generator
/// falls back to the previous id plus one, so ids are strictly increasing for
/// the lifetime of the generator.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Creates a generator that has not issued any id yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unique id.
    pub fn next_id(&mut self) -> u64 {
        let now = u64::try_from(Timestamp::now().as_millisecond()).unwrap_or(0);
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    /// Records an id that is already in use so it is never issued again.
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }

    /// The most recently issued or observed id.
    pub fn last(&self) -> u64 {
        self.last
    }
}
