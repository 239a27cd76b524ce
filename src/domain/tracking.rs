// Snapshot-based dirty tracking for session records

/// Wraps a record's attributes together with their last-persisted snapshot.
///
/// Dirtiness is derived on demand by comparing the current value against the
/// snapshot. `commit` advances the snapshot after a successful save;
/// `rollback` discards local edits by restoring the snapshot.
#[derive(Debug, Clone)]
pub struct Tracked<T> {
    current: T,
    persisted: T,
}

impl<T: Clone + PartialEq> Tracked<T> {
    /// Create a clean record whose snapshot equals its current value.
    pub fn new(value: T) -> Self {
        Self {
            persisted: value.clone(),
            current: value,
        }
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    /// Mutable access to the current value. Any change shows up in
    /// `is_dirty` until the next `commit` or `rollback`.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.current
    }

    pub fn is_dirty(&self) -> bool {
        self.current != self.persisted
    }

    /// Mark the current value as persisted.
    pub fn commit(&mut self) {
        self.persisted = self.current.clone();
    }

    /// Restore the current value from the last-persisted snapshot.
    pub fn rollback(&mut self) {
        self.current = self.persisted.clone();
    }
}
