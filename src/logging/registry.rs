//! In-memory record of error-level messages
//!
//! Appends, removals, and snapshots all go through one `RwLock`, so a reader
//! never iterates a list that is being modified underneath it.

use std::sync::{PoisonError, RwLock};

use super::message::Message;

/// Thread-safe, insertion-ordered list of retained errors
#[derive(Debug, Default)]
pub struct ErrorRegistry {
    errors: RwLock<Vec<Message>>,
}

impl ErrorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain a message
    pub fn push(&self, message: Message) {
        self.errors
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }

    /// Copy of the retained errors, in retention order
    pub fn snapshot(&self) -> Vec<Message> {
        let errors = self.errors.read().unwrap_or_else(PoisonError::into_inner);
        errors.iter().cloned().collect()
    }

    /// Drop every retained error with the given id
    ///
    /// Returns how many were removed; zero is not an error.
    pub fn remove(&self, id: u64) -> usize {
        let mut errors = self.errors.write().unwrap_or_else(PoisonError::into_inner);
        let before = errors.len();
        errors.retain(|m| m.id() != id);
        before - errors.len()
    }

    pub fn len(&self) -> usize {
        self.errors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
