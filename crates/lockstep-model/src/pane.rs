#![forbid(unsafe_code)]

//! Pane identity.
//!
//! Panes belong to the host; the engine addresses them through stable
//! numeric ids so no state ever has to be attached to a host object.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Stable identifier for a host pane.
///
/// `0` is reserved/invalid so IDs are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaneId(u64);

impl PaneId {
    /// Lowest valid pane ID.
    pub const MIN: Self = Self(1);

    /// Create a new pane ID, rejecting 0.
    pub fn new(raw: u64) -> Result<Self, ModelError> {
        if raw == 0 {
            return Err(ModelError::ZeroPaneId);
        }
        Ok(Self(raw))
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Return the next ID, or an error on overflow.
    pub fn checked_next(self) -> Result<Self, ModelError> {
        let Some(next) = self.0.checked_add(1) else {
            return Err(ModelError::PaneIdOverflow { current: self });
        };
        Self::new(next)
    }
}

impl Default for PaneId {
    fn default() -> Self {
        Self::MIN
    }
}

/// Deterministic allocator for pane IDs.
///
/// Hosts that do not already have stable pane identifiers can hand out
/// sequential ones; allocation order is the only source of ids, so runs
/// are replayable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneIdAllocator {
    next: PaneId,
}

impl PaneIdAllocator {
    /// Start allocating from a known ID.
    #[must_use]
    pub const fn starting_at(next: PaneId) -> Self {
        Self { next }
    }

    /// Peek at the next ID without consuming it.
    #[must_use]
    pub const fn peek(&self) -> PaneId {
        self.next
    }

    /// Allocate the next ID and advance.
    pub fn allocate(&mut self) -> Result<PaneId, ModelError> {
        let current = self.next;
        self.next = self.next.checked_next()?;
        Ok(current)
    }
}

impl Default for PaneIdAllocator {
    fn default() -> Self {
        Self { next: PaneId::MIN }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_id_is_rejected() {
        assert_eq!(PaneId::new(0), Err(ModelError::ZeroPaneId));
        assert_eq!(PaneId::new(1), Ok(PaneId::MIN));
    }

    #[test]
    fn checked_next_advances_and_overflows() {
        let id = PaneId::new(41).expect("valid id");
        assert_eq!(id.checked_next().expect("no overflow").get(), 42);

        let last = PaneId::new(u64::MAX).expect("valid id");
        assert_eq!(
            last.checked_next(),
            Err(ModelError::PaneIdOverflow { current: last })
        );
    }

    #[test]
    fn allocator_hands_out_sequential_ids() {
        let mut ids = PaneIdAllocator::default();
        assert_eq!(ids.peek(), PaneId::MIN);
        let first = ids.allocate().expect("allocate");
        let second = ids.allocate().expect("allocate");
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
        assert_eq!(ids.peek().get(), 3);
    }

    #[test]
    fn pane_id_serializes_transparently() {
        let id = PaneId::new(7).expect("valid id");
        assert_eq!(serde_json::to_string(&id).expect("serialize"), "7");
        let back: PaneId = serde_json::from_str("7").expect("deserialize");
        assert_eq!(back, id);
    }
}
