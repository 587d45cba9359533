#![forbid(unsafe_code)]

//! Per-pane synchronization side table.
//!
//! One entry per pane the engine has touched: the baseline scroll anchor
//! for the pane's current group membership, and the busy bit that keeps
//! a pane from being driven while it is already mid-update. The table is
//! owned here and nowhere else: detaching a pane or clearing the table
//! removes every trace of it, so no synchronization state can outlive
//! the engine from the host's point of view.

use lockstep_model::{GroupId, PaneId, ScrollOffset};
use rustc_hash::FxHashMap;

/// A pane's anchored scroll position for one group membership.
///
/// The anchor means "where this pane was when it last freshly became
/// relevant to this group". Relative motion is measured against it, so
/// it must stay fixed until the pane's group changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Baseline {
    offset: ScrollOffset,
    group: GroupId,
}

impl Baseline {
    /// The anchored offset.
    #[must_use]
    pub const fn offset(&self) -> ScrollOffset {
        self.offset
    }

    /// The group tag the anchor was captured under.
    #[must_use]
    pub fn group(&self) -> &GroupId {
        &self.group
    }
}

#[derive(Debug, Clone, Default)]
struct PaneEntry {
    baseline: Option<Baseline>,
    busy: bool,
}

/// Side table of per-pane synchronization state, keyed by pane id.
///
/// Entries appear lazily the first time a pass (or a busy mark) touches
/// a pane and disappear only through [`detach`](Self::detach) or
/// [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct PaneRegistry {
    entries: FxHashMap<PaneId, PaneEntry>,
}

impl PaneRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The baseline offset of `pane` under `group`.
    ///
    /// Returns the cached anchor when one exists for this exact group
    /// tag. Otherwise (no anchor yet, or the pane's group changed since
    /// it was captured) the `live` probe is invoked, its value stored as
    /// the new anchor, and returned. The probe runs only on that miss
    /// path, so unrelated scrolling never moves an anchor.
    pub fn sync_offset(
        &mut self,
        pane: PaneId,
        group: &GroupId,
        live: impl FnOnce() -> ScrollOffset,
    ) -> ScrollOffset {
        let entry = self.entries.entry(pane).or_default();
        if let Some(baseline) = &entry.baseline
            && baseline.group == *group
        {
            return baseline.offset;
        }
        let offset = live();
        entry.baseline = Some(Baseline {
            offset,
            group: group.clone(),
        });
        #[cfg(feature = "tracing")]
        tracing::trace!(
            pane = pane.get(),
            group = %group,
            offset = offset.get(),
            "captured scroll baseline"
        );
        offset
    }

    /// The current baseline of `pane`, if one has been captured.
    #[must_use]
    pub fn baseline(&self, pane: PaneId) -> Option<&Baseline> {
        self.entries.get(&pane).and_then(|entry| entry.baseline.as_ref())
    }

    /// Whether `pane` is currently marked busy. Untracked panes are not.
    #[must_use]
    pub fn is_busy(&self, pane: PaneId) -> bool {
        self.entries.get(&pane).is_some_and(|entry| entry.busy)
    }

    /// Mark `pane` busy; passes will skip it and report incompleteness.
    ///
    /// The host sets this around its own apply/reload activity on the
    /// pane; the engine itself only ever reads it.
    pub fn mark_busy(&mut self, pane: PaneId) {
        self.entries.entry(pane).or_default().busy = true;
    }

    /// Clear `pane`'s busy mark. A no-op for untracked panes.
    pub fn clear_busy(&mut self, pane: PaneId) {
        if let Some(entry) = self.entries.get_mut(&pane) {
            entry.busy = false;
        }
    }

    /// Forget everything about `pane`, baseline and busy bit together.
    pub fn detach(&mut self, pane: PaneId) {
        self.entries.remove(&pane);
    }

    /// Forget every pane.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether `pane` has an entry at all.
    #[must_use]
    pub fn contains(&self, pane: PaneId) -> bool {
        self.entries.contains_key(&pane)
    }

    /// Number of tracked panes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table tracks no panes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
