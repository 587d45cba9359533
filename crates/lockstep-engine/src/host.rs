#![forbid(unsafe_code)]

//! Host boundary for scroll synchronization.
//!
//! The engine never owns panes, documents, or views. Everything it needs
//! from the outside world (group membership, scroll access, view-state
//! capture, reloads) goes through [`SyncHost`]. A pass holds `&mut` on
//! both the engine and the host for its full duration, so a host cannot
//! re-enter `synchronize` from inside one of these callbacks; anything a
//! callback kicks off (most importantly reloads) completes later and may
//! only then trigger a new pass.

use lockstep_model::{GroupId, PaneId, ScrollOffset, ViewKind};

/// The environment a [`ScrollSync`](crate::ScrollSync) engine drives.
///
/// All pane queries during one pass target panes that are live members
/// at resolution time; the pass is synchronous, so membership cannot
/// change under it.
pub trait SyncHost {
    /// Opaque snapshot of a pane's document reference and view
    /// configuration, captured from the source and replayed into peers
    /// that must be reloaded. The engine never looks inside it.
    type ViewState: Clone;

    /// Current members of `group`, in a host-chosen stable order.
    ///
    /// The list may include the pane that triggered the pass; the
    /// engine filters it out itself. Peers are processed in exactly
    /// this order.
    fn group_members(&self, group: &GroupId) -> Vec<PaneId>;

    /// The sync group `pane` currently belongs to, if any.
    fn pane_group(&self, pane: PaneId) -> Option<GroupId>;

    /// The kind of view `pane` currently displays.
    fn view_kind(&self, pane: PaneId) -> ViewKind;

    /// `pane`'s live scroll position, read fresh.
    fn read_scroll(&self, pane: PaneId) -> ScrollOffset;

    /// Scroll `pane` to `offset`, synchronously.
    fn apply_scroll(&mut self, pane: PaneId, offset: ScrollOffset);

    /// Capture the view state another pane would need to mirror `pane`.
    fn sync_view_state(&self, pane: PaneId) -> Self::ViewState;

    /// Ask the host to reload `pane` so it shows `source`'s document
    /// with an equivalent view configuration.
    ///
    /// This is a queued, fire-and-forget request: the host performs the
    /// actual reload after the current pass returns and reports nothing
    /// back. The engine never retries a reload.
    fn request_reload(&mut self, pane: PaneId, source: PaneId, state: Self::ViewState);
}
