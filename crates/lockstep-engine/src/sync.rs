#![forbid(unsafe_code)]

//! The synchronization pass.
//!
//! [`ScrollSync`] walks the source pane's group and brings every peer
//! along: document peers move by the source's relative delta, opaque
//! peers are asked to reload with the source's view state. Busy peers
//! are skipped and turn the pass incomplete; the host is expected to
//! trigger another pass later, at which point the skipped peers catch
//! up from their unchanged baselines.

use lockstep_model::PaneId;

use crate::host::SyncHost;
use crate::registry::{Baseline, PaneRegistry};

/// Which grouped peers a synchronization pass drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SyncScope {
    /// Only peers whose view kind equals the source's. Such passes
    /// translate scroll offsets and never reload anything.
    #[default]
    SameKind,
    /// Every grouped peer. Document peers scroll; opaque peers reload
    /// to mirror the source.
    AllKinds,
}

impl SyncScope {
    /// Whether a peer with the given kind relation participates.
    #[must_use]
    pub const fn admits(self, same_kind: bool) -> bool {
        match self {
            Self::SameKind => same_kind,
            Self::AllKinds => true,
        }
    }
}

/// Relative-offset scroll synchronizer.
///
/// Owns the per-pane side table ([`PaneRegistry`]) and drives panes
/// through a [`SyncHost`]. One instance serves a whole workspace; the
/// host decides when to call [`synchronize`](Self::synchronize) and for
/// which source pane.
#[derive(Debug, Default)]
pub struct ScrollSync {
    registry: PaneRegistry,
}

impl ScrollSync {
    /// A synchronizer with no tracked panes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Propagate the source pane's scroll state to its group.
    ///
    /// Resolves the source's group, anchors the source if needed, then
    /// visits every other member in the host's order. For each peer
    /// admitted by `scope`:
    ///
    /// - a busy peer is skipped and the pass is marked incomplete;
    /// - a document-family peer is scrolled to
    ///   `peer_baseline + (live - source_baseline)`;
    /// - any other peer is handed to
    ///   [`request_reload`](SyncHost::request_reload) with the view
    ///   state captured from the source before the loop began.
    ///
    /// Returns `true` iff no admitted peer was skipped for being busy.
    /// An ungrouped source is a no-op that returns `false`; a group
    /// with no other members returns `true`.
    pub fn synchronize<H: SyncHost>(
        &mut self,
        host: &mut H,
        source: PaneId,
        scope: SyncScope,
    ) -> bool {
        let Some(group) = host.pane_group(source) else {
            return false;
        };

        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("scroll.sync", source = source.get(), group = %group).entered();

        // Snapshot the source before touching any peer, so every peer
        // sees the same origin even if applying a scroll feeds back
        // into the host's pane state.
        let view_state = host.sync_view_state(source);
        let live = host.read_scroll(source);
        let source_kind = host.view_kind(source);
        let src_baseline = self.registry.sync_offset(source, &group, || live);
        let delta = live - src_baseline;

        let mut complete = true;
        for peer in host.group_members(&group) {
            if peer == source {
                continue;
            }
            let peer_kind = host.view_kind(peer);
            if !scope.admits(peer_kind == source_kind) {
                continue;
            }
            if self.registry.is_busy(peer) {
                complete = false;
                continue;
            }
            if peer_kind.is_document() {
                let dest_baseline =
                    self.registry.sync_offset(peer, &group, || host.read_scroll(peer));
                host.apply_scroll(peer, dest_baseline + delta);
            } else if scope == SyncScope::AllKinds {
                // Same-kind passes leave non-document peers alone;
                // only all-kinds passes reload.
                host.request_reload(peer, source, view_state.clone());
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(complete, delta = delta.get(), "synchronization pass finished");
        complete
    }

    /// The baseline currently anchored for `pane`, if any.
    #[must_use]
    pub fn baseline(&self, pane: PaneId) -> Option<&Baseline> {
        self.registry.baseline(pane)
    }

    /// Mark `pane` busy so passes skip it and report incompleteness.
    ///
    /// Hosts set this around their own asynchronous work on a pane,
    /// typically while a requested reload is in flight.
    pub fn mark_busy(&mut self, pane: PaneId) {
        self.registry.mark_busy(pane);
    }

    /// Lift the busy mark from `pane`.
    pub fn clear_busy(&mut self, pane: PaneId) {
        self.registry.clear_busy(pane);
    }

    /// Whether `pane` is currently marked busy.
    #[must_use]
    pub fn is_busy(&self, pane: PaneId) -> bool {
        self.registry.is_busy(pane)
    }

    /// Forget all synchronization state for `pane`.
    ///
    /// Call when the host closes a pane. The next pass that touches the
    /// id anchors it from scratch.
    pub fn detach_pane(&mut self, pane: PaneId) {
        self.registry.detach(pane);
    }

    /// Forget every pane, as on teardown of the whole workspace.
    pub fn reset(&mut self) {
        self.registry.clear();
    }

    /// Read access to the underlying side table.
    #[must_use]
    pub fn registry(&self) -> &PaneRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockstep_model::{GroupId, ScrollOffset, ViewKind};
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    struct TestPane {
        group: Option<GroupId>,
        kind: ViewKind,
        scroll: ScrollOffset,
    }

    #[derive(Default)]
    struct TestHost {
        panes: BTreeMap<PaneId, TestPane>,
        reloads: Vec<(PaneId, PaneId)>,
    }

    impl TestHost {
        fn insert(&mut self, raw: u64, group: Option<&str>, kind: ViewKind, scroll: f64) -> PaneId {
            let id = PaneId::new(raw).expect("test id must be non-zero");
            let group = group.map(|name| GroupId::new(name).expect("non-empty"));
            self.panes.insert(
                id,
                TestPane {
                    group,
                    kind,
                    scroll: ScrollOffset::new(scroll),
                },
            );
            id
        }

        fn set_scroll(&mut self, pane: PaneId, scroll: f64) {
            self.panes.get_mut(&pane).expect("open pane").scroll = ScrollOffset::new(scroll);
        }

        fn scroll_of(&self, pane: PaneId) -> ScrollOffset {
            self.panes[&pane].scroll
        }
    }

    impl SyncHost for TestHost {
        type ViewState = ();

        fn group_members(&self, group: &GroupId) -> Vec<PaneId> {
            self.panes
                .iter()
                .filter(|(_, pane)| pane.group.as_ref() == Some(group))
                .map(|(id, _)| *id)
                .collect()
        }

        fn pane_group(&self, pane: PaneId) -> Option<GroupId> {
            self.panes.get(&pane)?.group.clone()
        }

        fn view_kind(&self, pane: PaneId) -> ViewKind {
            self.panes[&pane].kind.clone()
        }

        fn read_scroll(&self, pane: PaneId) -> ScrollOffset {
            self.panes[&pane].scroll
        }

        fn apply_scroll(&mut self, pane: PaneId, offset: ScrollOffset) {
            self.panes.get_mut(&pane).expect("open pane").scroll = offset;
        }

        fn sync_view_state(&self, _pane: PaneId) -> Self::ViewState {}

        fn request_reload(&mut self, pane: PaneId, source: PaneId, _state: Self::ViewState) {
            self.reloads.push((pane, source));
        }
    }

    #[test]
    fn scope_admission_table() {
        assert!(SyncScope::SameKind.admits(true));
        assert!(!SyncScope::SameKind.admits(false));
        assert!(SyncScope::AllKinds.admits(true));
        assert!(SyncScope::AllKinds.admits(false));
    }

    #[test]
    fn ungrouped_source_fails_without_side_effects() {
        let mut host = TestHost::default();
        let a = host.insert(1, None, ViewKind::document("markdown"), 100.0);
        let b = host.insert(2, Some("g"), ViewKind::document("markdown"), 40.0);
        let mut sync = ScrollSync::new();

        assert!(!sync.synchronize(&mut host, a, SyncScope::AllKinds));
        assert_eq!(host.scroll_of(b), ScrollOffset::new(40.0));
        assert!(host.reloads.is_empty());
        assert!(sync.registry().is_empty(), "no baseline may be captured");
    }

    #[test]
    fn singleton_group_completes_trivially() {
        let mut host = TestHost::default();
        let a = host.insert(1, Some("solo"), ViewKind::document("markdown"), 10.0);
        let mut sync = ScrollSync::new();

        assert!(sync.synchronize(&mut host, a, SyncScope::SameKind));
        let baseline = sync.baseline(a).expect("source is anchored");
        assert_eq!(baseline.offset(), ScrollOffset::new(10.0));
    }

    #[test]
    fn busy_peer_fails_the_pass_but_others_still_move() {
        let mut host = TestHost::default();
        let a = host.insert(1, Some("g"), ViewKind::document("markdown"), 100.0);
        let b = host.insert(2, Some("g"), ViewKind::document("markdown"), 40.0);
        let c = host.insert(3, Some("g"), ViewKind::document("markdown"), 200.0);
        let mut sync = ScrollSync::new();

        assert!(sync.synchronize(&mut host, a, SyncScope::SameKind));
        sync.mark_busy(b);
        host.set_scroll(a, 130.0);

        assert!(!sync.synchronize(&mut host, a, SyncScope::SameKind));
        assert_eq!(host.scroll_of(b), ScrollOffset::new(40.0));
        assert_eq!(host.scroll_of(c), ScrollOffset::new(230.0));
    }

    #[test]
    fn same_kind_scope_never_consults_busy_on_filtered_peers() {
        let mut host = TestHost::default();
        let a = host.insert(1, Some("g"), ViewKind::document("markdown"), 100.0);
        let b = host.insert(2, Some("g"), ViewKind::opaque("graph"), 0.0);
        let mut sync = ScrollSync::new();
        sync.mark_busy(b);

        // The filtered-out busy peer must not poison completion.
        assert!(sync.synchronize(&mut host, a, SyncScope::SameKind));
        assert!(host.reloads.is_empty());
    }

    proptest! {
        #[test]
        fn peer_moves_by_exactly_the_source_travel(
            src_anchor in -1.0e9..1.0e9f64,
            dest_anchor in -1.0e9..1.0e9f64,
            travel in -1.0e9..1.0e9f64,
        ) {
            let mut host = TestHost::default();
            let a = host.insert(1, Some("g"), ViewKind::document("markdown"), src_anchor);
            let b = host.insert(2, Some("g"), ViewKind::document("markdown"), dest_anchor);
            let mut sync = ScrollSync::new();

            // First pass anchors both panes and moves nothing.
            prop_assert!(sync.synchronize(&mut host, a, SyncScope::SameKind));
            prop_assert_eq!(host.scroll_of(b), ScrollOffset::new(dest_anchor));

            host.set_scroll(a, src_anchor + travel);
            prop_assert!(sync.synchronize(&mut host, a, SyncScope::SameKind));

            let expected = ScrollOffset::new(dest_anchor)
                + (ScrollOffset::new(src_anchor + travel) - ScrollOffset::new(src_anchor));
            prop_assert_eq!(host.scroll_of(b), expected);
        }

        #[test]
        fn completion_is_false_iff_an_admitted_peer_is_busy(busy in proptest::collection::vec(any::<bool>(), 4)) {
            let mut host = TestHost::default();
            let source = host.insert(1, Some("g"), ViewKind::document("markdown"), 50.0);
            let peers: Vec<PaneId> = (0..busy.len() as u64)
                .map(|i| host.insert(i + 2, Some("g"), ViewKind::document("markdown"), 10.0 * i as f64))
                .collect();
            let mut sync = ScrollSync::new();
            for (peer, flag) in peers.iter().zip(&busy) {
                if *flag {
                    sync.mark_busy(*peer);
                }
            }

            let complete = sync.synchronize(&mut host, source, SyncScope::AllKinds);
            prop_assert_eq!(complete, !busy.contains(&true));
            for (peer, flag) in peers.iter().zip(&busy) {
                // Busy peers keep their scroll and stay unanchored.
                prop_assert_eq!(sync.baseline(*peer).is_some(), !*flag);
            }
        }
    }
}
