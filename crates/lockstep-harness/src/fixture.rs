#![forbid(unsafe_code)]

//! An in-memory pane workspace implementing [`SyncHost`].
//!
//! [`WorkspaceFixture`] stands in for the window manager a real host
//! would be: it owns panes, resolves groups in ascending pane-id order,
//! and records every engine-issued action in an ordered effect log.
//! Reload requests are queued rather than applied, mirroring a host
//! whose reloads complete asynchronously; a test decides when they land
//! by calling [`settle_reloads`](WorkspaceFixture::settle_reloads).

use std::collections::BTreeMap;

use lockstep_engine::SyncHost;
use lockstep_model::{GroupId, PaneId, PaneIdAllocator, ScrollOffset, ViewKind};

/// One open pane in the fixture workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct FixturePane {
    /// The kind of view the pane currently displays.
    pub kind: ViewKind,
    /// Current group membership, if any.
    pub group: Option<GroupId>,
    /// Current scroll position.
    pub scroll: ScrollOffset,
    /// Name of the displayed document.
    pub document: String,
}

/// What the source pane looked like when a pass captured it.
///
/// This is the fixture's view-state payload: queued with each reload
/// request and applied verbatim when the reload settles.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    /// Document the source was showing.
    pub document: String,
    /// Kind of view the source was showing it in.
    pub kind: ViewKind,
    /// Source scroll position at capture time.
    pub scroll: ScrollOffset,
}

/// One engine-issued action, in the order the engine issued it.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The engine moved a pane to a new scroll position.
    ScrollApplied {
        /// Pane that was moved.
        pane: PaneId,
        /// Position it was moved to.
        offset: ScrollOffset,
    },
    /// The engine asked for a pane to be reloaded to mirror a source.
    ReloadRequested {
        /// Pane to reload.
        pane: PaneId,
        /// Pane it should mirror.
        source: PaneId,
    },
}

#[derive(Debug)]
struct PendingReload {
    pane: PaneId,
    snapshot: ViewSnapshot,
}

/// In-memory workspace of panes, usable wherever a [`SyncHost`] is.
#[derive(Debug, Default)]
pub struct WorkspaceFixture {
    panes: BTreeMap<PaneId, FixturePane>,
    ids: PaneIdAllocator,
    effects: Vec<Effect>,
    pending_reloads: Vec<PendingReload>,
}

impl WorkspaceFixture {
    /// An empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an ungrouped pane and return its id.
    pub fn open_pane(&mut self, kind: ViewKind, document: &str, scroll: f64) -> PaneId {
        let id = self.ids.allocate().expect("pane id space exhausted");
        self.panes.insert(
            id,
            FixturePane {
                kind,
                group: None,
                scroll: ScrollOffset::new(scroll),
                document: document.to_owned(),
            },
        );
        id
    }

    /// Open a pane directly into a group and return its id.
    pub fn open_in_group(
        &mut self,
        group: &str,
        kind: ViewKind,
        document: &str,
        scroll: f64,
    ) -> PaneId {
        let id = self.open_pane(kind, document, scroll);
        self.set_group(id, Some(group));
        id
    }

    /// Close a pane. Reloads still queued for it are dropped on settle.
    pub fn close_pane(&mut self, id: PaneId) {
        self.panes.remove(&id);
    }

    /// Assign (or clear) a pane's group membership.
    ///
    /// # Panics
    /// Panics when the pane is not open or the group name is empty.
    pub fn set_group(&mut self, id: PaneId, group: Option<&str>) {
        self.pane_mut(id).group =
            group.map(|name| GroupId::new(name).expect("group name must be non-empty"));
    }

    /// Move a pane's scroll position, as a user scrolling would.
    pub fn set_scroll(&mut self, id: PaneId, scroll: f64) {
        self.pane_mut(id).scroll = ScrollOffset::new(scroll);
    }

    /// Current scroll position of a pane.
    #[must_use]
    pub fn scroll_of(&self, id: PaneId) -> ScrollOffset {
        self.pane(id).scroll
    }

    /// The pane behind `id`.
    ///
    /// # Panics
    /// Panics when the pane is not open.
    #[must_use]
    pub fn pane(&self, id: PaneId) -> &FixturePane {
        self.panes.get(&id).expect("pane not open")
    }

    /// Mutable access to the pane behind `id`.
    ///
    /// # Panics
    /// Panics when the pane is not open.
    pub fn pane_mut(&mut self, id: PaneId) -> &mut FixturePane {
        self.panes.get_mut(&id).expect("pane not open")
    }

    /// Everything the engine has asked this workspace to do so far.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Drain the effect log, leaving it empty for the next assertion.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Number of reload requests queued but not yet settled.
    #[must_use]
    pub fn pending_reloads(&self) -> usize {
        self.pending_reloads.len()
    }

    /// Complete every queued reload, in request order.
    ///
    /// Each target pane takes on the queued snapshot's document, kind,
    /// and scroll position. Reloads aimed at a pane closed since the
    /// request are dropped. Returns how many reloads actually landed.
    pub fn settle_reloads(&mut self) -> usize {
        let mut settled = 0;
        for reload in self.pending_reloads.drain(..) {
            if let Some(pane) = self.panes.get_mut(&reload.pane) {
                pane.document = reload.snapshot.document;
                pane.kind = reload.snapshot.kind;
                pane.scroll = reload.snapshot.scroll;
                settled += 1;
            }
        }
        settled
    }
}

impl SyncHost for WorkspaceFixture {
    type ViewState = ViewSnapshot;

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
        self.pane(pane).kind.clone()
    }

    fn read_scroll(&self, pane: PaneId) -> ScrollOffset {
        self.scroll_of(pane)
    }

    fn apply_scroll(&mut self, pane: PaneId, offset: ScrollOffset) {
        self.pane_mut(pane).scroll = offset;
        self.effects.push(Effect::ScrollApplied { pane, offset });
    }

    fn sync_view_state(&self, pane: PaneId) -> ViewSnapshot {
        let pane = self.pane(pane);
        ViewSnapshot {
            document: pane.document.clone(),
            kind: pane.kind.clone(),
            scroll: pane.scroll,
        }
    }

    fn request_reload(&mut self, pane: PaneId, source: PaneId, state: ViewSnapshot) {
        self.effects.push(Effect::ReloadRequested { pane, source });
        self.pending_reloads.push(PendingReload {
            pane,
            snapshot: state,
        });
    }
}
