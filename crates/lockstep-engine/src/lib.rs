#![forbid(unsafe_code)]

//! Relative scroll synchronization for grouped panes.
//!
//! A host declares panes members of a named sync group; when one of them
//! scrolls, [`ScrollSync::synchronize`] moves every peer by the same
//! *relative* amount. Each pane keeps a baseline anchor (its scroll
//! position when it last freshly became relevant to the group) and a
//! peer's new position is always
//!
//! ```text
//! peer_baseline + (source_live - source_baseline)
//! ```
//!
//! so panes of different lengths or starting positions stay relatively
//! aligned instead of being snapped to one absolute coordinate. Peers
//! whose view cannot track a scroll measure are instead handed to the
//! host as reload requests mirroring the source.
//!
//! The engine owns all of its state in an explicit side table keyed by
//! [`PaneId`](lockstep_model::PaneId); nothing is ever attached to host
//! objects, and dropping (or [`reset`](ScrollSync::reset)ting) the
//! engine leaves the host untouched. The world outside is reached only
//! through the [`SyncHost`] trait.
//!
//! # Example
//!
//! ```
//! use lockstep_engine::{ScrollSync, SyncHost, SyncScope};
//! use lockstep_model::{GroupId, PaneId, ScrollOffset, ViewKind};
//!
//! // Two markdown panes in one group, tracked by a toy host.
//! struct TwoPanes {
//!     group: GroupId,
//!     scroll: [ScrollOffset; 2],
//! }
//!
//! impl TwoPanes {
//!     fn id(index: usize) -> PaneId {
//!         PaneId::new(index as u64 + 1).expect("non-zero")
//!     }
//!
//!     fn index(pane: PaneId) -> usize {
//!         pane.get() as usize - 1
//!     }
//! }
//!
//! impl SyncHost for TwoPanes {
//!     type ViewState = ();
//!
//!     fn group_members(&self, _group: &GroupId) -> Vec<PaneId> {
//!         vec![Self::id(0), Self::id(1)]
//!     }
//!
//!     fn pane_group(&self, _pane: PaneId) -> Option<GroupId> {
//!         Some(self.group.clone())
//!     }
//!
//!     fn view_kind(&self, _pane: PaneId) -> ViewKind {
//!         ViewKind::document("markdown")
//!     }
//!
//!     fn read_scroll(&self, pane: PaneId) -> ScrollOffset {
//!         self.scroll[Self::index(pane)]
//!     }
//!
//!     fn apply_scroll(&mut self, pane: PaneId, offset: ScrollOffset) {
//!         self.scroll[Self::index(pane)] = offset;
//!     }
//!
//!     fn sync_view_state(&self, _pane: PaneId) {}
//!
//!     fn request_reload(&mut self, _pane: PaneId, _source: PaneId, _state: ()) {}
//! }
//!
//! let mut host = TwoPanes {
//!     group: GroupId::new("side-by-side").expect("non-empty"),
//!     scroll: [ScrollOffset::new(100.0), ScrollOffset::new(40.0)],
//! };
//! let mut sync = ScrollSync::new();
//!
//! // The first pass anchors both panes at their current positions.
//! assert!(sync.synchronize(&mut host, TwoPanes::id(0), SyncScope::AllKinds));
//!
//! // The left pane scrolls 30 units; the right pane follows relative to
//! // its own anchor: 40 + (130 - 100) = 70.
//! host.scroll[0] = ScrollOffset::new(130.0);
//! assert!(sync.synchronize(&mut host, TwoPanes::id(0), SyncScope::AllKinds));
//! assert_eq!(host.scroll[1], ScrollOffset::new(70.0));
//! ```

pub mod host;
pub mod registry;
pub mod sync;

pub use host::SyncHost;
pub use registry::{Baseline, PaneRegistry};
pub use sync::{ScrollSync, SyncScope};
