#![forbid(unsafe_code)]

//! Lockstep public facade crate.
//!
//! This crate provides the stable surface area for host integrations. It
//! re-exports the model and engine types a host needs to implement
//! [`SyncHost`] and drive [`ScrollSync`], and offers a lightweight
//! prelude for day-to-day usage.
//!
//! ```
//! use lockstep::prelude::*;
//! use lockstep_harness::WorkspaceFixture;
//!
//! let mut panes = WorkspaceFixture::new();
//! let left = panes.open_in_group("notes", ViewKind::document("markdown"), "a.md", 100.0);
//! let right = panes.open_in_group("notes", ViewKind::document("markdown"), "b.md", 40.0);
//!
//! let mut sync = ScrollSync::new();
//! // The first pass anchors both panes where they stand.
//! sync.synchronize(&mut panes, left, SyncScope::SameKind);
//!
//! // The left pane scrolls down 30 units; its peer follows relative to
//! // its own anchor: 40 + (130 - 100) = 70.
//! panes.set_scroll(left, 130.0);
//! sync.synchronize(&mut panes, left, SyncScope::SameKind);
//! assert_eq!(panes.scroll_of(right), ScrollOffset::new(70.0));
//! ```

// --- Model re-exports ------------------------------------------------------

pub use lockstep_model::{
    GroupId, ModelError, PaneId, PaneIdAllocator, ScrollDelta, ScrollOffset, ViewFamily, ViewKind,
};

// --- Engine re-exports -----------------------------------------------------

pub use lockstep_engine::{Baseline, PaneRegistry, ScrollSync, SyncHost, SyncScope};

/// Convenience imports for host integrations.
pub mod prelude {
    pub use crate::{GroupId, PaneId, ScrollOffset, ScrollSync, SyncHost, SyncScope, ViewKind};

    pub use crate::{engine, model};
}

pub use lockstep_engine as engine;
pub use lockstep_model as model;
