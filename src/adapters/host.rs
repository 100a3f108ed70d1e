//! Host mesh interface for one smoothing invocation.
//!
//! ## Purpose
//!
//! This module defines the narrow contract between the diffusion core and
//! the host 3D application that owns the mesh and its attribute storage:
//! snapshot reads of vertices, edges, channel memberships, and the selection
//! mask, plus per-vertex write-back of smoothed values.
//!
//! ## Design notes
//!
//! * **Snapshot semantics**: read methods return owned copies taken once at
//!   the start of an invocation; the core never retains references into host
//!   runtime objects beyond that call.
//! * **Serialized invocations**: write-back mutates the mesh, so at most one
//!   run per mesh may be active at a time; the caller is responsible for not
//!   re-triggering while a write-back is in flight.
//! * **All-or-nothing**: the core calls `write_back` only after the final
//!   pass; aborting earlier leaves the attribute unchanged.
//!
//! ## Key concepts
//!
//! * **Selection mask**: an optional per-vertex eligibility mask derived
//!   from the host's vertex or face selection; `None` means unmasked.
//! * **HostDataUnavailable**: the single error a host read/write may raise;
//!   it aborts the run before any write-back occurs.
//!
//! ## Non-goals
//!
//! * This trait does not expose host-specific object models, undo stacks,
//!   or UI state.
//! * This trait does not support partial or streaming mesh access.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::BlurError;
use crate::primitives::mesh::{ChannelEntry, ChannelId, Edge, Position, SlotIndex, VertexId};

// ============================================================================
// Selection Mode
// ============================================================================

/// Which host selection restricts the active set, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No masking; all vertices are candidates.
    #[default]
    None,

    /// Vertex-level selection used directly.
    Vertex,

    /// Face-level selection, expanded to the union of the selected faces'
    /// vertices.
    Face,
}

// ============================================================================
// Host Mesh Trait
// ============================================================================

/// Read/write access to one host mesh for one smoothing invocation.
///
/// All read methods snapshot host state. Any failure maps to
/// [`BlurError::HostDataUnavailable`] and aborts the run.
pub trait HostMesh<T: Float> {
    /// The attribute channel currently selected for editing.
    fn active_channel(&self) -> Result<ChannelId, BlurError>;

    /// Number of vertices in the mesh.
    fn vertex_count(&self) -> usize;

    /// Snapshot of all vertex positions, indexed by vertex id.
    fn positions(&self) -> Result<Vec<Position<T>>, BlurError>;

    /// Snapshot of the mesh edge list.
    fn edges(&self) -> Result<Vec<Edge>, BlurError>;

    /// Per-vertex membership in the given channel: the current value and
    /// storage slot, or `None` for vertices not carrying the channel.
    ///
    /// Must return one entry per mesh vertex.
    fn channel_entries(&self, channel: ChannelId)
        -> Result<Vec<Option<ChannelEntry<T>>>, BlurError>;

    /// The active selection mask as a dense per-vertex eligibility vector,
    /// or `None` when no masking is active.
    fn selection_mask(&self) -> Result<Option<Vec<bool>>, BlurError>;

    /// Commit one vertex's smoothed value to its storage slot.
    ///
    /// Called once per surviving active vertex after the final pass.
    fn write_back(&mut self, vertex: VertexId, slot: SlotIndex, value: T)
        -> Result<(), BlurError>;
}
