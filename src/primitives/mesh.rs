//! Mesh-facing value types.
//!
//! ## Purpose
//!
//! This module defines the vocabulary the rest of the crate speaks: vertex
//! and channel identifiers, positions, undirected edges, and per-vertex
//! channel entries as snapshotted from a host mesh.
//!
//! ## Design notes
//!
//! * **Host-addressed ids**: vertex ids are the host's own indices; the crate
//!   never renumbers vertices, so results and write-backs address the host
//!   directly.
//! * **Slot indirection**: a [`ChannelEntry`] carries the host storage slot
//!   for its value alongside the value itself, so write-back needs no second
//!   lookup. For list-backed hosts the slot is the index within the vertex's
//!   membership list.
//!
//! ## Invariants
//!
//! * An [`Edge`] is undirected; `(a, b)` and `(b, a)` describe the same edge.
//!
//! ## Non-goals
//!
//! * This module does not hold topology (the graph layer derives adjacency).
//! * This module does not validate indices (engine validator).

// ============================================================================
// Identifiers
// ============================================================================

/// Host index of a mesh vertex.
pub type VertexId = usize;

/// Host identifier of an attribute channel (e.g. a vertex group).
pub type ChannelId = usize;

/// Host storage slot of a channel value within a vertex's attribute storage.
pub type SlotIndex = usize;

/// A vertex position in 3D space.
pub type Position<T> = [T; 3];

// ============================================================================
// Edge
// ============================================================================

/// An undirected mesh edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// First endpoint.
    pub a: VertexId,

    /// Second endpoint.
    pub b: VertexId,
}

impl Edge {
    /// Create an edge between two vertices.
    #[inline]
    pub const fn new(a: VertexId, b: VertexId) -> Self {
        Self { a, b }
    }

    /// Returns `true` if the edge has `v` as an endpoint.
    #[inline]
    pub const fn touches(&self, v: VertexId) -> bool {
        self.a == v || self.b == v
    }

    /// The endpoint opposite `v`, or `None` if `v` is not an endpoint or the
    /// edge is a self-loop at `v`.
    #[inline]
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if self.is_loop() {
            None
        } else if self.a == v {
            Some(self.b)
        } else if self.b == v {
            Some(self.a)
        } else {
            None
        }
    }

    /// Returns `true` if both endpoints are the same vertex.
    #[inline]
    pub const fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

// ============================================================================
// Channel Entry
// ============================================================================

/// One vertex's membership in an attribute channel, as snapshotted from the
/// host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelEntry<T> {
    /// The attribute value at snapshot time.
    pub value: T,

    /// The host storage slot holding the value, used for write-back.
    pub slot: SlotIndex,
}

impl<T> ChannelEntry<T> {
    /// Create an entry from a value and its host storage slot.
    #[inline]
    pub const fn new(value: T, slot: SlotIndex) -> Self {
        Self { value, slot }
    }
}
