//! In-memory host mesh implementation.
//!
//! ## Purpose
//!
//! This module provides [`MemoryMesh`], a self-contained [`HostMesh`]
//! implementation for callers without a surrounding 3D application: tests,
//! examples, and batch tools operating on meshes they own in memory.
//!
//! ## Design notes
//!
//! * **Vertex-group channels**: each vertex carries a list of
//!   `(channel, value)` memberships; the storage slot handed to the core is
//!   the index within that list, mirroring how the original host addressed
//!   group weights.
//! * **Mask expansion**: face selections expand to the union of the selected
//!   faces' vertices at snapshot time; vertex selections are used directly.
//!
//! ## Invariants
//!
//! * A vertex holds at most one membership per channel.
//! * `write_back` only ever touches the slot the snapshot reported.
//!
//! ## Non-goals
//!
//! * This type does not manage topology (no edge/face derivation from one
//!   another); callers supply edges and faces explicitly.
//! * This type does not validate its own construction; the API layer
//!   validates the snapshot it reads.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::host::{HostMesh, SelectionMode};
use crate::primitives::errors::BlurError;
use crate::primitives::mesh::{ChannelEntry, ChannelId, Edge, Position, SlotIndex, VertexId};

// ============================================================================
// Memory Mesh
// ============================================================================

/// An owned, in-memory mesh with vertex-group attribute channels.
#[derive(Debug, Clone)]
pub struct MemoryMesh<T> {
    positions: Vec<Position<T>>,
    edges: Vec<Edge>,
    faces: Vec<Vec<VertexId>>,

    /// Per-vertex channel memberships; the slot index is the position within
    /// this list.
    memberships: Vec<Vec<(ChannelId, T)>>,

    active_channel: ChannelId,
    selection: SelectionMode,
    selected_vertices: Vec<bool>,
    selected_faces: Vec<bool>,
}

impl<T: Float> MemoryMesh<T> {
    /// Create a mesh from positions and edges, with no faces, no channel
    /// memberships, and no selection.
    pub fn new(positions: Vec<Position<T>>, edges: Vec<Edge>) -> Self {
        let n = positions.len();
        Self {
            positions,
            edges,
            faces: Vec::new(),
            memberships: vec![Vec::new(); n],
            active_channel: 0,
            selection: SelectionMode::None,
            selected_vertices: vec![false; n],
            selected_faces: Vec::new(),
        }
    }

    /// Attach faces (vertex-id loops) to the mesh, for face selections.
    pub fn with_faces(mut self, faces: Vec<Vec<VertexId>>) -> Self {
        self.selected_faces = vec![false; faces.len()];
        self.faces = faces;
        self
    }

    // ========================================================================
    // Channel Management
    // ========================================================================

    /// Set a vertex's weight in a channel, adding the membership if absent.
    pub fn set_weight(&mut self, vertex: VertexId, channel: ChannelId, value: T) {
        let entries = &mut self.memberships[vertex];
        match entries.iter_mut().find(|(c, _)| *c == channel) {
            Some((_, v)) => *v = value,
            None => entries.push((channel, value)),
        }
    }

    /// Read a vertex's weight in a channel, if it is a member.
    pub fn weight(&self, vertex: VertexId, channel: ChannelId) -> Option<T> {
        self.memberships[vertex]
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|&(_, v)| v)
    }

    /// Select which channel smoothing operates on.
    pub fn set_active_channel(&mut self, channel: ChannelId) {
        self.active_channel = channel;
    }

    // ========================================================================
    // Selection Management
    // ========================================================================

    /// Activate a vertex-level selection mask over the given vertices.
    pub fn select_vertices(&mut self, vertices: &[VertexId]) {
        self.selection = SelectionMode::Vertex;
        self.selected_vertices = vec![false; self.positions.len()];
        for &v in vertices {
            self.selected_vertices[v] = true;
        }
    }

    /// Activate a face-level selection mask over the given face indices.
    pub fn select_faces(&mut self, faces: &[usize]) {
        self.selection = SelectionMode::Face;
        self.selected_faces = vec![false; self.faces.len()];
        for &fi in faces {
            self.selected_faces[fi] = true;
        }
    }

    /// Clear any active selection mask.
    pub fn clear_selection(&mut self) {
        self.selection = SelectionMode::None;
    }

    /// The current selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection
    }
}

// ============================================================================
// HostMesh Implementation
// ============================================================================

impl<T: Float> HostMesh<T> for MemoryMesh<T> {
    fn active_channel(&self) -> Result<ChannelId, BlurError> {
        Ok(self.active_channel)
    }

    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn positions(&self) -> Result<Vec<Position<T>>, BlurError> {
        Ok(self.positions.clone())
    }

    fn edges(&self) -> Result<Vec<Edge>, BlurError> {
        Ok(self.edges.clone())
    }

    fn channel_entries(
        &self,
        channel: ChannelId,
    ) -> Result<Vec<Option<ChannelEntry<T>>>, BlurError> {
        Ok(self
            .memberships
            .iter()
            .map(|entries| {
                entries
                    .iter()
                    .position(|(c, _)| *c == channel)
                    .map(|slot| ChannelEntry::new(entries[slot].1, slot))
            })
            .collect())
    }

    fn selection_mask(&self) -> Result<Option<Vec<bool>>, BlurError> {
        match self.selection {
            SelectionMode::None => Ok(None),
            SelectionMode::Vertex => Ok(Some(self.selected_vertices.clone())),
            SelectionMode::Face => {
                let mut mask = vec![false; self.positions.len()];
                for (fi, face) in self.faces.iter().enumerate() {
                    if self.selected_faces[fi] {
                        for &v in face {
                            mask[v] = true;
                        }
                    }
                }
                Ok(Some(mask))
            }
        }
    }

    fn write_back(
        &mut self,
        vertex: VertexId,
        slot: SlotIndex,
        value: T,
    ) -> Result<(), BlurError> {
        let entries = self
            .memberships
            .get_mut(vertex)
            .ok_or_else(|| BlurError::HostDataUnavailable(format!("no vertex {vertex}")))?;
        let entry = entries.get_mut(slot).ok_or_else(|| {
            BlurError::HostDataUnavailable(format!("vertex {vertex} has no slot {slot}"))
        })?;
        entry.1 = value;
        Ok(())
    }
}
