//! Construction of the restricted diffusion graph and its cached kernel.
//!
//! ## Purpose
//!
//! This module builds the [`DiffusionGraph`]: the subset of mesh vertices
//! eligible for diffusion (channel members intersected with an optional
//! selection mask), their active-neighbor lists, and the per-neighbor
//! Gaussian kernel weights derived from local edge-length statistics.
//!
//! ## Design notes
//!
//! * **Frozen membership**: neighbor candidates are tested against the
//!   provisional member set as it stood before any pruning, so construction
//!   is independent of vertex visiting order. (The original host tool pruned
//!   a live list in reverse to stay correct; freezing removes the ordering
//!   concern entirely.)
//! * **Orphan pruning**: a provisional vertex with no qualifying edge is
//!   dropped from the active set. Its value is never touched by diffusion.
//!   A neighbor of a retained vertex can never itself be an orphan, because
//!   the shared edge qualifies for both endpoints.
//! * **Dense membership test**: membership is a `Vec<bool>` keyed by vertex
//!   id rather than a hash set; the original noted set lookups dominated
//!   construction time.
//! * **Build-time fallback decision**: a vertex whose kernel degenerates
//!   (total weight zero, e.g. all qualifying edges have zero length) is
//!   flagged for uniform averaging once here, not re-checked per pass.
//!
//! ## Key concepts
//!
//! * **Qualifying edge**: an edge of `u` whose both endpoints lie in
//!   `{u} ∪ active neighbor candidates of u`; equivalently, an edge from `u`
//!   to another provisional member. Self-loops never qualify.
//! * **Local bandwidth**: the mean length of a vertex's qualifying edges,
//!   parameterizing its Gaussian kernel.
//!
//! ## Invariants
//!
//! * Every retained vertex has at least one neighbor, and every listed
//!   neighbor is itself a retained active vertex.
//! * Active vertices appear in host vertex-id order.
//! * Kernel weights are non-negative functions of position and topology
//!   only, reusable across all passes of one invocation.
//!
//! ## Non-goals
//!
//! * This module does not read host data (the adapters layer snapshots it).
//! * This module does not validate indices or finiteness (engine validator).
//! * This module does not mutate positions or edges.

// Feature-gated imports
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
use crate::math::geometry::{distance, distance_squared};
use crate::math::kernel::gaussian_weight;
use crate::primitives::mesh::{ChannelEntry, Edge, Position, SlotIndex, VertexId};

// ============================================================================
// Diffusion Graph
// ============================================================================

/// The restricted diffusion graph for one smoothing invocation.
///
/// All per-active-vertex vectors are parallel and ordered by host vertex id.
/// The graph is value-independent: one built graph may be run through the
/// engine any number of times with different parameters.
#[derive(Debug, Clone)]
pub struct DiffusionGraph<T> {
    /// Mesh ids of the active vertices, in host order.
    pub vertex_ids: Vec<VertexId>,

    /// Initial value `v0` per active vertex (directional clamp reference).
    pub initial: Vec<T>,

    /// Host storage slot per active vertex, for write-back.
    pub slots: Vec<SlotIndex>,

    /// Active neighbor mesh ids per active vertex.
    pub neighbors: Vec<Vec<VertexId>>,

    /// Precomputed Gaussian kernel weight per neighbor, parallel to
    /// `neighbors`.
    pub kernel_weights: Vec<Vec<T>>,

    /// Sum of kernel weights per active vertex.
    pub total_weights: Vec<T>,

    /// Whether the vertex falls back to uniform averaging (degenerate
    /// kernel), decided once at build time.
    pub uniform_fallback: Vec<bool>,

    /// Dense initial values, one entry per mesh vertex.
    ///
    /// Seeds the diffusion buffer; entries for vertices outside the
    /// provisional set are zero and are never read.
    pub values: Vec<T>,

    /// Number of mesh vertices (length of the dense buffers).
    pub vertex_count: usize,

    /// Number of provisional vertices dropped as orphans.
    pub pruned: usize,
}

impl<T> DiffusionGraph<T> {
    /// Number of active vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertex_ids.len()
    }

    /// Returns `true` if no vertex survived construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_ids.is_empty()
    }
}

// ============================================================================
// Graph Builder
// ============================================================================

/// Builds [`DiffusionGraph`]s from host mesh snapshots.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Build the diffusion graph for the selected channel.
    ///
    /// `entries` carries, per mesh vertex, the vertex's membership in the
    /// selected channel (`None` for non-members). `mask` optionally restricts
    /// candidates to selected vertices; `None` means all vertices are
    /// candidates. Both slices must have one entry per mesh vertex.
    ///
    /// An empty channel yields an empty graph; it is not an error.
    pub fn build<T: Float>(
        positions: &[Position<T>],
        edges: &[Edge],
        entries: &[Option<ChannelEntry<T>>],
        mask: Option<&[bool]>,
    ) -> DiffusionGraph<T> {
        let vertex_count = positions.len();

        // Provisional active set: channel members passing the mask, in host
        // vertex-id order. Membership is frozen here, before pruning.
        let mut provisional: Vec<(VertexId, T, SlotIndex)> = Vec::new();
        let mut member = vec![false; vertex_count];
        let mut values = vec![T::zero(); vertex_count];

        for (id, entry) in entries.iter().enumerate() {
            if let Some(entry) = entry {
                if mask.map_or(true, |m| m[id]) {
                    provisional.push((id, entry.value, entry.slot));
                    member[id] = true;
                    values[id] = entry.value;
                }
            }
        }

        // Incident-edge lists for the whole mesh. Self-loops carry no
        // connectivity and are skipped.
        let mut incident: Vec<Vec<usize>> = vec![Vec::new(); vertex_count];
        for (ei, edge) in edges.iter().enumerate() {
            if edge.is_loop() {
                continue;
            }
            incident[edge.a].push(ei);
            incident[edge.b].push(ei);
        }

        let mut vertex_ids = Vec::with_capacity(provisional.len());
        let mut initial = Vec::with_capacity(provisional.len());
        let mut slots = Vec::with_capacity(provisional.len());
        let mut neighbors = Vec::with_capacity(provisional.len());
        let mut kernel_weights = Vec::with_capacity(provisional.len());
        let mut total_weights = Vec::with_capacity(provisional.len());
        let mut uniform_fallback = Vec::with_capacity(provisional.len());
        let mut pruned = 0;

        for &(u, v0, slot) in &provisional {
            // An incident edge qualifies exactly when its far endpoint is a
            // provisional member; those far endpoints are the neighbor
            // candidates.
            let mut nbrs: Vec<VertexId> = Vec::new();
            let mut length_sum = T::zero();

            for &ei in &incident[u] {
                let Some(n) = edges[ei].other(u) else {
                    continue;
                };
                if member[n] {
                    length_sum = length_sum + distance(&positions[u], &positions[n]);
                    nbrs.push(n);
                }
            }

            if nbrs.is_empty() {
                // Orphan: no qualifying edges. Value stays at v0.
                pruned += 1;
                continue;
            }

            let avg_edge = length_sum / T::from(nbrs.len()).unwrap();

            let mut weights = Vec::with_capacity(nbrs.len());
            let mut total = T::zero();
            for &n in &nbrs {
                let d2 = distance_squared(&positions[u], &positions[n]);
                let k = gaussian_weight(d2, avg_edge);
                total = total + k;
                weights.push(k);
            }

            vertex_ids.push(u);
            initial.push(v0);
            slots.push(slot);
            neighbors.push(nbrs);
            kernel_weights.push(weights);
            total_weights.push(total);
            uniform_fallback.push(!(total > T::zero()));
        }

        DiffusionGraph {
            vertex_ids,
            initial,
            slots,
            neighbors,
            kernel_weights,
            total_weights,
            uniform_fallback,
            values,
            vertex_count,
            pruned,
        }
    }
}
