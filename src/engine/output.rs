//! Output types and result structures for smoothing runs.
//!
//! ## Purpose
//!
//! This module defines the `BlurResult` struct which encapsulates the
//! outputs of a smoothing invocation: the final value per surviving active
//! vertex, the run's parameters, and construction diagnostics.
//!
//! ## Design notes
//!
//! * **Parallel vectors**: `vertex_ids`, `initial`, and `values` are
//!   index-aligned, ordered by host vertex id.
//! * **Ergonomics**: implements `Display` for human-readable output.
//! * **Diagnostics**: the orphan count is reported for callers that want to
//!   surface it; the core itself attaches no meaning to it after build.
//!
//! ## Invariants
//!
//! * All vectors have one entry per surviving active vertex.
//! * Vertices absent from `vertex_ids` were untouched by the run.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not write values back to the host (the API layer does,
//!   before the result is returned).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::mesh::VertexId;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of one smoothing invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BlurResult<T> {
    /// Mesh ids of the vertices that were diffused, in host order.
    pub vertex_ids: Vec<VertexId>,

    /// Original values `v0`, parallel to `vertex_ids`.
    pub initial: Vec<T>,

    /// Smoothed values after the final pass, parallel to `vertex_ids`.
    pub values: Vec<T>,

    /// Number of provisional vertices pruned as orphans.
    pub pruned: usize,

    /// Number of relaxation passes performed.
    pub iterations_used: usize,

    /// Laplace factor used for the run.
    pub factor_used: T,
}

impl<T: Float> BlurResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of vertices that were diffused.
    pub fn active_count(&self) -> usize {
        self.vertex_ids.len()
    }

    /// Returns `true` if the run touched no vertices (empty channel or all
    /// orphans).
    pub fn is_noop(&self) -> bool {
        self.vertex_ids.is_empty()
    }

    /// Look up the smoothed value for a mesh vertex, if it was diffused.
    pub fn value_of(&self, vertex: VertexId) -> Option<T> {
        self.vertex_ids
            .iter()
            .position(|&id| id == vertex)
            .map(|i| self.values[i])
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for BlurResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Active vertices: {}", self.active_count())?;
        writeln!(f, "  Pruned orphans:  {}", self.pruned)?;
        writeln!(f, "  Iterations:      {}", self.iterations_used)?;
        writeln!(f, "  Factor:          {}", self.factor_used)?;
        writeln!(f)?;

        writeln!(f, "Smoothed Weights:")?;
        writeln!(f, "{:>8} {:>12} {:>12}", "Vertex", "Initial", "Smoothed")?;
        writeln!(f, "{:-<34}", "")?;

        // Show first 10 and last 10 rows if more than 20 vertices.
        let n = self.vertex_ids.len();
        let show_all = n <= 20;
        let rows: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>8} {:>12.6} {:>12.6}",
                self.vertex_ids[idx], self.initial[idx], self.values[idx]
            )?;
        }

        Ok(())
    }
}
