//! Kernel (weight) functions for neighborhood averaging.
//!
//! ## Purpose
//!
//! This module provides the radial kernel used to weight a neighbor's
//! contribution to a vertex's smoothed value, and the enum selecting between
//! kernel-weighted and uniform averaging.
//!
//! ## Design notes
//!
//! * **Local bandwidth**: the Gaussian kernel is parameterized per vertex by
//!   the mean length of its qualifying edges, so dense and sparse regions of
//!   a mesh smooth at comparable rates.
//! * **Precomputation**: kernel weights depend only on positions and
//!   topology, never on attribute values, so they are computed once at graph
//!   build time and reused across all passes.
//!
//! ## Key concepts
//!
//! * **Gaussian**: `k = 1/(h·√(2π)) · exp(−d² / (2·h²))` with `h` the local
//!   average edge length and `d²` the squared neighbor distance.
//! * **UniformAverage**: plain arithmetic mean of neighbor values.
//!
//! ## Invariants
//!
//! * Kernel weights are non-negative.
//! * A non-positive bandwidth yields a zero weight (the degenerate case that
//!   triggers the uniform fallback downstream).
//!
//! ## Non-goals
//!
//! * This module does not perform weight normalization (the engine divides
//!   by the precomputed total weight).
//! * This module does not decide the fallback policy (graph build time).

// External dependencies
use num_traits::Float;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Square root of 2*pi, used in Gaussian kernel calculations.
pub const SQRT_2PI: f64 = 2.5066282746310005024157652848110452530069867406099_f64;

// ============================================================================
// Kernel Mode Enum
// ============================================================================

/// Averaging mode for neighborhood values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelMode {
    /// Distance-weighted Gaussian average using the precomputed kernel.
    ///
    /// This is the default and recommended mode.
    #[default]
    Gaussian,

    /// Unweighted arithmetic mean of neighbor values.
    UniformAverage,
}

impl KernelMode {
    /// Get the name of the kernel mode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            KernelMode::Gaussian => "Gaussian",
            KernelMode::UniformAverage => "UniformAverage",
        }
    }
}

// ============================================================================
// Weight Computation
// ============================================================================

/// Compute the Gaussian kernel weight for a neighbor.
///
/// `distance_squared` is the squared Euclidean distance to the neighbor and
/// `avg_edge` the vertex's local bandwidth (mean qualifying-edge length).
/// Returns zero for a non-positive bandwidth, which makes the vertex's total
/// weight zero and routes it to the uniform-average fallback.
#[inline]
pub fn gaussian_weight<T: Float>(distance_squared: T, avg_edge: T) -> T {
    if avg_edge <= T::zero() {
        return T::zero();
    }

    let two = T::from(2.0).unwrap();
    let sqrt_2pi = T::from(SQRT_2PI).unwrap();

    let norm = T::one() / (avg_edge * sqrt_2pi);
    let exponent = -(distance_squared / (two * avg_edge * avg_edge));

    norm * exponent.exp()
}
