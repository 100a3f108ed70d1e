//! Execution engine for weight-diffusion passes.
//!
//! ## Purpose
//!
//! This module runs the relaxation loop over a built [`DiffusionGraph`]: for
//! each pass, every active vertex blends its previous value with its
//! neighborhood average under the configured kernel mode, then applies the
//! directional clamp against its original value.
//!
//! ## Design notes
//!
//! * **Synchronous passes**: every vertex's average for pass `k` is computed
//!   purely from pass `k−1`'s settled values via double-buffering. Results
//!   are therefore independent of vertex processing order.
//! * **Build-time fallback**: the Gaussian/uniform decision per vertex was
//!   fixed by the graph builder; the pass loop only consults the flag.
//! * **Clamp reference**: ShrinkOnly/GrowOnly clamp against the vertex's
//!   pre-diffusion value `v0`, not the previous pass's value, so the bound
//!   holds across any number of iterations.
//! * **Single-threaded**: one invocation processes one mesh snapshot
//!   end-to-end with no suspension points; all state is exclusively owned.
//!
//! ## Invariants
//!
//! * The output covers exactly the active vertices, in active-set order.
//! * Inactive and orphaned vertices are never read as sources nor written.
//! * With factor 0 the output equals the initial values exactly.
//!
//! ## Non-goals
//!
//! * This module does not validate parameters (handled by `validator`).
//! * This module does not build graphs or touch host storage.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::graph::builder::DiffusionGraph;
use crate::math::kernel::KernelMode;
pub use crate::primitives::buffer::DiffusionBuffer;

// ============================================================================
// Directional Mode
// ============================================================================

/// Directional constraint applied after blending each pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlurDirection {
    /// No constraint; the blended value is stored as-is.
    #[default]
    Normal,

    /// The result never rises above the vertex's original value.
    ShrinkOnly,

    /// The result never falls below the vertex's original value.
    GrowOnly,
}

impl BlurDirection {
    /// Get the name of the directional mode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            BlurDirection::Normal => "Normal",
            BlurDirection::ShrinkOnly => "ShrinkOnly",
            BlurDirection::GrowOnly => "GrowOnly",
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one diffusion run.
#[derive(Debug, Clone)]
pub struct DiffusionConfig<T> {
    /// Number of relaxation passes (at least 1).
    pub iterations: usize,

    /// Laplace factor in [0, 1]: blend weight between a vertex's current
    /// value and its neighborhood average.
    pub factor: T,

    /// Averaging mode for neighbor values.
    pub kernel_mode: KernelMode,

    /// Directional constraint against the original values.
    pub direction: BlurDirection,
}

impl<T: Float> Default for DiffusionConfig<T> {
    fn default() -> Self {
        Self {
            iterations: 1,
            factor: T::from(0.5).unwrap(),
            kernel_mode: KernelMode::default(),
            direction: BlurDirection::default(),
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs diffusion passes over a built graph.
pub struct DiffusionExecutor;

impl DiffusionExecutor {
    /// Run `config.iterations` relaxation passes and return the final value
    /// per active vertex, in active-set order.
    ///
    /// The caller provides the working buffer so it can be reused across
    /// invocations; it is re-seeded from the graph's initial values here.
    pub fn run<T: Float>(
        graph: &DiffusionGraph<T>,
        config: &DiffusionConfig<T>,
        buffer: &mut DiffusionBuffer<T>,
    ) -> Vec<T> {
        buffer.prepare(&graph.values);

        for _ in 0..config.iterations {
            Self::diffuse_pass(
                graph,
                config.factor,
                config.kernel_mode,
                config.direction,
                &buffer.current,
                &mut buffer.next,
            );
            buffer.swap();
        }

        graph.vertex_ids.iter().map(|&id| buffer.current[id]).collect()
    }

    /// One synchronous relaxation pass: read `current`, write `next`.
    pub fn diffuse_pass<T: Float>(
        graph: &DiffusionGraph<T>,
        factor: T,
        kernel_mode: KernelMode,
        direction: BlurDirection,
        current: &[T],
        next: &mut [T],
    ) {
        for (i, &id) in graph.vertex_ids.iter().enumerate() {
            let avg = Self::neighborhood_average(graph, i, kernel_mode, current);

            let blended = factor * avg + (T::one() - factor) * current[id];

            // Clamp against the original pre-diffusion value.
            let v0 = graph.initial[i];
            next[id] = match direction {
                BlurDirection::Normal => blended,
                BlurDirection::ShrinkOnly => blended.min(v0),
                BlurDirection::GrowOnly => blended.max(v0),
            };
        }
    }

    /// Neighborhood average for active vertex `i` under the requested mode.
    ///
    /// Falls back to the uniform mean when the vertex's kernel was flagged
    /// degenerate at build time, even in Gaussian mode.
    #[inline]
    fn neighborhood_average<T: Float>(
        graph: &DiffusionGraph<T>,
        i: usize,
        kernel_mode: KernelMode,
        current: &[T],
    ) -> T {
        let nbrs = &graph.neighbors[i];

        if kernel_mode == KernelMode::Gaussian && !graph.uniform_fallback[i] {
            let total = graph.total_weights[i];
            let mut avg = T::zero();
            for (&n, &k) in nbrs.iter().zip(graph.kernel_weights[i].iter()) {
                avg = avg + k / total * current[n];
            }
            avg
        } else {
            let mut sum = T::zero();
            for &n in nbrs {
                sum = sum + current[n];
            }
            sum / T::from(nbrs.len()).unwrap()
        }
    }
}
