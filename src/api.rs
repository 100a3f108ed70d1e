//! High-level API for weight smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring a smoothing run, and the built [`WeightBlur`]
//! operator that executes one invocation against a host mesh.
//!
//! ## Design notes
//!
//! * **Ergonomic**: fluent builder with the host tool's defaults (1 pass,
//!   factor 0.5, Gaussian kernel, no directional constraint).
//! * **Validated**: parameters are validated once when `.build()` is called;
//!   the engine assumes validated input.
//! * **Type-Safe**: generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Invocation flow**: snapshot host data → validate → build graph →
//!   run passes → write back → return [`BlurResult`].
//! * **Graph reuse**: [`WeightBlur::build_graph`] exposes the
//!   value-independent graph so repeated runs with different parameters can
//!   skip reconstruction.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`BlurBuilder`] via `Blur::new()` (prelude alias).
//! 2. Chain configuration methods (`.iterations()`, `.factor()`, etc.).
//! 3. Call `.build()` to validate and obtain a [`WeightBlur`].
//! 4. Call `.smooth(&mut mesh)` per user action.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::host::HostMesh;
use crate::engine::executor::{DiffusionBuffer, DiffusionConfig, DiffusionExecutor};
use crate::engine::validator::Validator;
use crate::graph::builder::{DiffusionGraph, GraphBuilder};

// Publicly re-exported types
pub use crate::adapters::host::SelectionMode;
pub use crate::adapters::memory::MemoryMesh;
pub use crate::engine::executor::BlurDirection;
pub use crate::engine::output::BlurResult;
pub use crate::math::kernel::KernelMode;
pub use crate::primitives::errors::BlurError;
pub use crate::primitives::mesh::{ChannelEntry, ChannelId, Edge, Position, VertexId};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a smoothing run.
#[derive(Debug, Clone)]
pub struct BlurBuilder<T> {
    /// Number of relaxation passes.
    pub iterations: Option<usize>,

    /// Laplace blend factor in [0, 1].
    pub factor: Option<T>,

    /// Averaging mode for neighbor values.
    pub kernel_mode: Option<KernelMode>,

    /// Directional constraint against original values.
    pub direction: Option<BlurDirection>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BlurBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BlurBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            iterations: None,
            factor: None,
            kernel_mode: None,
            direction: None,
            duplicate_param: None,
        }
    }

    /// Set the number of relaxation passes (default 1).
    pub fn iterations(mut self, iterations: usize) -> Self {
        if self.iterations.is_some() {
            self.duplicate_param = Some("iterations");
        }
        self.iterations = Some(iterations);
        self
    }

    /// Set the Laplace blend factor (default 0.5).
    pub fn factor(mut self, factor: T) -> Self {
        if self.factor.is_some() {
            self.duplicate_param = Some("factor");
        }
        self.factor = Some(factor);
        self
    }

    /// Set the neighborhood averaging mode (default Gaussian).
    pub fn kernel_mode(mut self, mode: KernelMode) -> Self {
        if self.kernel_mode.is_some() {
            self.duplicate_param = Some("kernel_mode");
        }
        self.kernel_mode = Some(mode);
        self
    }

    /// Set the directional constraint (default Normal).
    pub fn direction(mut self, direction: BlurDirection) -> Self {
        if self.direction.is_some() {
            self.duplicate_param = Some("direction");
        }
        self.direction = Some(direction);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the smoothing operator.
    pub fn build(self) -> Result<WeightBlur<T>, BlurError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = DiffusionConfig {
            iterations: self.iterations.unwrap_or(1),
            factor: self.factor.unwrap_or_else(|| T::from(0.5).unwrap()),
            kernel_mode: self.kernel_mode.unwrap_or_default(),
            direction: self.direction.unwrap_or_default(),
        };

        Validator::validate_iterations(config.iterations)?;
        Validator::validate_factor(config.factor)?;

        Ok(WeightBlur { config })
    }
}

// ============================================================================
// Smoothing Operator
// ============================================================================

/// A validated smoothing operator, run once per user action.
#[derive(Debug, Clone)]
pub struct WeightBlur<T> {
    config: DiffusionConfig<T>,
}

impl<T: Float> WeightBlur<T> {
    /// The validated run configuration.
    pub fn config(&self) -> &DiffusionConfig<T> {
        &self.config
    }

    /// Smooth the host's currently active channel.
    ///
    /// Snapshots the mesh, builds the diffusion graph, runs the configured
    /// passes, and writes the smoothed values back. Any host fault aborts
    /// before the first write-back, leaving the attribute unchanged.
    pub fn smooth<M: HostMesh<T>>(&self, mesh: &mut M) -> Result<BlurResult<T>, BlurError> {
        let channel = mesh.active_channel()?;
        self.smooth_channel(mesh, channel)
    }

    /// Smooth an explicit channel instead of the host's active one.
    pub fn smooth_channel<M: HostMesh<T>>(
        &self,
        mesh: &mut M,
        channel: ChannelId,
    ) -> Result<BlurResult<T>, BlurError> {
        let graph = Self::build_graph(mesh, channel)?;
        self.smooth_graph(mesh, &graph)
    }

    /// Build the value-independent diffusion graph for a channel.
    ///
    /// The graph depends only on positions, topology, and the selection
    /// mask, so it can be reused across runs with different parameters as
    /// long as the mesh snapshot stays valid.
    pub fn build_graph<M: HostMesh<T>>(
        mesh: &M,
        channel: ChannelId,
    ) -> Result<DiffusionGraph<T>, BlurError> {
        let positions = mesh.positions()?;
        let edges = mesh.edges()?;
        let entries = mesh.channel_entries(channel)?;
        let mask = mesh.selection_mask()?;

        if entries.len() != positions.len() {
            return Err(BlurError::HostDataUnavailable(format!(
                "channel entries cover {} of {} vertices",
                entries.len(),
                positions.len()
            )));
        }
        if let Some(mask) = &mask {
            if mask.len() != positions.len() {
                return Err(BlurError::HostDataUnavailable(format!(
                    "selection mask covers {} of {} vertices",
                    mask.len(),
                    positions.len()
                )));
            }
        }

        Validator::validate_edges(&edges, positions.len())?;
        Validator::validate_positions(&positions)?;
        Validator::validate_entries(&entries)?;

        Ok(GraphBuilder::build(
            &positions,
            &edges,
            &entries,
            mask.as_deref(),
        ))
    }

    /// Run the configured passes over a prebuilt graph and write back.
    pub fn smooth_graph<M: HostMesh<T>>(
        &self,
        mesh: &mut M,
        graph: &DiffusionGraph<T>,
    ) -> Result<BlurResult<T>, BlurError> {
        let mut buffer = DiffusionBuffer::with_capacity(graph.vertex_count);
        let values = DiffusionExecutor::run(graph, &self.config, &mut buffer);

        // Write-back happens only after the final pass completed.
        for i in 0..graph.len() {
            mesh.write_back(graph.vertex_ids[i], graph.slots[i], values[i])?;
        }

        Ok(BlurResult {
            vertex_ids: graph.vertex_ids.clone(),
            initial: graph.initial.clone(),
            values,
            pruned: graph.pruned,
            iterations_used: self.config.iterations,
            factor_used: self.config.factor,
        })
    }
}
