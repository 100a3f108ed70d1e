//! Input validation for diffusion configuration and host data.
//!
//! ## Purpose
//!
//! This module provides validation functions for smoothing parameters and
//! the host mesh snapshot: iteration bounds, blend-factor range, edge index
//! bounds, and finiteness of positions and channel values.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: validation stops at the first error encountered.
//! * **Efficiency**: checks are ordered from cheap to expensive.
//! * **Caller-facing**: the core algorithm assumes validated input; these
//!   checks run once at the API boundary, never inside the pass loop.
//!
//! ## Key concepts
//!
//! * **Parameter bounds**: iterations in [1, 1000], factor in [0, 1].
//! * **Host data checks**: edge endpoints within the vertex count, all
//!   positions and values finite.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs (no clamping).
//! * This module does not perform the diffusion itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::BlurError;
use crate::primitives::mesh::{ChannelEntry, Edge, Position};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for diffusion parameters and host data.
///
/// Provides static methods returning `Result<(), BlurError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the number of relaxation passes.
    ///
    /// # Notes
    ///
    /// * At least 1 pass is required; a zero-pass run is meaningless.
    /// * Maximum of 1000 passes to prevent excessive computation.
    pub fn validate_iterations(iterations: usize) -> Result<(), BlurError> {
        const MAX_ITERATIONS: usize = 1000;
        if iterations < 1 || iterations > MAX_ITERATIONS {
            return Err(BlurError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate the Laplace blend factor.
    pub fn validate_factor<T: Float>(factor: T) -> Result<(), BlurError> {
        if !factor.is_finite() || factor < T::zero() || factor > T::one() {
            return Err(BlurError::InvalidFactor(
                factor.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), BlurError> {
        if let Some(param) = duplicate_param {
            return Err(BlurError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Host Data Validation
    // ========================================================================

    /// Validate that all edge endpoints reference existing vertices.
    pub fn validate_edges(edges: &[Edge], vertex_count: usize) -> Result<(), BlurError> {
        for edge in edges {
            if edge.a >= vertex_count || edge.b >= vertex_count {
                return Err(BlurError::InvalidEdge {
                    a: edge.a,
                    b: edge.b,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Validate that all vertex positions are finite.
    pub fn validate_positions<T: Float>(positions: &[Position<T>]) -> Result<(), BlurError> {
        for (id, pos) in positions.iter().enumerate() {
            for (axis, &c) in pos.iter().enumerate() {
                if !c.is_finite() {
                    return Err(BlurError::InvalidNumericValue(format!(
                        "position[{}][{}]={}",
                        id,
                        axis,
                        c.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validate that all channel values are finite.
    pub fn validate_entries<T: Float>(
        entries: &[Option<ChannelEntry<T>>],
    ) -> Result<(), BlurError> {
        for (id, entry) in entries.iter().enumerate() {
            if let Some(entry) = entry {
                if !entry.value.is_finite() {
                    return Err(BlurError::InvalidNumericValue(format!(
                        "value[{}]={}",
                        id,
                        entry.value.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }
        Ok(())
    }
}
