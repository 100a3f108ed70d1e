//! Error types for weight-diffusion operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! and running a smoothing invocation: parameter validation failures, host
//! data inconsistencies, and host read/write faults.
//!
//! ## Design notes
//!
//! * **Narrow taxonomy**: the diffusion algorithm is total over its inputs.
//!   Empty channels, orphaned vertices, and degenerate kernels are handled
//!   deterministically inside the core and never surface as errors.
//! * **Contextual**: errors include the offending values.
//! * **No-std**: supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Parameter validation**: iteration count and blend factor bounds.
//! 2. **Host data validation**: edge indices, non-finite positions/values.
//! 3. **Collaborator faults**: the host failing to produce mesh or attribute
//!    data, the only condition that aborts a run.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * A failed run never performs a partial write-back.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::mesh::VertexId;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for weight-diffusion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum BlurError {
    /// Diffusion requires at least 1 relaxation pass.
    InvalidIterations(usize),

    /// The blend factor must lie in [0, 1].
    InvalidFactor(f64),

    /// Host data contains a NaN or infinite value.
    InvalidNumericValue(String),

    /// An edge references a vertex outside the mesh.
    InvalidEdge {
        /// First endpoint of the offending edge.
        a: VertexId,
        /// Second endpoint of the offending edge.
        b: VertexId,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The host failed to produce mesh or attribute data, or rejected a
    /// write-back. Aborts the run; the mesh attribute is left unchanged.
    HostDataUnavailable(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for BlurError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidIterations(iterations) => {
                write!(f, "Invalid iterations: {iterations} (must be in [1, 1000])")
            }
            Self::InvalidFactor(factor) => {
                write!(f, "Invalid factor: {factor} (must be in [0, 1])")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidEdge { a, b, vertex_count } => {
                write!(
                    f,
                    "Invalid edge ({a}, {b}): mesh has {vertex_count} vertices"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::HostDataUnavailable(msg) => write!(f, "Host data unavailable: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for BlurError {}
