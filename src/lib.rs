//! # meshblur — Connectivity-driven smoothing of per-vertex weights
//!
//! Smooths a scalar per-vertex attribute ("weight") over a subset of a
//! mesh's vertices, using edge connectivity as a diffusion graph. This is
//! the numeric core behind an interactive paint-tool smoothing brush: given
//! a mesh, a selected attribute channel, and a handful of parameters, it
//! produces a locally smoothed value per vertex and writes it back to the
//! host.
//!
//! ## How it works
//!
//! One invocation runs in two stages:
//!
//! 1. **Graph build** — the vertices carrying the selected channel
//!    (optionally restricted by a vertex- or face-selection mask) become the
//!    active set; vertices with no qualifying edge to another active vertex
//!    are pruned as orphans; each retained vertex gets a Gaussian kernel
//!    weight per neighbor, parameterized by its local average edge length.
//! 2. **Diffusion** — N relaxation passes blend each vertex's value with its
//!    neighborhood average (`factor` controls the mix), optionally clamped so
//!    values only shrink or only grow relative to their original state. Each
//!    pass reads only values settled by the previous pass.
//!
//! ## Quick Start
//!
//! ```rust
//! use meshblur::prelude::*;
//!
//! // A unit square ring with one hot corner in channel 0.
//! let positions = vec![
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [1.0, 1.0, 0.0],
//!     [0.0, 1.0, 0.0],
//! ];
//! let edges = vec![
//!     Edge::new(0, 1),
//!     Edge::new(1, 2),
//!     Edge::new(2, 3),
//!     Edge::new(3, 0),
//! ];
//! let mut mesh = MemoryMesh::new(positions, edges);
//! mesh.set_weight(0, 0, 1.0);
//! mesh.set_weight(1, 0, 0.0);
//! mesh.set_weight(2, 0, 0.0);
//! mesh.set_weight(3, 0, 0.0);
//!
//! // Build the smoothing operator
//! let blur = Blur::new()
//!     .iterations(1)
//!     .factor(0.5)
//!     .kernel_mode(UniformAverage)
//!     .build()?;
//!
//! // Run it against the mesh
//! let result = blur.smooth(&mut mesh)?;
//!
//! assert_eq!(result.values, vec![0.5, 0.25, 0.0, 0.25]);
//! assert_eq!(mesh.weight(0, 0), Some(0.5));
//! # Result::<(), BlurError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use meshblur::prelude::*;
//!
//! # let positions = vec![
//! #     [0.0, 0.0, 0.0],
//! #     [1.0, 0.0, 0.0],
//! #     [1.0, 1.0, 0.0],
//! #     [0.0, 1.0, 0.0],
//! # ];
//! # let edges = vec![
//! #     Edge::new(0, 1),
//! #     Edge::new(1, 2),
//! #     Edge::new(2, 3),
//! #     Edge::new(3, 0),
//! # ];
//! let mut mesh = MemoryMesh::new(positions, edges);
//! for v in 0..4 {
//!     mesh.set_weight(v, 0, 0.25 * v as f64);
//! }
//!
//! // Restrict smoothing to a vertex selection
//! mesh.select_vertices(&[0, 1, 2]);
//!
//! let blur = Blur::new()
//!     .iterations(4)               // Four relaxation passes
//!     .factor(0.5)                 // Laplace blend factor
//!     .kernel_mode(Gaussian)       // Distance-weighted averaging
//!     .direction(ShrinkOnly)       // Values may only decrease
//!     .build()?;
//!
//! let result = blur.smooth(&mut mesh)?;
//!
//! // ShrinkOnly never raises a value above its original state.
//! for (i, &v) in result.values.iter().enumerate() {
//!     assert!(v <= result.initial[i]);
//! }
//! println!("{}", result);
//! # Result::<(), BlurError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `smooth` returns a `Result<BlurResult<T>, BlurError>`. The `?` operator
//! is idiomatic, but results can also be handled explicitly:
//!
//! ```rust
//! use meshblur::prelude::*;
//! # let mut mesh: MemoryMesh<f64> =
//! #     MemoryMesh::new(vec![[0.0, 0.0, 0.0]], vec![]);
//!
//! let blur = Blur::new().build()?;
//!
//! match blur.smooth(&mut mesh) {
//!     Ok(result) => {
//!         println!("Smoothed {} vertices", result.active_count());
//!     }
//!     Err(e) => {
//!         eprintln!("Smoothing failed: {}", e);
//!     }
//! }
//! # Result::<(), BlurError>::Ok(())
//! ```
//!
//! Empty channels, orphaned vertices, and degenerate kernels are not errors:
//! they resolve deterministically (no-op, frozen value, uniform-average
//! fallback). Only invalid parameters and host data faults surface as
//! [`BlurError`](prelude::BlurError)s, and a failed run never performs a
//! partial write-back.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! meshblur = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` values and small meshes to keep the memory footprint down.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Graph - diffusion graph construction and kernel caching.
mod graph;

// Layer 4: Engine - pass execution, validation, and output.
mod engine;

// Layer 5: Adapters - host mesh interfaces.
mod adapters;

// High-level fluent API for weight smoothing.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        BlurBuilder as Blur,
        BlurDirection::{self, GrowOnly, Normal, ShrinkOnly},
        BlurError, BlurResult, ChannelEntry, ChannelId, Edge,
        KernelMode::{self, Gaussian, UniformAverage},
        MemoryMesh, Position, SelectionMode, VertexId, WeightBlur,
    };
    pub use crate::adapters::host::HostMesh;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod graph {
        pub use crate::graph::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
