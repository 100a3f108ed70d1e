//! Layer 3: Graph
//!
//! # Purpose
//!
//! This layer constructs the restricted diffusion graph from a host mesh
//! snapshot: the active vertex set (channel members passing the optional
//! selection mask, orphan-pruned) together with the precomputed per-neighbor
//! Gaussian kernel. It contains the topological half of the algorithm; the
//! engine layer consumes its output.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Graph ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Diffusion graph construction and kernel precomputation.
pub mod builder;
