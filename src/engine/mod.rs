//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the smoothing process: it validates parameters
//! and host data, runs the relaxation pass loop over the built graph, and
//! packages results for the API layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Graph
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Diffusion pass execution.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for smoothing runs.
pub mod output;
