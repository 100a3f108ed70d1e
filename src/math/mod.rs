//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - The Gaussian radial kernel for distance-based weighting
//! - Euclidean position helpers for distances and edge lengths
//!
//! These are reusable building blocks with no graph- or engine-specific logic.
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
//! Layer 3: Graph
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Kernel (weight) functions for neighborhood averaging.
pub mod kernel;

/// Euclidean position helpers.
pub mod geometry;
