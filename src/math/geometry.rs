//! Euclidean position helpers.
//!
//! ## Purpose
//!
//! This module provides the small amount of 3D geometry the kernel math
//! needs: squared distances between vertex positions and edge lengths.
//!
//! ## Design notes
//!
//! * **Squared first**: the Gaussian kernel consumes squared distances
//!   directly; square roots are only taken for edge-length statistics.
//! * **Generics**: functions are generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not implement general vector algebra; three components
//!   and two operations are all the diffusion core requires.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::mesh::Position;

/// Squared Euclidean distance between two positions.
#[inline]
pub fn distance_squared<T: Float>(a: &Position<T>, b: &Position<T>) -> T {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

/// Euclidean distance between two positions (an edge length).
#[inline]
pub fn distance<T: Float>(a: &Position<T>, b: &Position<T>) -> T {
    distance_squared(a, b).sqrt()
}
