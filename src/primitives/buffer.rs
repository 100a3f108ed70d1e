//! Buffer management for diffusion passes.
//!
//! ## Purpose
//!
//! This module provides the double-buffered working memory used by the
//! diffusion engine. Each relaxation pass reads a frozen snapshot of the
//! previous pass's values and writes into a separate back buffer, so results
//! never depend on the order vertices are visited within a pass.
//!
//! ## Design notes
//!
//! * **Double-buffering**: `current` is read-only during a pass; `next` is
//!   written; the two swap at pass end. The original host tool aliased a
//!   single buffer, making in-pass results order-dependent; this crate treats
//!   that as unspecified behavior and always snapshots.
//! * **Lazy reuse**: buffers are prepared per invocation and reuse capacity
//!   across passes; nothing is deallocated between passes.
//!
//! ## Key concepts
//!
//! * **Slot**: a reusable vector wrapper with capacity-preserving reset.
//! * **DiffusionBuffer**: the current/next value pair, indexed by vertex id.
//!
//! ## Invariants
//!
//! * `current` and `next` always have the same length (one value per mesh
//!   vertex) after `prepare`.
//! * Capacity is monotonically increasing across invocations of `prepare`.
//!
//! ## Non-goals
//!
//! * This module does not compute diffusion values (handled by the engine).
//! * This module does not track which vertices are active (the graph does).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem::swap;
use core::ops::{Deref, DerefMut};

// ============================================================================
// Slot - Reusable Vector Abstraction
// ============================================================================

/// A reusable vector slot with capacity-preserving reset.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Clear the slot (sets length to 0, preserves capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Get a mutable reference to the underlying vector.
    #[inline]
    pub fn as_vec_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for Slot<T> {
    fn from(v: Vec<T>) -> Self {
        Self(v)
    }
}

// ============================================================================
// Vec Extension Helpers
// ============================================================================

/// Helper trait to simplify refilling vectors without reallocating.
pub trait VecExt<T> {
    /// Replaces the vector contents with `slice`, reusing capacity.
    fn assign_slice(&mut self, slice: &[T]);
}

impl<T: Clone> VecExt<T> for Vec<T> {
    fn assign_slice(&mut self, slice: &[T]) {
        self.clear();
        self.extend_from_slice(slice);
    }
}

// ============================================================================
// DiffusionBuffer - Double-Buffered Working Memory
// ============================================================================

/// Double-buffered per-vertex values for the diffusion engine.
///
/// Both buffers are indexed by mesh vertex id. Only active vertices are ever
/// read or written during a pass; inactive entries keep their initial values.
#[derive(Debug, Clone)]
pub struct DiffusionBuffer<T> {
    /// Values settled at the end of the previous pass (read side).
    pub current: Slot<T>,

    /// Values being produced by the running pass (write side).
    pub next: Slot<T>,
}

impl<T> Default for DiffusionBuffer<T> {
    fn default() -> Self {
        Self {
            current: Slot::default(),
            next: Slot::default(),
        }
    }
}

impl<T: Clone> DiffusionBuffer<T> {
    /// Create a buffer pre-allocated for `n` mesh vertices.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            current: Slot::new(n),
            next: Slot::new(n),
        }
    }

    /// Seed both buffers from the initial per-vertex values.
    ///
    /// `next` is seeded too so that inactive vertices keep their values
    /// across swaps without per-pass copying.
    pub fn prepare(&mut self, initial: &[T]) {
        self.current.as_vec_mut().assign_slice(initial);
        self.next.as_vec_mut().assign_slice(initial);
    }

    /// Promote the back buffer to the read side at pass end.
    #[inline]
    pub fn swap(&mut self) {
        swap(&mut self.current, &mut self.next);
    }
}
