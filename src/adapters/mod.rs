//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer connects the diffusion core to whatever owns the mesh:
//!
//! - **Host**: the narrow read/write trait a host 3D application implements
//!   to hand one mesh snapshot to the core and receive values back.
//! - **Memory**: a self-contained in-memory implementation for tests and
//!   standalone callers.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Graph
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Host mesh interface (the external contract).
pub mod host;

/// In-memory host mesh implementation.
pub mod memory;
