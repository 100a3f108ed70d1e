#![cfg(feature = "dev")]
//! Tests for the in-memory host mesh adapter.
//!
//! These tests verify the [`HostMesh`] contract as implemented by
//! [`MemoryMesh`]: channel snapshots with membership-list slots, selection
//! mask production for vertex and face selections, and slot-addressed
//! write-back.
//!
//! ## Test Organization
//!
//! 1. **Channel Snapshots** - Membership entries and slot indices
//! 2. **Selection Masks** - None, vertex, and face modes
//! 3. **Write-Back** - Slot addressing and failure cases

use meshblur::internals::adapters::host::{HostMesh, SelectionMode};
use meshblur::internals::adapters::memory::MemoryMesh;
use meshblur::internals::primitives::errors::BlurError;
use meshblur::internals::primitives::mesh::Edge;

fn two_vertex_mesh() -> MemoryMesh<f64> {
    let positions = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
    MemoryMesh::new(positions, vec![Edge::new(0, 1)])
}

// ============================================================================
// Channel Snapshot Tests
// ============================================================================

/// Test that the snapshot slot is the index within the vertex's membership
/// list, not the channel id.
#[test]
fn test_channel_entries_use_membership_slots() {
    let mut mesh = two_vertex_mesh();
    // v0 joins channel 1 first, then channel 0: channel 0 lands in slot 1.
    mesh.set_weight(0, 1, 0.5);
    mesh.set_weight(0, 0, 0.25);
    mesh.set_weight(1, 0, 0.75);

    let entries = mesh.channel_entries(0).unwrap();

    let e0 = entries[0].unwrap();
    assert_eq!(e0.value, 0.25);
    assert_eq!(e0.slot, 1);

    let e1 = entries[1].unwrap();
    assert_eq!(e1.value, 0.75);
    assert_eq!(e1.slot, 0);
}

/// Test that non-members snapshot as `None`.
#[test]
fn test_channel_entries_non_members() {
    let mut mesh = two_vertex_mesh();
    mesh.set_weight(0, 0, 1.0);

    let entries = mesh.channel_entries(0).unwrap();
    assert!(entries[0].is_some());
    assert!(entries[1].is_none());

    // An entirely unused channel has no members anywhere.
    let empty = mesh.channel_entries(9).unwrap();
    assert!(empty.iter().all(|e| e.is_none()));
}

/// Test that setting an existing membership updates in place.
#[test]
fn test_set_weight_updates_existing_membership() {
    let mut mesh = two_vertex_mesh();
    mesh.set_weight(0, 0, 0.2);
    mesh.set_weight(0, 0, 0.9);

    assert_eq!(mesh.weight(0, 0), Some(0.9));
    // Still a single membership, so the slot stays 0.
    assert_eq!(mesh.channel_entries(0).unwrap()[0].unwrap().slot, 0);
}

/// Test the active-channel accessor pair.
#[test]
fn test_active_channel() {
    let mut mesh = two_vertex_mesh();
    assert_eq!(mesh.active_channel().unwrap(), 0);

    mesh.set_active_channel(3);
    assert_eq!(mesh.active_channel().unwrap(), 3);
}

// ============================================================================
// Selection Mask Tests
// ============================================================================

/// Test that no selection produces no mask.
#[test]
fn test_no_selection_yields_no_mask() {
    let mesh = two_vertex_mesh();
    assert_eq!(mesh.selection_mode(), SelectionMode::None);
    assert_eq!(mesh.selection_mask().unwrap(), None);
}

/// Test vertex selections pass through as a dense mask.
#[test]
fn test_vertex_selection_mask() {
    let mut mesh = two_vertex_mesh();
    mesh.select_vertices(&[1]);

    assert_eq!(mesh.selection_mode(), SelectionMode::Vertex);
    assert_eq!(mesh.selection_mask().unwrap(), Some(vec![false, true]));
}

/// Test face selections expand to the union of the faces' vertices.
#[test]
fn test_face_selection_expands_to_vertices() {
    let positions = vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ];
    let edges = vec![
        Edge::new(0, 1),
        Edge::new(1, 2),
        Edge::new(2, 3),
        Edge::new(3, 0),
        Edge::new(0, 2),
    ];
    let mut mesh: MemoryMesh<f64> = MemoryMesh::new(positions, edges)
        .with_faces(vec![vec![0, 1, 2], vec![0, 2, 3]]);

    mesh.select_faces(&[1]);

    assert_eq!(mesh.selection_mode(), SelectionMode::Face);
    assert_eq!(
        mesh.selection_mask().unwrap(),
        Some(vec![true, false, true, true])
    );
}

/// Test that clearing the selection returns to the no-mask state.
#[test]
fn test_clear_selection() {
    let mut mesh = two_vertex_mesh();
    mesh.select_vertices(&[0]);
    mesh.clear_selection();

    assert_eq!(mesh.selection_mode(), SelectionMode::None);
    assert_eq!(mesh.selection_mask().unwrap(), None);
}

// ============================================================================
// Write-Back Tests
// ============================================================================

/// Test that write-back addresses the membership slot the snapshot reported.
#[test]
fn test_write_back_by_slot() {
    let mut mesh = two_vertex_mesh();
    mesh.set_weight(0, 1, 0.5);
    mesh.set_weight(0, 0, 0.25);

    let slot = mesh.channel_entries(0).unwrap()[0].unwrap().slot;
    mesh.write_back(0, slot, 0.8).unwrap();

    assert_eq!(mesh.weight(0, 0), Some(0.8));
    // The other channel's membership is untouched.
    assert_eq!(mesh.weight(0, 1), Some(0.5));
}

/// Test write-back failure for an out-of-range vertex.
#[test]
fn test_write_back_bad_vertex() {
    let mut mesh = two_vertex_mesh();

    let err = mesh.write_back(5, 0, 0.1).unwrap_err();
    assert!(matches!(err, BlurError::HostDataUnavailable(_)));
}

/// Test write-back failure for a slot the vertex does not have.
#[test]
fn test_write_back_bad_slot() {
    let mut mesh = two_vertex_mesh();
    mesh.set_weight(0, 0, 0.5);

    let err = mesh.write_back(0, 3, 0.1).unwrap_err();
    assert!(matches!(err, BlurError::HostDataUnavailable(_)));
}
