#![cfg(feature = "dev")]
//! Tests for diffusion graph construction.
//!
//! These tests verify the restricted-graph builder: provisional membership,
//! orphan pruning, qualifying-edge statistics, the precomputed Gaussian
//! kernel, and the build-time uniform-fallback decision.
//!
//! ## Test Organization
//!
//! 1. **Active Set Construction** - Membership, masks, ordering
//! 2. **Orphan Pruning** - Isolated and mask-isolated vertices
//! 3. **Kernel Precomputation** - Weights, totals, bandwidths
//! 4. **Degenerate Kernels** - Zero-length edges and fallback flags

use approx::assert_relative_eq;

use meshblur::internals::graph::builder::{DiffusionGraph, GraphBuilder};
use meshblur::internals::math::kernel::SQRT_2PI;
use meshblur::internals::primitives::mesh::{ChannelEntry, Edge, Position};

/// Build entries where every listed vertex is a member with slot 0.
fn entries_for(values: &[Option<f64>]) -> Vec<Option<ChannelEntry<f64>>> {
    values
        .iter()
        .map(|v| v.map(|value| ChannelEntry::new(value, 0)))
        .collect()
}

/// Unit square ring: v0..v3 in a cycle, unit edge lengths.
fn ring() -> (Vec<Position<f64>>, Vec<Edge>) {
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
    ];
    (positions, edges)
}

// ============================================================================
// Active Set Construction Tests
// ============================================================================

/// Test that channel members form the active set in host vertex-id order.
#[test]
fn test_active_set_ordering() {
    let (positions, edges) = ring();
    let entries = entries_for(&[Some(1.0), Some(0.0), Some(0.0), Some(0.0)]);

    let graph = GraphBuilder::build(&positions, &edges, &entries, None);

    assert_eq!(graph.vertex_ids, vec![0, 1, 2, 3]);
    assert_eq!(graph.initial, vec![1.0, 0.0, 0.0, 0.0]);
    assert_eq!(graph.pruned, 0);
    assert_eq!(graph.vertex_count, 4);
}

/// Test that non-members are excluded and never appear as neighbors.
#[test]
fn test_non_members_excluded() {
    let (positions, edges) = ring();
    // v2 does not carry the channel.
    let entries = entries_for(&[Some(1.0), Some(0.0), None, Some(0.0)]);

    let graph = GraphBuilder::build(&positions, &edges, &entries, None);

    assert_eq!(graph.vertex_ids, vec![0, 1, 3]);
    for nbrs in &graph.neighbors {
        assert!(!nbrs.contains(&2), "non-member must not be a neighbor");
    }
}

/// Test that a mask restricts candidates and shrinks neighbor lists.
#[test]
fn test_mask_restricts_candidates() {
    let (positions, edges) = ring();
    let entries = entries_for(&[Some(1.0), Some(0.0), Some(0.0), Some(0.0)]);
    let mask = vec![true, true, false, false];

    let graph = GraphBuilder::build(&positions, &edges, &entries, Some(&mask));

    // v0 and v1 survive with exactly each other as neighbor.
    assert_eq!(graph.vertex_ids, vec![0, 1]);
    assert_eq!(graph.neighbors[0], vec![1]);
    assert_eq!(graph.neighbors[1], vec![0]);
    assert_eq!(graph.pruned, 0);
}

/// Test that an empty channel yields an empty graph, not an error.
#[test]
fn test_empty_channel() {
    let (positions, edges) = ring();
    let entries = entries_for(&[None, None, None, None]);

    let graph: DiffusionGraph<f64> = GraphBuilder::build(&positions, &edges, &entries, None);

    assert!(graph.is_empty());
    assert_eq!(graph.len(), 0);
    assert_eq!(graph.pruned, 0);
}

/// Test that storage slots are carried through construction.
#[test]
fn test_slots_recorded() {
    let (positions, edges) = ring();
    let entries = vec![
        Some(ChannelEntry::new(1.0, 3)),
        Some(ChannelEntry::new(0.0, 1)),
        Some(ChannelEntry::new(0.0, 0)),
        Some(ChannelEntry::new(0.0, 2)),
    ];

    let graph = GraphBuilder::build(&positions, &edges, &entries, None);

    assert_eq!(graph.slots, vec![3, 1, 0, 2]);
}

// ============================================================================
// Orphan Pruning Tests
// ============================================================================

/// Test that a member vertex with no edges at all is pruned.
#[test]
fn test_isolated_vertex_pruned() {
    let positions = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [9.0, 9.0, 9.0]];
    let edges = vec![Edge::new(0, 1)];
    let entries = entries_for(&[Some(0.5), Some(0.5), Some(0.5)]);

    let graph = GraphBuilder::build(&positions, &edges, &entries, None);

    assert_eq!(graph.vertex_ids, vec![0, 1]);
    assert_eq!(graph.pruned, 1);
}

/// Test that a mask can orphan vertices whose only neighbors fall outside it.
#[test]
fn test_mask_isolation_prunes_both_ends() {
    // Path 0 - 1 - 2; masking out the middle orphans both ends.
    let positions = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
    let edges = vec![Edge::new(0, 1), Edge::new(1, 2)];
    let entries = entries_for(&[Some(0.0), Some(1.0), Some(0.0)]);
    let mask = vec![true, false, true];

    let graph = GraphBuilder::build(&positions, &edges, &entries, Some(&mask));

    assert!(graph.is_empty());
    assert_eq!(graph.pruned, 2);
}

/// Test that a self-loop does not rescue a vertex from orphanhood.
#[test]
fn test_self_loop_does_not_qualify() {
    let positions = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
    let edges = vec![Edge::new(0, 0), Edge::new(0, 1)];
    // Only v0 carries the channel, so its one real edge leads outside.
    let entries = entries_for(&[Some(1.0), None]);

    let graph = GraphBuilder::build(&positions, &edges, &entries, None);

    assert!(graph.is_empty());
    assert_eq!(graph.pruned, 1);
}

/// Test that every listed neighbor of a retained vertex is itself retained.
///
/// A shared qualifying edge keeps both endpoints, so pruning can never leave
/// a dangling neighbor reference.
#[test]
fn test_neighbors_are_retained_vertices() {
    let positions = vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [2.0, 0.0, 0.0],
        [0.0, 2.0, 0.0],
        [5.0, 5.0, 0.0],
    ];
    let edges = vec![
        Edge::new(0, 1),
        Edge::new(1, 2),
        Edge::new(0, 3),
        Edge::new(2, 4),
    ];
    // v4 is not a member; v3 is a member connected only to v0.
    let entries = entries_for(&[Some(0.1), Some(0.2), Some(0.3), Some(0.4), None]);

    let graph = GraphBuilder::build(&positions, &edges, &entries, None);

    for nbrs in &graph.neighbors {
        for n in nbrs {
            assert!(
                graph.vertex_ids.contains(n),
                "neighbor {} is not a retained vertex",
                n
            );
        }
    }
}

// ============================================================================
// Kernel Precomputation Tests
// ============================================================================

/// Test kernel weights on the unit ring against the closed form.
///
/// Every ring vertex has two unit-length qualifying edges, so the local
/// bandwidth is 1 and each neighbor weight is 1/√(2π)·exp(−1/2).
#[test]
fn test_ring_kernel_weights() {
    let (positions, edges) = ring();
    let entries = entries_for(&[Some(1.0), Some(0.0), Some(0.0), Some(0.0)]);

    let graph = GraphBuilder::build(&positions, &edges, &entries, None);

    let expected = 1.0 / SQRT_2PI * (-0.5f64).exp();
    for i in 0..graph.len() {
        assert_eq!(graph.neighbors[i].len(), 2);
        assert!(!graph.uniform_fallback[i]);
        for &k in &graph.kernel_weights[i] {
            assert_relative_eq!(k, expected, epsilon = 1e-12);
        }
        assert_relative_eq!(graph.total_weights[i], 2.0 * expected, epsilon = 1e-12);
    }
}

/// Test the local bandwidth on an uneven path.
///
/// The middle vertex of a path with edge lengths 1 and 2 gets bandwidth 1.5
/// and distinct weights for its near and far neighbors.
#[test]
fn test_uneven_path_kernel_weights() {
    let positions = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [3.0, 0.0, 0.0]];
    let edges = vec![Edge::new(0, 1), Edge::new(1, 2)];
    let entries = entries_for(&[Some(0.0), Some(0.0), Some(0.0)]);

    let graph = GraphBuilder::build(&positions, &edges, &entries, None);

    // Middle vertex is index 1 in the active set.
    let h = 1.5f64;
    let k_near = 1.0 / (h * SQRT_2PI) * (-1.0 / (2.0 * h * h)).exp();
    let k_far = 1.0 / (h * SQRT_2PI) * (-4.0 / (2.0 * h * h)).exp();

    assert_eq!(graph.neighbors[1], vec![0, 2]);
    assert_relative_eq!(graph.kernel_weights[1][0], k_near, epsilon = 1e-12);
    assert_relative_eq!(graph.kernel_weights[1][1], k_far, epsilon = 1e-12);
    assert_relative_eq!(graph.total_weights[1], k_near + k_far, epsilon = 1e-12);
    assert!(k_near > k_far, "closer neighbors weigh more");
}

// ============================================================================
// Degenerate Kernel Tests
// ============================================================================

/// Test that coincident vertices produce a zero total weight and the
/// uniform-fallback flag.
#[test]
fn test_coincident_vertices_flag_fallback() {
    let positions = vec![[1.0, 2.0, 3.0], [1.0, 2.0, 3.0]];
    let edges = vec![Edge::new(0, 1)];
    let entries = entries_for(&[Some(1.0), Some(0.0)]);

    let graph = GraphBuilder::build(&positions, &edges, &entries, None);

    assert_eq!(graph.len(), 2);
    for i in 0..2 {
        assert_eq!(graph.total_weights[i], 0.0);
        assert!(graph.uniform_fallback[i]);
    }
}

/// Test that the fallback flag stays clear for well-separated vertices.
#[test]
fn test_fallback_flag_clear_for_regular_mesh() {
    let (positions, edges) = ring();
    let entries = entries_for(&[Some(1.0), Some(0.0), Some(0.0), Some(0.0)]);

    let graph = GraphBuilder::build(&positions, &edges, &entries, None);

    assert!(graph.uniform_fallback.iter().all(|&f| !f));
}
