//! Undirected graph used by the coloring adapter.

use crate::error::{GaError, Result};

/// Edge list of the 12-vertex demo graph. It is 3-colorable and contains
/// the triangle `0-1-2`, so its chromatic number is exactly 3.
const DEMO_EDGES: [(usize, usize); 16] = [
    (0, 1),
    (0, 2),
    (1, 2),
    (1, 3),
    (2, 4),
    (3, 5),
    (4, 5),
    (4, 6),
    (5, 7),
    (6, 7),
    (6, 8),
    (7, 9),
    (8, 9),
    (8, 10),
    (9, 11),
    (10, 11),
];

/// Immutable undirected graph with symmetric adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Builds a graph on `n` vertices from an undirected edge list.
    ///
    /// Each `(u, v)` is added to both adjacency lists.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidGraph`] for an endpoint `>= n` or a self-loop.
    pub fn new(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        for &(u, v) in edges {
            if u >= n || v >= n {
                return Err(GaError::InvalidGraph(format!(
                    "edge ({u}, {v}) references a vertex outside 0..{n}"
                )));
            }
            if u == v {
                return Err(GaError::InvalidGraph(format!("self-loop on vertex {u}")));
            }
        }
        Ok(Self::from_edges(n, edges))
    }

    /// The 12-vertex, 16-edge demo graph.
    pub fn demo() -> Self {
        Self::from_edges(12, &DEMO_EDGES)
    }

    /// Endpoints must already be checked against `n`.
    fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut adjacency = vec![Vec::new(); n];
        for &(u, v) in edges {
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        Self {
            adjacency,
            edge_count: edges.len(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges in the input list.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbors of `v`, in insertion order.
    ///
    /// # Panics
    /// Panics if `v >= vertex_count()`.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// Iterates each undirected edge once as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, adj)| {
            adj.iter().filter(move |&&v| v > u).map(move |&v| (u, v))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_is_symmetric() {
        let g = Graph::new(4, &[(0, 1), (1, 2), (3, 0)]).unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 3);
        for u in 0..4 {
            for &v in g.neighbors(u) {
                assert!(g.neighbors(v).contains(&u));
            }
        }
        assert_eq!(g.neighbors(0), &[1, 3]);
    }

    #[test]
    fn test_rejects_out_of_range_vertex() {
        assert!(matches!(
            Graph::new(3, &[(0, 3)]),
            Err(GaError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_rejects_self_loop() {
        assert!(matches!(
            Graph::new(3, &[(1, 1)]),
            Err(GaError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_demo_graph_shape() {
        let g = Graph::demo();
        assert_eq!(g.vertex_count(), 12);
        assert_eq!(g.edge_count(), 16);
        assert_eq!(g.edges().count(), 16);
        assert_eq!(g, Graph::new(12, &DEMO_EDGES).unwrap());
    }

    #[test]
    fn test_edges_listed_once() {
        let g = Graph::new(3, &[(2, 0), (0, 1)]).unwrap();
        let mut edges: Vec<_> = g.edges().collect();
        edges.sort();
        assert_eq!(edges, vec![(0, 1), (0, 2)]);
    }
}
