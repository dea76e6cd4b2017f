//! Graph-coloring cost adapter.
//!
//! A coloring genome assigns gene `v` (a color in `[0, palette)`) to vertex
//! `v`. The cost packs two objectives into one integer:
//!
//! ```text
//! cost = CONFLICT_WEIGHT * conflicts + distinct_colors_used
//! ```
//!
//! Conflicts dominate as long as fewer than [`CONFLICT_WEIGHT`] colors can
//! appear, so `cost / CONFLICT_WEIGHT` recovers the conflict count.
//! [`ColoringCost::new`] enforces that bound on the palette.

use super::graph::Graph;
use crate::error::{GaError, Result};
use crate::ga::{Cost, CostFunction, Genome};

/// Penalty per conflicting edge.
pub const CONFLICT_WEIGHT: Cost = 100;

/// Number of edges whose endpoints share a color. Each edge counts once.
///
/// # Panics
/// Panics if `coloring` is shorter than the vertex count.
pub fn conflict_count(graph: &Graph, coloring: &[usize]) -> usize {
    graph
        .edges()
        .filter(|&(u, v)| coloring[u] == coloring[v])
        .count()
}

/// Number of distinct colors appearing in `coloring`.
pub fn used_colors(coloring: &[usize]) -> usize {
    let Some(&max) = coloring.iter().max() else {
        return 0;
    };
    let mut seen = vec![false; max + 1];
    let mut count = 0;
    for &c in coloring {
        if !seen[c] {
            seen[c] = true;
            count += 1;
        }
    }
    count
}

/// Projects a coloring onto a palette of size `palette` by `color mod palette`.
///
/// The result may contain conflicts. A coloring already within the palette
/// is returned unchanged.
///
/// # Panics
/// Panics if `palette == 0`.
pub fn remap_colors(coloring: &[usize], palette: usize) -> Genome {
    coloring.iter().map(|&c| c % palette).collect()
}

/// Coloring cost for one palette size, bound to a graph.
#[derive(Debug, Clone, Copy)]
pub struct ColoringCost<'a> {
    graph: &'a Graph,
}

impl<'a> ColoringCost<'a> {
    /// Binds the cost function to `graph` and a palette size.
    ///
    /// # Errors
    /// Returns [`GaError::PaletteTooLarge`] if `palette >= CONFLICT_WEIGHT`,
    /// since the color count would then leak into the conflict term, and
    /// [`GaError::InvalidConfig`] for an empty palette.
    pub fn new(graph: &'a Graph, palette: usize) -> Result<Self> {
        if palette == 0 {
            return Err(GaError::InvalidConfig("palette must be at least 1".into()));
        }
        if palette as Cost >= CONFLICT_WEIGHT {
            return Err(GaError::PaletteTooLarge {
                palette,
                limit: CONFLICT_WEIGHT as usize,
            });
        }
        Ok(Self { graph })
    }

    /// Goal test: the conflict term is zero.
    pub fn is_goal(cost: Cost) -> bool {
        cost / CONFLICT_WEIGHT == 0
    }

    /// Splits a cost back into `(conflicts, colors_used)`.
    pub fn decompose(cost: Cost) -> (Cost, Cost) {
        (cost / CONFLICT_WEIGHT, cost % CONFLICT_WEIGHT)
    }
}

impl CostFunction for ColoringCost<'_> {
    fn cost(&self, coloring: &[usize]) -> Cost {
        let conflicts = conflict_count(self.graph, coloring) as Cost;
        CONFLICT_WEIGHT * conflicts + used_colors(coloring) as Cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::new(3, &[(0, 1), (1, 2), (0, 2)]).unwrap()
    }

    #[test]
    fn test_conflict_count_counts_each_edge_once() {
        let g = triangle();
        assert_eq!(conflict_count(&g, &[0, 0, 0]), 3);
        assert_eq!(conflict_count(&g, &[0, 0, 1]), 1);
        assert_eq!(conflict_count(&g, &[0, 1, 2]), 0);
    }

    #[test]
    fn test_used_colors() {
        assert_eq!(used_colors(&[]), 0);
        assert_eq!(used_colors(&[4, 4, 4]), 1);
        assert_eq!(used_colors(&[0, 3, 1, 3, 0]), 3);
    }

    #[test]
    fn test_remap_is_identity_within_palette() {
        let coloring = vec![0, 2, 1, 2, 0];
        assert_eq!(remap_colors(&coloring, 3), coloring);
    }

    #[test]
    fn test_remap_projects_onto_smaller_palette() {
        assert_eq!(remap_colors(&[0, 1, 2, 3, 4], 3), vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_cost_combines_conflicts_and_colors() {
        let g = triangle();
        let cost = ColoringCost::new(&g, 5).unwrap();
        assert_eq!(cost.cost(&[0, 0, 1]), 102);
        assert_eq!(cost.cost(&[4, 1, 2]), 3);
        assert_eq!(ColoringCost::decompose(102), (1, 2));
    }

    #[test]
    fn test_goal_ignores_color_count() {
        assert!(ColoringCost::is_goal(0));
        assert!(ColoringCost::is_goal(99));
        assert!(!ColoringCost::is_goal(100));
        assert!(!ColoringCost::is_goal(203));
    }

    #[test]
    fn test_palette_bounds() {
        let g = triangle();
        assert!(ColoringCost::new(&g, 99).is_ok());
        assert_eq!(
            ColoringCost::new(&g, 100).unwrap_err(),
            GaError::PaletteTooLarge {
                palette: 100,
                limit: 100
            }
        );
        assert!(matches!(
            ColoringCost::new(&g, 0),
            Err(GaError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_demo_graph_three_coloring() {
        let g = Graph::demo();
        let coloring = [0, 1, 2, 0, 0, 1, 2, 0, 1, 2, 0, 1];
        let cost = ColoringCost::new(&g, 3).unwrap();
        assert_eq!(conflict_count(&g, &coloring), 0);
        assert_eq!(cost.cost(&coloring), 3);
        assert_eq!(remap_colors(&coloring, 3), coloring.to_vec());
    }
}
