use crate::types::{MutualEdges, VisibilityGraph};
use petgraph::graph::{DiGraph, NodeIndex};

impl VisibilityGraph {
    /// Extract two-way edges.
    ///
    /// Pair (i, j), i == j included, is kept when both i sees j and j sees i.
    /// Pairs are scanned row-major, which fixes the order of every partner list.
    pub fn mutual_edges(&self) -> MutualEdges {
        let n = self.player_count();
        let mut partners = vec![Vec::new(); n];

        for (i, row) in partners.iter_mut().enumerate() {
            for j in 0..n {
                if self.matrix.sees(i, j) && self.matrix.sees(j, i) {
                    row.push(j);
                }
            }
        }

        let edges = MutualEdges { partners };
        log::debug!("Mutual edges: {} pairs", edges.pair_count());
        edges
    }

    /// Find the mutual partners of a named player
    pub fn mutual_partners_of(&self, name: &str) -> Option<Vec<&str>> {
        let player = self.players.get(name)?;
        let n = self.player_count();

        Some(
            (0..n)
                .filter(|&other| self.matrix.sees(player, other) && self.matrix.sees(other, player))
                .filter_map(|other| self.players.name(other))
                .collect(),
        )
    }
}

impl MutualEdges {
    /// Directed petgraph view of the mutual edges. Node `i` carries player index `i`.
    pub fn to_digraph(&self) -> DiGraph<usize, ()> {
        let mut graph = DiGraph::with_capacity(self.len(), self.pair_count() * 2);
        let nodes: Vec<NodeIndex> = (0..self.len()).map(|idx| graph.add_node(idx)).collect();

        for (from, partners) in self.iter().enumerate() {
            for &to in partners {
                graph.add_edge(nodes[from], nodes[to], ());
            }
        }

        graph
    }
}
