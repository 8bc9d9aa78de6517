use crate::types::{ClassMap, MutualEdges};
use petgraph::algo::tarjan_scc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How classes are closed over mutual edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClosureStrategy {
    /// One merge pass per player, in player order. Partners are read in
    /// whatever state they are in at that moment, so long chains may stay
    /// partially closed.
    #[default]
    SinglePass,

    /// Full transitive closure: every player with a partner gets its whole
    /// connected class
    Exact,
}

impl ClosureStrategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            ClosureStrategy::SinglePass => "single-pass",
            ClosureStrategy::Exact => "exact",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "single-pass" | "single_pass" | "singlepass" => Some(ClosureStrategy::SinglePass),
            "exact" => Some(ClosureStrategy::Exact),
            _ => None,
        }
    }
}

/// Expands mutual-edge lists into per-player communicating classes
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassAssembler {
    strategy: ClosureStrategy,
}

impl ClassAssembler {
    pub fn new(strategy: ClosureStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> ClosureStrategy {
        self.strategy
    }

    /// Build the class map for every player
    pub fn assemble(&self, mutual: &MutualEdges) -> ClassMap {
        let classes = match self.strategy {
            ClosureStrategy::SinglePass => single_pass(mutual),
            ClosureStrategy::Exact => exact(mutual),
        };

        log::debug!(
            "Assembled {} classes ({}), largest {}",
            classes.len(),
            self.strategy.as_str(),
            classes.max_class_size()
        );

        classes
    }
}

/// Each player starts from its own partner list, then absorbs the current
/// class of every direct partner. Players without partners stay empty.
fn single_pass(mutual: &MutualEdges) -> ClassMap {
    // Owned sets, independent of the partner lists they start from
    let mut classes: Vec<BTreeSet<usize>> = mutual
        .iter()
        .map(|partners| partners.iter().copied().collect())
        .collect();

    for (player, partners) in mutual.iter().enumerate() {
        for &partner in partners {
            // Snapshot first: `partner` may be `player` itself
            let absorbed = classes[partner].clone();
            log::trace!(
                "player {} absorbs class of {} ({} members)",
                player,
                partner,
                absorbed.len()
            );
            classes[player].extend(absorbed);
        }
    }

    ClassMap { classes }
}

/// Mutual edges are symmetric, so strongly connected components are exactly
/// the connected classes.
fn exact(mutual: &MutualEdges) -> ClassMap {
    let mut classes = vec![BTreeSet::new(); mutual.len()];
    let graph = mutual.to_digraph();

    for component in tarjan_scc(&graph) {
        let members: BTreeSet<usize> = component.iter().map(|&node| graph[node]).collect();
        for &player in &members {
            if !mutual.partners(player).is_empty() {
                classes[player] = members.clone();
            }
        }
    }

    ClassMap { classes }
}
