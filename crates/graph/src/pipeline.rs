use crate::assembler::{ClassAssembler, ClosureStrategy};
use crate::builder::GraphBuilder;
use crate::error::Result;
use crate::source::RecordSource;
use crate::types::{ClassMap, VisibilityGraph};
use serde::{Deserialize, Serialize};

/// Class of one player, by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerClass {
    pub player: String,

    /// Members in player order; empty when the player has no mutual partner
    pub members: Vec<String>,
}

/// Outcome of one full run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassReport {
    /// Number of declared players
    pub players: usize,

    /// Unordered two-way pairs, self-loops included
    pub mutual_pairs: usize,

    pub mode: ClosureStrategy,

    /// Size of the largest class (at least 1)
    pub max_class_size: usize,

    pub classes: Vec<PlayerClass>,
}

impl ClassReport {
    fn from_parts(
        graph: &VisibilityGraph,
        mutual_pairs: usize,
        mode: ClosureStrategy,
        classes: &ClassMap,
    ) -> Self {
        let name = |idx: usize| graph.players.name(idx).unwrap_or_default().to_string();

        let named = classes
            .iter()
            .enumerate()
            .map(|(player, members)| PlayerClass {
                player: name(player),
                members: members.iter().map(|&member| name(member)).collect(),
            })
            .collect();

        Self {
            players: graph.player_count(),
            mutual_pairs,
            mode,
            max_class_size: classes.max_class_size(),
            classes: named,
        }
    }
}

/// Run parse -> mutual edges -> closure -> maximum over raw lines
pub fn analyze_lines<S: AsRef<str>>(
    lines: &[S],
    strategy: ClosureStrategy,
) -> Result<ClassReport> {
    let graph = GraphBuilder::new().build(lines)?;
    let mutual = graph.mutual_edges();
    let classes = ClassAssembler::new(strategy).assemble(&mutual);

    let report = ClassReport::from_parts(&graph, mutual.pair_count(), strategy, &classes);

    log::info!(
        "{} players, {} mutual pairs, largest class {} ({})",
        report.players,
        report.mutual_pairs,
        report.max_class_size,
        strategy.as_str()
    );

    Ok(report)
}

/// Load rows from `source` and analyze them
pub fn analyze_source(source: &dyn RecordSource, strategy: ClosureStrategy) -> Result<ClassReport> {
    let lines = source.load_lines()?;
    log::debug!("Loaded {} lines from {}", lines.len(), source.describe());
    analyze_lines(&lines, strategy)
}

/// Largest class size under the default single-pass closure
pub fn max_class_size(source: &dyn RecordSource) -> Result<usize> {
    analyze_source(source, ClosureStrategy::default()).map(|report| report.max_class_size)
}
