use crate::error::{GraphError, Result};
use crate::types::*;

/// One parsed input row: `player, seen_1, seen_2, ...`
#[derive(Debug, Clone, PartialEq, Eq)]
struct Record<'a> {
    /// 1-based line number in the input
    line: usize,
    player: &'a str,
    seen: Vec<&'a str>,
}

/// Build the visibility graph from raw text rows
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build graph from input lines
    pub fn build<S: AsRef<str>>(&self, lines: &[S]) -> Result<VisibilityGraph> {
        let records: Vec<Record<'_>> = lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| parse_record(idx + 1, line.as_ref()))
            .collect();

        // Phase 1: number every row owner, in file order
        let mut players = PlayerIndex::new();
        for record in &records {
            if players.insert(record.player).is_none() {
                return Err(GraphError::DuplicatePlayer {
                    name: record.player.to_string(),
                    line: record.line,
                });
            }
        }

        let mut matrix = VisibilityMatrix::new(players.len());

        // A lone player trivially sees itself; its seen-list is not consulted.
        if players.len() == 1 {
            matrix.set(0, 0);
            log::debug!("Single player input, self edge forced");
            return Ok(VisibilityGraph { players, matrix });
        }

        // Phase 2: directed edges (owners were numbered in record order)
        for (from, record) in records.iter().enumerate() {
            for seen in &record.seen {
                let to = players.get(seen).ok_or_else(|| GraphError::UnknownPlayer {
                    name: (*seen).to_string(),
                    line: record.line,
                })?;
                matrix.set(from, to);
            }
        }

        log::debug!(
            "Built visibility graph: {} players, {} edges",
            players.len(),
            matrix.edge_count()
        );

        Ok(VisibilityGraph { players, matrix })
    }
}

/// Split a row into trimmed fields. Blank rows yield nothing and empty
/// seen-fields (trailing commas) are dropped.
fn parse_record(line: usize, raw: &str) -> Option<Record<'_>> {
    if raw.trim().is_empty() {
        return None;
    }

    let mut fields = raw.split(',').map(str::trim);
    let player = fields.next()?;
    let seen = fields.filter(|field| !field.is_empty()).collect();

    Some(Record { line, player, seen })
}
