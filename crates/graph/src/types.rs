use std::collections::{BTreeSet, HashMap};

/// Dense player numbering, assigned in order of first appearance
#[derive(Debug, Clone, Default)]
pub struct PlayerIndex {
    /// Index -> name
    names: Vec<String>,

    /// Name -> index
    by_name: HashMap<String, usize>,
}

impl PlayerIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player. Returns `None` when the name is already known.
    pub fn insert(&mut self, name: &str) -> Option<usize> {
        if self.by_name.contains_key(name) {
            return None;
        }

        let idx = self.names.len();
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), idx);
        Some(idx)
    }

    /// Find player index by name
    pub fn get(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Find player name by index
    pub fn name(&self, idx: usize) -> Option<&str> {
        self.names.get(idx).map(String::as_str)
    }

    /// All names in index order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Square boolean matrix: cell (i, j) is set when player i can see player j
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl VisibilityMatrix {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    pub fn set(&mut self, from: usize, to: usize) {
        debug_assert!(from < self.size && to < self.size);
        self.cells[from * self.size + to] = true;
    }

    pub fn sees(&self, from: usize, to: usize) -> bool {
        from < self.size && to < self.size && self.cells[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of set cells (directed edges, self-loops included)
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

/// Parsed visibility relation
#[derive(Debug, Clone)]
pub struct VisibilityGraph {
    /// Name <-> index lookup
    pub players: PlayerIndex,

    /// Who sees whom
    pub matrix: VisibilityMatrix,
}

impl VisibilityGraph {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

/// For each player, the players it shares a two-way edge with.
///
/// Partner lists follow row-major scan order of the matrix, so a player
/// that sees itself lists itself at its own position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutualEdges {
    pub(crate) partners: Vec<Vec<usize>>,
}

impl MutualEdges {
    /// Partners of one player (empty for isolated players)
    pub fn partners(&self, player: usize) -> &[usize] {
        self.partners.get(player).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Partner lists in player order
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.partners.iter().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// Unordered mutual pairs, a self-loop counting as one pair
    pub fn pair_count(&self) -> usize {
        self.partners
            .iter()
            .enumerate()
            .map(|(player, partners)| partners.iter().filter(|&&p| p >= player).count())
            .sum()
    }
}

/// Per-player communicating class.
///
/// Every player owns its own set; identical classes are not merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMap {
    pub(crate) classes: Vec<BTreeSet<usize>>,
}

impl ClassMap {
    pub fn class(&self, player: usize) -> Option<&BTreeSet<usize>> {
        self.classes.get(player)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BTreeSet<usize>> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Largest class cardinality. A player with no partner still forms a
    /// class of one, so the result is never below 1.
    pub fn max_class_size(&self) -> usize {
        self.classes
            .iter()
            .map(BTreeSet::len)
            .fold(1, usize::max)
    }
}
