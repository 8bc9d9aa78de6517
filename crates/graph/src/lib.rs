//! # Huddle Graph
//!
//! Finds the largest group of players in which everyone can see everyone
//! else, reading a plain-text visibility relation.
//!
//! ## Input
//!
//! One row per player: `player, seen_1, seen_2, ...`. Whitespace around
//! fields is ignored. Every row owner must be unique, and every seen player
//! must own a row somewhere in the input.
//!
//! ## Architecture
//!
//! ```text
//! RecordSource (file / inline text)
//!     │
//!     ├──> Graph Builder
//!     │      ├─ Number row owners in file order
//!     │      └─ Fill the n × n visibility matrix
//!     │
//!     ├──> Mutual edges
//!     │      └─ Keep (i, j) only when i sees j and j sees i
//!     │
//!     ├──> Class Assembler
//!     │      ├─ single-pass: merge partner classes once, in player order
//!     │      └─ exact: connected classes via Tarjan SCC (petgraph)
//!     │
//!     └──> ClassReport (largest class, floor 1)
//! ```
//!
//! The single-pass closure is the reference behaviour and is not a
//! fixpoint: on long chains some players keep a partial class.

mod types;
mod builder;
mod graph;
mod assembler;
mod pipeline;
mod source;
mod error;

pub use types::{ClassMap, MutualEdges, PlayerIndex, VisibilityGraph, VisibilityMatrix};
pub use builder::GraphBuilder;
pub use assembler::{ClassAssembler, ClosureStrategy};
pub use pipeline::{analyze_lines, analyze_source, max_class_size, ClassReport, PlayerClass};
pub use source::{InlineSource, RecordSource, TextFileSource};
pub use error::{Result, GraphError};
