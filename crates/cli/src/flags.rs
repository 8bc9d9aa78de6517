use clap::ValueEnum;

use huddle_graph::ClosureStrategy;

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum ModeFlag {
    SinglePass,
    Exact,
}

impl ModeFlag {
    pub(crate) const fn as_domain(self) -> ClosureStrategy {
        match self {
            ModeFlag::SinglePass => ClosureStrategy::SinglePass,
            ModeFlag::Exact => ClosureStrategy::Exact,
        }
    }
}
