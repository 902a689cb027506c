//! Algorithm selector.

use std::fmt;

/// The algorithms a run can use.
///
/// Names match the command-line spelling and the report file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[allow(clippy::upper_case_acronyms)]
pub enum Algorithm {
    /// Best-first branch and bound; proves optimality when it finishes.
    #[value(name = "BnB")]
    BnB,
    /// The greedy cover alone.
    #[value(name = "Approx")]
    Approx,
    /// Simulated annealing.
    #[value(name = "LS1")]
    LS1,
    /// Multi-start hill climbing.
    #[value(name = "LS2")]
    LS2,
}

impl Algorithm {
    pub const ALL: [Self; 4] = [Self::BnB, Self::Approx, Self::LS1, Self::LS2];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BnB => "BnB",
            Self::Approx => "Approx",
            Self::LS1 => "LS1",
            Self::LS2 => "LS2",
        }
    }

    /// Whether the result depends on the random seed.
    #[must_use]
    pub fn is_randomized(self) -> bool {
        matches!(self, Self::LS1 | Self::LS2)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
