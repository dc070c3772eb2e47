//! Game phase enum.
//!
//! A session moves strictly forward through its phases, with one backward
//! edge (Result -> Setup, "play again") and one self-loop (Playing ->
//! Playing, theme regeneration). The transitions themselves are enforced
//! by [`GameSession`](crate::session::game::GameSession); this type only
//! names the phases and answers simple questions about them.

/// Session state machine phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Collecting and validating the roster
    #[default]
    Setup,
    /// Numbers dealt, theme on screen, discussion ongoing
    Playing,
    /// Group is arranging its guessed order
    Sorting,
    /// Order submitted, scoring available
    Result,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Playing => "playing",
            Self::Sorting => "sorting",
            Self::Result => "result",
        }
    }

    /// Check if a round is underway (numbers have been dealt).
    pub fn is_in_round(&self) -> bool {
        !matches!(self, Self::Setup)
    }

    /// Check if scoring data is available.
    pub fn is_scored(&self) -> bool {
        matches!(self, Self::Result)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
