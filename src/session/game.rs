//! Game session state machine.
//!
//! Holds all per-game state and validates every transition. Phases move
//! strictly forward (Setup -> Playing -> Sorting -> Result) with one
//! backward edge (Result -> Setup, play again) and one self-loop
//! (Playing -> Playing, theme regeneration).
//!
//! Every operation is atomic: validation and the theme provider call
//! happen before any field is touched, so a failed operation leaves the
//! session exactly as it was.

use rand::Rng;

use super::deal::deal_secret_numbers;
use super::phase::Phase;
use super::roster::{validate_roster, RosterError};
use super::theme::{ThemeError, ThemeProvider};

/// Game session state.
///
/// One instance per in-memory room, living for the process lifetime.
/// All mutation goes through the named operations; the binding between a
/// player and their secret number is strictly positional
/// (`player_names[i]` owns `secret_numbers[i]`) and is never re-derived
/// by value lookup.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Current phase
    phase: Phase,

    /// Ordered roster (empty while in Setup)
    player_names: Vec<String>,

    /// Secret numbers, positional with the roster
    secret_numbers: Vec<u8>,

    /// Current round's theme text
    theme: Option<String>,

    /// Every theme fetched this session, append-only
    theme_history: Vec<String>,

    /// The group's guessed ascending order, set on entering Result
    submitted_order: Vec<String>,

    /// Caller-supplied theme category, reused for regeneration
    category: Option<String>,

    /// Completed rounds (bumped on play again)
    rounds_played: u32,

    /// When session was created
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// When the current round started (phase -> Playing)
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Create a fresh session in Setup.
    pub fn new() -> Self {
        Self {
            phase: Phase::Setup,
            player_names: Vec::new(),
            secret_numbers: Vec::new(),
            theme: None,
            theme_history: Vec::new(),
            submitted_order: Vec::new(),
            category: None,
            rounds_played: 0,
            created_at: chrono::Utc::now(),
            started_at: None,
        }
    }

    /// Start a game: validate the roster, fetch a theme, deal numbers.
    ///
    /// Uses the thread-local RNG for the deal; see
    /// [`start_game_with_rng`](Self::start_game_with_rng) for a seeded
    /// variant.
    pub fn start_game(
        &mut self,
        names: &[String],
        category: Option<String>,
        provider: &dyn ThemeProvider,
    ) -> Result<(), GameError> {
        self.start_game_with_rng(names, category, provider, &mut rand::thread_rng())
    }

    /// Start a game with a caller-supplied RNG.
    pub fn start_game_with_rng<R: Rng + ?Sized>(
        &mut self,
        names: &[String],
        category: Option<String>,
        provider: &dyn ThemeProvider,
        rng: &mut R,
    ) -> Result<(), GameError> {
        if self.phase != Phase::Setup {
            return Err(self.invalid("start_game"));
        }

        let roster = validate_roster(names)?;
        let theme = provider.request_theme(category.as_deref(), &self.theme_history)?;
        let numbers = deal_secret_numbers(roster.len(), rng);

        self.player_names = roster;
        self.secret_numbers = numbers;
        self.theme_history.push(theme.clone());
        self.theme = Some(theme);
        self.category = category;
        self.submitted_order.clear();
        self.phase = Phase::Playing;
        self.started_at = Some(chrono::Utc::now());

        Ok(())
    }

    /// Replace the current theme with a fresh one.
    ///
    /// The provider is given the full accumulated history as its exclusion
    /// list. On failure the current theme stays in place.
    pub fn regenerate_theme(&mut self, provider: &dyn ThemeProvider) -> Result<(), GameError> {
        if self.phase != Phase::Playing {
            return Err(self.invalid("regenerate_theme"));
        }

        let theme = provider.request_theme(self.category.as_deref(), &self.theme_history)?;

        self.theme_history.push(theme.clone());
        self.theme = Some(theme);

        Ok(())
    }

    /// Move from discussion to arranging the answer.
    pub fn proceed_to_sorting(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Playing {
            return Err(self.invalid("proceed_to_sorting"));
        }

        self.phase = Phase::Sorting;
        Ok(())
    }

    /// Submit the group's guessed ascending order.
    ///
    /// The submission must be a permutation of the roster; anything else
    /// is rejected without touching the session.
    pub fn submit_order(&mut self, names: &[String]) -> Result<(), GameError> {
        if self.phase != Phase::Sorting {
            return Err(self.invalid("submit_order"));
        }

        let order = self.check_permutation(names)?;

        self.submitted_order = order;
        self.phase = Phase::Result;
        Ok(())
    }

    /// Reset for another round.
    ///
    /// Secret numbers, theme, and the submitted order are always cleared.
    /// With `retain_roster` the player names and theme history survive so
    /// the next round skips re-entry and avoids repeat themes; otherwise
    /// everything is cleared.
    pub fn play_again(&mut self, retain_roster: bool) -> Result<(), GameError> {
        if self.phase != Phase::Result {
            return Err(self.invalid("play_again"));
        }

        self.secret_numbers.clear();
        self.theme = None;
        self.submitted_order.clear();
        self.started_at = None;

        if !retain_roster {
            self.player_names.clear();
            self.theme_history.clear();
            self.category = None;
        }

        self.rounds_played += 1;
        self.phase = Phase::Setup;
        Ok(())
    }

    /// Score the submitted order against the true numeric order.
    ///
    /// Read-only; only available in Result.
    pub fn score(&self) -> Result<RoundResult, GameError> {
        if self.phase != Phase::Result {
            return Err(self.invalid("score"));
        }

        let guessed: Vec<(String, u8)> = self
            .submitted_order
            .iter()
            .map(|name| (name.clone(), self.secret_number_of(name)))
            .collect();

        let mut correct_values = self.secret_numbers.clone();
        correct_values.sort_unstable();

        let mut indices: Vec<usize> = (0..self.player_names.len()).collect();
        indices.sort_unstable_by_key(|&i| self.secret_numbers[i]);
        let correct_order: Vec<String> = indices
            .into_iter()
            .map(|i| self.player_names[i].clone())
            .collect();

        let success = guessed.windows(2).all(|pair| pair[0].1 < pair[1].1);

        Ok(RoundResult {
            guessed,
            correct_values,
            correct_order,
            success,
        })
    }

    /// Secret value of a roster name, via its positional index.
    ///
    /// Only called on names already verified to be in the roster.
    fn secret_number_of(&self, name: &str) -> u8 {
        let i = self
            .player_names
            .iter()
            .position(|n| n == name)
            .unwrap_or_default();
        self.secret_numbers[i]
    }

    /// Verify a submission is a permutation of the roster.
    fn check_permutation(&self, names: &[String]) -> Result<Vec<String>, GameError> {
        let mut seen: Vec<&str> = Vec::with_capacity(names.len());
        for name in names {
            if !self.player_names.iter().any(|n| n == name) {
                return Err(GameError::IncompleteOrder(OrderIssue::UnknownName {
                    name: name.clone(),
                }));
            }
            if seen.contains(&name.as_str()) {
                return Err(GameError::IncompleteOrder(OrderIssue::DuplicatedName {
                    name: name.clone(),
                }));
            }
            seen.push(name);
        }
        if let Some(missing) = self
            .player_names
            .iter()
            .find(|n| !seen.contains(&n.as_str()))
        {
            return Err(GameError::IncompleteOrder(OrderIssue::MissingName {
                name: missing.clone(),
            }));
        }

        Ok(names.to_vec())
    }

    fn invalid(&self, action: &'static str) -> GameError {
        GameError::InvalidTransition {
            phase: self.phase,
            action,
        }
    }

    // Read-only accessors

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Roster in seating order.
    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    /// Secret numbers, positional with the roster.
    pub fn secret_numbers(&self) -> &[u8] {
        &self.secret_numbers
    }

    /// Player count.
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Current theme, if a round is underway.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// All themes fetched this session.
    pub fn theme_history(&self) -> &[String] {
        &self.theme_history
    }

    /// The group's submitted order (empty before Result).
    pub fn submitted_order(&self) -> &[String] {
        &self.submitted_order
    }

    /// Theme category, if one was supplied.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Completed rounds.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Convert session state to a JSON snapshot for clients.
    ///
    /// Secret numbers are only included once the round is scored, so a
    /// shared screen can render earlier phases safely.
    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "phase": self.phase.as_str(),
            "players": self.player_names,
            "theme": self.theme,
            "theme_history_len": self.theme_history.len(),
            "category": self.category,
            "rounds_played": self.rounds_played,
            "created_at": self.created_at.to_rfc3339(),
            "started_at": self.started_at.map(|t| t.to_rfc3339()),
        });
        if self.phase.is_scored() {
            obj["secret_numbers"] = serde_json::json!(self.secret_numbers);
            obj["submitted_order"] = serde_json::json!(self.submitted_order);
        }
        obj
    }
}

/// Outcome of scoring one round.
///
/// Pure read model: both the group's guess (name paired with the revealed
/// value) and the true ascending order, for side-by-side display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Submitted order with each player's revealed number
    pub guessed: Vec<(String, u8)>,

    /// All secret numbers sorted ascending
    pub correct_values: Vec<u8>,

    /// Roster names sorted by their secret number, ascending
    pub correct_order: Vec<String>,

    /// True iff the guessed order matches the true ascending order
    pub success: bool,
}

impl RoundResult {
    pub fn to_json(&self) -> serde_json::Value {
        let guessed: Vec<serde_json::Value> = self
            .guessed
            .iter()
            .map(|(name, value)| serde_json::json!({"name": name, "value": value}))
            .collect();

        serde_json::json!({
            "guessed": guessed,
            "correct_values": self.correct_values,
            "correct_order": self.correct_order,
            "success": self.success,
        })
    }
}

/// Reason a submitted order is not a permutation of the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderIssue {
    /// Name not in the roster
    UnknownName { name: String },
    /// Name listed more than once
    DuplicatedName { name: String },
    /// Roster name absent from the submission
    MissingName { name: String },
}

/// Game session errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Roster failed validation; nothing committed
    InvalidRoster(RosterError),
    /// Operation not permitted in the current phase
    InvalidTransition { phase: Phase, action: &'static str },
    /// Submission is not a permutation of the roster
    IncompleteOrder(OrderIssue),
    /// Theme provider failed; session left in its prior phase
    ThemeUnavailable(ThemeError),
}

impl From<RosterError> for GameError {
    fn from(err: RosterError) -> Self {
        Self::InvalidRoster(err)
    }
}

impl From<ThemeError> for GameError {
    fn from(err: ThemeError) -> Self {
        Self::ThemeUnavailable(err)
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRoster(err) => write!(f, "Invalid roster: {}", err),
            Self::InvalidTransition { phase, action } => {
                write!(f, "Cannot {} while in phase '{}'", action, phase)
            }
            Self::IncompleteOrder(issue) => match issue {
                OrderIssue::UnknownName { name } => {
                    write!(f, "Submitted order names unknown player '{}'", name)
                }
                OrderIssue::DuplicatedName { name } => {
                    write!(f, "Submitted order lists '{}' more than once", name)
                }
                OrderIssue::MissingName { name } => {
                    write!(f, "Submitted order is missing player '{}'", name)
                }
            },
            Self::ThemeUnavailable(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GameError {}
