//! Roster validation.
//!
//! Player names are validated as a batch before they are accepted into a
//! session. A batch is accepted or rejected atomically; on failure the
//! error names the offending entry and the specific rule it broke, and
//! nothing is committed.
//!
//! Names are restricted to Japanese scripts (hiragana, katakana including
//! the prolonged sound mark, CJK ideographs). Digits, Latin letters, and
//! punctuation are rejected.

/// Minimum players per game.
pub const MIN_PLAYERS: usize = 2;

/// Maximum players per game.
pub const MAX_PLAYERS: usize = 6;

/// Roster validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Player count outside [MIN_PLAYERS, MAX_PLAYERS]
    BadCount { count: usize },
    /// Name empty after trimming (position in the submitted batch)
    EmptyName { index: usize },
    /// Name contains characters outside the allowed scripts
    DisallowedCharacters { name: String },
    /// Name appears more than once in the batch
    DuplicateName { name: String },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadCount { count } => write!(
                f,
                "Player count must be between {} and {}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, count
            ),
            Self::EmptyName { index } => {
                write!(f, "Player name at position {} is empty", index + 1)
            }
            Self::DisallowedCharacters { name } => {
                write!(f, "Player name '{}' contains disallowed characters", name)
            }
            Self::DuplicateName { name } => {
                write!(f, "Player name '{}' appears more than once", name)
            }
        }
    }
}

impl std::error::Error for RosterError {}

/// Check if a character belongs to the allowed name scripts.
fn is_allowed_char(c: char) -> bool {
    matches!(c,
        '\u{3041}'..='\u{3096}'   // hiragana
        | '\u{309D}'..='\u{309E}' // hiragana iteration marks
        | '\u{30A1}'..='\u{30FA}' // katakana
        | '\u{30FC}'..='\u{30FE}' // prolonged sound mark, katakana iteration marks
        | '\u{3005}'              // ideographic iteration mark
        | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
    )
}

/// Validate a batch of proposed player names.
///
/// Returns the trimmed roster in submission order, or the first violation
/// found. Uniqueness is exact string equality on the trimmed names.
pub fn validate_roster(names: &[String]) -> Result<Vec<String>, RosterError> {
    if names.len() < MIN_PLAYERS || names.len() > MAX_PLAYERS {
        return Err(RosterError::BadCount { count: names.len() });
    }

    let mut roster: Vec<String> = Vec::with_capacity(names.len());
    for (index, raw) in names.iter().enumerate() {
        let name = raw.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName { index });
        }
        if !name.chars().all(is_allowed_char) {
            return Err(RosterError::DisallowedCharacters {
                name: name.to_string(),
            });
        }
        if roster.iter().any(|n| n == name) {
            return Err(RosterError::DuplicateName {
                name: name.to_string(),
            });
        }
        roster.push(name.to_string());
    }

    Ok(roster)
}
