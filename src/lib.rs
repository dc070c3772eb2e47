//! RankParty State Library
//!
//! This crate provides state management for RankParty game logic: a
//! party game where each player receives a secret number from 1 to 100,
//! the group gets a subjective ranking theme ("scariness: 1 = harmless,
//! 100 = terrifying"), and everyone collaborates to guess the ascending
//! order of their hidden numbers.
//!
//! # Overview
//!
//! The session module provides:
//!
//! - **Phase State Machine** - Setup, Playing, Sorting, Result, with
//!   validated transitions and no partial mutation on failure.
//!
//! - **Roster Validation** - Batch-atomic name checks: count, script
//!   allow-list, uniqueness.
//!
//! - **Dealing** - Uniform without-replacement draw of distinct secret
//!   numbers, bound positionally to the roster.
//!
//! - **Scoring** - The submitted order checked against the true numeric
//!   order, both exposed for side-by-side display.
//!
//! # Design Principles
//!
//! 1. **The state machine validates transitions** - Every operation
//!    rejects calls from the wrong phase with a clear error.
//!
//! 2. **No rendering, no networking** - This crate is pure state. The
//!    only external seam is the `ThemeProvider` trait; prompt building
//!    and model calls live with the host.
//!
//! 3. **Serialization-ready** - Session and result snapshots convert to
//!    JSON for any client.
//!
//! # Example
//!
//! ```rust
//! use rankparty_state::session::{GameSession, ThemeError, ThemeProvider};
//!
//! struct Fixed;
//!
//! impl ThemeProvider for Fixed {
//!     fn request_theme(
//!         &self,
//!         _category: Option<&str>,
//!         _excluding: &[String],
//!     ) -> Result<String, ThemeError> {
//!         Ok("からさ: (あまい, からい)".to_string())
//!     }
//! }
//!
//! let mut session = GameSession::new();
//! let names: Vec<String> = ["たろう", "はなこ"].iter().map(|n| n.to_string()).collect();
//!
//! session.start_game(&names, None, &Fixed).unwrap();
//! session.proceed_to_sorting().unwrap();
//!
//! // The group agrees on an ascending order of their hidden numbers
//! let guess: Vec<String> = session.player_names().to_vec();
//! session.submit_order(&guess).unwrap();
//!
//! let result = session.score().unwrap();
//! println!("correct order: {:?}, got it: {}", result.correct_order, result.success);
//! ```

pub mod session;

// Re-export everything from session module at crate root
pub use session::*;
