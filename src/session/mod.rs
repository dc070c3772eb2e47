//! Session state management for RankParty.
//!
//! This module provides the core state types and logic:
//!
//! - `phase` - Session phases with strictly forward movement
//! - `roster` - Batch validation of player names
//! - `deal` - Distinct secret numbers from [1,100]
//! - `theme` - Abstract theme provider seam
//! - `game` - The `GameSession` aggregate tying it all together
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      GameSession                          │
//! │                                                           │
//! │  Setup ──start_game──▶ Playing ──proceed──▶ Sorting       │
//! │    ▲                    │    ▲                │           │
//! │    │                    └────┘                │ submit    │
//! │    │              regenerate_theme            ▼           │
//! │    └─────────────play_again────────────────  Result       │
//! │                                              (score)      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation validates its phase precondition and performs any
//! provider call before mutating, so a failed call leaves the session
//! unchanged. One session, one caller at a time; hosts running multiple
//! threads must serialize access themselves.

pub mod deal;
pub mod game;
pub mod phase;
pub mod roster;
pub mod theme;

// Re-export commonly used types
pub use deal::{deal_secret_numbers, DECK_MAX, DECK_MIN};
pub use game::{GameError, GameSession, OrderIssue, RoundResult};
pub use phase::Phase;
pub use roster::{validate_roster, RosterError, MAX_PLAYERS, MIN_PLAYERS};
pub use theme::{ThemeError, ThemeProvider};
