//! A Tien Len (Vietnamese "thirteen") rules engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] session that tracks turns, passes, rounds,
//! and the table; a combination classifier and comparator ([`Combo`]); and
//! pluggable deterministic decision engines for AI-controlled seats. There
//! is no rendering, timing, or I/O here: an orchestrating layer drives the
//! session one validated action at a time and renders the returned events.
//!
//! # Example
//!
//! ```no_run
//! use tienlen::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod ai;
pub mod card;
pub mod combo;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;

// Re-export main types
pub use ai::{Conservative, Decision, Scored, Strategy, TableView};
pub use card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit};
pub use combo::{Combo, ComboKind};
pub use deck::Deck;
pub use error::{PassError, PlayError, SetupError};
pub use event::GameEvent;
pub use game::{Game, GameState, PlayerSet};
pub use hand::Hand;
pub use options::{AiStrategy, GameOptions};
