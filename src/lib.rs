//! Loki games library - tic-tac-toe with a terminal front end.
//!
//! The game engine is pure state + rules: [`Game`] accepts moves,
//! [`rules::evaluate`] derives the [`Outcome`] from the board via
//! line sums. The [`tui`] module wraps the engine in a ratatui
//! interface. The companion `listfold` crate in this workspace holds
//! the unrelated toy-language reduction runtime.
//!
//! # Example
//!
//! ```
//! use loki_games::{Game, Outcome, Player, Position};
//!
//! let mut game = Game::new();
//! assert_eq!(game.to_move(), Player::Nought);
//! let outcome = game.play(Position::Center)?;
//! assert_eq!(outcome, Outcome::InProgress);
//! assert_eq!(game.to_move(), Player::Cross);
//! # Ok::<(), loki_games::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod tui;

pub use game::rules;
pub use game::{Board, Game, MoveError, Outcome, Player, Position, Square};
