//! Rewind tic-tac-toe - game rules with a time-travelling session.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] maps any board to an [`Outcome`]
//! - **Session**: [`Session`] records every [`Snapshot`] and a cursor;
//!   placing a mark after rewinding discards the abandoned future
//! - **Boundary**: views send [`Intent`]s and render a [`SessionView`]
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Intent, Outcome, Player, Session};
//!
//! let session = [0, 1, 4, 2, 8]
//!     .into_iter()
//!     .fold(Session::new(), |s, cell| s.apply(Intent::PlaceMark { cell }));
//!
//! assert_eq!(session.outcome().winner(), Some(Player::X));
//! assert_eq!(session.winning_line().map(|l| l.indices()), Some([0, 4, 8]));
//!
//! // Rewind to before X's second move and play elsewhere.
//! let session = session.jump_to(2).place_mark(6);
//! assert_eq!(session.history().len(), 4);
//! assert_eq!(session.outcome(), Outcome::Undecided);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod history;
mod intent;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod types;
mod view;

pub use action::{JumpError, Move, MoveError};
pub use history::History;
pub use intent::Intent;
pub use outcome::{Line, Outcome};
pub use position::Position;
pub use rules::evaluate;
pub use session::Session;
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
pub use view::{CellView, MoveEntry, SessionView, describe_move, status_line};
