//! Circle and cross - a 3×3 game engine with computer opponents
//!
//! # Architecture
//!
//! - **Board**: the nine cells and placement legality
//! - **Rules**: win and draw detection, minimax scoring
//! - **Turn**: the `InProgress` / `Won` / `Draw` state machine
//! - **Policies**: random, heuristic and minimax opponents
//! - **Session**: one match, notifying listeners after every change
//!
//! # Example
//!
//! ```
//! use circle_cross::{Difficulty, GameSession, Mark, Mode};
//!
//! let mut session = GameSession::new(Mode::HumanVsComputer, Difficulty::Hard);
//! let snapshot = session.apply_move(0)?;
//! assert_eq!(snapshot.board().get(4), Some(Mark::Cross));
//! # Ok::<(), circle_cross::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod error;
pub mod invariants;
pub mod policy;
pub mod rules;
mod session;
mod snapshot;
mod turn;
mod types;

pub use board::{Board, CELL_COUNT, CENTER, CORNERS, EDGES};
pub use config::{CONFIG_ENV_VAR, ConfigError, DEFAULT_CONFIG_FILE, PolicyConfig, SessionConfig};
pub use error::{InvalidMove, NoLegalMove};
pub use policy::{
    HeuristicPolicy, MinimaxPolicy, MovePolicy, RandomPolicy, policy_for, seeded_rng,
};
pub use session::{COMPUTER_MARK, ComputerTurn, GameSession, SessionEvent, SessionListener};
pub use snapshot::StateSnapshot;
pub use turn::{Transition, TurnController};
pub use types::{Difficulty, GameStatus, Mark, Mode};
