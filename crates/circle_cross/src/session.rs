//! One playable match: turn controller, opponent and notifications.

use crate::config::{PolicyConfig, SessionConfig};
use crate::error::InvalidMove;
use crate::policy::{MovePolicy, policy_for, seeded_rng};
use crate::snapshot::StateSnapshot;
use crate::turn::{Transition, TurnController};
use crate::types::{Difficulty, Mark, Mode};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error, info, instrument, warn};

/// The mark the computer plays in [`Mode::HumanVsComputer`].
pub const COMPUTER_MARK: Mark = Mark::Cross;

/// State change pushed to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A move was accepted and the game goes on.
    TurnChanged(StateSnapshot),
    /// A move ended the game.
    GameOver(StateSnapshot),
    /// The session started a fresh game.
    Reset(StateSnapshot),
}

impl SessionEvent {
    /// Returns the snapshot carried by the event.
    pub fn snapshot(&self) -> &StateSnapshot {
        match self {
            SessionEvent::TurnChanged(s) | SessionEvent::GameOver(s) | SessionEvent::Reset(s) => s,
        }
    }
}

/// Receives every [`SessionEvent`].
pub trait SessionListener: Send {
    /// Called synchronously after each state change.
    fn notify(&mut self, event: &SessionEvent);
}

impl<F> SessionListener for F
where
    F: FnMut(&SessionEvent) + Send,
{
    fn notify(&mut self, event: &SessionEvent) {
        self(event)
    }
}

impl SessionListener for UnboundedSender<SessionEvent> {
    fn notify(&mut self, event: &SessionEvent) {
        if self.send(event.clone()).is_err() {
            debug!("Listener channel closed, dropping event");
        }
    }
}

/// Permission to play one deferred computer move.
///
/// Issued by [`GameSession::submit_move`]; invalidated by any reset.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerTurn {
    epoch: u64,
}

impl ComputerTurn {
    /// Returns the session epoch the ticket belongs to.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// A match between circle and cross, where cross is either a second human
/// or the computer.
pub struct GameSession {
    game: TurnController,
    mode: Mode,
    difficulty: Difficulty,
    policy_config: PolicyConfig,
    rng: SmallRng,
    policy: Box<dyn MovePolicy>,
    epoch: u64,
    pending: Option<ComputerTurn>,
    listeners: Vec<Box<dyn SessionListener>>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("game", &self.game)
            .field("mode", &self.mode)
            .field("difficulty", &self.difficulty)
            .field("policy", &self.policy.name())
            .field("epoch", &self.epoch)
            .field("pending", &self.pending)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Creates a session with default policy tuning.
    #[instrument]
    pub fn new(mode: Mode, difficulty: Difficulty) -> Self {
        Self::from_config(
            &SessionConfig::default()
                .with_mode(mode)
                .with_difficulty(difficulty),
        )
    }

    /// Creates a session from configuration.
    #[instrument(skip(config), fields(mode = %config.mode(), difficulty = %config.difficulty()))]
    pub fn from_config(config: &SessionConfig) -> Self {
        let mut rng = seeded_rng(*config.seed());
        let policy = policy_for(
            *config.difficulty(),
            config.policy(),
            SmallRng::from_rng(&mut rng),
        );
        info!(policy = policy.name(), "Creating game session");
        Self {
            game: TurnController::new(),
            mode: *config.mode(),
            difficulty: *config.difficulty(),
            policy_config: config.policy().clone(),
            rng,
            policy,
            epoch: 0,
            pending: None,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for every later event.
    pub fn subscribe(&mut self, listener: impl SessionListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns the current state.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::capture(&self.game, self.mode, self.difficulty)
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns how many resets have happened.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Returns the outstanding computer turn, if any.
    pub fn pending_computer_turn(&self) -> Option<ComputerTurn> {
        self.pending
    }

    /// Returns the name of the computer's policy.
    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Plays a human move and, against the computer, its reply.
    ///
    /// Both moves happen before this returns; listeners see one event per move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] and changes nothing if the human move is illegal.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn apply_move(&mut self, index: usize) -> Result<StateSnapshot, InvalidMove> {
        if let Some(ticket) = self.submit_move(index)? {
            self.play_computer_turn(ticket);
        }
        Ok(self.snapshot())
    }

    /// Plays a human move only.
    ///
    /// Returns a ticket when the computer is now to move; the caller redeems
    /// it with [`play_computer_turn`](Self::play_computer_turn), possibly after
    /// a delay.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::NotYourTurn`] while a ticket is outstanding, or
    /// the turn controller's rejection. Nothing changes on error.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn submit_move(&mut self, index: usize) -> Result<Option<ComputerTurn>, InvalidMove> {
        if self.pending.is_some() {
            warn!(index, "Human move while the computer is to move");
            return Err(InvalidMove::NotYourTurn);
        }

        let transition = self.game.apply_move(index)?;
        info!(index, ?transition, "Human move accepted");
        self.emit_transition(transition);

        if self.is_computer_turn() {
            let ticket = ComputerTurn { epoch: self.epoch };
            self.pending = Some(ticket);
            debug!("Computer turn scheduled");
            return Ok(Some(ticket));
        }
        Ok(None)
    }

    /// Plays the computer move a ticket allows.
    ///
    /// Returns `None` without touching the game if the ticket predates the
    /// latest reset or was already used.
    #[instrument(skip(self), fields(epoch = self.epoch, ticket_epoch = ticket.epoch))]
    pub fn play_computer_turn(&mut self, ticket: ComputerTurn) -> Option<StateSnapshot> {
        if self.pending != Some(ticket) {
            debug!("Ignoring stale computer turn");
            return None;
        }
        self.pending = None;

        match self.policy.choose_move(self.game.board(), COMPUTER_MARK) {
            Ok(index) => match self.game.apply_move(index) {
                Ok(transition) => {
                    info!(index, policy = self.policy.name(), ?transition, "Computer move applied");
                    self.emit_transition(transition);
                }
                Err(e) => {
                    error!(index, error = %e, "Policy chose an illegal move");
                    debug_assert!(false, "policy chose illegal move {index}: {e}");
                }
            },
            Err(e) => {
                error!(error = %e, "Policy found no move on a live game");
                debug_assert!(false, "{e}");
            }
        }
        Some(self.snapshot())
    }

    /// Starts a fresh game, keeping mode and difficulty.
    ///
    /// Any outstanding [`ComputerTurn`] becomes stale.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn reset(&mut self) -> StateSnapshot {
        self.game = TurnController::new();
        self.epoch += 1;
        self.pending = None;
        info!(epoch = self.epoch, "Game reset");

        let snapshot = self.snapshot();
        self.emit(SessionEvent::Reset(snapshot.clone()));
        snapshot
    }

    /// Switches mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) -> StateSnapshot {
        info!(from = %self.mode, to = %mode, "Changing mode");
        self.mode = mode;
        self.reset()
    }

    /// Switches the computer's strength and starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> StateSnapshot {
        info!(from = %self.difficulty, to = %difficulty, "Changing difficulty");
        self.difficulty = difficulty;
        self.policy = policy_for(
            difficulty,
            &self.policy_config,
            SmallRng::from_rng(&mut self.rng),
        );
        self.reset()
    }

    fn is_computer_turn(&self) -> bool {
        self.mode == Mode::HumanVsComputer
            && !self.game.status().is_terminal()
            && self.game.turn() == COMPUTER_MARK
    }

    fn emit_transition(&mut self, transition: Transition) {
        let snapshot = self.snapshot();
        let event = if transition.is_game_over() {
            SessionEvent::GameOver(snapshot)
        } else {
            SessionEvent::TurnChanged(snapshot)
        };
        self.emit(event);
    }

    fn emit(&mut self, event: SessionEvent) {
        for listener in &mut self.listeners {
            listener.notify(&event);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameStatus;
    use std::sync::{Arc, Mutex};

    fn recorder(session: &mut GameSession) -> Arc<Mutex<Vec<SessionEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        session.subscribe(move |event: &SessionEvent| sink.lock().unwrap().push(event.clone()));
        events
    }

    #[test]
    fn test_human_vs_human_alternates() {
        let mut session = GameSession::new(Mode::HumanVsHuman, Difficulty::Hard);
        let snapshot = session.apply_move(0).unwrap();
        assert_eq!(*snapshot.turn(), Mark::Cross);
        assert_eq!(snapshot.board().get(4), Some(Mark::Empty));
    }

    #[test]
    fn test_computer_replies_in_same_call() {
        let mut session = GameSession::new(Mode::HumanVsComputer, Difficulty::Hard);
        let snapshot = session.apply_move(0).unwrap();
        assert_eq!(snapshot.board().get(4), Some(Mark::Cross));
        assert_eq!(*snapshot.turn(), Mark::Circle);
    }

    #[test]
    fn test_events_per_move_and_reset() {
        let mut session = GameSession::new(Mode::HumanVsComputer, Difficulty::Hard);
        let events = recorder(&mut session);
        session.apply_move(0).unwrap();
        session.reset();

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], SessionEvent::TurnChanged(_)));
        assert!(matches!(events[1], SessionEvent::TurnChanged(_)));
        assert!(matches!(events[2], SessionEvent::Reset(_)));
        assert_eq!(*events[0].snapshot().turn(), Mark::Cross);
    }

    #[test]
    fn test_game_over_event() {
        let mut session = GameSession::new(Mode::HumanVsHuman, Difficulty::Normal);
        let events = recorder(&mut session);
        for index in [0, 4, 1, 5, 2] {
            session.apply_move(index).unwrap();
        }
        let last = events.lock().unwrap().last().cloned().unwrap();
        assert!(matches!(last, SessionEvent::GameOver(_)));
        assert_eq!(*last.snapshot().status(), GameStatus::Won(Mark::Circle));
    }

    #[test]
    fn test_pending_ticket_blocks_human() {
        let mut session = GameSession::new(Mode::HumanVsComputer, Difficulty::Easy);
        let ticket = session.submit_move(0).unwrap().unwrap();
        assert_eq!(session.apply_move(1), Err(InvalidMove::NotYourTurn));
        assert!(session.play_computer_turn(ticket).is_some());
        assert_eq!(session.pending_computer_turn(), None);
    }

    #[test]
    fn test_ticket_single_use() {
        let mut session = GameSession::new(Mode::HumanVsComputer, Difficulty::Hard);
        let ticket = session.submit_move(0).unwrap().unwrap();
        assert!(session.play_computer_turn(ticket).is_some());
        assert!(session.play_computer_turn(ticket).is_none());
    }

    #[test]
    fn test_set_difficulty_swaps_policy_and_resets() {
        let mut session = GameSession::new(Mode::HumanVsComputer, Difficulty::Easy);
        session.apply_move(4).unwrap();
        let snapshot = session.set_difficulty(Difficulty::Hard);
        assert_eq!(session.policy_name(), "minimax");
        assert_eq!(*snapshot.difficulty(), Difficulty::Hard);
        assert_eq!(snapshot.board().empty_cells().len(), 9);
        assert_eq!(session.epoch(), 1);
    }

    #[test]
    fn test_channel_listener() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut session = GameSession::new(Mode::HumanVsHuman, Difficulty::Normal);
        session.subscribe(tx);
        session.apply_move(8).unwrap();
        let event = rx.try_recv().unwrap();
        assert_eq!(event.snapshot().board().get(8), Some(Mark::Circle));
    }
}
