//! The turn engine aggregate.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use gridventure_board::domain::board::{Board, Transition};
use gridventure_core::clock::Clock;
use gridventure_core::cue::{Cue, CueSink, SilentCueSink};
use gridventure_core::error::DomainError;
use gridventure_core::event::EventMetadata;
use gridventure_core::rng::{DeterministicRng, StdDeterministicRng};
use gridventure_notification::{Message, MessageCategory, MessagePools, NotificationSurface};
use gridventure_timing::{ScheduledTimer, Scheduler, TimerId, TurnTimings, TurnToken};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::errors::IntentRejected;
use super::events::{
    DiceRolled, GameEvent, GameEventKind, GameReset, GameStarted, GameWon, MessageDismissed,
    PhaseChanged, PlayerMoved, TransitionEvent,
};
use super::phase::TurnPhase;
use super::timers::TurnTimer;

/// Lowest die face.
pub const DIE_MIN: u32 = 1;

/// Highest die face.
pub const DIE_MAX: u32 = 6;

/// The single authoritative game state: position, phase, the pending
/// delays of the current turn and the visible message.
///
/// All methods are synchronous. Time only moves when the owner calls
/// [`TurnEngine::advance`].
pub struct TurnEngine {
    id: Uuid,
    board: Arc<Board>,
    timings: TurnTimings,
    phase: TurnPhase,
    position: u32,
    die_value: u32,
    /// The real roll, held back until the animation's last tick.
    committed_die: Option<u32>,
    token: TurnToken,
    scheduler: Scheduler<TurnTimer>,
    notifications: NotificationSurface,
    dismiss_timer: Option<TimerId>,
    active_transition: Option<TransitionEvent>,
    /// Drives cosmetic die faces only; never consulted for game logic.
    animation_rng: Box<dyn DeterministicRng>,
    cues: Arc<dyn CueSink>,
    sequence: i64,
    uncommitted_events: Vec<GameEvent>,
}

impl fmt::Debug for TurnEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnEngine")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("position", &self.position)
            .field("die_value", &self.die_value)
            .field("token", &self.token)
            .field("pending_timers", &self.scheduler.len())
            .field("active_transition", &self.active_transition)
            .finish_non_exhaustive()
    }
}

impl TurnEngine {
    /// Creates an engine in `NotStarted` on the start cell.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimings` or `DomainError::InvalidBoard`
    /// if the timings or message pools fail validation.
    pub fn new(
        board: Arc<Board>,
        messages: MessagePools,
        timings: TurnTimings,
    ) -> Result<Self, DomainError> {
        timings.validate()?;
        messages.validate()?;
        let start = board.start_cell();
        Ok(Self {
            id: Uuid::new_v4(),
            board,
            timings,
            phase: TurnPhase::NotStarted,
            position: start,
            die_value: DIE_MIN,
            committed_die: None,
            token: TurnToken::INITIAL,
            scheduler: Scheduler::new(),
            notifications: NotificationSurface::new(messages, timings.message_visible),
            dismiss_timer: None,
            active_transition: None,
            animation_rng: Box::new(StdDeterministicRng::from_entropy()),
            cues: Arc::new(SilentCueSink),
            sequence: 0,
            uncommitted_events: Vec::new(),
        })
    }

    /// Replaces the session identifier.
    #[must_use]
    pub fn with_session_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Routes audio cues to `cues`.
    #[must_use]
    pub fn with_cue_sink(mut self, cues: Arc<dyn CueSink>) -> Self {
        self.cues = cues;
        self
    }

    /// Replaces the RNG behind the cosmetic die faces.
    #[must_use]
    pub fn with_animation_rng(mut self, rng: Box<dyn DeterministicRng>) -> Self {
        self.animation_rng = rng;
        self
    }

    // --- read-only projection ---

    /// Session identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The board being played.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The configured delays.
    #[must_use]
    pub const fn timings(&self) -> &TurnTimings {
        &self.timings
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Current cell.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// The die face to show; animates while rolling.
    #[must_use]
    pub const fn die_value(&self) -> u32 {
        self.die_value
    }

    /// The visible message, if any.
    #[must_use]
    pub fn active_message(&self) -> Option<&Message> {
        self.notifications.active().map(|active| &active.message)
    }

    /// The highlighted transition, if any.
    #[must_use]
    pub const fn active_transition(&self) -> Option<&TransitionEvent> {
        self.active_transition.as_ref()
    }

    /// Whether the goal has been reached.
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.phase, TurnPhase::Won)
    }

    /// Whether a game has been started since the last reset.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        !matches!(self.phase, TurnPhase::NotStarted)
    }

    /// Rolls taken since the last reset.
    #[must_use]
    pub const fn turn(&self) -> u64 {
        self.token.turn
    }

    /// When the next pending delay becomes due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.scheduler.next_due()
    }

    /// Number of pending delays.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    // --- outbox ---

    /// Events produced since the last drain.
    #[must_use]
    pub fn uncommitted_events(&self) -> &[GameEvent] {
        &self.uncommitted_events
    }

    /// Discards events produced since the last drain.
    pub fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }

    /// Hands over the events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.uncommitted_events)
    }

    // --- intents ---

    /// Starts a game on the start cell.
    ///
    /// # Errors
    ///
    /// Returns `IntentRejected::AlreadyStarted` while a game is running and
    /// `IntentRejected::GameWon` after a win. State is left untouched.
    pub fn start(&mut self, clock: &dyn Clock) -> Result<(), IntentRejected> {
        match self.phase {
            TurnPhase::NotStarted => {}
            TurnPhase::Won => return self.reject("start", IntentRejected::GameWon),
            _ => return self.reject("start", IntentRejected::AlreadyStarted),
        }

        let now = clock.now();
        self.position = self.board.start_cell();
        self.record(
            GameEventKind::GameStarted(GameStarted {
                position: self.position,
            }),
            now,
        );
        self.set_phase(TurnPhase::Idle, now);
        info!(session_id = %self.id, "game started");
        Ok(())
    }

    /// Draws the die and starts playing out a turn. Returns the committed
    /// value; the position only changes once the roll animation finishes.
    ///
    /// # Errors
    ///
    /// Returns `IntentRejected` unless the engine is `Idle`. State is left
    /// untouched.
    pub fn roll_and_move(
        &mut self,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<u32, IntentRejected> {
        match self.phase {
            TurnPhase::Idle => {}
            TurnPhase::NotStarted => return self.reject("roll", IntentRejected::NotStarted),
            TurnPhase::Won => return self.reject("roll", IntentRejected::GameWon),
            phase => return self.reject("roll", IntentRejected::TurnInProgress { phase }),
        }

        let now = clock.now();
        let die = rng.next_u32_range(DIE_MIN, DIE_MAX).clamp(DIE_MIN, DIE_MAX);

        let stale = self
            .scheduler
            .cancel_matching(|timer| timer.payload.is_turn_scoped());
        if stale > 0 {
            warn!(stale, "cancelled delays left over from the previous turn");
        }

        self.token = self.token.next_turn();
        self.committed_die = Some(die);
        self.set_phase(TurnPhase::Rolling, now);
        self.cues.play(Cue::Dice);
        self.scheduler.schedule_after(
            now,
            self.timings.roll_tick_interval,
            self.token,
            TurnTimer::RollTick { tick: 1 },
        );

        info!(
            session_id = %self.id,
            turn = self.token.turn,
            position = self.position,
            "roll started"
        );
        Ok(die)
    }

    /// Abandons the game: cancels every pending delay, clears the message
    /// and transition, and returns to `NotStarted` on the start cell.
    /// Safe at any point, including mid-animation, and idempotent.
    pub fn reset(&mut self, clock: &dyn Clock) {
        let now = clock.now();
        let cancelled_timers = self.scheduler.cancel_all();
        self.token = self.token.next_epoch();
        self.committed_die = None;
        self.active_transition = None;
        self.dismiss_timer = None;
        self.notifications.clear();
        self.position = self.board.start_cell();
        self.die_value = DIE_MIN;
        self.set_phase(TurnPhase::NotStarted, now);
        self.record(GameEventKind::GameReset(GameReset { cancelled_timers }), now);
        info!(session_id = %self.id, cancelled_timers, "game reset");
    }

    // --- timing ---

    /// Fires every delay due at `clock.now()`, in due order. Delays
    /// scheduled by a firing timer fire in the same call if they are due
    /// too. Returns how many timers were popped, stale ones included.
    ///
    /// `rng` is the game RNG; it picks messages.
    pub fn advance(&mut self, clock: &dyn Clock, rng: &mut dyn DeterministicRng) -> usize {
        let now = clock.now();
        let mut fired = 0;
        while let Some(timer) = self.scheduler.pop_due(now) {
            fired += 1;
            if !self.is_current(&timer) {
                debug!(
                    timer = timer.payload.name(),
                    epoch = timer.token.epoch,
                    turn = timer.token.turn,
                    "discarding stale delay"
                );
                continue;
            }
            self.fire(timer.payload, timer.due, rng);
        }
        fired
    }

    fn is_current(&self, timer: &ScheduledTimer<TurnTimer>) -> bool {
        if timer.payload.is_turn_scoped() {
            timer.token == self.token
        } else {
            timer.token.same_epoch(self.token)
        }
    }

    fn fire(&mut self, timer: TurnTimer, at: DateTime<Utc>, rng: &mut dyn DeterministicRng) {
        match timer {
            TurnTimer::RollTick { tick } => self.on_roll_tick(tick, at, rng),
            TurnTimer::RevealTransition => self.on_reveal_transition(at, rng),
            TurnTimer::EndHighlight => self.on_end_highlight(at, rng),
            TurnTimer::Settle => self.on_settle(at),
            TurnTimer::DismissMessage { generation } => self.on_dismiss_message(generation, at),
        }
    }

    fn on_roll_tick(&mut self, tick: u32, at: DateTime<Utc>, rng: &mut dyn DeterministicRng) {
        if self.phase != TurnPhase::Rolling {
            return;
        }
        if tick < self.timings.roll_ticks {
            self.die_value = self
                .animation_rng
                .next_u32_range(DIE_MIN, DIE_MAX)
                .clamp(DIE_MIN, DIE_MAX);
            self.scheduler.schedule_after(
                at,
                self.timings.roll_tick_interval,
                self.token,
                TurnTimer::RollTick { tick: tick + 1 },
            );
            return;
        }

        let Some(die) = self.committed_die.take() else {
            error!(turn = self.token.turn, "roll finished without a committed value");
            self.settle(at);
            return;
        };
        self.die_value = die;
        self.record(GameEventKind::DiceRolled(DiceRolled { value: die }), at);
        self.move_by(die, at, rng);
    }

    fn move_by(&mut self, die: u32, at: DateTime<Utc>, rng: &mut dyn DeterministicRng) {
        let origin = self.position;
        let target = origin.saturating_add(die);
        let final_cell = self.board.final_cell();

        self.position = target.min(final_cell);
        self.record(
            GameEventKind::PlayerMoved(PlayerMoved {
                from: origin,
                to: self.position,
            }),
            at,
        );
        self.set_phase(TurnPhase::Moving, at);
        debug!(origin, die, target, "token moved");

        // The win check comes before any transition lookup.
        if target >= final_cell {
            self.win(at, rng);
            return;
        }

        self.scheduler.schedule_after(
            at,
            self.timings.transition_pause,
            self.token,
            TurnTimer::RevealTransition,
        );
    }

    fn on_reveal_transition(&mut self, at: DateTime<Utc>, rng: &mut dyn DeterministicRng) {
        if self.phase != TurnPhase::Moving {
            return;
        }
        let origin = self.position;
        match self.board.classify(origin) {
            Ok(Some(transition)) => self.apply_transition(origin, transition, at, rng),
            Ok(None) => self.settle(at),
            Err(e) => {
                error!(error = %e, position = origin, "position left the board");
                self.settle(at);
            }
        }
    }

    /// Applies exactly one transition. A destination that is itself a
    /// source is not followed.
    fn apply_transition(
        &mut self,
        origin: u32,
        transition: Transition,
        at: DateTime<Utc>,
        rng: &mut dyn DeterministicRng,
    ) {
        let event = TransitionEvent {
            origin,
            destination: transition.destination,
            is_boost: transition.is_boost(),
        };

        self.set_phase(TurnPhase::Transitioning, at);
        self.record(GameEventKind::TransitionTriggered(event), at);
        self.position = transition.destination;
        self.record(
            GameEventKind::PlayerMoved(PlayerMoved {
                from: origin,
                to: transition.destination,
            }),
            at,
        );
        self.active_transition = Some(event);

        let (cue, category) = if event.is_boost {
            (Cue::Boost, MessageCategory::Boost)
        } else {
            (Cue::Setback, MessageCategory::Setback)
        };
        self.cues.play(cue);
        self.announce(category, at, rng);

        info!(
            session_id = %self.id,
            turn = self.token.turn,
            origin,
            destination = transition.destination,
            is_boost = event.is_boost,
            "transition applied"
        );

        self.scheduler.schedule_after(
            at,
            self.timings.transition_highlight,
            self.token,
            TurnTimer::EndHighlight,
        );
    }

    fn on_end_highlight(&mut self, at: DateTime<Utc>, rng: &mut dyn DeterministicRng) {
        if self.phase != TurnPhase::Transitioning {
            return;
        }
        self.active_transition = None;
        if self.position >= self.board.final_cell() {
            self.win(at, rng);
        } else {
            self.settle(at);
        }
    }

    fn settle(&mut self, at: DateTime<Utc>) {
        self.set_phase(TurnPhase::Settled, at);
        self.scheduler
            .schedule_after(at, self.timings.settle_delay, self.token, TurnTimer::Settle);
    }

    fn on_settle(&mut self, at: DateTime<Utc>) {
        if self.phase != TurnPhase::Settled {
            return;
        }
        self.set_phase(TurnPhase::Idle, at);
        info!(
            session_id = %self.id,
            turn = self.token.turn,
            position = self.position,
            "turn settled"
        );
    }

    fn win(&mut self, at: DateTime<Utc>, rng: &mut dyn DeterministicRng) {
        self.position = self.board.final_cell();
        self.active_transition = None;
        self.set_phase(TurnPhase::Won, at);
        self.record(
            GameEventKind::GameWon(GameWon {
                position: self.position,
                turns: self.token.turn,
            }),
            at,
        );
        self.cues.play(Cue::Win);
        self.announce(MessageCategory::Win, at, rng);
        info!(session_id = %self.id, turns = self.token.turn, "game won");
    }

    // --- notifications ---

    fn announce(
        &mut self,
        category: MessageCategory,
        at: DateTime<Utc>,
        rng: &mut dyn DeterministicRng,
    ) {
        if let Some(previous) = self.dismiss_timer.take() {
            self.scheduler.cancel(previous);
        }
        let active = self.notifications.announce(category, rng, at);
        let message = active.message.clone();
        let generation = active.generation;
        let expires_at = active.expires_at;

        self.record(GameEventKind::MessageAnnounced(message), at);
        self.dismiss_timer = Some(self.scheduler.schedule(
            expires_at,
            self.token,
            TurnTimer::DismissMessage { generation },
        ));
    }

    fn on_dismiss_message(&mut self, generation: u64, at: DateTime<Utc>) {
        let Some(category) = self
            .notifications
            .active()
            .map(|active| active.message.category)
        else {
            return;
        };
        if self.notifications.expire(generation) {
            self.dismiss_timer = None;
            self.record(
                GameEventKind::MessageDismissed(MessageDismissed { category }),
                at,
            );
        }
    }

    // --- bookkeeping ---

    fn reject<T>(&self, intent: &'static str, reason: IntentRejected) -> Result<T, IntentRejected> {
        debug!(
            session_id = %self.id,
            intent,
            phase = %self.phase,
            reason = %reason,
            "intent rejected"
        );
        Err(reason)
    }

    fn set_phase(&mut self, to: TurnPhase, at: DateTime<Utc>) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        debug!(from = %from, to = %to, "phase changed");
        self.record(GameEventKind::PhaseChanged(PhaseChanged { from, to }), at);
    }

    fn record(&mut self, kind: GameEventKind, at: DateTime<Utc>) {
        self.sequence += 1;
        let event = GameEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                session_id: self.id,
                sequence_number: self.sequence,
                turn: self.token.turn,
                occurred_at: at,
            },
            kind,
        };
        self.uncommitted_events.push(event);
    }
}
