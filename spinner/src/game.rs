//! Spin state machine and game controller.
//!
//! DESIGN
//! ======
//! `GameController` is the single owner of the pool, the history, and the
//! spin phase. A spin moves through two phases:
//!
//! 1. [`GameController::spin`] picks the winner, freezes the target rotation,
//!    and hands back a [`SpinTicket`]. Pool and history are untouched.
//! 2. [`GameController::settle`] is called once the animation duration has
//!    elapsed. Only the ticket of the spin in flight is accepted, so a
//!    settlement fires at most once and a cancelled spin can never commit.
//!
//! Items carry a stable [`ItemId`] assigned from their position in the
//! initial set. Removal is by id, so two items sharing a label are still
//! consumed one per spin.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use std::fmt;

use crate::consts::{INITIAL_SHOTS, SPIN_DURATION_SECS};
use crate::error::SpinError;
use crate::motion::WheelMotion;
use crate::selection::{SpinRng, compute_target_rotation, draw_extra_turns, select_next};
use crate::wheel::{Segment, WheelGeometry};

/// Shown on the wheel hub before the first result of a game.
pub const IDLE_PROMPT: &str = "Spin to play!";
/// Shown on the wheel hub while a spin is in flight.
pub const SPINNING_PROMPT: &str = "Spinning...";
/// Terminal message once every item has been drawn.
pub const COMPLETED_MESSAGE: &str = "All shots completed! Reset to play again.";

/// Stable identity of an item within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// One playable choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
}

/// Identifies one in-flight spin. Required to settle it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpinTicket(u64);

impl SpinTicket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SpinTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// State frozen for the duration of one spin.
#[derive(Clone, Debug, PartialEq)]
pub struct InFlight {
    pub ticket: SpinTicket,
    /// Cumulative rotation from the 0° baseline, in degrees.
    pub target_rotation: f64,
    /// Winner, revealed and committed at settlement.
    pub pending: Item,
}

/// Spin lifecycle. The target rotation only exists while spinning.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning(InFlight),
}

/// What the caller needs to drive the animation and schedule settlement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinStart {
    pub ticket: SpinTicket,
    /// Wedge index of the winner on the wheel as currently drawn.
    pub index: usize,
    pub target_rotation: f64,
    pub duration_secs: f64,
}

/// Immutable inputs of the wheel renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelProps {
    /// Current pool, in wheel order.
    pub labels: Vec<String>,
    pub is_spinning: bool,
    pub result_label: Option<String>,
    pub spin_duration_seconds: f64,
    /// Rotation target while spinning; 0 at rest.
    pub target_rotation_degrees: f64,
}

impl WheelProps {
    /// Rotation state the wheel element should be in.
    #[must_use]
    pub fn motion(&self) -> WheelMotion {
        if self.is_spinning {
            WheelMotion::animate_to(self.target_rotation_degrees, self.spin_duration_seconds)
        } else {
            WheelMotion::at_rest()
        }
    }

    #[must_use]
    pub fn segments(&self, geometry: &WheelGeometry) -> Vec<Segment> {
        geometry.partition(&self.labels)
    }

    /// Text for the hub at the center of the wheel.
    #[must_use]
    pub fn hub_text(&self) -> &str {
        if self.is_spinning {
            return SPINNING_PROMPT;
        }
        self.result_label.as_deref().unwrap_or(IDLE_PROMPT)
    }
}

/// Owns pool, history, and spin phase for one game.
#[derive(Clone, Debug)]
pub struct GameController {
    initial: Vec<Item>,
    pool: Vec<Item>,
    history: Vec<Item>,
    phase: SpinPhase,
    result: Option<String>,
    spin_duration_secs: f64,
    last_ticket: u64,
}

impl Default for GameController {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl GameController {
    /// Start a game over `labels`, in wheel order.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let initial = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| Item { id: ItemId(i), label: label.into() })
            .collect::<Vec<_>>();
        Self {
            pool: initial.clone(),
            initial,
            history: Vec::new(),
            phase: SpinPhase::Idle,
            result: None,
            spin_duration_secs: SPIN_DURATION_SECS,
            last_ticket: 0,
        }
    }

    /// Start a game over the built-in shot list.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(INITIAL_SHOTS)
    }

    #[must_use]
    pub fn with_spin_duration(mut self, secs: f64) -> Self {
        self.spin_duration_secs = secs;
        self
    }

    // --- spin lifecycle ---

    /// Begin a spin: pick the winner and freeze the target rotation.
    ///
    /// Pool and history are not touched until [`Self::settle`].
    ///
    /// # Errors
    ///
    /// [`SpinError::Busy`] while a spin is in flight (nothing changes) and
    /// [`SpinError::EmptyPool`] once every item has been drawn.
    pub fn spin<R: SpinRng + ?Sized>(&mut self, rng: &mut R) -> Result<SpinStart, SpinError> {
        if let SpinPhase::Spinning(in_flight) = &self.phase {
            log::warn!("spin rejected: ticket {} still in flight", in_flight.ticket);
            return Err(SpinError::Busy);
        }
        let (index, winner) = select_next(&self.pool, rng)?;
        let pending = winner.clone();
        let extra_turns = draw_extra_turns(rng);
        let target_rotation = compute_target_rotation(index, self.pool.len(), extra_turns)?;

        self.last_ticket += 1;
        let ticket = SpinTicket(self.last_ticket);
        log::debug!(
            "spin {ticket}: wedge {index} of {}, {extra_turns} extra turns, target {target_rotation}deg",
            self.pool.len()
        );
        self.phase = SpinPhase::Spinning(InFlight { ticket, target_rotation, pending });

        Ok(SpinStart { ticket, index, target_rotation, duration_secs: self.spin_duration_secs })
    }

    /// Commit the spin identified by `ticket`: reveal the result, move the
    /// winner from pool to history, and return the wheel to rest.
    ///
    /// # Errors
    ///
    /// [`SpinError::StaleTicket`] if `ticket` is not the spin in flight
    /// (already settled, cancelled, or reset). Nothing changes.
    pub fn settle(&mut self, ticket: SpinTicket) -> Result<Item, SpinError> {
        let in_flight = match std::mem::take(&mut self.phase) {
            SpinPhase::Spinning(in_flight) if in_flight.ticket == ticket => in_flight,
            other => {
                self.phase = other;
                log::warn!("settlement {ticket} ignored: not the spin in flight");
                return Err(SpinError::StaleTicket(ticket.value()));
            }
        };

        let winner = in_flight.pending;
        if let Some(pos) = self.pool.iter().position(|item| item.id == winner.id) {
            self.pool.remove(pos);
        }
        self.history.push(winner.clone());
        self.result = Some(winner.label.clone());
        log::debug!("spin {ticket} settled on {:?}, {} left", winner.label, self.pool.len());
        Ok(winner)
    }

    /// Abandon the spin in flight without committing it.
    ///
    /// Returns `true` if a spin was cancelled. Its ticket becomes stale.
    pub fn cancel(&mut self) -> bool {
        match std::mem::take(&mut self.phase) {
            SpinPhase::Spinning(in_flight) => {
                log::debug!("spin {} cancelled", in_flight.ticket);
                true
            }
            SpinPhase::Idle => false,
        }
    }

    /// Restore the full initial set and clear history and result.
    ///
    /// # Errors
    ///
    /// [`SpinError::Busy`] while a spin is in flight.
    pub fn reset(&mut self) -> Result<(), SpinError> {
        if self.is_spinning() {
            return Err(SpinError::Busy);
        }
        self.pool.clone_from(&self.initial);
        self.history.clear();
        self.result = None;
        self.phase = SpinPhase::Idle;
        log::debug!("game reset with {} items", self.pool.len());
        Ok(())
    }

    // --- queries ---

    #[must_use]
    pub fn pool(&self) -> &[Item] {
        &self.pool
    }

    #[must_use]
    pub fn history(&self) -> &[Item] {
        &self.history
    }

    #[must_use]
    pub fn initial(&self) -> &[Item] {
        &self.initial
    }

    /// Labels of the remaining pool, in wheel order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.pool.iter().map(|item| item.label.clone()).collect()
    }

    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning(_))
    }

    /// Every item has been drawn and nothing is in flight.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty() && !self.is_spinning()
    }

    #[must_use]
    pub fn can_spin(&self) -> bool {
        !self.is_spinning() && !self.pool.is_empty()
    }

    #[must_use]
    pub fn can_reset(&self) -> bool {
        !self.is_spinning()
    }

    /// Terminal message once the game is over.
    #[must_use]
    pub fn status_text(&self) -> Option<&'static str> {
        self.is_exhausted().then_some(COMPLETED_MESSAGE)
    }

    /// Items drawn so far and the size of the full set.
    #[must_use]
    pub fn score(&self) -> (usize, usize) {
        (self.history.len(), self.initial.len())
    }

    /// Progress line shown under the wheel, e.g. `Shots Completed: 3 / 12`.
    #[must_use]
    pub fn scoreboard_text(&self) -> String {
        let (done, total) = self.score();
        format!("Shots Completed: {done} / {total}")
    }

    #[must_use]
    pub fn spin_duration_secs(&self) -> f64 {
        self.spin_duration_secs
    }

    /// Snapshot of everything the wheel renderer reads.
    #[must_use]
    pub fn wheel_props(&self) -> WheelProps {
        let (is_spinning, target_rotation_degrees) = match &self.phase {
            SpinPhase::Spinning(in_flight) => (true, in_flight.target_rotation),
            SpinPhase::Idle => (false, 0.0),
        };
        WheelProps {
            labels: self.labels(),
            is_spinning,
            result_label: self.result.clone(),
            spin_duration_seconds: self.spin_duration_secs,
            target_rotation_degrees,
        }
    }
}
