//! One-shot settlement timer for spins.
//!
//! ARCHITECTURE
//! ============
//! A spin is started synchronously on click; its settlement is a deferred
//! task that sleeps for the spin duration and then settles the controller
//! with the spin's ticket. The controller rejects any ticket that is not the
//! spin in flight, so a late or repeated firing cannot commit twice.
//!
//! When the owning component unmounts, the shared `alive` flag is cleared
//! and the in-flight spin is cancelled; a task that wakes afterwards exits
//! without touching state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use spinner::SpinStart;

use crate::state::game::GameState;

/// Starts spins and schedules their settlement.
#[derive(Clone)]
pub struct SettleTimer {
    game: RwSignal<GameState>,
    alive: Arc<AtomicBool>,
}

impl SettleTimer {
    /// Create a timer bound to the current reactive owner.
    ///
    /// Must be called inside a component body so cleanup can be registered.
    pub fn new(game: RwSignal<GameState>) -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let alive_cleanup = Arc::clone(&alive);
        on_cleanup(move || {
            alive_cleanup.store(false, Ordering::Relaxed);
            if game.try_update(|state| state.controller.cancel()).unwrap_or(false) {
                log::debug!("in-flight spin cancelled on unmount");
            }
        });
        Self { game, alive }
    }

    /// Handle a spin request: start a spin if the controller allows it and
    /// schedule its settlement. Requests while busy or exhausted are dropped.
    pub fn request_spin(&self) {
        let started = self.game.try_update(GameState::spin);
        match started {
            Some(Ok(start)) => self.schedule(start),
            Some(Err(err)) => log::warn!("spin request ignored: {err}"),
            None => log::warn!("spin request after game state was disposed"),
        }
    }

    /// Handle a reset request. Refused while a spin is in flight.
    pub fn request_reset(&self) {
        match self.game.try_update(GameState::reset) {
            Some(Ok(())) => log::debug!("game reset"),
            Some(Err(err)) => log::warn!("reset request ignored: {err}"),
            None => log::warn!("reset request after game state was disposed"),
        }
    }

    fn schedule(&self, start: SpinStart) {
        #[cfg(feature = "hydrate")]
        {
            let game = self.game;
            let alive = Arc::clone(&self.alive);
            let delay = std::time::Duration::try_from_secs_f64(start.duration_secs).unwrap_or_default();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match game.try_update(|state| state.settle(start.ticket)) {
                    Some(Ok(item)) => log::info!("spin {} landed on {}", start.ticket, item.label),
                    Some(Err(err)) => log::warn!("settlement dropped: {err}"),
                    None => {}
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!(
                "no timer outside the browser; spin {} (alive: {}) stays in flight",
                start.ticket,
                self.alive.load(Ordering::Relaxed)
            );
        }
    }
}
