#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use spinner::facts::random_fact;
use spinner::{GameController, Item, SpinError, SpinStart, SpinTicket};

/// Game state shared through context: the controller, the randomness that
/// drives it, and the fact of the day.
///
/// The RNG starts from a fixed seed so server and client render the same
/// markup; the browser reseeds it once mounted.
#[derive(Clone, Debug)]
pub struct GameState {
    pub controller: GameController,
    pub fact: Option<&'static str>,
    rng: SmallRng,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl GameState {
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { controller: GameController::with_defaults(), fact: None, rng: SmallRng::seed_from_u64(seed) }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Pick a new fact of the day.
    pub fn refresh_fact(&mut self) {
        self.fact = Some(random_fact(&mut self.rng));
    }

    /// Start a spin on the controller.
    ///
    /// # Errors
    ///
    /// Forwards [`SpinError::Busy`] and [`SpinError::EmptyPool`].
    pub fn spin(&mut self) -> Result<SpinStart, SpinError> {
        self.controller.spin(&mut self.rng)
    }

    /// Settle the spin identified by `ticket`.
    ///
    /// # Errors
    ///
    /// Forwards [`SpinError::StaleTicket`].
    pub fn settle(&mut self, ticket: SpinTicket) -> Result<Item, SpinError> {
        self.controller.settle(ticket)
    }

    /// Restore the full shot list and draw a new fact.
    ///
    /// # Errors
    ///
    /// Forwards [`SpinError::Busy`]; the fact is kept in that case.
    pub fn reset(&mut self) -> Result<(), SpinError> {
        self.controller.reset()?;
        self.refresh_fact();
        Ok(())
    }
}
