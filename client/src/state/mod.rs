//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The whole game lives in one `RwSignal<GameState>` context. Components read
//! derived values from it; only the spin/reset handlers and the settlement
//! timer write to it.

pub mod game;
