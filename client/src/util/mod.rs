//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (entropy, timers)
//! from page and component logic to improve reuse and testability.

pub mod entropy;
pub mod settle_timer;
