//! Core engine for the shot spinner game.
//!
//! This crate owns everything about a spin that is not markup: picking the
//! next item uniformly from the remaining pool, turning that pick into a wheel
//! rotation that lands the winning wedge under the pointer, partitioning the
//! wheel into equal wedges, and sequencing the spin through its two phases
//! (in motion, then settled). The `client` crate renders the values produced
//! here and owns the one settlement timer per spin.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`selection`] | Uniform pick without replacement and target rotation math |
//! | [`wheel`] | Wedge partition, SVG paths, colors, label placement |
//! | [`motion`] | Two-phase animation contract (`animate_to` / at rest) |
//! | [`game`] | Spin state machine and the game controller |
//! | [`palette`] | Segment colors and label contrast rules |
//! | [`facts`] | Static fact-of-the-day list |
//! | [`consts`] | Compile-time game constants |
//! | [`error`] | [`SpinError`] precondition failures |

pub mod consts;
pub mod error;
pub mod facts;
pub mod game;
pub mod motion;
pub mod palette;
pub mod selection;
pub mod wheel;

pub use error::SpinError;
pub use game::{GameController, Item, ItemId, SpinPhase, SpinStart, SpinTicket, WheelProps};

#[cfg(test)]
mod test_support;
