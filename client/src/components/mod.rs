//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the wheel and its surrounding chrome from values
//! produced by the `spinner` crate, reading shared state from the Leptos
//! context provider where needed.

pub mod available_list;
pub mod completed_list;
pub mod spin_controls;
pub mod wheel;
