//! Selection engine: uniform pick from the pool and target rotation math.
//!
//! The pointer sits at 0° (12 o'clock). Wedge `i` of `n` spans
//! `[i·360/n, (i+1)·360/n)`, so rotating the wheel by `360 - mid(i)` brings
//! the midpoint of wedge `i` under the pointer. Extra full turns are added
//! on top purely for show.
//!
//! [`segment_midpoint_deg`] is the single source of the midpoint angle; the
//! wheel geometry uses it for label placement so the pointer result and the
//! drawn labels always agree.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use rand::Rng;

use crate::consts::{EXTRA_TURNS_MAX, EXTRA_TURNS_MIN, FULL_TURN_DEG};
use crate::error::SpinError;

/// Source of the two random draws a spin needs.
///
/// Implemented for every [`rand::Rng`]; tests implement it directly to force
/// a particular outcome.
pub trait SpinRng {
    /// Draw an index uniformly from `[0, len)`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Draw the number of extra full turns for the next spin.
    fn extra_turns(&mut self) -> u32;
}

impl<R: Rng + ?Sized> SpinRng for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn extra_turns(&mut self) -> u32 {
        self.random_range(EXTRA_TURNS_MIN..=EXTRA_TURNS_MAX)
    }
}

/// Pick the next item uniformly from `pool`.
///
/// Pure: the pool is not modified. Removing the winner is the caller's job.
///
/// # Errors
///
/// [`SpinError::EmptyPool`] when `pool` is empty, and
/// [`SpinError::IndexOutOfRange`] if the randomness source returns an index
/// past the end of the pool.
pub fn select_next<'a, T, R>(pool: &'a [T], rng: &mut R) -> Result<(usize, &'a T), SpinError>
where
    R: SpinRng + ?Sized,
{
    if pool.is_empty() {
        return Err(SpinError::EmptyPool);
    }
    let index = rng.pick_index(pool.len());
    pool.get(index)
        .map(|item| (index, item))
        .ok_or(SpinError::IndexOutOfRange { index, count: pool.len() })
}

/// Draw the extra full turns for a spin, uniform in
/// `[EXTRA_TURNS_MIN, EXTRA_TURNS_MAX]`.
pub fn draw_extra_turns<R: SpinRng + ?Sized>(rng: &mut R) -> u32 {
    rng.extra_turns()
}

/// Angular width of each wedge when the wheel holds `count` segments.
///
/// Zero segments have zero width rather than dividing by zero.
#[must_use]
pub fn segment_angle_deg(count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    FULL_TURN_DEG / count as f64
}

/// Midpoint angle of wedge `index` on a wheel of `count` segments.
#[must_use]
pub fn segment_midpoint_deg(index: usize, count: usize) -> f64 {
    let angle = segment_angle_deg(count);
    index as f64 * angle + angle / 2.0
}

/// Cumulative rotation that lands wedge `index` under the pointer after
/// `extra_turns` full turns.
///
/// The result is non-negative and congruent to `360 - mid` modulo 360.
///
/// # Errors
///
/// [`SpinError::EmptyPool`] when `segment_count` is zero and
/// [`SpinError::IndexOutOfRange`] when `index >= segment_count`.
pub fn compute_target_rotation(index: usize, segment_count: usize, extra_turns: u32) -> Result<f64, SpinError> {
    if segment_count == 0 {
        return Err(SpinError::EmptyPool);
    }
    if index >= segment_count {
        return Err(SpinError::IndexOutOfRange { index, count: segment_count });
    }
    let mid = segment_midpoint_deg(index, segment_count);
    Ok(f64::from(extra_turns) * FULL_TURN_DEG + (FULL_TURN_DEG - mid))
}
