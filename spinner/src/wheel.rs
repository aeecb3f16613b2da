//! Wheel geometry: equal wedge partition, SVG paths, colors, label placement.
//!
//! Wheel angles are measured clockwise from 12 o'clock, where the pointer
//! sits, so a wedge whose midpoint has been rotated to 0° is the one under
//! the pointer. SVG and CSS measure clockwise from +x (3 o'clock), so
//! [`WheelGeometry::rim_point`] and [`WheelGeometry::label_transform`] shift
//! by a quarter turn when converting to screen space. Every wedge spans
//! `360 / n` degrees; nothing about a label (length, position) changes its
//! share of the wheel.

#[cfg(test)]
#[path = "wheel_test.rs"]
mod wheel_test;

use crate::consts::{FULL_TURN_DEG, LABEL_RADIUS_FRACTION, LABEL_TANGENT_DEG, LABEL_WIDTH_FRACTION, WHEEL_SIZE_PX};
use crate::palette::{label_color_for, segment_color};
use crate::selection::{segment_angle_deg, segment_midpoint_deg};

/// Offset between wheel angles (0° at 12 o'clock) and screen angles (0° at
/// 3 o'clock).
const QUARTER_TURN_DEG: f64 = FULL_TURN_DEG / 4.0;

/// One wedge of the wheel, derived from a pool item at render time.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Position in the pool (and on the wheel).
    pub index: usize,
    /// Text drawn on the wedge.
    pub label: String,
    /// Inclusive start of the angular span, in degrees.
    pub start_deg: f64,
    /// Exclusive end of the angular span, in degrees.
    pub end_deg: f64,
    /// Midpoint angle; shared with the target rotation math.
    pub mid_deg: f64,
    /// Closed SVG path from the center out to the rim and back.
    pub path: String,
    /// Wedge fill from the segment palette.
    pub fill: &'static str,
    /// Label text color chosen for contrast against `fill`.
    pub label_color: &'static str,
}

impl Segment {
    /// Width of the angular span in degrees.
    #[must_use]
    pub fn span_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }
}

/// Pixel dimensions of a rendered wheel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelGeometry {
    /// Diameter in CSS pixels.
    pub size: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self { size: WHEEL_SIZE_PX }
    }
}

impl WheelGeometry {
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }

    /// SVG `viewBox` covering the whole wheel.
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {size} {size}", size = self.size)
    }

    /// Partition the wheel into one wedge per label, in order.
    ///
    /// An empty label list yields no wedges.
    #[must_use]
    pub fn partition<S: AsRef<str>>(&self, labels: &[S]) -> Vec<Segment> {
        let count = labels.len();
        let angle = segment_angle_deg(count);
        labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let start_deg = index as f64 * angle;
                let end_deg = (index + 1) as f64 * angle;
                let fill = segment_color(index);
                Segment {
                    index,
                    label: label.as_ref().to_owned(),
                    start_deg,
                    end_deg,
                    mid_deg: segment_midpoint_deg(index, count),
                    path: self.wedge_path(start_deg, end_deg),
                    fill,
                    label_color: label_color_for(fill),
                }
            })
            .collect()
    }

    /// Closed wedge path for the span `[start_deg, end_deg)`.
    ///
    /// A span covering the full turn has coincident arc endpoints, which SVG
    /// would draw as nothing, so it is emitted as two half-circle arcs.
    #[must_use]
    pub fn wedge_path(&self, start_deg: f64, end_deg: f64) -> String {
        let r = self.radius();
        if end_deg - start_deg >= FULL_TURN_DEG {
            let (sx, sy) = self.rim_point(start_deg);
            let (ox, oy) = self.rim_point(start_deg + FULL_TURN_DEG / 2.0);
            return format!(
                "M {r},{r} L {sx:.2},{sy:.2} A {r},{r} 0 1 1 {ox:.2},{oy:.2} A {r},{r} 0 1 1 {sx:.2},{sy:.2} Z"
            );
        }
        let (sx, sy) = self.rim_point(start_deg);
        let (ex, ey) = self.rim_point(end_deg);
        let large_arc = u8::from(end_deg - start_deg > FULL_TURN_DEG / 2.0);
        format!("M {r},{r} L {sx:.2},{sy:.2} A {r},{r} 0 {large_arc} 1 {ex:.2},{ey:.2} Z")
    }

    /// Point on the rim at wheel angle `deg`, in screen pixel coordinates.
    /// `0°` is the top of the wheel.
    #[must_use]
    pub fn rim_point(&self, deg: f64) -> (f64, f64) {
        let r = self.radius();
        let rad = (deg - QUARTER_TURN_DEG).to_radians();
        (r + r * rad.cos(), r + r * rad.sin())
    }

    /// Distance from the center to a label anchor.
    #[must_use]
    pub fn label_offset(&self) -> f64 {
        self.radius() * LABEL_RADIUS_FRACTION
    }

    /// Maximum label width before wrapping.
    #[must_use]
    pub fn label_width(&self) -> f64 {
        self.radius() * LABEL_WIDTH_FRACTION
    }

    /// Screen point the pointer marks: the top of the rim.
    #[must_use]
    pub fn pointer_point(&self) -> (f64, f64) {
        (self.radius(), 0.0)
    }

    /// CSS transform that moves a centered label out along the wedge
    /// midpoint and turns it to read tangentially.
    #[must_use]
    pub fn label_transform(&self, mid_deg: f64) -> String {
        format!(
            "translate(-50%, -50%) rotate({angle}deg) translateX({offset}px) rotate({LABEL_TANGENT_DEG}deg)",
            angle = mid_deg - QUARTER_TURN_DEG,
            offset = self.label_offset()
        )
    }
}

/// Partition a default-sized wheel into one wedge per label.
#[must_use]
pub fn partition_segments<S: AsRef<str>>(labels: &[S]) -> Vec<Segment> {
    WheelGeometry::default().partition(labels)
}
