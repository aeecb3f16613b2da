//! Segment fill colors and label contrast rules.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// Ordered segment fills, assigned cyclically by wedge index.
pub const SEGMENT_COLORS: [&str; 12] = [
    "#DA291C", "#005C99", "#A50044", "#000000", "#003399", "#00529F", "#008753", "#FFC72C", "#004D40",
    "#007ACD", "#F4B400", "#003366",
];

/// Fills dark enough that their labels switch to [`LIGHT_LABEL_COLOR`].
pub const DARK_FILLS: [&str; 6] = ["#000000", "#004D40", "#003366", "#DA291C", "#00529F", "#007ACD"];

pub const LIGHT_LABEL_COLOR: &str = "#FFFFFF";
pub const DARK_LABEL_COLOR: &str = "#333";

/// Fill color for the wedge at `index`.
#[must_use]
pub fn segment_color(index: usize) -> &'static str {
    SEGMENT_COLORS[index % SEGMENT_COLORS.len()]
}

/// Label color that stays readable on top of `fill`.
///
/// Matching is case-insensitive; unknown fills get the dark label.
#[must_use]
pub fn label_color_for(fill: &str) -> &'static str {
    let fill = fill.trim();
    if DARK_FILLS.iter().any(|dark| dark.eq_ignore_ascii_case(fill)) {
        LIGHT_LABEL_COLOR
    } else {
        DARK_LABEL_COLOR
    }
}
