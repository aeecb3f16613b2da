//! Compile-time game constants.

// ── Timing ──────────────────────────────────────────────────────

/// Wall-clock length of one spin animation, in seconds.
pub const SPIN_DURATION_SECS: f64 = 3.0;

/// Fewest extra full turns added to a spin for visual effect.
pub const EXTRA_TURNS_MIN: u32 = 5;

/// Most extra full turns added to a spin (inclusive).
pub const EXTRA_TURNS_MAX: u32 = 9;

// ── Geometry ────────────────────────────────────────────────────

/// Degrees in one full turn of the wheel.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Rendered wheel diameter in CSS pixels.
pub const WHEEL_SIZE_PX: f64 = 600.0;

/// Label anchor distance from the center, as a fraction of the radius.
pub const LABEL_RADIUS_FRACTION: f64 = 0.85;

/// Maximum label width, as a fraction of the radius.
pub const LABEL_WIDTH_FRACTION: f64 = 0.8;

/// Extra rotation applied to labels so they read tangentially.
pub const LABEL_TANGENT_DEG: f64 = 90.0;

// ── Easing ──────────────────────────────────────────────────────

/// Control points of the spin easing curve, `cubic-bezier(x1, y1, x2, y2)`.
pub const SPIN_EASING: (f64, f64, f64, f64) = (0.25, 0.1, 0.25, 1.0);

// ── Content ─────────────────────────────────────────────────────

/// The full set of shots a fresh game starts with.
pub const INITIAL_SHOTS: [&str; 12] = [
    "Power Shot",
    "Finesse Shot",
    "Volley",
    "Half Volley",
    "Header",
    "Chip Shot",
    "Toe Poke",
    "Knuckleball",
    "Driven Shot",
    "Curved Shot",
    "Penalty Kick",
    "Free Kick",
];
