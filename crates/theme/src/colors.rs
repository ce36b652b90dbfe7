//! Color constants used when the caller leaves fill colors unset.

/// Gradient start when neither `color` nor `gradientFinish` is set.
pub const DEFAULT_GRADIENT_START: &str = "rgb(1, 127, 150)";

/// Gradient end when neither `color` nor `gradientFinish` is set.
pub const DEFAULT_GRADIENT_FINISH: &str = "rgb(87, 216, 235)";

/// Gradient start when only `gradientFinish` is set.
pub const GRADIENT_START_FALLBACK: &str = "black";

/// Fixed angle of every fill gradient.
pub const GRADIENT_ANGLE_DEG: u16 = 130;
