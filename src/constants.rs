// Baseline values for the built-in wheel spec. These mirror the product's
// original hard-coded default configuration ("vibrante").

pub const DEFAULT_TEMPLATE_KEY: &str = "vibrante";

pub const DEFAULT_OUTER_RADIUS: f64 = 240.0;
pub const DEFAULT_INNER_RADIUS: f64 = 60.0;
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
pub const DEFAULT_STROKE_STYLE: &str = "#0f172a";

pub const DEFAULT_TEXT_FONT_SIZE: f64 = 16.0;
pub const DEFAULT_TEXT_FONT_FAMILY: &str = "sans-serif";
pub const DEFAULT_TEXT_MARGIN: f64 = 18.0;
pub const DEFAULT_TEXT_FILL_STYLE: &str = "#0f172a";

pub const DEFAULT_ANIMATION_KIND: &str = "spinToStop";
pub const DEFAULT_SPIN_DURATION_SECS: f64 = 6.0;
pub const DEFAULT_SPINS: u32 = 8;
pub const DEFAULT_EASING: &str = "Power4.easeOut";

pub const DEFAULT_POINTER_STYLE: &str = "triangle";
pub const DEFAULT_POINTER_COLOR: &str = "#fbbf24";
pub const DEFAULT_BUTTON_SIZE: f64 = 140.0;
pub const DEFAULT_AUDIO_KEY: &str = "tick";
pub const DEFAULT_AUDIO_PINS: u32 = 32;

// Fill used when a campaign segment arrives without one (winwheel's own
// fallback color).
pub const DEFAULT_SEGMENT_FILL_STYLE: &str = "silver";

pub const FULL_TURN_DEGREES: f64 = 360.0;
