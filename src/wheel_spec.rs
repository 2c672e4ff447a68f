use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Fully resolved, renderer-ready configuration for one wheel instance.
/// Every numeric field is concrete; `segments` is never empty. Immutable
/// once produced — the renderer reads it once to initialize a drawing
/// session.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WheelSpec {
    pub template_key: String,
    pub wheel: WheelGeometry,
    pub segments: Vec<Segment>,
    pub pointer: WheelPointer,
    pub button: WheelButton,
    pub audio: WheelAudio,
    pub layout: WheelLayout,
}

/// Drawing parameters for the wheel itself.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WheelGeometry {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub line_width: f64,
    pub stroke_style: String,
    pub text_font_size: f64,
    pub text_font_family: String,
    pub text_margin: f64,
    pub text_alignment: TextAlignment,
    pub text_fill_style: String,
    /// Degrees, always in `[0, 360)` after resolution.
    pub rotation_angle: f64,
    /// Degrees, always in `[0, 360)` after resolution.
    pub pointer_angle: f64,
    pub animation: WheelAnimation,
}

/// One wedge of the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub fill_style: String,
    pub stroke_style: Option<String>,
    pub line_width: Option<f64>,
    pub text: Option<String>,
    pub label: Option<String>,
    /// Canonical reward code, reconciled from the legacy `cupon` and the
    /// newer `coupon_code` input fields.
    pub reward_code: Option<String>,
    /// Weight normalized so all segments sum to 1, or `None` when the wheel
    /// declares no weights at all.
    pub probability: Option<f64>,
    pub losing: bool,
    pub link: Option<String>,
    pub image: Option<String>,
}

impl Segment {
    pub fn new(fill_style: &str, text: &str) -> Self {
        Self {
            fill_style: fill_style.to_string(),
            text: Some(text.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WheelAnimation {
    /// Winwheel animation type, e.g. "spinToStop".
    pub kind: String,
    pub duration_secs: f64,
    pub spins: u32,
    pub easing: String,
    pub direction: SpinDirection,
    /// Degrees in `[0, 360)` when set; `None` lets the renderer pick.
    pub stop_angle: Option<f64>,
    pub events: AnimationEvents,
}

/// Named lifecycle handler identifiers. Configuration stays pure data; the
/// rendering capability dispatches these to registered handlers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnimationEvents {
    pub on_start: Option<String>,
    pub on_pin_tick: Option<String>,
    pub on_finish: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WheelPointer {
    pub style: String,
    pub color: String,
    pub position: PointerPosition,
    pub integrated_on_button: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WheelButton {
    pub size: f64,
    pub position: ButtonPosition,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WheelAudio {
    pub key: Option<String>,
    pub sound_trigger: SoundTrigger,
    /// Tick count when the sound trigger is per-pin.
    pub pins: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WheelLayout {
    pub wheel_position: WheelPosition,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Inner,
    Center,
    Outer,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PointerPosition {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ButtonPosition {
    Center,
    Outside,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SoundTrigger {
    Pin,
    Segment,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WheelPosition {
    Center,
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SpinDirection {
    Clockwise,
    AntiClockwise,
}

impl Default for WheelSpec {
    /// The built-in baseline ("vibrante"), matching the product's original
    /// default wheel.
    fn default() -> Self {
        Self {
            template_key: DEFAULT_TEMPLATE_KEY.to_string(),
            wheel: WheelGeometry {
                outer_radius: DEFAULT_OUTER_RADIUS,
                inner_radius: DEFAULT_INNER_RADIUS,
                line_width: DEFAULT_LINE_WIDTH,
                stroke_style: DEFAULT_STROKE_STYLE.to_string(),
                text_font_size: DEFAULT_TEXT_FONT_SIZE,
                text_font_family: DEFAULT_TEXT_FONT_FAMILY.to_string(),
                text_margin: DEFAULT_TEXT_MARGIN,
                text_alignment: TextAlignment::Outer,
                text_fill_style: DEFAULT_TEXT_FILL_STYLE.to_string(),
                rotation_angle: 0.0,
                pointer_angle: 0.0,
                animation: WheelAnimation {
                    kind: DEFAULT_ANIMATION_KIND.to_string(),
                    duration_secs: DEFAULT_SPIN_DURATION_SECS,
                    spins: DEFAULT_SPINS,
                    easing: DEFAULT_EASING.to_string(),
                    direction: SpinDirection::Clockwise,
                    stop_angle: None,
                    events: AnimationEvents::default(),
                },
            },
            segments: vec![
                Segment::new("#f97316", "Premio 1"),
                Segment::new("#facc15", "Premio 2"),
                Segment::new("#22c55e", "Premio 3"),
                Segment::new("#2dd4bf", "Premio 4"),
                Segment::new("#38bdf8", "Premio 5"),
                Segment::new("#6366f1", "Premio 6"),
                Segment::new("#ec4899", "Premio 7"),
                Segment::new("#f97316", "Premio 8"),
            ],
            pointer: WheelPointer {
                style: DEFAULT_POINTER_STYLE.to_string(),
                color: DEFAULT_POINTER_COLOR.to_string(),
                position: PointerPosition::Top,
                integrated_on_button: false,
            },
            button: WheelButton {
                size: DEFAULT_BUTTON_SIZE,
                position: ButtonPosition::Center,
            },
            audio: WheelAudio {
                key: Some(DEFAULT_AUDIO_KEY.to_string()),
                sound_trigger: SoundTrigger::Pin,
                pins: DEFAULT_AUDIO_PINS,
            },
            layout: WheelLayout {
                wheel_position: WheelPosition::Center,
            },
        }
    }
}

/// Process-wide baseline. Read-only; pass it into `resolve` explicitly as
/// the precedence floor rather than reaching for it inside the resolver.
pub static DEFAULT_WHEEL_SPEC: Lazy<WheelSpec> = Lazy::new(WheelSpec::default);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_has_eight_segments() {
        let spec = WheelSpec::default();
        assert_eq!(spec.segments.len(), 8);
        assert_eq!(spec.template_key, "vibrante");
        assert_eq!(spec.wheel.outer_radius, 240.0);
        assert_eq!(spec.wheel.inner_radius, 60.0);
    }

    #[test]
    fn test_serializes_renderer_facing_keys() {
        let value = serde_json::to_value(WheelSpec::default()).unwrap();
        assert!(value.get("templateKey").is_some());
        assert!(value["wheel"].get("outerRadius").is_some());
        assert_eq!(value["segments"][0]["fillStyle"], "#f97316");
        assert_eq!(value["pointer"]["position"], "top");
        assert_eq!(value["audio"]["soundTrigger"], "pin");
    }

    #[test]
    fn test_pointer_position_kebab_case() {
        let pos: PointerPosition = serde_json::from_str("\"top-right\"").unwrap();
        assert_eq!(pos, PointerPosition::TopRight);
    }
}
