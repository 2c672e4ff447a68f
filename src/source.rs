use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::campaign::{CampaignGameConfig, CampaignRecord, CampaignSegment};
use crate::error::ResolutionError;
use crate::partial::{
    PartialAudio, PartialButton, PartialGeometry, PartialLayout, PartialPointer,
    PartialWheelSpec,
};
use crate::templates;

/// One sparse configuration source. Callers order these lowest-to-highest
/// precedence; each historically-evolved shape carries its own mapping to
/// canonical keys.
#[derive(Debug, Clone)]
pub enum RawConfigSource {
    /// Named visual preset, as selected by `templateKey`.
    Template(String),
    /// Full campaign record from the lookup service; the wheel config sits
    /// under `campaign_game.config`. A missing or null game contributes
    /// nothing.
    Campaign(Value),
    /// Flat `CampaignGameConfig` payload (winwheel-style keys).
    GameConfig(Value),
    /// `WheelConfig`-shaped override: `templateKey` plus nested `wheel`,
    /// `segments`, `pointer`, `button`, `audio`, `layout`.
    WheelOverride(Value),
}

/// The `WheelConfig` override shape. Sections deserialize straight into the
/// partial types since their keys already match.
#[derive(Debug, serde::Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
struct WheelOverride {
    template_key: Option<String>,
    wheel: PartialGeometry,
    segments: Option<Vec<CampaignSegment>>,
    pointer: PartialPointer,
    button: PartialButton,
    audio: PartialAudio,
    layout: PartialLayout,
}

impl RawConfigSource {
    pub(crate) fn to_partial(&self) -> Result<PartialWheelSpec, ResolutionError> {
        match self {
            RawConfigSource::Template(key) => match templates::preset(key) {
                Some(partial) => Ok(partial),
                None => {
                    log::warn!("unknown wheel template {key:?}, contributing nothing");
                    Ok(PartialWheelSpec::default())
                }
            },
            RawConfigSource::Campaign(value) => {
                let record: CampaignRecord = from_value(value, "campaign")?;
                Ok(record
                    .campaign_game
                    .and_then(|game| game.config)
                    .map(game_config_partial)
                    .unwrap_or_default())
            }
            RawConfigSource::GameConfig(value) => {
                let config: CampaignGameConfig = from_value(value, "game_config")?;
                Ok(game_config_partial(config))
            }
            RawConfigSource::WheelOverride(value) => {
                let config: WheelOverride = from_value(value, "wheel_override")?;
                Ok(wheel_override_partial(config))
            }
        }
    }
}

fn from_value<T: DeserializeOwned>(
    value: &Value,
    shape: &'static str,
) -> Result<T, ResolutionError> {
    serde_json::from_value(value.clone()).map_err(|err| ResolutionError::MalformedSource {
        shape,
        detail: err.to_string(),
    })
}

/// Mapping table for the flat game-config shape: wheel scalars sit at the
/// top level, `pins.number` feeds the audio tick count.
fn game_config_partial(config: CampaignGameConfig) -> PartialWheelSpec {
    let mut partial = PartialWheelSpec::default();
    let wheel = &mut partial.wheel;
    wheel.outer_radius = config.outer_radius;
    wheel.inner_radius = config.inner_radius;
    wheel.line_width = config.line_width;
    wheel.stroke_style = config.stroke_style;
    wheel.rotation_angle = config.rotation_angle;
    wheel.pointer_angle = config.pointer_angle;
    wheel.text_font_size = config.text_font_size;
    wheel.text_font_family = config.text_font_family;
    wheel.text_margin = config.text_margin;
    wheel.text_alignment = config.text_alignment;
    wheel.text_fill_style = config.text_fill_style;
    if let Some(animation) = config.animation {
        wheel.animation = animation;
    }
    partial.segments = config.segments;
    if let Some(pointer) = config.pointer {
        partial.pointer = pointer;
    }
    if let Some(button) = config.button {
        partial.button = button;
    }
    partial.audio.pins = config.pins.and_then(|pins| pins.number);
    partial
}

fn wheel_override_partial(config: WheelOverride) -> PartialWheelSpec {
    PartialWheelSpec {
        template_key: config.template_key,
        wheel: config.wheel,
        segments: config.segments,
        pointer: config.pointer,
        button: config.button,
        audio: config.audio,
        layout: config.layout,
    }
}
