use serde::Deserialize;

use crate::partial::{PartialButton, PartialPointer};
use crate::wheel_spec::{SoundTrigger, SpinDirection, TextAlignment};

/// A campaign record as returned by the campaign lookup service. Only the
/// fields the wheel cares about are modeled; everything else in the stored
/// JSON is ignored.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CampaignRecord {
    pub code: Option<String>,
    pub campaign_game: Option<CampaignGame>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CampaignGame {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub is_active: Option<bool>,
    pub config: Option<CampaignGameConfig>,
}

/// The flat, winwheel-style game config shape. Everything is optional and
/// unknown keys are ignored; a known key with the wrong type makes the
/// source malformed.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignGameConfig {
    pub outer_radius: Option<f64>,
    pub inner_radius: Option<f64>,
    pub line_width: Option<f64>,
    pub stroke_style: Option<String>,
    pub rotation_angle: Option<f64>,
    pub pointer_angle: Option<f64>,
    pub text_font_size: Option<f64>,
    pub text_font_family: Option<String>,
    pub text_margin: Option<f64>,
    pub text_alignment: Option<TextAlignment>,
    pub text_fill_style: Option<String>,
    pub segments: Option<Vec<CampaignSegment>>,
    pub pins: Option<CampaignPins>,
    pub animation: Option<CampaignAnimation>,
    pub pointer: Option<PartialPointer>,
    pub button: Option<PartialButton>,
}

/// One wedge as stored by a campaign. Carries both reward-code spellings;
/// resolution reconciles them into one canonical field.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignSegment {
    pub fill_style: Option<String>,
    pub stroke_style: Option<String>,
    pub line_width: Option<f64>,
    pub text: Option<String>,
    pub label: Option<String>,
    /// Legacy spelling of the reward code.
    pub cupon: Option<String>,
    /// Newer spelling; wins over `cupon` when both are non-empty. The
    /// `rewardCode` alias lets an already-resolved spec round-trip.
    #[serde(rename = "coupon_code", alias = "rewardCode")]
    pub coupon_code: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
    #[serde(alias = "losing")]
    pub losing_segment: Option<bool>,
    pub probability: Option<f64>,
}

/// Animation section of a stored config. Legacy callback fields are handler
/// names (strings), never executable values.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignAnimation {
    #[serde(rename = "type", alias = "kind")]
    pub kind: Option<String>,
    pub direction: Option<SpinDirection>,
    #[serde(alias = "durationSecs")]
    pub duration: Option<f64>,
    pub spins: Option<u32>,
    pub easing: Option<String>,
    pub stop_angle: Option<f64>,
    pub sound_trigger: Option<SoundTrigger>,
    pub callback_before: Option<String>,
    pub callback_after: Option<String>,
    pub callback_finished: Option<String>,
    pub callback_sound: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignPins {
    pub number: Option<u32>,
}
