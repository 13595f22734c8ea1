use crate::constants::*;
use std::time::Duration;

/// Element ids the coordinator looks up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementIds {
    pub box_id: String,
    pub circle: String,
    pub modal: String,
    pub status: String,
    pub output: String,
    pub card_class: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            box_id: BOX_ID.to_string(),
            circle: CIRCLE_ID.to_string(),
            modal: MODAL_ID.to_string(),
            status: STATUS_ID.to_string(),
            output: OUTPUT_ID.to_string(),
            card_class: CARD_CLASS.to_string(),
        }
    }
}

/// Runtime settings; `Default` mirrors the constants the page stylesheet expects.
#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    pub ids: ElementIds,
    pub counter_period: Duration,
    pub shake_duration: Duration,
    pub fade_stagger_sec: f64,
    pub color_transition: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            counter_period: Duration::from_millis(COUNTER_PERIOD_MS),
            shake_duration: Duration::from_millis(SHAKE_DURATION_MS),
            fade_stagger_sec: FADE_STAGGER_SEC,
            color_transition: COLOR_TRANSITION.to_string(),
        }
    }
}
