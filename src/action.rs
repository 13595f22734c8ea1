use crate::animation::Animation;

/// Every operation a page control can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    StartAnimations,
    StopAnimations,
    ResetAnimations,
    ToggleSpin,
    TriggerShake,
    FadeInCards,
    ShowModal,
    HideModal,
    CalculateArea,
    StringManipulation,
    RandomColor,
    /// Apply a single animation to the box element.
    Animate(Animation),
}

/// Button id → action table wired at page load.
pub const BUTTON_BINDINGS: &[(&str, UiAction)] = &[
    ("btn-start", UiAction::StartAnimations),
    ("btn-stop", UiAction::StopAnimations),
    ("btn-reset", UiAction::ResetAnimations),
    ("btn-spin", UiAction::ToggleSpin),
    ("btn-shake", UiAction::TriggerShake),
    ("btn-fade", UiAction::FadeInCards),
    ("btn-modal-open", UiAction::ShowModal),
    ("btn-modal-close", UiAction::HideModal),
    ("btn-area", UiAction::CalculateArea),
    ("btn-string", UiAction::StringManipulation),
    ("btn-color", UiAction::RandomColor),
    ("btn-pulse", UiAction::Animate(Animation::Pulse)),
    ("btn-bounce", UiAction::Animate(Animation::Bounce)),
    ("btn-slide", UiAction::Animate(Animation::SlideIn)),
];

impl UiAction {
    pub fn for_button(id: &str) -> Option<UiAction> {
        BUTTON_BINDINGS
            .iter()
            .find(|(button, _)| *button == id)
            .map(|(_, action)| *action)
    }

    pub fn button_id(self) -> Option<&'static str> {
        BUTTON_BINDINGS
            .iter()
            .find(|(_, action)| *action == self)
            .map(|(button, _)| *button)
    }

    /// Shortcut for `key` pressed while focus is on an element with tag
    /// `target_tag`. Only Escape fires from text-entry targets so typing is
    /// left alone.
    pub fn for_key_from(key: &str, target_tag: Option<&str>, editable: bool) -> Option<UiAction> {
        let typing = editable
            || target_tag.is_some_and(|tag| {
                ["input", "textarea", "select"]
                    .iter()
                    .any(|t| tag.eq_ignore_ascii_case(t))
            });
        match UiAction::for_key(key) {
            Some(UiAction::HideModal) => Some(UiAction::HideModal),
            Some(_) if typing => None,
            other => other,
        }
    }

    /// Keyboard shortcuts, matched against `KeyboardEvent.key`.
    #[inline]
    pub fn for_key(key: &str) -> Option<UiAction> {
        match key {
            "Escape" => Some(UiAction::HideModal),
            "s" | "S" => Some(UiAction::ToggleSpin),
            "x" | "X" => Some(UiAction::TriggerShake),
            "r" | "R" => Some(UiAction::ResetAnimations),
            _ => None,
        }
    }
}
