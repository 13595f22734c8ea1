use crate::constants::{
    STATUS_ERROR_COLORS, STATUS_INFO_COLORS, STATUS_PREFIX, STATUS_SUCCESS_COLORS,
};
use crate::surface::{ElementHandle, Page};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// (background, foreground) for the status region.
    #[inline]
    pub fn colors(self) -> (&'static str, &'static str) {
        match self {
            Severity::Error => STATUS_ERROR_COLORS,
            Severity::Success => STATUS_SUCCESS_COLORS,
            Severity::Info => STATUS_INFO_COLORS,
        }
    }

    #[inline]
    pub fn log_level(self) -> log::Level {
        match self {
            Severity::Error => log::Level::Error,
            Severity::Success | Severity::Info => log::Level::Info,
        }
    }
}

/// Last reported operation outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    /// Text as rendered into the status region.
    pub fn rendered(&self) -> String {
        format!("{}{}", STATUS_PREFIX, self.text)
    }
}

/// Write `message` into the status region with severity styling.
pub fn update_status<P: Page>(page: &P, status_id: &str, message: &StatusMessage) {
    let Some(el) = page.find_element(status_id) else {
        log::warn!("[status] #{} missing; dropped: {}", status_id, message.text);
        return;
    };
    let (background, foreground) = message.severity.colors();
    el.set_text(&message.rendered());
    el.set_style_property("background-color", background);
    el.set_style_property("color", foreground);
}

