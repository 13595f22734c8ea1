use crate::error::UiError;
use crate::surface::ElementHandle;
use std::fmt;
use std::str::FromStr;

/// The fixed set of mutually exclusive animation class tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Animation {
    Pulse,
    Bounce,
    Spin,
    Shake,
    FadeIn,
    SlideIn,
}

impl Animation {
    pub const ALL: [Animation; 6] = [
        Animation::Pulse,
        Animation::Bounce,
        Animation::Spin,
        Animation::Shake,
        Animation::FadeIn,
        Animation::SlideIn,
    ];

    #[inline]
    pub fn class_name(self) -> &'static str {
        match self {
            Animation::Pulse => "pulse",
            Animation::Bounce => "bounce",
            Animation::Spin => "spin",
            Animation::Shake => "shake",
            Animation::FadeIn => "fade-in",
            Animation::SlideIn => "slide-in",
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for Animation {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Animation::ALL
            .into_iter()
            .find(|a| a.class_name() == s)
            .ok_or_else(|| UiError::UnknownAnimation(s.to_string()))
    }
}

/// Strip every known animation tag, then flush layout.
pub fn reset_element_animation<E: ElementHandle>(element: &E) {
    for anim in Animation::ALL {
        element.remove_class(anim.class_name());
    }
    element.reflow();
}

/// Tags from the registry currently present on `element`.
pub fn active_animations<E: ElementHandle>(element: &E) -> Vec<Animation> {
    Animation::ALL
        .into_iter()
        .filter(|a| element.has_class(a.class_name()))
        .collect()
}
