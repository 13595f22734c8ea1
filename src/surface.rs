use crate::error::UiError;
use std::time::Duration;

/// Opaque id of a scheduled callback, as handed out by the host timer API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub i32);

/// Mutations the coordinator performs on a single page element.
pub trait ElementHandle {
    fn add_class(&self, tag: &str);
    fn remove_class(&self, tag: &str);
    fn has_class(&self, tag: &str) -> bool;
    fn set_style_property(&self, name: &str, value: &str);
    fn set_text(&self, text: &str);
    /// Force a synchronous layout so a removed-then-added class restarts its animation.
    fn reflow(&self);
}

/// Element lookup on the hosting page.
///
/// Implementations are cheap handles (`Clone`) so timer callbacks can keep
/// their own copy without borrowing the coordinator.
pub trait Page: Clone + 'static {
    type Element: ElementHandle;

    fn find_element(&self, id: &str) -> Option<Self::Element>;
    /// All elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;
}

pub type OnceCallback = Box<dyn FnOnce()>;
pub type RepeatCallback = Box<dyn FnMut()>;

/// Timer source used for the counter loop and delayed class removal.
pub trait Scheduler {
    fn set_interval(&self, period: Duration, callback: RepeatCallback)
        -> Result<TimerHandle, UiError>;
    fn set_timeout(&self, delay: Duration, callback: OnceCallback) -> Result<TimerHandle, UiError>;
    /// Cancelling an unknown or already-fired handle is a no-op.
    fn cancel(&self, handle: TimerHandle);
}
