use crate::status::StatusMessage;
use crate::surface::TimerHandle;
use fnv::FnvHashMap;

/// Mutable UI-session state owned by the coordinator.
#[derive(Debug, Default)]
pub struct SessionState {
    spinning: bool,
    timers: FnvHashMap<String, TimerHandle>,
    last_status: Option<StatusMessage>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn set_spinning(&mut self, spinning: bool) {
        self.spinning = spinning;
    }

    /// Store `handle` under `label`, returning whatever was registered there before.
    pub fn register_timer(&mut self, label: &str, handle: TimerHandle) -> Option<TimerHandle> {
        self.timers.insert(label.to_string(), handle)
    }

    pub fn timer(&self, label: &str) -> Option<TimerHandle> {
        self.timers.get(label).copied()
    }

    #[inline]
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Empty the registry; the caller cancels every returned handle.
    pub fn drain_timers(&mut self) -> Vec<(String, TimerHandle)> {
        self.timers.drain().collect()
    }

    pub fn last_status(&self) -> Option<&StatusMessage> {
        self.last_status.as_ref()
    }

    pub fn record_status(&mut self, status: StatusMessage) {
        self.last_status = Some(status);
    }
}
