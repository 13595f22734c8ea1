use crate::error::UiError;
use crate::surface::{OnceCallback, RepeatCallback, Scheduler, TimerHandle};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Scheduler`] backed by `window.setInterval` / `window.setTimeout`.
///
/// Interval closures stay alive in `intervals` until cancelled; timeouts are
/// handed to JS as one-shot functions that free themselves after firing.
#[derive(Clone)]
pub struct DomScheduler {
    window: web::Window,
    intervals: Rc<RefCell<FnvHashMap<i32, Closure<dyn FnMut()>>>>,
}

impl DomScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            intervals: Rc::new(RefCell::new(FnvHashMap::default())),
        }
    }
}

#[inline]
fn millis(d: Duration) -> i32 {
    d.as_millis().min(i32::MAX as u128) as i32
}

impl Scheduler for DomScheduler {
    fn set_interval(
        &self,
        period: Duration,
        callback: RepeatCallback,
    ) -> Result<TimerHandle, UiError> {
        let closure = Closure::wrap(callback);
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis(period),
            )
            .map_err(|e| UiError::Schedule(format!("{:?}", e)))?;
        self.intervals.borrow_mut().insert(id, closure);
        Ok(TimerHandle(id))
    }

    fn set_timeout(&self, delay: Duration, callback: OnceCallback) -> Result<TimerHandle, UiError> {
        let func = Closure::once_into_js(move || callback());
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                func.unchecked_ref(),
                millis(delay),
            )
            .map_err(|e| UiError::Schedule(format!("{:?}", e)))?;
        Ok(TimerHandle(id))
    }

    fn cancel(&self, handle: TimerHandle) {
        let interval = self.intervals.borrow_mut().remove(&handle.0);
        match interval {
            Some(closure) => {
                self.window.clear_interval_with_handle(handle.0);
                drop(closure);
            }
            None => self.window.clear_timeout_with_handle(handle.0),
        }
    }
}
