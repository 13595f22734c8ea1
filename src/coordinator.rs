use crate::action::UiAction;
use crate::animation::{reset_element_animation, Animation};
use crate::config::UiConfig;
use crate::constants::{COUNTER_TIMER, DEMO_RECT_HEIGHT, DEMO_RECT_WIDTH, DEMO_STRING, MODAL_SHOW_CLASS};
use crate::demo;
use crate::error::UiError;
use crate::session::SessionState;
use crate::status::{update_status, Severity, StatusMessage};
use crate::surface::{ElementHandle, Page, Scheduler, TimerHandle};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Drives every page operation: animation tags, the counter loop, the modal,
/// the demo helpers and the status region.
///
/// All DOM access goes through `P` and all timers through `S`, so the same
/// logic runs in the browser and against the headless page in tests.
pub struct Coordinator<P: Page, S: Scheduler> {
    page: P,
    scheduler: S,
    config: UiConfig,
    session: SessionState,
    rng: StdRng,
}

impl<P: Page, S: Scheduler> Coordinator<P, S> {
    pub fn new(page: P, scheduler: S, config: UiConfig) -> Self {
        Self::with_rng(page, scheduler, config, StdRng::from_entropy())
    }

    pub fn with_rng(page: P, scheduler: S, config: UiConfig, rng: StdRng) -> Self {
        Self {
            page,
            scheduler,
            config,
            session: SessionState::new(),
            rng,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    // ---------------- Status / output ----------------

    fn report(&mut self, text: impl Into<String>, severity: Severity) {
        let msg = StatusMessage::new(text, severity);
        log::log!(severity.log_level(), "[status] {}", msg.text);
        update_status(&self.page, &self.config.ids.status, &msg);
        self.session.record_status(msg);
    }

    fn element_missing(&mut self, id: &str) -> UiError {
        let err = UiError::ElementNotFound(id.to_string());
        self.report(err.to_string(), Severity::Error);
        err
    }

    fn write_output(&self, text: &str) {
        if let Some(out) = self.page.find_element(&self.config.ids.output) {
            out.set_text(text);
        }
    }

    // ---------------- Element animation control ----------------

    /// Replace whatever animation `element_id` carries with `animation`.
    pub fn apply_animation(&mut self, element_id: &str, animation: Animation) -> Result<(), UiError> {
        let Some(el) = self.page.find_element(element_id) else {
            return Err(self.element_missing(element_id));
        };
        reset_element_animation(&el);
        el.add_class(animation.class_name());
        self.report(
            format!("Applied {} animation to #{}", animation, element_id),
            Severity::Success,
        );
        Ok(())
    }

    /// Like [`Coordinator::apply_animation`], parsing the tag name first.
    pub fn apply_animation_named(&mut self, element_id: &str, name: &str) -> Result<(), UiError> {
        match name.parse::<Animation>() {
            Ok(animation) => self.apply_animation(element_id, animation),
            Err(err) => {
                self.report(err.to_string(), Severity::Error);
                Err(err)
            }
        }
    }

    /// Cancel every registered timer, clear box and circle tags, stop the spin.
    pub fn reset_animations(&mut self) {
        for (label, handle) in self.session.drain_timers() {
            log::info!("[timer] cancel {} ({:?})", label, handle);
            self.scheduler.cancel(handle);
        }
        for id in [&self.config.ids.box_id, &self.config.ids.circle] {
            if let Some(el) = self.page.find_element(id) {
                reset_element_animation(&el);
            }
        }
        self.session.set_spinning(false);
        self.report("All animations reset", Severity::Info);
    }

    /// Start or stop the circle spinning.
    ///
    /// Stopping removes only the spin tag while starting clears every tag
    /// first; other tags added while spinning survive a stop.
    pub fn toggle_spin(&mut self) {
        let Some(circle) = self.page.find_element(&self.config.ids.circle) else {
            log::warn!("[anim] #{} missing; spin ignored", self.config.ids.circle);
            return;
        };
        if self.session.is_spinning() {
            circle.remove_class(Animation::Spin.class_name());
            self.report("Spin stopped", Severity::Info);
        } else {
            reset_element_animation(&circle);
            circle.add_class(Animation::Spin.class_name());
            self.report("Spin started", Severity::Success);
        }
        let spinning = self.session.is_spinning();
        self.session.set_spinning(!spinning);
    }

    /// Shake the box and schedule removal of the tag.
    ///
    /// The returned handle is not registered; a reset before it fires leaves
    /// the callback to remove an already-absent tag.
    pub fn trigger_shake(&mut self) -> Option<TimerHandle> {
        let Some(box_el) = self.page.find_element(&self.config.ids.box_id) else {
            log::warn!("[anim] #{} missing; shake ignored", self.config.ids.box_id);
            return None;
        };
        reset_element_animation(&box_el);
        box_el.add_class(Animation::Shake.class_name());
        self.report("Box shaken", Severity::Success);

        let page = self.page.clone();
        let box_id = self.config.ids.box_id.clone();
        let removal = Box::new(move || {
            if let Some(el) = page.find_element(&box_id) {
                el.remove_class(Animation::Shake.class_name());
            }
        });
        match self.scheduler.set_timeout(self.config.shake_duration, removal) {
            Ok(handle) => Some(handle),
            Err(err) => {
                self.report(err.to_string(), Severity::Error);
                None
            }
        }
    }

    /// Restart fade-in on every card with a staggered delay. Returns the card count.
    pub fn fade_in_elements(&mut self) -> usize {
        let cards = self.page.elements_by_class(&self.config.ids.card_class);
        let fade = Animation::FadeIn.class_name();
        for (i, card) in cards.iter().enumerate() {
            card.remove_class(fade);
            card.reflow();
            card.add_class(fade);
            let delay = i as f64 * self.config.fade_stagger_sec;
            card.set_style_property("animation-delay", &format!("{}s", delay));
        }
        self.report("Cards faded in", Severity::Success);
        cards.len()
    }

    // ---------------- Control panel ----------------

    /// Pulse the box, bounce the circle and start the one-second counter.
    pub fn start_animations(&mut self) {
        let box_id = self.config.ids.box_id.clone();
        let circle_id = self.config.ids.circle.clone();
        // Not-found is already reported; the counter still starts.
        _ = self.apply_animation(&box_id, Animation::Pulse);
        _ = self.apply_animation(&circle_id, Animation::Bounce);

        let page = self.page.clone();
        let output_id = self.config.ids.output.clone();
        let mut seconds: u32 = 0;
        let tick = Box::new(move || {
            seconds += 1;
            if let Some(out) = page.find_element(&output_id) {
                out.set_text(&format!("Counter: {} seconds", seconds));
            }
        });
        match self.scheduler.set_interval(self.config.counter_period, tick) {
            Ok(handle) => {
                if let Some(prev) = self.session.register_timer(COUNTER_TIMER, handle) {
                    log::info!("[timer] replacing running {} ({:?})", COUNTER_TIMER, prev);
                    self.scheduler.cancel(prev);
                }
                self.report("Animations started", Severity::Success);
            }
            Err(err) => {
                self.report(err.to_string(), Severity::Error);
            }
        }
    }

    pub fn stop_animations(&mut self) {
        self.reset_animations();
        self.write_output("Animations stopped");
        self.report("All animations stopped", Severity::Info);
    }

    // ---------------- Modal ----------------

    pub fn show_modal(&mut self) -> Result<(), UiError> {
        let id = self.config.ids.modal.clone();
        let Some(modal) = self.page.find_element(&id) else {
            return Err(self.element_missing(&id));
        };
        modal.add_class(MODAL_SHOW_CLASS);
        log::info!("[modal] shown");
        self.report("Modal opened", Severity::Success);
        Ok(())
    }

    pub fn hide_modal(&mut self) -> Result<(), UiError> {
        let id = self.config.ids.modal.clone();
        let Some(modal) = self.page.find_element(&id) else {
            return Err(self.element_missing(&id));
        };
        modal.remove_class(MODAL_SHOW_CLASS);
        log::info!("[modal] hidden");
        self.report("Modal closed", Severity::Info);
        Ok(())
    }

    // ---------------- Demos ----------------

    pub fn calculate_area(&mut self) -> f64 {
        let area = demo::calculate_rectangle_area(DEMO_RECT_WIDTH, DEMO_RECT_HEIGHT);
        self.write_output(&demo::area_report(DEMO_RECT_WIDTH, DEMO_RECT_HEIGHT));
        self.report(format!("Area calculated: {}", area), Severity::Success);
        area
    }

    pub fn string_manipulation(&mut self) -> String {
        let report = demo::string_report(DEMO_STRING);
        self.write_output(&report);
        self.report("String manipulation complete", Severity::Success);
        report
    }

    /// Give the box a random background color. `None` when the box is absent.
    pub fn random_color(&mut self) -> Option<String> {
        let box_el = self.page.find_element(&self.config.ids.box_id)?;
        let color = demo::random_color_hex(&mut self.rng);
        box_el.set_style_property("transition", &self.config.color_transition);
        box_el.set_style_property("background-color", &color);
        self.write_output(&format!("Random color: {}", color));
        self.report(format!("Box color set to {}", color), Severity::Success);
        Some(color)
    }

    // ---------------- Entry points ----------------

    pub fn on_page_load(&mut self) {
        let cards = self.fade_in_elements();
        log::info!("[init] page loaded with {} cards", cards);
        self.report("Page loaded", Severity::Info);
    }

    /// Run the operation bound to a button or shortcut.
    pub fn dispatch(&mut self, action: UiAction) {
        log::info!("[action] {:?}", action);
        match action {
            UiAction::StartAnimations => self.start_animations(),
            UiAction::StopAnimations => self.stop_animations(),
            UiAction::ResetAnimations => self.reset_animations(),
            UiAction::ToggleSpin => self.toggle_spin(),
            UiAction::TriggerShake => {
                self.trigger_shake();
            }
            UiAction::FadeInCards => {
                self.fade_in_elements();
            }
            UiAction::ShowModal => {
                _ = self.show_modal();
            }
            UiAction::HideModal => {
                _ = self.hide_modal();
            }
            UiAction::CalculateArea => {
                self.calculate_area();
            }
            UiAction::StringManipulation => {
                self.string_manipulation();
            }
            UiAction::RandomColor => {
                self.random_color();
            }
            UiAction::Animate(animation) => {
                let box_id = self.config.ids.box_id.clone();
                _ = self.apply_animation(&box_id, animation);
            }
        }
    }
}
