use crate::error::UiError;
use crate::surface::{ElementHandle, OnceCallback, Page, RepeatCallback, Scheduler, TimerHandle};
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

// In-memory page and manual clock for driving the coordinator off-browser.

#[derive(Debug, Default)]
struct NodeState {
    id: Option<String>,
    classes: SmallVec<[String; 4]>,
    style: FnvHashMap<String, String>,
    text: String,
    reflows: u32,
}

/// Element of a [`MemoryPage`]; clones share the same node.
#[derive(Clone, Debug)]
pub struct MemoryElement {
    node: Rc<RefCell<NodeState>>,
}

impl MemoryElement {
    pub fn id(&self) -> Option<String> {
        self.node.borrow().id.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.node.borrow().classes.iter().cloned().collect()
    }

    pub fn style(&self, name: &str) -> Option<String> {
        self.node.borrow().style.get(name).cloned()
    }

    pub fn text(&self) -> String {
        self.node.borrow().text.clone()
    }

    /// Number of forced layouts so far.
    pub fn reflow_count(&self) -> u32 {
        self.node.borrow().reflows
    }
}

impl ElementHandle for MemoryElement {
    fn add_class(&self, tag: &str) {
        let mut node = self.node.borrow_mut();
        if !node.classes.iter().any(|c| c == tag) {
            node.classes.push(tag.to_string());
        }
    }

    fn remove_class(&self, tag: &str) {
        self.node.borrow_mut().classes.retain(|c| c != tag);
    }

    fn has_class(&self, tag: &str) -> bool {
        self.node.borrow().classes.iter().any(|c| c == tag)
    }

    fn set_style_property(&self, name: &str, value: &str) {
        self.node
            .borrow_mut()
            .style
            .insert(name.to_string(), value.to_string());
    }

    fn set_text(&self, text: &str) {
        self.node.borrow_mut().text = text.to_string();
    }

    fn reflow(&self) {
        self.node.borrow_mut().reflows += 1;
    }
}

/// Ordered element tree stand-in with id and class lookup.
#[derive(Clone, Debug, Default)]
pub struct MemoryPage {
    nodes: Rc<RefCell<Vec<MemoryElement>>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with every element id and `cards` card elements the coordinator expects.
    pub fn with_ids(ids: &[&str], cards: usize) -> Self {
        let page = Self::new();
        for id in ids {
            page.insert(id);
        }
        for _ in 0..cards {
            page.insert_with_class(None, crate::constants::CARD_CLASS);
        }
        page
    }

    pub fn insert(&self, id: &str) -> MemoryElement {
        self.push(NodeState {
            id: Some(id.to_string()),
            ..NodeState::default()
        })
    }

    pub fn insert_with_class(&self, id: Option<&str>, class: &str) -> MemoryElement {
        let mut classes = SmallVec::new();
        classes.push(class.to_string());
        self.push(NodeState {
            id: id.map(str::to_string),
            classes,
            ..NodeState::default()
        })
    }

    /// Detach the element with `id`; returns whether one was present.
    pub fn remove(&self, id: &str) -> bool {
        let mut nodes = self.nodes.borrow_mut();
        let before = nodes.len();
        nodes.retain(|n| n.node.borrow().id.as_deref() != Some(id));
        nodes.len() != before
    }

    fn push(&self, state: NodeState) -> MemoryElement {
        let el = MemoryElement {
            node: Rc::new(RefCell::new(state)),
        };
        self.nodes.borrow_mut().push(el.clone());
        el
    }
}

impl Page for MemoryPage {
    type Element = MemoryElement;

    fn find_element(&self, id: &str) -> Option<MemoryElement> {
        self.nodes
            .borrow()
            .iter()
            .find(|n| n.node.borrow().id.as_deref() == Some(id))
            .cloned()
    }

    fn elements_by_class(&self, class: &str) -> Vec<MemoryElement> {
        self.nodes
            .borrow()
            .iter()
            .filter(|n| n.has_class(class))
            .cloned()
            .collect()
    }
}

enum TaskFn {
    Once(OnceCallback),
    Repeat(RepeatCallback),
}

struct Task {
    handle: TimerHandle,
    due_ms: u64,
    period_ms: u64,
    callback: TaskFn,
}

#[derive(Default)]
struct ClockState {
    now_ms: u64,
    next_id: i32,
    tasks: Vec<Task>,
    running: Option<TimerHandle>,
    running_cancelled: bool,
}

impl ClockState {
    fn schedule(&mut self, delay: Duration, period_ms: u64, callback: TaskFn) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.tasks.push(Task {
            handle,
            due_ms: self.now_ms + delay.as_millis() as u64,
            period_ms,
            callback,
        });
        handle
    }
}

/// Simulated clock: callbacks fire only inside [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ClockState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        Duration::from_millis(self.state.borrow().now_ms)
    }

    /// Timers still waiting to fire (repeating ones count once).
    pub fn pending(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    /// Move the clock forward, firing due callbacks in deadline order.
    pub fn advance(&self, delta: Duration) {
        let target = self.state.borrow().now_ms + delta.as_millis() as u64;
        loop {
            let task = {
                let mut st = self.state.borrow_mut();
                let next = st
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.handle.0))
                    .map(|(i, _)| i);
                let Some(i) = next else {
                    st.now_ms = target;
                    break;
                };
                let task = st.tasks.remove(i);
                st.now_ms = task.due_ms;
                st.running = Some(task.handle);
                st.running_cancelled = false;
                task
            };
            // No borrow held while user code runs; callbacks may schedule or cancel.
            let Task {
                handle,
                due_ms,
                period_ms,
                callback,
            } = task;
            match callback {
                TaskFn::Once(f) => {
                    f();
                    self.state.borrow_mut().running = None;
                }
                TaskFn::Repeat(mut f) => {
                    f();
                    let mut st = self.state.borrow_mut();
                    st.running = None;
                    if !st.running_cancelled {
                        st.tasks.push(Task {
                            handle,
                            due_ms: due_ms + period_ms,
                            period_ms,
                            callback: TaskFn::Repeat(f),
                        });
                    }
                }
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn set_interval(
        &self,
        period: Duration,
        callback: RepeatCallback,
    ) -> Result<TimerHandle, UiError> {
        let period_ms = (period.as_millis() as u64).max(1);
        Ok(self
            .state
            .borrow_mut()
            .schedule(Duration::from_millis(period_ms), period_ms, TaskFn::Repeat(callback)))
    }

    fn set_timeout(&self, delay: Duration, callback: OnceCallback) -> Result<TimerHandle, UiError> {
        Ok(self
            .state
            .borrow_mut()
            .schedule(delay, 0, TaskFn::Once(callback)))
    }

    fn cancel(&self, handle: TimerHandle) {
        let mut st = self.state.borrow_mut();
        st.tasks.retain(|t| t.handle != handle);
        if st.running == Some(handle) {
            st.running_cancelled = true;
        }
    }
}
