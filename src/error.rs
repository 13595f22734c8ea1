/// Errors surfaced by coordinator operations.
///
/// Every variant is reported to the status region before it is returned, so
/// callers wired to UI events can usually ignore the `Err` value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    #[error("Element with id '{0}' not found")]
    ElementNotFound(String),

    #[error("Unknown animation '{0}'")]
    UnknownAnimation(String),

    #[error("Failed to schedule timer: {0}")]
    Schedule(String),
}
