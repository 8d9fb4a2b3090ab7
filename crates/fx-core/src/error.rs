use thiserror::Error;

/// Failures that can surface from the pure effect state machines.
///
/// None of these are fatal for the page: the web layer logs them and leaves
/// the affected effect inactive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("typed-text role list is empty")]
    EmptyRoles,
    #[error("typed-text role {0} is an empty string")]
    EmptyRole(usize),
    #[error("counter target {0:?} is not an integer")]
    InvalidCount(String),
}
