//! Error types for state machine declaration and execution.

use crate::core::StateId;
use thiserror::Error;

/// Errors raised while declaring a state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateDeclarationError {
    #[error("state {id} already exists")]
    AlreadyExists { id: StateId },

    #[error("state id not specified. Call .id(id) before .build()")]
    MissingId,

    #[error("entry action not specified. Call .on_entry(action) before .build()")]
    MissingEntryAction,
}

/// Errors raised while declaring a transition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionDeclarationError {
    #[error("transition origin not specified. Call .from(id)")]
    MissingOrigin,

    #[error("transition destination not specified. Call .to(id)")]
    MissingDestination,

    #[error("transition guard not specified. Call .when(predicate) or .guard(guard)")]
    MissingGuard,
}

/// Errors raised when the machine is driven out of order.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("machine already started")]
    AlreadyStarted,

    #[error("machine not started. Call start() before send()")]
    NotStarted,
}

/// Coarse classification of [`FsmError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    StateDeclaration,
    TransitionDeclaration,
    NotFound,
    Lifecycle,
}

/// Errors from the state machine engine.
///
/// Every failing operation leaves the registry and the current-state cursor
/// exactly as they were before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("state declaration error: {0}")]
    StateDeclaration(#[from] StateDeclarationError),

    #[error("transition declaration error: {0}")]
    TransitionDeclaration(#[from] TransitionDeclarationError),

    #[error("state {id} not found")]
    NotFound { id: StateId },

    #[error("lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),
}

impl FsmError {
    /// Returns the kind of failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FsmError::StateDeclaration(_) => ErrorKind::StateDeclaration,
            FsmError::TransitionDeclaration(_) => ErrorKind::TransitionDeclaration,
            FsmError::NotFound { .. } => ErrorKind::NotFound,
            FsmError::Lifecycle(_) => ErrorKind::Lifecycle,
        }
    }

    /// Returns a stable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            FsmError::StateDeclaration(StateDeclarationError::AlreadyExists { .. }) => {
                "STATE_EXISTS"
            }
            FsmError::StateDeclaration(_) => "BAD_STATE_DECLARATION",
            FsmError::TransitionDeclaration(_) => "BAD_TRANSITION_DECLARATION",
            FsmError::NotFound { .. } => "STATE_NOT_FOUND",
            FsmError::Lifecycle(LifecycleError::AlreadyStarted) => "ALREADY_STARTED",
            FsmError::Lifecycle(LifecycleError::NotStarted) => "NOT_STARTED",
        }
    }
}
