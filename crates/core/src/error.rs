//! Error model.

use thiserror::Error;

/// Result type used across the workspace.
pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// Lifecycle-level error.
///
/// The value operations themselves are total. These errors only come from the
/// layers around them: named bindings and event delivery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// A scope already declares a binding with this name.
    #[error("binding already declared: {0}")]
    DuplicateBinding(String),

    /// A binding (by handle or name) is not owned by the scope.
    #[error("unknown binding: {0}")]
    UnknownBinding(String),

    /// An observer could not accept an event.
    #[error("observer unavailable: {0}")]
    ObserverUnavailable(String),
}

impl LifecycleError {
    pub fn duplicate_binding(name: impl Into<String>) -> Self {
        Self::DuplicateBinding(name.into())
    }

    pub fn unknown_binding(name: impl Into<String>) -> Self {
        Self::UnknownBinding(name.into())
    }

    pub fn observer_unavailable(reason: impl Into<String>) -> Self {
        Self::ObserverUnavailable(reason.into())
    }
}
