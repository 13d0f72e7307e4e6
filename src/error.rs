//! Crate-wide error taxonomy for dispatch and definition loading.
//!
//! Everything here is synchronous and surfaced to the immediate
//! caller; nothing is retried internally. Loading failures carry the
//! attempted path so misplaced definitions are diagnosable.

use thiserror::Error;

use crate::registry::source::SourceError;
use crate::route::RouteError;

/// Errors surfaced by [`crate::Dispatcher`] entry points.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The URL was not `"controller"` or `"controller/action"`.
    #[error("invalid route '{url}': expected 'controller' or 'controller/action'")]
    InvalidRoute { url: String },

    /// The definition source failed while producing a definition.
    #[error("failed to load definition at '{path}'")]
    ParseFailure {
        path: String,
        #[source]
        source: SourceError,
    },

    /// No controller definition exists at the conventional path.
    #[error("controller '{id}' not found (looked at '{path}')")]
    ControllerNotFound { id: String, path: String },

    /// The controller exists but declares no such action.
    #[error("no action '{action}' in controller '{controller}'")]
    ActionNotFound { controller: String, action: String },

    /// No view definition exists at the conventional path.
    #[error("no view '{view}' under controller '{controller}' (looked at '{path}')")]
    ViewNotFound {
        controller: String,
        view: String,
        path: String,
    },

    /// No model definition exists at the conventional path.
    #[error("model '{id}' not found (looked at '{path}')")]
    ModelNotFound { id: String, path: String },

    /// A bare controller route was invoked on a controller that
    /// declares no actions and no default.
    #[error("controller '{controller}' declares no actions")]
    NoActions { controller: String },

    /// A view or unqualified action was resolved while no dispatch
    /// was active.
    #[error("view or action resolved outside of any dispatched call")]
    InvalidCallContext,

    /// `invoke_default` was called without a configured default route.
    #[error("no default route configured")]
    NoDefaultRoute,

    /// Application-level failure raised from inside an action or view.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RouteError> for DispatchError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::Malformed { url } => Self::InvalidRoute { url },
            RouteError::NoActiveContext => Self::InvalidCallContext,
        }
    }
}
