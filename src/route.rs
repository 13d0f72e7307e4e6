//! Route tokenization and resolution.
//!
//! Two deliberately distinct rules share one tokenizer. Top-level
//! invocation ([`resolve_top_level`]) treats a single segment as a
//! controller id and leaves the action to the controller's declared
//! default. Nested action calls ([`resolve_nested`]) treat a single
//! segment as an action id on the currently executing controller.
//! The asymmetry mirrors how applications actually write routes:
//! entry points name screens, actions name siblings.

use thiserror::Error;

/// Errors produced while resolving a route string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// Empty URL, empty segment, or more than two segments.
    #[error("invalid route '{url}': expected 'controller' or 'controller/action'")]
    Malformed { url: String },

    /// A bare action id was used while no dispatch was active, so
    /// there is no controller to inherit.
    #[error("route names only an action and no call is active")]
    NoActiveContext,
}

/// A fully resolved `(controller, action)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub controller: String,
    pub action: String,
}

/// Outcome of top-level resolution. `action` is `None` when the URL
/// named only a controller; the dispatcher then applies the
/// default-or-first-declared rule after loading the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TopLevelRoute {
    pub controller: String,
    pub action: Option<String>,
}

fn split(url: &str) -> Result<Vec<&str>, RouteError> {
    let segments: Vec<&str> = url.split('/').collect();
    if segments.len() > 2 || segments.iter().any(|s| s.is_empty()) {
        return Err(RouteError::Malformed {
            url: url.to_string(),
        });
    }
    Ok(segments)
}

/// Resolve a URL arriving from outside any dispatch.
pub(crate) fn resolve_top_level(url: &str) -> Result<TopLevelRoute, RouteError> {
    let segments = split(url)?;
    match segments.as_slice() {
        [controller] => Ok(TopLevelRoute {
            controller: (*controller).to_string(),
            action: None,
        }),
        [controller, action] => Ok(TopLevelRoute {
            controller: (*controller).to_string(),
            action: Some((*action).to_string()),
        }),
        _ => Err(RouteError::Malformed {
            url: url.to_string(),
        }),
    }
}

/// Resolve a URL used for an action call, inheriting the controller
/// from `current_controller` when the URL names only an action.
pub(crate) fn resolve_nested(
    url: &str,
    current_controller: Option<&str>,
) -> Result<Route, RouteError> {
    let segments = split(url)?;
    match segments.as_slice() {
        [action] => {
            let controller = current_controller.ok_or(RouteError::NoActiveContext)?;
            Ok(Route {
                controller: controller.to_string(),
                action: (*action).to_string(),
            })
        }
        [controller, action] => Ok(Route {
            controller: (*controller).to_string(),
            action: (*action).to_string(),
        }),
        _ => Err(RouteError::Malformed {
            url: url.to_string(),
        }),
    }
}
