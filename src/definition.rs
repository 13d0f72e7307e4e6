//! Controller, view, and model definitions.
//!
//! `W` is the host toolkit's widget type. The core never inspects
//! widgets; it only passes them through from views and actions back to
//! the caller.

use std::fmt;

use serde_json::Value;

use crate::dispatch::Dispatcher;
use crate::error::DispatchError;

/// Boxed action callable. Actions receive the dispatcher handle for
/// nested view/action/model resolution, plus the caller's arguments.
pub type ActionFn<W> = Box<dyn Fn(&mut Dispatcher<W>, &[Value]) -> Result<W, DispatchError>>;

/// Boxed computed-view callable.
pub type ViewFn<W> = Box<dyn Fn(&mut Dispatcher<W>, Value) -> Result<W, DispatchError>>;

/// A controller: declaration-ordered actions plus an optional default.
pub struct Controller<W> {
    actions: Vec<(String, ActionFn<W>)>,
    default_action: Option<String>,
}

impl<W> Controller<W> {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            default_action: None,
        }
    }

    /// Declare an action. Declaration order matters: the first
    /// declared action is the fallback when no default is set.
    pub fn action<F>(mut self, name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&mut Dispatcher<W>, &[Value]) -> Result<W, DispatchError> + 'static,
    {
        self.actions.push((name.into(), Box::new(action)));
        self
    }

    /// Set the action dispatched when a route names only this
    /// controller.
    pub fn default_action(mut self, name: impl Into<String>) -> Self {
        self.default_action = Some(name.into());
        self
    }

    /// Look up an action by name.
    pub fn get(&self, name: &str) -> Option<&ActionFn<W>> {
        self.actions
            .iter()
            .find(|(declared, _)| declared == name)
            .map(|(_, action)| action)
    }

    /// The id dispatched for a bare controller route: the declared
    /// default, else the first declared action.
    pub fn resolve_default(&self) -> Option<&str> {
        self.default_action
            .as_deref()
            .or_else(|| self.actions.first().map(|(name, _)| name.as_str()))
    }

    /// Declared action names, in declaration order.
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|(name, _)| name.as_str())
    }
}

impl<W> Default for Controller<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> fmt::Debug for Controller<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("actions", &self.action_names().collect::<Vec<_>>())
            .field("default_action", &self.default_action)
            .finish()
    }
}

/// A view definition: a ready-made widget or a function of the model.
pub enum View<W> {
    /// Returned by clone on every resolution.
    Static(W),
    /// Invoked with the dispatcher handle and the model payload.
    Computed(ViewFn<W>),
}

impl<W> View<W> {
    /// Build a computed view from a closure.
    pub fn computed<F>(render: F) -> Self
    where
        F: Fn(&mut Dispatcher<W>, Value) -> Result<W, DispatchError> + 'static,
    {
        Self::Computed(Box::new(render))
    }
}

impl<W> fmt::Debug for View<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(_) => f.write_str("View::Static(..)"),
            Self::Computed(_) => f.write_str("View::Computed(..)"),
        }
    }
}

/// A model definition: static data or a producer invoked per
/// resolution.
pub enum Model {
    Static(Value),
    Computed(Box<dyn Fn() -> Value>),
}

impl Model {
    /// Build a computed model from a closure.
    pub fn computed<F>(produce: F) -> Self
    where
        F: Fn() -> Value + 'static,
    {
        Self::Computed(Box::new(produce))
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Model::Static").field(value).finish(),
            Self::Computed(_) => f.write_str("Model::Computed(..)"),
        }
    }
}
