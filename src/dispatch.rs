//! The dispatcher: route invocation, action calls, view and model
//! resolution.
//!
//! All entry points take `&mut self` and run synchronously on the
//! caller's thread. Nested calls re-enter through the handle passed to
//! actions and computed views, so a view can render sub-views and an
//! action can chain sibling actions while the context stack tracks the
//! ambient route.

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::Conventions;
use crate::context::{CallContext, Frame};
use crate::definition::{Model, View};
use crate::error::DispatchError;
use crate::registry::source::DefinitionSource;
use crate::registry::Registry;
use crate::route::{self, Route};

/// One application instance: owns the definition source, the three
/// definition caches, and the call-context stack. Instances are fully
/// independent; nothing is shared process-wide.
pub struct Dispatcher<W> {
    source: Box<dyn DefinitionSource<W>>,
    registry: Registry<W>,
    context: CallContext,
}

impl<W> std::fmt::Debug for Dispatcher<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl<W: Clone + 'static> Dispatcher<W> {
    /// Create a dispatcher with the default path conventions.
    pub fn new(source: impl DefinitionSource<W> + 'static) -> Self {
        Self::with_conventions(source, Conventions::default())
    }

    /// Create a dispatcher with explicit conventions.
    pub fn with_conventions(
        source: impl DefinitionSource<W> + 'static,
        conventions: Conventions,
    ) -> Self {
        Self {
            source: Box::new(source),
            registry: Registry::new(conventions),
            context: CallContext::default(),
        }
    }

    /// The active call-context stack.
    pub fn context(&self) -> &CallContext {
        &self.context
    }

    /// Invoke a route from outside any dispatch.
    ///
    /// A bare controller URL (`"home"`) dispatches to the controller's
    /// declared default action, else its first declared action.
    pub fn invoke(&mut self, url: &str, args: &[Value]) -> Result<W, DispatchError> {
        let target = route::resolve_top_level(url)?;
        let controller = self.registry.controller(self.source.as_ref(), &target.controller)?;
        let action = match target.action {
            Some(action) => action,
            None => controller
                .resolve_default()
                .ok_or_else(|| DispatchError::NoActions {
                    controller: target.controller.clone(),
                })?
                .to_string(),
        };
        debug!(controller = %target.controller, action = %action, "invoking route");
        self.call_action(&format!("{}/{}", target.controller, action), args)
    }

    /// Invoke the route configured as `default_route`.
    pub fn invoke_default(&mut self, args: &[Value]) -> Result<W, DispatchError> {
        let url = self
            .registry
            .conventions()
            .default_route
            .clone()
            .ok_or(DispatchError::NoDefaultRoute)?;
        self.invoke(&url, args)
    }

    /// Call an action by URL.
    ///
    /// A single-segment URL names an action on the currently executing
    /// controller; a two-segment URL is explicit. The action's result
    /// (or its error) is returned unchanged after the caller's context
    /// frame is restored.
    pub fn call_action(&mut self, url: &str, args: &[Value]) -> Result<W, DispatchError> {
        let current = self.context.current().map(|frame| frame.controller.clone());
        let Route {
            controller: controller_id,
            action: action_id,
        } = route::resolve_nested(url, current.as_deref())?;

        let controller = self.registry.controller(self.source.as_ref(), &controller_id)?;
        let action = match controller.get(&action_id) {
            Some(action) => action,
            None => {
                return Err(DispatchError::ActionNotFound {
                    controller: controller_id,
                    action: action_id,
                })
            }
        };

        self.context.push(Frame {
            controller: controller_id,
            action: action_id,
        });
        let result = action(self, args);
        self.context.pop();
        result
    }

    /// Resolve the view named after the current action, with an empty
    /// model.
    pub fn view(&mut self) -> Result<W, DispatchError> {
        self.resolve_view(None, None)
    }

    /// Resolve the view named after the current action, passing
    /// `model`.
    pub fn view_with(&mut self, model: Value) -> Result<W, DispatchError> {
        self.resolve_view(None, Some(model))
    }

    /// Resolve a named view with an empty model.
    ///
    /// A `/` in the name switches the controller namespace for this
    /// lookup only: `"shared/row"` loads view `row` under namespace
    /// `shared`; everything after the first `/` is the view id.
    pub fn named_view(&mut self, name: &str) -> Result<W, DispatchError> {
        self.resolve_view(Some(name), None)
    }

    /// Resolve a named view, passing `model`.
    pub fn named_view_with(&mut self, name: &str, model: Value) -> Result<W, DispatchError> {
        self.resolve_view(Some(name), Some(model))
    }

    fn resolve_view(
        &mut self,
        name: Option<&str>,
        model: Option<Value>,
    ) -> Result<W, DispatchError> {
        let frame = self
            .context
            .current()
            .cloned()
            .ok_or(DispatchError::InvalidCallContext)?;
        let (controller_id, view_id) = match name {
            None => (frame.controller.clone(), frame.action.clone()),
            Some(name) => match name.split_once('/') {
                None => (frame.controller.clone(), name.to_string()),
                Some((namespace, rest)) => (namespace.to_string(), rest.to_string()),
            },
        };

        let view = self
            .registry
            .view(self.source.as_ref(), &controller_id, &view_id)?;
        debug!(controller = %controller_id, view = %view_id, "resolving view");

        // The view runs under the (possibly switched) namespace; the
        // action id stays the caller's.
        self.context.push(Frame {
            controller: controller_id,
            action: frame.action,
        });
        let result = match view.as_ref() {
            View::Static(widget) => Ok(widget.clone()),
            View::Computed(render) => render(self, model.unwrap_or_else(empty_model)),
        };
        self.context.pop();
        result
    }

    /// Resolve a model definition, producing its data. No context is
    /// required or touched.
    pub fn model(&mut self, id: &str) -> Result<Value, DispatchError> {
        let definition = self.registry.model(self.source.as_ref(), id)?;
        Ok(match definition.as_ref() {
            Model::Static(value) => value.clone(),
            Model::Computed(produce) => produce(),
        })
    }
}

fn empty_model() -> Value {
    Value::Object(Map::new())
}
