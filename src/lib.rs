//! Light, dynamic MVC convention layer for host GUI runtimes.
//!
//! Resolves string routes (`"controller/action"`) to lazily loaded
//! controller definitions, invokes actions with arguments, and
//! resolves named views merged with model data into widgets owned by
//! the host toolkit. The core never inspects widgets; it is dispatch
//! and lookup glue.
//!
//! # Architecture
//!
//! ```text
//! invoke(url) ──→ route ──→ registry ──→ action ──→ view ──→ W
//!                              │                       │
//!                      DefinitionSource           CallContext
//! ```
//!
//! - Routes are `"home"` or `"home/list"`; a bare controller
//!   dispatches to its declared default action, else the first
//!   declared one.
//! - Definitions load at most once per key and live for the process
//!   lifetime.
//! - Every nested action or view call pushes a context frame and pops
//!   it on both exit paths, so callers never observe a leaked route.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tailfin::{Controller, Dispatcher, Model, StaticSource, View};
//!
//! let source = StaticSource::new()
//!     .controller("/controllers/home", || {
//!         Controller::new().action("list", |mvc, _args| {
//!             let model = mvc.model("greeting")?;
//!             mvc.view_with(model)
//!         })
//!     })
//!     .view("/views/home/list", || {
//!         View::computed(|_mvc, model| {
//!             Ok(format!("list: {}", model["text"].as_str().unwrap_or_default()))
//!         })
//!     })
//!     .model("/models/greeting", || Model::Static(json!({ "text": "hi" })));
//!
//! let mut app = Dispatcher::new(source);
//! let widget = app.invoke("home", &[]).unwrap();
//! assert_eq!(widget, "list: hi");
//! ```

pub mod config;
pub mod context;
pub mod definition;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod route;

pub use config::{ConfigError, Conventions};
pub use context::{CallContext, Frame};
pub use definition::{ActionFn, Controller, Model, View, ViewFn};
pub use dispatch::Dispatcher;
pub use error::DispatchError;
pub use registry::source::{DefinitionSource, SourceError, StaticSource};
pub use route::{Route, RouteError};
