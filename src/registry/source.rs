//! The definition-loading seam between the dispatch core and the host.
//!
//! The registry computes conventional paths and asks a
//! [`DefinitionSource`] for the definition behind each one. Sources
//! return the definition by value; there is no shared binding slot to
//! snapshot or restore, so loads cannot leak into one another.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::definition::{Controller, Model, View};

/// Error raised by a source while producing a definition, the analog
/// of a read or parse failure in a file-backed host.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Supplies definitions for convention-derived paths.
///
/// `Ok(None)` means nothing lives at the path; the registry turns that
/// into the matching not-found error. `Err` means the source found the
/// path but failed to produce a definition from it.
///
/// Each method is called at most once per distinct path over the
/// process lifetime, except failed calls, which are retried on the
/// next resolution.
pub trait DefinitionSource<W> {
    fn load_controller(&self, path: &str) -> Result<Option<Controller<W>>, SourceError>;
    fn load_view(&self, path: &str) -> Result<Option<View<W>>, SourceError>;
    fn load_model(&self, path: &str) -> Result<Option<Model>, SourceError>;
}

type ControllerFactory<W> = Box<dyn Fn() -> Controller<W>>;
type ViewFactory<W> = Box<dyn Fn() -> View<W>>;
type ModelFactory = Box<dyn Fn() -> Model>;

/// In-memory source: the application registers a factory per path at
/// startup, keeping the on-disk layout contract (`/controllers/{id}`,
/// `/views/{controller}/{view}`, `/models/{id}`) as a key convention.
pub struct StaticSource<W> {
    controllers: HashMap<String, ControllerFactory<W>>,
    views: HashMap<String, ViewFactory<W>>,
    models: HashMap<String, ModelFactory>,
}

impl<W> StaticSource<W> {
    pub fn new() -> Self {
        Self {
            controllers: HashMap::new(),
            views: HashMap::new(),
            models: HashMap::new(),
        }
    }

    /// Register a controller factory under a path.
    pub fn controller<F>(mut self, path: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Controller<W> + 'static,
    {
        self.controllers.insert(path.into(), Box::new(factory));
        self
    }

    /// Register a view factory under a path.
    pub fn view<F>(mut self, path: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> View<W> + 'static,
    {
        self.views.insert(path.into(), Box::new(factory));
        self
    }

    /// Register a model factory under a path.
    pub fn model<F>(mut self, path: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Model + 'static,
    {
        self.models.insert(path.into(), Box::new(factory));
        self
    }
}

impl<W> Default for StaticSource<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> fmt::Debug for StaticSource<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticSource")
            .field("controllers", &self.controllers.keys().collect::<Vec<_>>())
            .field("views", &self.views.keys().collect::<Vec<_>>())
            .field("models", &self.models.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<W> DefinitionSource<W> for StaticSource<W> {
    fn load_controller(&self, path: &str) -> Result<Option<Controller<W>>, SourceError> {
        Ok(self.controllers.get(path).map(|factory| factory()))
    }

    fn load_view(&self, path: &str) -> Result<Option<View<W>>, SourceError> {
        Ok(self.views.get(path).map(|factory| factory()))
    }

    fn load_model(&self, path: &str) -> Result<Option<Model>, SourceError> {
        Ok(self.models.get(path).map(|factory| factory()))
    }
}
