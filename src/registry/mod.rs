//! Lazy memoization caches for the three definition kinds.
//!
//! Each cache loads a definition at most once per key and keeps it for
//! the process lifetime: no eviction, no invalidation. Failed loads
//! leave the cache untouched, so a later resolution hits the source
//! again.

pub mod source;

use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::config::Conventions;
use crate::definition::{Controller, Model, View};
use crate::error::DispatchError;
use source::DefinitionSource;

/// The three definition caches plus the path conventions they key by.
pub(crate) struct Registry<W> {
    conventions: Conventions,
    controllers: HashMap<String, Rc<Controller<W>>>,
    views: HashMap<String, HashMap<String, Rc<View<W>>>>,
    models: HashMap<String, Rc<Model>>,
}

impl<W> Registry<W> {
    pub fn new(conventions: Conventions) -> Self {
        Self {
            conventions,
            controllers: HashMap::new(),
            views: HashMap::new(),
            models: HashMap::new(),
        }
    }

    pub fn conventions(&self) -> &Conventions {
        &self.conventions
    }

    /// Fetch a controller, loading it on first reference.
    pub fn controller(
        &mut self,
        source: &dyn DefinitionSource<W>,
        id: &str,
    ) -> Result<Rc<Controller<W>>, DispatchError> {
        if let Some(cached) = self.controllers.get(id) {
            trace!(controller = %id, "controller cache hit");
            return Ok(Rc::clone(cached));
        }
        let path = self.conventions.controller_path(id);
        debug!(controller = %id, path = %path, "loading controller");
        let loaded = source
            .load_controller(&path)
            .map_err(|source| DispatchError::ParseFailure {
                path: path.clone(),
                source,
            })?
            .ok_or_else(|| DispatchError::ControllerNotFound {
                id: id.to_string(),
                path,
            })?;
        let definition = Rc::new(loaded);
        self.controllers.insert(id.to_string(), Rc::clone(&definition));
        Ok(definition)
    }

    /// Fetch a view by composite `(controller, view)` key, loading it
    /// on first reference.
    pub fn view(
        &mut self,
        source: &dyn DefinitionSource<W>,
        controller_id: &str,
        view_id: &str,
    ) -> Result<Rc<View<W>>, DispatchError> {
        if let Some(cached) = self
            .views
            .get(controller_id)
            .and_then(|per_controller| per_controller.get(view_id))
        {
            trace!(controller = %controller_id, view = %view_id, "view cache hit");
            return Ok(Rc::clone(cached));
        }
        let path = self.conventions.view_path(controller_id, view_id);
        debug!(controller = %controller_id, view = %view_id, path = %path, "loading view");
        let loaded = source
            .load_view(&path)
            .map_err(|source| DispatchError::ParseFailure {
                path: path.clone(),
                source,
            })?
            .ok_or_else(|| DispatchError::ViewNotFound {
                controller: controller_id.to_string(),
                view: view_id.to_string(),
                path,
            })?;
        let definition = Rc::new(loaded);
        self.views
            .entry(controller_id.to_string())
            .or_default()
            .insert(view_id.to_string(), Rc::clone(&definition));
        Ok(definition)
    }

    /// Fetch a model, loading it on first reference.
    pub fn model(
        &mut self,
        source: &dyn DefinitionSource<W>,
        id: &str,
    ) -> Result<Rc<Model>, DispatchError> {
        if let Some(cached) = self.models.get(id) {
            trace!(model = %id, "model cache hit");
            return Ok(Rc::clone(cached));
        }
        let path = self.conventions.model_path(id);
        debug!(model = %id, path = %path, "loading model");
        let loaded = source
            .load_model(&path)
            .map_err(|source| DispatchError::ParseFailure {
                path: path.clone(),
                source,
            })?
            .ok_or_else(|| DispatchError::ModelNotFound {
                id: id.to_string(),
                path,
            })?;
        let definition = Rc::new(loaded);
        self.models.insert(id.to_string(), Rc::clone(&definition));
        Ok(definition)
    }
}
