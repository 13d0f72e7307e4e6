//! Shared test fixtures: a sample application source, a recording
//! source wrapper, and a stand-in widget type.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;
use tailfin::{
    Controller, DefinitionSource, Dispatcher, Model, SourceError, StaticSource, View,
};

/// Minimal stand-in for a host toolkit widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Window { title: String, children: Vec<Widget> },
    Table(Vec<Widget>),
    Label(String),
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The sample app: a `home` controller with `list`/`detail` actions, a
/// `shared` view namespace rendered from inside the list view, and a
/// controller whose only action fails.
pub fn sample_source() -> StaticSource<Widget> {
    StaticSource::new()
        .controller("/controllers/home", || {
            Controller::new()
                .action("list", |mvc, _args| {
                    let model = mvc.model("contacts")?;
                    mvc.view_with(model)
                })
                .action("detail", |mvc, args| {
                    let name = args
                        .first()
                        .and_then(|arg| arg.as_str())
                        .unwrap_or("unknown")
                        .to_string();
                    mvc.view_with(json!({ "name": name }))
                })
        })
        .controller("/controllers/broken", || {
            Controller::new().action("boom", |_mvc, _args| {
                Err(anyhow::anyhow!("database unavailable").into())
            })
        })
        .view("/views/home/list", || {
            View::computed(|mvc, model| {
                let mut rows = Vec::new();
                if let Some(items) = model["items"].as_array() {
                    for item in items {
                        rows.push(mvc.named_view_with("shared/row", item.clone())?);
                    }
                }
                Ok(Widget::Window {
                    title: "Contacts".to_string(),
                    children: vec![Widget::Table(rows)],
                })
            })
        })
        .view("/views/home/detail", || {
            View::computed(|_mvc, model| {
                Ok(Widget::Label(format!(
                    "detail: {}",
                    model["name"].as_str().unwrap_or("")
                )))
            })
        })
        .view("/views/shared/row", || {
            View::computed(|_mvc, model| {
                Ok(Widget::Label(model["name"].as_str().unwrap_or("").to_string()))
            })
        })
        .view("/views/shared/banner", || {
            View::Static(Widget::Label("banner".to_string()))
        })
        .model("/models/contacts", || {
            Model::computed(|| json!({ "items": [{ "name": "ada" }, { "name": "grace" }] }))
        })
        .model("/models/greeting", || Model::Static(json!({ "text": "hello" })))
}

pub fn sample_app() -> Dispatcher<Widget> {
    init_tracing();
    Dispatcher::new(sample_source())
}

/// Wraps a source and records every path handed to it, one entry per
/// load attempt.
pub struct RecordingSource<W> {
    inner: StaticSource<W>,
    loads: Rc<RefCell<Vec<String>>>,
}

impl<W> RecordingSource<W> {
    pub fn new(inner: StaticSource<W>) -> Self {
        Self {
            inner,
            loads: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Handle onto the load log; stays valid after the source moves
    /// into a dispatcher.
    pub fn loads(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.loads)
    }
}

/// Number of load attempts recorded for `path`.
pub fn load_count(loads: &Rc<RefCell<Vec<String>>>, path: &str) -> usize {
    loads.borrow().iter().filter(|entry| *entry == path).count()
}

impl<W> DefinitionSource<W> for RecordingSource<W> {
    fn load_controller(&self, path: &str) -> Result<Option<Controller<W>>, SourceError> {
        self.loads.borrow_mut().push(path.to_string());
        self.inner.load_controller(path)
    }

    fn load_view(&self, path: &str) -> Result<Option<View<W>>, SourceError> {
        self.loads.borrow_mut().push(path.to_string());
        self.inner.load_view(path)
    }

    fn load_model(&self, path: &str) -> Result<Option<Model>, SourceError> {
        self.loads.borrow_mut().push(path.to_string());
        self.inner.load_model(path)
    }
}

/// A source whose every load fails, standing in for a host whose
/// inclusion primitive throws.
pub struct FailingSource;

impl DefinitionSource<Widget> for FailingSource {
    fn load_controller(&self, path: &str) -> Result<Option<Controller<Widget>>, SourceError> {
        Err(SourceError::new(format!("syntax error in {path}")))
    }

    fn load_view(&self, path: &str) -> Result<Option<View<Widget>>, SourceError> {
        Err(SourceError::new(format!("syntax error in {path}")))
    }

    fn load_model(&self, path: &str) -> Result<Option<Model>, SourceError> {
        Err(SourceError::new(format!("syntax error in {path}")))
    }
}
