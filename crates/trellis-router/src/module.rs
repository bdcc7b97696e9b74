// File: src/module.rs
// Purpose: Shapes of the lazily imported page, layout and view modules

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use maud::{html, Markup};
use serde_json::Value;

/// A renderable view component
///
/// Closures `Fn(&Value) -> Markup` implement this, receiving the route's loader data.
pub trait View: Send + Sync {
    fn render(&self, data: &Value) -> Markup;
}

impl<F> View for F
where
    F: Fn(&Value) -> Markup + Send + Sync,
{
    fn render(&self, data: &Value) -> Markup {
        self(data)
    }
}

/// Shared handle to a view component
pub type Component = Arc<dyn View>;

/// Arguments handed to data loaders and action handlers
#[derive(Debug, Clone, Default)]
pub struct RouteArgs {
    /// Matched dynamic parameters (`id` for `[id]`)
    pub params: HashMap<String, String>,
    /// Requested URL
    pub url: String,
    /// Submitted body for actions
    pub payload: Option<Value>,
}

/// Fetches data for a route before it renders
pub type DataLoader = Arc<dyn Fn(RouteArgs) -> BoxFuture<'static, anyhow::Result<Value>> + Send + Sync>;

/// Handles a mutation submitted to a route
pub type ActionHandler = DataLoader;

/// Wraps every resolved data loader exactly once before it is stored
pub type Middleware = Arc<dyn Fn(DataLoader) -> DataLoader + Send + Sync>;

/// Exports of a page or layout module
#[derive(Clone)]
pub struct PageModule {
    pub component: Component,
    pub loader: Option<DataLoader>,
    pub action: Option<ActionHandler>,
}

/// Exports of a loading, error or not-found module
#[derive(Clone)]
pub struct ViewModule {
    pub component: Component,
}

/// Lazily imports a page or layout module
pub type PageImporter = Arc<dyn Fn() -> BoxFuture<'static, anyhow::Result<PageModule>> + Send + Sync>;

/// Lazily imports a loading, error or not-found module
pub type ViewImporter = Arc<dyn Fn() -> BoxFuture<'static, anyhow::Result<ViewModule>> + Send + Sync>;

impl PageModule {
    /// A module exporting only a component
    pub fn new(component: Component) -> Self {
        Self {
            component,
            loader: None,
            action: None,
        }
    }

    pub fn with_loader(mut self, loader: DataLoader) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn with_action(mut self, action: ActionHandler) -> Self {
        self.action = Some(action);
        self
    }

    /// Component that renders its label; used by tooling that never runs real modules
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new(placeholder_component(label.into()))
    }
}

impl ViewModule {
    pub fn new(component: Component) -> Self {
        Self { component }
    }

    /// See [`PageModule::placeholder`]
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new(placeholder_component(label.into()))
    }
}

/// Wraps a closure as a [`Component`]
pub fn component<F>(f: F) -> Component
where
    F: Fn(&Value) -> Markup + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wraps an async closure as a [`DataLoader`] (or [`ActionHandler`])
pub fn data_loader<F, Fut>(f: F) -> DataLoader
where
    F: Fn(RouteArgs) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
{
    Arc::new(move |args| f(args).boxed())
}

/// Wraps a closure as [`Middleware`]
pub fn middleware<F>(f: F) -> Middleware
where
    F: Fn(DataLoader) -> DataLoader + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Middleware that returns the loader untouched
pub fn identity_middleware() -> Middleware {
    middleware(|loader| loader)
}

/// Wraps an async closure as a [`PageImporter`]
pub fn page_importer<F, Fut>(f: F) -> PageImporter
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<PageModule>> + Send + 'static,
{
    Arc::new(move || f().boxed())
}

/// Wraps an async closure as a [`ViewImporter`]
pub fn view_importer<F, Fut>(f: F) -> ViewImporter
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<ViewModule>> + Send + 'static,
{
    Arc::new(move || f().boxed())
}

/// Loader used when a module exports none; resolves to `null`
pub fn null_loader() -> DataLoader {
    data_loader(|_| async { anyhow::Ok(Value::Null) })
}

/// Fallback shown while a route without its own loading file resolves
pub fn builtin_loading() -> Component {
    component(|_| html! { div { "Loading..." } })
}

/// Not-found view used when the app ships no 404 file
pub fn builtin_not_found() -> Component {
    component(|_| {
        html! {
            div {
                h1 { "404" }
                p { "This page could not be found." }
            }
        }
    })
}

fn placeholder_component(label: String) -> Component {
    component(move |_| html! { div data-route=(label) { (label) } })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_view() {
        let view = component(|data| html! { p { (data["name"].as_str().unwrap_or("")) } });
        let markup = view.render(&serde_json::json!({ "name": "trellis" }));
        assert_eq!(markup.into_string(), "<p>trellis</p>");
    }

    #[test]
    fn test_builtin_loading_markup() {
        let markup = builtin_loading().render(&Value::Null);
        assert_eq!(markup.into_string(), "<div>Loading...</div>");
    }

    #[test]
    fn test_placeholder_renders_label() {
        let module = PageModule::placeholder("app/about/page");
        let markup = module.component.render(&Value::Null).into_string();
        assert!(markup.contains("app/about/page"));
    }

    #[tokio::test]
    async fn test_null_loader() {
        let value = null_loader()(RouteArgs::default()).await.unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_identity_middleware_keeps_loader() {
        let loader = data_loader(|args: RouteArgs| async move { anyhow::Ok(Value::String(args.url)) });
        let wrapped = identity_middleware()(loader);
        let value = wrapped(RouteArgs {
            url: "/about".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
        assert_eq!(value, Value::String("/about".to_string()));
    }
}
