//! Host application handle: configuration access and route declarations.
//!
//! The pipeline never hardcodes a host framework type. Instead it receives a
//! [`Host`] handle bundling two things the host injects: a key-value
//! configuration accessor and the route declaration trees of the admin, API
//! and plugin layers. Providers flatten those trees; assemblers read config
//! through typed getters that fall back silently when a key is absent.

use crate::route::Route;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::rc::Rc;

/// Injected key-value configuration accessor.
///
/// Keys are dot-separated paths (e.g., `"info.name"`, `"openapi.servers"`).
/// Implementations return the raw JSON value at that path, or `None` when
/// the path does not resolve.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<Value>;
}

/// Default [`ConfigSource`] over a nested JSON value tree.
///
/// # Example
///
/// ```
/// use openapi_from_routes::host::{ConfigSource, MapConfig};
/// use serde_json::json;
///
/// let config = MapConfig::new(json!({ "info": { "name": "blog" } }));
/// assert_eq!(config.get("info.name"), Some(json!("blog")));
/// assert_eq!(config.get("info.missing"), None);
/// ```
pub struct MapConfig {
    root: Value,
}

impl MapConfig {
    /// Build a config tree from any serializable value
    pub fn new(root: impl Serialize) -> Self {
        Self {
            root: serde_json::to_value(root).unwrap_or(Value::Null),
        }
    }

    /// An empty config tree; every lookup misses
    pub fn empty() -> Self {
        Self { root: Value::Null }
    }
}

impl ConfigSource for MapConfig {
    fn get(&self, key: &str) -> Option<Value> {
        let mut current = &self.root;
        for segment in key.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        Some(current.clone())
    }
}

/// Route declarations of one API: routes nested two levels, per router.
#[derive(Debug, Clone)]
pub struct ApiDecl {
    pub name: String,
    pub routers: Vec<(String, Vec<Route>)>,
}

/// The two shapes a plugin may declare its routes in.
///
/// Some plugins hand over a flat route list, others group routes under
/// named routers. Providers flatten both identically, so nothing downstream
/// learns which shape a plugin used.
#[derive(Debug, Clone)]
pub enum PluginRouteDecl {
    Flat(Vec<Route>),
    Routers(Vec<(String, Vec<Route>)>),
}

/// Route declarations of one plugin.
#[derive(Debug, Clone)]
pub struct PluginDecl {
    pub name: String,
    pub routes: PluginRouteDecl,
}

/// Cheaply cloneable handle to the host application.
///
/// Every context in a generation run carries a clone; they all point at the
/// same underlying config source and declaration trees.
#[derive(Clone)]
pub struct Host {
    inner: Rc<HostInner>,
}

struct HostInner {
    config: Box<dyn ConfigSource>,
    admin_routers: Vec<(String, Vec<Route>)>,
    apis: Vec<ApiDecl>,
    plugins: Vec<PluginDecl>,
}

impl Host {
    /// Start building a host handle
    pub fn builder() -> HostBuilder {
        HostBuilder::new()
    }

    /// Typed config lookup; `None` on a missing key or shape mismatch
    pub fn config<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.inner.config.get(key)?;
        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(err) => {
                debug!("Config key '{}' has unexpected shape: {}", key, err);
                None
            }
        }
    }

    /// Typed config lookup with a fallback default
    pub fn config_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.config(key).unwrap_or(default)
    }

    /// Admin routers in registration order
    pub fn admin_routers(&self) -> &[(String, Vec<Route>)] {
        &self.inner.admin_routers
    }

    /// API declarations in registration order
    pub fn apis(&self) -> &[ApiDecl] {
        &self.inner.apis
    }

    /// Plugin declarations in registration order
    pub fn plugins(&self) -> &[PluginDecl] {
        &self.inner.plugins
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("admin_routers", &self.inner.admin_routers.len())
            .field("apis", &self.inner.apis.len())
            .field("plugins", &self.inner.plugins.len())
            .finish()
    }
}

/// Fluent builder for [`Host`].
pub struct HostBuilder {
    config: Box<dyn ConfigSource>,
    admin_routers: Vec<(String, Vec<Route>)>,
    apis: Vec<ApiDecl>,
    plugins: Vec<PluginDecl>,
}

impl HostBuilder {
    fn new() -> Self {
        Self {
            config: Box::new(MapConfig::empty()),
            admin_routers: Vec::new(),
            apis: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Install the configuration accessor
    pub fn config(mut self, config: impl ConfigSource + 'static) -> Self {
        self.config = Box::new(config);
        self
    }

    /// Register an admin router and its routes
    pub fn admin_router(mut self, name: impl Into<String>, routes: Vec<Route>) -> Self {
        self.admin_routers.push((name.into(), routes));
        self
    }

    /// Register a router under an API, creating the API on first use
    pub fn api_router(
        mut self,
        api: impl Into<String>,
        router: impl Into<String>,
        routes: Vec<Route>,
    ) -> Self {
        let api = api.into();
        let entry = (router.into(), routes);
        match self.apis.iter_mut().find(|a| a.name == api) {
            Some(existing) => existing.routers.push(entry),
            None => self.apis.push(ApiDecl {
                name: api,
                routers: vec![entry],
            }),
        }
        self
    }

    /// Register a plugin declaring a flat route list
    pub fn plugin_routes(mut self, name: impl Into<String>, routes: Vec<Route>) -> Self {
        self.plugins.push(PluginDecl {
            name: name.into(),
            routes: PluginRouteDecl::Flat(routes),
        });
        self
    }

    /// Register a plugin declaring routes under named routers
    pub fn plugin_routers(
        mut self,
        name: impl Into<String>,
        routers: Vec<(String, Vec<Route>)>,
    ) -> Self {
        self.plugins.push(PluginDecl {
            name: name.into(),
            routes: PluginRouteDecl::Routers(routers),
        });
        self
    }

    /// Finish building the handle
    pub fn build(self) -> Host {
        Host {
            inner: Rc::new(HostInner {
                config: self.config,
                admin_routers: self.admin_routers,
                apis: self.apis,
                plugins: self.plugins,
            }),
        }
    }
}
