//! Route providers: uniform enumeration over the host's route sources.
//!
//! Each provider adapts one source shape (admin routers, per-API routers,
//! or plugin declarations) into the same contract: a `routes` accessor
//! returning the flattened array, and iteration yielding exactly the same
//! elements in the same order. Bulk consumers read the slice; streaming
//! consumers (the collector among them) iterate.

use crate::host::{Host, PluginRouteDecl};
use crate::route::Route;
use log::debug;

/// Uniform iterable of route records from one source.
///
/// Implementations must keep the two access styles consistent: `iter()` is
/// backed by the same underlying array `routes()` exposes.
pub trait RoutesProvider {
    /// The flattened route list, in source order
    fn routes(&self) -> &[Route];

    /// Iterate the same elements `routes()` exposes, in the same order
    fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes().iter()
    }
}

/// Routes registered by the admin layer, nested under named routers.
pub struct AdminRoutesProvider {
    routes: Vec<Route>,
}

impl AdminRoutesProvider {
    /// Flatten the host's admin routers in registration order
    pub fn new(host: &Host) -> Self {
        let routes: Vec<Route> = host
            .admin_routers()
            .iter()
            .flat_map(|(_, routes)| routes.iter().cloned())
            .collect();
        debug!("Admin provider flattened {} routes", routes.len());
        Self { routes }
    }
}

impl RoutesProvider for AdminRoutesProvider {
    fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl<'a> IntoIterator for &'a AdminRoutesProvider {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// Routes registered by APIs, nested two levels: per API, per router.
pub struct ApiRoutesProvider {
    routes: Vec<Route>,
}

impl ApiRoutesProvider {
    /// Flatten every API's routers in registration order at both levels
    pub fn new(host: &Host) -> Self {
        let routes: Vec<Route> = host
            .apis()
            .iter()
            .flat_map(|api| api.routers.iter())
            .flat_map(|(_, routes)| routes.iter().cloned())
            .collect();
        debug!("Api provider flattened {} routes", routes.len());
        Self { routes }
    }
}

impl RoutesProvider for ApiRoutesProvider {
    fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl<'a> IntoIterator for &'a ApiRoutesProvider {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// Routes registered by plugins, declared flat or under named routers.
///
/// Both declaration shapes flatten to the same stream; consumers never see
/// which one a plugin used.
pub struct PluginRoutesProvider {
    routes: Vec<Route>,
}

impl PluginRoutesProvider {
    /// Flatten every plugin declaration in registration order
    pub fn new(host: &Host) -> Self {
        let mut routes = Vec::new();
        for plugin in host.plugins() {
            match &plugin.routes {
                PluginRouteDecl::Flat(list) => routes.extend(list.iter().cloned()),
                PluginRouteDecl::Routers(routers) => {
                    for (_, list) in routers {
                        routes.extend(list.iter().cloned());
                    }
                }
            }
        }
        debug!("Plugin provider flattened {} routes", routes.len());
        Self { routes }
    }
}

impl RoutesProvider for PluginRoutesProvider {
    fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl<'a> IntoIterator for &'a PluginRoutesProvider {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
