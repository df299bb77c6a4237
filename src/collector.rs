//! Route collection: one list out of every provider, filtered once.

use crate::matcher::RouteMatcher;
use crate::provider::RoutesProvider;
use crate::route::Route;
use log::debug;

/// Aggregates all providers' routes and filters them through the matcher.
pub struct RouteCollector {
    providers: Vec<Box<dyn RoutesProvider>>,
    matcher: RouteMatcher,
}

impl RouteCollector {
    /// Create a collector over the given providers and matcher
    pub fn new(providers: Vec<Box<dyn RoutesProvider>>, matcher: RouteMatcher) -> Self {
        Self { providers, matcher }
    }

    /// Flatten every provider's routes and keep the ones the matcher accepts.
    ///
    /// Providers are drained through their iteration contract, in
    /// registration order; within a provider the source order is preserved.
    /// No route is mutated and no duplicates are introduced; the result is
    /// exactly the accepted subsequence of the concatenation.
    pub fn collect(&self) -> Vec<Route> {
        let mut collected = Vec::new();
        for provider in &self.providers {
            for route in provider.iter() {
                if self.matcher.matches(route) {
                    collected.push(route.clone());
                }
            }
        }
        debug!(
            "Collected {} routes from {} providers",
            collected.len(),
            self.providers.len()
        );
        collected
    }
}
