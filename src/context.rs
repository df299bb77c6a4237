//! Scoped execution contexts flowing through the pipeline.
//!
//! One context exists per pipeline scope: document, paths, path item,
//! operation. A context carries the shared cross-cutting state (host handle,
//! the full collected route set, timer, registries) plus a stage-local
//! mutable output that assemblers transform in place, in registration order.
//! Child scopes always inherit the host and the full route set; the
//! registries are shared down the tree so component schemas registered deep
//! in an operation surface at the document level.

use crate::host::Host;
use crate::registry::Registries;
use crate::route::Route;
use crate::timer::{TimeStats, Timer};
use std::rc::Rc;

/// Stage-local output: the data under construction plus run stats.
#[derive(Debug)]
pub struct Output<T> {
    pub data: T,
    pub stats: Stats,
}

/// Cross-cutting stats recorded on a scope's output.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub time: TimeStats,
}

/// Ingredients for creating a context.
///
/// `timer` and `registries` are reused when supplied and created fresh
/// otherwise; host and routes are always required.
pub struct ContextSeed {
    pub host: Host,
    pub routes: Rc<[Route]>,
    pub timer: Option<Timer>,
    pub registries: Option<Registries>,
}

/// Execution context of one pipeline scope.
pub struct Context<T> {
    host: Host,
    routes: Rc<[Route]>,
    pub timer: Timer,
    pub registries: Registries,
    pub output: Output<T>,
}

impl<T: Default> Context<T> {
    /// Create a full context from a seed.
    ///
    /// The output data starts as the stage default and the stats zeroed;
    /// assemblers mutate both in place.
    pub fn create(seed: ContextSeed) -> Self {
        Self {
            host: seed.host,
            routes: seed.routes,
            timer: seed.timer.unwrap_or_default(),
            registries: seed.registries.unwrap_or_default(),
            output: Output {
                data: T::default(),
                stats: Stats::default(),
            },
        }
    }
}

impl<T> Context<T> {
    /// The host handle this run was created with
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// The full collected route set, visible to every nested scope
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Derive a child scope.
    ///
    /// The child inherits the host and the full route set, shares this
    /// context's registries, and gets a fresh timer so its stats stay owned
    /// by its own scope.
    pub fn derive<U: Default>(&self) -> Context<U> {
        Context::create(ContextSeed {
            host: self.host.clone(),
            routes: Rc::clone(&self.routes),
            timer: None,
            registries: Some(self.registries.clone()),
        })
    }
}
