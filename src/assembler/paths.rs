//! Path-stage assemblers: grouping routes by path and formatting path keys.

use crate::assembler::{DocumentAssembler, PathAssembler, PathItemAssembler};
use crate::context::Context;
use crate::document::{DocumentData, PathItem, Paths};
use crate::error::Result;
use crate::route::Route;
use log::debug;

/// Document assembler delegating to the path assembler chain.
///
/// Derives a paths child context, runs the chain against it, and writes the
/// resulting map into the document draft.
pub struct PathsAssembler {
    assemblers: Vec<Box<dyn PathAssembler>>,
}

impl PathsAssembler {
    pub fn new(assemblers: Vec<Box<dyn PathAssembler>>) -> Self {
        Self { assemblers }
    }
}

impl DocumentAssembler for PathsAssembler {
    fn name(&self) -> &'static str {
        "paths"
    }

    fn assemble(&self, ctx: &mut Context<DocumentData>) -> Result<()> {
        let mut paths_ctx: Context<Paths> = ctx.derive();
        for assembler in &self.assemblers {
            debug!("Running path assembler: {}", assembler.name());
            assembler.assemble(&mut paths_ctx)?;
        }
        ctx.output.data.paths = Some(paths_ctx.output.data);
        Ok(())
    }
}

/// Groups the context's routes by exact path and assembles one path item
/// per group.
///
/// Grouping key is the raw path string as declared; the formatted
/// OpenAPI-style key (`:id` becomes `{id}`) is only produced for the output
/// map. Each group gets its own path-item child context inheriting the full
/// route set and the shared registries.
pub struct RoutePathAssembler {
    item_assemblers: Vec<Box<dyn PathItemAssembler>>,
}

impl RoutePathAssembler {
    pub fn new(item_assemblers: Vec<Box<dyn PathItemAssembler>>) -> Self {
        Self { item_assemblers }
    }
}

impl PathAssembler for RoutePathAssembler {
    fn name(&self) -> &'static str {
        "route-paths"
    }

    fn assemble(&self, ctx: &mut Context<Paths>) -> Result<()> {
        // Group by exact path, first-appearance order
        let mut groups: Vec<(String, Vec<Route>)> = Vec::new();
        for route in ctx.routes() {
            match groups.iter_mut().find(|(path, _)| *path == route.path) {
                Some((_, group)) => group.push(route.clone()),
                None => groups.push((route.path.clone(), vec![route.clone()])),
            }
        }
        debug!("Grouped {} routes into {} paths", ctx.routes().len(), groups.len());

        for (path, group) in groups {
            let mut item_ctx: Context<PathItem> = ctx.derive();
            for assembler in &self.item_assemblers {
                assembler.assemble(&mut item_ctx, &group)?;
            }
            ctx.output.data.insert(format_path(&path), item_ctx.output.data);
        }
        Ok(())
    }
}

/// Convert host-style parameter placeholders to OpenAPI style.
///
/// `/users/:id` becomes `/users/{id}`; segments already in `{id}` form and
/// plain segments pass through unchanged.
pub fn format_path(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => format!("{{{}}}", name),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}
