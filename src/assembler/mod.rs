//! Assembler stages that build the document inside scoped contexts.
//!
//! Assemblers are composed as ordered lists, one list per scope, injected
//! explicitly at construction time:
//!
//! 1. Document assemblers fill top-level fields ([`document`])
//! 2. Path assemblers group routes by path ([`paths`])
//! 3. Path-item assemblers group a path's routes by method ([`path_item`])
//! 4. Operation assemblers build one operation each ([`operation`])
//!
//! Each assembler mutates its context's output in place; within one list the
//! registration order is the execution order, and later assemblers may
//! overwrite what earlier ones wrote.

pub mod document;
pub mod operation;
pub mod path_item;
pub mod paths;

use crate::context::Context;
use crate::document::{DocumentData, OperationData, PathItem, Paths};
use crate::error::Result;
use crate::route::Route;

/// A stage transforming the document-level draft.
pub trait DocumentAssembler {
    /// Stage name, used in progress logging
    fn name(&self) -> &'static str;
    fn assemble(&self, ctx: &mut Context<DocumentData>) -> Result<()>;
}

/// A stage transforming the paths map.
pub trait PathAssembler {
    fn name(&self) -> &'static str;
    fn assemble(&self, ctx: &mut Context<Paths>) -> Result<()>;
}

/// A stage transforming one path item from the routes sharing its path.
pub trait PathItemAssembler {
    fn name(&self) -> &'static str;
    fn assemble(&self, ctx: &mut Context<PathItem>, group: &[Route]) -> Result<()>;
}

/// A stage transforming one operation draft from its route.
pub trait OperationAssembler {
    fn name(&self) -> &'static str;
    fn assemble(&self, ctx: &mut Context<OperationData>, route: &Route) -> Result<()>;
}

/// The default document assembler chain, in execution order.
pub fn default_document_assemblers() -> Vec<Box<dyn DocumentAssembler>> {
    vec![
        Box::new(document::MetadataAssembler),
        Box::new(document::InfoAssembler),
        Box::new(document::ServerAssembler),
        Box::new(document::SecurityAssembler),
        Box::new(paths::PathsAssembler::new(default_path_assemblers())),
    ]
}

/// The default path assembler chain.
pub fn default_path_assemblers() -> Vec<Box<dyn PathAssembler>> {
    vec![Box::new(paths::RoutePathAssembler::new(
        default_path_item_assemblers(),
    ))]
}

/// The default path-item assembler chain.
pub fn default_path_item_assemblers() -> Vec<Box<dyn PathItemAssembler>> {
    vec![Box::new(path_item::OperationsPathItemAssembler::new(
        default_operation_assemblers(),
    ))]
}

/// The default operation assembler chain.
///
/// The sub-assemblers are independent of each other; the id assembler runs
/// first by convention since every other field is unaffected by it.
pub fn default_operation_assemblers() -> Vec<Box<dyn OperationAssembler>> {
    vec![
        Box::new(operation::OperationIdAssembler),
        Box::new(operation::ParametersAssembler),
        Box::new(operation::ResponsesAssembler::new()),
        Box::new(operation::TagsAssembler),
        Box::new(operation::RequestBodyAssembler),
    ]
}
