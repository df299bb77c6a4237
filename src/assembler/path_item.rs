//! Path-item stage: one operation per HTTP method of a single path.

use crate::assembler::{OperationAssembler, PathItemAssembler};
use crate::context::Context;
use crate::document::{OperationData, PathItem};
use crate::error::Result;
use crate::route::{HttpMethod, Route};
use log::debug;

/// Assembles a path item from the routes sharing one path.
///
/// Each route's method is validated against the canonical set; an
/// unrecognized method aborts the run. Per route, an operation child
/// context is derived, the operation chain runs, and the sealed operation
/// is attached under the lower-cased method key. Sealing enforces that the
/// chain produced a `responses` field; a repeated path+method pair keeps
/// the later route's operation.
pub struct OperationsPathItemAssembler {
    operation_assemblers: Vec<Box<dyn OperationAssembler>>,
}

impl OperationsPathItemAssembler {
    pub fn new(operation_assemblers: Vec<Box<dyn OperationAssembler>>) -> Self {
        Self { operation_assemblers }
    }
}

impl PathItemAssembler for OperationsPathItemAssembler {
    fn name(&self) -> &'static str {
        "operations"
    }

    fn assemble(&self, ctx: &mut Context<PathItem>, group: &[Route]) -> Result<()> {
        for route in group {
            let method = HttpMethod::parse(&route.method, &route.path)?;
            debug!("Assembling operation {} {}", method, route.path);

            let mut op_ctx: Context<OperationData> = ctx.derive();
            for assembler in &self.operation_assemblers {
                assembler.assemble(&mut op_ctx, route)?;
            }
            let operation = op_ctx.output.data.seal(method, &route.path)?;
            ctx.output.data.set(method, operation);
        }
        Ok(())
    }
}
