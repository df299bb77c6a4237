//! Pre- and post-processors bracketing the document assembler chain.

use crate::context::Context;
use crate::document::DocumentData;
use crate::error::Result;
use log::debug;

/// A hook running at document level before or after assembly.
///
/// Pre-processors typically seed the shared registries; post-processors
/// flush accumulated registry state into the draft.
pub trait Processor {
    /// Hook name, used in progress logging
    fn name(&self) -> &'static str;
    fn process(&self, ctx: &mut Context<DocumentData>) -> Result<()>;
}

/// Post-processor writing registered schema components into
/// `components.schemas`.
///
/// Definitions are merged into the schemas map as a sibling of the
/// security schemes; the `components` object written by earlier stages is
/// extended, never replaced. Nothing is written when the registry is empty.
pub struct ComponentSchemasProcessor;

impl Processor for ComponentSchemasProcessor {
    fn name(&self) -> &'static str {
        "component-schemas"
    }

    fn process(&self, ctx: &mut Context<DocumentData>) -> Result<()> {
        if ctx.registries.schemas.is_empty() {
            return Ok(());
        }
        let definitions = ctx.registries.schemas.definitions();
        debug!("Flushing {} schema components", definitions.len());
        ctx.output.data.components_mut().schemas.extend(definitions);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextSeed;
    use crate::document::SecurityScheme;
    use crate::host::Host;
    use crate::route::Route;
    use serde_json::json;
    use std::rc::Rc;

    fn document_context() -> Context<DocumentData> {
        let routes: Rc<[Route]> = Vec::new().into();
        Context::create(ContextSeed {
            host: Host::builder().build(),
            routes,
            timer: None,
            registries: None,
        })
    }

    #[test]
    fn test_flushes_registry_into_schemas() {
        let mut ctx = document_context();
        ctx.registries
            .schemas
            .register("Article".to_string(), json!({ "type": "object" }));

        ComponentSchemasProcessor.process(&mut ctx).unwrap();

        let components = ctx.output.data.components.as_ref().unwrap();
        assert_eq!(components.schemas["Article"], json!({ "type": "object" }));
    }

    #[test]
    fn test_empty_registry_writes_nothing() {
        let mut ctx = document_context();
        ComponentSchemasProcessor.process(&mut ctx).unwrap();
        assert!(ctx.output.data.components.is_none());
    }

    #[test]
    fn test_preserves_security_schemes_written_earlier() {
        let mut ctx = document_context();
        ctx.output
            .data
            .components_mut()
            .security_schemes
            .insert("bearerAuth".to_string(), SecurityScheme::bearer_jwt());
        ctx.registries
            .schemas
            .register("Article".to_string(), json!({ "type": "object" }));

        ComponentSchemasProcessor.process(&mut ctx).unwrap();

        let components = ctx.output.data.components.as_ref().unwrap();
        assert!(components.security_schemes.contains_key("bearerAuth"));
        assert!(components.schemas.contains_key("Article"));
    }
}
