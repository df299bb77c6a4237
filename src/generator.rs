//! Root orchestrator wiring collection, contexts, assemblers and processors.

use crate::assembler::{default_document_assemblers, DocumentAssembler};
use crate::collector::RouteCollector;
use crate::context::{Context, ContextSeed};
use crate::document::{Document, DocumentData};
use crate::error::Result;
use crate::host::Host;
use crate::matcher::{KindRule, RouteMatcher};
use crate::processor::{ComponentSchemasProcessor, Processor};
use crate::provider::{AdminRoutesProvider, ApiRoutesProvider, PluginRoutesProvider, RoutesProvider};
use crate::route::Route;
use log::{debug, info};
use std::rc::Rc;

/// Which route class a generator documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentKind {
    /// Admin panel routes
    Admin,
    /// Public content API routes
    #[default]
    ContentApi,
}

impl DocumentKind {
    /// The host-side route class string this kind selects
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Admin => "admin",
            DocumentKind::ContentApi => "content-api",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options for [`create_generator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorOptions {
    /// Route class to document; defaults to the content API
    pub kind: DocumentKind,
}

/// Result of one generation run.
#[derive(Debug, Clone)]
pub struct Generation {
    /// The finished document
    pub document: Document,
    /// Wall-clock duration of the run in milliseconds
    pub duration_ms: u64,
}

/// Create a generator wired with the built-in pipeline.
///
/// The three canonical providers are built from the host's declaration
/// trees, the matcher holds the single kind rule, and the default assembler
/// chain plus the component-schema post-processor are installed. Builder
/// methods refine the wiring before the first run.
///
/// # Example
///
/// ```
/// use openapi_from_routes::generator::{create_generator, GeneratorOptions};
/// use openapi_from_routes::host::Host;
///
/// let host = Host::builder().build();
/// let generator = create_generator(host, GeneratorOptions::default());
/// let generation = generator.generate().unwrap();
/// assert!(generation.document.paths.is_empty());
/// ```
pub fn create_generator(host: Host, options: GeneratorOptions) -> Generator {
    debug!("Creating generator for kind '{}'", options.kind);
    let providers: Vec<Box<dyn RoutesProvider>> = vec![
        Box::new(AdminRoutesProvider::new(&host)),
        Box::new(ApiRoutesProvider::new(&host)),
        Box::new(PluginRoutesProvider::new(&host)),
    ];
    let matcher = RouteMatcher::new().with_rule(KindRule::new(options.kind.as_str()));
    Generator {
        host,
        collector: RouteCollector::new(providers, matcher),
        pre_processors: Vec::new(),
        assemblers: default_document_assemblers(),
        post_processors: vec![Box::new(ComponentSchemasProcessor)],
    }
}

/// The assembly pipeline, ready to run.
///
/// A generator is reusable: every `generate` call collects afresh, builds a
/// fresh context and registry bag, and returns a newly constructed
/// document. Nothing is cached between runs, so identical inputs produce
/// identical documents.
pub struct Generator {
    host: Host,
    collector: RouteCollector,
    pre_processors: Vec<Box<dyn Processor>>,
    assemblers: Vec<Box<dyn DocumentAssembler>>,
    post_processors: Vec<Box<dyn Processor>>,
}

impl Generator {
    /// Construct a generator from explicit parts; `create_generator` is the
    /// usual entry point
    pub fn new(host: Host, collector: RouteCollector) -> Self {
        Self {
            host,
            collector,
            pre_processors: Vec::new(),
            assemblers: default_document_assemblers(),
            post_processors: vec![Box::new(ComponentSchemasProcessor)],
        }
    }

    /// Replace the document assembler chain
    pub fn with_assemblers(mut self, assemblers: Vec<Box<dyn DocumentAssembler>>) -> Self {
        self.assemblers = assemblers;
        self
    }

    /// Append a pre-processor
    pub fn with_pre_processor(mut self, processor: impl Processor + 'static) -> Self {
        self.pre_processors.push(Box::new(processor));
        self
    }

    /// Append a post-processor
    pub fn with_post_processor(mut self, processor: impl Processor + 'static) -> Self {
        self.post_processors.push(Box::new(processor));
        self
    }

    /// Run the pipeline once.
    ///
    /// Strictly sequential with no retry or recovery: collect, build the
    /// document context, run pre-processors, assemblers and post-processors
    /// in registration order, then seal. Any stage error propagates
    /// unchanged and no partial document survives it.
    pub fn generate(&self) -> Result<Generation> {
        info!("Starting OpenAPI document generation...");

        // Step 1: collect routes and build the document context
        let routes: Rc<[Route]> = self.collector.collect().into();
        info!("Collected {} routes", routes.len());
        let mut ctx: Context<DocumentData> = Context::create(ContextSeed {
            host: self.host.clone(),
            routes,
            timer: None,
            registries: None,
        });

        // Step 2: start the run timer
        ctx.timer.start();

        // Step 3: pre-processors
        for processor in &self.pre_processors {
            debug!("Running pre-processor: {}", processor.name());
            processor.process(&mut ctx)?;
        }

        // Step 4: document assemblers
        for assembler in &self.assemblers {
            debug!("Running assembler: {}", assembler.name());
            assembler.assemble(&mut ctx)?;
        }

        // Step 5: post-processors
        for processor in &self.post_processors {
            debug!("Running post-processor: {}", processor.name());
            processor.process(&mut ctx)?;
        }

        // Step 6: stop the timer and seal the draft
        let time = ctx.timer.stop();
        ctx.output.stats.time = time.clone();
        let document = ctx.output.data.seal()?;

        info!("OpenAPI document generated in {} ms", time.elapsed_ms);
        Ok(Generation {
            document,
            duration_ms: time.elapsed_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::host::{Host, MapConfig};
    use serde_json::json;

    fn host_with_routes() -> Host {
        Host::builder()
            .config(MapConfig::new(json!({
                "info": { "name": "demo", "version": "1.0.0" }
            })))
            .admin_router(
                "users",
                vec![Route::new("/admin/users", "GET", "admin::users.find").kind("admin")],
            )
            .api_router(
                "blog",
                "article",
                vec![
                    Route::new("/articles", "GET", "api::blog.article.find")
                        .kind("content-api")
                        .api_name("blog"),
                    Route::new("/articles/:id", "GET", "api::blog.article.findOne")
                        .kind("content-api")
                        .api_name("blog"),
                ],
            )
            .build()
    }

    #[test]
    fn test_generate_filters_by_kind() {
        let generation = create_generator(host_with_routes(), GeneratorOptions::default())
            .generate()
            .unwrap();

        let paths: Vec<_> = generation.document.paths.keys().cloned().collect();
        assert_eq!(paths, vec!["/articles", "/articles/{id}"]);

        let admin = create_generator(
            host_with_routes(),
            GeneratorOptions {
                kind: DocumentKind::Admin,
            },
        )
        .generate()
        .unwrap();
        let paths: Vec<_> = admin.document.paths.keys().cloned().collect();
        assert_eq!(paths, vec!["/admin/users"]);
    }

    #[test]
    fn test_generate_with_empty_host() {
        let generation = create_generator(Host::builder().build(), GeneratorOptions::default())
            .generate()
            .unwrap();

        assert!(generation.document.paths.is_empty());
        assert_eq!(generation.document.openapi, "3.1.0");
        // The ambient document furniture is still there
        assert_eq!(generation.document.servers.len(), 1);
        assert!(generation.document.components.is_some());
    }

    #[test]
    fn test_generate_is_repeatable() {
        let generator = create_generator(host_with_routes(), GeneratorOptions::default());
        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();
        assert_eq!(first.document, second.document);
    }

    #[test]
    fn test_misconfigured_chain_fails_to_seal() {
        let generator = create_generator(Host::builder().build(), GeneratorOptions::default())
            .with_assemblers(Vec::new());
        let err = generator.generate().unwrap_err();
        assert!(matches!(err, Error::IncompleteDocument { .. }));
    }

    #[test]
    fn test_pre_processor_runs_before_assembly() {
        struct SeedProcessor;
        impl Processor for SeedProcessor {
            fn name(&self) -> &'static str {
                "seed"
            }
            fn process(&self, ctx: &mut Context<DocumentData>) -> Result<()> {
                ctx.registries
                    .schemas
                    .register("Seeded".to_string(), json!({ "type": "object" }));
                Ok(())
            }
        }

        let generation = create_generator(Host::builder().build(), GeneratorOptions::default())
            .with_pre_processor(SeedProcessor)
            .generate()
            .unwrap();

        let components = generation.document.components.unwrap();
        assert!(components.schemas.contains_key("Seeded"));
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!(DocumentKind::Admin.as_str(), "admin");
        assert_eq!(DocumentKind::ContentApi.as_str(), "content-api");
        assert_eq!(DocumentKind::default(), DocumentKind::ContentApi);
    }
}
