//! OpenAPI From Routes - OpenAPI 3.1 documents assembled from route tables.
//!
//! This library turns the route records a host application registers across
//! its admin, API and plugin layers into a single OpenAPI 3.1 document. It
//! does no source analysis and serves nothing over HTTP: the host hands in
//! its route tables and configuration, and gets back a finished document
//! plus the run duration.
//!
//! # Architecture
//!
//! The pipeline is a chain of composable, ordered stages:
//!
//! 1. [`provider`] - Adapts the host's route sources to one enumeration contract
//! 2. [`matcher`] - Decides which routes enter the document (AND over rules)
//! 3. [`collector`] - Flattens all providers into one filtered route list
//! 4. [`context`] - Scoped execution contexts carrying shared run state
//! 5. [`assembler`] - Document, path, path-item and operation assemblers
//! 6. [`processor`] - Pre/post hooks around the document assembler chain
//! 7. [`generator`] - The root orchestrator and sole entry point
//! 8. [`serializer`] - Renders the finished document to YAML or JSON
//!
//! # Example Usage
//!
//! ```
//! use openapi_from_routes::generator::{create_generator, GeneratorOptions};
//! use openapi_from_routes::host::{Host, MapConfig};
//! use openapi_from_routes::route::Route;
//! use serde_json::json;
//!
//! // The host hands over its configuration and route tables
//! let host = Host::builder()
//!     .config(MapConfig::new(json!({
//!         "info": { "name": "blog-backend", "version": "1.0.0" }
//!     })))
//!     .api_router("blog", "article", vec![
//!         Route::new("/articles", "GET", "api::blog.article.find")
//!             .kind("content-api")
//!             .api_name("blog"),
//!     ])
//!     .build();
//!
//! // Assemble the document
//! let generator = create_generator(host, GeneratorOptions::default());
//! let generation = generator.generate().unwrap();
//!
//! assert_eq!(generation.document.openapi, "3.1.0");
//! assert!(generation.document.paths.contains_key("/articles"));
//! ```

pub mod assembler;
pub mod collector;
pub mod context;
pub mod document;
pub mod error;
pub mod generator;
pub mod host;
pub mod matcher;
pub mod processor;
pub mod provider;
pub mod registry;
pub mod route;
pub mod schema;
pub mod serializer;
pub mod timer;
