//! Document-level assemblers: protocol metadata, info, servers, security.

use crate::assembler::DocumentAssembler;
use crate::context::Context;
use crate::document::{DocumentData, Info, SecurityRequirement, SecurityScheme, Server};
use crate::error::Result;
use log::{debug, warn};
use serde_json::{json, Value};

/// Name of the default bearer security scheme
pub const BEARER_SCHEME: &str = "bearerAuth";

/// Default server used when the host configures nothing
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Sets the fixed protocol fields: the OpenAPI version string and the
/// generator vendor extensions. Pure; reads no routes.
pub struct MetadataAssembler;

impl DocumentAssembler for MetadataAssembler {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn assemble(&self, ctx: &mut Context<DocumentData>) -> Result<()> {
        let data = &mut ctx.output.data;
        data.openapi = Some("3.1.0".to_string());
        data.extensions
            .insert("x-generated-by".to_string(), json!(env!("CARGO_PKG_NAME")));
        let engine = ctx.host().config_or::<String>("info.engine", String::new());
        if !engine.is_empty() {
            ctx.output
                .data
                .extensions
                .insert("x-engine-version".to_string(), json!(engine));
        }
        Ok(())
    }
}

/// Derives the info block from host configuration.
///
/// Missing config never fails the run: absent name or version produce empty
/// strings, and the description is only set when a name is configured.
pub struct InfoAssembler;

impl DocumentAssembler for InfoAssembler {
    fn name(&self) -> &'static str {
        "info"
    }

    fn assemble(&self, ctx: &mut Context<DocumentData>) -> Result<()> {
        let name = ctx.host().config_or::<String>("info.name", String::new());
        let version = ctx.host().config_or::<String>("info.version", String::new());
        let description = if name.is_empty() {
            None
        } else {
            Some(format!("API documentation for {}", name))
        };
        ctx.output.data.info = Some(Info {
            title: name,
            description,
            version,
        });
        Ok(())
    }
}

/// Resolves the server list with a three-tier fallback.
///
/// Exactly one tier is used, never a merge: the configured server list, else
/// a single server from the configured base URL, else the localhost default.
pub struct ServerAssembler;

impl DocumentAssembler for ServerAssembler {
    fn name(&self) -> &'static str {
        "server"
    }

    fn assemble(&self, ctx: &mut Context<DocumentData>) -> Result<()> {
        let servers = if let Some(configured) = ctx
            .host()
            .config::<Vec<Server>>("openapi.servers")
            .filter(|list| !list.is_empty())
        {
            debug!("Using {} configured servers", configured.len());
            configured
        } else if let Some(url) = ctx.host().config::<String>("server.url") {
            vec![Server {
                url,
                description: None,
            }]
        } else {
            vec![Server {
                url: DEFAULT_SERVER_URL.to_string(),
                description: None,
            }]
        };
        ctx.output.data.servers = Some(servers);
        Ok(())
    }
}

/// Builds the security schemes and the global security requirement.
///
/// Config-declared schemes are merged into `components.securitySchemes`
/// first and the default bearer-JWT scheme is written last: config can add
/// schemes but never remove or replace the default. Malformed config
/// entries are skipped with a warning, not an error.
pub struct SecurityAssembler;

impl DocumentAssembler for SecurityAssembler {
    fn name(&self) -> &'static str {
        "security"
    }

    fn assemble(&self, ctx: &mut Context<DocumentData>) -> Result<()> {
        let configured = ctx.host().config::<Value>("openapi.security");
        let global = ctx
            .host()
            .config::<Vec<SecurityRequirement>>("openapi.global_security");

        let schemes = &mut ctx.output.data.components_mut().security_schemes;
        if let Some(Value::Object(entries)) = configured {
            for (name, value) in entries {
                match serde_json::from_value::<SecurityScheme>(value) {
                    Ok(scheme) => {
                        schemes.insert(name, scheme);
                    }
                    Err(err) => {
                        warn!("Skipping malformed security scheme '{}': {}", name, err);
                    }
                }
            }
        }
        schemes.insert(BEARER_SCHEME.to_string(), SecurityScheme::bearer_jwt());

        let security = global.unwrap_or_else(|| {
            vec![SecurityRequirement::from([(
                BEARER_SCHEME.to_string(),
                Vec::new(),
            )])]
        });
        ctx.output.data.security = Some(security);
        Ok(())
    }
}
