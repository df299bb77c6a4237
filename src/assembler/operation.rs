//! Operation-stage assemblers: id, parameters, responses, tags, body.
//!
//! The sub-assemblers are independent: each writes its own field of the
//! operation draft, so their relative order only decides which keys exist
//! when, never the final content.

use crate::assembler::OperationAssembler;
use crate::context::Context;
use crate::document::{MediaType, OperationData, Parameter, RequestBody, Response};
use crate::error::Result;
use crate::route::Route;
use crate::schema::to_schema_object;
use serde_json::json;
use std::collections::BTreeMap;

/// Extension flag marking query parameters that require query-string
/// serialization (non-standard array/object encoding).
pub const QUERY_SERIALIZED_EXTENSION: &str = "x-query-serialized";

/// Derives the stable operation identifier.
///
/// The id has the form `[{origin}/]{method}_{segment}...`: the origin (API
/// name, else plugin name) is followed by a literal `/`, everything after
/// it is joined with `_`. The method is lower-cased; plain path segments
/// are sanitized (non-word characters become `_`) and parameter segments
/// become `by_{name}`. The same route always yields the same id.
///
/// Examples: GET `/articles` on the `blog` API gives `blog/get_articles`;
/// GET `/users/:id` with no origin gives `get_users_by_id`.
pub struct OperationIdAssembler;

fn sanitize(segment: &str) -> String {
    segment
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

impl OperationAssembler for OperationIdAssembler {
    fn name(&self) -> &'static str {
        "operation-id"
    }

    fn assemble(&self, ctx: &mut Context<OperationData>, route: &Route) -> Result<()> {
        let mut parts = vec![route.method.to_ascii_lowercase()];
        for segment in route.path.split('/').filter(|s| !s.is_empty()) {
            match segment.strip_prefix(':') {
                Some(param) => parts.push(format!("by_{}", sanitize(param))),
                None => parts.push(sanitize(segment)),
            }
        }
        let id = parts.join("_");

        let origin = [&route.info.api_name, &route.info.plugin_name]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty());
        ctx.output.data.operation_id = Some(match origin {
            Some(origin) => format!("{}/{}", origin, id),
            None => id,
        });
        Ok(())
    }
}

/// Builds path and query parameters from the declared request schemas.
///
/// Path parameters are always required; optionality of the declared
/// schema is not consulted for them. Query parameters derive `required`
/// from the declaration and carry the query-string serialization flag.
pub struct ParametersAssembler;

impl OperationAssembler for ParametersAssembler {
    fn name(&self) -> &'static str {
        "parameters"
    }

    fn assemble(&self, ctx: &mut Context<OperationData>, route: &Route) -> Result<()> {
        let Some(request) = &route.request else {
            return Ok(());
        };
        let registry = ctx.registries.schemas.clone();

        for (name, decl) in &request.params {
            ctx.output.data.parameters.push(Parameter {
                name: name.clone(),
                location: "path".to_string(),
                required: true,
                schema: to_schema_object(decl, &registry),
                extensions: BTreeMap::new(),
            });
        }
        for (name, decl) in &request.query {
            let mut extensions = BTreeMap::new();
            extensions.insert(QUERY_SERIALIZED_EXTENSION.to_string(), json!(true));
            ctx.output.data.parameters.push(Parameter {
                name: name.clone(),
                location: "query".to_string(),
                required: !decl.optional,
                schema: to_schema_object(decl, &registry),
                extensions,
            });
        }
        Ok(())
    }
}

/// Writes the response map.
///
/// The defaults are a fixed set of standard status codes with canned
/// descriptions, deliberately independent of the route. Hosts wanting a
/// different map construct the assembler with their own.
pub struct ResponsesAssembler {
    responses: BTreeMap<String, Response>,
}

fn canned(description: &str) -> Response {
    Response {
        description: description.to_string(),
    }
}

impl ResponsesAssembler {
    /// The default response set
    pub fn new() -> Self {
        Self {
            responses: BTreeMap::from([
                ("200".to_string(), canned("OK")),
                ("201".to_string(), canned("Created")),
                ("204".to_string(), canned("No Content")),
                ("400".to_string(), canned("Bad Request")),
                ("401".to_string(), canned("Unauthorized")),
                ("403".to_string(), canned("Forbidden")),
                ("404".to_string(), canned("Not Found")),
                ("500".to_string(), canned("Internal Server Error")),
            ]),
        }
    }

    /// A custom response set applied to every operation
    pub fn with_responses(responses: BTreeMap<String, Response>) -> Self {
        Self { responses }
    }
}

impl Default for ResponsesAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationAssembler for ResponsesAssembler {
    fn name(&self) -> &'static str {
        "responses"
    }

    fn assemble(&self, ctx: &mut Context<OperationData>, _route: &Route) -> Result<()> {
        ctx.output.data.responses = Some(self.responses.clone());
        Ok(())
    }
}

/// Tags the operation with its non-empty origins: API name first, plugin
/// name second. Zero, one, or two tags.
pub struct TagsAssembler;

impl OperationAssembler for TagsAssembler {
    fn name(&self) -> &'static str {
        "tags"
    }

    fn assemble(&self, ctx: &mut Context<OperationData>, route: &Route) -> Result<()> {
        for origin in [&route.info.api_name, &route.info.plugin_name] {
            if let Some(name) = origin {
                if !name.is_empty() {
                    ctx.output.data.tags.push(name.clone());
                }
            }
        }
        Ok(())
    }
}

/// Builds the request body from the declared media-type map.
///
/// A route without a body declaration gets no `requestBody` at all; the
/// key stays absent from the serialized operation.
pub struct RequestBodyAssembler;

impl OperationAssembler for RequestBodyAssembler {
    fn name(&self) -> &'static str {
        "request-body"
    }

    fn assemble(&self, ctx: &mut Context<OperationData>, route: &Route) -> Result<()> {
        let Some(request) = &route.request else {
            return Ok(());
        };
        if request.body.is_empty() {
            return Ok(());
        }
        let registry = ctx.registries.schemas.clone();
        let content: BTreeMap<String, MediaType> = request
            .body
            .iter()
            .map(|(media_type, decl)| {
                (
                    media_type.clone(),
                    MediaType {
                        schema: to_schema_object(decl, &registry),
                    },
                )
            })
            .collect();
        ctx.output.data.request_body = Some(RequestBody { content });
        Ok(())
    }
}
