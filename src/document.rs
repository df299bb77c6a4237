//! Typed OpenAPI 3.1 document model and the mutable drafts behind it.
//!
//! Assemblers work against draft types ([`DocumentData`], [`OperationData`])
//! whose fields are all optional: each assembler fills in the part it owns,
//! in registration order, and later assemblers may overwrite earlier fields.
//! At the top of the pipeline a draft is sealed into the final typed value;
//! sealing is where required-field validation happens, so a miswired
//! assembler chain fails the whole run instead of emitting a partial
//! document.
//!
//! Every map in the model is a `BTreeMap` so repeated runs over identical
//! input serialize byte-for-byte identically. Absent optional fields are
//! skipped during serialization: a route without a body yields an operation
//! with no `requestBody` key at all.

use crate::error::{Error, Result};
use crate::route::HttpMethod;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A security requirement: scheme name to required scopes.
pub type SecurityRequirement = BTreeMap<String, Vec<String>>;

/// The `paths` object: formatted path to path item.
pub type Paths = BTreeMap<String, PathItem>;

/// OpenAPI Info object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,
    /// API description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// API version
    pub version: String,
}

/// OpenAPI Server object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// Server base URL
    pub url: String,
    /// Server description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// OpenAPI Security Scheme object.
///
/// Common fields are typed; anything else a config-declared scheme carries
/// is preserved through the flattened extras map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    /// Scheme type ("http", "apiKey", "oauth2", "openIdConnect")
    #[serde(rename = "type")]
    pub scheme_type: String,
    /// HTTP auth scheme (e.g., "bearer")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Bearer token format hint
    #[serde(rename = "bearerFormat", skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,
    /// Parameter name, for apiKey schemes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Parameter location, for apiKey schemes
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Scheme description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Any further scheme fields, preserved verbatim
    #[serde(flatten)]
    pub extras: BTreeMap<String, Value>,
}

impl SecurityScheme {
    /// The default bearer-JWT scheme every document carries
    pub fn bearer_jwt() -> Self {
        Self {
            scheme_type: "http".to_string(),
            scheme: Some("bearer".to_string()),
            bearer_format: Some("JWT".to_string()),
            name: None,
            location: None,
            description: None,
            extras: BTreeMap::new(),
        }
    }
}

/// OpenAPI Components object.
///
/// `security_schemes` and `schemas` are sibling fields written by different
/// stages (the Security assembler and the component post-processor); keeping
/// them as separate maps makes clobbering the whole object impossible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Security scheme definitions
    #[serde(
        rename = "securitySchemes",
        skip_serializing_if = "BTreeMap::is_empty",
        default
    )]
    pub security_schemes: BTreeMap<String, SecurityScheme>,
    /// Shared schema definitions
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub schemas: BTreeMap<String, Value>,
}

impl Components {
    /// Whether both maps are empty
    pub fn is_empty(&self) -> bool {
        self.security_schemes.is_empty() && self.schemas.is_empty()
    }
}

/// OpenAPI PathItem object - all operations registered for a single path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
}

impl PathItem {
    /// Attach an operation under its method slot, replacing any previous one
    pub fn set(&mut self, method: HttpMethod, operation: Operation) {
        let slot = match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Options => &mut self.options,
            HttpMethod::Head => &mut self.head,
            HttpMethod::Trace => &mut self.trace,
        };
        *slot = Some(operation);
    }

    /// Read the operation registered under a method slot
    pub fn get_method(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }
}

/// OpenAPI Operation object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Stable operation identifier
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Origin tags (API name, plugin name)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    /// Path and query parameters
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parameters: Vec<Parameter>,
    /// Request body; absent entirely when the route declares none
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Response map; every sealed operation has one
    pub responses: BTreeMap<String, Response>,
}

/// OpenAPI Parameter object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Parameter location ("path" or "query")
    #[serde(rename = "in")]
    pub location: String,
    /// Whether the parameter is required
    pub required: bool,
    /// Parameter schema
    pub schema: Value,
    /// Vendor extension flags
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

/// OpenAPI RequestBody object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Content types and their schemas
    pub content: BTreeMap<String, MediaType>,
}

/// OpenAPI MediaType object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// Schema for this media type
    pub schema: Value,
}

/// OpenAPI Response object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Response description
    pub description: String,
}

/// Complete OpenAPI 3.1 document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// OpenAPI version
    pub openapi: String,
    /// API info
    pub info: Info,
    /// Server list
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub servers: Vec<Server>,
    /// Global security requirements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
    /// Components (security schemes, shared schemas)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    /// API paths
    pub paths: Paths,
    /// Root-level vendor extensions
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

/// Mutable document draft assemblers fill in.
#[derive(Debug, Default)]
pub struct DocumentData {
    pub openapi: Option<String>,
    pub info: Option<Info>,
    pub servers: Option<Vec<Server>>,
    pub security: Option<Vec<SecurityRequirement>>,
    pub components: Option<Components>,
    pub paths: Option<Paths>,
    pub extensions: BTreeMap<String, Value>,
}

impl DocumentData {
    /// The components object, created on first access.
    ///
    /// Writers mutate individual fields through this accessor instead of
    /// replacing the object, so the Security assembler and the component
    /// post-processor merge rather than overwrite each other.
    pub fn components_mut(&mut self) -> &mut Components {
        self.components.get_or_insert_with(Components::default)
    }

    /// Seal the draft into the final document.
    ///
    /// Validates the fields the default assembler chain is responsible for;
    /// a missing one means the chain is miswired and the run must abort.
    pub fn seal(self) -> Result<Document> {
        let openapi = self
            .openapi
            .ok_or(Error::IncompleteDocument { field: "openapi" })?;
        let info = self.info.ok_or(Error::IncompleteDocument { field: "info" })?;
        let paths = self.paths.ok_or(Error::IncompleteDocument { field: "paths" })?;
        Ok(Document {
            openapi,
            info,
            servers: self.servers.unwrap_or_default(),
            security: self.security,
            components: self.components.filter(|c| !c.is_empty()),
            paths,
            extensions: self.extensions,
        })
    }
}

/// Mutable operation draft the operation sub-assemblers fill in.
#[derive(Debug, Default)]
pub struct OperationData {
    pub operation_id: Option<String>,
    pub tags: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
    pub responses: Option<BTreeMap<String, Response>>,
}

impl OperationData {
    /// Seal the draft into an operation.
    ///
    /// An operation without responses is a programming error in the
    /// assembler chain, never a property of the route.
    pub fn seal(self, method: HttpMethod, path: &str) -> Result<Operation> {
        let responses = self.responses.ok_or_else(|| Error::MissingResponses {
            method: method.to_string(),
            path: path.to_string(),
        })?;
        Ok(Operation {
            operation_id: self.operation_id,
            tags: self.tags,
            parameters: self.parameters,
            request_body: self.request_body,
            responses,
        })
    }
}
