//! Route records consumed by the assembly pipeline.
//!
//! Routes are produced by the host application and handed to the pipeline
//! through providers. The pipeline only ever reads them: a route is never
//! mutated after it has been provided, and each generation run consumes the
//! collected set exactly once.

use crate::schema::DeclaredSchema;

/// Complete information about a single registered route.
///
/// This is the unit the whole pipeline operates on: the collector gathers
/// them, the matcher filters them, and the assembler chain turns each one
/// into an OpenAPI operation.
#[derive(Debug, Clone)]
pub struct Route {
    /// The URL path pattern in host notation (e.g., "/users/:id")
    pub path: String,
    /// The HTTP method as declared by the host; validated during assembly
    pub method: String,
    /// Origin metadata used for filtering, tagging and operation ids
    pub info: RouteInfo,
    /// Opaque handler reference; carried through but never interpreted
    pub handler: String,
    /// Declared request schemas, if the route has any
    pub request: Option<RouteRequest>,
}

/// Origin metadata attached to every route by the host.
#[derive(Debug, Clone, Default)]
pub struct RouteInfo {
    /// The host-assigned route class (e.g., "admin" or "content-api")
    pub kind: String,
    /// Name of the API the route belongs to, if any
    pub api_name: Option<String>,
    /// Name of the plugin the route belongs to, if any
    pub plugin_name: Option<String>,
}

/// Declared request schemas for a route.
///
/// All three collections are ordered name-to-schema maps: `params` and
/// `query` are keyed by parameter name, `body` by media type.
#[derive(Debug, Clone, Default)]
pub struct RouteRequest {
    /// Path parameter schemas
    pub params: Vec<(String, DeclaredSchema)>,
    /// Query parameter schemas
    pub query: Vec<(String, DeclaredSchema)>,
    /// Request body schemas keyed by media type
    pub body: Vec<(String, DeclaredSchema)>,
}

/// HTTP methods recognized by the assembly pipeline.
///
/// These are the canonical path-item methods of OpenAPI 3.1. Anything
/// outside this set is rejected during path-item assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    /// Parse a method string case-insensitively.
    ///
    /// Returns [`crate::error::Error::UnrecognizedMethod`] for anything
    /// outside the canonical set; the offending route path is included in
    /// the error for diagnostics.
    pub fn parse(method: &str, path: &str) -> crate::error::Result<Self> {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "PATCH" => Ok(HttpMethod::Patch),
            "OPTIONS" => Ok(HttpMethod::Options),
            "HEAD" => Ok(HttpMethod::Head),
            "TRACE" => Ok(HttpMethod::Trace),
            _ => Err(crate::error::Error::UnrecognizedMethod {
                method: method.to_string(),
                path: path.to_string(),
            }),
        }
    }

    /// The lower-cased form used as a path-item key and in operation ids
    pub fn as_lower(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Trace => "trace",
        }
    }

    /// The upper-cased wire form
    pub fn as_upper(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_upper())
    }
}

impl Route {
    /// Create a new Route with minimal required fields
    pub fn new(path: impl Into<String>, method: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            info: RouteInfo::default(),
            handler: handler.into(),
            request: None,
        }
    }

    /// Set the route class
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.info.kind = kind.into();
        self
    }

    /// Attach the owning API name
    pub fn api_name(mut self, name: impl Into<String>) -> Self {
        self.info.api_name = Some(name.into());
        self
    }

    /// Attach the owning plugin name
    pub fn plugin_name(mut self, name: impl Into<String>) -> Self {
        self.info.plugin_name = Some(name.into());
        self
    }

    /// Attach declared request schemas
    pub fn request(mut self, request: RouteRequest) -> Self {
        self.request = Some(request);
        self
    }
}
