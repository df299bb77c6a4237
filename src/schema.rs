//! Declared validation schemas and their conversion to OpenAPI schema objects.
//!
//! The host validates requests with its own schema library. By the time a
//! route reaches this crate, each declared schema has already been rendered
//! into an OpenAPI-shaped JSON value by the host's converter; this module
//! treats that value as opaque. The only structure read here is the
//! optionality flag (parameters derive `required` from it) and an optional
//! component name, which routes the schema into the shared component
//! registry behind a `$ref`.

use crate::registry::ComponentRegistry;
use serde_json::{json, Value};

/// A request schema as declared on a route.
#[derive(Debug, Clone, Default)]
pub struct DeclaredSchema {
    /// The OpenAPI-shaped schema value produced by the host's converter
    pub schema: Value,
    /// Whether the declared validation schema was optional
    pub optional: bool,
    /// Shared component name; when set, conversion emits a `$ref` and
    /// registers the schema under `#/components/schemas/{name}`
    pub component: Option<String>,
}

impl DeclaredSchema {
    /// Create a required schema from a converted value
    pub fn new(schema: Value) -> Self {
        Self {
            schema,
            optional: false,
            component: None,
        }
    }

    /// Mark the schema as optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Route the schema through the shared component registry
    pub fn as_component(mut self, name: impl Into<String>) -> Self {
        self.component = Some(name.into());
        self
    }
}

/// Convert a declared schema into the value embedded in the document.
///
/// Plain schemas pass through unchanged. Component-named schemas are
/// registered in the shared registry and replaced by a reference, so every
/// occurrence of the same component points at one definition.
pub fn to_schema_object(decl: &DeclaredSchema, registry: &ComponentRegistry) -> Value {
    match &decl.component {
        Some(name) => {
            registry.register(name.clone(), decl.schema.clone());
            json!({ "$ref": format!("#/components/schemas/{}", name) })
        }
        None => decl.schema.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_schema_passes_through() {
        let registry = ComponentRegistry::new();
        let decl = DeclaredSchema::new(json!({ "type": "string" }));

        let value = to_schema_object(&decl, &registry);

        assert_eq!(value, json!({ "type": "string" }));
        assert!(registry.definitions().is_empty());
    }

    #[test]
    fn test_component_schema_registers_and_refs() {
        let registry = ComponentRegistry::new();
        let decl = DeclaredSchema::new(json!({
            "type": "object",
            "properties": { "title": { "type": "string" } }
        }))
        .as_component("Article");

        let value = to_schema_object(&decl, &registry);

        assert_eq!(value, json!({ "$ref": "#/components/schemas/Article" }));
        let definitions = registry.definitions();
        assert_eq!(definitions.len(), 1);
        assert_eq!(
            definitions["Article"]["properties"]["title"],
            json!({ "type": "string" })
        );
    }

    #[test]
    fn test_same_component_registered_once() {
        let registry = ComponentRegistry::new();
        let decl = DeclaredSchema::new(json!({ "type": "integer" })).as_component("Count");

        to_schema_object(&decl, &registry);
        to_schema_object(&decl, &registry);

        assert_eq!(registry.definitions().len(), 1);
    }

    #[test]
    fn test_optional_flag() {
        let decl = DeclaredSchema::new(json!({ "type": "string" })).optional();
        assert!(decl.optional);
        assert!(!DeclaredSchema::new(json!({})).optional);
    }
}
