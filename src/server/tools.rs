//! Tool catalog and argument validation
//!
//! Arguments arrive as an untyped JSON object. Each tool decodes them into a
//! strict structure; any decode failure (missing field, wrong type, dependency
//! without `/`) is an invalid-arguments error.

use crate::domain::DependencyRef;
use crate::error::ToolError;
use rmcp::model::{JsonObject, Tool};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Tool name: latest version lookup
pub const GET_LATEST_VERSION: &str = "get_clojars_latest_version";

/// Tool name: version existence check
pub const CHECK_VERSION_EXISTS: &str = "check_clojars_version_exists";

const INVALID_DEPENDENCY_MESSAGE: &str =
    r#"Invalid dependency format. Expected "group/artifact" (e.g. "metosin/reitit")"#;

const INVALID_VERSION_CHECK_MESSAGE: &str =
    r#"Invalid arguments. Expected "dependency" in "group/artifact" format and "version" string"#;

const DEPENDENCY_DESCRIPTION: &str =
    r#"Clojars dependency name in format "group/artifact" (e.g. "metosin/reitit")"#;

#[derive(Debug, Deserialize)]
struct LatestVersionArgs {
    dependency: String,
}

#[derive(Debug, Deserialize)]
struct VersionExistsArgs {
    dependency: String,
    version: String,
}

/// A validated tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequest {
    LatestVersion {
        dependency: DependencyRef,
    },
    VersionExists {
        dependency: DependencyRef,
        version: String,
    },
}

impl ToolRequest {
    /// Validate a tool call by name and raw arguments.
    ///
    /// The tool name is checked before the arguments are looked at.
    pub fn parse(name: &str, arguments: Option<JsonObject>) -> Result<Self, ToolError> {
        match name {
            GET_LATEST_VERSION => {
                let args: LatestVersionArgs = decode(arguments, INVALID_DEPENDENCY_MESSAGE)?;
                let dependency = parse_dependency(&args.dependency, INVALID_DEPENDENCY_MESSAGE)?;
                Ok(ToolRequest::LatestVersion { dependency })
            }
            CHECK_VERSION_EXISTS => {
                let args: VersionExistsArgs = decode(arguments, INVALID_VERSION_CHECK_MESSAGE)?;
                let dependency =
                    parse_dependency(&args.dependency, INVALID_VERSION_CHECK_MESSAGE)?;
                Ok(ToolRequest::VersionExists {
                    dependency,
                    version: args.version,
                })
            }
            other => Err(ToolError::unknown_tool(other)),
        }
    }

    /// Tool name this request was parsed from
    pub fn tool_name(&self) -> &'static str {
        match self {
            ToolRequest::LatestVersion { .. } => GET_LATEST_VERSION,
            ToolRequest::VersionExists { .. } => CHECK_VERSION_EXISTS,
        }
    }

    /// Dependency the request targets
    pub fn dependency(&self) -> &DependencyRef {
        match self {
            ToolRequest::LatestVersion { dependency } => dependency,
            ToolRequest::VersionExists { dependency, .. } => dependency,
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    arguments: Option<JsonObject>,
    message: &str,
) -> Result<T, ToolError> {
    let arguments = arguments.ok_or_else(|| ToolError::invalid_arguments(message))?;
    serde_json::from_value(Value::Object(arguments))
        .map_err(|_| ToolError::invalid_arguments(message))
}

fn parse_dependency(value: &str, message: &str) -> Result<DependencyRef, ToolError> {
    DependencyRef::parse(value).ok_or_else(|| ToolError::invalid_arguments(message))
}

/// Static tool catalog advertised by `tools/list`
pub fn catalog() -> Vec<Tool> {
    vec![
        Tool::new(
            GET_LATEST_VERSION,
            "Get the latest version of a Clojars dependency (Maven artifact)",
            object_schema(
                vec![("dependency", string_property(DEPENDENCY_DESCRIPTION))],
                &["dependency"],
            ),
        ),
        Tool::new(
            CHECK_VERSION_EXISTS,
            "Check if a specific version of a Clojars dependency exists",
            object_schema(
                vec![
                    ("dependency", string_property(DEPENDENCY_DESCRIPTION)),
                    (
                        "version",
                        string_property(r#"Version to check (e.g. "0.7.2")"#),
                    ),
                ],
                &["dependency", "version"],
            ),
        ),
    ]
}

fn string_property(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description,
    })
}

/// Input schema of type `object` with the given properties
fn object_schema(properties: Vec<(&str, Value)>, required: &[&str]) -> Arc<JsonObject> {
    let properties: JsonObject = properties
        .into_iter()
        .map(|(name, property)| (name.to_string(), property))
        .collect();
    let required: Vec<Value> = required.iter().map(|name| Value::from(*name)).collect();

    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), Value::from("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    schema.insert("required".to_string(), Value::Array(required));
    Arc::new(schema)
}
