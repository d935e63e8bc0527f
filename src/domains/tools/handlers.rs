//! Tool contract.
//!
//! Every operation is a [`ToolContract`]: an immutable [`ToolDescriptor`]
//! (name, description, input schema) plus a handler taking the raw argument
//! object and the per-call [`CallContext`].
//!
//! Concrete tools implement [`LogisticsTool`], which derives the input schema
//! from a typed params struct and wires deserialization into the handler.

use std::sync::Arc;

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::context::CallContext;
use super::error::{DomainError, DomainResult};

/// Output of a successful tool call.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// Structured payload. Always contains `ok: true` and `ts`.
    pub json: Value,

    /// One-line human-readable summary.
    pub text: String,
}

impl ToolResult {
    pub fn new(json: Value, text: impl Into<String>) -> Self {
        Self {
            json,
            text: text.into(),
        }
    }
}

/// Handler signature shared by all tools.
pub type ToolHandler =
    Arc<dyn Fn(JsonObject, &CallContext) -> DomainResult<ToolResult> + Send + Sync>;

/// Name, description and accepted input of a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Arc<JsonObject>,
}

impl ToolDescriptor {
    /// Create a Tool model for this descriptor (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.clone().into(),
            description: Some(self.description.clone().into()),
            input_schema: self.input_schema.clone(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// A registered tool: descriptor plus handler.
#[derive(Clone)]
pub struct ToolContract {
    descriptor: ToolDescriptor,
    handler: ToolHandler,
}

impl ToolContract {
    pub fn new(descriptor: ToolDescriptor, handler: ToolHandler) -> Self {
        Self {
            descriptor,
            handler,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    /// Invoke the handler. Missing arguments are treated as an empty object.
    pub fn execute(
        &self,
        arguments: Option<JsonObject>,
        context: &CallContext,
    ) -> DomainResult<ToolResult> {
        (self.handler)(arguments.unwrap_or_default(), context)
    }
}

impl std::fmt::Debug for ToolContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContract")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Trait implemented by each logistics tool definition.
pub trait LogisticsTool: 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed arguments; also the source of the advertised input schema.
    type Params: DeserializeOwned + JsonSchema + 'static;

    /// Execute the tool logic.
    fn execute(params: &Self::Params, context: &CallContext) -> DomainResult<ToolResult>;

    /// Descriptor derived from the params type.
    fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            input_schema: cached_schema_for_type::<Self::Params>(),
        }
    }

    /// Contract ready for registration.
    fn contract() -> ToolContract {
        let handler: ToolHandler = Arc::new(|arguments: JsonObject, context: &CallContext| {
            let params = parse_params::<Self::Params>(arguments)?;
            Self::execute(&params, context)
        });
        ToolContract::new(Self::descriptor(), handler)
    }
}

/// Deserialize a raw argument object, mapping shape errors to `BAD_INPUT`.
pub fn parse_params<P: DeserializeOwned>(arguments: JsonObject) -> DomainResult<P> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| DomainError::bad_input(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct EchoParams {
        message: String,
    }

    struct EchoTool;

    impl LogisticsTool for EchoTool {
        const NAME: &'static str = "echo";
        const DESCRIPTION: &'static str = "Echo a message";
        type Params = EchoParams;

        fn execute(params: &Self::Params, context: &CallContext) -> DomainResult<ToolResult> {
            Ok(ToolResult::new(
                json!({ "ok": true, "ts": context.now(), "message": params.message }),
                params.message.clone(),
            ))
        }
    }

    #[test]
    fn test_descriptor_from_params() {
        let descriptor = EchoTool::descriptor();
        assert_eq!(descriptor.name, "echo");
        assert!(descriptor.input_schema.contains_key("properties"));

        let tool = descriptor.to_tool();
        assert_eq!(tool.name, "echo");
    }

    #[test]
    fn test_contract_parses_arguments() {
        let context = CallContext::for_tests();
        let contract = EchoTool::contract();

        let args = json!({ "message": "hi" }).as_object().cloned();
        let result = contract.execute(args, &context).unwrap();
        assert_eq!(result.text, "hi");
        assert_eq!(result.json["ok"], json!(true));
    }

    #[test]
    fn test_contract_rejects_bad_shape() {
        let context = CallContext::for_tests();
        let err = EchoTool::contract().execute(None, &context).unwrap_err();
        assert!(matches!(err, DomainError::BadInput(_)));
    }
}
