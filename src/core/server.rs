//! MCP Server implementation and lifecycle management.
//!
//! [`LogisticsServer`] implements the rmcp `ServerHandler` trait. Tool calls
//! all pass through [`LogisticsServer::dispatch`], the one place where a
//! handler outcome becomes a response envelope; nothing below it builds
//! protocol responses and nothing above it sees a raw domain error.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{error, info, info_span, instrument};

use super::clock::{Clock, SystemClock};
use super::config::Config;
use super::security::ZeroGuard;
use crate::domains::logistics::ReferenceData;
use crate::domains::prompts::PromptService;
use crate::domains::tools::{CallContext, ToolRegistry, envelope};

/// The main MCP server handler.
///
/// Cheap to clone: every collaborator sits behind an `Arc`, so the TCP
/// transport hands one clone to each connection.
#[derive(Clone)]
pub struct LogisticsServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered tools, in listing order.
    registry: Arc<ToolRegistry>,

    /// Incoterm and HS code tables.
    reference: Arc<ReferenceData>,

    /// Time source for payload and error timestamps.
    clock: Arc<dyn Clock>,

    /// Domain guard built from configuration.
    guard: ZeroGuard,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,
}

impl LogisticsServer {
    /// Create a new server with the logistics tool set.
    pub fn new(config: Config) -> Self {
        let reference = Arc::new(ReferenceData::new(&config.reference));
        Self::with_parts(
            config,
            ToolRegistry::logistics(),
            reference,
            Arc::new(SystemClock),
        )
    }

    /// Create a server from explicit collaborators.
    pub fn with_parts(
        config: Config,
        registry: ToolRegistry,
        reference: Arc<ReferenceData>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let guard = ZeroGuard::new(config.guard.hs_risk_stop);
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            reference,
            clock,
            guard,
            prompt_service: Arc::new(PromptService::new()),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// `"<display name> (v<version>)"`, used in readiness logs.
    pub fn banner(&self) -> String {
        format!(
            "{} (v{})",
            self.config.server.display_name, self.config.server.version
        )
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Get the reference data tables.
    pub fn reference(&self) -> &Arc<ReferenceData> {
        &self.reference
    }

    /// Run a tool and wrap the outcome in a response envelope.
    ///
    /// Never fails: unknown tools, bad input and guard stops all come back as
    /// error envelopes with `is_error` set.
    pub fn dispatch(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let span = info_span!("tool_call", tool = %name);
        let context = CallContext::new(
            self.clock.clone(),
            self.guard,
            self.reference.clone(),
            span.clone(),
        );

        span.in_scope(|| info!("Call {}", name));

        match self.registry.run(name, arguments, &context) {
            Ok(result) => envelope::ok(result.json, &result.text),
            Err(err) => {
                span.in_scope(|| error!("Call failed: {} {}", err.code(), err));
                envelope::from_error(&err, self.clock.now_utc())
            }
        }
    }
}

impl ServerHandler for LogisticsServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = self.config.server.name.clone();
        server_info.title = Some(self.config.server.display_name.clone());
        server_info.version = self.config.server.version.clone();

        ServerInfo {
            instructions: Some(
                "Samsung C&T HVDC logistics tools: invoice audit, container status, \
                 shipping cost, ETA prediction and weather-tied planning."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info,
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.registry.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(&request.name, request.arguments))
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        self.prompt_service
            .get_prompt(&request.name)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), Some(e.data())))
    }
}
