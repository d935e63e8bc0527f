//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - Append-only registration at startup (last registration of a name wins)
//! - Tool metadata for listing, in registration order
//! - Dispatch of a call by exact name

use std::collections::HashMap;

use rmcp::model::{JsonObject, Tool};
use tracing::{debug, warn};

use super::context::CallContext;
use super::definitions::{
    ContainerStatusTool, HealthPingTool, InvoiceAuditTool, PredictTool, ShippingCostTool,
    WeatherTieTool,
};
use super::error::{DomainError, DomainResult};
use super::handlers::{LogisticsTool, ToolContract, ToolDescriptor, ToolResult};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - maps tool names to contracts.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolContract>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a list of contracts.
    pub fn with_tools(tools: impl IntoIterator<Item = ToolContract>) -> Self {
        let mut registry = Self::new();
        for tool in tools {
            registry.register(tool);
        }
        registry
    }

    /// Registry holding every logistics tool.
    ///
    /// This is the single source of truth for the advertised tool list.
    pub fn logistics() -> Self {
        Self::with_tools([
            HealthPingTool::contract(),
            InvoiceAuditTool::contract(),
            ContainerStatusTool::contract(),
            ShippingCostTool::contract(),
            PredictTool::contract(),
            WeatherTieTool::contract(),
        ])
    }

    /// Register a contract.
    ///
    /// Re-registering a name replaces the earlier contract in its original
    /// listing position.
    pub fn register(&mut self, tool: ToolContract) {
        match self.index.get(tool.name()) {
            Some(&slot) => {
                warn!("Tool re-registered, replacing: {}", tool.name());
                self.tools[slot] = tool;
            }
            None => {
                debug!("Registering tool: {}", tool.name());
                self.index.insert(tool.name().to_string(), self.tools.len());
                self.tools.push(tool);
            }
        }
    }

    /// Descriptors of all tools in registration order.
    pub fn list(&self) -> Vec<&ToolDescriptor> {
        self.tools.iter().map(ToolContract::descriptor).collect()
    }

    /// All tools as Tool models (metadata).
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|t| t.descriptor().to_tool()).collect()
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(ToolContract::name).collect()
    }

    /// Look up a contract by exact name.
    pub fn get(&self, name: &str) -> Option<&ToolContract> {
        self.index.get(name).map(|&slot| &self.tools[slot])
    }

    /// Dispatch a call to the named tool.
    ///
    /// Handler errors propagate unchanged; translating them into an error
    /// envelope is the caller's job.
    pub fn run(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        context: &CallContext,
    ) -> DomainResult<ToolResult> {
        let tool = self
            .get(name)
            .ok_or_else(|| DomainError::tool_not_found(name))?;
        context
            .span()
            .in_scope(|| tool.execute(arguments, context))
    }
}
