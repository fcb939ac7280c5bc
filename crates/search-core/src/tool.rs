//! Tool trait definition

use crate::{Result, ToolOutput};
use async_trait::async_trait;
use serde_json::Value;

/// Trait for tools an agent runtime can invoke
///
/// Each tool provides a name, a description, and a JSON schema for its
/// input. Invocation takes the raw JSON arguments and returns text content.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with the given arguments
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as a JSON value (should match `input_schema`)
    ///
    /// # Returns
    ///
    /// The content to hand back to the caller
    async fn execute(&self, params: Value) -> Result<ToolOutput>;

    /// Get the tool's name
    ///
    /// Must be unique within a [`ToolRegistry`](crate::ToolRegistry)
    fn name(&self) -> &str;

    /// Get the tool's description
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    fn input_schema(&self) -> Value;
}
