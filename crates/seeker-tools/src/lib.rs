pub mod search_engine;

use async_trait::async_trait;
use seeker_common::{Result, SearchEngineFields, ToolError};
use serde::Serialize;
use serde_json::Value;

pub use search_engine::SearchEngineTool;

/// A named, described capability an orchestrator can invoke with JSON arguments.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// JSON Schema for the arguments accepted by [`Tool::call`].
    fn parameters(&self) -> Value;
    async fn call(&self, args: Value) -> Result<String>;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// Serializable summary of a tool, as handed to a model or printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

pub fn register_all_tools(fields: &SearchEngineFields) -> Result<Vec<Box<dyn Tool>>> {
    let tools: Vec<Box<dyn Tool>> = vec![Box::new(SearchEngineTool::new(fields)?)];
    Ok(tools)
}

/// Tools looked up by name.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<Box<dyn Tool>>) -> Self {
        Self { tools }
    }

    pub fn with_defaults(fields: &SearchEngineFields) -> Result<Self> {
        Ok(Self::new(register_all_tools(fields)?))
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|tool| tool.name() == name)
            .map(|tool| tool.as_ref())
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|tool| tool.definition()).collect()
    }

    pub async fn invoke(&self, name: &str, args: Value) -> Result<String> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.call(args).await
    }
}
