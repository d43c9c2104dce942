use seeker_tools::ToolRegistry;
use serde_json::json;

use crate::display;

pub async fn execute(registry: &ToolRegistry, tool: &str, query: &str) -> anyhow::Result<()> {
    let output = registry.invoke(tool, json!({ "query": query })).await?;
    display::print_output(&output);
    Ok(())
}
