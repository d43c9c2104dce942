use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use seeker_tools::ToolRegistry;
use serde_json::json;
use tracing::debug;

use crate::display;

pub async fn run(registry: &ToolRegistry, tool: &str) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("Search Engine - Interactive Mode");
    println!("Type a query, or 'exit' to quit");

    loop {
        match rl.readline("search> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" || line == "quit" {
                    break;
                }
                if let Err(err) = rl.add_history_entry(line) {
                    debug!("Failed to record history entry: {}", err);
                }

                // a failed search should not end the session
                match registry.invoke(tool, json!({ "query": line })).await {
                    Ok(output) => display::print_output(&output),
                    Err(err) => display::print_error(&err),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                debug!("Readline failed: {}", err);
                return Err(err.into());
            }
        }
    }

    Ok(())
}
