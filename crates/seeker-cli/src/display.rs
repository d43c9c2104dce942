use seeker_tools::ToolDefinition;

/// Tool output goes to stdout as-is so it can be piped.
pub fn print_output(output: &str) {
    println!("{}", output);
}

pub fn print_error(err: &dyn std::fmt::Display) {
    eprintln!("error: {}", err);
}

pub fn format_definition(definition: &ToolDefinition) -> String {
    let parameters = serde_json::to_string_pretty(&definition.parameters)
        .unwrap_or_else(|_| definition.parameters.to_string());
    format!(
        "{}\n  {}\n  parameters:\n{}",
        definition.name,
        definition.description,
        indent(&parameters, 4)
    )
}

fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}
