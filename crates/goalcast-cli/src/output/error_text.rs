use goalcast_client::ClientError;
use serde_json::Value;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "Something went wrong, but it's easy to fix.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
    ];

    if let Some(goal_text) = error
        .data
        .as_ref()
        .and_then(|data| data.get("goal_text"))
        .and_then(Value::as_str)
    {
        lines.push(format!("  Goal:     \"{goal_text}\""));
    }

    lines.push(String::new());
    lines.push("What to do next:".to_string());

    let mut steps = error.recovery_steps.clone();
    if let Some(help) = goal_help_step(error) {
        steps.push(help);
    }

    if steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

fn goal_help_step(error: &ClientError) -> Option<String> {
    let data = error.data.as_ref()?;
    let command = data.get("help_command").and_then(Value::as_str)?;
    let section = data
        .get("help_section_title")
        .and_then(Value::as_str)
        .unwrap_or("help");
    Some(format!("Run `{command}` and read the {section} notes."))
}
