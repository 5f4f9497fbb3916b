use std::io;

use serde_json::Value;

use super::format::{format_money, key_value_rows, pluralize};

pub fn render_preview(data: &Value) -> io::Result<String> {
    let months = required_u64(data, "months")?;
    let deadline = required_str(data, "deadline")?;
    let timeframe = format!(
        "{} (by {deadline})",
        pluralize(months, "month", "months")
    );

    let mut lines = vec!["Goal preview:".to_string(), String::new()];
    lines.extend(key_value_rows(
        &[
            ("Amount", format_money(required_f64(data, "amount")?)),
            ("Timeframe", timeframe),
            (
                "Required",
                format!("{}/mo", format_money(required_f64(data, "required_monthly")?)),
            ),
        ],
        2,
    ));
    lines.push(String::new());
    lines.push(parsed_from_line(data)?);
    Ok(lines.join("\n"))
}

pub fn render_amount(data: &Value) -> io::Result<String> {
    let mut lines = vec!["Target amount:".to_string(), String::new()];
    lines.extend(key_value_rows(
        &[
            ("Amount", format_money(required_f64(data, "amount")?)),
            ("Notation", notation_label(required_str(data, "notation")?)),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

pub fn render_deadline(data: &Value) -> io::Result<String> {
    let mut entries = vec![("Kind", required_str(data, "kind")?.to_string())];

    if let Some(date) = data.get("date").and_then(Value::as_str) {
        entries.push(("Date", date.to_string()));
    }
    if let Some(duration) = data.get("duration") {
        let count = required_u64(duration, "count")?;
        let unit = required_str(duration, "unit")?;
        entries.push(("Duration", pluralize(count, unit, &format!("{unit}s"))));
    }
    entries.push((
        "Months",
        pluralize(required_u64(data, "months")?, "month", "months"),
    ));

    let mut lines = vec!["Deadline:".to_string(), String::new()];
    lines.extend(key_value_rows(&entries, 2));
    lines.push(String::new());
    lines.push(parsed_from_line(data)?);
    Ok(lines.join("\n"))
}

pub fn render_span(data: &Value) -> io::Result<String> {
    let mut lines = vec!["Month span:".to_string(), String::new()];
    lines.extend(key_value_rows(
        &[
            ("Start", required_str(data, "start")?.to_string()),
            ("End", required_str(data, "end")?.to_string()),
            (
                "Months",
                pluralize(required_u64(data, "months")?, "month", "months"),
            ),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

pub fn render_payload(data: &Value) -> io::Result<String> {
    let file_field = required_str(data, "file_field")?;
    let goal_field = required_str(data, "goal_field")?;

    let mut lines = vec!["Forecast request form fields:".to_string(), String::new()];
    lines.extend(key_value_rows(
        &[
            (file_field, "<transactions CSV upload>".to_string()),
            (goal_field, required_str(data, "goal_value")?.to_string()),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

fn parsed_from_line(data: &Value) -> io::Result<String> {
    Ok(format!(
        "Read from \"{}\" as of {}.",
        required_str(data, "goal_text")?,
        required_str(data, "today")?
    ))
}

fn notation_label(notation: &str) -> String {
    match notation {
        "currency_symbol" => "dollar sign".to_string(),
        "currency_word" => "currency word".to_string(),
        "magnitude_suffix" => "magnitude letter".to_string(),
        other => other.to_string(),
    }
}

fn required_str<'a>(data: &'a Value, key: &str) -> io::Result<&'a str> {
    data.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| missing_field(key))
}

fn required_u64(data: &Value, key: &str) -> io::Result<u64> {
    data.get(key)
        .and_then(Value::as_u64)
        .ok_or_else(|| missing_field(key))
}

fn required_f64(data: &Value, key: &str) -> io::Result<f64> {
    data.get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| missing_field(key))
}

fn missing_field(key: &str) -> io::Error {
    io::Error::other(format!("command output is missing `{key}`"))
}
