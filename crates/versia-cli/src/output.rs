//! Output formatting utilities.

use serde_json::Value;

/// Formats a value as pretty JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Prints one `Name: value` header line.
pub fn print_header(name: &str, value: &str) {
    println!("{}: {}", name, value);
}
