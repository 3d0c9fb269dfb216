//! Inspect command implementation.

use futures::executor::block_on;
use serde_json::{json, Value};
use std::io::{self, Read};
use versia_entities::{EntityValidator, RequestParser, SchemaValidator};

use crate::output::format_json;

pub fn run(input: Option<String>, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Read JSON from file or stdin
    let json_str = if let Some(path) = input {
        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let value: Value =
        serde_json::from_str(&json_str).map_err(|e| format!("Invalid JSON: {}", e))?;
    let type_tag = value.get("type").cloned().unwrap_or(Value::Null);
    let parser = RequestParser::new(value)?;

    let Some(kind) = parser.kind() else {
        if json_output {
            println!("{}", format_json(&json!({ "type": type_tag, "known": false })));
        } else {
            println!("unknown type: {}", type_tag);
        }
        return Ok(());
    };

    block_on(SchemaValidator.validate(kind, parser.body()))?;

    if json_output {
        println!(
            "{}",
            format_json(&json!({
                "type": kind.tag(),
                "known": true,
                "extension": kind.is_extension(),
                "valid": true,
            }))
        );
    } else {
        println!("{}\tvalid", kind);
    }
    Ok(())
}
