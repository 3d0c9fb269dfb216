//! Command implementations.

pub mod canonicalize;
pub mod inspect;
pub mod keygen;
pub mod sign;
pub mod verify;

use http::Method;
use std::io::{self, Read};

/// Reads a body from a file, from stdin for `-`, or returns an empty body.
pub fn read_body(path: Option<&str>) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    match path {
        None => Ok(Vec::new()),
        Some("-") => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => {
            std::fs::read(path).map_err(|e| format!("Failed to read file {}: {}", path, e).into())
        }
    }
}

/// Parses an HTTP method name.
pub fn parse_method(method: &str) -> Result<Method, Box<dyn std::error::Error>> {
    Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .map_err(|e| format!("Invalid method {}: {}", method, e).into())
}
