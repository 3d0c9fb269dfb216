//! Canonicalize command implementation.

use versia_canonical::{SignedAt, SigningContext};

use super::{parse_method, read_body};

pub fn run(
    method: String,
    path: String,
    timestamp: String,
    body: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let method = parse_method(&method)?;
    let signed_at =
        SignedAt::parse(&timestamp).map_err(|e| format!("Invalid timestamp: {}", e))?;
    let body = read_body(body.as_deref())?;

    let context = SigningContext::for_body(
        method.as_str(),
        &path,
        signed_at,
        &body,
    );
    println!("{}", context.canonical_string());
    Ok(())
}
