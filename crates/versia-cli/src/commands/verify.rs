//! Verify command implementation.

use versia_signatures::{SignatureValidator, SignedAt};

use super::{parse_method, read_body};

pub fn run(
    public_key: String,
    signature: String,
    signed_at: String,
    method: String,
    path: String,
    body: Option<String>,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let validator = SignatureValidator::from_base64_key(&public_key)
        .map_err(|e| format!("Invalid public key: {}", e))?;
    let signed_at =
        SignedAt::parse(&signed_at).map_err(|e| format!("Invalid timestamp: {}", e))?;
    let method = parse_method(&method)?;
    let body = read_body(body.as_deref())?;

    let valid = validator.validate_components(&signature, signed_at, &method, &path, &body)?;

    if valid {
        println!("valid");
    } else {
        println!("invalid");
        if strict {
            return Err("signature does not match".into());
        }
    }
    Ok(())
}
