//! Sign command implementation.

use serde_json::json;
use versia_signatures::{SignatureConstructor, SignedAt};

use super::{parse_method, read_body};
use crate::output::{format_json, print_header};

pub fn run(
    key: String,
    actor: String,
    method: String,
    path: String,
    body: Option<String>,
    timestamp: Option<i64>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let signer = SignatureConstructor::from_base64_key(&key, actor)
        .map_err(|e| format!("Invalid signing key: {}", e))?;
    let method = parse_method(&method)?;
    let body = read_body(body.as_deref())?;

    let signed = signer.sign_components(
        &method,
        &path,
        Some(&body),
        None,
        timestamp.map(SignedAt::from_secs),
    )?;
    let envelope = &signed.envelope;

    if json_output {
        println!(
            "{}",
            format_json(&json!({
                "signature": envelope.signature,
                "signed_at": envelope.signed_at.as_secs(),
                "signed_by": envelope.signed_by,
                "canonical_string": signed.canonical_string.as_str(),
            }))
        );
    } else {
        print_header("Versia-Signature", &envelope.signature);
        print_header("Versia-Signed-At", &envelope.signed_at.to_string());
        if let Some(signed_by) = &envelope.signed_by {
            print_header("Versia-Signed-By", signed_by);
        }
    }
    Ok(())
}
