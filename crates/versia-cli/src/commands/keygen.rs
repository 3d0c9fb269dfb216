//! Keygen command implementation.

use serde_json::json;
use versia_signatures::Keypair;

use crate::output::format_json;

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let keypair = Keypair::generate();
    let private_key = keypair.private().to_pkcs8_base64()?;
    let public_key = keypair.public().to_spki_base64()?;

    if json_output {
        println!(
            "{}",
            format_json(&json!({
                "private_key": private_key,
                "public_key": public_key,
            }))
        );
    } else {
        println!("private_key: {}", private_key);
        println!("public_key:  {}", public_key);
    }
    Ok(())
}
