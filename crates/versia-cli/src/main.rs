//! Versia CLI - Command-line interface for request signing and entity inspection.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{canonicalize, inspect, keygen, sign, verify};

#[derive(Parser)]
#[command(name = "versia")]
#[command(about = "Versia federation request signing and entity inspection CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an Ed25519 keypair
    Keygen {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the canonical string a request would be signed over
    Canonicalize {
        /// HTTP method
        #[arg(long, default_value = "GET")]
        method: String,
        /// Request path, without query
        #[arg(long)]
        path: String,
        /// Signing time in Unix seconds, as sent in Versia-Signed-At
        #[arg(long, allow_negative_numbers = true)]
        timestamp: String,
        /// Body file, `-` for stdin (default: empty body)
        #[arg(long)]
        body: Option<String>,
    },
    /// Sign a request and print its signature headers
    Sign {
        /// Base64 PKCS8 private key
        #[arg(long, env = "VERSIA_PRIVATE_KEY", hide_env_values = true)]
        key: String,
        /// URI of the signing actor
        #[arg(long, env = "VERSIA_ACTOR")]
        actor: String,
        /// HTTP method
        #[arg(long, default_value = "GET")]
        method: String,
        /// Request path, without query
        #[arg(long)]
        path: String,
        /// Body file, `-` for stdin (default: empty body)
        #[arg(long)]
        body: Option<String>,
        /// Signing time in Unix seconds (default: now)
        #[arg(long, allow_negative_numbers = true)]
        timestamp: Option<i64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify a request signature
    Verify {
        /// Base64 SPKI public key of the signer
        #[arg(long, env = "VERSIA_PUBLIC_KEY")]
        public_key: String,
        /// Base64 signature (Versia-Signature)
        #[arg(long)]
        signature: String,
        /// Signing time in Unix seconds (Versia-Signed-At)
        #[arg(long, allow_negative_numbers = true)]
        signed_at: String,
        /// HTTP method
        #[arg(long, default_value = "GET")]
        method: String,
        /// Request path, without query
        #[arg(long)]
        path: String,
        /// Body file, `-` for stdin (default: empty body)
        #[arg(long)]
        body: Option<String>,
        /// Exit with error code if the signature does not match
        #[arg(long)]
        strict: bool,
    },
    /// Show which entity kind a JSON body dispatches to
    Inspect {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Keygen { json } => keygen::run(json),
        Commands::Canonicalize {
            method,
            path,
            timestamp,
            body,
        } => canonicalize::run(method, path, timestamp, body),
        Commands::Sign {
            key,
            actor,
            method,
            path,
            body,
            timestamp,
            json,
        } => sign::run(key, actor, method, path, body, timestamp, json),
        Commands::Verify {
            public_key,
            signature,
            signed_at,
            method,
            path,
            body,
            strict,
        } => verify::run(public_key, signature, signed_at, method, path, body, strict),
        Commands::Inspect { input, json } => inspect::run(input, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
