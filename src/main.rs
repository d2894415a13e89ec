//! Command-line invoker for the Stable Fast 3D API.
//!
//! Usage: `stablefast3d <input_image> <output_dir> <api_key>`
//!
//! The entire user interface is one JSON line on stdout describing the
//! outcome. Every error, from a missing file to a network failure, is
//! absorbed into that line; the process itself always terminates normally,
//! so callers must inspect the `success` field rather than the exit status.

use stablefast3d::{InvocationResult, StabilityClient};
use std::env;

async fn generate(input: &str, output_dir: &str, api_key: &str) -> InvocationResult {
    let client = match StabilityClient::new(Some(api_key.to_string())) {
        Ok(client) => client,
        Err(e) => return InvocationResult::failure(e),
    };

    match client.generate_to_dir(input, output_dir).await {
        Ok(path) => InvocationResult::success(path),
        Err(e) => InvocationResult::failure(e),
    }
}

#[tokio::main]
async fn main() {
    // Load .env file if it exists.
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = match args.as_slice() {
        [input, output_dir, api_key] => generate(input, output_dir, api_key).await,
        _ => InvocationResult::invalid_arguments(),
    };

    println!("{}", result.to_json_line());
}
