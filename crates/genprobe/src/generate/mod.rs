use crate::prelude::{println, *};
use genprobe_core::generate::{
    default_request, describe_request, describe_response, generate_url, serialize_payload,
    USER_AGENT,
};

#[derive(Debug, clap::Parser)]
#[command(name = "generate")]
#[command(about = "Generation endpoint operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Send the smoke-test request and print the raw response body
    #[clap(name = "send")]
    Send(SendOptions),
}

#[derive(Debug, clap::Parser)]
pub struct SendOptions {
    /// Base URL of the generation service
    #[clap(long, env = "GENPROBE_URL", default_value = "http://127.0.0.1:8000")]
    pub base_url: String,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Send(options) => send(options, global).await,
    }
}

async fn send(options: SendOptions, global: crate::Global) -> Result<()> {
    let request = default_request();
    let payload = serialize_payload(&request).map_err(|e| eyre!(e))?;
    let url = generate_url(&options.base_url);

    if global.verbose {
        anstream::eprintln!("{}", describe_request(&url, payload.len()));
    }

    let client = reqwest::Client::new();
    let (status, body) = post_payload(&client, &url, payload).await?;

    if global.verbose {
        anstream::eprintln!("{}", describe_response(status, body.len()));
    }

    // The body is printed verbatim whatever the status code says.
    println!("{}", body);

    Ok(())
}

/// POST the serialized payload and return the status code and decoded body.
///
/// The response body is read whole and decoded as strict UTF-8; an invalid
/// byte sequence is an error, not a lossy replacement.
pub async fn post_payload(
    client: &reqwest::Client,
    url: &str,
    payload: String,
) -> Result<(u16, String)> {
    let response = client
        .post(url)
        .header("User-Agent", USER_AGENT)
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| Error::Network(f!("Failed to reach {url}: {e}")))?;

    let status = response.status().as_u16();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Network(f!("Failed to read response body: {e}")))?;
    let body = String::from_utf8(bytes.to_vec()).map_err(|e| Error::Decode(e.to_string()))?;

    Ok((status, body))
}
