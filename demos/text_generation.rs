use dotenv::dotenv;
use promptkit::{CompletionOptions, complete};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let response = complete(
        "Share a fun fact about Rust programming.",
        &CompletionOptions::default(),
    )
    .await?;

    println!("Assistant:\n{}", response);

    Ok(())
}
