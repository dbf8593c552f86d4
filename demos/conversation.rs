use dotenv::dotenv;
use promptkit::{CompletionOptions, Message, complete_conversation};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let messages = vec![
        Message::system("You are a friendly chatbot that answers in one sentence."),
        Message::user("Hi, my name is Isa."),
        Message::assistant("Hi Isa! It's nice to meet you. How can I help today?"),
        Message::user("Can you remind me what my name is?"),
    ];

    let options = CompletionOptions::new()
        .with_model("gpt-4o-mini")
        .with_temperature(1.0);

    let response = complete_conversation(&messages, &options).await?;

    println!("Assistant:\n{}", response);

    Ok(())
}
