use dotenvy::dotenv;

mod config;
mod console;
mod setup;

use config::app_config::AppConfig;
use setup::{
    chat_loop::ChatLoop, dependency_injection::DependencyContainer, telemetry::init_tracing,
};

/// Azure Documentation Assistant entry point
///
/// Loads configuration, wires the kernel with the AzureDocs plugin and the
/// Azure OpenAI connector, then runs an interactive chat on stdin/stdout.
///
/// - config/: Environment-backed configuration
/// - setup/: Tracing, dependency injection and the chat loop
/// - console/: Terminal rendering of domain errors
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter, writing to stderr
    init_tracing();

    // 3. Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    println!("Deployment: {}", config.azure_openai.deployment_name);
    println!("Endpoint: {}", config.azure_openai.endpoint);
    println!("API Key: {}", config.azure_openai.masked_api_key());

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    println!(
        "Azure Documentation Assistant initialized. Ask questions about Azure services, concepts, or tasks!"
    );
    println!("Type 'exit' to quit.");

    // 5. Run chat loop
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    ChatLoop::new(stdin, tokio::io::stdout(), container.send_message_use_case)
        .run()
        .await?;

    Ok(())
}
