use floyd_warshall::web::server::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let port = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => ServerConfig::default().port,
    };

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    println!("Starting Floyd-Warshall API server...");
    println!("Configuration:");
    println!("   Port: {}", config.port);
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max sessions: {}", config.max_sessions);
    println!("   Max nodes: {}", config.max_nodes);
    println!();

    start_server(config).await?;

    Ok(())
}
