use route_finder::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [port] [graph_file]
    let config = ServerConfig::from_args(env::args().skip(1));

    println!("Starting route finder web server...");
    println!("   Port: {}", config.port);
    println!("   Graph file: {}", config.graph_file.display());
    println!("   CORS enabled: {}", config.enable_cors);
    println!();

    start_server_with_config(config).await?;

    Ok(())
}
