//! Tone Analyzer Proxy
//!
//! This application accepts a text string over HTTP, forwards it to the
//! Watson Tone Analyzer API with basic-auth credentials attached, and
//! relays the upstream JSON response back to the caller.

mod api;
mod core;
mod models;

use crate::api::endpoints::{AppState, create_router};
use crate::core::client::WatsonClient;
use crate::core::config::Config;
use crate::core::logging::init_logging;
use crate::core::service::ToneAnalyzer;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Check for --help flag
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            eprintln!("Configuration Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config.log_level);

    // Print startup banner
    print_startup_banner(&config);

    // Validate credentials
    if !config.validate_credentials() {
        error!("Watson credentials are missing or empty");
        std::process::exit(1);
    }

    // Create the upstream client
    let client = match WatsonClient::new(
        config.watson_username.clone(),
        config.watson_password.clone(),
        config.watson_base_url.clone(),
        config.request_timeout,
    ) {
        Ok(client) => client.version(config.watson_version.clone()),
        Err(e) => {
            error!("Failed to create Watson client: {}", e);
            std::process::exit(1);
        }
    };
    let analyzer: Arc<dyn ToneAnalyzer> = Arc::new(client);

    info!("Using upstream service: {}", analyzer.service_name());

    // Create application state
    let app_state = AppState {
        config: config.clone(),
        analyzer,
    };

    // Create router
    let app = create_router(app_state);

    // Bind to address
    let addr = format!("{}:{}", config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Server listening on http://{}", addr);

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Print startup banner with configuration
fn print_startup_banner(config: &Config) {
    println!("🚀 Tone Analyzer Proxy v0.1.0");
    println!("✅ Configuration loaded successfully");
    println!("   Endpoint: {}", config.watson_base_url);
    println!("   API Version: {}", config.watson_version);
    println!("   Request Timeout: {}s", config.request_timeout);
    println!("   Server: {}:{}", config.host, config.port);
    println!(
        "   Credentials: {}",
        if config.validate_credentials() {
            "Configured"
        } else {
            "Missing"
        }
    );
    println!();
}

/// Print help message
fn print_help() {
    println!("Tone Analyzer Proxy v0.1.0");
    println!();
    println!("Usage: tone-proxy [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Environment variables:");
    println!("  CONFIG_PATH - Path to the TOML config file (default: config.toml)");
    println!();
    println!("Configuration file keys:");
    println!("  [watson]");
    println!("  username        - Service username (required)");
    println!("  password        - Service password (required)");
    println!("  version         - API version (default: 2016-05-19)");
    println!("  base_url        - Upstream endpoint URL");
    println!();
    println!("  [server]");
    println!("  host            - Server host (default: 0.0.0.0)");
    println!("  port            - Server port (default: 8082)");
    println!("  log_level       - Logging level (default: info)");
    println!();
    println!("  [request]");
    println!("  request_timeout - Upstream timeout in seconds (default: 90)");
    println!();
    println!("Endpoints:");
    println!("  GET/POST /tone  - text (required), sentences, tones");
    println!("  GET /health     - Health check");
    println!("  GET /test-connection - Upstream connectivity probe");
}
