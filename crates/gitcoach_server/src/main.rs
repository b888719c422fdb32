//! Feedback API server for the GitHub training worksheet

mod handlers;
mod types;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gitcoach::{Engine, EngineConfig};
use handlers::{health, overall_feedback, section_feedback, AppState};

/// Worksheet feedback server
#[derive(Parser, Debug)]
#[command(name = "gitcoach-server")]
#[command(about = "Serve worksheet feedback backed by an OpenAI-compatible completion API")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Model to use for completions
    #[arg(short, long, default_value = "gpt-4o")]
    model: String,

    /// Backend completion API URL
    #[arg(short = 'u', long, default_value = "https://api.openai.com/v1")]
    backend_url: String,

    /// Backend API key (optional, uses OPENAI_API_KEY env var if not provided)
    #[arg(short = 'k', long)]
    backend_key: Option<String>,

    /// Origin allowed to call the API (repeatable)
    #[arg(
        long = "allow-origin",
        default_values_t = [
            "https://kojisugita1226.github.io".to_string(),
            "http://localhost:5000".to_string(),
            "http://127.0.0.1:5000".to_string(),
        ]
    )]
    allow_origin: Vec<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Resolve API key from args or environment; it never travels in requests
    let backend_key = args
        .backend_key
        .or_else(|| std::env::var("OPENAI_API_KEY").ok());

    let mut config = EngineConfig::new(&args.model).with_base_url(&args.backend_url);
    if let Some(key) = backend_key {
        config = config.with_api_key(key);
    }

    let state = Arc::new(AppState {
        engine: Engine::new(config),
    });

    // Only the known frontend origins may call the API
    let origins: Vec<HeaderValue> = args
        .allow_origin
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|_| panic!("invalid --allow-origin value: {origin}"))
        })
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/v1/feedback/section", post(section_feedback))
        .route("/v1/feedback/overall", post(overall_feedback))
        .route("/healthz", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("gitcoach server starting on {}", addr);
    tracing::info!("Model: {}", args.model);
    tracing::info!("Backend URL: {}", args.backend_url);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
