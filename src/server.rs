use crate::normalize::normalize_invoice_data;
use axum::{
    extract::Multipart,
    http::{Method, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use hyper::Server;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Root route returning static usage metadata
async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Invoice Data Normalizer API",
        "usage": "POST /normalize with a JSON file"
    }))
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "invoice-normalizer",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

fn client_error(detail: &str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "detail": detail })),
    )
        .into_response()
}

/// Normalize invoice data from an uploaded JSON file.
///
/// Accepts a multipart upload whose part must be `application/json`; the body
/// is decoded and handed to the normalization engine. Data-quality problems
/// never surface here as errors, only malformed requests do.
async fn normalize_upload(mut multipart: Multipart) -> axum::response::Response {
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            warn!("Normalize request without a file part");
            return client_error("No file provided");
        }
        Err(e) => {
            warn!("Malformed multipart request: {}", e);
            return client_error("Malformed multipart request");
        }
    };

    if field.content_type() != Some("application/json") {
        return client_error("Only JSON files are supported");
    }

    let contents = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to read uploaded file: {}", e);
            return client_error("Malformed multipart request");
        }
    };

    let invoice_data: serde_json::Value = match serde_json::from_slice(&contents) {
        Ok(value) => value,
        Err(_) => return client_error("Invalid JSON format"),
    };

    let normalized = normalize_invoice_data(&invoice_data);
    Json(normalized).into_response()
}

/// Create the HTTP server with all routes
pub fn create_server() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/normalize", post(normalize_upload))
        // Any unanticipated panic maps to a 500 instead of dropping the connection
        .layer(CatchPanicLayer::new())
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the specified port
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_server();

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Starting HTTP server on port {}", port);
    println!("🚀 HTTP server running on http://localhost:{port}");
    println!("💚 Health check: http://localhost:{port}/health");
    println!("📄 Normalize:    POST http://localhost:{port}/normalize");

    Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}
