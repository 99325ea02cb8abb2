use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use bin_packer::Algorithm;
use bin_packer::strategy::Discipline;
use serde::{Deserialize, Serialize};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Deserialize, Serialize)]
struct PackRequest {
    algorithm: Algorithm,
    #[serde(default)]
    capacity: u32,
    weights: Vec<u32>,
    #[serde(default)]
    bins: Option<usize>,
}

#[derive(Serialize)]
struct PackResponse {
    algorithm: Algorithm,
    bins: Vec<Vec<u32>>,
    bin_count: usize,
    loads: Vec<u64>,
    waste_percent: Option<f64>,
}

#[derive(Serialize)]
struct AlgorithmInfo {
    name: Algorithm,
    discipline: Discipline,
}

async fn pack(Json(req): Json<PackRequest>) -> Result<Json<PackResponse>, (StatusCode, String)> {
    tracing::info!(
        body = serde_json::to_string(&req).unwrap_or_default(),
        "POST /pack"
    );

    let solution = req
        .algorithm
        .run(req.capacity, &req.weights, req.bins)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(PackResponse {
        algorithm: req.algorithm,
        bins: solution.to_weights(),
        bin_count: solution.bin_count(),
        loads: solution.loads(),
        waste_percent: solution.waste_percent(),
    }))
}

async fn algorithms() -> Json<Vec<AlgorithmInfo>> {
    Json(
        Algorithm::ALL
            .iter()
            .map(|&a| AlgorithmInfo {
                name: a,
                discipline: a.discipline(),
            })
            .collect(),
    )
}

#[tokio::main]
async fn main() {
    let _sentry = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("development.log")
        .unwrap_or_else(|e| {
            eprintln!("failed to open development.log: {e}");
            std::process::exit(1);
        });

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("0.0.0.0:{port}");

    let app = Router::new()
        .route("/up", get(|| async { "ok" }))
        .route("/algorithms", get(algorithms))
        .route("/pack", post(pack))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap_or_else(|e| {
        eprintln!("failed to bind {addr}: {e}");
        std::process::exit(1);
    });
    eprintln!("Listening on {addr}");
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("server error: {e}");
        std::process::exit(1);
    }
}
