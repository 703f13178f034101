use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use askpm_core::envelope::{Envelope, Payload};
use askpm_core::records::{LateProject, RevenueSummary};
use askpm_core::store::{CachedStore, PgStore, ProjectStore, StoreConfig, StoreError};
use askpm_core::{dispatch, interpret, Intent};

type SharedStore = Arc<CachedStore<PgStore>>;

#[derive(Debug, Deserialize)]
struct AskRequest {
    question: String,
}

#[derive(Debug, Serialize)]
struct AskResponse {
    question: String,
    intent: Option<Intent>,
    project_code: Option<i32>,
    result: AskResult,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum AskResult {
    Ok { data: Payload },
    Error { kind: &'static str, message: String },
}

impl From<Envelope> for AskResult {
    fn from(envelope: Envelope) -> Self {
        match envelope {
            Envelope::Success(data) => AskResult::Ok { data },
            Envelope::Failure(err) => AskResult::Error {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

async fn ask(State(store): State<SharedStore>, Json(req): Json<AskRequest>) -> Json<AskResponse> {
    let interpretation = interpret(&req.question);
    let envelope = dispatch(store.as_ref(), &interpretation).await;

    Json(AskResponse {
        question: interpretation.question,
        intent: interpretation.intent,
        project_code: interpretation.project_code,
        result: envelope.into(),
    })
}

#[derive(Debug, Serialize)]
struct DashboardResponse {
    late_projects: Vec<LateProject>,
    revenue: RevenueSummary,
}

async fn dashboard(
    State(store): State<SharedStore>,
) -> Result<Json<DashboardResponse>, (StatusCode, String)> {
    let late_projects = store.late_projects().await.map_err(unavailable)?;
    let revenue = store.aggregate_revenue().await.map_err(unavailable)?;

    Ok(Json(DashboardResponse {
        late_projects,
        revenue,
    }))
}

fn unavailable(err: StoreError) -> (StatusCode, String) {
    (StatusCode::SERVICE_UNAVAILABLE, err.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = StoreConfig::from_env()?;
    let cache_ttl = std::env::var("CACHE_TTL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(300);
    let store: SharedStore = Arc::new(CachedStore::new(
        PgStore::new(config),
        Duration::from_secs(cache_ttl),
    ));

    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("SERVER_PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("{host}:{port}");

    let app = Router::new()
        .route("/ask", post(ask))
        .route("/dashboard", get(dashboard))
        .with_state(store);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("server running on {bind_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
