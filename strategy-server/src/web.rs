//! HTTP routes: persona roster, task board, chat and structured reports.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{Method, header};
use axum::response::Json;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strategy_agents::agent::AgentStatus;
use strategy_agents::schemas::{NewTask, UserMessage};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::ApiError;
use crate::server::SharedState;

pub fn router(state: Arc<SharedState>) -> Router {
    let cors = cors_layer(&state.config.cors_origins);
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(api_health))
        .route("/api/agents", get(api_agents))
        .route("/api/agents/{id}/status", get(api_agent_status))
        .route("/api/agents/{id}/toggle", post(api_toggle_agent))
        .route("/api/tasks", get(api_tasks).post(api_create_task))
        .route("/api/chat/message", post(api_chat_message))
        .route("/api/market/research", get(api_market_research))
        .route("/api/projects/analyze", post(api_analyze_project))
        .route("/api/sprints/plan", post(api_sprint_plan))
        .route("/api/pitch/deck", post(api_pitch_deck))
        .route("/api/tech/recommendations", post(api_tech_recommendations))
        .route("/ws", get(crate::ws::ws_upgrade))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            origins.iter().filter_map(|o| o.parse().ok()),
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Trimmed, non-empty parameter or a 400 naming it.
fn required(value: Option<String>, name: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::BadRequest(format!("{name} is required"))),
    }
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Team Strategy Agent API is running",
        "status": "healthy",
    }))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    connections: usize,
    agents: usize,
    active_agents: usize,
    uptime_secs: u64,
}

async fn api_health(State(state): State<Arc<SharedState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        connections: state.connections.count(),
        agents: state.agents.agents().len(),
        active_agents: state.agents.active_count(),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}

async fn api_agents(State(state): State<Arc<SharedState>>) -> Json<Value> {
    Json(json!({ "agents": state.agents.agents() }))
}

async fn api_agent_status(
    Path(id): Path<String>,
    State(state): State<Arc<SharedState>>,
) -> Result<Json<AgentStatus>, ApiError> {
    Ok(Json(state.agents.status(&id)?))
}

async fn api_toggle_agent(
    Path(id): Path<String>,
    State(state): State<Arc<SharedState>>,
) -> Result<Json<Value>, ApiError> {
    let agent = state.agents.toggle(&id)?;
    tracing::info!(agent = %agent.id, active = agent.active, "Agent toggled");
    Ok(Json(json!({ "success": true, "agent": agent })))
}

async fn api_tasks(State(state): State<Arc<SharedState>>) -> Result<Json<Value>, ApiError> {
    let tasks = state.tasks.list()?;
    Ok(Json(json!({ "tasks": tasks })))
}

async fn api_create_task(
    State(state): State<Arc<SharedState>>,
    Json(task): Json<NewTask>,
) -> Result<Json<Value>, ApiError> {
    if task.title.trim().is_empty() {
        return Err(ApiError::BadRequest("title is required".into()));
    }
    let task = state.tasks.create(task)?;
    Ok(Json(json!({ "success": true, "task": task })))
}

async fn api_chat_message(
    State(state): State<Arc<SharedState>>,
    Json(message): Json<UserMessage>,
) -> Json<Value> {
    let responses = state
        .agents
        .process_user_message(&message.content, &message.agents)
        .await;
    Json(json!({ "responses": responses }))
}

#[derive(Deserialize)]
struct ResearchQuery {
    query: Option<String>,
}

async fn api_market_research(
    State(state): State<Arc<SharedState>>,
    Query(params): Query<ResearchQuery>,
) -> Result<Json<Value>, ApiError> {
    let query = required(params.query, "query")?;
    let research = state.agents.market_research(&query).await;
    Ok(Json(json!({ "research": research })))
}

#[derive(Deserialize)]
struct AnalyzeQuery {
    project_description: Option<String>,
}

async fn api_analyze_project(
    State(state): State<Arc<SharedState>>,
    Query(params): Query<AnalyzeQuery>,
) -> Result<Json<Value>, ApiError> {
    let description = required(params.project_description, "project_description")?;
    let analysis = state.agents.analyze_project(&description).await;
    Ok(Json(json!({ "analysis": analysis })))
}

#[derive(Deserialize)]
struct SprintRequest {
    description: String,
    #[serde(default)]
    capacity: BTreeMap<String, u32>,
}

async fn api_sprint_plan(
    State(state): State<Arc<SharedState>>,
    Json(req): Json<SprintRequest>,
) -> Json<Value> {
    let plan = state.agents.sprint_plan(&req.description, req.capacity).await;
    Json(json!({ "plan": plan }))
}

#[derive(Deserialize)]
struct PitchRequest {
    description: String,
    #[serde(default = "default_audience")]
    target_audience: String,
}

fn default_audience() -> String {
    "investors".to_string()
}

async fn api_pitch_deck(
    State(state): State<Arc<SharedState>>,
    Json(req): Json<PitchRequest>,
) -> Json<Value> {
    let deck = state
        .agents
        .pitch_deck(&req.description, &req.target_audience)
        .await;
    Json(json!({ "deck": deck }))
}

#[derive(Deserialize)]
struct TechRequest {
    requirements: String,
}

async fn api_tech_recommendations(
    State(state): State<Arc<SharedState>>,
    Json(req): Json<TechRequest>,
) -> Json<Value> {
    let recommendations = state.agents.tech_recommendations(&req.requirements).await;
    Json(json!({ "recommendations": recommendations }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert!(required(None, "query").is_err());
        assert!(required(Some("   ".into()), "query").is_err());
        assert_eq!(required(Some("fintech".into()), "query").unwrap(), "fintech");
    }

    #[test]
    fn invalid_origins_are_skipped() {
        // Builds without panicking even with an unparsable origin.
        let _ = cors_layer(&["http://localhost:3000".into(), "bad\norigin".into()]);
    }
}
