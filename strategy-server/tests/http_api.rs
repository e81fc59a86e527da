//! HTTP API acceptance tests.
//!
//! Each test starts its own server on an ephemeral port with an
//! in-memory task board and every simulated delay switched off.

use serde_json::{Value, json};
use strategy_server::config::ServerConfig;
use strategy_server::server::Server;

async fn start_server() -> String {
    let config = ServerConfig {
        listen_addr: "127.0.0.1:0".to_string(),
        ..Default::default()
    }
    .without_delays();
    let (addr, _handle) = Server::new(config).start().await.unwrap();
    format!("http://{addr}")
}

async fn get_json(url: &str) -> (u16, Value) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

async fn post_json(url: &str, body: &Value) -> (u16, Value) {
    let resp = reqwest::Client::new().post(url).json(body).send().await.unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn root_and_health() {
    let base = start_server().await;

    let (status, body) = get_json(&format!("{base}/")).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Team Strategy Agent API is running");
    assert_eq!(body["status"], "healthy");

    let (status, body) = get_json(&format!("{base}/api/health")).await;
    assert_eq!(status, 200);
    assert_eq!(body["agents"], 5);
    assert_eq!(body["active_agents"], 5);
    assert_eq!(body["connections"], 0);
}

#[tokio::test]
async fn agents_listed_in_roster_order() {
    let base = start_server().await;
    let (_, body) = get_json(&format!("{base}/api/agents")).await;
    let ids: Vec<&str> = body["agents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["pm", "tech", "market", "pitch", "sprint"]);
    assert_eq!(body["agents"][0]["name"], "PM Agent");
    assert_eq!(body["agents"][0]["active"], true);
}

#[tokio::test]
async fn toggle_flips_and_silences_agent() {
    let base = start_server().await;

    let (status, body) = post_json(&format!("{base}/api/agents/tech/toggle"), &json!({})).await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["agent"]["active"], false);

    let (_, body) = post_json(
        &format!("{base}/api/chat/message"),
        &json!({"content": "what architecture?", "agents": ["tech", "pm"]}),
    )
    .await;
    let responses = body["responses"].as_array().unwrap();
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["agentId"], "pm");

    let (_, body) = get_json(&format!("{base}/api/agents/tech/status")).await;
    assert_eq!(body["active"], false);

    let (_, body) = post_json(&format!("{base}/api/agents/tech/toggle"), &json!({})).await;
    assert_eq!(body["agent"]["active"], true);
}

#[tokio::test]
async fn unknown_agent_is_404() {
    let base = start_server().await;

    let (status, body) = post_json(&format!("{base}/api/agents/ghost/toggle"), &json!({})).await;
    assert_eq!(status, 404);
    assert_eq!(body["detail"], "Agent ghost not found");

    let (status, _) = get_json(&format!("{base}/api/agents/ghost/status")).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn status_counts_chat_messages() {
    let base = start_server().await;
    post_json(
        &format!("{base}/api/chat/message"),
        &json!({"content": "pricing ideas", "agents": ["market"]}),
    )
    .await;

    let (status, body) = get_json(&format!("{base}/api/agents/market/status")).await;
    assert_eq!(status, 200);
    assert_eq!(body["agent_id"], "market");
    assert_eq!(body["message_count"], 1);
}

#[tokio::test]
async fn chat_replies_in_request_order() {
    let base = start_server().await;
    let (status, body) = post_json(
        &format!("{base}/api/chat/message"),
        &json!({"content": "How should we plan the MVP sprint?", "agents": ["sprint", "ghost", "pm", "sprint"]}),
    )
    .await;
    assert_eq!(status, 200);
    let responses = body["responses"].as_array().unwrap();
    let senders: Vec<&str> = responses.iter().map(|r| r["agentId"].as_str().unwrap()).collect();
    assert_eq!(senders, ["sprint", "pm", "sprint"]);
    for r in responses {
        assert_eq!(r["type"], "agent");
        assert!(!r["content"].as_str().unwrap().is_empty());
        let confidence = r["confidence"].as_f64().unwrap();
        assert!((0.8..=0.95).contains(&confidence));
    }
    assert_eq!(responses[0]["sender"], "Sprint Planner");
}

#[tokio::test]
async fn task_board_starts_with_sample_and_accepts_new_tasks() {
    let base = start_server().await;

    let (_, body) = get_json(&format!("{base}/api/tasks")).await;
    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], "1");
    assert_eq!(tasks[0]["title"], "Market Research for AI Finance Tool");
    assert_eq!(tasks[0]["assignedTo"], "market");
    assert_eq!(tasks[0]["createdBy"], "PM Agent");

    let (status, body) = post_json(
        &format!("{base}/api/tasks"),
        &json!({"title": "Draft pitch", "assignedTo": "pitch", "priority": "high", "tags": ["deck"]}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["task"]["id"], "2");
    assert_eq!(body["task"]["status"], "todo");
    assert_eq!(body["task"]["sprint"], "current");
    assert_eq!(body["task"]["assignedAgent"], "Pitch Writer");
    assert!(body["task"]["createdAt"].is_string());

    let (_, body) = get_json(&format!("{base}/api/tasks")).await;
    assert_eq!(body["tasks"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn blank_task_title_is_400() {
    let base = start_server().await;
    let (status, body) = post_json(
        &format!("{base}/api/tasks"),
        &json!({"title": "  ", "assignedTo": "pm"}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["detail"], "title is required");
}

#[tokio::test]
async fn market_research_requires_query() {
    let base = start_server().await;

    let (status, body) = get_json(&format!("{base}/api/market/research?query=AI%20tutors")).await;
    assert_eq!(status, 200);
    assert_eq!(body["research"]["query"], "AI tutors");
    assert_eq!(body["research"]["competitors"].as_array().unwrap().len(), 2);

    let (status, body) = get_json(&format!("{base}/api/market/research")).await;
    assert_eq!(status, 400);
    assert_eq!(body["detail"], "query is required");
}

#[tokio::test]
async fn project_analysis_requires_description() {
    let base = start_server().await;

    let (status, body) = post_json(&format!("{base}/api/projects/analyze"), &json!({})).await;
    assert_eq!(status, 400);
    assert_eq!(body["detail"], "project_description is required");

    let (status, _) = post_json(
        &format!("{base}/api/projects/analyze?project_description=%20"),
        &json!({}),
    )
    .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn sprint_capacity_total_beyond_u32() {
    let base = start_server().await;
    let (status, body) = post_json(
        &format!("{base}/api/sprints/plan"),
        &json!({"description": "Big team", "capacity": {"a": u32::MAX, "b": 1}}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["plan"]["total_capacity_hours"], u64::from(u32::MAX) + 1);
}

#[tokio::test]
async fn structured_reports() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/projects/analyze"))
        .query(&[("project_description", "A mobile budgeting app for students")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert!(body["analysis"].is_object());

    let (status, body) = post_json(
        &format!("{base}/api/sprints/plan"),
        &json!({"description": "Budget app", "capacity": {"alice": 30, "bob": 20}}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["plan"]["total_capacity_hours"], 50);

    let (status, body) = post_json(
        &format!("{base}/api/pitch/deck"),
        &json!({"description": "Budget app", "target_audience": "angels"}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["deck"]["slides"].as_array().unwrap().len(), 12);
    assert_eq!(body["deck"]["target_audience"], "angels");

    let (status, body) = post_json(
        &format!("{base}/api/tech/recommendations"),
        &json!({"requirements": "realtime chat"}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["recommendations"]["frontend"]["framework"], "Next.js 14");
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let base = start_server().await;
    let resp = reqwest::Client::new()
        .get(format!("{base}/api/agents"))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );

    let resp = reqwest::Client::new()
        .get(format!("{base}/api/agents"))
        .header("Origin", "https://evil.example")
        .send()
        .await
        .unwrap();
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}
