//! Wire types shared by the agents and the HTTP/WebSocket layer.
//!
//! Field names follow the web client's JSON (`agentId`, `assignedTo`, ...).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::agent::AgentKind;

/// Roster entry for a persona.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentProfile {
    pub id: AgentKind,
    pub name: String,
    pub role: String,
    pub active: bool,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,
}

/// A chat reply from one persona.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub timestamp: String,
    pub sender: String,
    pub agent_id: AgentKind,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// A user chat message sent over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMessage {
    pub content: String,
    #[serde(default)]
    pub agents: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Review,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Review => "review",
            TaskStatus::Done => "done",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(TaskStatus::Todo),
            "inprogress" => Some(TaskStatus::InProgress),
            "review" => Some(TaskStatus::Review),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(TaskPriority::Low),
            "medium" => Some(TaskPriority::Medium),
            "high" => Some(TaskPriority::High),
            _ => None,
        }
    }
}

fn default_sprint() -> String {
    "current".to_string()
}

/// Task submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    pub assigned_to: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default = "default_sprint")]
    pub sprint: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A stored task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    #[serde(flatten)]
    pub task: NewTask,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

// ── Structured reports ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectAnalysis {
    pub summary: String,
    pub recommendations: Vec<String>,
    pub tech_stack: Vec<String>,
    pub timeline: BTreeMap<String, String>,
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Competitor {
    pub name: String,
    pub market_share: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub pricing: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingTier {
    pub tier: String,
    pub range: String,
    pub features: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketResearch {
    pub query: String,
    pub competitors: Vec<Competitor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_size: Option<String>,
    pub trends: Vec<String>,
    pub pricing_insights: Vec<PricingTier>,
    pub opportunities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slide {
    pub slide_number: u32,
    pub title: String,
    pub content: String,
    pub speaker_notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PitchDeck {
    pub title: String,
    pub target_audience: String,
    pub slides: Vec<Slide>,
    pub key_points: Vec<String>,
    pub call_to_action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SprintTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub estimated_hours: u32,
    pub priority: TaskPriority,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SprintPlan {
    pub sprint_name: String,
    pub duration_weeks: u32,
    pub goals: Vec<String>,
    pub tasks: Vec<SprintTask>,
    /// Hours available per team member.
    pub capacity: BTreeMap<String, u32>,
    pub total_capacity_hours: u64,
    pub estimated_completion: String,
    pub risks: Vec<String>,
    pub success_metrics: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TechRecommendations {
    pub frontend: BTreeMap<String, String>,
    pub backend: BTreeMap<String, String>,
    pub infrastructure: BTreeMap<String, String>,
    pub estimated_timeline: BTreeMap<String, String>,
}

/// Collect `&str` pairs into an owned map.
pub(crate) fn string_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Own a list of literals.
pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_defaults() {
        let task: NewTask =
            serde_json::from_str(r#"{"title": "Deck", "assignedTo": "pitch"}"#).unwrap();
        assert_eq!(task.priority, TaskPriority::Medium);
        assert_eq!(task.sprint, "current");
        assert!(task.tags.is_empty());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn agent_response_uses_client_field_names() {
        let resp = AgentResponse {
            id: "pm_1".into(),
            kind: "agent".into(),
            content: "hi".into(),
            timestamp: "2024-01-01T00:00:00Z".into(),
            sender: "Product Manager".into(),
            agent_id: AgentKind::Pm,
            avatar: "👨‍💼".into(),
            confidence: Some(0.9),
            suggestions: vec![],
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["type"], "agent");
        assert_eq!(json["agentId"], "pm");
        assert_eq!(json["suggestions"], serde_json::json!([]));
    }

    #[test]
    fn task_status_wire_names() {
        assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"inprogress\"");
        for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Review, TaskStatus::Done] {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TaskPriority::parse("urgent"), None);
    }

    #[test]
    fn user_message_agents_default_empty() {
        let msg: UserMessage = serde_json::from_str(r#"{"content": "hi"}"#).unwrap();
        assert!(msg.agents.is_empty());
    }
}
