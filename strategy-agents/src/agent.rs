//! Persona identity and the trait every persona implements.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::AgentError;

/// Wire id of a persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Pm,
    Tech,
    Market,
    Pitch,
    Sprint,
}

impl AgentKind {
    /// Roster order.
    pub const ALL: [AgentKind; 5] = [
        AgentKind::Pm,
        AgentKind::Tech,
        AgentKind::Market,
        AgentKind::Pitch,
        AgentKind::Sprint,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Pm => "pm",
            AgentKind::Tech => "tech",
            AgentKind::Market => "market",
            AgentKind::Pitch => "pitch",
            AgentKind::Sprint => "sprint",
        }
    }

    /// Name shown as the sender of chat replies.
    pub fn display_name(self) -> &'static str {
        match self {
            AgentKind::Pm => "Product Manager",
            AgentKind::Tech => "Tech Architect",
            AgentKind::Market => "Market Analyst",
            AgentKind::Pitch => "Pitch Writer",
            AgentKind::Sprint => "Sprint Planner",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| AgentError::NotFound(s.to_string()))
    }
}

/// Runtime status of a persona.
#[derive(Debug, Clone, Serialize)]
pub struct AgentStatus {
    pub agent_id: AgentKind,
    pub name: String,
    pub role: String,
    pub active: bool,
    pub message_count: u64,
    pub uptime_secs: f64,
}

/// Bookkeeping shared by all personas.
#[derive(Debug)]
pub struct AgentCore {
    kind: AgentKind,
    role: &'static str,
    created_at: Instant,
    message_count: AtomicU64,
    active: AtomicBool,
}

impl AgentCore {
    pub fn new(kind: AgentKind, role: &'static str) -> Self {
        Self {
            kind,
            role,
            created_at: Instant::now(),
            message_count: AtomicU64::new(0),
            active: AtomicBool::new(true),
        }
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn role(&self) -> &'static str {
        self.role
    }

    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::Relaxed)
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
        tracing::info!(agent = %self.kind, active, "Agent active status changed");
    }

    /// Count a handled message and log it.
    pub fn record_interaction(&self, message: &str, response: &str) {
        let count = self.message_count.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(agent = %self.kind, count, "Agent processed message");
        tracing::debug!(input = %preview(message), output = %preview(response));
    }

    pub fn status(&self) -> AgentStatus {
        AgentStatus {
            agent_id: self.kind,
            name: self.kind.display_name().to_string(),
            role: self.role.to_string(),
            active: self.is_active(),
            message_count: self.message_count(),
            uptime_secs: self.created_at.elapsed().as_secs_f64(),
        }
    }
}

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(100).collect();
    if out.len() < text.len() {
        out.push_str("...");
    }
    out
}

/// A persona that answers chat messages.
pub trait Agent: Send + Sync {
    fn core(&self) -> &AgentCore;

    /// Pick the canned reply for `message`.
    fn reply(&self, message: &str) -> String;

    /// Whether the manager should simulate thinking time before replying.
    fn simulates_thinking(&self) -> bool {
        true
    }

    fn kind(&self) -> AgentKind {
        self.core().kind()
    }

    /// Reply and record the interaction.
    fn respond(&self, message: &str) -> String {
        let response = self.reply(message);
        self.core().record_interaction(message, &response);
        response
    }
}
