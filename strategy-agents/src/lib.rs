//! strategy-agents: the advisory team behind the strategy chat.
//!
//! Five personas answer every user message with a canned block chosen by
//! keyword matching:
//!
//!   pm      Product Manager   specs, roadmaps, user research
//!   tech    Tech Architect    architecture, stack, scaling, security
//!   market  Market Analyst    competitors, market sizing, pricing, trends
//!   pitch   Pitch Writer      decks, content strategy, narrative
//!   sprint  Sprint Planner    sprints, backlog, timelines, capacity
//!
//! [`AgentManager`] fans a message out to the active personas and gathers
//! their replies.

pub mod agent;
pub mod error;
pub mod keywords;
pub mod manager;
pub mod personas;
pub mod schemas;

pub use agent::{Agent, AgentKind};
pub use error::AgentError;
pub use manager::{AgentManager, ManagerConfig};
