//! Agent manager: owns the roster and fans user messages out to personas.
//!
//! Each participating persona gets its own task. Replies are gathered in
//! the order the client listed the agents; a persona whose task fails is
//! logged and left out of the result.

use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use parking_lot::Mutex;
use rand::Rng;

use crate::agent::{Agent, AgentKind, AgentStatus};
use crate::error::AgentError;
use crate::keywords;
use crate::personas::{MarketAnalyst, PitchWriter, ProductManager, SprintPlanner, TechArchitect};
use crate::schemas::{
    AgentProfile, AgentResponse, MarketResearch, PitchDeck, ProjectAnalysis, SprintPlan,
    TechRecommendations,
};

/// Simulated processing delays.
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Delay range before a chat reply.
    pub think_time: Range<Duration>,
    /// Delay range before a market research report.
    pub research_time: Range<Duration>,
    /// Delay range before a pitch deck.
    pub pitch_time: Range<Duration>,
    /// Delay range before a sprint plan.
    pub sprint_time: Range<Duration>,
    /// Delay range before tech recommendations.
    pub tech_time: Range<Duration>,
}

fn millis(start: u64, end: u64) -> Range<Duration> {
    Duration::from_millis(start)..Duration::from_millis(end)
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            think_time: millis(500, 2000),
            research_time: millis(2000, 4000),
            pitch_time: millis(2000, 3500),
            sprint_time: millis(2000, 3000),
            tech_time: millis(1000, 2500),
        }
    }
}

impl ManagerConfig {
    /// No simulated delays.
    pub fn instant() -> Self {
        Self {
            think_time: Duration::ZERO..Duration::ZERO,
            research_time: Duration::ZERO..Duration::ZERO,
            pitch_time: Duration::ZERO..Duration::ZERO,
            sprint_time: Duration::ZERO..Duration::ZERO,
            tech_time: Duration::ZERO..Duration::ZERO,
        }
    }

    /// Keep the chat think time, drop the report delays.
    pub fn with_instant_reports(self) -> Self {
        Self {
            think_time: self.think_time,
            ..Self::instant()
        }
    }
}

/// Pick a delay from `range`. Empty ranges collapse to their start.
fn sample(range: &Range<Duration>) -> Duration {
    if range.start >= range.end {
        range.start
    } else {
        rand::thread_rng().gen_range(range.clone())
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

fn profile(
    id: AgentKind,
    role: &str,
    avatar: &str,
    description: &str,
    capabilities: &[&str],
    expertise: &str,
) -> AgentProfile {
    AgentProfile {
        id,
        name: id.display_name().to_string(),
        role: role.to_string(),
        active: true,
        avatar: avatar.to_string(),
        description: Some(description.to_string()),
        capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
        expertise: Some(expertise.to_string()),
    }
}

fn default_roster() -> Vec<AgentProfile> {
    vec![
        profile(
            AgentKind::Pm,
            "PM Agent",
            "👨‍💼",
            "Breaks down feature ideas into specs and milestones, manages product roadmap",
            &["Feature specification", "Roadmap planning", "User story creation", "Requirements analysis"],
            "Product Strategy, User Experience, Agile Methodology",
        ),
        profile(
            AgentKind::Tech,
            "Technical Architect",
            "👨‍💻",
            "Suggests tech stack, builds initial design, and provides technical guidance",
            &[
                "Architecture design",
                "Technology recommendations",
                "Technical feasibility analysis",
                "Code structure planning",
            ],
            "Full-stack Development, Cloud Architecture, DevOps",
        ),
        profile(
            AgentKind::Market,
            "Market Analyst",
            "📊",
            "Scrapes and summarizes competitor strategies, analyzes market opportunities",
            &["Competitive analysis", "Market research", "Trend identification", "Pricing strategy"],
            "Market Research, Business Intelligence, Data Analysis",
        ),
        profile(
            AgentKind::Pitch,
            "Pitch Writer",
            "✍️",
            "Drafts presentations, decks, and compelling content for stakeholders",
            &[
                "Presentation creation",
                "Content writing",
                "Storytelling",
                "Stakeholder communication",
            ],
            "Business Writing, Presentation Design, Communications",
        ),
        profile(
            AgentKind::Sprint,
            "Sprint Planner",
            "📋",
            "Allocates tasks over weekly sprints and manages project timelines",
            &["Sprint planning", "Task allocation", "Timeline management", "Progress tracking"],
            "Agile Planning, Project Management, Resource Allocation",
        ),
    ]
}

/// The advisory team.
pub struct AgentManager {
    config: ManagerConfig,
    pm: Arc<ProductManager>,
    tech: Arc<TechArchitect>,
    market: Arc<MarketAnalyst>,
    pitch: Arc<PitchWriter>,
    sprint: Arc<SprintPlanner>,
    roster: Mutex<Vec<AgentProfile>>,
}

impl Default for AgentManager {
    fn default() -> Self {
        Self::new(ManagerConfig::default())
    }
}

impl AgentManager {
    pub fn new(config: ManagerConfig) -> Self {
        Self {
            config,
            pm: Arc::new(ProductManager::new()),
            tech: Arc::new(TechArchitect::new()),
            market: Arc::new(MarketAnalyst::new()),
            pitch: Arc::new(PitchWriter::new()),
            sprint: Arc::new(SprintPlanner::new()),
            roster: Mutex::new(default_roster()),
        }
    }

    fn agent(&self, kind: AgentKind) -> Arc<dyn Agent> {
        match kind {
            AgentKind::Pm => self.pm.clone(),
            AgentKind::Tech => self.tech.clone(),
            AgentKind::Market => self.market.clone(),
            AgentKind::Pitch => self.pitch.clone(),
            AgentKind::Sprint => self.sprint.clone(),
        }
    }

    /// All personas in roster order.
    pub fn agents(&self) -> Vec<AgentProfile> {
        self.roster.lock().clone()
    }

    /// Number of personas currently active.
    pub fn active_count(&self) -> usize {
        self.roster.lock().iter().filter(|p| p.active).count()
    }

    /// Flip a persona's active flag.
    pub fn toggle(&self, id: &str) -> Result<AgentProfile, AgentError> {
        let kind: AgentKind = id.parse()?;
        let mut roster = self.roster.lock();
        let entry = roster
            .iter_mut()
            .find(|p| p.id == kind)
            .ok_or_else(|| AgentError::NotFound(id.to_string()))?;
        entry.active = !entry.active;
        self.agent(kind).core().set_active(entry.active);
        Ok(entry.clone())
    }

    /// Runtime status of one persona.
    pub fn status(&self, id: &str) -> Result<AgentStatus, AgentError> {
        let kind: AgentKind = id.parse()?;
        Ok(self.agent(kind).core().status())
    }

    /// Ask every requested, active persona to answer `message`.
    ///
    /// Unknown ids and inactive personas are skipped. A repeated id gets
    /// one reply per mention.
    pub async fn process_user_message(
        &self,
        message: &str,
        requested: &[String],
    ) -> Vec<AgentResponse> {
        let participants: Vec<AgentProfile> = {
            let roster = self.roster.lock();
            let picked = requested
                .iter()
                .filter_map(|id| id.parse::<AgentKind>().ok())
                .filter_map(|kind| roster.iter().find(|p| p.id == kind && p.active).cloned())
                .collect();
            picked
        };

        tracing::info!(
            agents = ?participants.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            keywords = ?keywords::extract_keywords(message),
            "Processing message with {} agents",
            participants.len()
        );

        let handles: Vec<_> = participants
            .iter()
            .map(|p| {
                let agent = self.agent(p.id);
                let delay = if agent.simulates_thinking() {
                    sample(&self.config.think_time)
                } else {
                    Duration::ZERO
                };
                let message = message.to_string();
                tokio::spawn(async move {
                    pause(delay).await;
                    agent.respond(&message)
                })
            })
            .collect();

        let results = futures::future::join_all(handles).await;

        participants
            .into_iter()
            .zip(results)
            .filter_map(|(profile, result)| match result {
                Ok(content) => Some(chat_response(&profile, content)),
                Err(e) => {
                    tracing::error!(agent = %profile.id, error = %e, "Agent task failed");
                    None
                }
            })
            .collect()
    }

    /// Market Analyst research report.
    pub async fn market_research(&self, query: &str) -> MarketResearch {
        pause(sample(&self.config.research_time)).await;
        self.market.conduct_research(query)
    }

    /// Product Manager project analysis.
    pub async fn analyze_project(&self, description: &str) -> ProjectAnalysis {
        self.pm.analyze_project(description)
    }

    /// Sprint Planner foundation sprint.
    pub async fn sprint_plan(
        &self,
        description: &str,
        capacity: BTreeMap<String, u32>,
    ) -> SprintPlan {
        pause(sample(&self.config.sprint_time)).await;
        self.sprint.create_sprint_plan(description, capacity)
    }

    /// Pitch Writer deck outline.
    pub async fn pitch_deck(&self, description: &str, target_audience: &str) -> PitchDeck {
        pause(sample(&self.config.pitch_time)).await;
        self.pitch.create_pitch_deck(description, target_audience)
    }

    /// Tech Architect stack picks.
    pub async fn tech_recommendations(&self, requirements: &str) -> TechRecommendations {
        pause(sample(&self.config.tech_time)).await;
        self.tech.tech_recommendations(requirements)
    }
}

fn chat_response(profile: &AgentProfile, content: String) -> AgentResponse {
    let now = Utc::now();
    AgentResponse {
        id: format!("{}_{}", profile.id, now.timestamp_millis()),
        kind: "agent".to_string(),
        content,
        timestamp: now.to_rfc3339(),
        sender: profile.name.clone(),
        agent_id: profile.id,
        avatar: profile.avatar.clone(),
        confidence: Some(rand::thread_rng().gen_range(0.8..0.95)),
        suggestions: Vec::new(),
    }
}
