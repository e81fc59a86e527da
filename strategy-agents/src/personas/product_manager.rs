//! Product Manager: breaks ideas into specs, roadmaps and personas.

use std::fmt::Write;

use rand::seq::SliceRandom;

use crate::agent::{Agent, AgentCore, AgentKind};
use crate::keywords::{self, Route};
use crate::schemas::{ProjectAnalysis, string_map, strings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Idea,
    Requirements,
    Roadmap,
    Users,
}

const ROUTES: &[Route<Topic>] = &[
    (Topic::Idea, &["idea", "product", "feature", "build", "create", "develop"]),
    (Topic::Requirements, &["requirements", "specs", "specification"]),
    (Topic::Roadmap, &["roadmap", "timeline", "planning"]),
    (Topic::Users, &["user", "customer", "personas"]),
];

const DEFAULT_PURPOSE: &str = "Solve user problems efficiently";
const DEFAULT_AUDIENCE: &str = "Early adopters and tech-savvy users";

/// Feature groups keyed by the words that trigger them.
const FEATURE_GROUPS: &[(&[&str], &[&str], Option<&str>)] = &[
    (
        &["ai", "artificial intelligence"],
        &[
            "AI-powered core functionality",
            "Machine learning algorithms",
            "Intelligent recommendations",
        ],
        None,
    ),
    (
        &["finance", "financial"],
        &[
            "Financial data integration",
            "Transaction tracking",
            "Budget management",
            "Reporting and analytics",
        ],
        Some("Finance professionals and business owners"),
    ),
    (
        &["voice", "speech"],
        &[
            "Voice recognition",
            "Speech-to-text conversion",
            "Audio processing",
            "Voice commands",
        ],
        None,
    ),
    (
        &["tutor", "education"],
        &[
            "Personalized learning paths",
            "Progress tracking",
            "Interactive lessons",
            "Performance analytics",
        ],
        Some("Students, parents, and educators"),
    ),
];

const DEFAULT_FEATURES: &[&str] = &[
    "User registration and profiles",
    "Core functionality",
    "Data management",
    "User dashboard",
    "Settings and preferences",
];

const ADVICE_OPENERS: &[&str] = &[
    "From a product perspective, I recommend focusing on user validation first. Understanding your target audience's real pain points will guide all subsequent decisions.",
    "As your PM, I suggest we start with a clear problem statement. What specific user problem are we solving, and how do we know it's worth solving?",
    "Let's think about this strategically. I recommend we define success metrics early - what does 'winning' look like for this initiative?",
    "I'd approach this by breaking it into smaller, testable hypotheses. This allows us to learn and iterate quickly with minimal risk.",
    "From a product standpoint, we should consider the competitive landscape and identify our unique value proposition. How will we differentiate?",
];

const ADVICE_FRAMEWORK: &str = "\
**📋 Product Management Framework I recommend:**
1. Define the problem clearly
2. Identify target users and use cases
3. Design minimum viable solution
4. Test with real users
5. Iterate based on feedback

What specific aspect would you like me to focus on?";

const REQUIREMENTS: &str = "\
I'll help create comprehensive requirements:

**📝 Functional Requirements:**
- User registration and authentication
- Core feature implementation
- Data storage and retrieval
- User interface interactions

**⚙️ Non-Functional Requirements:**
- Performance: <2s page load times
- Scalability: Support 10K+ concurrent users
- Security: Industry-standard encryption
- Availability: 99.9% uptime

**🧪 Acceptance Criteria:**
- Given: User has valid account
- When: User performs core actions
- Then: System responds appropriately

Would you like me to elaborate on any specific requirement area?";

const ROADMAP: &str = "\
Here's a strategic product roadmap:

**📅 Quarter 1 (Weeks 1-12):**
- MVP development and testing
- User feedback collection
- Core feature refinement

**📅 Quarter 2 (Weeks 13-24):**
- Advanced feature development
- Integration with third-party services
- Performance optimization

**📅 Quarter 3 (Weeks 25-36):**
- Analytics and reporting features
- Mobile application development
- User experience enhancements

**🎯 Success Metrics:**
- User adoption rate > 80%
- Feature completion rate > 95%
- User satisfaction score > 4.5/5";

const USERS: &str = "\
Let me help define your target users:

**👤 Primary Persona: 'The Innovator'**
- Age: 25-40
- Role: Startup founder, Product manager
- Goals: Scale business, improve efficiency
- Pain points: Time management, resource allocation

**👤 Secondary Persona: 'The Optimizer'**
- Age: 30-45
- Role: Team lead, Operations manager
- Goals: Streamline processes, increase productivity
- Pain points: Manual workflows, data silos

**📊 User Journey Mapping:**
1. Discovery: User identifies problem
2. Evaluation: User researches solutions
3. Trial: User tests our product
4. Adoption: User integrates into workflow
5. Advocacy: User recommends to others

Should I create detailed user stories for these personas?";

/// Purpose, audience and MVP features inferred from an idea.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductComponents {
    pub purpose: &'static str,
    pub audience: &'static str,
    pub features: Vec<&'static str>,
}

impl ProductComponents {
    /// Infer components from keywords in the idea text.
    pub fn extract(idea: &str) -> Self {
        let lower = idea.to_lowercase();
        let mut components = Self {
            purpose: DEFAULT_PURPOSE,
            audience: DEFAULT_AUDIENCE,
            features: Vec::new(),
        };
        for (triggers, features, audience) in FEATURE_GROUPS {
            if keywords::contains_any(&lower, triggers) {
                components.features.extend_from_slice(features);
                if let Some(audience) = audience {
                    components.audience = *audience;
                }
            }
        }
        if components.features.is_empty() {
            components.features = DEFAULT_FEATURES.to_vec();
        }
        components
    }
}

pub struct ProductManager {
    core: AgentCore,
}

impl Default for ProductManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductManager {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(AgentKind::Pm, "Product Strategy & Requirements"),
        }
    }

    fn analyze_idea(&self, idea: &str) -> String {
        let components = ProductComponents::extract(idea);
        let mut out = format!("Excellent! I'll help break down '{idea}' into actionable components:\n\n");
        out.push_str("**🎯 Core Product Vision:**\n");
        let _ = writeln!(out, "- Primary purpose: {}", components.purpose);
        let _ = writeln!(out, "- Target audience: {}\n", components.audience);
        out.push_str("**📋 Key Features (MVP):**\n");
        for (i, feature) in components.features.iter().enumerate() {
            let _ = writeln!(out, "{}. {feature}", i + 1);
        }
        out.push_str("\n**🔄 Recommended Development Phases:**\n");
        out.push_str("Phase 1: Core functionality + user authentication\n");
        out.push_str("Phase 2: Advanced features + integrations\n");
        out.push_str("Phase 3: Analytics + optimization\n\n");
        out.push_str("**💡 Next Steps:**\n");
        out.push_str("1. Define detailed user stories\n");
        out.push_str("2. Create wireframes and user flows\n");
        out.push_str("3. Validate assumptions with target users\n");
        out.push_str("4. Prioritize features by impact vs effort");
        out
    }

    fn general_advice(&self) -> String {
        let opener = ADVICE_OPENERS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(ADVICE_OPENERS[0]);
        format!("{opener}\n\n{ADVICE_FRAMEWORK}")
    }

    /// Strategic breakdown of a project description.
    pub fn analyze_project(&self, description: &str) -> ProjectAnalysis {
        let components = ProductComponents::extract(description);
        tracing::debug!(audience = components.audience, "Analyzing project");
        ProjectAnalysis {
            summary: format!("Strategic analysis of: {description}"),
            recommendations: strings(&[
                "Start with MVP focused on core user problem",
                "Validate assumptions through user interviews",
                "Create detailed user personas and journey maps",
                "Define clear success metrics and KPIs",
                "Plan iterative development approach",
            ]),
            tech_stack: strings(&[
                "Frontend: React.js or Next.js",
                "Backend: Node.js or Python",
                "Database: PostgreSQL or MongoDB",
                "Hosting: AWS or Vercel",
            ]),
            timeline: string_map(&[
                ("MVP", "8-12 weeks"),
                ("Beta Release", "16-20 weeks"),
                ("Public Launch", "24-28 weeks"),
            ]),
            risks: strings(&[
                "User adoption challenges",
                "Competition from established players",
                "Technical complexity underestimation",
                "Resource allocation issues",
            ]),
            opportunities: strings(&[
                "First-mover advantage in niche",
                "High user demand for solution",
                "Potential for rapid scaling",
                "Multiple monetization options",
            ]),
        }
    }
}

impl Agent for ProductManager {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    // The PM answers immediately; the others take a moment.
    fn simulates_thinking(&self) -> bool {
        false
    }

    fn reply(&self, message: &str) -> String {
        match keywords::classify(message, ROUTES) {
            Some(Topic::Idea) => self.analyze_idea(message),
            Some(Topic::Requirements) => REQUIREMENTS.to_string(),
            Some(Topic::Roadmap) => ROADMAP.to_string(),
            Some(Topic::Users) => USERS.to_string(),
            None => self.general_advice(),
        }
    }
}
