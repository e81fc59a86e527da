//! Pitch Writer: decks, content strategy and brand narrative.

use crate::agent::{Agent, AgentCore, AgentKind};
use crate::keywords::{self, Route};
use crate::schemas::{PitchDeck, Slide, strings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Pitch,
    Content,
    Narrative,
}

const ROUTES: &[Route<Topic>] = &[
    (Topic::Pitch, &["pitch", "presentation", "deck"]),
    (Topic::Content, &["content", "copy", "writing"]),
    (Topic::Narrative, &["story", "narrative", "messaging"]),
];

const PITCH: &str = "\
I'll help you create a compelling pitch deck structure:

**🎯 Essential Pitch Deck Slides:**

**1. Problem & Solution (Slides 1-3)**
- Hook: Start with a relatable problem
- Problem: Define the pain point clearly
- Solution: Present your unique approach

**2. Market Opportunity (Slides 4-5)**
- Market size and growth potential
- Target customer segments
- Why now? Market timing factors

**3. Product Demo (Slide 6)**
- Live demo or compelling screenshots
- Key features and benefits
- User experience highlights

**4. Business Model & Traction (Slides 7-8)**
- Revenue model and pricing
- Early traction and metrics
- Customer testimonials

**5. Competition & Go-to-Market (Slides 9-10)**
- Competitive landscape analysis
- Unique differentiation
- Marketing and sales strategy

**6. Team & Financials (Slides 11-12)**
- Founding team credentials
- Financial projections
- Funding requirements and use of funds

**💡 Key Storytelling Tips:**
- Keep each slide focused on one key message
- Use visuals over text whenever possible
- Practice the narrative flow between slides
- End with a clear call to action";

const CONTENT: &str = "\
Here's a comprehensive content strategy framework:

**📝 Content Pillars:**

**1. Educational Content (40%)**
- How-to guides and tutorials
- Industry insights and trends
- Best practices and frameworks
- Webinars and expert interviews

**2. Product Content (30%)**
- Feature announcements and demos
- Use case studies and success stories
- Product updates and roadmap
- Behind-the-scenes development

**3. Community Content (20%)**
- User-generated content and testimonials
- Community highlights and events
- Q&A sessions and feedback
- Partner collaborations

**4. Thought Leadership (10%)**
- Industry predictions and opinions
- Research findings and reports
- Speaking at conferences and events
- Executive insights and vision

**📱 Content Distribution Strategy:**
- Blog: Long-form educational content
- LinkedIn: Professional networking and B2B
- Twitter: Quick updates and engagement
- YouTube: Video tutorials and demos
- Email: Nurture sequences and updates

**📊 Content Success Metrics:**
- Engagement rates and social shares
- Website traffic and lead generation
- Brand awareness and mention tracking
- Conversion rates from content to trial";

const NARRATIVE: &str = "\
Let me help you craft a compelling brand narrative:

**📖 Brand Story Framework:**

**1. The Hero's Journey Structure:**
- Hero: Your target customer
- Problem: The challenge they face daily
- Guide: Your company as the mentor
- Plan: Your solution and process
- Success: The transformation you enable

**2. Core Messaging Architecture:**

**Mission Statement:**
- What: What you do (clear and simple)
- Who: Who you serve (specific target)
- Why: Why it matters (emotional connection)

**Value Proposition:**
- For [target customer]
- Who [specific problem]
- Our product is [solution category]
- That [key benefit]
- Unlike [alternative]
- We [unique differentiator]

**3. Key Messages by Audience:**

**For Users:**
- Focus on time savings and efficiency
- Emphasize ease of use and reliability
- Highlight immediate benefits

**For Decision Makers:**
- ROI and cost savings
- Risk mitigation and compliance
- Scalability and future-proofing

**For Investors:**
- Market size and growth potential
- Competitive advantages and moats
- Scalable business model

**🎯 Messaging Guidelines:**
- Keep language simple and jargon-free
- Lead with benefits, support with features
- Use customer language and pain points
- Test messages with real customers";

const GENERAL: &str = "\
Here's my content strategy recommendation:

**✍️ Content Creation Framework:**

**1. Audience-First Approach:**
- Start with customer research and personas
- Map content to customer journey stages
- Address specific pain points and questions
- Use customer language and terminology

**2. Content Quality Standards:**
- Provide genuine value in every piece
- Maintain consistent brand voice and tone
- Ensure accuracy and credibility
- Optimize for readability and engagement

**3. Distribution and Amplification:**
- Choose channels where your audience lives
- Repurpose content across multiple formats
- Leverage employee and customer advocacy
- Build relationships with industry influencers

**📈 Content Performance Optimization:**
- A/B test headlines and formats
- Analyze engagement patterns and preferences
- Iterate based on performance data
- Stay updated on platform algorithm changes

**🚀 Content Innovation Ideas:**
- Interactive content and tools
- User-generated content campaigns
- Live streaming and real-time engagement
- Collaborative content with partners

What specific content challenge can I help you tackle?";

/// (title, content, speaker notes) for each slide, in deck order.
const SLIDES: &[(&str, &str, &str)] = &[
    ("Company Introduction", "Hook + Company name and tagline", "Start with attention-grabbing problem statement"),
    ("Problem", "Define the pain point your target customers face", "Make this relatable and quantifiable"),
    ("Solution", "Your unique approach to solving the problem", "Connect directly back to the problem slide"),
    ("Market Opportunity", "TAM, SAM, SOM analysis with growth projections", "Focus on realistic capture, not just total market"),
    ("Product Demo", "Live demo or compelling product screenshots", "Show, don't tell - let the product speak"),
    ("Business Model", "Revenue streams and pricing strategy", "Explain how you make money clearly"),
    ("Traction", "Key metrics, customers, and growth", "Show momentum and validation"),
    ("Competition", "Competitive landscape and differentiation", "Acknowledge competition but highlight your edge"),
    ("Go-to-Market Strategy", "Customer acquisition and growth plan", "Show you understand how to scale"),
    ("Team", "Founding team and key hires", "Highlight relevant experience and expertise"),
    ("Financials", "Revenue projections and key metrics", "Be realistic but show growth potential"),
    ("Funding Ask", "Investment amount and use of funds", "Clear ask with specific fund allocation"),
];

pub struct PitchWriter {
    core: AgentCore,
}

impl Default for PitchWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PitchWriter {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(AgentKind::Pitch, "Content & Presentation Creation"),
        }
    }

    /// Twelve-slide investor deck outline.
    pub fn create_pitch_deck(&self, description: &str, target_audience: &str) -> PitchDeck {
        let slides = SLIDES
            .iter()
            .zip(1..)
            .map(|((title, content, notes), slide_number)| Slide {
                slide_number,
                title: title.to_string(),
                content: content.to_string(),
                speaker_notes: notes.to_string(),
            })
            .collect();

        PitchDeck {
            title: format!("Pitch Deck: {description}"),
            target_audience: target_audience.to_string(),
            slides,
            key_points: strings(&[
                "Keep slides visual and minimal text",
                "Tell a story that flows logically",
                "Practice timing - aim for 10-12 minutes",
                "Prepare for questions and objections",
                "Have appendix slides for detailed questions",
            ]),
            call_to_action: format!("Investment opportunity for {target_audience}"),
        }
    }
}

impl Agent for PitchWriter {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    fn reply(&self, message: &str) -> String {
        let text = match keywords::classify(message, ROUTES) {
            Some(Topic::Pitch) => PITCH,
            Some(Topic::Content) => CONTENT,
            Some(Topic::Narrative) => NARRATIVE,
            None => GENERAL,
        };
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_by_keyword() {
        let pitch = PitchWriter::new();
        assert_eq!(pitch.reply("Help with our investor DECK"), PITCH);
        assert_eq!(pitch.reply("landing page copy"), CONTENT);
        assert_eq!(pitch.reply("what's our story"), NARRATIVE);
        assert_eq!(pitch.reply("hi"), GENERAL);
    }

    #[test]
    fn deck_has_twelve_numbered_slides() {
        let deck = PitchWriter::new().create_pitch_deck("Voice tutor", "seed investors");
        assert_eq!(deck.title, "Pitch Deck: Voice tutor");
        assert_eq!(deck.slides.len(), 12);
        assert_eq!(deck.slides[0].slide_number, 1);
        assert_eq!(deck.slides[11].title, "Funding Ask");
        assert_eq!(deck.call_to_action, "Investment opportunity for seed investors");
    }
}
