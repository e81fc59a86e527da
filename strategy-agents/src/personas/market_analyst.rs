//! Market Analyst: competitors, market sizing, pricing and trends.

use crate::agent::{Agent, AgentCore, AgentKind};
use crate::keywords::{self, Route};
use crate::schemas::{Competitor, MarketResearch, PricingTier, strings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Competitors,
    Market,
    Pricing,
    Trends,
}

const ROUTES: &[Route<Topic>] = &[
    (Topic::Competitors, &["competitor", "competition", "competitive"]),
    (Topic::Market, &["market", "industry", "sector"]),
    (Topic::Pricing, &["pricing", "price", "monetization"]),
    (Topic::Trends, &["trend", "trends", "opportunity"]),
];

const COMPETITORS: &str = "\
I'll analyze the competitive landscape for you:

**🎯 Direct Competitors:**
- Established players with similar core features
- Well-funded startups in the same space
- Enterprise solutions targeting similar markets

**🔍 Competitive Analysis:**
- Feature comparison matrix needed
- Pricing strategy assessment
- User review sentiment analysis
- Market positioning evaluation

**💡 Differentiation Opportunities:**
- Gaps in current market offerings
- Underserved customer segments
- Emerging technology advantages
- Superior user experience potential

**📊 Competitive Intelligence:**
- Monitor competitor product updates
- Track their funding and expansion
- Analyze their marketing strategies
- Study their customer feedback patterns";

const MARKET: &str = "\
Here's my market analysis:

**📈 Market Size & Growth:**
- Total Addressable Market (TAM): Research needed
- Serviceable Addressable Market (SAM): Define target segment
- Serviceable Obtainable Market (SOM): Realistic capture
- Expected CAGR: Industry growth rate analysis

**🎯 Target Market Segments:**
- Primary: Early adopters and tech-forward companies
- Secondary: Small to medium businesses
- Tertiary: Enterprise clients (long-term)
- Geographic: Start local, expand globally

**🚀 Market Entry Strategy:**
- Focus on niche with high pain points
- Build strong product-market fit
- Leverage digital marketing channels
- Partner with industry influencers

**⚠️ Market Risks:**
- Economic downturns affecting spending
- Regulatory changes in the industry
- Technology disruption by big tech
- Customer acquisition cost escalation";

const PRICING: &str = "\
Let me break down pricing strategy options:

**💰 Pricing Models to Consider:**
- Freemium: Basic features free, premium paid
- Subscription: Monthly/annual recurring revenue
- Usage-based: Pay-per-use or transaction
- Tiered: Multiple plans for different needs

**📊 Competitive Pricing Analysis:**
- Entry-level: $9-19/month (basic plans)
- Professional: $29-49/month (standard features)
- Enterprise: $99-299/month (full features)
- Custom: Enterprise deals with annual contracts

**🎯 Pricing Strategy Recommendations:**
1. Start with competitive freemium model
2. Implement value-based pricing tiers
3. Test pricing with beta customers
4. Monitor competitor pricing changes
5. Plan for pricing optimization based on usage data

**💡 Monetization Opportunities:**
- Premium features and integrations
- Professional services and consulting
- Data insights and analytics
- White-label licensing";

const TRENDS: &str = "\
Here are the key market trends I'm tracking:

**📈 Technology Trends:**
- AI/ML integration becoming standard
- No-code/low-code platform growth
- Real-time collaboration increasing
- Mobile-first approach essential

**👥 User Behavior Trends:**
- Demand for personalized experiences
- Preference for self-service solutions
- Integration with existing workflows
- Focus on security and privacy

**💼 Business Trends:**
- Remote work driving tool adoption
- Subscription economy growth
- Data-driven decision making
- Emphasis on user experience

**🚀 Emerging Opportunities:**
- Vertical-specific solutions
- AI-powered automation
- Cross-platform integrations
- Sustainability-focused features";

const GENERAL: &str = "\
From a market perspective, I recommend focusing on:

**🔍 Market Research Priorities:**
1. Validate target customer pain points
2. Understand willingness to pay
3. Map the competitive landscape
4. Identify market timing factors
5. Assess regulatory environment

**📊 Research Methods:**
- Customer interviews and surveys
- Competitor analysis and pricing research
- Industry reports and market studies
- Social media sentiment analysis
- Beta testing and user feedback

**🎯 Go-to-Market Strategy:**
- Define clear value proposition
- Identify early adopter segments
- Choose optimal distribution channels
- Plan content marketing strategy
- Set measurable growth metrics

What specific market aspect would you like me to research further?";

pub struct MarketAnalyst {
    core: AgentCore,
}

impl Default for MarketAnalyst {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketAnalyst {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(AgentKind::Market, "Market Research & Competitive Analysis"),
        }
    }

    /// Market research report for a query.
    pub fn conduct_research(&self, query: &str) -> MarketResearch {
        MarketResearch {
            query: query.to_string(),
            competitors: vec![
                Competitor {
                    name: "Competitor A".into(),
                    market_share: "15%".into(),
                    strengths: strings(&["Established brand", "Large user base"]),
                    weaknesses: strings(&["Outdated UI", "Limited features"]),
                    pricing: "$29/month".into(),
                },
                Competitor {
                    name: "Competitor B".into(),
                    market_share: "8%".into(),
                    strengths: strings(&["Modern interface", "Good integrations"]),
                    weaknesses: strings(&["High pricing", "Poor support"]),
                    pricing: "$49/month".into(),
                },
            ],
            market_size: Some("$2.5B and growing at 15% CAGR".into()),
            trends: strings(&[
                "Increased demand for AI-powered solutions",
                "Shift towards mobile-first experiences",
                "Growing emphasis on data privacy",
                "Rise of subscription-based models",
            ]),
            pricing_insights: vec![
                PricingTier {
                    tier: "Basic".into(),
                    range: "$9-19/month".into(),
                    features: "Core functionality".into(),
                },
                PricingTier {
                    tier: "Professional".into(),
                    range: "$29-49/month".into(),
                    features: "Advanced features + integrations".into(),
                },
                PricingTier {
                    tier: "Enterprise".into(),
                    range: "$99-299/month".into(),
                    features: "Full feature set + support".into(),
                },
            ],
            opportunities: strings(&[
                "Underserved SMB market segment",
                "Opportunity for better user experience",
                "Growing demand for automation",
                "Potential for vertical specialization",
            ]),
        }
    }
}

impl Agent for MarketAnalyst {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    fn reply(&self, message: &str) -> String {
        let text = match keywords::classify(message, ROUTES) {
            Some(Topic::Competitors) => COMPETITORS,
            Some(Topic::Market) => MARKET,
            Some(Topic::Pricing) => PRICING,
            Some(Topic::Trends) => TRENDS,
            None => GENERAL,
        };
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn competitors_checked_before_market() {
        let market = MarketAnalyst::new();
        assert_eq!(market.reply("competitive market"), COMPETITORS);
        assert_eq!(market.reply("which sector?"), MARKET);
    }

    #[test]
    fn pricing_and_trends() {
        let market = MarketAnalyst::new();
        assert_eq!(market.reply("Monetization ideas"), PRICING);
        assert_eq!(market.reply("any opportunity here"), TRENDS);
        assert_eq!(market.reply("hi"), GENERAL);
    }

    #[test]
    fn research_echoes_query() {
        let research = MarketAnalyst::new().conduct_research("AI tutors");
        assert_eq!(research.query, "AI tutors");
        assert_eq!(research.competitors.len(), 2);
        assert_eq!(research.pricing_insights[2].tier, "Enterprise");
        assert!(research.market_size.is_some());
    }
}
