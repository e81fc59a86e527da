//! Tech Architect: architecture, stack choices, scaling and security.

use crate::agent::{Agent, AgentCore, AgentKind};
use crate::keywords::{self, Route};
use crate::schemas::{TechRecommendations, string_map};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Architecture,
    Stack,
    Scalability,
    Security,
}

const ROUTES: &[Route<Topic>] = &[
    (Topic::Architecture, &["architecture", "design", "system"]),
    (Topic::Stack, &["tech stack", "technology", "framework"]),
    (Topic::Scalability, &["scalability", "scale", "performance"]),
    (Topic::Security, &["security", "authentication", "auth"]),
];

const ARCHITECTURE: &str = "\
From a technical architecture perspective, I recommend:

**🏗️ System Architecture:**
- Microservices architecture for scalability
- API Gateway for service orchestration
- Event-driven communication between services
- Containerization with Docker/Kubernetes

**🔧 Core Components:**
- Frontend: React.js/Next.js with TypeScript
- Backend: FastAPI (Python) or Express.js (Node.js)
- Database: PostgreSQL for relational data, Redis for caching
- Message Queue: RabbitMQ or Apache Kafka

**☁️ Cloud Infrastructure:**
- Container orchestration: Kubernetes
- CI/CD: GitHub Actions or GitLab CI
- Monitoring: Prometheus + Grafana
- Logging: ELK Stack (Elasticsearch, Logstash, Kibana)

This architecture will support high availability and horizontal scaling.";

const STACK: &str = "\
Here's my recommended technology stack:

**🖥️ Frontend Stack:**
- Framework: Next.js 14 with App Router
- Language: TypeScript for type safety
- Styling: Tailwind CSS for rapid development
- State Management: Zustand or Redux Toolkit
- Real-time: Socket.io-client

**⚙️ Backend Stack:**
- API Framework: FastAPI (Python) - excellent performance
- WebSocket: Built-in FastAPI WebSocket support
- Task Queue: Celery with Redis broker
- ORM: SQLAlchemy for database operations

**🗄️ Database & Storage:**
- Primary DB: PostgreSQL for ACID compliance
- Cache: Redis for session storage and caching
- File Storage: AWS S3 or similar cloud storage
- Search: Elasticsearch for advanced search capabilities

**🚀 DevOps & Deployment:**
- Containerization: Docker with multi-stage builds
- Orchestration: Kubernetes or Docker Swarm
- CI/CD: GitHub Actions for automated deployment
- Hosting: AWS, GCP, or DigitalOcean

This stack balances performance, developer experience, and scalability.";

const SCALABILITY: &str = "\
Let me address scalability from multiple angles:

**📈 Horizontal Scaling Strategy:**
- Load balancing across multiple application instances
- Database read replicas for read-heavy operations
- CDN for static asset distribution
- Auto-scaling based on CPU/memory metrics

**⚡ Performance Optimization:**
- Database indexing and query optimization
- Caching layers (Redis, Memcached)
- Asynchronous processing for heavy tasks
- Connection pooling and resource management

**🔄 Architecture Patterns:**
- CQRS (Command Query Responsibility Segregation)
- Event sourcing for audit trails
- Circuit breaker pattern for fault tolerance
- Bulkhead pattern for resource isolation

**📊 Monitoring & Metrics:**
- Application Performance Monitoring (APM)
- Real-time alerting for system health
- Performance benchmarking and load testing
- Capacity planning based on usage patterns";

const SECURITY: &str = "\
Security should be built into every layer:

**🔐 Authentication & Authorization:**
- JWT tokens with refresh token rotation
- OAuth 2.0 / OpenID Connect integration
- Role-based access control (RBAC)
- Multi-factor authentication (MFA)

**🛡️ Data Protection:**
- Encryption at rest (AES-256)
- Encryption in transit (TLS 1.3)
- Database field-level encryption for sensitive data
- Secure key management (AWS KMS, HashiCorp Vault)

**🚫 Attack Prevention:**
- Input validation and sanitization
- SQL injection prevention with parameterized queries
- CSRF protection with tokens
- Rate limiting and DDoS protection

**📋 Compliance & Auditing:**
- Audit logging for all sensitive operations
- GDPR compliance for data handling
- Regular security assessments and penetration testing
- Vulnerability scanning in CI/CD pipeline";

const GENERAL: &str = "\
From a technical standpoint, I recommend focusing on:

**🎯 Technical Priorities:**
1. Start with a solid foundation - choose proven technologies
2. Design for maintainability and developer experience
3. Implement proper testing strategies (unit, integration, e2e)
4. Set up monitoring and observability early
5. Plan for security from day one

**🔄 Development Best Practices:**
- Follow clean architecture principles
- Implement comprehensive error handling
- Use dependency injection for testability
- Maintain clear API documentation
- Establish coding standards and code reviews

**📈 Growth Considerations:**
- Design APIs for versioning and backward compatibility
- Plan database schema migrations
- Implement feature flags for gradual rollouts
- Set up staging environments that mirror production

What specific technical aspect would you like me to dive deeper into?";

pub struct TechArchitect {
    core: AgentCore,
}

impl Default for TechArchitect {
    fn default() -> Self {
        Self::new()
    }
}

impl TechArchitect {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(AgentKind::Tech, "Technical Architecture & Design"),
        }
    }

    /// Concrete stack picks for a set of requirements.
    pub fn tech_recommendations(&self, requirements: &str) -> TechRecommendations {
        tracing::debug!(len = requirements.len(), "Building tech recommendations");
        TechRecommendations {
            frontend: string_map(&[
                ("framework", "Next.js 14"),
                ("language", "TypeScript"),
                ("styling", "Tailwind CSS"),
                ("state_management", "Zustand"),
                ("testing", "Jest + React Testing Library"),
            ]),
            backend: string_map(&[
                ("framework", "FastAPI"),
                ("language", "Python 3.11+"),
                ("database", "PostgreSQL 15+"),
                ("cache", "Redis 7+"),
                ("task_queue", "Celery"),
            ]),
            infrastructure: string_map(&[
                ("containerization", "Docker"),
                ("orchestration", "Kubernetes"),
                ("ci_cd", "GitHub Actions"),
                ("monitoring", "Prometheus + Grafana"),
                ("logging", "ELK Stack"),
            ]),
            estimated_timeline: string_map(&[
                ("setup", "1-2 weeks"),
                ("mvp", "8-12 weeks"),
                ("production_ready", "16-20 weeks"),
            ]),
        }
    }
}

impl Agent for TechArchitect {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    fn reply(&self, message: &str) -> String {
        let text = match keywords::classify(message, ROUTES) {
            Some(Topic::Architecture) => ARCHITECTURE,
            Some(Topic::Stack) => STACK,
            Some(Topic::Scalability) => SCALABILITY,
            Some(Topic::Security) => SECURITY,
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
        let tech = TechArchitect::new();
        assert_eq!(tech.reply("Which framework?"), STACK);
        assert_eq!(tech.reply("how do we scale"), SCALABILITY);
        assert_eq!(tech.reply("OAuth login"), SECURITY);
        assert_eq!(tech.reply("hi"), GENERAL);
    }

    #[test]
    fn architecture_beats_stack() {
        // "system" is checked before "technology"
        assert_eq!(TechArchitect::new().reply("technology system"), ARCHITECTURE);
    }

    #[test]
    fn recommendations_cover_all_layers() {
        let recs = TechArchitect::new().tech_recommendations("chat app");
        assert_eq!(recs.frontend["framework"], "Next.js 14");
        assert_eq!(recs.backend["cache"], "Redis 7+");
        assert_eq!(recs.infrastructure.len(), 5);
        assert_eq!(recs.estimated_timeline["mvp"], "8-12 weeks");
    }
}
