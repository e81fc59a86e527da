//! Sprint Planner: sprints, backlog, timelines and team capacity.

use std::collections::BTreeMap;

use crate::agent::{Agent, AgentCore, AgentKind};
use crate::keywords::{self, Route};
use crate::schemas::{SprintPlan, SprintTask, TaskPriority, TaskStatus, strings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Sprint,
    Tasks,
    Timeline,
    Capacity,
}

const ROUTES: &[Route<Topic>] = &[
    (Topic::Sprint, &["sprint", "planning", "scrum"]),
    (Topic::Tasks, &["task", "tasks", "backlog"]),
    (Topic::Timeline, &["timeline", "schedule", "roadmap"]),
    (Topic::Capacity, &["capacity", "estimation", "velocity"]),
];

const SPRINT: &str = "\
I'll help you create an effective sprint plan:

**🎯 Sprint Planning Framework:**

**1. Sprint Setup (Duration: 2 weeks)**
- Sprint Goal: Clear, measurable objective
- Team Capacity: Available hours per team member
- Definition of Done: Quality standards
- Success Metrics: How to measure completion

**2. Sprint Backlog Creation:**

**Week 1 - Foundation & Core Features:**
- Setup development environment (2-3 days)
- Implement core user authentication (3-4 days)
- Design basic UI components (2-3 days)
- Setup testing framework (1-2 days)

**Week 2 - Feature Development:**
- Implement main feature functionality (4-5 days)
- Add data validation and error handling (2 days)
- Conduct testing and bug fixes (2-3 days)
- Documentation and deployment prep (1 day)

**3. Daily Sprint Activities:**

**Daily Standups (15 minutes):**
- What did you complete yesterday?
- What will you work on today?
- Any blockers or impediments?

**Sprint Review (End of sprint):**
- Demo completed features
- Gather stakeholder feedback
- Review sprint goals achievement

**Sprint Retrospective:**
- What went well?
- What could be improved?
- Action items for next sprint

**📊 Sprint Metrics to Track:**
- Velocity (story points completed)
- Burndown chart progress
- Bug discovery and resolution rate
- Team satisfaction and morale";

const TASKS: &str = "\
Here's how I recommend managing your product backlog and tasks:

**📋 Task Prioritization Framework:**

**1. MoSCoW Method:**
- Must Have: Critical for MVP success
- Should Have: Important but not critical
- Could Have: Nice to have features
- Won't Have: Out of scope for current iteration

**2. Value vs Effort Matrix:**

**High Value, Low Effort (Quick Wins):**
- User authentication improvements
- Basic analytics dashboard
- Email notifications
- Performance optimizations

**High Value, High Effort (Major Projects):**
- Core AI functionality
- Advanced integrations
- Mobile application
- Enterprise features

**Low Value, Low Effort (Fill-ins):**
- UI polish and refinements
- Additional export formats
- Help documentation updates
- Minor feature enhancements

**3. Task Breakdown Structure:**

**Epic → User Stories → Tasks:**
- Epic: Large feature (e.g., 'User Management')
- User Story: Specific user need (e.g., 'As a user, I can reset my password')
- Task: Development work (e.g., 'Create password reset API endpoint')

**📏 Estimation Guidelines:**
- Use story points or t-shirt sizes (S, M, L, XL)
- Consider complexity, uncertainty, and effort
- Break down tasks larger than 3-5 days
- Include testing and documentation time

**🔄 Backlog Refinement:**
- Review and update priorities weekly
- Add acceptance criteria to user stories
- Remove or archive outdated items
- Ensure 2-3 sprints worth of ready stories";

const TIMELINE: &str = "\
I'll help you create a realistic project timeline:

**📅 Project Timeline (6-Month Plan):**

**Month 1-2: Foundation Phase**
- Week 1-2: Project setup and team onboarding
- Week 3-4: Core architecture and database design
- Week 5-6: Basic user authentication and authorization
- Week 7-8: Initial UI framework and components

**Month 3-4: Core Development Phase**
- Week 9-10: Main feature development (40% complete)
- Week 11-12: API development and integration
- Week 13-14: User interface implementation
- Week 15-16: Initial testing and bug fixes

**Month 5-6: Polish and Launch Phase**
- Week 17-18: Feature completion and refinement
- Week 19-20: Comprehensive testing and QA
- Week 21-22: Performance optimization
- Week 23-24: Documentation and deployment preparation

**🎯 Key Milestones:**

**Milestone 1 (Month 2): Technical Foundation**
- Development environment ready
- Database schema finalized
- Basic user management working
- CI/CD pipeline established

**Milestone 2 (Month 4): MVP Functionality**
- Core features 80% complete
- API endpoints functional
- User interface responsive
- Basic testing coverage

**Milestone 3 (Month 6): Production Ready**
- All features complete and tested
- Performance benchmarks met
- Security audit completed
- Documentation finalized

**⚠️ Risk Mitigation:**
- Buffer time: 20% added to estimates
- Weekly progress reviews and adjustments
- Alternative approaches for high-risk items
- Regular stakeholder communication

**📊 Progress Tracking:**
- Weekly burndown charts
- Feature completion percentage
- Quality metrics (bugs, test coverage)
- Team velocity and capacity utilization";

const CAPACITY: &str = "\
Let me help you analyze team capacity and planning:

**👥 Team Capacity Analysis:**

**1. Individual Capacity Calculation:**
- Total work hours per week: 40 hours
- Meetings and admin: -8 hours
- Code reviews and support: -6 hours
- Net development time: 26 hours/week

**2. Team Composition & Skills:**

**Frontend Developer:**
- Capacity: 26 hours/week
- Specialties: React, UI/UX, responsive design
- Can assist: Testing, documentation

**Backend Developer:**
- Capacity: 26 hours/week
- Specialties: API development, database, DevOps
- Can assist: System architecture, security

**Full-stack Developer:**
- Capacity: 26 hours/week
- Specialties: End-to-end features, integration
- Can assist: Any area as needed

**3. Sprint Velocity Estimation:**

**Sprint 1-2 (Team Forming):**
- Velocity: 60-70% of capacity
- Focus: Setup, learning, establishing practices
- Expected story points: 15-20 per sprint

**Sprint 3-6 (Team Performing):**
- Velocity: 80-90% of capacity
- Focus: Consistent feature delivery
- Expected story points: 25-30 per sprint

**4. Capacity Planning Best Practices:**

**Account for Non-Development Work:**
- Planning meetings: 10% of time
- Code reviews: 15% of time
- Bug fixes and support: 10% of time
- Learning and improvement: 5% of time

**🔧 Optimization Strategies:**
- Pair programming for complex features
- Cross-training to reduce bottlenecks
- Automation of repetitive tasks
- Regular retrospectives for process improvement

**📈 Capacity Monitoring:**
- Track actual vs planned hours weekly
- Monitor team happiness and energy levels
- Adjust sprint commitments based on data
- Plan for vacations and holidays";

const GENERAL: &str = "\
Here's my agile planning guidance for your project:

**🚀 Agile Planning Principles:**

**1. Start with Why:**
- Define clear project vision and goals
- Understand user needs and pain points
- Establish success criteria and metrics
- Align team on priorities and trade-offs

**2. Embrace Iterative Development:**
- Plan in short cycles (1-2 week sprints)
- Deliver working software regularly
- Gather feedback early and often
- Adapt plans based on learning

**3. Focus on Value Delivery:**
- Prioritize features by user value
- Start with minimum viable product (MVP)
- Validate assumptions with real users
- Measure and optimize continuously

**📋 Planning Toolkit:**

**User Story Mapping:**
- Map user journey from end to end
- Identify core user activities
- Break down into smaller user stories
- Prioritize by user value and effort

**Sprint Planning Meetings:**
- Review and refine product backlog
- Select items for upcoming sprint
- Break down work and estimate effort
- Commit to realistic sprint goals

**🔄 Continuous Improvement:**
- Conduct regular retrospectives
- Track team velocity and satisfaction
- Experiment with new practices
- Share learnings across teams

What specific planning challenge can I help you solve?";

/// (id, title, description, assignee, hours, priority) for the first sprint.
const FOUNDATION_TASKS: &[(&str, &str, &str, &str, u32, TaskPriority)] = &[
    (
        "S1-T1",
        "Development Environment Setup",
        "Configure development tools, databases, and deployment pipeline",
        "backend",
        16,
        TaskPriority::High,
    ),
    (
        "S1-T2",
        "User Authentication System",
        "Implement login, registration, and password reset functionality",
        "backend",
        24,
        TaskPriority::High,
    ),
    (
        "S1-T3",
        "UI Component Library",
        "Create reusable React components and design system",
        "frontend",
        20,
        TaskPriority::Medium,
    ),
    (
        "S1-T4",
        "Testing Framework Setup",
        "Configure unit, integration, and e2e testing tools",
        "fullstack",
        12,
        TaskPriority::Medium,
    ),
];

pub struct SprintPlanner {
    core: AgentCore,
}

impl Default for SprintPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SprintPlanner {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(AgentKind::Sprint, "Agile Planning & Task Management"),
        }
    }

    /// Two-week foundation sprint sized against the team's hours.
    pub fn create_sprint_plan(
        &self,
        description: &str,
        capacity: BTreeMap<String, u32>,
    ) -> SprintPlan {
        let total_capacity_hours: u64 = capacity.values().map(|&h| u64::from(h)).sum();
        tracing::debug!(total_capacity_hours, description, "Creating sprint plan");

        let tasks = FOUNDATION_TASKS
            .iter()
            .map(|&(id, title, description, assigned_to, estimated_hours, priority)| SprintTask {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                assigned_to: assigned_to.to_string(),
                estimated_hours,
                priority,
                status: TaskStatus::Todo,
            })
            .collect();

        SprintPlan {
            sprint_name: "Sprint 1 - Foundation".to_string(),
            duration_weeks: 2,
            goals: strings(&[
                "Establish development environment and CI/CD pipeline",
                "Implement core user authentication system",
                "Create basic UI framework and components",
                "Set up testing infrastructure",
            ]),
            tasks,
            capacity,
            total_capacity_hours,
            estimated_completion: "95%".to_string(),
            risks: strings(&[
                "Third-party service integration delays",
                "Team member availability changes",
                "Technical complexity underestimation",
            ]),
            success_metrics: strings(&[
                "All development tools configured and working",
                "Users can register and login successfully",
                "Basic UI components implemented and tested",
                "CI/CD pipeline successfully deploys to staging",
            ]),
        }
    }
}

impl Agent for SprintPlanner {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    fn reply(&self, message: &str) -> String {
        let text = match keywords::classify(message, ROUTES) {
            Some(Topic::Sprint) => SPRINT,
            Some(Topic::Tasks) => TASKS,
            Some(Topic::Timeline) => TIMELINE,
            Some(Topic::Capacity) => CAPACITY,
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
        let sprint = SprintPlanner::new();
        assert_eq!(sprint.reply("Scrum please"), SPRINT);
        assert_eq!(sprint.reply("groom the backlog"), TASKS);
        assert_eq!(sprint.reply("release schedule"), TIMELINE);
        assert_eq!(sprint.reply("team velocity"), CAPACITY);
        assert_eq!(sprint.reply("hi"), GENERAL);
    }

    #[test]
    fn planning_beats_roadmap() {
        assert_eq!(SprintPlanner::new().reply("roadmap planning"), SPRINT);
    }

    #[test]
    fn plan_sums_capacity() {
        let capacity = BTreeMap::from([
            ("frontend".to_string(), 26),
            ("backend".to_string(), 30),
        ]);
        let plan = SprintPlanner::new().create_sprint_plan("MVP", capacity);
        assert_eq!(plan.total_capacity_hours, 56);
        assert_eq!(plan.tasks.len(), 4);
        assert_eq!(plan.tasks[1].estimated_hours, 24);
        assert_eq!(plan.capacity["backend"], 30);
    }

    #[test]
    fn plan_total_exceeds_u32() {
        let capacity = BTreeMap::from([("a".to_string(), u32::MAX), ("b".to_string(), 1)]);
        let plan = SprintPlanner::new().create_sprint_plan("x", capacity);
        assert_eq!(plan.total_capacity_hours, u64::from(u32::MAX) + 1);
    }

    #[test]
    fn plan_with_empty_capacity() {
        let plan = SprintPlanner::new().create_sprint_plan("MVP", BTreeMap::new());
        assert_eq!(plan.total_capacity_hours, 0);
    }
}
