//! The five advisory personas.
//!
//! Each persona owns an ordered keyword table and a set of canned replies.
//! Messages that match no table get the persona's general advice.

mod market_analyst;
mod pitch_writer;
mod product_manager;
mod sprint_planner;
mod tech_architect;

pub use market_analyst::MarketAnalyst;
pub use pitch_writer::PitchWriter;
pub use product_manager::{ProductComponents, ProductManager};
pub use sprint_planner::SprintPlanner;
pub use tech_architect::TechArchitect;
