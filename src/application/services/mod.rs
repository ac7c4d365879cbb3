//! Application services orchestrating domain logic.

mod link_service;
mod stats_service;

pub use link_service::LinkService;
pub use stats_service::{AnalyticsSummary, StatsService};
