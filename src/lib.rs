//! Road-maintenance prioritization: scores citizen defect reports per road,
//! ranks roads into a maintenance queue and picks the best plan that fits a
//! maintenance-day budget.

pub mod aggregate;
pub mod analysis;
pub mod budget;
pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod prioritize;
pub mod report;
pub mod schedule;
pub mod scoring;

pub use aggregate::aggregate;
pub use analysis::analyze;
pub use budget::select_within_budget;
pub use error::PriorityError;
pub use models::{AggregatedRoad, Analysis, BudgetSelection, Report};
pub use prioritize::sort_descending_by_severity;
pub use scoring::severity_score;
