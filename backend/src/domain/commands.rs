//! Domain-level command and result types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The presentation layer is responsible for
//! mapping the public DTOs defined in the `shared` crate to these internal
//! types.

pub mod plan {
    use crate::domain::models::plan::{PlanLimits, PlanReview};

    /// Input for starting a planning session.
    #[derive(Debug, Clone, Default)]
    pub struct StartPlanCommand {
        pub limits: PlanLimits,
    }

    /// Input for assigning hours to a month.
    #[derive(Debug, Clone)]
    pub struct AssignHoursCommand {
        pub month: String,
        pub hours: i64,
    }

    /// Input for toggling a month's high-demand flag.
    #[derive(Debug, Clone)]
    pub struct SetHighDemandCommand {
        pub month: String,
        pub high_demand: bool,
    }

    /// Result of any plan operation: the refreshed derived view.
    #[derive(Debug, Clone)]
    pub struct PlanReviewResult {
        pub review: PlanReview,
    }
}
