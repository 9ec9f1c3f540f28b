//! Session service for the flight hours planner.
//!
//! Owns the single allocation plan of the active session and re-derives the
//! review after every mutation. This is the original edit → recompute →
//! render loop of the UI expressed as explicit calls: the presentation layer
//! applies one command per user edit and renders the returned review.

use anyhow::Result;
use log::{info, warn};

use crate::domain::commands::plan::{
    AssignHoursCommand, PlanReviewResult, SetHighDemandCommand, StartPlanCommand,
};
use crate::domain::models::plan::AllocationPlan;

/// Service owning the active planning session.
#[derive(Debug, Clone)]
pub struct PlannerService {
    plan: AllocationPlan,
}

impl PlannerService {
    /// Start a planning session with the given limits.
    pub fn new(command: StartPlanCommand) -> Result<Self> {
        info!("Starting planning session with limits: {:?}", command.limits);
        let plan = AllocationPlan::new(command.limits)?;
        Ok(Self { plan })
    }

    /// The plan being edited.
    pub fn plan(&self) -> &AllocationPlan {
        &self.plan
    }

    /// Assign hours to a month and return the refreshed review.
    pub fn assign_hours(&mut self, command: AssignHoursCommand) -> Result<PlanReviewResult> {
        info!("Assigning {} hours to {}", command.hours, command.month);
        if let Err(err) = self.plan.set_assigned_hours(&command.month, command.hours) {
            warn!("Failed to assign hours: {}", err);
            return Err(err.into());
        }
        Ok(self.current_review())
    }

    /// Toggle a month's high-demand flag and return the refreshed review.
    pub fn set_high_demand(&mut self, command: SetHighDemandCommand) -> Result<PlanReviewResult> {
        info!(
            "Setting high demand for {}: {}",
            command.month, command.high_demand
        );
        if let Err(err) = self.plan.set_high_demand(&command.month, command.high_demand) {
            warn!("Failed to set high demand: {}", err);
            return Err(err.into());
        }
        Ok(self.current_review())
    }

    /// Re-derive the review without mutating anything.
    pub fn current_review(&self) -> PlanReviewResult {
        PlanReviewResult {
            review: self.plan.review(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::plan::{PlanLimits, PlanWarning};

    fn start_default_session() -> PlannerService {
        PlannerService::new(StartPlanCommand::default()).unwrap()
    }

    #[test]
    fn test_new_fails_on_invalid_limits() {
        let command = StartPlanCommand {
            limits: PlanLimits {
                max_hours_per_month: 40,
                min_hours_per_month: 80,
                max_hours_per_year: 1000,
            },
        };
        assert!(PlannerService::new(command).is_err());
    }

    #[test]
    fn test_assign_hours_returns_updated_review() {
        let mut service = start_default_session();
        let result = service
            .assign_hours(AssignHoursCommand {
                month: "February".to_string(),
                hours: 80,
            })
            .unwrap();
        // February moved from 52 to 80, so the total gains 28.
        assert_eq!(result.review.annual_total, 776 + 28);
        assert_eq!(result.review.per_month[1].assigned_hours, 80);
    }

    #[test]
    fn test_set_high_demand_returns_updated_review() {
        let mut service = start_default_session();
        let result = service
            .set_high_demand(SetHighDemandCommand {
                month: "March".to_string(),
                high_demand: true,
            })
            .unwrap();
        assert!(result.review.per_month[2].high_demand);
        // Toggling the flag never touches the hours.
        assert_eq!(result.review.annual_total, 776);
    }

    #[test]
    fn test_unknown_month_command_is_rejected() {
        let mut service = start_default_session();
        let result = service.assign_hours(AssignHoursCommand {
            month: "Brumaire".to_string(),
            hours: 60,
        });
        assert!(result.is_err());
        // The session plan is untouched.
        assert_eq!(service.current_review().review.annual_total, 776);
    }

    #[test]
    fn test_current_review_is_stable_between_edits() {
        let service = start_default_session();
        let first = service.current_review();
        let second = service.current_review();
        assert_eq!(first.review, second.review);
        assert_eq!(
            first.review.warnings,
            vec![PlanWarning::AnnualRemaining {
                total: 776,
                limit: 1000,
                remaining: 224,
            }]
        );
    }
}
