//! Mappers for converting between plan domain models and shared DTOs.

use crate::domain::models::plan::{PlanLimits, PlanReview};
use shared::{MonthRow, PlanLimitsDto, PlanReviewResponse, PlanWarningDto};

pub struct PlanMapper;

impl PlanMapper {
    /// Render a review into the DTO the presentation layer consumes:
    /// table/chart rows plus formatted, severity-tagged messages.
    pub fn review_to_dto(review: PlanReview) -> PlanReviewResponse {
        PlanReviewResponse {
            months: review
                .per_month
                .into_iter()
                .map(|row| MonthRow {
                    month: row.month.name().to_string(),
                    assigned_hours: row.assigned_hours,
                    high_demand: row.high_demand,
                    weekly_average: row.weekly_average,
                })
                .collect(),
            annual_total: review.annual_total,
            warnings: review
                .warnings
                .into_iter()
                .map(|warning| PlanWarningDto {
                    severity: warning.severity(),
                    message: warning.to_string(),
                })
                .collect(),
        }
    }

    pub fn limits_to_domain(dto: PlanLimitsDto) -> PlanLimits {
        PlanLimits {
            max_hours_per_month: dto.max_hours_per_month,
            min_hours_per_month: dto.min_hours_per_month,
            max_hours_per_year: dto.max_hours_per_year,
        }
    }

    pub fn limits_to_dto(domain: PlanLimits) -> PlanLimitsDto {
        PlanLimitsDto {
            max_hours_per_month: domain.max_hours_per_month,
            min_hours_per_month: domain.min_hours_per_month,
            max_hours_per_year: domain.max_hours_per_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::plan::AllocationPlan;
    use shared::WarningSeverity;

    fn default_review() -> PlanReview {
        AllocationPlan::new(PlanLimits::default()).unwrap().review()
    }

    #[test]
    fn test_review_dto_keeps_calendar_order_and_values() {
        let response = PlanMapper::review_to_dto(default_review());
        assert_eq!(response.months.len(), 12);
        assert_eq!(response.months[0].month, "January");
        assert_eq!(response.months[0].assigned_hours, 90);
        assert!(response.months[0].high_demand);
        assert_eq!(response.months[0].weekly_average, 22.5);
        assert_eq!(response.months[1].month, "February");
        assert_eq!(response.months[1].assigned_hours, 52);
        assert_eq!(response.annual_total, 776);
    }

    #[test]
    fn test_review_dto_formats_and_tags_warnings() {
        let response = PlanMapper::review_to_dto(default_review());
        assert_eq!(response.warnings.len(), 1);
        let warning = &response.warnings[0];
        assert_eq!(warning.severity, WarningSeverity::Info);
        assert!(warning.message.contains("224"));
        assert!(warning.message.contains("1000"));
    }

    #[test]
    fn test_exceeded_and_range_warnings_map_to_errors() {
        let mut plan = AllocationPlan::new(PlanLimits::default()).unwrap();
        for row in default_review().per_month {
            plan.set_assigned_hours(row.month.name(), 130).unwrap();
        }
        let response = PlanMapper::review_to_dto(plan.review());
        let severities: Vec<WarningSeverity> =
            response.warnings.iter().map(|w| w.severity).collect();
        assert_eq!(
            severities,
            vec![
                WarningSeverity::Error,
                WarningSeverity::Error,
                WarningSeverity::Info,
            ]
        );
    }

    #[test]
    fn test_review_response_serializes_to_json() {
        let response = PlanMapper::review_to_dto(default_review());
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"annual_total\":776"));
        assert!(json.contains("\"month\":\"January\""));
    }

    #[test]
    fn test_limits_round_trip_between_dto_and_domain() {
        let dto = PlanLimitsDto::default();
        let domain = PlanMapper::limits_to_domain(dto.clone());
        assert_eq!(domain, PlanLimits::default());
        assert_eq!(PlanMapper::limits_to_dto(domain), dto);
    }
}
