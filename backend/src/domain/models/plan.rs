//! Domain model for a yearly flight-hours allocation plan.
//!
//! The plan holds the twelve month records being edited plus the configured
//! limits, and derives the review (table rows, annual total, warnings) from
//! current state on demand. Deriving never mutates: calling
//! [`AllocationPlan::review`] twice without an intervening edit returns
//! identical results.

use serde::{Deserialize, Serialize};
use shared::WarningSeverity;
use std::fmt;

use super::month::Month;

/// Weeks used to approximate a month when deriving weekly averages.
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Weekly average above which a month is reported in the review.
pub const WEEKLY_AVERAGE_LIMIT: f64 = 30.0;

/// Numeric constraints collected from the user at session start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanLimits {
    pub max_hours_per_month: i64,
    pub min_hours_per_month: i64,
    pub max_hours_per_year: i64,
}

impl Default for PlanLimits {
    fn default() -> Self {
        Self {
            max_hours_per_month: 90,
            min_hours_per_month: 52,
            max_hours_per_year: 1000,
        }
    }
}

impl PlanLimits {
    /// The only construction-time rule: the monthly minimum may not exceed
    /// the monthly maximum.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.min_hours_per_month > self.max_hours_per_month {
            return Err(PlanError::InvalidLimits {
                min: self.min_hours_per_month,
                max: self.max_hours_per_month,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Blocking configuration error: the plan is not constructed.
    #[error("minimum hours per month ({min}) cannot exceed maximum hours per month ({max})")]
    InvalidLimits { min: i64, max: i64 },
    /// Caller contract violation: the presentation layer passed a bad key.
    #[error("unknown month: {0}")]
    UnknownMonth(String),
}

/// One editable row of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    pub month: Month,
    /// Stored as given by the user; the model never clamps this value
    pub assigned_hours: i64,
    pub high_demand: bool,
}

impl MonthRecord {
    /// Approximate hours flown per week within this month.
    pub fn weekly_average(&self) -> f64 {
        self.assigned_hours as f64 / WEEKS_PER_MONTH
    }
}

/// Validation outcome attached to a review, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanWarning {
    /// At least one month sits outside the configured per-month range. One
    /// combined warning regardless of how many months are affected.
    OutOfRange { min: i64, max: i64 },
    /// The annual total exceeds the annual cap.
    AnnualExceeded { total: i64, limit: i64, excess: i64 },
    /// Hours remain unassigned against the annual cap.
    AnnualRemaining {
        total: i64,
        limit: i64,
        remaining: i64,
    },
    /// The annual total matches the annual cap exactly.
    AnnualExact { total: i64 },
    /// These months average more than [`WEEKLY_AVERAGE_LIMIT`] hours per
    /// week, listed in calendar order.
    WeeklyAverageExceeded { months: Vec<Month> },
}

impl PlanWarning {
    /// Severity tag the presentation layer styles messages with.
    pub fn severity(&self) -> WarningSeverity {
        match self {
            PlanWarning::OutOfRange { .. } => WarningSeverity::Error,
            PlanWarning::AnnualExceeded { .. } => WarningSeverity::Error,
            PlanWarning::AnnualRemaining { .. } => WarningSeverity::Info,
            PlanWarning::AnnualExact { .. } => WarningSeverity::Success,
            PlanWarning::WeeklyAverageExceeded { .. } => WarningSeverity::Info,
        }
    }
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWarning::OutOfRange { min, max } => {
                write!(f, "Assigned hours must be between {min} and {max} per month.")
            }
            PlanWarning::AnnualExceeded { total, limit, excess } => {
                write!(
                    f,
                    "Annual hours limit exceeded: {total} hrs assigned, {excess} hrs over the maximum of {limit} hrs."
                )
            }
            PlanWarning::AnnualRemaining {
                total,
                limit,
                remaining,
            } => {
                write!(
                    f,
                    "You have assigned {total} hours; {remaining} hours remain of the annual limit ({limit} hrs)."
                )
            }
            PlanWarning::AnnualExact { total } => {
                write!(
                    f,
                    "You have assigned exactly the permitted annual total of {total} hours!"
                )
            }
            PlanWarning::WeeklyAverageExceeded { months } => {
                let names: Vec<&str> = months.iter().map(|m| m.name()).collect();
                write!(
                    f,
                    "The following months exceed {WEEKLY_AVERAGE_LIMIT} weekly hours: {}",
                    names.join(", ")
                )
            }
        }
    }
}

/// One derived row of the review table / bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    pub month: Month,
    pub assigned_hours: i64,
    pub high_demand: bool,
    pub weekly_average: f64,
}

/// Everything the presentation layer renders: twelve rows in calendar
/// order, the annual total, and the ordered warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReview {
    pub per_month: Vec<PlanRow>,
    pub annual_total: i64,
    pub warnings: Vec<PlanWarning>,
}

/// The allocation being edited in the active session: twelve month records
/// plus the configured limits.
///
/// Records are stored in calendar order, so a month's record sits at the
/// index of its position in [`Month::ALL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationPlan {
    months: Vec<MonthRecord>,
    limits: PlanLimits,
}

impl AllocationPlan {
    /// Build the default allocation for the given limits: high-demand
    /// months start at the per-month maximum, the other eight at the
    /// minimum.
    pub fn new(limits: PlanLimits) -> Result<Self, PlanError> {
        limits.validate()?;
        let months = Month::ALL
            .iter()
            .map(|&month| {
                let high_demand = month.is_high_demand_by_default();
                MonthRecord {
                    month,
                    assigned_hours: if high_demand {
                        limits.max_hours_per_month
                    } else {
                        limits.min_hours_per_month
                    },
                    high_demand,
                }
            })
            .collect();
        Ok(Self { months, limits })
    }

    pub fn limits(&self) -> &PlanLimits {
        &self.limits
    }

    /// The twelve records in calendar order.
    pub fn months(&self) -> &[MonthRecord] {
        &self.months
    }

    fn record_mut(&mut self, month_name: &str) -> Result<&mut MonthRecord, PlanError> {
        let month = Month::from_name(month_name)
            .ok_or_else(|| PlanError::UnknownMonth(month_name.to_string()))?;
        Ok(&mut self.months[month as usize])
    }

    /// Overwrite a month's assigned hours. The value is stored as given,
    /// out-of-range included; the review reports violations instead of the
    /// model clamping them away.
    pub fn set_assigned_hours(&mut self, month_name: &str, hours: i64) -> Result<(), PlanError> {
        self.record_mut(month_name)?.assigned_hours = hours;
        Ok(())
    }

    /// Set a month's high-demand flag.
    pub fn set_high_demand(&mut self, month_name: &str, high_demand: bool) -> Result<(), PlanError> {
        self.record_mut(month_name)?.high_demand = high_demand;
        Ok(())
    }

    /// Derive the review from current state.
    ///
    /// Warnings are evaluated in a fixed order: the aggregate range check,
    /// then exactly one of the three annual-total outcomes, then the weekly
    /// average check.
    pub fn review(&self) -> PlanReview {
        let per_month: Vec<PlanRow> = self
            .months
            .iter()
            .map(|record| PlanRow {
                month: record.month,
                assigned_hours: record.assigned_hours,
                high_demand: record.high_demand,
                weekly_average: record.weekly_average(),
            })
            .collect();

        let annual_total: i64 = self.months.iter().map(|r| r.assigned_hours).sum();

        let mut warnings = Vec::new();

        // Aggregate check: one generic warning no matter how many months
        // are out of range.
        let any_out_of_range = self.months.iter().any(|r| {
            r.assigned_hours < self.limits.min_hours_per_month
                || r.assigned_hours > self.limits.max_hours_per_month
        });
        if any_out_of_range {
            warnings.push(PlanWarning::OutOfRange {
                min: self.limits.min_hours_per_month,
                max: self.limits.max_hours_per_month,
            });
        }

        let limit = self.limits.max_hours_per_year;
        if annual_total > limit {
            warnings.push(PlanWarning::AnnualExceeded {
                total: annual_total,
                limit,
                excess: annual_total - limit,
            });
        } else if annual_total < limit {
            warnings.push(PlanWarning::AnnualRemaining {
                total: annual_total,
                limit,
                remaining: limit - annual_total,
            });
        } else {
            warnings.push(PlanWarning::AnnualExact { total: annual_total });
        }

        let heavy_months: Vec<Month> = self
            .months
            .iter()
            .filter(|r| r.weekly_average() > WEEKLY_AVERAGE_LIMIT)
            .map(|r| r.month)
            .collect();
        if !heavy_months.is_empty() {
            warnings.push(PlanWarning::WeeklyAverageExceeded {
                months: heavy_months,
            });
        }

        PlanReview {
            per_month,
            annual_total,
            warnings,
        }
    }
}
