use serde::{Deserialize, Serialize};

/// Lowest value accepted by the per-month hours inputs.
pub const MONTHLY_HOURS_INPUT_MIN: i64 = 1;
/// Highest value accepted by the per-month hours inputs.
pub const MONTHLY_HOURS_INPUT_MAX: i64 = 200;
/// Lowest value accepted by the annual hours input.
pub const ANNUAL_HOURS_INPUT_MIN: i64 = 1;
/// Highest value accepted by the annual hours input.
pub const ANNUAL_HOURS_INPUT_MAX: i64 = 2000;

/// Default maximum hours per month offered by the configuration form.
pub const DEFAULT_MAX_HOURS_PER_MONTH: i64 = 90;
/// Default minimum hours per month offered by the configuration form.
pub const DEFAULT_MIN_HOURS_PER_MONTH: i64 = 52;
/// Default annual hours cap offered by the configuration form.
pub const DEFAULT_MAX_HOURS_PER_YEAR: i64 = 1000;

/// Severity of a plan warning, used by the UI to pick message styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    /// A constraint is violated (out-of-range hours, annual cap exceeded)
    Error,
    /// Informational: hours remain unassigned, or weekly averages run high
    Info,
    /// The allocation uses the annual cap exactly
    Success,
}

/// A formatted, user-visible validation message for the active plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanWarningDto {
    pub severity: WarningSeverity,
    pub message: String,
}

/// One row of the plan review: a table row and a chart bar in one.
///
/// Rows arrive in calendar order (January..December). The bar chart uses
/// `assigned_hours` for bar height and `high_demand` for the color split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRow {
    /// English month name ("January".."December")
    pub month: String,
    /// Hours assigned to this month (editable column)
    pub assigned_hours: i64,
    /// Whether this is a high-demand month (editable column)
    pub high_demand: bool,
    /// Derived: assigned_hours / 4 (read-only column)
    pub weekly_average: f64,
}

/// Derived view handed to the presentation layer after every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReviewResponse {
    pub months: Vec<MonthRow>,
    pub annual_total: i64,
    /// Ordered, pre-formatted validation messages
    pub warnings: Vec<PlanWarningDto>,
}

/// Constraint values collected from the user by the configuration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanLimitsDto {
    pub max_hours_per_month: i64,
    pub min_hours_per_month: i64,
    pub max_hours_per_year: i64,
}

impl Default for PlanLimitsDto {
    fn default() -> Self {
        Self {
            max_hours_per_month: DEFAULT_MAX_HOURS_PER_MONTH,
            min_hours_per_month: DEFAULT_MIN_HOURS_PER_MONTH,
            max_hours_per_year: DEFAULT_MAX_HOURS_PER_YEAR,
        }
    }
}
