//! The fixed calendar months of a planning year.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month. Ordering is significant: the review table and the bar
/// chart both follow January..December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// English display name, as shown in the review table.
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Look up a month by display name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Month> {
        Month::ALL
            .iter()
            .copied()
            .find(|month| month.name().eq_ignore_ascii_case(name))
    }

    /// Whether this month starts at the per-month maximum, reflecting
    /// expected seasonal flight demand.
    pub fn is_high_demand_by_default(&self) -> bool {
        matches!(
            self,
            Month::January | Month::July | Month::August | Month::December
        )
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_contains_twelve_unique_months() {
        assert_eq!(Month::ALL.len(), 12);
        let names: HashSet<&str> = Month::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_all_is_in_calendar_order() {
        assert_eq!(Month::ALL[0], Month::January);
        assert_eq!(Month::ALL[6], Month::July);
        assert_eq!(Month::ALL[11], Month::December);
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Month::from_name("January"), Some(Month::January));
        assert_eq!(Month::from_name("january"), Some(Month::January));
        assert_eq!(Month::from_name("SEPTEMBER"), Some(Month::September));
    }

    #[test]
    fn test_from_name_rejects_unknown_names() {
        assert_eq!(Month::from_name("Januar"), None);
        assert_eq!(Month::from_name(""), None);
        assert_eq!(Month::from_name("Smarch"), None);
    }

    #[test]
    fn test_high_demand_defaults() {
        let high_demand: Vec<Month> = Month::ALL
            .iter()
            .copied()
            .filter(|m| m.is_high_demand_by_default())
            .collect();
        assert_eq!(
            high_demand,
            vec![Month::January, Month::July, Month::August, Month::December]
        );
    }
}
