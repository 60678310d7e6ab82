use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::SplitRates;
use crate::decimal::Money;
use crate::errors::{FleetError, Result};
use crate::split::PeriodFinancials;
use crate::types::{ExpenseCategory, VehicleId};

/// one collected rent payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentCollection {
    pub vehicle_id: VehicleId,
    pub amount: Money,
    pub collected_on: NaiveDate,
}

/// one expense recorded against a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub vehicle_id: VehicleId,
    pub amount: Money,
    pub incurred_on: NaiveDate,
    pub category: ExpenseCategory,
    /// only approved expenses count against revenue
    pub approved: bool,
}

/// inclusive date range for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingPeriod {
    /// full calendar month
    pub fn month(year: i32, month: u32) -> Result<Self> {
        let start =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| FleetError::InvalidDate {
                message: format!("no such month: {year}-{month:02}"),
            })?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|d| d.checked_sub_days(Days::new(1)))
            .ok_or_else(|| FleetError::InvalidDate {
                message: format!("month end overflow: {year}-{month:02}"),
            })?;
        Ok(Self { start, end })
    }

    /// seven-day rent week starting on the given day
    pub fn week_starting(start: NaiveDate) -> Result<Self> {
        let end = start
            .checked_add_days(Days::new(6))
            .ok_or_else(|| FleetError::InvalidDate {
                message: format!("week end overflow after {start}"),
            })?;
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// aggregate a vehicle's collected rent and approved expenses over a period
pub fn period_financials(
    vehicle_id: VehicleId,
    rents: &[RentCollection],
    expenses: &[ExpenseRecord],
    period: ReportingPeriod,
    rates: &SplitRates,
) -> PeriodFinancials {
    let revenue = rents
        .iter()
        .filter(|r| r.vehicle_id == vehicle_id && period.contains(r.collected_on))
        .map(|r| r.amount)
        .fold(Money::ZERO, |acc, x| acc + x);

    let expense_total = expenses
        .iter()
        .filter(|e| e.vehicle_id == vehicle_id && e.approved && period.contains(e.incurred_on))
        .map(|e| e.amount)
        .fold(Money::ZERO, |acc, x| acc + x);

    rates.period(revenue, expense_total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rent(vehicle_id: VehicleId, amount: i64, on: NaiveDate) -> RentCollection {
        RentCollection {
            vehicle_id,
            amount: Money::from_major(amount),
            collected_on: on,
        }
    }

    fn expense(
        vehicle_id: VehicleId,
        amount: i64,
        on: NaiveDate,
        approved: bool,
    ) -> ExpenseRecord {
        ExpenseRecord {
            vehicle_id,
            amount: Money::from_major(amount),
            incurred_on: on,
            category: ExpenseCategory::Maintenance,
            approved,
        }
    }

    #[test]
    fn test_month_period_covers_leap_february() {
        let period = ReportingPeriod::month(2024, 2).unwrap();
        assert_eq!(period.start, day(2024, 2, 1));
        assert_eq!(period.end, day(2024, 2, 29));
        assert!(period.contains(day(2024, 2, 29)));
        assert!(!period.contains(day(2024, 3, 1)));
    }

    #[test]
    fn test_month_period_rejects_bad_month() {
        assert!(matches!(
            ReportingPeriod::month(2024, 13),
            Err(FleetError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_week_period_spans_seven_days() {
        let period = ReportingPeriod::week_starting(day(2024, 6, 10)).unwrap();
        assert_eq!(period.end, day(2024, 6, 16));
        assert!(period.contains(day(2024, 6, 10)));
        assert!(period.contains(day(2024, 6, 16)));
        assert!(!period.contains(day(2024, 6, 17)));
    }

    #[test]
    fn test_aggregation_filters_by_vehicle_approval_and_range() {
        let vehicle = Uuid::new_v4();
        let other = Uuid::new_v4();
        let period = ReportingPeriod::month(2024, 6).unwrap();

        let rents = vec![
            rent(vehicle, 12_000, day(2024, 6, 3)),
            rent(vehicle, 12_000, day(2024, 6, 10)),
            rent(vehicle, 12_000, day(2024, 7, 1)), // outside the period
            rent(other, 9_000, day(2024, 6, 5)),    // different vehicle
        ];
        let expenses = vec![
            expense(vehicle, 4_000, day(2024, 6, 8), true),
            expense(vehicle, 2_500, day(2024, 6, 20), false), // not approved
            expense(vehicle, 1_000, day(2024, 5, 30), true),  // outside the period
            expense(other, 800, day(2024, 6, 9), true),
        ];

        let period_fin = period_financials(
            vehicle,
            &rents,
            &expenses,
            period,
            &SplitRates::standard_partner(),
        );

        assert_eq!(period_fin.revenue, Money::from_major(24_000));
        assert_eq!(period_fin.expenses, Money::from_major(4_000));
    }

    #[test]
    fn test_empty_period_aggregates_to_zero() {
        let vehicle = Uuid::new_v4();
        let period = ReportingPeriod::month(2024, 6).unwrap();

        let period_fin =
            period_financials(vehicle, &[], &[], period, &SplitRates::standard_company());

        assert_eq!(period_fin.revenue, Money::ZERO);
        assert_eq!(period_fin.expenses, Money::ZERO);
    }
}
