use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{FleetError, Result};
use crate::types::OwnershipType;

/// revenue and expenses for one vehicle over one reporting period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodFinancials {
    /// collected rent for the period
    pub revenue: Money,
    /// approved expenses for the period
    pub expenses: Money,
    pub ownership: OwnershipType,
    pub tax_rate: Rate,
    /// applies only to partner vehicles
    pub service_charge_rate: Rate,
    /// applies only to partner vehicles
    pub partner_share_rate: Rate,
}

impl PeriodFinancials {
    pub fn validate(&self) -> Result<()> {
        if self.revenue.is_negative() {
            return Err(FleetError::NegativeRevenue {
                revenue: self.revenue,
            });
        }
        Ok(())
    }
}

/// cascading deduction of a period's profit
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialSplit {
    /// revenue minus expenses, before any deduction; may be negative
    pub profit: Money,
    pub tax: Money,
    pub service_charge: Money,
    pub partner_share: Money,
    pub owner_share: Money,
    /// company vehicles only: everything left after tax
    pub owner_full_share: Money,
}

/// run the deduction cascade for one vehicle and period
///
/// each deduction applies only while the running remainder is strictly
/// positive; a loss-making period yields zero deductions throughout.
pub fn compute_split(period: &PeriodFinancials) -> Result<FinancialSplit> {
    period.validate()?;

    let profit = period.revenue - period.expenses;
    let tax = if profit > Money::ZERO {
        profit.percentage(period.tax_rate)
    } else {
        Money::ZERO
    };

    let mut split = FinancialSplit {
        profit,
        tax,
        ..FinancialSplit::default()
    };

    match period.ownership {
        OwnershipType::Partner => {
            let service_charge = if profit > Money::ZERO {
                profit.percentage(period.service_charge_rate)
            } else {
                Money::ZERO
            };
            split.service_charge = service_charge;

            let remainder = profit - tax - service_charge;
            if remainder > Money::ZERO {
                split.partner_share = remainder.percentage(period.partner_share_rate);
                // owner share comes from the complement rate, never remainder minus partner share
                split.owner_share = remainder.percentage(period.partner_share_rate.complement());
            }
        }
        OwnershipType::Company => {
            let after_tax = profit - tax;
            if after_tax > Money::ZERO {
                split.owner_full_share = after_tax;
            }
        }
    }

    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SplitRates;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn partner_period(revenue: i64, expenses: i64) -> PeriodFinancials {
        SplitRates::standard_partner().period(Money::from_major(revenue), Money::from_major(expenses))
    }

    fn company_period(revenue: i64, expenses: i64) -> PeriodFinancials {
        SplitRates::standard_company().period(Money::from_major(revenue), Money::from_major(expenses))
    }

    #[test]
    fn test_partner_cascade_worked_example() {
        let split = compute_split(&partner_period(50_000, 20_000)).unwrap();

        assert_eq!(split.profit, Money::from_major(30_000));
        assert_eq!(split.tax, Money::from_major(1_200));
        assert_eq!(split.service_charge, Money::from_major(3_000));
        assert_eq!(split.partner_share, Money::from_major(12_900));
        assert_eq!(split.owner_share, Money::from_major(12_900));
        assert_eq!(split.owner_full_share, Money::ZERO);
    }

    #[test]
    fn test_company_cascade_worked_example() {
        let split = compute_split(&company_period(50_000, 20_000)).unwrap();

        assert_eq!(split.profit, Money::from_major(30_000));
        assert_eq!(split.tax, Money::from_major(1_200));
        assert_eq!(split.owner_full_share, Money::from_major(28_800));
        assert_eq!(split.service_charge, Money::ZERO);
        assert_eq!(split.partner_share, Money::ZERO);
        assert_eq!(split.owner_share, Money::ZERO);
    }

    #[test]
    fn test_loss_period_zeroes_every_deduction() {
        let split = compute_split(&partner_period(10_000, 15_000)).unwrap();

        assert_eq!(split.profit, Money::from_major(-5_000));
        assert_eq!(split.tax, Money::ZERO);
        assert_eq!(split.service_charge, Money::ZERO);
        assert_eq!(split.partner_share, Money::ZERO);
        assert_eq!(split.owner_share, Money::ZERO);
        assert_eq!(split.owner_full_share, Money::ZERO);
    }

    #[test]
    fn test_zero_profit_yields_zero_deductions() {
        let split = compute_split(&partner_period(20_000, 20_000)).unwrap();

        assert_eq!(split.profit, Money::ZERO);
        assert_eq!(split.tax, Money::ZERO);
        assert_eq!(split.partner_share, Money::ZERO);
        assert_eq!(split.owner_share, Money::ZERO);
    }

    #[test]
    fn test_negative_revenue_is_rejected() {
        let mut period = partner_period(0, 0);
        period.revenue = Money::from_major(-100);

        assert!(matches!(
            compute_split(&period),
            Err(FleetError::NegativeRevenue { .. })
        ));
    }

    #[rstest]
    #[case(50_000, 20_000)]
    #[case(41_337, 12_250)]
    #[case(9_999, 1)]
    #[case(100, 99)]
    fn test_partner_split_never_exceeds_profit(#[case] revenue: i64, #[case] expenses: i64) {
        let split = compute_split(&partner_period(revenue, expenses)).unwrap();

        let distributed = split.tax + split.service_charge + split.partner_share + split.owner_share;
        let tolerance = Money::from_decimal(dec!(0.01));
        assert!(distributed <= split.profit + tolerance);
    }

    #[rstest]
    #[case(30)]
    #[case(33)]
    #[case(50)]
    #[case(75)]
    fn test_owner_share_uses_complement_rate(#[case] partner_percent: u32) {
        let rates = SplitRates::partner(
            Rate::from_percentage(4),
            Rate::from_percentage(10),
            Rate::from_percentage(partner_percent),
        );
        let period = rates.period(Money::from_major(50_000), Money::from_major(20_000));

        let split = compute_split(&period).unwrap();
        let remainder = split.profit - split.tax - split.service_charge;

        assert_eq!(split.partner_share, remainder.percentage(rates.partner_share_rate));
        assert_eq!(
            split.owner_share,
            remainder.percentage(rates.partner_share_rate.complement())
        );
    }

    #[test]
    fn test_company_deductions_are_exclusive() {
        for (revenue, expenses) in [(50_000, 20_000), (10_000, 15_000), (0, 0)] {
            let split = compute_split(&company_period(revenue, expenses)).unwrap();
            assert_eq!(split.service_charge, Money::ZERO);
            assert_eq!(split.partner_share, Money::ZERO);
            assert_eq!(split.owner_share, Money::ZERO);
        }
    }
}
