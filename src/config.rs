use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::split::PeriodFinancials;
use crate::types::OwnershipType;

/// deduction rates applied to a vehicle's period profit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRates {
    pub ownership: OwnershipType,
    pub tax_rate: Rate,
    /// applies only to partner vehicles
    pub service_charge_rate: Rate,
    /// applies only to partner vehicles
    pub partner_share_rate: Rate,
}

impl SplitRates {
    /// rates for a company-owned vehicle
    pub fn company(tax_rate: Rate) -> Self {
        Self {
            ownership: OwnershipType::Company,
            tax_rate,
            service_charge_rate: Rate::ZERO,
            partner_share_rate: Rate::ZERO,
        }
    }

    /// rates for a partner-funded vehicle
    pub fn partner(tax_rate: Rate, service_charge_rate: Rate, partner_share_rate: Rate) -> Self {
        Self {
            ownership: OwnershipType::Partner,
            tax_rate,
            service_charge_rate,
            partner_share_rate,
        }
    }

    /// standard company vehicle: 4% tax
    pub fn standard_company() -> Self {
        Self::company(Rate::from_percentage(4))
    }

    /// standard partner vehicle: 4% tax, 10% service charge, 50/50 split
    pub fn standard_partner() -> Self {
        Self::partner(
            Rate::from_percentage(4),
            Rate::from_percentage(10),
            Rate::from_percentage(50),
        )
    }

    /// period financials for these rates
    pub fn period(&self, revenue: Money, expenses: Money) -> PeriodFinancials {
        PeriodFinancials {
            revenue,
            expenses,
            ownership: self.ownership,
            tax_rate: self.tax_rate,
            service_charge_rate: self.service_charge_rate,
            partner_share_rate: self.partner_share_rate,
        }
    }
}

/// payment window around an installment's due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueWindow {
    /// days before the due date from which an installment may be settled
    pub grace_days_before_due: u32,
}

impl Default for DueWindow {
    fn default() -> Self {
        Self {
            grace_days_before_due: 3,
        }
    }
}
