/// serialization support for the persistence layer
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::account::VehicleLoan;
use crate::decimal::{Money, Rate};
use crate::schedule::{AmortizationSchedule, InstallmentEntry};
use crate::types::{ScheduleHealth, VehicleId};

/// serializable view of a vehicle loan for document storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanView {
    pub vehicle_id: VehicleId,
    pub terms: TermsView,
    pub installments: Vec<InstallmentView>,
    pub outstanding_loan: Money,
    pub next_due_month: Option<u32>,
    pub total_paid_to_date: Money,
    pub fully_amortized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermsView {
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure_months: u32,
    pub monthly_installment: Money,
    pub first_installment_date: NaiveDate,
}

/// one payment-grid row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentView {
    pub month: u32,
    pub due_date: NaiveDate,
    pub amount_due: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub outstanding_after: Money,
    pub is_paid: bool,
    pub paid_date: Option<NaiveDate>,
    pub paid_date_synthetic: bool,
}

impl InstallmentView {
    fn from_entry(entry: &InstallmentEntry) -> Self {
        Self {
            month: entry.month,
            due_date: entry.due_date,
            amount_due: entry.amount_due(),
            interest_portion: entry.interest_portion,
            principal_portion: entry.principal_portion,
            outstanding_after: entry.outstanding_after,
            is_paid: entry.is_paid,
            paid_date: entry.paid_date,
            paid_date_synthetic: entry.paid_date_synthetic,
        }
    }
}

impl LoanView {
    pub fn from_loan(loan: &VehicleLoan) -> Self {
        Self::from_schedule(&loan.schedule)
    }

    pub fn from_schedule(schedule: &AmortizationSchedule) -> Self {
        let status = schedule.status();
        Self {
            vehicle_id: schedule.vehicle_id,
            terms: TermsView {
                principal: schedule.terms.principal,
                annual_rate: schedule.terms.annual_rate,
                tenure_months: schedule.terms.tenure_months,
                monthly_installment: schedule.terms.monthly_installment,
                first_installment_date: schedule.terms.first_installment_date,
            },
            installments: schedule.entries.iter().map(InstallmentView::from_entry).collect(),
            outstanding_loan: status.outstanding_loan,
            next_due_month: status.next_due.map(|e| e.month),
            total_paid_to_date: status.total_paid_to_date,
            fully_amortized: matches!(schedule.health(), ScheduleHealth::FullyAmortized),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
