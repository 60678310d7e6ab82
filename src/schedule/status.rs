use serde::{Deserialize, Serialize};

use super::amortization::{AmortizationSchedule, InstallmentEntry};
use crate::decimal::Money;

/// point-in-time financial summary of a schedule
///
/// derived on demand for display; never cached, never mutates the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanStatus {
    /// principal not yet collected, summed over unpaid installments
    pub outstanding_loan: Money,
    /// earliest unpaid installment, if any remain
    pub next_due: Option<InstallmentEntry>,
    pub total_paid_to_date: Money,
}

impl AmortizationSchedule {
    /// derive the current loan status
    pub fn status(&self) -> LoanStatus {
        let outstanding_loan = self
            .entries
            .iter()
            .filter(|e| !e.is_paid)
            .map(|e| e.principal_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        // entries are chronological, so the first unpaid one is the earliest due
        let next_due = self.entries.iter().find(|e| !e.is_paid).cloned();

        let total_paid_to_date = self
            .entries
            .iter()
            .filter(|e| e.is_paid)
            .map(|e| e.amount_due())
            .fold(Money::ZERO, |acc, x| acc + x);

        LoanStatus {
            outstanding_loan,
            next_due,
            total_paid_to_date,
        }
    }
}
