use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{FleetError, Result};
use crate::types::{ScheduleHealth, VehicleId};

/// synthetic paid dates for onboarded history sit this many days before due
const SYNTHETIC_PAID_OFFSET_DAYS: u64 = 2;

/// loan terms fixed when the vehicle is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure_months: u32,
    /// fixed EMI supplied by the financier, not derived from the other terms
    pub monthly_installment: Money,
    pub first_installment_date: NaiveDate,
    /// installments already settled before the vehicle was onboarded
    pub paid_installments_count: u32,
}

impl LoanTerms {
    pub fn validate(&self) -> Result<()> {
        if self.tenure_months == 0 {
            return Err(FleetError::InvalidTenure {
                months: self.tenure_months,
            });
        }
        if self.principal.is_negative() {
            return Err(FleetError::NegativePrincipal {
                principal: self.principal,
            });
        }
        if self.annual_rate.is_negative() {
            return Err(FleetError::NegativeRate {
                rate: self.annual_rate,
            });
        }
        if !self.monthly_installment.is_positive() {
            return Err(FleetError::InvalidInstallment {
                amount: self.monthly_installment,
            });
        }
        Ok(())
    }
}

/// one scheduled installment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentEntry {
    pub month: u32,
    pub due_date: NaiveDate,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub outstanding_after: Money,
    pub is_paid: bool,
    pub paid_date: Option<NaiveDate>,
    /// the paid date was synthesized for onboarded history, not recorded
    pub paid_date_synthetic: bool,
}

impl InstallmentEntry {
    /// amount actually payable for this installment
    pub fn amount_due(&self) -> Money {
        self.interest_portion + self.principal_portion
    }
}

/// amortization schedule for a vehicle loan
///
/// generated once from the loan terms; individual entries are later marked
/// paid one at a time, the schedule itself is never regenerated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub vehicle_id: VehicleId,
    pub terms: LoanTerms,
    pub entries: Vec<InstallmentEntry>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl AmortizationSchedule {
    /// generate the full schedule from loan terms
    pub fn generate(vehicle_id: VehicleId, terms: LoanTerms) -> Result<Self> {
        terms.validate()?;

        let monthly_rate = terms.annual_rate.monthly();
        let mut outstanding = terms.principal;
        let mut entries = Vec::with_capacity(terms.tenure_months as usize);

        for month in 1..=terms.tenure_months {
            let interest_portion =
                Money::from_decimal(outstanding.as_decimal() * monthly_rate.as_decimal());
            // never reduce principal by more than the balance, never by a negative amount
            let principal_portion = (terms.monthly_installment - interest_portion)
                .max(Money::ZERO)
                .min(outstanding);
            outstanding = outstanding - principal_portion;

            let due_date = installment_due_date(terms.first_installment_date, month)?;
            let is_paid = month <= terms.paid_installments_count;
            let paid_date = if is_paid {
                Some(synthetic_paid_date(due_date)?)
            } else {
                None
            };

            entries.push(InstallmentEntry {
                month,
                due_date,
                interest_portion,
                principal_portion,
                outstanding_after: outstanding,
                is_paid,
                paid_date,
                paid_date_synthetic: is_paid,
            });

            // short-loan closure: stop as soon as the balance clears
            if outstanding <= Money::ZERO {
                break;
            }
        }

        let total_interest = entries
            .iter()
            .map(|e| e.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_payment = entries
            .iter()
            .map(|e| e.amount_due())
            .fold(Money::ZERO, |acc, x| acc + x);

        Ok(Self {
            vehicle_id,
            terms,
            entries,
            total_interest,
            total_payment,
        })
    }

    /// get entry for a specific month
    pub fn entry(&self, month: u32) -> Option<&InstallmentEntry> {
        self.entries.iter().find(|e| e.month == month)
    }

    /// record a real payment against a single installment
    pub fn mark_paid(&mut self, month: u32, paid_date: NaiveDate) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.month == month)
            .ok_or(FleetError::InstallmentNotFound { month })?;

        if entry.is_paid {
            return Err(FleetError::InstallmentAlreadyPaid { month });
        }

        entry.is_paid = true;
        entry.paid_date = Some(paid_date);
        entry.paid_date_synthetic = false;
        Ok(())
    }

    /// whether every emitted installment is paid
    pub fn is_settled(&self) -> bool {
        self.entries.iter().all(|e| e.is_paid)
    }

    /// whether generation stopped before the full tenure
    pub fn short_closed(&self) -> bool {
        (self.entries.len() as u32) < self.terms.tenure_months
    }

    /// amortization outcome over the emitted entries
    pub fn health(&self) -> ScheduleHealth {
        match self.entries.last() {
            Some(last) if last.outstanding_after > Money::ZERO => {
                ScheduleHealth::UnamortizedBalance {
                    remaining: last.outstanding_after,
                }
            }
            _ => ScheduleHealth::FullyAmortized,
        }
    }
}

fn installment_due_date(first: NaiveDate, month: u32) -> Result<NaiveDate> {
    first
        .checked_add_months(Months::new(month - 1))
        .ok_or_else(|| FleetError::InvalidDate {
            message: format!("due date overflow at month {month}"),
        })
}

fn synthetic_paid_date(due_date: NaiveDate) -> Result<NaiveDate> {
    due_date
        .checked_sub_days(Days::new(SYNTHETIC_PAID_OFFSET_DAYS))
        .ok_or_else(|| FleetError::InvalidDate {
            message: format!("paid date underflow before {due_date}"),
        })
}
